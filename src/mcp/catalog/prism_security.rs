//! `prismSecurity` module: users, roles and data access.

use super::{
    CLIENT_ID, COUNT, EMPLOYEE_ID, Endpoint, OPT_CLIENT_ID, OPT_EMPLOYEE_ID, PRISM_USER_ID,
    ParamSpec, STARTPAGE,
};

const USER_TYPE: ParamSpec = ParamSpec::opt_text("userType", "User type filter");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "get_allowed_employee_list",
        "/prismSecurity/v1/getAllowedEmployeeList",
        "Get the employees a PrismHR user may access, with optional filters.",
        &[
            PRISM_USER_ID,
            CLIENT_ID,
            OPT_EMPLOYEE_ID,
            ParamSpec::opt_text("lastName", "Last name filter"),
            ParamSpec::opt_text("firstName", "First name filter"),
            ParamSpec::opt_text("employeeStatusClass", "Employee status class filter"),
            STARTPAGE,
            COUNT,
        ],
    ),
    Endpoint::new(
        "get_client_list_security",
        "/prismSecurity/v1/getClientList",
        "Get the clients a PrismHR user may access.",
        &[PRISM_USER_ID],
    ),
    Endpoint::new(
        "get_employee_client_list",
        "/prismSecurity/v1/getEmployeeClientList",
        "Get the clients an employee user belongs to.",
        &[PRISM_USER_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_employee_list_security",
        "/prismSecurity/v1/getEmployeeList",
        "Get the employees of a client a PrismHR user may access.",
        &[PRISM_USER_ID, CLIENT_ID],
    ),
    Endpoint::new(
        "get_entity_access",
        "/prismSecurity/v1/getEntityAccess",
        "Get the entity level access a PrismHR user has within a client.",
        &[PRISM_USER_ID, CLIENT_ID],
    ),
    Endpoint::new(
        "get_manager_list",
        "/prismSecurity/v1/getManagerList",
        "Get the managers of a client, optionally of one employee.",
        &[CLIENT_ID, OPT_EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_user_data_security",
        "/prismSecurity/v1/getUserDataSecurity",
        "Get the data security settings of a PrismHR user within a client.",
        &[CLIENT_ID, PRISM_USER_ID],
    ),
    Endpoint::new(
        "get_user_details",
        "/prismSecurity/v1/getUserDetails",
        "Get the details of a PrismHR user.",
        &[PRISM_USER_ID],
    ),
    Endpoint::new(
        "get_user_list_security",
        "/prismSecurity/v1/getUserList",
        "Get the PrismHR users of a client.",
        &[CLIENT_ID, USER_TYPE],
    ),
    Endpoint::new(
        "get_user_role_details",
        "/prismSecurity/v1/getUserRoleDetails",
        "Get the details of a user role.",
        &[ParamSpec::text("roleId", "Role identifier")],
    ),
    Endpoint::new(
        "get_user_roles_list",
        "/prismSecurity/v1/getUserRolesList",
        "Get all user roles.",
        &[],
    ),
    Endpoint::new(
        "is_client_allowed",
        "/prismSecurity/v1/isClientAllowed",
        "Check whether a PrismHR user may access a client.",
        &[PRISM_USER_ID, CLIENT_ID],
    ),
    Endpoint::new(
        "is_employee_allowed",
        "/prismSecurity/v1/isEmployeeAllowed",
        "Check whether a PrismHR user may access an employee.",
        &[PRISM_USER_ID, CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_user_list_v2",
        "/prismSecurity/v2/getUserList",
        "Get PrismHR users, paginated (version 2).",
        &[OPT_CLIENT_ID, USER_TYPE, COUNT, STARTPAGE],
    ),
];
