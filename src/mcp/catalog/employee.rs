//! `employee` module: employee records, tax forms and history.

use super::{CLIENT_ID, EMPLOYEE_ID, Endpoint, OPT_EMPLOYEE_ID, OPTIONS, ParamSpec, YEAR};

const EMPLOYEE_IDS: ParamSpec = ParamSpec::list("employeeId", "Employee identifiers");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "get_employee_list",
        "/employee/v1/getEmployeeList",
        "Get a list of employees for a client, optionally filtered by status and type.",
        &[
            CLIENT_ID,
            ParamSpec::opt_text("statusClass", "Employee status (A=Active, L=Leave, T=Terminated)"),
            ParamSpec::opt_text("typeClass", "Employee type (F=Full-time, P=Part-time)"),
        ],
    ),
    Endpoint::new(
        "get_employee",
        "/employee/v1/getEmployee",
        "Get detailed information for one or more employees.",
        &[
            CLIENT_ID,
            ParamSpec::text("employeeId", "Employee identifier, or a comma-separated list"),
            ParamSpec::opt_text("options", "Data sections to include (Person, Client, Compensation, ...)"),
        ],
    ),
    Endpoint::new(
        "download_1095c",
        "/employee/v1/download1095C",
        "Get download links for employees' 1095-C forms for a year.",
        &[CLIENT_ID, EMPLOYEE_IDS, YEAR],
    ),
    Endpoint::new(
        "download_w2",
        "/employee/v1/downloadW2",
        "Get download links for employees' W-2 forms for a year.",
        &[CLIENT_ID, EMPLOYEE_IDS, YEAR],
    ),
    Endpoint::new(
        "get_1095c_years",
        "/employee/v1/get1095CYears",
        "Get the years an employee has 1095-C forms for.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_1099_years",
        "/employee/v1/get1099Years",
        "Get the years an employee has 1099 forms for.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_ach_deductions",
        "/employee/v1/getACHDeductions",
        "Get an employee's ACH deductions.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_address_info",
        "/employee/v1/getAddressInfo",
        "Get an employee's addresses.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_employee_events",
        "/employee/v1/getEmployeeEvents",
        "Get an employee's events.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_employee_ssn_list",
        "/employee/v1/getEmployeeSSNList",
        "Get a client's employees keyed by SSN.",
        &[CLIENT_ID],
    ),
    Endpoint::new(
        "get_employees_ready_for_everify",
        "/employee/v1/getEmployeesReadyForEverify",
        "Get employees ready to be submitted to E-Verify.",
        &[],
    ),
    Endpoint::new(
        "get_employers_info",
        "/employee/v1/getEmployersInfo",
        "Get the employers an employee is associated with.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_everify_status",
        "/employee/v1/getEverifyStatus",
        "Get an employee's E-Verify case status.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_future_ee_change",
        "/employee/v1/getFutureEeChange",
        "Get a scheduled future change to an employee record.",
        &[ParamSpec::text("eventObjectId", "Future change event identifier")],
    ),
    Endpoint::new(
        "get_garnishment_employee",
        "/employee/v1/getGarnishmentEmployee",
        "Get the employees with garnishments for a client.",
        &[CLIENT_ID, ParamSpec::opt_text("garnishmentId", "Garnishment identifier")],
    ),
    Endpoint::new(
        "get_history",
        "/employee/v1/getHistory",
        "Get an employee's change history of the given types.",
        &[
            CLIENT_ID,
            EMPLOYEE_ID,
            ParamSpec::list("type", "History types, e.g. P (pay), S (status), J (job)"),
        ],
    ),
    Endpoint::new(
        "get_i9_data",
        "/employee/v1/getI9Data",
        "Get an employee's I-9 data.",
        &[CLIENT_ID, EMPLOYEE_ID, OPTIONS],
    ),
    Endpoint::new(
        "get_leave_requests",
        "/employee/v1/getLeaveRequests",
        "Get leave of absence requests of a client.",
        &[CLIENT_ID, ParamSpec::opt_text("leaveId", "Leave request identifier")],
    ),
    Endpoint::new(
        "get_life_event",
        "/employee/v1/getLifeEvent",
        "Get an employee's life events.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_osha",
        "/employee/v1/getOSHA",
        "Get OSHA incident cases of a client.",
        &[CLIENT_ID, ParamSpec::opt_text("caseNumber", "OSHA case number")],
    ),
    Endpoint::new(
        "get_pay_card_employees",
        "/employee/v1/getPayCardEmployees",
        "Get employees paid by pay card.",
        &[CLIENT_ID, ParamSpec::opt_text("transitNumber", "Pay card transit number")],
    ),
    Endpoint::new(
        "get_pay_rate_history",
        "/employee/v1/getPayRateHistory",
        "Get an employee's pay rate history.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_pending_approval",
        "/employee/v1/getPendingApproval",
        "Get employee changes pending approval.",
        &[
            CLIENT_ID,
            ParamSpec::text("type", "Approval type"),
            OPT_EMPLOYEE_ID,
        ],
    ),
    Endpoint::new(
        "get_position_rate",
        "/employee/v1/getPositionRate",
        "Get an employee's position rates.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_scheduled_deductions",
        "/employee/v1/getScheduledDeductions",
        "Get an employee's scheduled deductions.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_status_history_for_adjustment",
        "/employee/v1/getStatusHistoryForAdjustment",
        "Get an employee's status history for benefit adjustments.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_termination_date_range",
        "/employee/v1/getTerminationDateRange",
        "Get the allowed termination date range of an employee.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_w2_years",
        "/employee/v1/getW2Years",
        "Get the years an employee has W-2 forms for.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "reprint_1099",
        "/employee/v1/reprint1099",
        "Get reprint links for employees' 1099 forms for a year.",
        &[CLIENT_ID, EMPLOYEE_IDS, YEAR],
    ),
    Endpoint::new(
        "reprint_w2c",
        "/employee/v1/reprintW2C",
        "Get reprint links for an employee's W-2c forms for a year.",
        &[CLIENT_ID, EMPLOYEE_ID, YEAR],
    ),
];
