//! `clientMaster` module: client setup, billing rules, locations and contacts.

use super::{CLIENT_ID, COUNT, Endpoint, OPT_CLIENT_ID, OPTIONS, ParamSpec, STARTPAGE};

const STATE_CODE: ParamSpec = ParamSpec::opt_text("stateCode", "Two letter state code");
const LOCATION_CODE: ParamSpec = ParamSpec::opt_text("locationCode", "Work location code");
const EFFECTIVE_DATE: ParamSpec =
    ParamSpec::opt_text("effectiveDate", "Effective date (YYYY-MM-DD)");
const LOCATION_ID: ParamSpec = ParamSpec::opt_text("locationId", "Work location identifier");
const USER_ID: ParamSpec = ParamSpec::text("userId", "Portal user identifier");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "get_active_employee_count_by_entity",
        "/clientMaster/v1/getActiveEmployeeCountByEntity",
        "Count a client's active employees grouped by an entity such as department or location.",
        &[
            CLIENT_ID,
            ParamSpec::text("entityType", "Entity type, e.g. DEPARTMENT, DIVISION, LOCATION"),
            ParamSpec::opt_flag("includeObsolete", "Include obsolete entities"),
        ],
    ),
    Endpoint::new(
        "get_all_prism_client_contacts",
        "/clientMaster/v1/getAllPrismClientContacts",
        "Get every contact recorded for a client.",
        &[CLIENT_ID],
    ),
    Endpoint::new(
        "get_backup_assignments",
        "/clientMaster/v1/getBackupAssignments",
        "Get the backup service rep assignments of a client.",
        &[CLIENT_ID],
    ),
    Endpoint::new(
        "get_benefit_group",
        "/clientMaster/v1/getBenefitGroup",
        "Get a client's benefit groups, optionally only the given ones.",
        &[
            CLIENT_ID,
            ParamSpec::opt_list("groupId", "Benefit group identifiers"),
        ],
    ),
    Endpoint::new(
        "get_bill_pending",
        "/clientMaster/v1/getBillPending",
        "Get pending bills of a client.",
        &[
            CLIENT_ID,
            ParamSpec::opt_text("status", "Bill status filter"),
            ParamSpec::opt_text("startBillDate", "Start of the bill date range (YYYY-MM-DD)"),
            ParamSpec::opt_text("endBillDate", "End of the bill date range (YYYY-MM-DD)"),
        ],
    ),
    Endpoint::new(
        "get_bundled_billing_rule",
        "/clientMaster/v1/getBundledBillingRule",
        "Get a client's bundled billing rules.",
        &[
            CLIENT_ID,
            ParamSpec::opt_text("wcCode", "Workers' compensation code"),
            ParamSpec::opt_text("state", "Two letter state code"),
        ],
    ),
    Endpoint::new(
        "get_client_billing_bank_account",
        "/clientMaster/v1/getClientBillingBankAccount",
        "Get the bank account a client is billed from.",
        &[CLIENT_ID],
    ),
    Endpoint::new(
        "get_client_codes",
        "/clientMaster/v1/getClientCodes",
        "Get the code tables defined for a client.",
        &[
            CLIENT_ID,
            OPTIONS,
            ParamSpec::opt_flag("excludeObsolete", "Leave out obsolete codes"),
        ],
    ),
    Endpoint::new(
        "get_client_events",
        "/clientMaster/v1/getClientEvents",
        "Get a client's events in a date range.",
        &[
            CLIENT_ID,
            ParamSpec::opt_text("fromDate", "Start of the date range (YYYY-MM-DD)"),
            ParamSpec::opt_text("thruDate", "End of the date range (YYYY-MM-DD)"),
        ],
    ),
    Endpoint::new(
        "get_client_list",
        "/clientMaster/v1/getClientList",
        "Get the list of clients.",
        &[ParamSpec::opt_flag("inActive", "Include inactive clients")],
    ),
    Endpoint::new(
        "get_client_location_details",
        "/clientMaster/v1/getClientLocationDetails",
        "Get a client's work locations.",
        &[CLIENT_ID, LOCATION_ID],
    ),
    Endpoint::new(
        "get_client_master",
        "/clientMaster/v1/getClientMaster",
        "Get a client's master record.",
        &[CLIENT_ID],
    ),
    Endpoint::new(
        "get_client_ownership",
        "/clientMaster/v1/getClientOwnership",
        "Get the ownership details of a client.",
        &[CLIENT_ID],
    ),
    Endpoint::new(
        "get_doc_expirations",
        "/clientMaster/v1/getDocExpirations",
        "Get employee documents that are expiring soon.",
        &[
            CLIENT_ID,
            ParamSpec::opt_text("docTypes", "Comma-separated document types"),
            ParamSpec::opt_text("daysOut", "Look-ahead window in days"),
            ParamSpec::opt_text("employeeId", "Employee identifier (optional filter)"),
        ],
    ),
    Endpoint::new(
        "get_employee_list_by_entity",
        "/clientMaster/v1/getEmployeeListByEntity",
        "Get the employees assigned to an entity such as a department or location.",
        &[
            CLIENT_ID,
            ParamSpec::text("entityType", "Entity type, e.g. DEPARTMENT, DIVISION, LOCATION"),
            ParamSpec::text("entityId", "Entity identifier"),
            ParamSpec::opt_text("statusClass", "Employee status class (A=Active, L=Leave, T=Terminated)"),
        ],
    ),
    Endpoint::new(
        "get_employees_in_pay_group",
        "/clientMaster/v1/getEmployeesInPayGroup",
        "Get the employees in a pay group.",
        &[CLIENT_ID, ParamSpec::text("payGroup", "Pay group code")],
    ),
    Endpoint::new(
        "get_geo_locations",
        "/clientMaster/v1/getGeoLocations",
        "Get the geographic locations (city, county, state) of a zip code.",
        &[ParamSpec::text("zipCode", "Zip code")],
    ),
    Endpoint::new(
        "get_labor_allocations",
        "/clientMaster/v1/getLaborAllocations",
        "Get a client's labor allocation templates.",
        &[
            CLIENT_ID,
            ParamSpec::opt_text("templateId", "Labor allocation template identifier"),
        ],
    ),
    Endpoint::new(
        "get_labor_union_details",
        "/clientMaster/v1/getLaborUnionDetails",
        "Get a client's labor unions.",
        &[CLIENT_ID, ParamSpec::opt_text("unionCode", "Union code")],
    ),
    Endpoint::new(
        "get_message_list",
        "/clientMaster/v1/getMessageList",
        "Get the portal messages of a user.",
        &[
            USER_ID,
            ParamSpec::opt_text("fromDate", "Start of the date range (YYYY-MM-DD)"),
            ParamSpec::opt_text("toDate", "End of the date range (YYYY-MM-DD)"),
            ParamSpec::opt_flag("unReadOnly", "Only return unread messages"),
        ],
    ),
    Endpoint::new(
        "get_messages",
        "/clientMaster/v1/getMessages",
        "Get the content of portal messages.",
        &[USER_ID, ParamSpec::list("messageId", "Message identifiers")],
    ),
    Endpoint::new(
        "get_osha_300a_stats",
        "/clientMaster/v1/getOSHA300AStats",
        "Get OSHA 300A summary statistics of a client for a year.",
        &[
            CLIENT_ID,
            ParamSpec::text("reportYear", "Report year, e.g. 2024"),
            LOCATION_CODE,
        ],
    ),
    Endpoint::new(
        "get_pay_day_rules",
        "/clientMaster/v1/getPayDayRules",
        "Get the pay day rules of a client.",
        &[CLIENT_ID],
    ),
    Endpoint::new(
        "get_pay_group_details",
        "/clientMaster/v1/getPayGroupDetails",
        "Get a client's pay groups.",
        &[
            CLIENT_ID,
            ParamSpec::opt_text("payGroupCode", "Pay group code"),
        ],
    ),
    Endpoint::new(
        "get_payroll_schedule",
        "/clientMaster/v1/getPayrollSchedule",
        "Get the payroll schedule of a client.",
        &[CLIENT_ID],
    ),
    Endpoint::new(
        "get_prism_client_contact",
        "/clientMaster/v1/getPrismClientContact",
        "Get one client contact.",
        &[CLIENT_ID, ParamSpec::text("contactId", "Contact identifier")],
    ),
    Endpoint::new(
        "get_retirement_plan_list",
        "/clientMaster/v1/getRetirementPlanList",
        "Get the retirement plans of a client.",
        &[CLIENT_ID, COUNT, STARTPAGE],
    ),
    Endpoint::new(
        "get_suta_billing_rates",
        "/clientMaster/v1/getSutaBillingRates",
        "Get a client's SUTA billing rates.",
        &[CLIENT_ID, STATE_CODE, EFFECTIVE_DATE, LOCATION_CODE],
    ),
    Endpoint::new(
        "get_suta_rates",
        "/clientMaster/v1/getSutaRates",
        "Get SUTA tax rates for a state.",
        &[
            ParamSpec::text("state", "Two letter state code"),
            OPT_CLIENT_ID,
            EFFECTIVE_DATE,
            COUNT,
            STARTPAGE,
        ],
    ),
    Endpoint::new(
        "get_unbundled_billing_rules",
        "/clientMaster/v1/getUnbundledBillingRules",
        "Get a client's unbundled billing rules.",
        &[
            CLIENT_ID,
            ParamSpec::opt_text("ruleId", "Billing rule identifier"),
            COUNT,
            STARTPAGE,
        ],
    ),
    Endpoint::new(
        "get_wc_accrual_modifiers",
        "/clientMaster/v1/getWCAccrualModifiers",
        "Get a client's workers' compensation accrual modifiers.",
        &[CLIENT_ID, STATE_CODE, EFFECTIVE_DATE],
    ),
    Endpoint::new(
        "get_wc_billing_modifiers",
        "/clientMaster/v1/getWCBillingModifiers",
        "Get a client's workers' compensation billing modifiers.",
        &[
            CLIENT_ID,
            STATE_CODE,
            LOCATION_CODE,
            ParamSpec::opt_text("existingEffectiveDate", "Effective date of the existing modifier (YYYY-MM-DD)"),
        ],
    ),
    Endpoint::new(
        "get_client_location_details_v2",
        "/clientMaster/v2/getClientLocationDetails",
        "Get a client's work locations (version 2 response shape).",
        &[CLIENT_ID, LOCATION_ID],
    ),
    Endpoint::new(
        "get_suta_billing_rates_v2",
        "/clientMaster/v2/getSutaBillingRates",
        "Get a client's SUTA billing rates, paginated (version 2).",
        &[
            CLIENT_ID,
            STATE_CODE,
            LOCATION_CODE,
            EFFECTIVE_DATE,
            COUNT,
            STARTPAGE,
        ],
    ),
];
