//! `codeFiles` module: system-wide and client code tables.

use super::{CLIENT_ID, COUNT, Endpoint, ParamSpec, STARTPAGE};

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "get_billing_code",
        "/codeFiles/v1/getBillingCode",
        "Get billing codes.",
        &[
            ParamSpec::opt_text("billingCode", "Billing code"),
            ParamSpec::opt_text("onlyActive", "Only return active codes (true/false)"),
            COUNT,
            STARTPAGE,
        ],
    ),
    Endpoint::new(
        "get_client_category_list",
        "/codeFiles/v1/getClientCategoryList",
        "Get client categories.",
        &[
            ParamSpec::opt_text("clientCategoryId", "Client category identifier"),
            COUNT,
            STARTPAGE,
        ],
    ),
    Endpoint::new(
        "get_contact_type_list",
        "/codeFiles/v1/getContactTypeList",
        "Get contact types.",
        &[],
    ),
    Endpoint::new(
        "get_course_codes_list",
        "/codeFiles/v1/getCourseCodesList",
        "Get a client's training course codes.",
        &[CLIENT_ID, ParamSpec::opt_text("courseCodeId", "Course code")],
    ),
    Endpoint::new(
        "get_deduction_code_details",
        "/codeFiles/v1/getDeductionCodeDetails",
        "Get the definition of a deduction code.",
        &[ParamSpec::text("deductionCode", "Deduction code")],
    ),
    Endpoint::new(
        "get_department_code",
        "/codeFiles/v1/getDepartmentCode",
        "Get a client's department codes.",
        &[CLIENT_ID, ParamSpec::opt_text("departmentCode", "Department code")],
    ),
    Endpoint::new(
        "get_division_code",
        "/codeFiles/v1/getDivisionCode",
        "Get a client's division codes.",
        &[CLIENT_ID, ParamSpec::opt_text("divisionCode", "Division code")],
    ),
    Endpoint::new(
        "get_eeo_codes",
        "/codeFiles/v1/getEEOCodes",
        "Get EEO codes of a given type.",
        &[
            ParamSpec::text("eeoCodeType", "EEO code type"),
            ParamSpec::opt_text("eeoCode", "EEO code"),
        ],
    ),
    Endpoint::new(
        "get_event_codes",
        "/codeFiles/v1/getEventCodes",
        "Get a client's event codes.",
        &[CLIENT_ID],
    ),
    Endpoint::new(
        "get_holiday_code_list",
        "/codeFiles/v1/getHolidayCodeList",
        "Get holiday codes, optionally for one year.",
        &[ParamSpec::opt_text("year", "Four digit year, e.g. 2024")],
    ),
    Endpoint::new(
        "get_naics_code_list",
        "/codeFiles/v1/getNAICSCodeList",
        "Get NAICS industry codes.",
        &[ParamSpec::opt_text("naicsCode", "NAICS code"), COUNT, STARTPAGE],
    ),
    Endpoint::new(
        "get_pay_grades",
        "/codeFiles/v1/getPayGrades",
        "Get a client's pay grades.",
        &[CLIENT_ID, ParamSpec::opt_text("payGradeCode", "Pay grade code")],
    ),
    Endpoint::new(
        "get_paycode_details",
        "/codeFiles/v1/getPaycodeDetails",
        "Get the definition of a pay code.",
        &[ParamSpec::text("paycodeId", "Pay code")],
    ),
    Endpoint::new(
        "get_position_classifications",
        "/codeFiles/v1/getPositionClassifications",
        "Get position classifications.",
        &[ParamSpec::opt_text("positionClass", "Position class")],
    ),
    Endpoint::new(
        "get_position_code",
        "/codeFiles/v1/getPositionCode",
        "Get a client's position codes.",
        &[CLIENT_ID, ParamSpec::opt_text("positionCode", "Position code")],
    ),
    Endpoint::new(
        "get_project_code",
        "/codeFiles/v1/getProjectCode",
        "Get a client's project codes.",
        &[CLIENT_ID, ParamSpec::opt_text("projectCode", "Project code")],
    ),
    Endpoint::new(
        "get_project_phase",
        "/codeFiles/v1/getProjectPhase",
        "Get the phases of a project class.",
        &[
            CLIENT_ID,
            ParamSpec::text("classCode", "Project class code"),
            ParamSpec::opt_text("projectPhaseCode", "Project phase code"),
        ],
    ),
    Endpoint::new(
        "get_rating_code",
        "/codeFiles/v1/getRatingCode",
        "Get a client's performance rating codes.",
        &[CLIENT_ID, ParamSpec::opt_text("ratingCodeId", "Rating code")],
    ),
    Endpoint::new(
        "get_shift_code",
        "/codeFiles/v1/getShiftCode",
        "Get a client's shift codes.",
        &[CLIENT_ID, ParamSpec::opt_text("shiftCode", "Shift code")],
    ),
    Endpoint::new(
        "get_skill_code",
        "/codeFiles/v1/getSkillCode",
        "Get a client's skill codes.",
        &[CLIENT_ID, ParamSpec::opt_text("skillCode", "Skill code")],
    ),
    Endpoint::new(
        "get_user_defined_fields",
        "/codeFiles/v1/getUserDefinedFields",
        "Get the user defined field definitions of a client.",
        &[
            CLIENT_ID,
            ParamSpec::text("fieldType", "Field owner type"),
            ParamSpec::opt_list("typeId", "Field type identifiers"),
        ],
    ),
];
