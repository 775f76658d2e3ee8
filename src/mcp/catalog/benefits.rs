//! `benefits` module: benefit plans, enrollment, ACA, PTO and retirement.

use super::{
    CLIENT_ID, COUNT, DOWNLOAD_ID, EMPLOYEE_ID, Endpoint, OPT_CLIENT_ID, OPTIONS,
    ParamSpec, STARTPAGE,
};

const PLAN_ID: ParamSpec = ParamSpec::text("planId", "Benefit plan identifier");
const EFFECTIVE_DATE: ParamSpec = ParamSpec::text("effectiveDate", "Effective date (YYYY-MM-DD)");
const OPT_EFFECTIVE_DATE: ParamSpec =
    ParamSpec::opt_text("effectiveDate", "Effective date (YYYY-MM-DD)");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "get_benefit_enrollment_status",
        "/benefits/v1/getBenefitEnrollmentStatus",
        "Get the open enrollment status of a client's employees.",
        &[CLIENT_ID, COUNT, STARTPAGE],
    ),
    Endpoint::new(
        "get_401k_match_rules",
        "/benefits/v1/get401kMatchRules",
        "Get the 401(k) employer match rules for a benefit group and retirement plan.",
        &[
            CLIENT_ID,
            ParamSpec::text("benefitGroupId", "Benefit group identifier"),
            ParamSpec::text("retirementPlanId", "Retirement plan identifier"),
        ],
    ),
    Endpoint::new(
        "get_aca_offered_employees",
        "/benefits/v1/getACAOfferedEmployees",
        "Get employees who were offered ACA coverage.",
        &[CLIENT_ID, COUNT, STARTPAGE],
    ),
    Endpoint::new(
        "get_absence_journal",
        "/benefits/v1/getAbsenceJournal",
        "Get absence journal entries by journal id.",
        &[
            CLIENT_ID,
            ParamSpec::list("journalId", "Absence journal identifiers"),
        ],
    ),
    Endpoint::new(
        "get_absence_journal_by_date",
        "/benefits/v1/getAbsenceJournalByDate",
        "Get absence journal entries recorded in a date range.",
        &[
            CLIENT_ID,
            ParamSpec::text("journalDateStart", "Start of the journal date range (YYYY-MM-DD)"),
            ParamSpec::text("journalDateEnd", "End of the journal date range (YYYY-MM-DD)"),
            COUNT,
            STARTPAGE,
        ],
    ),
    Endpoint::new(
        "get_active_benefit_plans",
        "/benefits/v1/getActiveBenefitPlans",
        "Get the benefit plans an employee is actively enrolled in.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_available_benefit_plans",
        "/benefits/v1/getAvailableBenefitPlans",
        "Get the benefit plans available to an employee.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_benefit_adjustments",
        "/benefits/v1/getBenefitAdjustments",
        "Get benefit adjustments recorded for an employee.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_benefit_confirmation_data",
        "/benefits/v1/getBenefitConfirmationData",
        "Get the data of a benefit enrollment confirmation.",
        &[
            CLIENT_ID,
            EMPLOYEE_ID,
            ParamSpec::text("confirmNum", "Confirmation number"),
        ],
    ),
    Endpoint::new(
        "get_benefit_confirmation_list",
        "/benefits/v1/getBenefitConfirmationList",
        "Get the benefit enrollment confirmations of an employee.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_benefit_plan_list",
        "/benefits/v1/getBenefitPlanList",
        "Get the list of all group benefit plans.",
        &[],
    ),
    Endpoint::new(
        "get_benefit_plans",
        "/benefits/v1/getBenefitPlans",
        "Get the benefit plans of an employee.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_benefit_rule",
        "/benefits/v1/getBenefitRule",
        "Get a client's benefit rules as of a date.",
        &[CLIENT_ID, OPT_EFFECTIVE_DATE],
    ),
    Endpoint::new(
        "get_benefit_workflow_grid",
        "/benefits/v1/getBenefitWorkflowGrid",
        "Get the benefit enrollment workflow grid of a client.",
        &[
            CLIENT_ID,
            ParamSpec::opt_text("workflowLevel", "Workflow level filter"),
        ],
    ),
    Endpoint::new(
        "get_benefits_enrollment_trace",
        "/benefits/v1/getBenefitsEnrollmentTrace",
        "Get the enrollment audit trace of an employee.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_client_benefit_plan_setup_details",
        "/benefits/v1/getClientBenefitPlanSetupDetails",
        "Get the setup of a client benefit plan.",
        &[
            CLIENT_ID,
            PLAN_ID,
            ParamSpec::opt_text("planClass", "Plan class"),
        ],
    ),
    Endpoint::new(
        "get_client_benefit_plans",
        "/benefits/v1/getClientBenefitPlans",
        "Get the benefit plans offered by a client.",
        &[CLIENT_ID],
    ),
    Endpoint::new(
        "get_cobra_codes",
        "/benefits/v1/getCobraCodes",
        "Get COBRA qualifying event codes.",
        &[],
    ),
    Endpoint::new(
        "get_cobra_employee",
        "/benefits/v1/getCobraEmployee",
        "Get COBRA participant data for an employee.",
        &[EMPLOYEE_ID, OPT_CLIENT_ID],
    ),
    Endpoint::new(
        "get_dependents",
        "/benefits/v1/getDependents",
        "Get the dependents of an employee.",
        &[
            CLIENT_ID,
            EMPLOYEE_ID,
            ParamSpec::opt_text("onlyActive", "Only return active dependents (true/false)"),
        ],
    ),
    Endpoint::new(
        "get_disability_plan_enrollment_details",
        "/benefits/v1/getDisabilityPlanEnrollmentDetails",
        "Get enrollment details of a disability plan.",
        &[
            ParamSpec::text("groupBenefitPlanId", "Group benefit plan identifier"),
            OPT_EFFECTIVE_DATE,
        ],
    ),
    Endpoint::new(
        "get_eligible_flex_spending_plans",
        "/benefits/v1/getEligibleFlexSpendingPlans",
        "Get the flexible spending plans an employee is eligible for.",
        &[
            CLIENT_ID,
            EMPLOYEE_ID,
            ParamSpec::opt_text("asOfDate", "Eligibility date (YYYY-MM-DD)"),
        ],
    ),
    Endpoint::new(
        "get_eligible_zip_codes",
        "/benefits/v1/getEligibleZipCodes",
        "Get the zip codes eligible for a benefit plan.",
        &[PLAN_ID],
    ),
    Endpoint::new(
        "get_employee_premium",
        "/benefits/v1/getEmployeePremium",
        "Get an employee's benefit premium as of a date.",
        &[
            CLIENT_ID,
            EMPLOYEE_ID,
            EFFECTIVE_DATE,
            ParamSpec::opt_text("planId", "Benefit plan identifier"),
            OPTIONS,
        ],
    ),
    Endpoint::new(
        "get_employee_retirement_summary",
        "/benefits/v1/getEmployeeRetirementSummary",
        "Get an employee's retirement plan summary for a plan year.",
        &[
            CLIENT_ID,
            EMPLOYEE_ID,
            PLAN_ID,
            ParamSpec::text("planYear", "Plan year, e.g. 2024"),
        ],
    ),
    Endpoint::new(
        "get_enroll_input_list",
        "/benefits/v1/getEnrollInputList",
        "Get the inputs needed to enroll an employee in a plan.",
        &[CLIENT_ID, EMPLOYEE_ID, PLAN_ID],
    ),
    Endpoint::new(
        "get_enrollment_plan_details",
        "/benefits/v1/getEnrollmentPlanDetails",
        "Get enrollment details of a plan for an offer type.",
        &[
            PLAN_ID,
            ParamSpec::text("offerType", "Offer type"),
            OPT_EFFECTIVE_DATE,
        ],
    ),
    Endpoint::new(
        "get_fsa_reimbursements",
        "/benefits/v1/getFSAReimbursements",
        "Get flexible spending account reimbursements of an employee.",
        &[
            CLIENT_ID,
            EMPLOYEE_ID,
            ParamSpec::text("planYear", "Plan year, e.g. 2024"),
            ParamSpec::opt_text("accountType", "Account type"),
        ],
    ),
    Endpoint::new(
        "get_flex_plans",
        "/benefits/v1/getFlexPlans",
        "Get the flexible spending plans of an employee.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_group_benefit_plan",
        "/benefits/v1/getGroupBenefitPlan",
        "Get a group benefit plan definition.",
        &[PLAN_ID],
    ),
    Endpoint::new(
        "get_group_benefit_rates",
        "/benefits/v1/getGroupBenefitRates",
        "Get the rates of a group benefit plan.",
        &[
            PLAN_ID,
            ParamSpec::opt_text("date", "Rate date (YYYY-MM-DD)"),
            OPTIONS,
        ],
    ),
    Endpoint::new(
        "get_group_benefit_types",
        "/benefits/v1/getGroupBenefitTypes",
        "Get group benefit type definitions.",
        &[ParamSpec::opt_text("typeCode", "Benefit type code")],
    ),
    Endpoint::new(
        "get_life_event_code_details",
        "/benefits/v1/getLifeEventCodeDetails",
        "Get a client's life event codes.",
        &[
            CLIENT_ID,
            ParamSpec::opt_text("lifeEventCode", "Life event code"),
        ],
    ),
    Endpoint::new(
        "get_monthly_aca_info",
        "/benefits/v1/getMonthlyACAInfo",
        "Get monthly ACA coverage information for employees.",
        &[
            CLIENT_ID,
            ParamSpec::list("employeeId", "Employee identifiers"),
        ],
    ),
    Endpoint::new(
        "get_pto_requests_list",
        "/benefits/v1/getPTORequestsList",
        "Get paid time off requests, optionally filtered by employee and status.",
        &[
            CLIENT_ID,
            ParamSpec::opt_list("employeeId", "Employee identifiers"),
            ParamSpec::opt_list("statuses", "Request statuses to include"),
            ParamSpec::opt_text("ptoStartsAfterDate", "Only requests starting after this date (YYYY-MM-DD)"),
        ],
    ),
    Endpoint::new(
        "get_paid_time_off",
        "/benefits/v1/getPaidTimeOff",
        "Get the paid time off balances of an employee.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_paid_time_off_plans",
        "/benefits/v1/getPaidTimeOffPlans",
        "Get the paid time off plans of a client.",
        &[CLIENT_ID],
    ),
    Endpoint::new(
        "get_plan_year_info",
        "/benefits/v1/getPlanYearInfo",
        "Get plan year information for a plan type.",
        &[
            ParamSpec::text("planType", "Plan type"),
            ParamSpec::opt_text("planYear", "Plan year, e.g. 2024"),
        ],
    ),
    Endpoint::new(
        "get_pto_absence_codes",
        "/benefits/v1/getPTOAbsenceCodes",
        "Get the PTO absence codes of a client.",
        &[
            CLIENT_ID,
            ParamSpec::opt_text("absenceCode", "Absence code"),
        ],
    ),
    Endpoint::new(
        "get_pto_auto_enroll_rules",
        "/benefits/v1/getPTOAutoEnrollRules",
        "Get the PTO auto-enrollment rules of a client.",
        &[CLIENT_ID],
    ),
    Endpoint::new(
        "get_pto_classes",
        "/benefits/v1/getPTOClasses",
        "Get the PTO classes of a client.",
        &[CLIENT_ID],
    ),
    Endpoint::new(
        "get_pto_plan_details",
        "/benefits/v1/getPTOPlanDetails",
        "Get the details of a PTO plan.",
        &[
            CLIENT_ID,
            ParamSpec::text("ptoPlanId", "PTO plan identifier"),
        ],
    ),
    Endpoint::new(
        "get_pto_register_types",
        "/benefits/v1/getPTORegisterTypes",
        "Get the PTO register types of a client.",
        &[
            CLIENT_ID,
            ParamSpec::opt_text("ptoTypeCode", "PTO register type code"),
        ],
    ),
    Endpoint::new(
        "get_retirement_loans",
        "/benefits/v1/getRetirementLoans",
        "Get the retirement plan loans of an employee.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_retirement_plan",
        "/benefits/v1/getRetirementPlan",
        "Get an employee's retirement plan enrollment.",
        &[
            CLIENT_ID,
            EMPLOYEE_ID,
            OPT_EFFECTIVE_DATE,
            ParamSpec::opt_flag("isActive", "Only return active enrollments"),
        ],
    ),
    Endpoint::new(
        "get_section125_plans",
        "/benefits/v1/getSection125Plans",
        "Get Section 125 cafeteria plans.",
        &[
            ParamSpec::opt_text("planType", "Plan type"),
            COUNT,
            STARTPAGE,
        ],
    ),
    Endpoint::new(
        "get_retirement_census_export",
        "/benefits/v1/getRetirementCensusExport",
        "Prepare or poll a retirement plan census export.",
        &[
            ParamSpec::text("reportFormat", "Export format"),
            PLAN_ID,
            OPT_CLIENT_ID,
            DOWNLOAD_ID,
        ],
    ),
    Endpoint::new(
        "get_aca_large_employer",
        "/benefits/v1/getACALargeEmployer",
        "Get ACA applicable large employer information.",
        &[CLIENT_ID, COUNT, STARTPAGE],
    ),
];
