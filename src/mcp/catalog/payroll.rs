//! `payroll` module: batches, vouchers, billing and year-to-date values.

use super::{
    BATCH_ID, CLIENT_ID, COUNT, DOWNLOAD_ID, EMPLOYEE_ID, Endpoint, OPT_EMPLOYEE_ID, OPTIONS,
    PAY_DATE_END, PAY_DATE_START, ParamSpec, STARTPAGE, YEAR,
};

const START_DATE: ParamSpec = ParamSpec::text("startDate", "Start of the date range (YYYY-MM-DD)");
const END_DATE: ParamSpec = ParamSpec::text("endDate", "End of the date range (YYYY-MM-DD)");
const AS_OF_DATE: ParamSpec = ParamSpec::opt_text("asOfDate", "As-of date (YYYY-MM-DD)");
const BILL_TYPE: ParamSpec = ParamSpec::opt_list("billType", "Bill types to include");
const VOUCHER_OPTIONS: ParamSpec =
    ParamSpec::opt_list("options", "Additional voucher data options, e.g. Initialized, BillSort");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "check_initialization_status",
        "/payroll/v1/checkInitializationStatus",
        "Check whether a payroll batch has finished initializing.",
        &[CLIENT_ID, BATCH_ID],
    ),
    Endpoint::new(
        "get_approval_summary",
        "/payroll/v1/getApprovalSummary",
        "Get the approval summary of a payroll batch.",
        &[CLIENT_ID, BATCH_ID, OPTIONS],
    ),
    Endpoint::new(
        "get_batch_info",
        "/payroll/v1/getBatchInfo",
        "Get information about a payroll batch.",
        &[CLIENT_ID, BATCH_ID],
    ),
    Endpoint::new(
        "get_batch_list_by_date",
        "/payroll/v1/getBatchListByDate",
        "Get a client's payroll batches in a date range.",
        &[
            CLIENT_ID,
            START_DATE,
            END_DATE,
            ParamSpec::text("dateType", "Date the range applies to, e.g. PAY or POST"),
            ParamSpec::opt_text("payGroup", "Pay group code"),
        ],
    ),
    Endpoint::new(
        "get_batch_list_for_approval",
        "/payroll/v1/getBatchListForApproval",
        "Get a client's payroll batches awaiting approval.",
        &[CLIENT_ID],
    ),
    Endpoint::new(
        "get_batch_list_for_initialization",
        "/payroll/v1/getBatchListForInitialization",
        "Get a client's payroll batches ready for initialization.",
        &[CLIENT_ID],
    ),
    Endpoint::new(
        "get_batch_payments",
        "/payroll/v1/getBatchPayments",
        "Get the payments of a payroll.",
        &[CLIENT_ID, ParamSpec::text("payrollNumber", "Payroll number")],
    ),
    Endpoint::new(
        "get_batch_status",
        "/payroll/v1/getBatchStatus",
        "Get the status of one or more payroll batches.",
        &[CLIENT_ID, ParamSpec::list("batchIds", "Payroll batch identifiers")],
    ),
    Endpoint::new(
        "get_billing_code_totals_by_pay_group",
        "/payroll/v1/getBillingCodeTotalsByPayGroup",
        "Get billing code totals of a batch grouped by pay group.",
        &[CLIENT_ID, BATCH_ID, OPTIONS],
    ),
    Endpoint::new(
        "get_billing_code_totals_for_batch",
        "/payroll/v1/getBillingCodeTotalsForBatch",
        "Get billing code totals of a batch.",
        &[CLIENT_ID, BATCH_ID],
    ),
    Endpoint::new(
        "get_billing_code_totals_with_costs",
        "/payroll/v1/getBillingCodeTotalsWithCosts",
        "Get billing code totals of a batch including costs.",
        &[CLIENT_ID, BATCH_ID],
    ),
    Endpoint::new(
        "get_billing_rule_unbundled",
        "/payroll/v1/getBillingRuleUnbundled",
        "Get an unbundled billing rule.",
        &[CLIENT_ID, ParamSpec::text("billingRuleNum", "Billing rule number")],
    ),
    Endpoint::new(
        "get_billing_vouchers",
        "/payroll/v1/getBillingVouchers",
        "Get billing vouchers for a pay date range.",
        &[
            CLIENT_ID,
            PAY_DATE_START,
            PAY_DATE_END,
            BILL_TYPE,
            COUNT,
            STARTPAGE,
            VOUCHER_OPTIONS,
        ],
    ),
    Endpoint::new(
        "get_billing_vouchers_by_batch",
        "/payroll/v1/getBillingVouchersByBatch",
        "Get billing vouchers of a payroll batch.",
        &[
            CLIENT_ID,
            BATCH_ID,
            BILL_TYPE,
            COUNT,
            STARTPAGE,
            VOUCHER_OPTIONS,
        ],
    ),
    Endpoint::new(
        "get_bulk_year_to_date_values",
        "/payroll/v1/getBulkYearToDateValues",
        "Prepare or poll year-to-date values for all employees of a client.",
        &[CLIENT_ID, AS_OF_DATE, DOWNLOAD_ID],
    ),
    Endpoint::new(
        "get_clients_with_vouchers",
        "/payroll/v1/getClientsWithVouchers",
        "Get clients that have vouchers in a pay date range.",
        &[PAY_DATE_START, PAY_DATE_END],
    ),
    Endpoint::new(
        "get_employee_401k_contributions_by_date",
        "/payroll/v1/getEmployee401KContributionsByDate",
        "Get employees' 401(k) contributions in a date range.",
        &[
            CLIENT_ID,
            START_DATE,
            END_DATE,
            ParamSpec::opt_text("retirementPlanId", "Retirement plan identifier"),
            OPTIONS,
        ],
    ),
    Endpoint::new(
        "get_employee_for_batch",
        "/payroll/v1/getEmployeeForBatch",
        "Get the employees included in a payroll batch.",
        &[CLIENT_ID, BATCH_ID],
    ),
    Endpoint::new(
        "get_employee_override_rates",
        "/payroll/v1/getEmployeeOverrideRates",
        "Get an employee's override rates.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_employee_payroll_summary",
        "/payroll/v1/getEmployeePayrollSummary",
        "Get an employee's payroll summary for a year.",
        &[CLIENT_ID, EMPLOYEE_ID, YEAR],
    ),
    Endpoint::new(
        "get_external_pto_balance",
        "/payroll/v1/getExternalPtoBalance",
        "Get externally managed PTO balances for a batch.",
        &[
            CLIENT_ID,
            BATCH_ID,
            ParamSpec::opt_text("includeHistory", "Include balance history (true/false)"),
        ],
    ),
    Endpoint::new(
        "get_manual_checks",
        "/payroll/v1/getManualChecks",
        "Get a client's manual checks.",
        &[
            CLIENT_ID,
            ParamSpec::opt_text("reference", "Check reference"),
            OPT_EMPLOYEE_ID,
            ParamSpec::opt_text("checkDate", "Check date (YYYY-MM-DD)"),
            ParamSpec::opt_text("checkStatus", "Check status"),
        ],
    ),
    Endpoint::new(
        "get_payroll_approval",
        "/payroll/v1/getPayrollApproval",
        "Get the approval status of a payroll batch.",
        &[CLIENT_ID, BATCH_ID],
    ),
    Endpoint::new(
        "get_payroll_batch_with_options",
        "/payroll/v1/getPayrollBatchWithOptions",
        "Get a payroll batch with its options.",
        &[CLIENT_ID, BATCH_ID, OPTIONS],
    ),
    Endpoint::new(
        "get_payroll_notes",
        "/payroll/v1/getPayrollNotes",
        "Get a client's payroll notes.",
        &[CLIENT_ID],
    ),
    Endpoint::new(
        "get_payroll_schedule_by_code",
        "/payroll/v1/getPayrollSchedule",
        "Get a payroll schedule by schedule code.",
        &[ParamSpec::text("scheduleCode", "Payroll schedule code")],
    ),
    Endpoint::new(
        "get_payroll_schedule_codes",
        "/payroll/v1/getPayrollScheduleCodes",
        "Get all payroll schedule codes.",
        &[],
    ),
    Endpoint::new(
        "get_payroll_summary",
        "/payroll/v1/getPayrollSummary",
        "Get a client's payroll summary for a year.",
        &[
            CLIENT_ID,
            YEAR,
            ParamSpec::opt_text("batchType", "Batch type filter"),
            ParamSpec::opt_flag("includeDetails", "Include per-batch details"),
            ParamSpec::opt_text("sort", "Sort order"),
        ],
    ),
    Endpoint::new(
        "get_payroll_voucher_by_id",
        "/payroll/v1/getPayrollVoucherById",
        "Get a payroll voucher by id.",
        &[CLIENT_ID, ParamSpec::text("voucherId", "Voucher identifier"), OPTIONS],
    ),
    Endpoint::new(
        "get_payroll_voucher_for_batch",
        "/payroll/v1/getPayrollVoucherForBatch",
        "Get the payroll vouchers of a batch.",
        &[CLIENT_ID, BATCH_ID, COUNT, STARTPAGE, OPTIONS],
    ),
    Endpoint::new(
        "get_payroll_vouchers",
        "/payroll/v1/getPayrollVouchers",
        "Get a client's payroll vouchers for a pay date range.",
        &[CLIENT_ID, PAY_DATE_START, PAY_DATE_END, COUNT, STARTPAGE, OPTIONS],
    ),
    Endpoint::new(
        "get_payroll_vouchers_for_employee",
        "/payroll/v1/getPayrollVouchersForEmployee",
        "Get an employee's payroll vouchers for a pay date range.",
        &[
            CLIENT_ID,
            EMPLOYEE_ID,
            PAY_DATE_START,
            PAY_DATE_END,
            COUNT,
            STARTPAGE,
            OPTIONS,
        ],
    ),
    Endpoint::new(
        "get_process_schedule",
        "/payroll/v1/getProcessSchedule",
        "Get a payroll process schedule.",
        &[ParamSpec::text("processScheduleId", "Process schedule identifier")],
    ),
    Endpoint::new(
        "get_process_schedule_codes",
        "/payroll/v1/getProcessScheduleCodes",
        "Get all payroll process schedule codes.",
        &[],
    ),
    Endpoint::new(
        "get_retirement_adj_voucher_list_by_date",
        "/payroll/v1/getRetirementAdjVoucherListByDate",
        "Prepare or poll retirement adjustment vouchers in a date range.",
        &[
            CLIENT_ID,
            ParamSpec::text("dateType", "Date the range applies to"),
            START_DATE,
            END_DATE,
            OPT_EMPLOYEE_ID,
            DOWNLOAD_ID,
        ],
    ),
    Endpoint::new(
        "get_scheduled_payments",
        "/payroll/v1/getScheduledPayments",
        "Get scheduled payments of a client.",
        &[CLIENT_ID, OPT_EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_standard_hours",
        "/payroll/v1/getStandardHours",
        "Get the standard hours of a client's employees.",
        &[CLIENT_ID],
    ),
    Endpoint::new(
        "get_year_to_date_values",
        "/payroll/v1/getYearToDateValues",
        "Get an employee's year-to-date payroll values.",
        &[CLIENT_ID, EMPLOYEE_ID, AS_OF_DATE],
    ),
    Endpoint::new(
        "get_pay_group_schedule_report",
        "/payroll/v1/getPayGroupScheduleReport",
        "Prepare or poll the pay group schedule report for a pay date range.",
        &[
            CLIENT_ID,
            ParamSpec::opt_text("payGroup", "Pay group code"),
            PAY_DATE_START,
            PAY_DATE_END,
            DOWNLOAD_ID,
        ],
    ),
    Endpoint::new(
        "reprint_check_stub",
        "/payroll/v1/reprintCheckStub",
        "Get a reprint link for a check stub.",
        &[CLIENT_ID, EMPLOYEE_ID, ParamSpec::text("voucherId", "Voucher identifier")],
    ),
];
