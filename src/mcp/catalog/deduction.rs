//! `deduction` module: deductions, loans and garnishments.

use super::{CLIENT_ID, EMPLOYEE_ID, Endpoint, OPTIONS, ParamSpec};

const DOCKET_NUMBER: ParamSpec = ParamSpec::opt_text("docketNumber", "Garnishment docket number");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "get_deduction_arrears",
        "/deduction/v1/getDeductionArrears",
        "Get an employee's deduction arrears.",
        &[CLIENT_ID, EMPLOYEE_ID, OPTIONS],
    ),
    Endpoint::new(
        "get_deductions",
        "/deduction/v1/getDeductions",
        "Get an employee's scheduled deductions.",
        &[CLIENT_ID, EMPLOYEE_ID, OPTIONS],
    ),
    Endpoint::new(
        "get_employee_loans",
        "/deduction/v1/getEmployeeLoans",
        "Get an employee's loans.",
        &[CLIENT_ID, EMPLOYEE_ID, ParamSpec::opt_text("loanId", "Loan identifier")],
    ),
    Endpoint::new(
        "get_garnishment_details",
        "/deduction/v1/getGarnishmentDetails",
        "Get an employee's garnishments.",
        &[
            CLIENT_ID,
            EMPLOYEE_ID,
            DOCKET_NUMBER,
            ParamSpec::opt_text("garnishmentType", "Garnishment type"),
        ],
    ),
    Endpoint::new(
        "get_garnishment_payment_history",
        "/deduction/v1/getGarnishmentPaymentHistory",
        "Get the payment history of an employee's garnishments.",
        &[CLIENT_ID, EMPLOYEE_ID, DOCKET_NUMBER],
    ),
    Endpoint::new(
        "get_voluntary_recurring_deductions",
        "/deduction/v1/getVoluntaryRecurringDeductions",
        "Get an employee's voluntary recurring deductions.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "check_for_garnishments",
        "/deduction/v1/checkForGarnishments",
        "Check whether an employee has active garnishments.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
];
