//! `taxRate` module: tax authorities, SUTA and workers' compensation.

use super::{CLIENT_ID, EMPLOYEE_ID, Endpoint, OPT_CLIENT_ID, ParamSpec};

const STATE_CODE: ParamSpec = ParamSpec::text("stateCode", "Two letter state code");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "get_suta_information",
        "/taxRate/v1/getSUTAInformation",
        "Get the SUTA tax information applied to an employee.",
        &[CLIENT_ID, EMPLOYEE_ID],
    ),
    Endpoint::new(
        "get_tax_authorities",
        "/taxRate/v1/getTaxAuthorities",
        "Get tax authorities, optionally for one state or authority.",
        &[
            ParamSpec::opt_text("stateCode", "Two letter state code"),
            ParamSpec::opt_text("authorityId", "Tax authority identifier"),
        ],
    ),
    Endpoint::new(
        "get_tax_rate",
        "/taxRate/v1/getTaxRate",
        "Get the workers' compensation tax rate for a policy and class as of a date.",
        &[
            ParamSpec::opt_text("workersCompPolicyId", "Workers' compensation policy identifier"),
            ParamSpec::opt_text("workersCompClass", "Workers' compensation class code"),
            ParamSpec::opt_text("employerId", "Employer identifier"),
            ParamSpec::text("effectiveDate", "Effective date (YYYY-MM-DD)"),
            OPT_CLIENT_ID,
        ],
    ),
    Endpoint::new(
        "get_state_w4_params",
        "/taxRate/v1/getStateW4Params",
        "Get the state W-4 withholding parameters of a state.",
        &[STATE_CODE],
    ),
    Endpoint::new(
        "get_workers_comp_classes",
        "/taxRate/v1/getWorkersCompClasses",
        "Get the workers' compensation classes of a state.",
        &[STATE_CODE],
    ),
    Endpoint::new(
        "get_workers_comp_policy_details",
        "/taxRate/v1/getWorkersCompPolicyDetails",
        "Get the details of a workers' compensation policy.",
        &[ParamSpec::text("policyId", "Workers' compensation policy identifier")],
    ),
    Endpoint::new(
        "get_workers_comp_policy_list",
        "/taxRate/v1/getWorkersCompPolicyList",
        "Get workers' compensation policies, optionally as of a date.",
        &[ParamSpec::opt_text("effectiveDate", "Effective date (YYYY-MM-DD)")],
    ),
];
