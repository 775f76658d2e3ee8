//! `onboard` module: onboarding tasks and approvals.

use super::{Endpoint, OPT_CLIENT_ID, PRISM_USER_ID, ParamSpec};

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "get_assigned_pending_approvals",
        "/onboard/v1/getAssignedPendingApprovals",
        "Get onboarding approvals assigned to a PrismHR user that are still pending.",
        &[PRISM_USER_ID, OPT_CLIENT_ID],
    ),
    Endpoint::new(
        "get_onboard_tasks",
        "/onboard/v1/getOnboardTasks",
        "Get onboarding tasks for one or more clients.",
        &[
            ParamSpec::text("clientList", "Comma-separated list of client identifiers"),
            ParamSpec::opt_text("fromDate", "Only tasks created on or after this date (YYYY-MM-DD)"),
            ParamSpec::opt_text("task", "Task type filter"),
        ],
    ),
];
