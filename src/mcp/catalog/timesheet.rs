//! `timesheet` module: timesheet batches and pay imports.

use super::{BATCH_ID, CLIENT_ID, Endpoint, ParamSpec};

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "get_timesheet_batch_status",
        "/timesheet/v1/getBatchStatus",
        "Get the status of a timesheet batch.",
        &[CLIENT_ID, BATCH_ID],
    ),
    Endpoint::new(
        "get_timesheet_param_data",
        "/timesheet/v1/getParamData",
        "Get the timesheet entry parameters for a client and user.",
        &[CLIENT_ID, ParamSpec::opt_text("userId", "Portal user identifier")],
    ),
    Endpoint::new(
        "get_pay_import_definition",
        "/timesheet/v1/getPayImportDefinition",
        "Get a pay import definition.",
        &[ParamSpec::text("definitionId", "Pay import definition identifier")],
    ),
    Endpoint::new(
        "get_timesheet_data",
        "/timesheet/v1/getTimesheetData",
        "Get the timesheet data entered for a batch.",
        &[CLIENT_ID, BATCH_ID],
    ),
];
