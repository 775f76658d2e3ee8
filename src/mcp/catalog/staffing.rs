//! `staffing` module: staffing placements.

use super::{COUNT, Endpoint, OPT_CLIENT_ID, OPT_EMPLOYEE_ID, ParamSpec, STARTPAGE};

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "get_staffing_placement",
        "/staffing/v1/getStaffingPlacement",
        "Get the details of a staffing placement.",
        &[
            ParamSpec::opt_text("vendorId", "Staffing vendor identifier"),
            ParamSpec::opt_text("staffingClient", "Staffing client identifier"),
            ParamSpec::text("placementId", "Placement identifier"),
        ],
    ),
    Endpoint::new(
        "get_staffing_placement_list",
        "/staffing/v1/getStaffingPlacementList",
        "Get a paginated list of staffing placements, optionally filtered by employee or client.",
        &[OPT_EMPLOYEE_ID, OPT_CLIENT_ID, COUNT, STARTPAGE],
    ),
];
