//! `signOn` module: portal user data.

use super::{CLIENT_ID, Endpoint, ParamSpec};

const USER_ID: ParamSpec = ParamSpec::text("userId", "Portal user identifier");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "get_employee_image",
        "/signOn/v1/getEmployeeImage",
        "Get the profile image of the employee linked to a portal user.",
        &[USER_ID],
    ),
    Endpoint::new(
        "get_favorites",
        "/signOn/v1/getFavorites",
        "Get the saved favorites of a portal user.",
        &[USER_ID],
    ),
    Endpoint::new(
        "get_vendor_info",
        "/signOn/v1/getVendorInfo",
        "Get single sign-on vendor information for a user.",
        &[
            CLIENT_ID,
            USER_ID,
            ParamSpec::opt_text("extVendorId", "External vendor identifier"),
        ],
    ),
];
