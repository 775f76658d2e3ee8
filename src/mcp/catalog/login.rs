//! `login` module: web service permissions.
//!
//! `createPeoSession` lives here too but is called by the authenticator, not exposed as a tool.

use super::{Endpoint, ParamSpec};

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "check_permissions_request_status",
        "/login/v1/checkPermissionsRequestStatus",
        "Check the status of a pending API permissions request for a web service user.",
        &[ParamSpec::text("webServiceUser", "Web service user name")],
    ),
    Endpoint::new(
        "get_api_permissions",
        "/login/v1/getAPIPermissions",
        "Get the API methods the current web service user is permitted to call.",
        &[],
    ),
];
