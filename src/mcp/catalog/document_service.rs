//! `documentService` module: document types and rulesets.

use super::{Endpoint, OPT_CLIENT_ID, ParamSpec};

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "get_document_types",
        "/documentService/v1/getDocumentTypes",
        "Get document type definitions, optionally only the given types.",
        &[ParamSpec::opt_list("documentTypeId", "Document type identifiers")],
    ),
    Endpoint::new(
        "get_ruleset",
        "/documentService/v1/getRuleset",
        "Get the document access ruleset that applies to a user.",
        &[
            ParamSpec::text("userId", "User identifier"),
            OPT_CLIENT_ID,
            ParamSpec::text("userType", "User type, e.g. E (employee) or C (client)"),
            ParamSpec::opt_text("context", "Ruleset context"),
        ],
    ),
];
