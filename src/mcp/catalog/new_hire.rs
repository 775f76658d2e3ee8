//! `newHire` module: onboarding questionnaires and required fields.

use super::{CLIENT_ID, Endpoint, ParamSpec};

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "get_new_hire_questions",
        "/newHire/v1/getNewHireQuestions",
        "Get the state-specific new hire questions for a state.",
        &[ParamSpec::text("stateCode", "Two letter state code, e.g. GA")],
    ),
    Endpoint::new(
        "get_new_hire_required_fields",
        "/newHire/v1/getNewHireRequiredFields",
        "Get the fields a client requires when hiring a new employee.",
        &[CLIENT_ID],
    ),
];
