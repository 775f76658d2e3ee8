//! `applicant` module: job applicants.

use super::{CLIENT_ID, COUNT, Endpoint, ParamSpec, STARTPAGE};

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "get_job_applicant_list",
        "/applicant/v1/getJobApplicantList",
        "Get a paginated list of job applicants for a client.",
        &[CLIENT_ID, COUNT, STARTPAGE],
    ),
    Endpoint::new(
        "get_job_applicants",
        "/applicant/v1/getJobApplicants",
        "Get job applicant details for a client, optionally for specific applicants.",
        &[
            CLIENT_ID,
            ParamSpec::opt_list("applicantId", "Applicant identifiers to return"),
        ],
    ),
];
