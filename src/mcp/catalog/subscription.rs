//! `subscription` module: event subscriptions.

use super::{Endpoint, ParamSpec};

const SUBSCRIPTION_ID: ParamSpec = ParamSpec::text("subscriptionId", "Subscription identifier");
const NUMBER_OF_EVENTS: ParamSpec =
    ParamSpec::opt_text("numberOfEvents", "Maximum number of events to return");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "get_all_subscriptions",
        "/subscription/v1/getAllSubscriptions",
        "Get all event subscriptions, optionally for one user.",
        &[ParamSpec::opt_text("userStringId", "User identifier owning the subscriptions")],
    ),
    Endpoint::new(
        "get_events",
        "/subscription/v1/getEvents",
        "Get events for a subscription, optionally replaying from a given event.",
        &[
            SUBSCRIPTION_ID,
            ParamSpec::opt_text("replayId", "Event id to replay from"),
            NUMBER_OF_EVENTS,
        ],
    ),
    Endpoint::new(
        "get_new_events",
        "/subscription/v1/getNewEvents",
        "Get events for a subscription that have not been read yet.",
        &[SUBSCRIPTION_ID, NUMBER_OF_EVENTS],
    ),
    Endpoint::new(
        "get_subscription",
        "/subscription/v1/getSubscription",
        "Get the definition of a subscription.",
        &[SUBSCRIPTION_ID],
    ),
];
