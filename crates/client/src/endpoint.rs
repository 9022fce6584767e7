//! URL paths for the subscription resource family.

/// Relative endpoint one operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SubscriptionEndpoint<'a> {
    /// The subscriptions collection, used by create and list.
    Collection,
    /// A single subscription addressed by id.
    Item(&'a str),
    /// The discount attached to a single subscription.
    Discount(&'a str),
}

impl SubscriptionEndpoint<'_> {
    /// Resolve to a path relative to the API base.
    ///
    /// Identifiers are percent-encoded so an id can never introduce
    /// extra path segments or query syntax.
    pub(crate) fn path(&self) -> String {
        match self {
            SubscriptionEndpoint::Collection => "subscriptions".to_string(),
            SubscriptionEndpoint::Item(id) => {
                format!("subscriptions/{}", urlencoding::encode(id))
            }
            SubscriptionEndpoint::Discount(id) => {
                format!("subscriptions/{}/discount", urlencoding::encode(id))
            }
        }
    }
}
