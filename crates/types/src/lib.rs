//! Response types decoded from the payments API.
//!
//! These mirror the JSON the API returns: raw epoch-second timestamps,
//! string status codes and the `list` envelope around collections. The
//! request side lives in `billwire-client`; this crate is deliberately
//! transport-free.

mod deleted;
mod list;
mod subscription;

pub use deleted::Deleted;
pub use list::List;
pub use subscription::{Price, Subscription, SubscriptionItem};
