use serde::{Deserialize, Serialize};

/// Acknowledgement returned when a resource or sub-resource is removed,
/// such as the discount attached to a subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deleted {
    pub deleted: bool,
    pub id: String,
}
