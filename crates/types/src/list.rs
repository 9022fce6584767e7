use serde::{Deserialize, Serialize};

/// A page of results from a list endpoint.
///
/// The API wraps collections in a `list` object that carries the page
/// of data plus a flag indicating whether more results exist beyond it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List<T> {
    pub object: String,
    pub data: Vec<T>,
    pub has_more: bool,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Subscription;

    #[test]
    fn test_deserializes_subscription_page() {
        let raw = r#"{
            "object": "list",
            "data": [{
                "id": "sub_1",
                "object": "subscription",
                "customer": "cus_123",
                "status": "active",
                "created": 1527000000,
                "current_period_start": 1527000000,
                "current_period_end": 1529592000,
                "items": {"object": "list", "data": [], "has_more": false,
                          "url": "/v1/subscription_items?subscription=sub_1"}
            }],
            "has_more": true,
            "url": "/v1/subscriptions"
        }"#;

        let page: List<Subscription> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.object, "list");
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, "sub_1");
        assert!(page.has_more);
        assert!(page.total_count.is_none());
    }
}
