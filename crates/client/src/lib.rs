//! Typed client for the payments API's subscription endpoints.
//!
//! Requests are plain structs whose optional fields stay off the wire
//! until set; they are flattened into the API's bracket-indexed form
//! encoding (`items[0][price]`, `created[gte]`) and dispatched over a
//! pooled HTTP client with bearer authentication and a pinned API
//! version. Responses decode into the types from `billwire-types`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use billwire_client::{Client, CreateSubscription, SubscriptionItemParams, TrialEnd};
//!
//! #[tokio::main]
//! async fn main() -> billwire_client::Result<()> {
//!     let client = Client::new(std::env::var("PAYMENTS_SECRET_KEY").unwrap());
//!
//!     let mut params = CreateSubscription::new("cus_4fdAW5ftNQow1a");
//!     params.items = Some(vec![SubscriptionItemParams {
//!         price: Some("price_gold".to_string()),
//!         quantity: Some(1),
//!         ..Default::default()
//!     }]);
//!     params.trial_end = Some(TrialEnd::Now);
//!
//!     let subscription = client.subscriptions().create(&params).await?;
//!     println!("created {} for {}", subscription.id, subscription.customer);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
mod endpoint;
pub mod error;
pub mod params;
pub mod subscriptions;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{ApiError, Error, Result};
pub use params::{
    CancelSubscription, CreateSubscription, ListSubscriptions, RangeQuery,
    SubscriptionItemParams, TrialEnd, UpdateSubscription,
};
pub use subscriptions::Subscriptions;

/// Response types, re-exported so callers need only one crate.
pub use billwire_types as types;
