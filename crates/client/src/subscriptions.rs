//! Subscription operations: create, retrieve, update, cancel, list and
//! discount removal.

use billwire_form::Form;
use billwire_types::{Deleted, List, Subscription};
use reqwest::Method;
use tracing::info;

use crate::{
    client::Client,
    endpoint::SubscriptionEndpoint,
    error::Result,
    params::{CancelSubscription, CreateSubscription, ListSubscriptions, UpdateSubscription},
};

/// Subscription operations, scoped to a [`Client`].
///
/// Obtained through [`Client::subscriptions`]. Each operation encodes
/// its parameters, resolves the endpoint and dispatches one request.
#[derive(Debug, Clone, Copy)]
pub struct Subscriptions<'a> {
    client: &'a Client,
}

impl<'a> Subscriptions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create a subscription for an existing customer.
    pub async fn create(&self, params: &CreateSubscription) -> Result<Subscription> {
        let body = params.to_form();
        info!(customer = %params.customer, "creating subscription");
        self.client
            .request(
                Method::POST,
                &SubscriptionEndpoint::Collection.path(),
                Some(&body),
                None,
            )
            .await
    }

    /// Retrieve a subscription by id.
    pub async fn retrieve(&self, id: &str) -> Result<Subscription> {
        self.client
            .request(
                Method::GET,
                &SubscriptionEndpoint::Item(id).path(),
                None,
                None,
            )
            .await
    }

    /// Update a subscription in place.
    pub async fn update(&self, id: &str, params: &UpdateSubscription) -> Result<Subscription> {
        let body = params.to_form();
        info!(subscription_id = %id, "updating subscription");
        self.client
            .request(
                Method::POST,
                &SubscriptionEndpoint::Item(id).path(),
                Some(&body),
                None,
            )
            .await
    }

    /// Cancel a subscription immediately.
    pub async fn cancel(&self, id: &str, params: &CancelSubscription) -> Result<Subscription> {
        let body = params.to_form();
        info!(subscription_id = %id, "cancelling subscription");
        self.client
            .request(
                Method::DELETE,
                &SubscriptionEndpoint::Item(id).path(),
                Some(&body),
                None,
            )
            .await
    }

    /// Flag a subscription to cancel when the current period ends,
    /// instead of cancelling it immediately.
    #[deprecated(note = "update the subscription with `cancel_at_period_end` instead")]
    pub async fn cancel_at_period_end(&self, id: &str, at_period_end: bool) -> Result<Subscription> {
        // Fixed single pair, bypassing the general cancel encoder.
        let mut body = Form::new();
        body.insert("at_period_end", at_period_end);
        info!(subscription_id = %id, "flagging subscription for period-end cancellation");
        self.client
            .request(
                Method::DELETE,
                &SubscriptionEndpoint::Item(id).path(),
                Some(&body),
                None,
            )
            .await
    }

    /// List subscriptions matching the given filters, one page at a time.
    pub async fn list(&self, params: &ListSubscriptions) -> Result<List<Subscription>> {
        let query = params.to_form();
        self.client
            .request(
                Method::GET,
                &SubscriptionEndpoint::Collection.path(),
                None,
                Some(&query),
            )
            .await
    }

    /// Remove the discount currently applied to a subscription.
    pub async fn delete_discount(&self, id: &str) -> Result<Deleted> {
        info!(subscription_id = %id, "deleting subscription discount");
        self.client
            .request(
                Method::DELETE,
                &SubscriptionEndpoint::Discount(id).path(),
                None,
                None,
            )
            .await
    }
}
