//! Request parameters for subscription operations and their wire encoding.
//!
//! Every optional field is absent by default and writes no key until it
//! is set, so the server's own defaults stay in charge. Encoding is
//! deterministic: fields are written in a fixed order and nested values
//! flatten into bracket-indexed keys.

use billwire_form::{Form, Value};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;

/// When a subscription's trial should end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrialEnd {
    /// End the trial at the given instant, encoded as a Unix timestamp.
    At(DateTime<Utc>),
    /// End the trial immediately, encoded as the literal string `now`.
    Now,
}

impl TrialEnd {
    fn to_value(self) -> Value {
        match self {
            TrialEnd::At(at) => Value::Int(at.timestamp()),
            TrialEnd::Now => Value::Str("now".to_string()),
        }
    }
}

/// One line item of a subscription, as sent on create or update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionItemParams {
    /// Id of an existing item, set when updating it in place.
    pub id: Option<String>,
    /// Price the item bills against.
    pub price: Option<String>,
    /// Legacy plan identifier, still accepted alongside `price`.
    pub plan: Option<String>,
    pub quantity: Option<i64>,
    /// Mark an existing item for removal. Only meaningful on update.
    pub deleted: Option<bool>,
}

impl SubscriptionItemParams {
    fn encode_into(&self, form: &mut Form, index: usize) {
        if let Some(id) = &self.id {
            form.insert_indexed("items", index, "id", id.as_str());
        }
        if let Some(price) = &self.price {
            form.insert_indexed("items", index, "price", price.as_str());
        }
        if let Some(plan) = &self.plan {
            form.insert_indexed("items", index, "plan", plan.as_str());
        }
        if let Some(quantity) = self.quantity {
            form.insert_indexed("items", index, "quantity", quantity);
        }
        if let Some(deleted) = self.deleted {
            form.insert_indexed("items", index, "deleted", deleted);
        }
    }
}

fn encode_items(form: &mut Form, items: &[SubscriptionItemParams]) {
    for (index, item) in items.iter().enumerate() {
        item.encode_into(form, index);
    }
}

fn encode_metadata(form: &mut Form, metadata: &IndexMap<String, String>) {
    for (key, value) in metadata {
        form.insert_keyed("metadata", key, value.as_str());
    }
}

/// Bounds for a timestamp range filter, flattened to keys like
/// `created[gte]`. Bounds left unset contribute nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RangeQuery {
    pub gt: Option<DateTime<Utc>>,
    pub gte: Option<DateTime<Utc>>,
    pub lt: Option<DateTime<Utc>>,
    pub lte: Option<DateTime<Utc>>,
}

impl RangeQuery {
    fn encode_into(&self, form: &mut Form, key: &str) {
        if let Some(gt) = self.gt {
            form.insert_keyed(key, "gt", gt.timestamp());
        }
        if let Some(gte) = self.gte {
            form.insert_keyed(key, "gte", gte.timestamp());
        }
        if let Some(lt) = self.lt {
            form.insert_keyed(key, "lt", lt.timestamp());
        }
        if let Some(lte) = self.lte {
            form.insert_keyed(key, "lte", lte.timestamp());
        }
    }
}

/// Parameters for creating a subscription.
///
/// `customer` is the only mandatory field; everything else stays off
/// the wire until set.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSubscription {
    /// Id of the customer to subscribe.
    pub customer: String,
    /// Percentage of each invoice routed to the platform's fee.
    pub application_fee_percent: Option<Decimal>,
    /// Collection method, `charge_automatically` or `send_invoice`.
    pub billing: Option<String>,
    /// Future date to anchor the billing cycle on.
    pub billing_cycle_anchor: Option<DateTime<Utc>>,
    pub cancel_at_period_end: Option<bool>,
    pub coupon: Option<String>,
    /// Days until an invoice is due. Only valid with `send_invoice`.
    pub days_until_due: Option<i64>,
    pub items: Option<Vec<SubscriptionItemParams>>,
    pub metadata: Option<IndexMap<String, String>>,
    pub prorate: Option<bool>,
    pub tax_percent: Option<Decimal>,
    pub trial_end: Option<TrialEnd>,
    /// Inherit the trial length defined on the subscribed plan.
    pub trial_from_plan: Option<bool>,
    pub trial_period_days: Option<i64>,
    /// Mark the subscription as created while the customer is off
    /// session. Omitted unless explicitly set.
    pub off_session: Option<bool>,
}

impl CreateSubscription {
    pub fn new(customer: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            application_fee_percent: None,
            billing: None,
            billing_cycle_anchor: None,
            cancel_at_period_end: None,
            coupon: None,
            days_until_due: None,
            items: None,
            metadata: None,
            prorate: None,
            tax_percent: None,
            trial_end: None,
            trial_from_plan: None,
            trial_period_days: None,
            off_session: None,
        }
    }

    pub(crate) fn to_form(&self) -> Form {
        let mut form = Form::new();
        form.insert("customer", self.customer.as_str());
        if let Some(fee) = self.application_fee_percent {
            form.insert("application_fee_percent", fee);
        }
        if let Some(billing) = &self.billing {
            form.insert("billing", billing.as_str());
        }
        if let Some(anchor) = self.billing_cycle_anchor {
            form.insert("billing_cycle_anchor", anchor.timestamp());
        }
        if let Some(cancel) = self.cancel_at_period_end {
            form.insert("cancel_at_period_end", cancel);
        }
        if let Some(coupon) = &self.coupon {
            form.insert("coupon", coupon.as_str());
        }
        if let Some(days) = self.days_until_due {
            form.insert("days_until_due", days);
        }
        if let Some(items) = &self.items {
            encode_items(&mut form, items);
        }
        if let Some(metadata) = &self.metadata {
            encode_metadata(&mut form, metadata);
        }
        if let Some(prorate) = self.prorate {
            form.insert("prorate", prorate);
        }
        if let Some(tax) = self.tax_percent {
            form.insert("tax_percent", tax);
        }
        if let Some(trial_end) = self.trial_end {
            form.insert("trial_end", trial_end.to_value());
        }
        if let Some(from_plan) = self.trial_from_plan {
            form.insert("trial_from_plan", from_plan);
        }
        if let Some(days) = self.trial_period_days {
            form.insert("trial_period_days", days);
        }
        if let Some(off_session) = self.off_session {
            form.insert("off_session", off_session);
        }
        form
    }
}

/// Parameters for updating a subscription. All fields optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSubscription {
    pub application_fee_percent: Option<Decimal>,
    pub billing: Option<String>,
    /// Cycle anchor directive, `now` or `unchanged`, passed through
    /// verbatim.
    pub billing_cycle_anchor: Option<String>,
    pub cancel_at_period_end: Option<bool>,
    pub coupon: Option<String>,
    pub days_until_due: Option<i64>,
    pub items: Option<Vec<SubscriptionItemParams>>,
    pub metadata: Option<IndexMap<String, String>>,
    pub prorate: Option<bool>,
    /// Point in time the proration is calculated from.
    pub proration_date: Option<DateTime<Utc>>,
    pub tax_percent: Option<Decimal>,
    pub trial_end: Option<TrialEnd>,
    pub trial_from_plan: Option<bool>,
}

impl UpdateSubscription {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn to_form(&self) -> Form {
        let mut form = Form::new();
        if let Some(fee) = self.application_fee_percent {
            form.insert("application_fee_percent", fee);
        }
        if let Some(billing) = &self.billing {
            form.insert("billing", billing.as_str());
        }
        if let Some(anchor) = &self.billing_cycle_anchor {
            form.insert("billing_cycle_anchor", anchor.as_str());
        }
        if let Some(cancel) = self.cancel_at_period_end {
            form.insert("cancel_at_period_end", cancel);
        }
        if let Some(coupon) = &self.coupon {
            form.insert("coupon", coupon.as_str());
        }
        if let Some(days) = self.days_until_due {
            form.insert("days_until_due", days);
        }
        if let Some(items) = &self.items {
            encode_items(&mut form, items);
        }
        if let Some(metadata) = &self.metadata {
            encode_metadata(&mut form, metadata);
        }
        if let Some(prorate) = self.prorate {
            form.insert("prorate", prorate);
        }
        if let Some(date) = self.proration_date {
            form.insert("proration_date", date.timestamp());
        }
        if let Some(tax) = self.tax_percent {
            form.insert("tax_percent", tax);
        }
        if let Some(trial_end) = self.trial_end {
            form.insert("trial_end", trial_end.to_value());
        }
        if let Some(from_plan) = self.trial_from_plan {
            form.insert("trial_from_plan", from_plan);
        }
        form
    }
}

/// Parameters for cancelling a subscription immediately.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CancelSubscription {
    /// Generate a final invoice for pending usage.
    pub invoice_now: Option<bool>,
    /// Credit unused time on the final invoice.
    pub prorate: Option<bool>,
}

impl CancelSubscription {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn to_form(&self) -> Form {
        let mut form = Form::new();
        if let Some(invoice_now) = self.invoice_now {
            form.insert("invoice_now", invoice_now);
        }
        if let Some(prorate) = self.prorate {
            form.insert("prorate", prorate);
        }
        form
    }
}

/// Filters for listing subscriptions. All fields optional; an empty
/// filter lists everything page by page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListSubscriptions {
    pub billing: Option<String>,
    /// Restrict to subscriptions created inside this time range.
    pub created: Option<RangeQuery>,
    pub customer: Option<String>,
    /// Cursor: return results before this subscription id.
    pub ending_before: Option<String>,
    /// Page size, between 1 and 100.
    pub limit: Option<i64>,
    pub plan: Option<String>,
    /// Cursor: return results after this subscription id.
    pub starting_after: Option<String>,
    /// Lifecycle status to filter on, or `all` to include ended ones.
    pub status: Option<String>,
}

impl ListSubscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn to_form(&self) -> Form {
        let mut form = Form::new();
        if let Some(billing) = &self.billing {
            form.insert("billing", billing.as_str());
        }
        if let Some(created) = &self.created {
            created.encode_into(&mut form, "created");
        }
        if let Some(customer) = &self.customer {
            form.insert("customer", customer.as_str());
        }
        if let Some(ending_before) = &self.ending_before {
            form.insert("ending_before", ending_before.as_str());
        }
        if let Some(limit) = self.limit {
            form.insert("limit", limit);
        }
        if let Some(plan) = &self.plan {
            form.insert("plan", plan.as_str());
        }
        if let Some(starting_after) = &self.starting_after {
            form.insert("starting_after", starting_after.as_str());
        }
        if let Some(status) = &self.status {
            form.insert("status", status.as_str());
        }
        form
    }
}
