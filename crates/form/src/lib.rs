//! Ordered form encoding for the billwire API client.
//!
//! The payments API takes its input as `application/x-www-form-urlencoded`
//! bodies and query strings rather than JSON. Nested structures are
//! flattened into bracket-indexed keys (`items[0][price]`,
//! `metadata[order_id]`, `created[gte]`) and only fields that are
//! actually set produce a key at all. [`Form`] collects those pairs in
//! insertion order and serializes them with percent-escaping applied.

mod form;
mod value;

pub use form::Form;
pub use value::Value;
