//! Form-sync controller for the orders console.
//!
//! The form is an explicit view-model ([`FormState`]) owned by a
//! [`FormController`]. Each UI trigger is a [`Binding`] that reads fields,
//! issues one call against the orders service and writes the response (or an
//! error) back into the form.

pub mod controller;
pub mod view_model;

pub use controller::{events::Binding, events::Outcome, FormController};
pub use view_model::{escape_html, FormState, ItemForm, OrderForm, ResultsTable};
