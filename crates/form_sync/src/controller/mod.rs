//! Controller layer: bindings, per-resource handlers and dispatch.
//!
//! Every handler starts by clearing the flash area, makes at most one call
//! through [`OrdersApi`], and on success replaces the affected form in one
//! step so the view never mixes fields from two responses.

use client_core::OrdersApi;

use crate::view_model::FormState;

pub mod events;
mod items;
mod orchestration;
mod orders;

use events::Outcome;

pub struct FormController<A: OrdersApi> {
    api: A,
    state: FormState,
}

impl<A: OrdersApi> FormController<A> {
    pub fn new(api: A) -> Self {
        Self::with_state(api, FormState::default())
    }

    pub fn with_state(api: A, state: FormState) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Direct access for filling fields before a binding fires.
    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    pub fn into_state(self) -> FormState {
        self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn succeed(&mut self, message: &str) -> Outcome {
        self.state.flash = message.to_string();
        Outcome::Succeeded
    }

    fn fail(&mut self, message: impl Into<String>) -> Outcome {
        self.state.flash = message.into();
        Outcome::Failed
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
