//! Routes a fired binding to its handler.

use client_core::OrdersApi;
use tracing::debug;

use super::{
    events::{Binding, Outcome},
    FormController,
};

impl<A: OrdersApi> FormController<A> {
    pub async fn dispatch(&mut self, binding: Binding) -> Outcome {
        debug!(binding = binding.name(), "dispatching form binding");

        let outcome = match binding {
            Binding::OrderCreate => self.order_create().await,
            Binding::OrderUpdate => self.order_update().await,
            Binding::OrderRetrieve => self.order_retrieve().await,
            Binding::OrderDelete => self.order_delete().await,
            Binding::OrderCancel => self.order_cancel().await,
            Binding::OrderClear => self.order_clear(),
            Binding::OrderSearch => self.order_search().await,
            Binding::ItemCreate => self.item_create().await,
            Binding::ItemUpdate => self.item_update().await,
            Binding::ItemRetrieve => self.item_retrieve().await,
            Binding::ItemDelete => self.item_delete().await,
            Binding::ItemClear => self.item_clear(),
            Binding::ItemSearch => self.item_search().await,
        };

        debug!(
            binding = binding.name(),
            ok = outcome.is_success(),
            flash = %self.state.flash,
            "form binding finished"
        );
        outcome
    }
}
