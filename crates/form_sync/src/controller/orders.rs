use client_core::OrdersApi;
use shared::protocol::SearchFilter;
use tracing::debug;

use super::{
    events::{
        Outcome, FLASH_ORDER_CANCELLED, FLASH_ORDER_DELETED, FLASH_SERVER_ERROR, FLASH_SUCCESS,
    },
    FormController,
};
use crate::view_model::ResultsTable;

impl<A: OrdersApi> FormController<A> {
    pub async fn order_create(&mut self) -> Outcome {
        self.state.flash.clear();
        let payload = self.state.order.create_payload();
        match self.api.create_order(&payload).await {
            Ok(order) => {
                self.state.order.fill(&order);
                self.succeed(FLASH_SUCCESS)
            }
            Err(err) => self.fail(err.display_message()),
        }
    }

    pub async fn order_update(&mut self) -> Outcome {
        self.state.flash.clear();
        let payload = self.state.order.update_payload();
        match self.api.update_order(&self.state.order.id, &payload).await {
            Ok(order) => {
                self.state.order.fill(&order);
                self.succeed(FLASH_SUCCESS)
            }
            Err(err) => self.fail(err.display_message()),
        }
    }

    /// A failed lookup blanks the form: whatever was shown no longer exists.
    pub async fn order_retrieve(&mut self) -> Outcome {
        self.state.flash.clear();
        match self.api.get_order(&self.state.order.id).await {
            Ok(order) => {
                self.state.order.fill(&order);
                self.succeed(FLASH_SUCCESS)
            }
            Err(err) => {
                self.state.order.clear();
                self.fail(err.display_message())
            }
        }
    }

    pub async fn order_delete(&mut self) -> Outcome {
        self.state.flash.clear();
        match self.api.delete_order(&self.state.order.id).await {
            Ok(()) => {
                self.state.order.clear();
                self.succeed(FLASH_ORDER_DELETED)
            }
            Err(err) => {
                debug!(error = %err, "order delete failed");
                self.fail(FLASH_SERVER_ERROR)
            }
        }
    }

    pub async fn order_cancel(&mut self) -> Outcome {
        self.state.flash.clear();
        match self.api.cancel_order(&self.state.order.id).await {
            Ok(order) => {
                self.state.order.fill(&order);
                self.succeed(FLASH_ORDER_CANCELLED)
            }
            Err(err) => {
                debug!(error = %err, "order cancel failed");
                self.fail(FLASH_SERVER_ERROR)
            }
        }
    }

    pub fn order_clear(&mut self) -> Outcome {
        self.state.flash.clear();
        self.state.order.clear();
        Outcome::Succeeded
    }

    /// Filters by exactly one field: status, else address, else date, else
    /// customer id. With no filter the whole collection is listed.
    pub async fn order_search(&mut self) -> Outcome {
        self.state.flash.clear();
        let form = &self.state.order;
        let filter = SearchFilter::first_non_empty(&[
            ("status", form.status.as_str()),
            ("address", form.address.as_str()),
            ("date", form.date.as_str()),
            ("customer_id", form.customer_id.as_str()),
        ]);
        match self.api.list_orders(filter.as_ref()).await {
            Ok(orders) => {
                self.state.order_results = Some(ResultsTable::for_orders(&orders));
                if let Some(first) = orders.first() {
                    self.state.order.fill(first);
                }
                self.succeed(FLASH_SUCCESS)
            }
            Err(err) => self.fail(err.display_message()),
        }
    }
}
