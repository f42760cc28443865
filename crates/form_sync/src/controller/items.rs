use client_core::OrdersApi;
use shared::protocol::SearchFilter;
use tracing::{debug, warn};

use super::{
    events::{Outcome, FLASH_ITEM_DELETED, FLASH_SERVER_ERROR, FLASH_SUCCESS},
    FormController,
};
use crate::view_model::ResultsTable;

impl<A: OrdersApi> FormController<A> {
    pub async fn item_create(&mut self) -> Outcome {
        self.state.flash.clear();
        let payload = self.state.item.payload();
        match self.api.create_item(&self.state.item.order_id, &payload).await {
            Ok(item) => {
                self.state.item.fill(&item);
                self.succeed(FLASH_SUCCESS)
            }
            Err(err) => self.fail(err.display_message()),
        }
    }

    pub async fn item_update(&mut self) -> Outcome {
        self.state.flash.clear();
        let payload = self.state.item.payload();
        let form = &self.state.item;
        match self
            .api
            .update_item(&form.order_id, &form.product_id, &payload)
            .await
        {
            Ok(item) => {
                self.state.item.fill(&item);
                self.succeed(FLASH_SUCCESS)
            }
            Err(err) => self.fail(err.display_message()),
        }
    }

    pub async fn item_retrieve(&mut self) -> Outcome {
        self.state.flash.clear();
        let form = &self.state.item;
        match self.api.get_item(&form.order_id, &form.product_id).await {
            Ok(item) => {
                self.state.item.fill(&item);
                self.succeed(FLASH_SUCCESS)
            }
            Err(err) => {
                self.state.item.clear();
                self.fail(err.display_message())
            }
        }
    }

    /// The parent order id comes from the order form, not the item form.
    pub async fn item_delete(&mut self) -> Outcome {
        self.state.flash.clear();
        let order_id = &self.state.order.id;
        let product_id = &self.state.item.product_id;
        if !self.state.item.order_id.is_empty() && self.state.item.order_id != *order_id {
            warn!(
                order_form_id = %order_id,
                item_form_order_id = %self.state.item.order_id,
                "item delete targets the order form id, not the item form order id"
            );
        }

        match self.api.delete_item(order_id, product_id).await {
            Ok(()) => {
                self.state.item.clear();
                self.succeed(FLASH_ITEM_DELETED)
            }
            Err(err) => {
                debug!(error = %err, "item delete failed");
                self.fail(FLASH_SERVER_ERROR)
            }
        }
    }

    pub fn item_clear(&mut self) -> Outcome {
        self.state.flash.clear();
        self.state.item.clear();
        Outcome::Succeeded
    }

    /// Filters by price, else quantity, within the order shown in the order
    /// form.
    pub async fn item_search(&mut self) -> Outcome {
        self.state.flash.clear();
        let form = &self.state.item;
        let filter = SearchFilter::first_non_empty(&[
            ("price", form.price.as_str()),
            ("quantity", form.quantity.as_str()),
        ]);
        match self
            .api
            .list_items(&self.state.order.id, filter.as_ref())
            .await
        {
            Ok(items) => {
                self.state.item_results = Some(ResultsTable::for_items(&items));
                if let Some(first) = items.first() {
                    self.state.item.fill(first);
                }
                self.succeed(FLASH_SUCCESS)
            }
            Err(err) => self.fail(err.display_message()),
        }
    }
}
