//! UI triggers, their outcomes and the fixed flash texts.

use std::{fmt, str::FromStr};

use thiserror::Error;

pub const FLASH_SUCCESS: &str = "Success";
pub const FLASH_ORDER_DELETED: &str = "Order has been Deleted!";
pub const FLASH_ORDER_CANCELLED: &str = "Order has been Cancelled!";
pub const FLASH_ITEM_DELETED: &str = "Item has been Deleted!";
pub const FLASH_SERVER_ERROR: &str = "Server error!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    OrderCreate,
    OrderUpdate,
    OrderRetrieve,
    OrderDelete,
    OrderCancel,
    OrderClear,
    OrderSearch,
    ItemCreate,
    ItemUpdate,
    ItemRetrieve,
    ItemDelete,
    ItemClear,
    ItemSearch,
}

impl Binding {
    pub const ALL: [Binding; 13] = [
        Binding::OrderCreate,
        Binding::OrderUpdate,
        Binding::OrderRetrieve,
        Binding::OrderDelete,
        Binding::OrderCancel,
        Binding::OrderClear,
        Binding::OrderSearch,
        Binding::ItemCreate,
        Binding::ItemUpdate,
        Binding::ItemRetrieve,
        Binding::ItemDelete,
        Binding::ItemClear,
        Binding::ItemSearch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Binding::OrderCreate => "order_create",
            Binding::OrderUpdate => "order_update",
            Binding::OrderRetrieve => "order_retrieve",
            Binding::OrderDelete => "order_delete",
            Binding::OrderCancel => "order_cancel",
            Binding::OrderClear => "order_clear",
            Binding::OrderSearch => "order_search",
            Binding::ItemCreate => "item_create",
            Binding::ItemUpdate => "item_update",
            Binding::ItemRetrieve => "item_retrieve",
            Binding::ItemDelete => "item_delete",
            Binding::ItemClear => "item_clear",
            Binding::ItemSearch => "item_search",
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown binding '{0}'")]
pub struct UnknownBinding(pub String);

impl FromStr for Binding {
    type Err = UnknownBinding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Binding::ALL
            .into_iter()
            .find(|binding| binding.name() == normalized)
            .ok_or_else(|| UnknownBinding(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        self == Outcome::Succeeded
    }
}
