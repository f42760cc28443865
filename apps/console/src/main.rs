use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use client_core::{OrdersApi, OrdersClient};
use form_sync::{Binding, FormController, FormState, OrderForm};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod render;
mod state;

use config::load_settings;
use state::{load_state, save_state};

/// Fires one order/item form binding against the orders service.
#[derive(Parser, Debug)]
#[command(name = "orders-console")]
struct Args {
    /// Base url of the orders service.
    #[arg(long)]
    server_url: Option<String>,
    /// Path prefix the order routes are mounted under, e.g. `/api`.
    #[arg(long)]
    api_prefix: Option<String>,
    /// JSON file holding the form between runs.
    #[arg(long)]
    state: Option<PathBuf>,
    /// Print the whole form state as JSON instead of tables.
    #[arg(long, conflicts_with = "html")]
    json: bool,
    /// Print the flash line and the results regions as HTML table markup.
    #[arg(long)]
    html: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill the order form and fire one of its buttons.
    Order {
        #[arg(value_enum)]
        action: OrderAction,
        #[command(flatten)]
        fields: OrderFields,
    },
    /// Fill the item form and fire one of its buttons.
    Item {
        #[arg(value_enum)]
        action: ItemAction,
        #[command(flatten)]
        fields: ItemFields,
    },
    /// Fire any binding by name, e.g. `order_search` or `item-delete`.
    Fire {
        binding: Binding,
        #[command(flatten)]
        order: OrderFields,
        #[command(flatten)]
        item: ItemFields,
    },
    /// Ask the service whether it is up.
    Health,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OrderAction {
    Create,
    Update,
    Retrieve,
    Delete,
    Cancel,
    Clear,
    Search,
}

impl From<OrderAction> for Binding {
    fn from(action: OrderAction) -> Self {
        match action {
            OrderAction::Create => Binding::OrderCreate,
            OrderAction::Update => Binding::OrderUpdate,
            OrderAction::Retrieve => Binding::OrderRetrieve,
            OrderAction::Delete => Binding::OrderDelete,
            OrderAction::Cancel => Binding::OrderCancel,
            OrderAction::Clear => Binding::OrderClear,
            OrderAction::Search => Binding::OrderSearch,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ItemAction {
    Create,
    Update,
    Retrieve,
    Delete,
    Clear,
    Search,
}

impl From<ItemAction> for Binding {
    fn from(action: ItemAction) -> Self {
        match action {
            ItemAction::Create => Binding::ItemCreate,
            ItemAction::Update => Binding::ItemUpdate,
            ItemAction::Retrieve => Binding::ItemRetrieve,
            ItemAction::Delete => Binding::ItemDelete,
            ItemAction::Clear => Binding::ItemClear,
            ItemAction::Search => Binding::ItemSearch,
        }
    }
}

#[derive(ClapArgs, Debug)]
struct OrderFields {
    #[arg(long)]
    id: Option<String>,
    #[arg(long)]
    amount: Option<String>,
    #[arg(long)]
    status: Option<String>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    customer_id: Option<String>,
    #[arg(long)]
    date: Option<String>,
}

impl OrderFields {
    fn apply(self, form: &mut OrderForm) {
        set_field(&mut form.id, self.id);
        set_field(&mut form.amount, self.amount);
        set_field(&mut form.status, self.status);
        set_field(&mut form.address, self.address);
        set_field(&mut form.customer_id, self.customer_id);
        set_field(&mut form.date, self.date);
    }
}

#[derive(ClapArgs, Debug)]
struct ItemFields {
    #[arg(long)]
    order_id: Option<String>,
    #[arg(long)]
    product_id: Option<String>,
    #[arg(long)]
    price: Option<String>,
    #[arg(long)]
    quantity: Option<String>,
    /// Sets the order form's id; item delete and search read their parent
    /// order from there.
    #[arg(long)]
    order_form_id: Option<String>,
}

impl ItemFields {
    fn apply(self, state: &mut FormState) {
        set_field(&mut state.order.id, self.order_form_id);
        let form = &mut state.item;
        set_field(&mut form.order_id, self.order_id);
        set_field(&mut form.product_id, self.product_id);
        set_field(&mut form.price, self.price);
        set_field(&mut form.quantity, self.quantity);
    }
}

fn set_field(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    if let Some(api_prefix) = args.api_prefix {
        settings.api_prefix = api_prefix;
    }
    if args.state.is_some() {
        settings.state_path = args.state;
    }

    let client = OrdersClient::new(&settings.server_url)
        .with_context(|| format!("cannot use server url '{}'", settings.server_url))?
        .with_api_prefix(&settings.api_prefix);

    let binding = match args.command {
        Command::Health => {
            let health = client.health().await?;
            println!("{} ({})", health.message, health.status);
            return Ok(ExitCode::SUCCESS);
        }
        Command::Order { action, .. } => Binding::from(action),
        Command::Item { action, .. } => Binding::from(action),
        Command::Fire { binding, .. } => binding,
    };

    let form_state = match &settings.state_path {
        Some(path) => load_state(path)?,
        None => FormState::default(),
    };
    let mut controller = FormController::with_state(client, form_state);
    match args.command {
        Command::Order { fields, .. } => fields.apply(&mut controller.state_mut().order),
        Command::Item { fields, .. } => fields.apply(controller.state_mut()),
        Command::Fire { order, item, .. } => {
            let state = controller.state_mut();
            order.apply(&mut state.order);
            item.apply(state);
        }
        Command::Health => {}
    }

    info!(
        binding = %binding,
        server_url = %controller.api().base_url(),
        "firing form binding"
    );
    let outcome = controller.dispatch(binding).await;
    let form_state = controller.into_state();

    if let Some(path) = &settings.state_path {
        save_state(path, &form_state)?;
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&form_state)?);
    } else if args.html {
        print!("{}", render::render_html(&form_state));
    } else {
        print!("{}", render::render_state(&form_state));
    }

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
