use std::fmt::Write;

use form_sync::{escape_html, FormState, ItemForm, OrderForm, ResultsTable};
use tabled::{builder::Builder, settings::Style};

pub fn render_state(state: &FormState) -> String {
    let mut out = String::new();
    let flash = if state.flash.is_empty() {
        "-"
    } else {
        state.flash.as_str()
    };
    let _ = writeln!(out, "Flash: {flash}");
    let _ = writeln!(out, "\nOrder\n{}", order_form_table(&state.order));
    let _ = writeln!(out, "\nItem\n{}", item_form_table(&state.item));
    if let Some(results) = &state.order_results {
        let _ = writeln!(out, "\nOrder results\n{}", results_table(results));
    }
    if let Some(results) = &state.item_results {
        let _ = writeln!(out, "\nItem results\n{}", results_table(results));
    }
    out
}

/// The flash line, then each non-empty results region as table markup.
pub fn render_html(state: &FormState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<p>{}</p>", escape_html(&state.flash));
    for results in [&state.order_results, &state.item_results]
        .into_iter()
        .flatten()
    {
        let _ = writeln!(out, "{}", results.to_html());
    }
    out
}

fn field_table<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut builder = Builder::default();
    for (name, value) in fields {
        builder.push_record([name, value]);
    }
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}

fn order_form_table(form: &OrderForm) -> String {
    field_table([
        ("ID", form.id.as_str()),
        ("Amount", form.amount.as_str()),
        ("Status", form.status.as_str()),
        ("Address", form.address.as_str()),
        ("Customer ID", form.customer_id.as_str()),
        ("Date", form.date.as_str()),
    ])
}

fn item_form_table(form: &ItemForm) -> String {
    field_table([
        ("Order ID", form.order_id.as_str()),
        ("Product ID", form.product_id.as_str()),
        ("Price", form.price.as_str()),
        ("Quantity", form.quantity.as_str()),
    ])
}

pub fn results_table(results: &ResultsTable) -> String {
    if results.is_empty() {
        return "(no results)".to_string();
    }
    let mut builder = Builder::default();
    builder.push_record(results.headers.iter().map(String::as_str));
    for row in &results.rows {
        builder.push_record(row.iter().map(String::as_str));
    }
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}
