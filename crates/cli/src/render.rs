//! Terminal output.

#![allow(clippy::print_stdout)]

use std::io::Write;

use online_shop_core::{DraftProduct, Product};
use online_shop_storefront::{CartView, CatalogView};

pub fn catalog(view: &CatalogView) {
    if let Some(placeholder) = view.placeholder() {
        println!("{placeholder}");
        return;
    }
    for item in &view.items {
        println!(
            "{:>5}  {:<24} {:>10} {:>8}",
            item.id.to_string(),
            item.name,
            item.price,
            item.weight
        );
        if !item.description.is_empty() {
            println!("       {}", item.description);
        }
    }
}

pub fn cart(view: &CartView) {
    if let Some(placeholder) = view.placeholder() {
        println!("{placeholder}");
        return;
    }
    for item in &view.items {
        println!("{:>5}  {:<24} {:>10}", item.id.to_string(), item.name, item.price);
    }
    println!("{} item(s)", view.item_count);
}

pub fn draft(draft: &DraftProduct) {
    println!("name:        {}", draft.name);
    println!("description: {}", draft.description);
    println!("image:       {}", draft.image_url);
    println!("price:       {}", numeric_slot(draft.price));
    println!("weight:      {}", numeric_slot(draft.weight));
}

pub fn created(product: &Product) {
    println!("Created product {} ({})", product.id, product.name);
}

pub fn message(text: &str) {
    println!("{text}");
}

pub fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn numeric_slot(value: Option<f64>) -> String {
    value.map_or_else(|| "(empty)".to_string(), |v| v.to_string())
}
