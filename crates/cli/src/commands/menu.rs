//! List catalog products.

use std::fmt::Write as _;

use sushi_shop_core::CategoryId;
use sushi_shop_storefront::AppState;
use sushi_shop_storefront::catalog::Product;

/// Print the menu, optionally restricted to one category.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn list(
    state: &AppState,
    category: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = state.catalog();
    let category_id = category.map(CategoryId::new);
    let products: Vec<&Product> = match &category_id {
        Some(id) => catalog.by_category(id).collect(),
        None => catalog.products().iter().collect(),
    };

    if products.is_empty() {
        tracing::warn!(category = ?category, "no products matched");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
    } else {
        print!("{}", render_table(&products));
    }
    Ok(())
}

/// One line per product: id, name, price, category and markers.
pub fn render_table(products: &[&Product]) -> String {
    let mut out = String::new();
    for product in products {
        let mut markers = Vec::new();
        if product.dietary.vegetarian {
            markers.push("vegetarian");
        }
        if product.dietary.gluten_free {
            markers.push("gluten-free");
        }
        if product.dietary.spicy {
            markers.push("spicy");
        }
        if product.badges.new {
            markers.push("new");
        }
        if product.badges.featured {
            markers.push("featured");
        }
        if product.badges.popular {
            markers.push("popular");
        }

        let _ = write!(
            out,
            "{:>3}  {:<20} {:>8}  {:<12}",
            product.id.as_str(),
            product.name,
            product.price.to_string(),
            product.category.name
        );
        if !markers.is_empty() {
            let _ = write!(out, " [{}]", markers.join(", "));
        }
        out.push('\n');
    }
    out
}
