use color_eyre::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;
use review_store::ReviewStore;
use serde_json::json;

use crate::output::{Output, OutputFormat};

pub fn run_stats(
    product: &str,
    handle: Option<&str>,
    store: &ReviewStore,
    output: &Output,
) -> Result<()> {
    tracing::debug!("computing stats for {product}");

    let stats = store.review_stats(product, handle);

    if output.format() != OutputFormat::Human {
        output.json(&json!({
            "product": product,
            "stats": stats,
        }));
        return Ok(());
    }

    if stats.total_reviews == 0 {
        output.warn(format!("No reviews found for {product}"));
        return Ok(());
    }

    output.println(format!(
        "{} {}  based on {} reviews",
        format!("{:.1}", stats.average_rating).bold(),
        stars(stats.average_rating),
        stats.total_reviews
    ));
    output.println("");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Stars", "Share", ""]);
    for value in (1..=5).rev() {
        let pct = stats.percentage.get(value);
        table.add_row(vec![
            Cell::new(format!("{value}★")),
            Cell::new(format!("{pct}%")),
            Cell::new(bar(pct)),
        ]);
    }
    output.println(table.to_string());

    output.println(format!(
        "{}% would recommend this product",
        stats.would_recommend
    ));
    output.println(format!("{} verified purchases", stats.verified_purchases));
    output.println(format!(
        "{} with photos, {} with videos",
        stats.with_photos, stats.with_videos
    ));

    Ok(())
}

fn stars(rating: f64) -> String {
    let filled = rating.floor() as usize;
    let mut rendered = String::new();
    for slot in 0..5 {
        rendered.push(if slot < filled { '★' } else { '☆' });
    }
    rendered.yellow().to_string()
}

// 20 cells, 5 percentage points each
fn bar(percentage: u32) -> String {
    "█".repeat((percentage as usize + 2) / 5)
}
