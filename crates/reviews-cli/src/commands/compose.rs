use color_eyre::Result;
use dialoguer::{Input, Select};
use review_view::{ComposerRequest, ReviewComposer, ReviewList};
use serde_json::json;

use crate::output::{Output, OutputFormat};

/// Terminal rendition of the write-review surface. The listing only opens and
/// closes it; nothing the user enters flows back into the listing.
struct TerminalComposer<'a> {
    output: &'a Output,
}

impl ReviewComposer for TerminalComposer<'_> {
    fn open(&mut self, request: ComposerRequest) {
        self.output.println(format!(
            "Write a review for {} ({})",
            request.product_name, request.product_id
        ));
    }

    fn close(&mut self) {
        tracing::debug!("review composer closed");
    }
}

pub fn run_compose(product: &str, name: Option<String>, output: &Output) -> Result<()> {
    let product_name = name.unwrap_or_else(|| product.to_string());

    let mut list = ReviewList::new(product, None);
    let mut composer = TerminalComposer { output };
    list.open_composer(&mut composer, &product_name);

    let rating_labels = [
        "5 - Excellent",
        "4 - Good",
        "3 - Average",
        "2 - Poor",
        "1 - Terrible",
    ];
    let selection = Select::new()
        .with_prompt("Rating")
        .items(&rating_labels)
        .default(0)
        .interact()?;
    let rating = 5 - selection as u8;

    let title: String = Input::new().with_prompt("Title").interact_text()?;
    let content: String = Input::new().with_prompt("Your review").interact_text()?;

    let draft = json!({
        "productId": product,
        "productName": product_name,
        "rating": rating,
        "title": title,
        "content": content,
        "date": chrono::Utc::now().date_naive(),
    });

    match output.format() {
        OutputFormat::Human => {
            output.println("");
            output.success("Review drafted:");
            output.println(serde_json::to_string_pretty(&draft)?);
        }
        _ => output.json(&draft),
    }
    output.warn("Drafts are submitted by the storefront backend; nothing was written to the local dataset.");

    list.close_composer(&mut composer);

    Ok(())
}
