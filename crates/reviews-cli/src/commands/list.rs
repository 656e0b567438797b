use chrono::NaiveDate;
use color_eyre::Result;
use owo_colors::OwoColorize;
use review_models::{MediaKind, Review};
use review_store::ReviewStore;
use review_view::{FilterKey, ReviewList, SortKey};
use serde_json::json;

use crate::output::{Output, OutputFormat};

pub fn run_list(
    product: &str,
    handle: Option<&str>,
    sort: SortKey,
    filter: FilterKey,
    expand: Option<String>,
    store: &ReviewStore,
    output: &Output,
) -> Result<()> {
    let mut list = ReviewList::new(product, handle.map(str::to_string));
    list.set_sort(sort);
    list.set_filter(filter);
    if let Some(review_id) = expand {
        list.expand(review_id);
    }

    let total = store.product_reviews(product, handle).len();
    let visible = list.visible(store);

    if output.format() != OutputFormat::Human {
        output.json(&json!({
            "product": product,
            "sort": sort.to_string(),
            "filter": filter.to_string(),
            "total": total,
            "visible": visible,
        }));
        return Ok(());
    }

    if visible.is_empty() {
        output.warn("No reviews match your current filters.");
        return Ok(());
    }

    output.println(format!(
        "{} of {} reviews (filter: {}, sort: {})",
        visible.len(),
        total,
        filter,
        sort
    ));

    for review in &visible {
        output.println("");
        print_review(&list, review, output);
    }

    Ok(())
}

fn print_review(list: &ReviewList, review: &Review, output: &Output) {
    let mut header = format!("{} {}", stars(review.rating), review.user_name.bold());
    if review.verified {
        header.push_str(&format!(" {}", "Verified Purchase".green()));
    }
    header.push_str(&format!("  {}", format_date(review.date)));
    if let Some(location) = &review.user_location {
        header.push_str(&format!("  {location}"));
    }
    output.println(header);
    output.println(format!("{}", review.title.bold()));

    let mut tags: Vec<String> = review
        .skin_type
        .iter()
        .map(|skin| format!("{skin} Skin"))
        .collect();
    tags.push(format!("Age {}", review.age_range));
    tags.extend(review.skin_concerns.iter().cloned());
    output.println(tags.join(" · "));

    let view = list.content_view(review);
    if view.truncated {
        output.println(format!("{}… {}", view.text, "Read more".purple()));
    } else {
        output.println(view.text);
    }

    if let Some(pair) = &review.before_after {
        output.println(format!(
            "Progress photos ({}): {} → {}",
            pair.timeframe, pair.before, pair.after
        ));
    }

    let photos = review
        .media
        .iter()
        .filter(|m| m.kind == MediaKind::Image)
        .count();
    let videos = review
        .media
        .iter()
        .filter(|m| m.kind == MediaKind::Video)
        .count();
    if photos + videos > 0 {
        output.println(format!("Attachments: {photos} photo(s), {videos} video(s)"));
    }

    output.println(format!(
        "Helpful? 👍 {}  👎 {}",
        review.helpful, review.not_helpful
    ));
}

fn stars(rating: u8) -> String {
    let mut rendered = String::new();
    for slot in 1..=5 {
        rendered.push(if slot <= rating { '★' } else { '☆' });
    }
    rendered.yellow().to_string()
}

fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_is_human_readable() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 8).unwrap();
        assert_eq!(format_date(date), "November 8, 2024");
    }
}
