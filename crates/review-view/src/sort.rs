use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use review_models::Review;

/// Sort order for the review listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Newest,
    Oldest,
    Highest,
    Lowest,
    #[default]
    MostHelpful,
}

impl SortKey {
    pub fn compare(self, a: &Review, b: &Review) -> Ordering {
        match self {
            SortKey::Newest => b.date.cmp(&a.date),
            SortKey::Oldest => a.date.cmp(&b.date),
            SortKey::Highest => b.rating.cmp(&a.rating),
            SortKey::Lowest => a.rating.cmp(&b.rating),
            // Net vote balance, descending. Negative balances are valid keys.
            SortKey::MostHelpful => b.helpfulness_score().cmp(&a.helpfulness_score()),
        }
    }

    /// Stable sort, so reviews with equal keys keep collection order.
    pub fn apply(self, reviews: &mut [Review]) {
        reviews.sort_by(|a, b| self.compare(a, b));
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "highest" => Ok(SortKey::Highest),
            "lowest" => Ok(SortKey::Lowest),
            "helpful" | "most-helpful" => Ok(SortKey::MostHelpful),
            _ => Err(format!(
                "Invalid sort key: {}. Use 'newest', 'oldest', 'highest', 'lowest', or 'helpful'",
                s
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Highest => "highest",
            SortKey::Lowest => "lowest",
            SortKey::MostHelpful => "helpful",
        };
        write!(f, "{name}")
    }
}
