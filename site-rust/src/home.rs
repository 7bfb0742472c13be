use baygull_content::PublishedArticle;
use serde::Serialize;

/// Maximum number of articles shown in the recent bucket.
pub const RECENT_LIMIT: usize = 8;

/// The three display buckets of the home page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HomePage {
    /// The most recently published article; `None` until the first
    /// article is published, which the renderer shows as a coming-soon
    /// state.
    pub latest: Option<PublishedArticle>,
    /// Highlighted articles after the latest, newest first. Unbounded.
    pub highlights: Vec<PublishedArticle>,
    /// Non-highlighted articles after the latest, newest first, capped
    /// at [`RECENT_LIMIT`].
    pub recent: Vec<PublishedArticle>,
}

/// Partitions the published articles into home-page buckets.
///
/// `articles` must be ordered newest-first by publish time; ordering is
/// the query layer's responsibility and is preserved within each
/// bucket. An empty input yields the empty home page.
#[must_use]
pub fn build_home_page(articles: Vec<PublishedArticle>) -> HomePage {
    let mut rest = articles.into_iter();
    let latest = rest.next();

    let (highlights, mut recent): (Vec<_>, Vec<_>) =
        rest.partition(PublishedArticle::is_highlighted);
    recent.truncate(RECENT_LIMIT);

    tracing::debug!(
        has_latest = latest.is_some(),
        highlights = highlights.len(),
        recent = recent.len(),
        "curated home page"
    );

    HomePage {
        latest,
        highlights,
        recent,
    }
}
