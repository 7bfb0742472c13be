use baygull_content::DraftArticle;
use serde::Serialize;

/// The editorial submission queue, oldest submission first.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DraftQueue {
    /// Drafts ready for editorial work.
    pub ready: Vec<DraftArticle>,
    /// Written drafts still waiting for their editing copy. Until the
    /// import pipeline fills in the editing link there is nothing for
    /// an editor to open.
    pub missing_links: Vec<DraftArticle>,
}

/// Sorts drafts oldest-submission-first and splits off the ones an
/// editor cannot work on yet.
#[must_use]
pub fn build_draft_queue(mut drafts: Vec<DraftArticle>) -> DraftQueue {
    drafts.sort_by_key(|draft| draft.draft_meta().submitted_at);
    let (missing_links, ready): (Vec<_>, Vec<_>) =
        drafts.into_iter().partition(is_missing_editing_link);
    DraftQueue {
        ready,
        missing_links,
    }
}

fn is_missing_editing_link(draft: &DraftArticle) -> bool {
    match draft {
        DraftArticle::Default(article) => article.editing_url.is_empty(),
        // Graphics and headlines have no external editing copy.
        DraftArticle::Graphic(_) | DraftArticle::Headline(_) => false,
    }
}
