mod drafts;
mod home;
mod topics;

pub use drafts::{build_draft_queue, DraftQueue};
pub use home::{build_home_page, HomePage, RECENT_LIMIT};
pub use topics::{TopicIndex, TopicListing};
