mod errors;
mod parser;
mod slug;
mod timestamp;
mod types;
mod types_ext;

pub use errors::*;
pub use parser::parse_article;
pub use slug::{publication_slug, slugify};
pub use timestamp::{
    format_stored_timestamp, normalize_stored_timestamp_to_utc, parse_stored_timestamp,
};
pub use types::*;
