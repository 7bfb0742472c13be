use crate::{ArticleKind, ArticleStatus};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseArticleError {
    /// A field present on the record fails its primitive constraint
    /// (wrong type, malformed timestamp, malformed URL).
    #[error("Invalid field `{0}`: {1}")]
    InvalidField(&'static str, String),
    /// The record does not structurally match any legal article shape.
    /// The originating query is missing columns or joined a surplus
    /// metadata table.
    #[error("Record matches no article shape: {0}")]
    ShapeMismatch(String),
    /// The record is a well-formed article whose kind or status differs
    /// from what the caller asserted. The caller joined the wrong
    /// metadata tables for this article.
    #[error("Expected a {expected_kind}/{expected_status} article, found {found_kind}/{found_status}")]
    VariantMismatch {
        expected_kind: ArticleKind,
        expected_status: ArticleStatus,
        found_kind: ArticleKind,
        found_status: ArticleStatus,
    },
}

/// A role ordinal outside the persisted set.
#[derive(Error, Debug)]
#[error("Unknown role ordinal: {0}")]
pub struct UnknownRole(pub u8);

pub type ParseArticleResult<T> = Result<T, ParseArticleError>;
