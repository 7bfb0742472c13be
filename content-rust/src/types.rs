use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The content kind of an article. Fixed at creation, never changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArticleKind {
    /// A written piece with a rich-text body and a summary.
    Default,
    /// An illustration or comic; carries a summary but no body.
    Graphic,
    /// A one-line satirical headline with no further content.
    Headline,
}

/// The lifecycle status of an article.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Draft,
    Published,
    Archived,
}

/// An article in exactly one of its nine legal shapes (kind x status).
/// Values of this type only come out of [`parse_article`] or the typed
/// constructors, so consumers can match on it without re-validating.
///
/// [`parse_article`]: crate::parse_article
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Article {
    Draft(DraftArticle),
    Published(PublishedArticle),
    Archived(ArchivedArticle),
}

/// A draft article of any kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DraftArticle {
    Default(DefaultDraftArticle),
    Graphic(GraphicDraftArticle),
    Headline(HeadlineDraftArticle),
}

/// A published article of any kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PublishedArticle {
    Default(DefaultPublishedArticle),
    Graphic(GraphicPublishedArticle),
    Headline(HeadlinePublishedArticle),
}

/// An archived article of any kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ArchivedArticle {
    Default(DefaultArchivedArticle),
    Graphic(GraphicArchivedArticle),
    Headline(HeadlineArchivedArticle),
}

/// Fields every article carries regardless of kind or status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleBase {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,
    pub title: String,
    #[serde(with = "crate::timestamp::stored")]
    pub created_at: DateTime<Utc>,
}

/// Content fields of a `default`-kind article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DefaultContent {
    /// The rich-text/HTML body.
    pub content: String,
    /// The summary shown in listings.
    pub description: String,
}

/// Content fields of a `graphic`-kind article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphicContent {
    /// The summary shown in listings.
    pub description: String,
}

/// Prospective publication settings carried on a draft. Mirrors
/// [`PublishedMeta`] minus the publish timestamp, so editors can preview
/// how the article will appear once published.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublishMeta {
    pub slug: String,
    pub is_highlighted: bool,
    /// When set, the slug is derived from the title at publication time
    /// instead of taken from `slug`.
    pub derive_slug_from_title: bool,
}

/// Editorial metadata attached to an article while it is a draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DraftMeta {
    /// The contributor's pitch of the piece's key ideas.
    pub key_ideas: String,
    /// A free-form note from the contributor to the editors.
    pub message: String,
    #[serde(with = "crate::timestamp::stored")]
    pub submitted_at: DateTime<Utc>,
    #[serde(with = "crate::timestamp::stored")]
    pub updated_at: DateTime<Utc>,
    pub publish_meta: PublishMeta,
}

/// Metadata assigned when an article is published.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublishedMeta {
    /// Unique URL-safe identifier, assigned at publication.
    pub slug: String,
    /// Editorial flag for promotional placement on the home page.
    pub is_highlighted: bool,
    pub derive_slug_from_title: bool,
    #[serde(with = "crate::timestamp::stored")]
    pub published_at: DateTime<Utc>,
}

/// Metadata assigned when an article is archived.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedMeta {
    #[serde(with = "crate::timestamp::stored")]
    pub archived_at: DateTime<Utc>,
}

/// A written piece while it is being drafted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DefaultDraftArticle {
    #[serde(flatten)]
    pub base: ArticleBase,
    #[serde(flatten)]
    pub content: DefaultContent,
    #[serde(flatten)]
    pub draft: DraftMeta,
    /// Link to the external editing copy. Empty until the import
    /// pipeline assigns one; otherwise a well-formed URL.
    pub editing_url: String,
    /// Link to the contributor's original document. Empty or a
    /// well-formed URL.
    pub original_url: String,
}

/// A graphic while it is being drafted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphicDraftArticle {
    #[serde(flatten)]
    pub base: ArticleBase,
    #[serde(flatten)]
    pub content: GraphicContent,
    #[serde(flatten)]
    pub draft: DraftMeta,
}

/// A headline while it is being drafted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineDraftArticle {
    #[serde(flatten)]
    pub base: ArticleBase,
    #[serde(flatten)]
    pub draft: DraftMeta,
}

/// A published written piece.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DefaultPublishedArticle {
    #[serde(flatten)]
    pub base: ArticleBase,
    #[serde(flatten)]
    pub content: DefaultContent,
    #[serde(flatten)]
    pub published: PublishedMeta,
}

/// A published graphic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphicPublishedArticle {
    #[serde(flatten)]
    pub base: ArticleBase,
    #[serde(flatten)]
    pub content: GraphicContent,
    #[serde(flatten)]
    pub published: PublishedMeta,
}

/// A published headline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeadlinePublishedArticle {
    #[serde(flatten)]
    pub base: ArticleBase,
    #[serde(flatten)]
    pub published: PublishedMeta,
}

/// An archived written piece.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DefaultArchivedArticle {
    #[serde(flatten)]
    pub base: ArticleBase,
    #[serde(flatten)]
    pub content: DefaultContent,
    #[serde(flatten)]
    pub archived: ArchivedMeta,
}

/// An archived graphic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphicArchivedArticle {
    #[serde(flatten)]
    pub base: ArticleBase,
    #[serde(flatten)]
    pub content: GraphicContent,
    #[serde(flatten)]
    pub archived: ArchivedMeta,
}

/// An archived headline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineArchivedArticle {
    #[serde(flatten)]
    pub base: ArticleBase,
    #[serde(flatten)]
    pub archived: ArchivedMeta,
}

/// A tag used to organize articles. Many-to-many with articles; the
/// join is owned by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    /// Unique display name.
    pub name: String,
}

/// An account role, persisted as an ordinal. The value `1` is reserved
/// and unused.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub enum Role {
    Member,
    Administrator,
}

/// An author/editor account. Authorship of articles is a join owned by
/// the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    /// Unique address, supplied by the external auth provider.
    pub email: String,
    /// Avatar URL, may be empty.
    pub image: String,
    pub role: Role,
}
