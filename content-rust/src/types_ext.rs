use crate::{
    ArchivedArticle, ArchivedMeta, Article, ArticleBase, ArticleKind, ArticleStatus,
    DefaultArchivedArticle, DefaultContent, DefaultDraftArticle, DefaultPublishedArticle,
    DraftArticle, DraftMeta, GraphicArchivedArticle, GraphicContent, GraphicDraftArticle,
    GraphicPublishedArticle, HeadlineArchivedArticle, HeadlineDraftArticle,
    HeadlinePublishedArticle, PublishMeta, PublishedArticle, PublishedMeta, Role, Topic,
    UnknownRole, User,
};
use chrono::{DateTime, Utc};
use std::fmt;

impl ArticleKind {
    /// The tag value as stored on records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Graphic => "graphic",
            Self::Headline => "headline",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "default" => Some(Self::Default),
            "graphic" => Some(Self::Graphic),
            "headline" => Some(Self::Headline),
            _ => None,
        }
    }
}

impl fmt::Display for ArticleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ArticleStatus {
    /// The tag value as stored on records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "draft" => Some(Self::Draft),
            "published" => Some(Self::Published),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ArticleBase {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            created_at,
        }
    }
}

impl DefaultContent {
    pub fn new(content: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            description: description.into(),
        }
    }
}

impl GraphicContent {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl PublishMeta {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            is_highlighted: false,
            derive_slug_from_title: false,
        }
    }

    #[must_use]
    pub fn with_is_highlighted(mut self, is_highlighted: bool) -> Self {
        self.is_highlighted = is_highlighted;
        self
    }

    #[must_use]
    pub fn with_derive_slug_from_title(mut self, derive_slug_from_title: bool) -> Self {
        self.derive_slug_from_title = derive_slug_from_title;
        self
    }
}

impl DraftMeta {
    pub fn new(
        submitted_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        publish_meta: PublishMeta,
    ) -> Self {
        Self {
            key_ideas: String::new(),
            message: String::new(),
            submitted_at,
            updated_at,
            publish_meta,
        }
    }

    #[must_use]
    pub fn with_key_ideas(mut self, key_ideas: impl Into<String>) -> Self {
        self.key_ideas = key_ideas.into();
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl PublishedMeta {
    pub fn new(slug: impl Into<String>, published_at: DateTime<Utc>) -> Self {
        Self {
            slug: slug.into(),
            is_highlighted: false,
            derive_slug_from_title: false,
            published_at,
        }
    }

    #[must_use]
    pub fn with_is_highlighted(mut self, is_highlighted: bool) -> Self {
        self.is_highlighted = is_highlighted;
        self
    }

    #[must_use]
    pub fn with_derive_slug_from_title(mut self, derive_slug_from_title: bool) -> Self {
        self.derive_slug_from_title = derive_slug_from_title;
        self
    }
}

impl ArchivedMeta {
    #[must_use]
    pub const fn new(archived_at: DateTime<Utc>) -> Self {
        Self { archived_at }
    }
}

impl DefaultDraftArticle {
    pub fn new(base: ArticleBase, content: DefaultContent, draft: DraftMeta) -> Self {
        Self {
            base,
            content,
            draft,
            editing_url: String::new(),
            original_url: String::new(),
        }
    }

    #[must_use]
    pub fn with_editing_url(mut self, editing_url: impl Into<String>) -> Self {
        self.editing_url = editing_url.into();
        self
    }

    #[must_use]
    pub fn with_original_url(mut self, original_url: impl Into<String>) -> Self {
        self.original_url = original_url.into();
        self
    }
}

impl GraphicDraftArticle {
    pub fn new(base: ArticleBase, content: GraphicContent, draft: DraftMeta) -> Self {
        Self {
            base,
            content,
            draft,
        }
    }
}

impl HeadlineDraftArticle {
    pub fn new(base: ArticleBase, draft: DraftMeta) -> Self {
        Self { base, draft }
    }
}

impl DefaultPublishedArticle {
    pub fn new(base: ArticleBase, content: DefaultContent, published: PublishedMeta) -> Self {
        Self {
            base,
            content,
            published,
        }
    }
}

impl GraphicPublishedArticle {
    pub fn new(base: ArticleBase, content: GraphicContent, published: PublishedMeta) -> Self {
        Self {
            base,
            content,
            published,
        }
    }
}

impl HeadlinePublishedArticle {
    pub fn new(base: ArticleBase, published: PublishedMeta) -> Self {
        Self { base, published }
    }
}

impl DefaultArchivedArticle {
    pub fn new(base: ArticleBase, content: DefaultContent, archived: ArchivedMeta) -> Self {
        Self {
            base,
            content,
            archived,
        }
    }
}

impl GraphicArchivedArticle {
    pub fn new(base: ArticleBase, content: GraphicContent, archived: ArchivedMeta) -> Self {
        Self {
            base,
            content,
            archived,
        }
    }
}

impl HeadlineArchivedArticle {
    pub fn new(base: ArticleBase, archived: ArchivedMeta) -> Self {
        Self { base, archived }
    }
}

impl DraftArticle {
    #[must_use]
    pub const fn kind(&self) -> ArticleKind {
        match self {
            Self::Default(_) => ArticleKind::Default,
            Self::Graphic(_) => ArticleKind::Graphic,
            Self::Headline(_) => ArticleKind::Headline,
        }
    }

    #[must_use]
    pub const fn base(&self) -> &ArticleBase {
        match self {
            Self::Default(article) => &article.base,
            Self::Graphic(article) => &article.base,
            Self::Headline(article) => &article.base,
        }
    }

    #[must_use]
    pub const fn draft_meta(&self) -> &DraftMeta {
        match self {
            Self::Default(article) => &article.draft,
            Self::Graphic(article) => &article.draft,
            Self::Headline(article) => &article.draft,
        }
    }
}

impl PublishedArticle {
    #[must_use]
    pub const fn kind(&self) -> ArticleKind {
        match self {
            Self::Default(_) => ArticleKind::Default,
            Self::Graphic(_) => ArticleKind::Graphic,
            Self::Headline(_) => ArticleKind::Headline,
        }
    }

    #[must_use]
    pub const fn base(&self) -> &ArticleBase {
        match self {
            Self::Default(article) => &article.base,
            Self::Graphic(article) => &article.base,
            Self::Headline(article) => &article.base,
        }
    }

    #[must_use]
    pub const fn published_meta(&self) -> &PublishedMeta {
        match self {
            Self::Default(article) => &article.published,
            Self::Graphic(article) => &article.published,
            Self::Headline(article) => &article.published,
        }
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.published_meta().slug
    }

    #[must_use]
    pub const fn is_highlighted(&self) -> bool {
        self.published_meta().is_highlighted
    }
}

impl ArchivedArticle {
    #[must_use]
    pub const fn kind(&self) -> ArticleKind {
        match self {
            Self::Default(_) => ArticleKind::Default,
            Self::Graphic(_) => ArticleKind::Graphic,
            Self::Headline(_) => ArticleKind::Headline,
        }
    }

    #[must_use]
    pub const fn base(&self) -> &ArticleBase {
        match self {
            Self::Default(article) => &article.base,
            Self::Graphic(article) => &article.base,
            Self::Headline(article) => &article.base,
        }
    }

    #[must_use]
    pub const fn archived_meta(&self) -> &ArchivedMeta {
        match self {
            Self::Default(article) => &article.archived,
            Self::Graphic(article) => &article.archived,
            Self::Headline(article) => &article.archived,
        }
    }
}

impl Article {
    #[must_use]
    pub const fn kind(&self) -> ArticleKind {
        match self {
            Self::Draft(article) => article.kind(),
            Self::Published(article) => article.kind(),
            Self::Archived(article) => article.kind(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> ArticleStatus {
        match self {
            Self::Draft(_) => ArticleStatus::Draft,
            Self::Published(_) => ArticleStatus::Published,
            Self::Archived(_) => ArticleStatus::Archived,
        }
    }

    #[must_use]
    pub const fn base(&self) -> &ArticleBase {
        match self {
            Self::Draft(article) => article.base(),
            Self::Published(article) => article.base(),
            Self::Archived(article) => article.base(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.base().id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.base().title
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.base().created_at
    }

    #[must_use]
    pub const fn as_draft(&self) -> Option<&DraftArticle> {
        match self {
            Self::Draft(article) => Some(article),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_published(&self) -> Option<&PublishedArticle> {
        match self {
            Self::Published(article) => Some(article),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_archived(&self) -> Option<&ArchivedArticle> {
        match self {
            Self::Archived(article) => Some(article),
            _ => None,
        }
    }
}

impl From<DefaultDraftArticle> for DraftArticle {
    fn from(value: DefaultDraftArticle) -> Self {
        Self::Default(value)
    }
}

impl From<GraphicDraftArticle> for DraftArticle {
    fn from(value: GraphicDraftArticle) -> Self {
        Self::Graphic(value)
    }
}

impl From<HeadlineDraftArticle> for DraftArticle {
    fn from(value: HeadlineDraftArticle) -> Self {
        Self::Headline(value)
    }
}

impl From<DefaultPublishedArticle> for PublishedArticle {
    fn from(value: DefaultPublishedArticle) -> Self {
        Self::Default(value)
    }
}

impl From<GraphicPublishedArticle> for PublishedArticle {
    fn from(value: GraphicPublishedArticle) -> Self {
        Self::Graphic(value)
    }
}

impl From<HeadlinePublishedArticle> for PublishedArticle {
    fn from(value: HeadlinePublishedArticle) -> Self {
        Self::Headline(value)
    }
}

impl From<DefaultArchivedArticle> for ArchivedArticle {
    fn from(value: DefaultArchivedArticle) -> Self {
        Self::Default(value)
    }
}

impl From<GraphicArchivedArticle> for ArchivedArticle {
    fn from(value: GraphicArchivedArticle) -> Self {
        Self::Graphic(value)
    }
}

impl From<HeadlineArchivedArticle> for ArchivedArticle {
    fn from(value: HeadlineArchivedArticle) -> Self {
        Self::Headline(value)
    }
}

impl From<DraftArticle> for Article {
    fn from(value: DraftArticle) -> Self {
        Self::Draft(value)
    }
}

impl From<PublishedArticle> for Article {
    fn from(value: PublishedArticle) -> Self {
        Self::Published(value)
    }
}

impl From<ArchivedArticle> for Article {
    fn from(value: ArchivedArticle) -> Self {
        Self::Archived(value)
    }
}

impl TryFrom<u8> for Role {
    type Error = UnknownRole;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Member),
            2 => Ok(Self::Administrator),
            other => Err(UnknownRole(other)),
        }
    }
}

impl From<Role> for u8 {
    fn from(role: Role) -> Self {
        match role {
            Role::Member => 0,
            Role::Administrator => 2,
        }
    }
}

impl Role {
    /// Whether this role may move articles through status transitions.
    #[must_use]
    pub const fn can_publish(self) -> bool {
        matches!(self, Self::Administrator)
    }
}

impl Topic {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            image: String::new(),
            role: Role::Member,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}
