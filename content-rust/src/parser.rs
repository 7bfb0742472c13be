use crate::{
    timestamp, ArchivedArticle, ArchivedMeta, Article, ArticleBase, ArticleKind, ArticleStatus,
    DefaultArchivedArticle, DefaultContent, DefaultDraftArticle, DefaultPublishedArticle,
    DraftArticle, DraftMeta, GraphicArchivedArticle, GraphicContent, GraphicDraftArticle,
    GraphicPublishedArticle, HeadlineArchivedArticle, HeadlineDraftArticle,
    HeadlinePublishedArticle, ParseArticleError, ParseArticleResult, PublishMeta,
    PublishedArticle, PublishedMeta,
};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use url::Url;

type Record = Map<String, Value>;

/// Primitive constraint a record field must satisfy if present.
#[derive(Debug, Clone, Copy)]
enum Constraint {
    Str,
    Bool,
    Timestamp,
    /// Empty string, or a well-formed URL.
    Link,
    PublishMeta,
    KindTag,
    StatusTag,
}

/// Every field any shape may carry, with its constraint. A key on a
/// record that is not listed here belongs to no shape and is ignored.
const FIELD_CONSTRAINTS: &[(&str, Constraint)] = &[
    ("id", Constraint::Str),
    ("title", Constraint::Str),
    ("createdAt", Constraint::Timestamp),
    ("type", Constraint::KindTag),
    ("status", Constraint::StatusTag),
    ("content", Constraint::Str),
    ("description", Constraint::Str),
    ("keyIdeas", Constraint::Str),
    ("message", Constraint::Str),
    ("submittedAt", Constraint::Timestamp),
    ("updatedAt", Constraint::Timestamp),
    ("publishMeta", Constraint::PublishMeta),
    ("editingUrl", Constraint::Link),
    ("originalUrl", Constraint::Link),
    ("slug", Constraint::Str),
    ("isHighlighted", Constraint::Bool),
    ("deriveSlugFromTitle", Constraint::Bool),
    ("publishedAt", Constraint::Timestamp),
    ("archivedAt", Constraint::Timestamp),
];

const BASE_FIELDS: &[&str] = &["id", "title", "createdAt", "type", "status"];
const DEFAULT_CONTENT_FIELDS: &[&str] = &["content", "description"];
const GRAPHIC_CONTENT_FIELDS: &[&str] = &["description"];
const HEADLINE_CONTENT_FIELDS: &[&str] = &[];
const DRAFT_FIELDS: &[&str] = &["keyIdeas", "message", "submittedAt", "updatedAt", "publishMeta"];
const DRAFT_LINK_FIELDS: &[&str] = &["editingUrl", "originalUrl"];
const PUBLISHED_FIELDS: &[&str] = &["slug", "isHighlighted", "deriveSlugFromTitle", "publishedAt"];
const ARCHIVED_FIELDS: &[&str] = &["archivedAt"];

/// Validates a raw joined record and narrows it into exactly one
/// article shape.
///
/// `record` is the reassembly of the base row with one per-status and
/// one per-kind metadata row; which tables were joined is the caller's
/// choice, so the caller must assert the (kind, status) pair it queried
/// for. A record that is well-formed for a *different* pair is rejected,
/// which catches wrong-join bugs before they reach rendering code.
///
/// Validation runs in three passes: every present field is checked
/// against its primitive constraint, the record's own tags select a
/// shape whose field set must be exactly satisfied, and the selected
/// shape must match the asserted pair.
///
/// # Errors
/// - [`ParseArticleError::InvalidField`] for a field failing its
///   primitive constraint.
/// - [`ParseArticleError::ShapeMismatch`] when no legal shape matches.
/// - [`ParseArticleError::VariantMismatch`] when the matched shape is
///   not the asserted one.
pub fn parse_article(
    record: &Value,
    expected_kind: ArticleKind,
    expected_status: ArticleStatus,
) -> ParseArticleResult<Article> {
    parse_record(record, expected_kind, expected_status).map_err(|err| {
        // Field names only; raw values never reach the logs.
        tracing::warn!(
            kind = %expected_kind,
            status = %expected_status,
            fields = ?field_names(record),
            %err,
            "article record failed validation"
        );
        err
    })
}

fn parse_record(
    record: &Value,
    expected_kind: ArticleKind,
    expected_status: ArticleStatus,
) -> ParseArticleResult<Article> {
    let map = record.as_object().ok_or_else(|| {
        ParseArticleError::ShapeMismatch("record is not a key/value object".to_string())
    })?;

    for (field, constraint) in FIELD_CONSTRAINTS {
        if let Some(value) = map.get(*field) {
            check_constraint(field, value, *constraint)?;
        }
    }

    let (kind, status) = record_tags(map)?;
    check_shape(map, kind, status)?;

    if kind != expected_kind || status != expected_status {
        return Err(ParseArticleError::VariantMismatch {
            expected_kind,
            expected_status,
            found_kind: kind,
            found_status: status,
        });
    }

    build_article(map, kind, status)
}

fn field_names(record: &Value) -> Vec<&str> {
    record
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ParseArticleError {
    ParseArticleError::InvalidField(field, reason.into())
}

fn missing(field: &str) -> ParseArticleError {
    ParseArticleError::ShapeMismatch(format!("missing required field `{field}`"))
}

fn check_constraint(
    field: &'static str,
    value: &Value,
    constraint: Constraint,
) -> ParseArticleResult<()> {
    match constraint {
        Constraint::Str => {
            if value.is_string() {
                Ok(())
            } else {
                Err(invalid(field, "expected a string"))
            }
        }
        Constraint::Bool => {
            if value.is_boolean() {
                Ok(())
            } else {
                Err(invalid(field, "expected a boolean"))
            }
        }
        Constraint::Timestamp => {
            let raw = value
                .as_str()
                .ok_or_else(|| invalid(field, "expected a timestamp string"))?;
            timestamp::parse_stored_timestamp(raw)
                .map(|_| ())
                .map_err(|err| invalid(field, err.to_string()))
        }
        Constraint::Link => {
            let raw = value
                .as_str()
                .ok_or_else(|| invalid(field, "expected a string"))?;
            if raw.is_empty() || Url::parse(raw).is_ok() {
                Ok(())
            } else {
                Err(invalid(field, "not a well-formed URL"))
            }
        }
        Constraint::PublishMeta => check_publish_meta(field, value),
        Constraint::KindTag => value
            .as_str()
            .and_then(ArticleKind::from_tag)
            .map(|_| ())
            .ok_or_else(|| invalid(field, "not a recognized article kind")),
        Constraint::StatusTag => value
            .as_str()
            .and_then(ArticleStatus::from_tag)
            .map(|_| ())
            .ok_or_else(|| invalid(field, "not a recognized article status")),
    }
}

fn check_publish_meta(field: &'static str, value: &Value) -> ParseArticleResult<()> {
    let Some(meta) = value.as_object() else {
        return Err(invalid(field, "expected an object"));
    };
    for (sub, expects_bool) in [
        ("slug", false),
        ("isHighlighted", true),
        ("deriveSlugFromTitle", true),
    ] {
        let ok = match meta.get(sub) {
            Some(sub_value) if expects_bool => sub_value.is_boolean(),
            Some(sub_value) => sub_value.is_string(),
            None => false,
        };
        if !ok {
            return Err(invalid(field, format!("missing or malformed `{sub}`")));
        }
    }
    Ok(())
}

fn record_tags(map: &Record) -> ParseArticleResult<(ArticleKind, ArticleStatus)> {
    // Tag values were already constraint-checked; only absence is left
    // to catch here.
    let kind = map
        .get("type")
        .and_then(Value::as_str)
        .and_then(ArticleKind::from_tag)
        .ok_or_else(|| missing("type"))?;
    let status = map
        .get("status")
        .and_then(Value::as_str)
        .and_then(ArticleStatus::from_tag)
        .ok_or_else(|| missing("status"))?;
    Ok((kind, status))
}

fn required_fields(kind: ArticleKind, status: ArticleStatus) -> Vec<&'static str> {
    let mut fields = Vec::from(BASE_FIELDS);
    fields.extend_from_slice(match kind {
        ArticleKind::Default => DEFAULT_CONTENT_FIELDS,
        ArticleKind::Graphic => GRAPHIC_CONTENT_FIELDS,
        ArticleKind::Headline => HEADLINE_CONTENT_FIELDS,
    });
    fields.extend_from_slice(match status {
        ArticleStatus::Draft => DRAFT_FIELDS,
        ArticleStatus::Published => PUBLISHED_FIELDS,
        ArticleStatus::Archived => ARCHIVED_FIELDS,
    });
    if kind == ArticleKind::Default && status == ArticleStatus::Draft {
        fields.extend_from_slice(DRAFT_LINK_FIELDS);
    }
    fields
}

/// A shape matches only if its required fields are all present and no
/// field owned by a foreign shape leaked in through a bad join.
fn check_shape(map: &Record, kind: ArticleKind, status: ArticleStatus) -> ParseArticleResult<()> {
    let required = required_fields(kind, status);
    for field in &required {
        if !map.contains_key(*field) {
            return Err(ParseArticleError::ShapeMismatch(format!(
                "missing required field `{field}` for a {kind}/{status} article"
            )));
        }
    }
    for (field, _) in FIELD_CONSTRAINTS {
        if map.contains_key(*field) && !required.contains(field) {
            return Err(ParseArticleError::ShapeMismatch(format!(
                "field `{field}` does not belong to a {kind}/{status} article"
            )));
        }
    }
    Ok(())
}

fn str_field(map: &Record, field: &'static str) -> ParseArticleResult<String> {
    map.get(field)
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
        .ok_or_else(|| missing(field))
}

fn bool_field(map: &Record, field: &'static str) -> ParseArticleResult<bool> {
    map.get(field)
        .and_then(Value::as_bool)
        .ok_or_else(|| missing(field))
}

fn timestamp_field(map: &Record, field: &'static str) -> ParseArticleResult<DateTime<Utc>> {
    let raw = map
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| missing(field))?;
    timestamp::parse_stored_timestamp(raw).map_err(|err| invalid(field, err.to_string()))
}

fn link_field(map: &Record, field: &'static str) -> ParseArticleResult<String> {
    let raw = str_field(map, field)?;
    if raw.is_empty() || Url::parse(&raw).is_ok() {
        Ok(raw)
    } else {
        Err(invalid(field, "not a well-formed URL"))
    }
}

fn publish_meta_field(map: &Record, field: &'static str) -> ParseArticleResult<PublishMeta> {
    let meta = map
        .get(field)
        .and_then(Value::as_object)
        .ok_or_else(|| missing(field))?;
    let sub_str = |sub: &str| {
        meta.get(sub)
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
            .ok_or_else(|| invalid(field, format!("missing or malformed `{sub}`")))
    };
    let sub_bool = |sub: &str| {
        meta.get(sub)
            .and_then(Value::as_bool)
            .ok_or_else(|| invalid(field, format!("missing or malformed `{sub}`")))
    };
    Ok(PublishMeta {
        slug: sub_str("slug")?,
        is_highlighted: sub_bool("isHighlighted")?,
        derive_slug_from_title: sub_bool("deriveSlugFromTitle")?,
    })
}

fn base_fields(map: &Record) -> ParseArticleResult<ArticleBase> {
    Ok(ArticleBase {
        id: str_field(map, "id")?,
        title: str_field(map, "title")?,
        created_at: timestamp_field(map, "createdAt")?,
    })
}

fn default_content(map: &Record) -> ParseArticleResult<DefaultContent> {
    Ok(DefaultContent {
        content: str_field(map, "content")?,
        description: str_field(map, "description")?,
    })
}

fn graphic_content(map: &Record) -> ParseArticleResult<GraphicContent> {
    Ok(GraphicContent {
        description: str_field(map, "description")?,
    })
}

fn draft_meta(map: &Record) -> ParseArticleResult<DraftMeta> {
    Ok(DraftMeta {
        key_ideas: str_field(map, "keyIdeas")?,
        message: str_field(map, "message")?,
        submitted_at: timestamp_field(map, "submittedAt")?,
        updated_at: timestamp_field(map, "updatedAt")?,
        publish_meta: publish_meta_field(map, "publishMeta")?,
    })
}

fn published_meta(map: &Record) -> ParseArticleResult<PublishedMeta> {
    Ok(PublishedMeta {
        slug: str_field(map, "slug")?,
        is_highlighted: bool_field(map, "isHighlighted")?,
        derive_slug_from_title: bool_field(map, "deriveSlugFromTitle")?,
        published_at: timestamp_field(map, "publishedAt")?,
    })
}

fn archived_meta(map: &Record) -> ParseArticleResult<ArchivedMeta> {
    Ok(ArchivedMeta {
        archived_at: timestamp_field(map, "archivedAt")?,
    })
}

fn build_article(
    map: &Record,
    kind: ArticleKind,
    status: ArticleStatus,
) -> ParseArticleResult<Article> {
    let article = match (kind, status) {
        (ArticleKind::Default, ArticleStatus::Draft) => {
            Article::Draft(DraftArticle::Default(DefaultDraftArticle {
                base: base_fields(map)?,
                content: default_content(map)?,
                draft: draft_meta(map)?,
                editing_url: link_field(map, "editingUrl")?,
                original_url: link_field(map, "originalUrl")?,
            }))
        }
        (ArticleKind::Graphic, ArticleStatus::Draft) => {
            Article::Draft(DraftArticle::Graphic(GraphicDraftArticle {
                base: base_fields(map)?,
                content: graphic_content(map)?,
                draft: draft_meta(map)?,
            }))
        }
        (ArticleKind::Headline, ArticleStatus::Draft) => {
            Article::Draft(DraftArticle::Headline(HeadlineDraftArticle {
                base: base_fields(map)?,
                draft: draft_meta(map)?,
            }))
        }
        (ArticleKind::Default, ArticleStatus::Published) => {
            Article::Published(PublishedArticle::Default(DefaultPublishedArticle {
                base: base_fields(map)?,
                content: default_content(map)?,
                published: published_meta(map)?,
            }))
        }
        (ArticleKind::Graphic, ArticleStatus::Published) => {
            Article::Published(PublishedArticle::Graphic(GraphicPublishedArticle {
                base: base_fields(map)?,
                content: graphic_content(map)?,
                published: published_meta(map)?,
            }))
        }
        (ArticleKind::Headline, ArticleStatus::Published) => {
            Article::Published(PublishedArticle::Headline(HeadlinePublishedArticle {
                base: base_fields(map)?,
                published: published_meta(map)?,
            }))
        }
        (ArticleKind::Default, ArticleStatus::Archived) => {
            Article::Archived(ArchivedArticle::Default(DefaultArchivedArticle {
                base: base_fields(map)?,
                content: default_content(map)?,
                archived: archived_meta(map)?,
            }))
        }
        (ArticleKind::Graphic, ArticleStatus::Archived) => {
            Article::Archived(ArchivedArticle::Graphic(GraphicArchivedArticle {
                base: base_fields(map)?,
                content: graphic_content(map)?,
                archived: archived_meta(map)?,
            }))
        }
        (ArticleKind::Headline, ArticleStatus::Archived) => {
            Article::Archived(ArchivedArticle::Headline(HeadlineArchivedArticle {
                base: base_fields(map)?,
                archived: archived_meta(map)?,
            }))
        }
    };
    Ok(article)
}
