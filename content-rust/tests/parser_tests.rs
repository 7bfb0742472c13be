use baygull_content::{
    format_stored_timestamp, parse_article, Article, ArticleKind, ArticleStatus, ParseArticleError,
};
use serde_json::{json, Value};

const ALL_KINDS: [ArticleKind; 3] = [
    ArticleKind::Default,
    ArticleKind::Graphic,
    ArticleKind::Headline,
];
const ALL_STATUSES: [ArticleStatus; 3] = [
    ArticleStatus::Draft,
    ArticleStatus::Published,
    ArticleStatus::Archived,
];

fn merge(target: &mut Value, extra: Value) {
    let target = target.as_object_mut().unwrap();
    for (key, value) in extra.as_object().unwrap() {
        target.insert(key.clone(), value.clone());
    }
}

/// A minimally-complete, correctly-typed record for the given shape.
fn record(kind: ArticleKind, status: ArticleStatus) -> Value {
    let mut record = json!({
        "id": "art_1",
        "title": "Seagull Steals Dean's Sandwich",
        "createdAt": "2024-01-05T09:30:00.000",
        "type": kind.as_str(),
        "status": status.as_str(),
    });
    match kind {
        ArticleKind::Default => merge(
            &mut record,
            json!({
                "content": "<p>Eyewitnesses report a brazen theft on the quad.</p>",
                "description": "A campus gull strikes again.",
            }),
        ),
        ArticleKind::Graphic => merge(
            &mut record,
            json!({ "description": "A campus gull strikes again." }),
        ),
        ArticleKind::Headline => {}
    }
    match status {
        ArticleStatus::Draft => merge(
            &mut record,
            json!({
                "keyIdeas": "Gulls, sandwiches, campus justice",
                "message": "First submission, be gentle",
                "submittedAt": "2024-01-06T10:00:00.000",
                "updatedAt": "2024-01-07T11:15:00.000",
                "publishMeta": {
                    "slug": "seagull-steals-sandwich",
                    "isHighlighted": false,
                    "deriveSlugFromTitle": true,
                },
            }),
        ),
        ArticleStatus::Published => merge(
            &mut record,
            json!({
                "slug": "seagull-steals-sandwich",
                "isHighlighted": true,
                "deriveSlugFromTitle": false,
                "publishedAt": "2024-02-01T08:00:00.000",
            }),
        ),
        ArticleStatus::Archived => merge(
            &mut record,
            json!({ "archivedAt": "2024-06-01T00:00:00.000" }),
        ),
    }
    if kind == ArticleKind::Default && status == ArticleStatus::Draft {
        merge(
            &mut record,
            json!({
                "editingUrl": "https://docs.google.com/document/d/abc",
                "originalUrl": "",
            }),
        );
    }
    record
}

#[test]
fn every_shape_parses_and_round_trips() {
    for kind in ALL_KINDS {
        for status in ALL_STATUSES {
            let article = parse_article(&record(kind, status), kind, status)
                .unwrap_or_else(|err| panic!("{kind}/{status} failed: {err}"));

            assert_eq!(article.kind(), kind);
            assert_eq!(article.status(), status);
            assert_eq!(article.id(), "art_1");
            assert_eq!(article.title(), "Seagull Steals Dean's Sandwich");
            assert_eq!(
                format_stored_timestamp(article.created_at()),
                "2024-01-05T09:30:00.000Z"
            );

            match &article {
                Article::Draft(draft) => {
                    let meta = draft.draft_meta();
                    assert_eq!(meta.key_ideas, "Gulls, sandwiches, campus justice");
                    assert!(meta.publish_meta.derive_slug_from_title);
                    assert_eq!(meta.publish_meta.slug, "seagull-steals-sandwich");
                }
                Article::Published(published) => {
                    assert_eq!(published.slug(), "seagull-steals-sandwich");
                    assert!(published.is_highlighted());
                    assert_eq!(
                        format_stored_timestamp(published.published_meta().published_at),
                        "2024-02-01T08:00:00.000Z"
                    );
                }
                Article::Archived(archived) => {
                    assert_eq!(
                        format_stored_timestamp(archived.archived_meta().archived_at),
                        "2024-06-01T00:00:00.000Z"
                    );
                }
            }
        }
    }
}

#[test]
fn written_draft_keeps_its_links() {
    let article = parse_article(
        &record(ArticleKind::Default, ArticleStatus::Draft),
        ArticleKind::Default,
        ArticleStatus::Draft,
    )
    .unwrap();

    let Article::Draft(baygull_content::DraftArticle::Default(draft)) = article else {
        panic!("expected a default draft");
    };
    assert_eq!(draft.editing_url, "https://docs.google.com/document/d/abc");
    assert_eq!(draft.original_url, "");
}

#[test]
fn removing_any_required_field_fails() {
    for kind in ALL_KINDS {
        for status in ALL_STATUSES {
            let complete = record(kind, status);
            let fields: Vec<String> = complete.as_object().unwrap().keys().cloned().collect();
            for field in fields {
                let mut incomplete = complete.clone();
                incomplete.as_object_mut().unwrap().remove(&field);
                let err = parse_article(&incomplete, kind, status)
                    .expect_err(&format!("{kind}/{status} parsed without `{field}`"));
                assert!(
                    matches!(err, ParseArticleError::ShapeMismatch(_)),
                    "{kind}/{status} without `{field}`: {err}"
                );
            }
        }
    }
}

#[test]
fn well_formed_record_of_another_kind_is_a_variant_mismatch() {
    let err = parse_article(
        &record(ArticleKind::Default, ArticleStatus::Published),
        ArticleKind::Graphic,
        ArticleStatus::Published,
    )
    .unwrap_err();

    match err {
        ParseArticleError::VariantMismatch {
            found_kind,
            found_status,
            ..
        } => {
            assert_eq!(found_kind, ArticleKind::Default);
            assert_eq!(found_status, ArticleStatus::Published);
        }
        other => panic!("expected a variant mismatch, got {other}"),
    }
}

#[test]
fn well_formed_record_of_another_status_is_a_variant_mismatch() {
    let err = parse_article(
        &record(ArticleKind::Default, ArticleStatus::Draft),
        ArticleKind::Default,
        ArticleStatus::Published,
    )
    .unwrap_err();
    assert!(matches!(err, ParseArticleError::VariantMismatch { .. }));
}

#[test]
fn malformed_primitives_are_field_errors() {
    let mut bad_date = record(ArticleKind::Headline, ArticleStatus::Archived);
    bad_date["createdAt"] = json!("yesterday");
    let err = parse_article(&bad_date, ArticleKind::Headline, ArticleStatus::Archived).unwrap_err();
    assert!(matches!(err, ParseArticleError::InvalidField("createdAt", _)));

    let mut bad_flag = record(ArticleKind::Graphic, ArticleStatus::Published);
    bad_flag["isHighlighted"] = json!("yes");
    let err =
        parse_article(&bad_flag, ArticleKind::Graphic, ArticleStatus::Published).unwrap_err();
    assert!(matches!(
        err,
        ParseArticleError::InvalidField("isHighlighted", _)
    ));

    let mut bad_title = record(ArticleKind::Headline, ArticleStatus::Draft);
    bad_title["title"] = json!(7);
    let err = parse_article(&bad_title, ArticleKind::Headline, ArticleStatus::Draft).unwrap_err();
    assert!(matches!(err, ParseArticleError::InvalidField("title", _)));
}

#[test]
fn malformed_publish_meta_is_a_field_error() {
    let mut missing_slug = record(ArticleKind::Graphic, ArticleStatus::Draft);
    missing_slug["publishMeta"] = json!({ "isHighlighted": false, "deriveSlugFromTitle": true });
    let err =
        parse_article(&missing_slug, ArticleKind::Graphic, ArticleStatus::Draft).unwrap_err();
    assert!(matches!(
        err,
        ParseArticleError::InvalidField("publishMeta", _)
    ));

    let mut not_an_object = record(ArticleKind::Graphic, ArticleStatus::Draft);
    not_an_object["publishMeta"] = json!("seagull-steals-sandwich");
    let err =
        parse_article(&not_an_object, ArticleKind::Graphic, ArticleStatus::Draft).unwrap_err();
    assert!(matches!(
        err,
        ParseArticleError::InvalidField("publishMeta", _)
    ));
}

#[test]
fn editing_url_is_empty_or_well_formed() {
    let mut empty = record(ArticleKind::Default, ArticleStatus::Draft);
    empty["editingUrl"] = json!("");
    assert!(parse_article(&empty, ArticleKind::Default, ArticleStatus::Draft).is_ok());

    let mut docs_link = record(ArticleKind::Default, ArticleStatus::Draft);
    docs_link["editingUrl"] = json!("https://docs.google.com/document/d/abc");
    assert!(parse_article(&docs_link, ArticleKind::Default, ArticleStatus::Draft).is_ok());

    let mut mangled = record(ArticleKind::Default, ArticleStatus::Draft);
    mangled["editingUrl"] = json!("not-a-url");
    let err = parse_article(&mangled, ArticleKind::Default, ArticleStatus::Draft).unwrap_err();
    assert!(matches!(
        err,
        ParseArticleError::InvalidField("editingUrl", _)
    ));
}

#[test]
fn foreign_shape_field_is_rejected() {
    let mut leaked = record(ArticleKind::Headline, ArticleStatus::Published);
    leaked["archivedAt"] = json!("2024-06-01T00:00:00.000");
    let err =
        parse_article(&leaked, ArticleKind::Headline, ArticleStatus::Published).unwrap_err();
    assert!(matches!(err, ParseArticleError::ShapeMismatch(_)));
}

#[test]
fn unknown_columns_are_ignored() {
    let mut padded = record(ArticleKind::Graphic, ArticleStatus::Archived);
    padded["rowVersion"] = json!(7);
    assert!(parse_article(&padded, ArticleKind::Graphic, ArticleStatus::Archived).is_ok());
}

#[test]
fn non_object_records_are_rejected() {
    let err = parse_article(
        &json!("not a record"),
        ArticleKind::Default,
        ArticleStatus::Published,
    )
    .unwrap_err();
    assert!(matches!(err, ParseArticleError::ShapeMismatch(_)));
}

#[test]
fn unrecognized_tag_values_are_field_errors() {
    let mut unknown_kind = record(ArticleKind::Default, ArticleStatus::Published);
    unknown_kind["type"] = json!("video");
    let err =
        parse_article(&unknown_kind, ArticleKind::Default, ArticleStatus::Published).unwrap_err();
    assert!(matches!(err, ParseArticleError::InvalidField("type", _)));
}

#[test]
fn parsed_articles_serialize_with_their_tags() {
    let article = parse_article(
        &record(ArticleKind::Graphic, ArticleStatus::Published),
        ArticleKind::Graphic,
        ArticleStatus::Published,
    )
    .unwrap();

    let value = serde_json::to_value(&article).unwrap();
    assert_eq!(value["type"], "graphic");
    assert_eq!(value["status"], "published");
    assert_eq!(value["slug"], "seagull-steals-sandwich");
    assert_eq!(value["publishedAt"], "2024-02-01T08:00:00.000Z");

    let round_tripped: Article = serde_json::from_value(value).unwrap();
    assert_eq!(round_tripped, article);
}
