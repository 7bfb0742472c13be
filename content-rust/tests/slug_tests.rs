use baygull_content::{publication_slug, slugify, PublishMeta};

#[test]
fn titles_become_url_safe_slugs() {
    assert_eq!(
        slugify("Seagull Steals Dean's Sandwich!"),
        "seagull-steals-dean-s-sandwich"
    );
    assert_eq!(slugify("Breaking: GULLS 101"), "breaking-gulls-101");
}

#[test]
fn separator_runs_collapse_and_edges_are_trimmed() {
    assert_eq!(slugify("  Hello,   World  "), "hello-world");
    assert_eq!(slugify("--already--slugged--"), "already-slugged");
}

#[test]
fn titles_without_alphanumerics_yield_an_empty_slug() {
    assert_eq!(slugify("!!!"), "");
}

#[test]
fn publication_slug_honors_the_derivation_flag() {
    let stored = PublishMeta::new("stored-slug");
    assert_eq!(publication_slug("A New Title", &stored), "stored-slug");

    let derived = PublishMeta::new("stored-slug").with_derive_slug_from_title(true);
    assert_eq!(publication_slug("A New Title", &derived), "a-new-title");
}
