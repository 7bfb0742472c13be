use baygull_content::{
    ArticleBase, HeadlinePublishedArticle, PublishedArticle, PublishedMeta, Topic,
};
use baygull_site::TopicIndex;
use chrono::{Duration, TimeZone, Utc};

fn published(index: usize) -> PublishedArticle {
    let published_at =
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() - Duration::hours(index as i64);
    PublishedArticle::Headline(HeadlinePublishedArticle::new(
        ArticleBase::new(
            format!("art_{index}"),
            format!("Headline {index}"),
            published_at,
        ),
        PublishedMeta::new(format!("headline-{index}"), published_at),
    ))
}

fn news() -> Topic {
    Topic::new("top_news", "Campus News")
}

fn satire() -> Topic {
    Topic::new("top_satire", "Satire")
}

#[test]
fn articles_group_under_each_of_their_topics() {
    let index = TopicIndex::build(vec![
        (published(0), vec![news()]),
        (published(1), vec![news(), satire()]),
        (published(2), vec![satire()]),
    ]);

    let names: Vec<&str> = index
        .listings
        .iter()
        .map(|listing| listing.topic.name.as_str())
        .collect();
    assert_eq!(names, ["Campus News", "Satire"]);

    let news_ids: Vec<&str> = index
        .listing("Campus News")
        .unwrap()
        .articles
        .iter()
        .map(|article| article.base().id.as_str())
        .collect();
    assert_eq!(news_ids, ["art_0", "art_1"]);

    let satire_ids: Vec<&str> = index
        .listing("Satire")
        .unwrap()
        .articles
        .iter()
        .map(|article| article.base().id.as_str())
        .collect();
    assert_eq!(satire_ids, ["art_1", "art_2"]);
}

#[test]
fn unknown_topics_are_absent() {
    let index = TopicIndex::build(vec![(published(0), vec![news()])]);
    assert!(index.listing("Sports").is_none());
}

#[test]
fn an_empty_join_yields_an_empty_index() {
    let index = TopicIndex::build(vec![]);
    assert!(index.listings.is_empty());

    let untagged = TopicIndex::build(vec![(published(0), vec![])]);
    assert!(untagged.listings.is_empty());
}
