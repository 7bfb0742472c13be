use baygull_content::{PublishedArticle, Topic};
use serde::Serialize;
use std::collections::BTreeMap;

/// One topic's listing: the topic and its articles, newest first.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TopicListing {
    pub topic: Topic,
    pub articles: Vec<PublishedArticle>,
}

/// Per-topic listings for the public site, topics ordered by name.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TopicIndex {
    pub listings: Vec<TopicListing>,
}

impl TopicIndex {
    /// Groups published articles by topic. `tagged` pairs each article
    /// with its topics as supplied by the article-topic join; article
    /// order within a listing follows the input order, so a
    /// newest-first input yields newest-first listings.
    #[must_use]
    pub fn build(tagged: Vec<(PublishedArticle, Vec<Topic>)>) -> Self {
        let mut by_name: BTreeMap<String, TopicListing> = BTreeMap::new();
        for (article, topics) in tagged {
            for topic in topics {
                by_name
                    .entry(topic.name.clone())
                    .or_insert_with(|| TopicListing {
                        topic,
                        articles: Vec::new(),
                    })
                    .articles
                    .push(article.clone());
            }
        }
        Self {
            listings: by_name.into_values().collect(),
        }
    }

    /// Looks up the listing for a topic by name.
    #[must_use]
    pub fn listing(&self, name: &str) -> Option<&TopicListing> {
        self.listings
            .iter()
            .find(|listing| listing.topic.name == name)
    }
}
