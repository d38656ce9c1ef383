use serde::{Deserialize, Serialize};

/// AI explanation of a topic, from /ai/teach-topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeachTopicResponse {
    pub topic: String,
    pub explanation: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
}

impl TeachTopicResponse {
    /// Every resource split into (label, url). Entries look like
    /// "GeeksforGeeks Tutorial: https://..."; ones without a link keep their
    /// full text as the label.
    pub fn resource_links(&self) -> Vec<(&str, Option<&str>)> {
        self.resources
            .iter()
            .map(|r| match r.find("http") {
                Some(idx) => {
                    let label = r[..idx].trim().trim_end_matches(':').trim();
                    (label, Some(r[idx..].trim()))
                }
                None => (r.trim(), None),
            })
            .collect()
    }
}
