use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const HR_CATEGORY: &str = "hr";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionItem {
    pub question: String,
    /// Reference answer; may be empty.
    #[serde(default)]
    pub answer: String,
}

/// A question tagged with the bucket it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchResult {
    pub question: String,
    pub answer: String,
    pub category: String,
}

impl SearchResult {
    pub fn from_item(item: &QuestionItem, category: &str) -> Self {
        Self {
            question: item.question.clone(),
            answer: item.answer.clone(),
            category: category.to_string(),
        }
    }
}

/// The whole question bank. Both keys are required; technical topics keep
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub hr: Vec<QuestionItem>,
    pub technical: IndexMap<String, Vec<QuestionItem>>,
}

impl QuestionBank {
    /// Returns the bucket for `name`, where `"hr"` names the flat hr list and
    /// anything else a technical topic.
    pub fn bucket(&self, name: &str) -> Option<&[QuestionItem]> {
        if name.eq_ignore_ascii_case(HR_CATEGORY) {
            Some(&self.hr)
        } else {
            self.topic(name)
        }
    }

    /// Exact key first, then the first key equal ignoring ASCII case.
    pub fn topic(&self, name: &str) -> Option<&[QuestionItem]> {
        self.technical
            .get(name)
            .or_else(|| {
                self.technical
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, items)| items)
            })
            .map(Vec::as_slice)
    }

    /// Every bucket in iteration order: hr first, then technical topics.
    pub fn buckets(&self) -> impl Iterator<Item = (&str, &[QuestionItem])> {
        std::iter::once((HR_CATEGORY, self.hr.as_slice())).chain(
            self.technical
                .iter()
                .map(|(topic, items)| (topic.as_str(), items.as_slice())),
        )
    }

    pub fn categories(&self) -> Vec<String> {
        self.buckets().map(|(name, _)| name.to_string()).collect()
    }

    pub fn total_questions(&self) -> usize {
        self.buckets().map(|(_, items)| items.len()).sum()
    }
}
