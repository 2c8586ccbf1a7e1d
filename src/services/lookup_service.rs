use crate::error::{Error, Result};
use crate::models::question::{QuestionBank, QuestionItem, SearchResult};

pub struct LookupService;

impl LookupService {
    /// Strict lookup used by the listing endpoints: an unknown topic is an error.
    pub fn get_by_category<'a>(bank: &'a QuestionBank, name: &str) -> Result<&'a [QuestionItem]> {
        bank.bucket(name)
            .ok_or_else(|| Error::TopicNotFound(name.to_string()))
    }

    /// Technical topics only; `"hr"` is not a topic here.
    pub fn get_topic<'a>(bank: &'a QuestionBank, topic: &str) -> Result<&'a [QuestionItem]> {
        bank.topic(topic)
            .ok_or_else(|| Error::TopicNotFound(topic.to_string()))
    }

    /// Lenient lookup used by the random picker: unknown and empty both
    /// collapse into `NoQuestionsFound`.
    pub fn random_pool<'a>(bank: &'a QuestionBank, name: &str) -> Result<&'a [QuestionItem]> {
        match bank.bucket(name) {
            Some(items) if !items.is_empty() => Ok(items),
            _ => Err(Error::NoQuestionsFound(name.to_string())),
        }
    }

    /// Case-insensitive substring search over every question text.
    pub fn search(bank: &QuestionBank, query: &str) -> Vec<SearchResult> {
        let needle = query.to_lowercase();
        let needle = needle.as_str();
        bank.buckets()
            .flat_map(move |(category, items)| {
                items
                    .iter()
                    .filter(move |item| item.question.to_lowercase().contains(needle))
                    .map(move |item| SearchResult::from_item(item, category))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(q: &str) -> QuestionItem {
        QuestionItem {
            question: q.to_string(),
            answer: format!("answer to {q}"),
        }
    }

    fn sample_bank() -> QuestionBank {
        let mut bank = QuestionBank::default();
        bank.hr = vec![
            item("Tell me about yourself."),
            item("What is REST API?"),
            item("Where do you see yourself in five years?"),
        ];
        bank.technical
            .insert("python".into(), vec![item("What is a decorator?"), item("Explain REST in Flask.")]);
        bank.technical.insert("ml".into(), vec![]);
        bank
    }

    #[test]
    fn hr_returns_all_items_in_stored_order() {
        let bank = sample_bank();
        let items = LookupService::get_by_category(&bank, "hr").unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].question, "Tell me about yourself.");
        assert_eq!(items[2].question, "Where do you see yourself in five years?");
    }

    #[test]
    fn unknown_topic_is_topic_not_found() {
        let bank = sample_bank();
        let err = LookupService::get_by_category(&bank, "nonexistent-topic").unwrap_err();
        assert!(matches!(err, Error::TopicNotFound(ref t) if t == "nonexistent-topic"));
    }

    #[test]
    fn topic_lookup_excludes_hr() {
        let bank = sample_bank();
        assert_eq!(LookupService::get_topic(&bank, "python").unwrap().len(), 2);
        assert!(matches!(
            LookupService::get_topic(&bank, "hr"),
            Err(Error::TopicNotFound(_))
        ));
    }

    #[test]
    fn empty_topic_lists_as_empty() {
        let bank = sample_bank();
        assert!(LookupService::get_by_category(&bank, "ml").unwrap().is_empty());
    }

    #[test]
    fn random_pool_collapses_unknown_and_empty() {
        let bank = sample_bank();
        assert!(matches!(
            LookupService::random_pool(&bank, "ml"),
            Err(Error::NoQuestionsFound(_))
        ));
        assert!(matches!(
            LookupService::random_pool(&bank, "rust"),
            Err(Error::NoQuestionsFound(_))
        ));
        assert_eq!(LookupService::random_pool(&bank, "python").unwrap().len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_and_tags_category() {
        let bank = sample_bank();
        let results = LookupService::search(&bank, "rest");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].question, "What is REST API?");
        assert_eq!(results[0].category, "hr");
        assert_eq!(results[0].answer, "answer to What is REST API?");
        assert_eq!(results[1].category, "python");
    }

    #[test]
    fn search_follows_topic_insertion_order() {
        let mut bank = QuestionBank::default();
        bank.technical.insert("os".into(), vec![item("What is a process?")]);
        bank.technical.insert("dsa".into(), vec![item("What is a heap?")]);
        bank.technical.insert("cn".into(), vec![item("What is TCP?")]);
        bank.hr.push(item("What is your goal?"));

        let categories: Vec<String> = LookupService::search(&bank, "what is")
            .into_iter()
            .map(|r| r.category)
            .collect();
        assert_eq!(categories, vec!["hr", "os", "dsa", "cn"]);
    }

    #[test]
    fn mixed_case_topic_is_reachable() {
        let mut bank = sample_bank();
        bank.technical.insert("DSA".into(), vec![item("What is a trie?")]);

        assert_eq!(LookupService::get_topic(&bank, "DSA").unwrap().len(), 1);
        assert_eq!(LookupService::get_topic(&bank, "dsa").unwrap().len(), 1);
        assert_eq!(LookupService::random_pool(&bank, "Dsa").unwrap().len(), 1);
    }

    #[test]
    fn search_without_matches_is_empty() {
        let bank = sample_bank();
        assert!(LookupService::search(&bank, "kubernetes").is_empty());
    }

    #[test]
    fn search_does_not_tokenize() {
        let bank = sample_bank();
        assert!(LookupService::search(&bank, "rest api flask").is_empty());
        assert_eq!(LookupService::search(&bank, "YOURSELF").len(), 2);
    }
}
