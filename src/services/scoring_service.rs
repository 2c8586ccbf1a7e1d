use crate::models::score::{Clarity, ScoreResult};
use crate::services::{ideal_answers, similarity};

pub const KEYWORDS: [&str; 5] = ["data", "model", "learn", "algorithm", "api"];

const MIN_SCORE: usize = 1;
const MAX_SCORE: usize = 10;
const POINTS_PER_KEYWORD: usize = 2;

pub struct ScoringService;

impl ScoringService {
    pub fn score(question: &str, answer: &str) -> ScoreResult {
        let answer = answer.trim();

        let clarity = Clarity::from_word_count(Self::word_count(answer));
        let matched = Self::keywords_matched(answer);

        // The floor of 1 also applies when nothing matched.
        let score = (matched * POINTS_PER_KEYWORD).clamp(MIN_SCORE, MAX_SCORE) as u8;

        let similarity_score_percent = if answer.is_empty() {
            None
        } else {
            ideal_answers::ideal_answer(question)
                .map(|ideal| similarity::similarity_percent(answer, ideal))
        };

        tracing::debug!(
            score,
            ?clarity,
            keywords_matched = matched as u64,
            similarity = ?similarity_score_percent,
            "Scored answer"
        );

        ScoreResult {
            score,
            clarity,
            clarity_feedback: clarity.feedback().to_string(),
            keywords_matched: matched,
            similarity_score_percent,
        }
    }

    pub fn word_count(answer: &str) -> usize {
        answer.split_whitespace().count()
    }

    /// Each keyword counts once, as a case-insensitive substring.
    pub fn keywords_matched(answer: &str) -> usize {
        let lowered = answer.to_lowercase();
        KEYWORDS.iter().filter(|k| lowered.contains(**k)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn clarity_boundaries() {
        assert_eq!(ScoringService::score("q", &words(9)).clarity, Clarity::Low);
        assert_eq!(ScoringService::score("q", &words(10)).clarity, Clarity::Medium);
        assert_eq!(ScoringService::score("q", &words(29)).clarity, Clarity::Medium);
        assert_eq!(ScoringService::score("q", &words(30)).clarity, Clarity::High);
    }

    #[test]
    fn word_count_splits_on_any_whitespace() {
        assert_eq!(ScoringService::word_count("one\ttwo\n three   four"), 4);
        assert_eq!(ScoringService::word_count(""), 0);
    }

    #[test]
    fn repeated_keywords_count_once() {
        let result = ScoringService::score("q", "data data model model");
        assert_eq!(result.keywords_matched, 2);
        assert_eq!(result.score, 4);
    }

    #[test]
    fn no_keywords_still_scores_one() {
        let result = ScoringService::score("q", "I would just try my best here");
        assert_eq!(result.keywords_matched, 0);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn keywords_match_as_substrings_ignoring_case() {
        // "learning" contains "learn", "Algorithms" contains "algorithm", "APIs" contains "api"
        assert_eq!(
            ScoringService::keywords_matched("Learning Algorithms behind APIs"),
            3
        );
    }

    #[test]
    fn all_keywords_reach_max_score() {
        let result = ScoringService::score("q", "data model learn algorithm api");
        assert_eq!(result.keywords_matched, 5);
        assert_eq!(result.score, 10);
    }

    #[test]
    fn empty_answer_is_low_with_floor_score_and_no_similarity() {
        let result = ScoringService::score("What is REST API?", "   ");
        assert_eq!(result.clarity, Clarity::Low);
        assert_eq!(result.keywords_matched, 0);
        assert_eq!(result.score, 1);
        assert_eq!(result.similarity_score_percent, None);
    }

    #[test]
    fn verbatim_ideal_answer_is_fully_similar() {
        let ideal = ideal_answers::ideal_answer("What is REST API?").unwrap();
        let result = ScoringService::score("what is rest api?", ideal);
        assert_eq!(result.similarity_score_percent, Some(100.0));
    }

    #[test]
    fn unknown_question_has_no_similarity() {
        let result = ScoringService::score("What is your favourite colour?", "Blue, mostly.");
        assert_eq!(result.similarity_score_percent, None);
    }

    #[test]
    fn feedback_follows_clarity() {
        let result = ScoringService::score("q", "short");
        assert_eq!(result.clarity_feedback, Clarity::Low.feedback());
    }
}
