//! Privacy filter for incoming questions.
//!
//! Blocks questions touching restricted personal topics before any model
//! call. Matching is case-insensitive substring containment, not whole-word:
//! a question containing "embrace" trips the "race" entry. That over-breadth
//! is intentional and must not be narrowed without changing the published
//! filter contract.

/// Topics the chatbot refuses to discuss. All entries lowercase.
pub const RESTRICTED_TOPICS: [&str; 16] = [
    "password",
    "bank",
    "telephone",
    "phone",
    "sexual orientation",
    "race",
    "disease",
    "family planning",
    "health information",
    "religion",
    "politics",
    "personal relationships",
    "romantic",
    "dating",
    "medical history",
    "api keys",
];

/// Check whether a question touches any restricted topic.
///
/// Pure and deterministic; an empty question is never restricted.
pub fn is_restricted(question: &str) -> bool {
    let question_lower = question.to_lowercase();
    RESTRICTED_TOPICS
        .iter()
        .any(|topic| question_lower.contains(topic))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_question_passes() {
        assert!(!is_restricted(""));
    }

    #[test]
    fn test_clean_question_passes() {
        assert!(!is_restricted("Tell me about your background"));
        assert!(!is_restricted("How did you get into tech?"));
        assert!(!is_restricted("Where have you lived?"));
    }

    #[test]
    fn test_restricted_topic_trips() {
        assert!(is_restricted("What's your phone number?"));
        assert!(is_restricted("Which bank do you use?"));
        assert!(is_restricted("Do you have any API keys to share?"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(is_restricted("tell me about RACE relations"));
        assert!(is_restricted("tell me about RaCe relations"));
        assert!(is_restricted("tell me about race relations"));
        assert!(is_restricted("What is your PASSWORD?"));
    }

    #[test]
    fn test_matching_is_substring_not_whole_word() {
        // Documented over-broad behavior: "embrace" contains "race".
        assert!(is_restricted("Do you embrace new technologies?"));
        // "telephone" is also caught by the shorter "phone" entry.
        assert!(is_restricted("Can I have your telephone?"));
    }

    #[test]
    fn test_topics_are_lowercase() {
        for topic in RESTRICTED_TOPICS {
            assert_eq!(topic, topic.to_lowercase(), "topic not lowercase: {topic}");
        }
    }
}
