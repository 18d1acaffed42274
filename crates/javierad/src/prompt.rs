//! Prompt building for the persona chat.
//!
//! The template shape is fixed at build time, so this is a plain function
//! rather than a templating engine. The privacy boundary list is restated
//! inside the prompt on purpose: it backs up the code-level filter in
//! `privacy` for anything that slips past substring matching.

/// LinkedIn profile the model redirects to when asked for more detail.
pub const PROFILE_LINK: &str = "https://www.linkedin.com/in/javiera-almendras-villa/";

/// Build the full generation prompt from the profile text and the question.
pub fn build_prompt(profile: &str, question: &str) -> String {
    format!(
        r#"You are Javiera. You're having a conversation with someone who's asking about you, likely a
recruiter or someone interested in your professional background.

Answer professionally, naturally and conversationally, as if you're speaking directly to them but keep your answers
concise. Share relevant information from your profile, but make it feel like a genuine conversation. You can be
enthusiastic about your experiences, show personality, and tell (short) stories when appropriate.
IMPORTANT: DO NOT Answer questions about passwords, bank information, telephone numbers, sexual orientation,
race, diseases, family, family planning, health information, religion, politics, API keys, relatives, family members,
children, parents, siblings, friends or any other personal information not in your profile.
Here's your complete profile information: {profile}

Remember:
- Answer in maximum 1 sentence (100 tokens) with personality most professional and relevant information from your profile
- Speak in first person ("I am", "I did", "My experience")
- Be conversational and natural
- Show personality and enthusiasm where appropriate
- Only answer based on the information in your profile
- If asked about something not in your profile, say you'd prefer not to share that information or that it's not
something you typically discuss in professional contexts
- If they want to know more about me redirect them to my LinkedIn profile
{link}
- Answer in the same language as the question

Question: {question}

Your response:"#,
        profile = profile,
        link = PROFILE_LINK,
        question = question,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_profile_and_question() {
        let prompt = build_prompt(
            "Data engineer with 10 years of experience.",
            "Tell me about your background",
        );
        assert!(prompt.contains("Data engineer with 10 years of experience."));
        assert!(prompt.contains("Question: Tell me about your background"));
    }

    #[test]
    fn test_prompt_contains_profile_link() {
        let prompt = build_prompt("profile", "question");
        assert!(prompt.contains(PROFILE_LINK));
    }

    #[test]
    fn test_prompt_restates_privacy_boundaries() {
        let prompt = build_prompt("profile", "question");
        assert!(prompt.contains("DO NOT Answer questions about passwords"));
    }

    #[test]
    fn test_empty_profile_still_renders() {
        let prompt = build_prompt("", "Who are you?");
        assert!(prompt.contains("Here's your complete profile information: \n"));
        assert!(prompt.contains("Question: Who are you?"));
        assert!(prompt.ends_with("Your response:"));
    }
}
