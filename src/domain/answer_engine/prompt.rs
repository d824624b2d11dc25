//! System instructions for the course assistant.

/// Fixed instructions sent with every completion.
pub const SYSTEM_PROMPT: &str = "\
You are an assistant for questions about course materials. You can call tools to look things up.

Tools:
1. search_course_content - find passages in course content about a topic, optionally limited to one course or one lesson
2. get_course_outline - fetch a course's title, link, and full lesson list (number, title, link)

When to use them:
- Questions about a course's outline or structure: call get_course_outline
- Questions about specific topics or lessons: call search_course_content
- For course-related questions, look things up before falling back on general knowledge
- You have up to 2 rounds of tool use. Read the results of one round before deciding on the next
- If a tool finds nothing, say so plainly and do not suggest alternatives

When giving an outline, list the course title, the course link if there is one, and every lesson with its number, title and link.

General knowledge questions can be answered directly without tools.

Answer directly. Do not describe your reasoning, your tool use, or the search results as such. \
Keep answers brief, educational and clear, with an example when it helps.";

/// Builds the system content, appending the rendered history when present.
pub fn build_system_content(history: Option<&str>) -> String {
    match history {
        Some(history) if !history.is_empty() => {
            format!("{}\n\nPrevious conversation:\n{}", SYSTEM_PROMPT, history)
        }
        _ => SYSTEM_PROMPT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_both_tools() {
        assert!(SYSTEM_PROMPT.contains("search_course_content"));
        assert!(SYSTEM_PROMPT.contains("get_course_outline"));
    }

    #[test]
    fn without_history_uses_prompt_alone() {
        assert_eq!(build_system_content(None), SYSTEM_PROMPT);
        assert_eq!(build_system_content(Some("")), SYSTEM_PROMPT);
    }

    #[test]
    fn history_is_appended_after_marker() {
        let content = build_system_content(Some("User: hi\nAssistant: hello"));
        assert!(content.starts_with(SYSTEM_PROMPT));
        assert!(content.ends_with("\n\nPrevious conversation:\nUser: hi\nAssistant: hello"));
    }
}
