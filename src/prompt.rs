use crate::portfolio::{Company, PORTFOLIO_CONTEXT};
use crate::web::models::Message;

/// Assembles the full prompt sent to the generation API.
///
/// Sections appear in a fixed order: portfolio context, the most recent
/// `history_limit` turns, company focus, live profile data, then the query.
pub fn build_prompt(
    history: &[Message],
    history_limit: usize,
    company: Option<Company>,
    profile_context: Option<&str>,
    query: &str,
) -> String {
    let mut prompt = String::from(PORTFOLIO_CONTEXT);

    let recent = &history[history.len().saturating_sub(history_limit)..];
    if !recent.is_empty() {
        prompt.push_str("\n\nPrevious conversation:\n");
        for message in recent {
            prompt.push_str(&format!("{}: {}\n", message.role.as_str(), message.content));
        }
    }

    if let Some(company) = company {
        prompt.push_str(&company.focus_block());
    }

    if let Some(profile) = profile_context {
        prompt.push_str(profile);
    }

    prompt.push_str(&format!("\n\nUser: {}\n\nAssistant:", query));
    prompt
}

/// Cleans up a raw completion. Returns `None` when nothing usable is left.
pub fn tidy_response(raw: &str) -> Option<String> {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("Assistant:") {
        text = rest.trim_start();
    }

    // The model sometimes continues the transcript with an invented user turn.
    if let Some(cut) = text.find("\nUser:") {
        text = &text[..cut];
    }

    let mut tidy = String::with_capacity(text.len());
    let mut newlines = 0;
    for ch in text.trim_end().chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines > 2 {
                continue;
            }
        } else {
            newlines = 0;
        }
        tidy.push(ch);
    }

    if tidy.is_empty() {
        None
    } else {
        Some(tidy)
    }
}
