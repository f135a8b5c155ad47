use crate::portfolio::{Company, FallbackTopic};

/// Queries mentioning any of these get live GitHub data in their prompt.
const PROFILE_KEYWORDS: &[&str] = &[
    "github",
    "repo",
    "project",
    "code",
    "commit",
    "open source",
    "star",
    "fork",
    "recent",
    "latest",
    "built",
    "working on",
];

/// Secondary fallback keywords, checked only when no topic name matches.
const FALLBACK_KEYWORDS: &[(&[&str], FallbackTopic)] = &[
    (&["intern", "work"], FallbackTopic::Experience),
    (&["know", "language", "framework"], FallbackTopic::Skills),
    (&["built", "created", "developed"], FallbackTopic::Projects),
    (&["email", "linkedin", "github"], FallbackTopic::Contact),
    (&["hobby", "like", "passion"], FallbackTopic::Interests),
];

/// What a chat request needs beyond the static context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub fetch_profile: bool,
    pub company: Option<Company>,
    pub fallback: FallbackTopic,
}

pub fn route(query: &str) -> Route {
    let query = query.to_lowercase();
    Route {
        fetch_profile: mentions_any(&query, PROFILE_KEYWORDS),
        company: company_focus(&query),
        fallback: fallback_topic(&query),
    }
}

fn company_focus(query: &str) -> Option<Company> {
    Company::ALL
        .into_iter()
        .find(|company| mentions_any(query, company.keywords()))
}

fn fallback_topic(query: &str) -> FallbackTopic {
    if let Some(topic) = FallbackTopic::NAMED
        .into_iter()
        .find(|topic| query.contains(topic.name()))
    {
        return topic;
    }

    FALLBACK_KEYWORDS
        .iter()
        .find(|(keywords, _)| mentions_any(query, keywords))
        .map(|(_, topic)| *topic)
        .unwrap_or(FallbackTopic::Default)
}

fn mentions_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
