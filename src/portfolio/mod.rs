//! Static portfolio data: the biography prepended to every prompt, the
//! company-specific emphasis blocks, and canned replies used when the
//! generation API is rate-limited.

pub const PORTFOLIO_CONTEXT: &str = include_str!("context.txt");

/// Contact line used in user-facing apologies.
pub const CONTACT_EMAIL: &str = "hridyesh2309@gmail.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Company {
    Amazon,
    Ibm,
    Oracle,
    NatWest,
    Lji,
    Recro,
}

impl Company {
    /// Match order matters: the first company with a hit wins.
    pub const ALL: [Company; 6] = [
        Company::Amazon,
        Company::Ibm,
        Company::Oracle,
        Company::NatWest,
        Company::Lji,
        Company::Recro,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Company::Amazon => "amazon",
            Company::Ibm => "ibm",
            Company::Oracle => "oracle",
            Company::NatWest => "natwest",
            Company::Lji => "lji",
            Company::Recro => "recro",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Company::Amazon => &["amazon", "aws", "customer", "scalability"],
            Company::Ibm => &["ibm", "enterprise", "ai/ml", "research"],
            Company::Oracle => &["oracle", "database", "cloud", "enterprise"],
            Company::NatWest => &["natwest", "financial", "banking", "security"],
            Company::Lji => &["lji", "innovation", "problem-solving"],
            Company::Recro => &["recro", "startup", "agile", "rapid"],
        }
    }

    pub fn emphasis(self) -> &'static str {
        match self {
            Company::Amazon => "customer-centric approach, scalability, AWS technologies",
            Company::Ibm => "enterprise solutions, AI/ML, research capabilities",
            Company::Oracle => "database expertise, enterprise software, cloud technologies",
            Company::NatWest => "financial technology, security, regulatory compliance",
            Company::Lji => "innovation, problem-solving, technical excellence",
            Company::Recro => "rapid development, startup experience, agile methodologies",
        }
    }

    pub fn focus_block(self) -> String {
        format!(
            "\n\nCOMPANY FOCUS: {}\nWhen responding, emphasize aspects relevant to {}: {}",
            self.name().to_uppercase(),
            self.name(),
            self.emphasis()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackTopic {
    Experience,
    Skills,
    Projects,
    Contact,
    Interests,
    Default,
}

impl FallbackTopic {
    /// Topics whose own name is checked against the query, in order.
    pub const NAMED: [FallbackTopic; 5] = [
        FallbackTopic::Experience,
        FallbackTopic::Skills,
        FallbackTopic::Projects,
        FallbackTopic::Contact,
        FallbackTopic::Interests,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FallbackTopic::Experience => "experience",
            FallbackTopic::Skills => "skills",
            FallbackTopic::Projects => "projects",
            FallbackTopic::Contact => "contact",
            FallbackTopic::Interests => "interests",
            FallbackTopic::Default => "default",
        }
    }

    pub fn reply(self) -> &'static str {
        match self {
            FallbackTopic::Experience => "I have experience as a Software Development Intern at Limeroad (Feb-Aug 2025) where I worked on Android development with Kotlin and TypeScript, and at College Setu (May-July 2024) where I developed a data collection portal with Flask and SQL.",
            FallbackTopic::Skills => "My key skills include: Languages (Java, Kotlin, JavaScript, TypeScript, SQL), Android Development (MVVM, Jetpack Compose, Material Design), Web Development (React, Node.js, Tailwind CSS), and various developer tools like Git, Docker, and Android Studio.",
            FallbackTopic::Projects => "I've built several projects including Email Oasis (Gmail subscription manager), FurniAR (AR furniture app), Neural Network Routing for VANETs, Poem Generator with AI, and a Quantum Computing optimization project. Check out my Projects section for more details!",
            FallbackTopic::Contact => "You can reach me via email at hridyesh2309@gmail.com, connect with me on LinkedIn (hridyeshh), check out my code on GitHub (hridyeshh), or see my problem-solving skills on LeetCode.",
            FallbackTopic::Interests => "I'm passionate about productivity literature, poetry, and writing. These interests shape how I approach problem-solving and communication in tech. I believe every line of code tells a story!",
            FallbackTopic::Default => "I'm Hridyesh Kumar, a software developer passionate about creating elegant solutions. Feel free to explore my portfolio or contact me directly!",
        }
    }
}

pub fn apology() -> String {
    format!(
        "I apologize, but I encountered an issue. Please try again or contact Hridyesh directly at {}.",
        CONTACT_EMAIL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_embedded() {
        assert!(PORTFOLIO_CONTEXT.starts_with("You are Hridyesh Kumar's AI assistant."));
        assert!(PORTFOLIO_CONTEXT.contains("CONTACT INFORMATION:"));
    }

    #[test]
    fn focus_block_names_company_and_emphasis() {
        let block = Company::Oracle.focus_block();
        assert!(block.starts_with("\n\nCOMPANY FOCUS: ORACLE\n"));
        assert!(block.ends_with("database expertise, enterprise software, cloud technologies"));
    }

    #[test]
    fn every_topic_has_a_reply() {
        for topic in FallbackTopic::NAMED {
            assert!(!topic.reply().is_empty(), "{} has no reply", topic.name());
        }
        assert!(FallbackTopic::Default.reply().starts_with("I'm Hridyesh Kumar"));
    }
}
