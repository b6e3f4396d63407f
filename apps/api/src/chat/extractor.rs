//! Transcript → schema extraction via keyword-anchored pairing.
//!
//! For each category the transcript is scanned from the start for the first
//! bot turn containing one of the category's keywords; the very next user
//! turn is taken as the answer. Categories scan independently — one user
//! answer may legitimately satisfy two categories if its preceding bot turn
//! matches both keyword sets.
//!
//! Pure and deterministic; always returns a fully-defaulted schema.

use crate::models::portfolio::{
    Contact, Education, Experience, PortfolioSchema, Project,
};
use crate::sessions::{ChatTurn, TurnRole};

const NAME_KEYWORDS: &[&str] = &["name", "call you"];
const TITLE_KEYWORDS: &[&str] = &["title", "role", "what do you do", "job title"];
const BIO_KEYWORDS: &[&str] = &["about yourself", "tell me about", "describe yourself"];
const SKILLS_KEYWORDS: &[&str] = &["skill", "technologies", "tools"];
const EXPERIENCE_KEYWORDS: &[&str] = &[
    "work experience",
    "where have you worked",
    "previous roles",
    "employment",
];
const PROJECT_KEYWORDS: &[&str] = &["project", "built", "created", "developed"];
const EDUCATION_KEYWORDS: &[&str] = &["education", "degree", "studied", "university", "college"];
const EMAIL_KEYWORDS: &[&str] = &["email", "contact"];
const PHONE_KEYWORDS: &[&str] = &["phone", "number"];
const LINKEDIN_KEYWORDS: &[&str] = &["linkedin"];
const GITHUB_KEYWORDS: &[&str] = &["github", "git"];

/// Finds the user answer following the first bot turn that mentions any of
/// the keywords. Scans from index 0 every time; matches are never consumed.
fn find_answer<'a>(transcript: &'a [ChatTurn], keywords: &[&str]) -> Option<&'a str> {
    for window in transcript.windows(2) {
        let (bot, answer) = (&window[0], &window[1]);
        if bot.role != TurnRole::Bot || answer.role != TurnRole::User {
            continue;
        }
        let bot_text = bot.content.to_lowercase();
        if keywords.iter().any(|k| bot_text.contains(k)) {
            return Some(&answer.content);
        }
    }
    None
}

/// Splits a skills answer on commas (including the Arabic comma variant),
/// trimming entries and dropping empties.
fn split_skills(text: &str) -> Vec<String> {
    text.split([',', '،'])
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Derives a [`PortfolioSchema`] from a finished chat transcript.
pub fn extract_portfolio(transcript: &[ChatTurn]) -> PortfolioSchema {
    let name = find_answer(transcript, NAME_KEYWORDS)
        .unwrap_or("Your Name")
        .to_string();

    let title = find_answer(transcript, TITLE_KEYWORDS)
        .unwrap_or("Professional Title")
        .to_string();

    let bio = find_answer(transcript, BIO_KEYWORDS)
        .unwrap_or("Professional with experience in creating innovative solutions.")
        .to_string();

    let skills = match find_answer(transcript, SKILLS_KEYWORDS) {
        Some(text) => {
            let parsed = split_skills(text);
            if parsed.is_empty() {
                default_skills()
            } else {
                parsed
            }
        }
        None => default_skills(),
    };

    let experience = match find_answer(transcript, EXPERIENCE_KEYWORDS) {
        Some(text) => vec![Experience {
            role: "Professional Role".to_string(),
            company: "Company Name".to_string(),
            duration: "2020 - Present".to_string(),
            description: text.to_string(),
        }],
        None => vec![Experience {
            role: "Your Role".to_string(),
            company: "Company".to_string(),
            duration: "2020 - 2023".to_string(),
            description: "Your experience here".to_string(),
        }],
    };

    let projects = match find_answer(transcript, PROJECT_KEYWORDS) {
        Some(text) => vec![Project {
            name: "Project Name".to_string(),
            description: text.to_string(),
            technologies: skills.iter().take(3).cloned().collect(),
            link: String::new(),
        }],
        None => vec![Project {
            name: "Your Project".to_string(),
            description: "Project description".to_string(),
            technologies: skills.iter().take(3).cloned().collect(),
            link: String::new(),
        }],
    };

    let education = match find_answer(transcript, EDUCATION_KEYWORDS) {
        Some(text) => vec![Education {
            degree: "Degree".to_string(),
            institution: text.to_string(),
            year: "2020".to_string(),
        }],
        None => vec![Education {
            degree: "Bachelor Degree".to_string(),
            institution: "University Name".to_string(),
            year: "2020".to_string(),
        }],
    };

    let contact = Contact {
        email: find_answer(transcript, EMAIL_KEYWORDS)
            .unwrap_or("your.email@example.com")
            .to_string(),
        phone: find_answer(transcript, PHONE_KEYWORDS)
            .unwrap_or("")
            .to_string(),
        linkedin: find_answer(transcript, LINKEDIN_KEYWORDS)
            .unwrap_or("")
            .to_string(),
        github: find_answer(transcript, GITHUB_KEYWORDS)
            .unwrap_or("")
            .to_string(),
    };

    let schema = PortfolioSchema {
        name,
        title,
        bio,
        skills,
        experience,
        projects,
        education,
        contact,
        custom_sections: vec![],
    };

    // Same defaulting pass as every other extraction path.
    schema.normalized()
}

fn default_skills() -> Vec<String> {
    vec![
        "JavaScript".to_string(),
        "React".to_string(),
        "Node.js".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn bot(content: &str) -> ChatTurn {
        ChatTurn {
            role: TurnRole::Bot,
            content: content.to_string(),
            timestamp: Utc::now(),
        }
    }

    fn user(content: &str) -> ChatTurn {
        ChatTurn {
            role: TurnRole::User,
            content: content.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_name_and_skills_pairing() {
        let transcript = vec![
            bot("What's your name?"),
            user("Alice Chen"),
            bot("skills?"),
            user("Go, Rust, SQL"),
        ];
        let schema = extract_portfolio(&transcript);
        assert_eq!(schema.name, "Alice Chen");
        assert_eq!(
            schema.skills,
            vec!["Go".to_string(), "Rust".to_string(), "SQL".to_string()]
        );
    }

    #[test]
    fn test_empty_transcript_fully_defaulted() {
        let schema = extract_portfolio(&[]);
        assert_eq!(schema.name, "Your Name");
        assert_eq!(schema.title, "Professional Title");
        assert!(!schema.bio.is_empty());
        assert!(!schema.skills.is_empty());
        assert_eq!(schema.experience.len(), 1);
        assert_eq!(schema.projects.len(), 1);
        assert_eq!(schema.education.len(), 1);
    }

    #[test]
    fn test_one_answer_can_satisfy_two_categories() {
        // "role" matches the title keywords; "previous roles" matches
        // experience. A bot turn mentioning both anchors both categories.
        let transcript = vec![
            bot("Walk me through your previous roles. What's your current role?"),
            user("Senior Engineer at Acme since 2021"),
        ];
        let schema = extract_portfolio(&transcript);
        assert_eq!(schema.title, "Senior Engineer at Acme since 2021");
        assert_eq!(
            schema.experience[0].description,
            "Senior Engineer at Acme since 2021"
        );
    }

    #[test]
    fn test_first_match_wins_per_category() {
        let transcript = vec![
            bot("What's your name?"),
            user("First Answer"),
            bot("Sorry, I need your name again?"),
            user("Second Answer"),
        ];
        let schema = extract_portfolio(&transcript);
        assert_eq!(schema.name, "First Answer");
    }

    #[test]
    fn test_bot_turn_without_following_user_turn_is_skipped() {
        let transcript = vec![bot("What's your name?"), bot("Still there?")];
        let schema = extract_portfolio(&transcript);
        assert_eq!(schema.name, "Your Name");
    }

    #[test]
    fn test_skills_split_on_unicode_comma() {
        let transcript = vec![bot("List your skills"), user("Python، Django، Redis")];
        let schema = extract_portfolio(&transcript);
        assert_eq!(
            schema.skills,
            vec!["Python".to_string(), "Django".to_string(), "Redis".to_string()]
        );
    }

    #[test]
    fn test_project_technologies_come_from_skills() {
        let transcript = vec![
            bot("skills?"),
            user("Go, Rust, SQL, Docker"),
            bot("Any project you built?"),
            user("A log shipper"),
        ];
        let schema = extract_portfolio(&transcript);
        assert_eq!(schema.projects[0].description, "A log shipper");
        assert_eq!(
            schema.projects[0].technologies,
            vec!["Go".to_string(), "Rust".to_string(), "SQL".to_string()]
        );
    }

    #[test]
    fn test_output_always_satisfies_invariants() {
        // A keyword-free nonsense transcript still yields a valid schema.
        let transcript = vec![
            bot("Nice weather today."),
            user("Indeed."),
            bot("Anyway."),
            user("Sure."),
        ];
        let schema = extract_portfolio(&transcript);
        assert!(!schema.name.is_empty());
        assert!(!schema.title.is_empty());
        assert!(!schema.bio.is_empty());
        assert!(schema.skills.len() >= 1);
        assert!(schema.experience.len() >= 1);
        assert!(schema.projects.len() >= 1);
        assert!(schema.education.len() >= 1);
    }

    #[test]
    fn test_contact_extraction() {
        let transcript = vec![
            bot("What's your email?"),
            user("alice@example.com"),
            bot("Your LinkedIn?"),
            user("linkedin.com/in/alice"),
            bot("And your GitHub?"),
            user("github.com/alice"),
        ];
        let schema = extract_portfolio(&transcript);
        assert_eq!(schema.contact.email, "alice@example.com");
        assert_eq!(schema.contact.linkedin, "linkedin.com/in/alice");
        assert_eq!(schema.contact.github, "github.com/alice");
        assert_eq!(schema.contact.phone, "");
    }
}
