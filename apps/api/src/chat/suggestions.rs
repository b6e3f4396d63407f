//! Contextual quick-reply suggestions for the chat UI.
//!
//! Routed purely on the last bot message. The specific checks are ordered and
//! deliberately uneven (name wants a '?', title excludes "experience",
//! projects require a build verb) to avoid misfiring on confirmations.

const NAME_SUGGESTIONS: &[&str] = &["John Doe", "Jane Smith", "Alex Johnson"];

const TITLE_SUGGESTIONS: &[&str] = &[
    "Full Stack Developer",
    "Frontend Developer",
    "UI/UX Designer",
];

const BIO_SUGGESTIONS: &[&str] = &[
    "Passionate developer with 5+ years building web applications",
    "Creative designer focused on user-centered experiences",
    "Problem solver who loves creating innovative solutions",
];

const SKILL_SUGGESTIONS: &[&str] = &[
    "JavaScript, React, Node.js, MongoDB, Docker",
    "Python, Django, PostgreSQL, AWS, CI/CD",
    "Figma, Adobe XD, HTML/CSS, Tailwind",
];

const EXPERIENCE_SUGGESTIONS: &[&str] = &[
    "Senior Software Engineer at Tech Corp (2020-2023)",
    "Frontend Developer at Startup Inc (2019-2022)",
    "Full Stack Developer at Digital Agency (2021-Present)",
];

const PROJECT_SUGGESTIONS: &[&str] = &[
    "E-commerce Platform using React, Node.js, and Stripe",
    "Task Management App with Vue.js and Firebase",
    "Social Media Dashboard built with Next.js",
];

const EDUCATION_SUGGESTIONS: &[&str] = &[
    "Bachelor of Computer Science, MIT, 2020",
    "Master of Software Engineering, Stanford, 2022",
    "BS Information Technology, State University, 2019",
];

const EMAIL_SUGGESTIONS: &[&str] = &[
    "john.doe@example.com",
    "jane.smith@email.com",
    "alex.developer@gmail.com",
];

const PHONE_SUGGESTIONS: &[&str] = &["+1 (555) 123-4567", "+44 20 1234 5678", "+91 98765 43210"];

const LINKEDIN_SUGGESTIONS: &[&str] = &[
    "linkedin.com/in/johndoe",
    "linkedin.com/in/janesmith",
    "linkedin.com/in/alexjohnson",
];

const GITHUB_SUGGESTIONS: &[&str] = &[
    "github.com/johndoe",
    "github.com/janesmith",
    "github.com/alexdev",
];

const DEFAULT_SUGGESTIONS: &[&str] = &[
    "Yes, that's correct",
    "Let me provide more details",
    "Continue",
];

/// Picks quick-reply suggestions for the question the bot just asked.
pub fn suggestions_for(last_bot_message: &str) -> &'static [&'static str] {
    let msg = last_bot_message.to_lowercase();
    let contains = |needle: &str| msg.contains(needle);

    if (contains("name") || contains("call you")) && contains("?") {
        return NAME_SUGGESTIONS;
    }

    if (contains("what do you do")
        || contains("your role")
        || contains("job title")
        || contains("professional title"))
        && !contains("experience")
    {
        return TITLE_SUGGESTIONS;
    }

    if contains("about yourself")
        || contains("tell me about you")
        || contains("describe yourself")
        || (contains("bio") && contains("?"))
    {
        return BIO_SUGGESTIONS;
    }

    if contains("skill") || contains("technologies") || contains("tools") {
        return SKILL_SUGGESTIONS;
    }

    if (contains("work experience") || contains("where have you worked") || contains("previous roles"))
        && !contains("project")
    {
        return EXPERIENCE_SUGGESTIONS;
    }

    if contains("project") && (contains("worked on") || contains("built") || contains("created")) {
        return PROJECT_SUGGESTIONS;
    }

    if contains("education") || contains("degree") || contains("studied") || contains("university") {
        return EDUCATION_SUGGESTIONS;
    }

    if contains("email") || contains("contact") || contains("reach you") {
        return EMAIL_SUGGESTIONS;
    }

    if contains("phone") || contains("number") {
        return PHONE_SUGGESTIONS;
    }

    if contains("linkedin") {
        return LINKEDIN_SUGGESTIONS;
    }

    if contains("github") || contains("git") {
        return GITHUB_SUGGESTIONS;
    }

    DEFAULT_SUGGESTIONS
}
