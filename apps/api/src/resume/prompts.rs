//! Prompts for the resume extraction pipeline.

/// Strict-JSON structuring prompt. `{resume_text}` is replaced with the
/// cleaned extracted text before sending.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"You are a resume parser. Extract the following information from this resume text and return it in a structured JSON format:

Resume Text:
{resume_text}

Please extract and return ONLY a JSON object with this exact structure (no additional text):
{
  "name": "Full name of the person",
  "title": "Professional title or role (e.g., 'Full Stack Developer')",
  "bio": "A brief 2-3 sentence professional summary or objective",
  "skills": ["skill1", "skill2", "skill3", ...],
  "experience": [
    {
      "role": "Job title",
      "company": "Company name",
      "duration": "Date range (e.g., '2020-2023' or 'Jan 2020 - Present')",
      "description": "Brief description of responsibilities"
    }
  ],
  "projects": [
    {
      "name": "Project name",
      "description": "Project description",
      "technologies": ["tech1", "tech2", ...],
      "link": "Project link if available, otherwise empty string"
    }
  ],
  "education": [
    {
      "degree": "Degree name",
      "institution": "University/College name",
      "year": "Graduation year or date range"
    }
  ],
  "contact": {
    "email": "Email address",
    "phone": "Phone number",
    "linkedin": "LinkedIn profile (without https://)",
    "github": "GitHub profile (without https://)"
  }
}

Important:
- Return ONLY the JSON object, no markdown formatting, no explanations
- Always include all fields even if some information is not found (use empty strings or empty arrays)
- Ensure all arrays are properly populated with at least one item if data exists"#;

/// Builds the final structuring prompt for one resume.
pub fn resume_parse_prompt(resume_text: &str) -> String {
    RESUME_PARSE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_resume_text() {
        let prompt = resume_parse_prompt("Jane Doe, Software Engineer");
        assert!(prompt.contains("Jane Doe, Software Engineer"));
        assert!(!prompt.contains("{resume_text}"));
    }
}
