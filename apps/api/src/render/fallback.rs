//! String-template markup generators, one per template family.
//!
//! Each generator is a pure function of the schema. All user-supplied fields
//! go through [`escape_html`] before interpolation; links are composed from
//! escaped values too, since contact handles come in as free text.

use crate::models::portfolio::PortfolioSchema;
use crate::render::escape::escape_html;

/// Minimal family: white background, bordered header, grey section bands.
pub fn render_minimal(data: &PortfolioSchema) -> String {
    let mut contact_links = String::new();
    if !data.contact.email.is_empty() {
        let email = escape_html(&data.contact.email);
        contact_links.push_str(&format!(
            r#"<a href="mailto:{email}" class="text-gray-600 hover:text-gray-900">📧 {email}</a>"#
        ));
    }
    if !data.contact.phone.is_empty() {
        let phone = escape_html(&data.contact.phone);
        contact_links.push_str(&format!(
            r#"<a href="tel:{phone}" class="text-gray-600 hover:text-gray-900">📱 {phone}</a>"#
        ));
    }
    if !data.contact.linkedin.is_empty() {
        let linkedin = escape_html(&data.contact.linkedin);
        contact_links.push_str(&format!(
            r#"<a href="https://{linkedin}" target="_blank" class="text-gray-600 hover:text-gray-900">💼 LinkedIn</a>"#
        ));
    }
    if !data.contact.github.is_empty() {
        let github = escape_html(&data.contact.github);
        contact_links.push_str(&format!(
            r#"<a href="https://{github}" target="_blank" class="text-gray-600 hover:text-gray-900">🐙 GitHub</a>"#
        ));
    }

    let skills = data
        .skills
        .iter()
        .map(|skill| {
            format!(
                r#"<span class="px-4 py-2 bg-gray-100 text-gray-800 rounded-full text-sm">{}</span>"#,
                escape_html(skill)
            )
        })
        .collect::<String>();

    let experience = data
        .experience
        .iter()
        .map(|exp| {
            format!(
                r#"<div>
              <h3 class="text-xl font-semibold">{role}</h3>
              <p class="text-gray-600 mb-2">{company} • {duration}</p>
              <p class="text-gray-700">{description}</p>
            </div>"#,
                role = escape_html(&exp.role),
                company = escape_html(&exp.company),
                duration = escape_html(&exp.duration),
                description = escape_html(&exp.description),
            )
        })
        .collect::<String>();

    let projects = data
        .projects
        .iter()
        .map(|project| {
            let technologies = project
                .technologies
                .iter()
                .map(|tech| {
                    format!(
                        r#"<span class="px-2 py-1 bg-gray-100 text-xs rounded">{}</span>"#,
                        escape_html(tech)
                    )
                })
                .collect::<String>();
            let link = if project.link.is_empty() {
                String::new()
            } else {
                format!(
                    r#"<a href="{}" target="_blank" class="text-blue-600 hover:underline text-sm">View Project →</a>"#,
                    escape_html(&project.link)
                )
            };
            format!(
                r#"<div class="border border-gray-200 rounded-lg p-6 hover:shadow-lg transition-shadow">
              <h3 class="text-xl font-semibold mb-2">{name}</h3>
              <p class="text-gray-700 mb-3">{description}</p>
              <div class="flex flex-wrap gap-2 mb-3">{technologies}</div>
              {link}
            </div>"#,
                name = escape_html(&project.name),
                description = escape_html(&project.description),
            )
        })
        .collect::<String>();

    let education = data
        .education
        .iter()
        .map(|edu| {
            format!(
                r#"<div>
              <h3 class="text-xl font-semibold">{degree}</h3>
              <p class="text-gray-600">{institution} • {year}</p>
            </div>"#,
                degree = escape_html(&edu.degree),
                institution = escape_html(&edu.institution),
                year = escape_html(&edu.year),
            )
        })
        .collect::<String>();

    format!(
        r#"<div class="bg-white text-gray-900 min-h-screen">
      <header class="border-b border-gray-200 py-16 px-8">
        <div class="max-w-4xl mx-auto">
          <h1 class="text-5xl font-bold mb-2">{name}</h1>
          <p class="text-xl text-gray-600 mb-4">{title}</p>
          <p class="text-gray-700 max-w-2xl">{bio}</p>
        </div>
      </header>

      <section class="py-8 px-8 bg-gray-50">
        <div class="max-w-4xl mx-auto flex flex-wrap gap-6">{contact_links}</div>
      </section>

      <section class="py-12 px-8">
        <div class="max-w-4xl mx-auto">
          <h2 class="text-2xl font-bold mb-6">Skills</h2>
          <div class="flex flex-wrap gap-3">{skills}</div>
        </div>
      </section>

      <section class="py-12 px-8 bg-gray-50">
        <div class="max-w-4xl mx-auto">
          <h2 class="text-2xl font-bold mb-6">Experience</h2>
          <div class="space-y-8">{experience}</div>
        </div>
      </section>

      <section class="py-12 px-8">
        <div class="max-w-4xl mx-auto">
          <h2 class="text-2xl font-bold mb-6">Projects</h2>
          <div class="grid md:grid-cols-2 gap-6">{projects}</div>
        </div>
      </section>

      <section class="py-12 px-8 bg-gray-50">
        <div class="max-w-4xl mx-auto">
          <h2 class="text-2xl font-bold mb-6">Education</h2>
          <div class="space-y-4">{education}</div>
        </div>
      </section>
    </div>"#,
        name = escape_html(&data.name),
        title = escape_html(&data.title),
        bio = escape_html(&data.bio),
    )
}

/// Gradient family: saturated full-bleed gradient with centered hero.
pub fn render_gradient(data: &PortfolioSchema) -> String {
    let skills = data
        .skills
        .iter()
        .map(|skill| {
            format!(
                r#"<span class="px-6 py-3 bg-white/20 backdrop-blur-sm rounded-full text-lg font-medium">{}</span>"#,
                escape_html(skill)
            )
        })
        .collect::<String>();

    format!(
        r#"<div class="bg-gradient-to-br from-purple-600 via-pink-500 to-orange-500 text-white min-h-screen">
      <section class="py-20 px-8">
        <div class="max-w-5xl mx-auto text-center">
          <h1 class="text-6xl font-bold mb-4">{name}</h1>
          <p class="text-2xl mb-6">{title}</p>
          <p class="text-lg max-w-2xl mx-auto">{bio}</p>
        </div>
      </section>

      <section class="py-16 px-8">
        <div class="max-w-5xl mx-auto">
          <h2 class="text-4xl font-bold mb-8 text-center">Skills &amp; Expertise</h2>
          <div class="flex flex-wrap justify-center gap-4">{skills}</div>
        </div>
      </section>

      {common}
    </div>"#,
        name = escape_html(&data.name),
        title = escape_html(&data.title),
        bio = escape_html(&data.bio),
        common = render_common_sections(data),
    )
}

/// Dark family: near-black canvas, gradient-clipped heading.
pub fn render_dark(data: &PortfolioSchema) -> String {
    format!(
        r#"<div class="bg-gray-900 text-gray-100 min-h-screen">
      <div class="max-w-6xl mx-auto px-8 py-12">
        <header class="mb-16">
          <h1 class="text-5xl font-bold mb-3 bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent">{name}</h1>
          <p class="text-2xl text-gray-300 mb-4">{title}</p>
          <p class="text-gray-400 max-w-2xl">{bio}</p>
        </header>
        {common}
      </div>
    </div>"#,
        name = escape_html(&data.name),
        title = escape_html(&data.title),
        bio = escape_html(&data.bio),
        common = render_common_sections(data),
    )
}

const SMILE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="w-20 h-20 mx-auto mb-6 text-fuchsia-600" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2"><circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="2" fill="none"/><path d="M8 15s1.5 2 4 2 4-2 4-2" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/><path d="M9 9h.01M15 9h.01" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

const HEART_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="w-10 h-10 text-fuchsia-500" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2"><path d="M12 21C12 21 4 13.5 4 8.5C4 5.5 6.5 3 9.5 3C11.04 3 12.5 3.81 13.28 5.09C14.06 3.81 15.52 3 17.05 3C20.05 3 22.5 5.5 22.5 8.5C22.5 13.5 12 21 12 21Z" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

const STAR_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="w-8 h-8 mx-auto mb-3 text-fuchsia-500" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2"><polygon points="12 17.27 18.18 21 16.54 13.97 22 9.24 14.81 8.63 12 2 9.19 8.63 2 9.24 7.46 13.97 5.82 21 12 17.27" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" fill="none"/></svg>"#;

/// Designer family: pastel gradient canvas, blurred blobs, alternating
/// showcase rows and a timeline. The heaviest of the four.
pub fn render_designer(data: &PortfolioSchema) -> String {
    let skills = data
        .skills
        .iter()
        .map(|skill| {
            format!(
                r#"<div class="bg-white rounded-3xl p-6 shadow-xl text-center transform hover:scale-105 transition-transform">
                {STAR_SVG}
                <h3 class="text-lg font-bold text-purple-900">{}</h3>
              </div>"#,
                escape_html(skill)
            )
        })
        .collect::<String>();

    let projects = data
        .projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let reverse = if index % 2 == 1 { "md:flex-row-reverse" } else { "" };
            let technologies = project
                .technologies
                .iter()
                .map(|tech| {
                    format!(
                        r#"<span class="px-4 py-2 bg-gradient-to-r from-fuchsia-500 to-purple-500 text-white rounded-full font-medium shadow-lg">{}</span>"#,
                        escape_html(tech)
                    )
                })
                .collect::<String>();
            let link = if project.link.is_empty() {
                String::new()
            } else {
                format!(
                    r#"<a href="{}" target="_blank" class="inline-block mt-4 text-purple-600 hover:text-purple-800 font-bold">View Project →</a>"#,
                    escape_html(&project.link)
                )
            };
            format!(
                r#"<div class="flex flex-col md:flex-row gap-8 items-center {reverse}">
                <div class="flex-1 bg-gradient-to-br from-fuchsia-200 to-purple-200 rounded-3xl aspect-video shadow-2xl flex items-center justify-center">
                  <div class="text-white text-4xl font-black opacity-50">{name}</div>
                </div>
                <div class="flex-1">
                  <h3 class="text-3xl font-black mb-4 text-purple-900">{name}</h3>
                  <p class="text-gray-700 text-lg mb-4 leading-relaxed">{description}</p>
                  <div class="flex flex-wrap gap-3">{technologies}</div>
                  {link}
                </div>
              </div>"#,
                name = escape_html(&project.name),
                description = escape_html(&project.description),
            )
        })
        .collect::<String>();

    let experience = data
        .experience
        .iter()
        .enumerate()
        .map(|(index, exp)| {
            let (direction, align) = if index % 2 == 0 {
                ("flex-row", "text-right")
            } else {
                ("flex-row-reverse", "text-left")
            };
            format!(
                r#"<div class="flex items-center gap-8 {direction}">
                  <div class="flex-1 {align}">
                    <div class="bg-white rounded-3xl p-8 shadow-xl inline-block">
                      <h3 class="text-2xl font-black text-purple-900 mb-2">{role}</h3>
                      <p class="text-xl font-bold text-fuchsia-600 mb-2">{company}</p>
                      <p class="text-sm text-gray-600 mb-3">{duration}</p>
                      <p class="text-gray-700">{description}</p>
                    </div>
                  </div>
                  <div class="w-6 h-6 bg-fuchsia-500 rounded-full border-4 border-white shadow-lg z-10"></div>
                  <div class="flex-1"></div>
                </div>"#,
                role = escape_html(&exp.role),
                company = escape_html(&exp.company),
                duration = escape_html(&exp.duration),
                description = escape_html(&exp.description),
            )
        })
        .collect::<String>();

    let education = data
        .education
        .iter()
        .map(|edu| {
            format!(
                r#"<div class="bg-gradient-to-br from-fuchsia-500 to-purple-600 text-white rounded-3xl p-8 shadow-2xl text-center">
                <h3 class="text-2xl font-black mb-2">{degree}</h3>
                <p class="text-xl mb-2">{institution}</p>
                <p class="text-lg opacity-90">{year}</p>
              </div>"#,
                degree = escape_html(&edu.degree),
                institution = escape_html(&edu.institution),
                year = escape_html(&edu.year),
            )
        })
        .collect::<String>();

    let mut contact_links = String::new();
    let cta_class = "bg-white text-purple-600 px-8 py-4 rounded-full hover:bg-gray-100 transition-colors shadow-lg";
    if !data.contact.email.is_empty() {
        let email = escape_html(&data.contact.email);
        contact_links.push_str(&format!(
            r#"<a href="mailto:{email}" class="{cta_class}">📧 {email}</a>"#
        ));
    }
    if !data.contact.phone.is_empty() {
        let phone = escape_html(&data.contact.phone);
        contact_links.push_str(&format!(
            r#"<a href="tel:{phone}" class="{cta_class}">📱 {phone}</a>"#
        ));
    }
    if !data.contact.linkedin.is_empty() {
        let linkedin = escape_html(&data.contact.linkedin);
        contact_links.push_str(&format!(
            r#"<a href="https://{linkedin}" target="_blank" class="{cta_class}">💼 LinkedIn</a>"#
        ));
    }
    if !data.contact.github.is_empty() {
        let github = escape_html(&data.contact.github);
        contact_links.push_str(&format!(
            r#"<a href="https://{github}" target="_blank" class="{cta_class}">🐙 GitHub</a>"#
        ));
    }

    format!(
        r#"<div class="bg-gradient-to-br from-fuchsia-50 via-purple-50 to-indigo-50 min-h-screen">
      <section class="relative py-24 px-8 overflow-hidden">
        <div class="absolute top-0 left-1/4 w-64 h-64 bg-fuchsia-300 rounded-full opacity-20 blur-3xl"></div>
        <div class="absolute bottom-0 right-1/4 w-80 h-80 bg-indigo-300 rounded-full opacity-20 blur-3xl"></div>
        <div class="max-w-5xl mx-auto text-center relative z-10">
          {SMILE_SVG}
          <h1 class="text-7xl font-black mb-4 bg-gradient-to-r from-fuchsia-600 via-purple-600 to-indigo-600 bg-clip-text text-transparent">{name}</h1>
          <p class="text-3xl font-bold text-purple-700 mb-6">{title}</p>
          <p class="text-xl text-gray-700 max-w-3xl mx-auto leading-relaxed">{bio}</p>
        </div>
      </section>

      <div class="max-w-6xl mx-auto px-8 pb-16">
        <section class="mb-20">
          <h2 class="text-5xl font-black text-center mb-12 text-purple-900">Design Arsenal</h2>
          <div class="grid grid-cols-2 md:grid-cols-3 gap-6">{skills}</div>
        </section>

        <section class="mb-20">
          <h2 class="text-5xl font-black text-center mb-12 text-purple-900 flex items-center justify-center gap-3">
            {HEART_SVG}
            Portfolio Pieces
          </h2>
          <div class="space-y-12">{projects}</div>
        </section>

        <section class="mb-20">
          <h2 class="text-5xl font-black text-center mb-12 text-purple-900">My Design Journey</h2>
          <div class="relative">
            <div class="absolute left-1/2 top-0 bottom-0 w-1 bg-gradient-to-b from-fuchsia-500 via-purple-500 to-indigo-500 transform -translate-x-1/2"></div>
            <div class="space-y-12">{experience}</div>
          </div>
        </section>

        <section class="mb-20">
          <h2 class="text-5xl font-black text-center mb-12 text-purple-900">Education</h2>
          <div class="grid md:grid-cols-2 gap-8">{education}</div>
        </section>

        <section class="text-center bg-gradient-to-r from-fuchsia-600 via-purple-600 to-indigo-600 text-white rounded-3xl p-16 shadow-2xl">
          <h2 class="text-5xl font-black mb-6">Let&#39;s Create Magic Together!</h2>
          <p class="text-xl mb-8">Ready to bring your ideas to life?</p>
          <div class="flex flex-wrap justify-center gap-6 text-lg font-bold">{contact_links}</div>
        </section>
      </div>
    </div>"#,
        name = escape_html(&data.name),
        title = escape_html(&data.title),
        bio = escape_html(&data.bio),
    )
}

/// Experience and projects sections shared by the gradient and dark families.
fn render_common_sections(data: &PortfolioSchema) -> String {
    let experience = data
        .experience
        .iter()
        .map(|exp| {
            format!(
                r#"<div class="mb-8">
            <h3 class="text-2xl font-bold">{role}</h3>
            <p class="text-xl">{company}</p>
            <p class="text-sm mb-2">{duration}</p>
            <p>{description}</p>
          </div>"#,
                role = escape_html(&exp.role),
                company = escape_html(&exp.company),
                duration = escape_html(&exp.duration),
                description = escape_html(&exp.description),
            )
        })
        .collect::<String>();

    let projects = data
        .projects
        .iter()
        .map(|project| {
            let technologies = project
                .technologies
                .iter()
                .map(|tech| {
                    format!(
                        r#"<span class="px-3 py-1 rounded text-sm">{}</span>"#,
                        escape_html(tech)
                    )
                })
                .collect::<String>();
            format!(
                r#"<div class="mb-8 p-6 rounded-lg border">
            <h3 class="text-2xl font-bold mb-2">{name}</h3>
            <p class="mb-4">{description}</p>
            <div class="flex flex-wrap gap-2">{technologies}</div>
          </div>"#,
                name = escape_html(&project.name),
                description = escape_html(&project.description),
            )
        })
        .collect::<String>();

    format!(
        r#"<section class="py-16 px-8">
      <div class="max-w-5xl mx-auto">
        <h2 class="text-4xl font-bold mb-10 text-center">Experience</h2>
        {experience}
      </div>
    </section>

    <section class="py-16 px-8">
      <div class="max-w-5xl mx-auto">
        <h2 class="text-4xl font-bold mb-10 text-center">Projects</h2>
        {projects}
      </div>
    </section>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::{Contact, PortfolioSchema};

    fn sample() -> PortfolioSchema {
        PortfolioSchema {
            name: "Jane Doe".to_string(),
            title: "Engineer".to_string(),
            bio: "Builds things.".to_string(),
            skills: vec!["Rust".to_string(), "Go".to_string()],
            contact: Contact {
                email: "jane@example.com".to_string(),
                ..Contact::default()
            },
            ..PortfolioSchema::default()
        }
        .normalized()
    }

    #[test]
    fn test_each_family_carries_identity_fields() {
        let data = sample();
        for html in [
            render_minimal(&data),
            render_gradient(&data),
            render_dark(&data),
            render_designer(&data),
        ] {
            assert!(html.contains("Jane Doe"));
            assert!(html.contains("Engineer"));
            assert!(html.contains("Builds things."));
        }
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut data = sample();
        data.name = "<script>alert(1)</script>".to_string();
        data.bio = "R&D \"lead\"".to_string();
        for html in [
            render_minimal(&data),
            render_gradient(&data),
            render_dark(&data),
            render_designer(&data),
        ] {
            assert!(!html.contains("<script>alert(1)</script>"));
            assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
            assert!(html.contains("R&amp;D &quot;lead&quot;"));
        }
    }

    #[test]
    fn test_empty_contact_fields_render_no_links() {
        let mut data = sample();
        data.contact = Contact::default();
        let html = render_minimal(&data);
        assert!(!html.contains("mailto:"));
        assert!(!html.contains("tel:"));
        assert!(!html.contains("LinkedIn"));
    }

    #[test]
    fn test_designer_alternates_showcase_rows() {
        let mut data = sample();
        data.projects = vec![
            crate::models::portfolio::Project {
                name: "First".to_string(),
                description: "d".to_string(),
                technologies: vec![],
                link: String::new(),
            },
            crate::models::portfolio::Project {
                name: "Second".to_string(),
                description: "d".to_string(),
                technologies: vec![],
                link: String::new(),
            },
        ];
        let html = render_designer(&data);
        assert!(html.contains("md:flex-row-reverse"));
    }

    #[test]
    fn test_project_link_only_when_present() {
        let mut data = sample();
        data.projects[0].link = "https://example.com/p".to_string();
        let html = render_minimal(&data);
        assert!(html.contains(r#"href="https://example.com/p""#));

        data.projects[0].link = String::new();
        let html = render_minimal(&data);
        assert!(!html.contains("View Project"));
    }
}
