//! Static site rendering.
//!
//! Every catalog entry's `render` function is currently backed by its
//! family's markup generator, so both arms of [`render_site`] produce the
//! same markup. The capability switch is decided once at startup and kept as
//! the seam where a template would plug in a bespoke renderer.

pub mod escape;
pub mod fallback;
pub mod site;

use tracing::info;

use crate::models::portfolio::PortfolioSchema;
use crate::templates::{Template, TemplateFamily};

pub use site::SiteBundle;

/// Marker for "direct template rendering is available here".
#[derive(Debug, Clone, Copy)]
pub struct RenderCapability;

impl RenderCapability {
    /// Probed once at startup. Until a template ships a renderer of its own
    /// this only changes which lookup runs; `FOLIO_RENDER_FALLBACK_ONLY`
    /// forces the family lookup.
    pub fn probe() -> Option<Self> {
        if std::env::var("FOLIO_RENDER_FALLBACK_ONLY").is_ok() {
            info!("Direct template rendering disabled, using family generators");
            None
        } else {
            Some(Self)
        }
    }
}

/// The markup generator backing a template family.
pub fn family_generator(family: TemplateFamily) -> fn(&PortfolioSchema) -> String {
    match family {
        TemplateFamily::Minimal => fallback::render_minimal,
        TemplateFamily::Gradient => fallback::render_gradient,
        TemplateFamily::Dark => fallback::render_dark,
        TemplateFamily::Designer => fallback::render_designer,
    }
}

/// Renders the full deployable site for one template and schema.
pub fn render_site(
    capability: Option<RenderCapability>,
    template: &Template,
    data: &PortfolioSchema,
) -> SiteBundle {
    let body = match capability {
        Some(_) => (template.render)(data),
        None => family_generator(template.family)(data),
    };

    SiteBundle {
        index_html: site::html_document(data, &body),
        styles_css: site::generate_css(template),
        readme_md: site::generate_readme(data, template),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::PortfolioSchema;
    use crate::templates::find_template;

    fn sample() -> PortfolioSchema {
        PortfolioSchema {
            name: "Alice Chen".to_string(),
            title: "Systems Engineer".to_string(),
            skills: vec!["Go".to_string(), "Rust".to_string(), "SQL".to_string()],
            ..PortfolioSchema::default()
        }
        .normalized()
    }

    /// The capability setting must never change visible content while the
    /// catalog renders through the family generators.
    #[test]
    fn test_capability_choice_never_changes_visible_content() {
        let data = sample();
        for template in crate::templates::TEMPLATES {
            let direct = render_site(Some(RenderCapability), template, &data);
            let fallback = render_site(None, template, &data);

            for html in [&direct.index_html, &fallback.index_html] {
                assert!(html.contains("Alice Chen"), "{}", template.id);
                assert!(html.contains("Systems Engineer"), "{}", template.id);
                assert!(
                    html.contains(&data.projects[0].name),
                    "{}",
                    template.id
                );
            }
        }
    }

    #[test]
    fn test_bundle_parts_are_consistent() {
        let data = sample();
        let template = find_template("professional-dark").unwrap();
        let bundle = render_site(Some(RenderCapability), template, &data);

        assert!(bundle.index_html.contains("styles.css"));
        assert!(bundle.styles_css.contains("Professional Dark"));
        assert!(bundle.readme_md.contains("Alice Chen"));
        assert!(bundle.readme_md.contains("Professional Dark"));
    }
}
