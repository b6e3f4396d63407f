//! The fixed template catalog.
//!
//! Ten entries, no dynamic registration. Every template carries a pure
//! `render` function so preview and export share one code path; templates in
//! the same family share markup structure and differ in catalog metadata.

pub mod handlers;

use crate::models::portfolio::PortfolioSchema;
use crate::render::fallback;

/// Visual family a template belongs to. The family decides which markup
/// generator backs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFamily {
    Minimal,
    Gradient,
    Dark,
    Designer,
}

pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub family: TemplateFamily,
    pub render: fn(&PortfolioSchema) -> String,
}

pub static TEMPLATES: &[Template] = &[
    Template {
        id: "modern-minimal",
        name: "Modern Minimal",
        description: "Clean and minimalist design with focus on content",
        tags: &["Minimal", "Clean", "Professional"],
        family: TemplateFamily::Minimal,
        render: fallback::render_minimal,
    },
    Template {
        id: "creative-gradient",
        name: "Creative Gradient",
        description: "Vibrant gradients and modern aesthetics",
        tags: &["Creative", "Colorful", "Modern"],
        family: TemplateFamily::Gradient,
        render: fallback::render_gradient,
    },
    Template {
        id: "professional-dark",
        name: "Professional Dark",
        description: "Sleek dark theme for tech professionals",
        tags: &["Dark", "Professional", "Tech"],
        family: TemplateFamily::Dark,
        render: fallback::render_dark,
    },
    Template {
        id: "bold-colorful",
        name: "Bold Colorful",
        description: "Stand out with bold colors and dynamic layout",
        tags: &["Bold", "Colorful", "Dynamic"],
        family: TemplateFamily::Gradient,
        render: fallback::render_gradient,
    },
    Template {
        id: "elegant-classic",
        name: "Elegant Classic",
        description: "Timeless elegance with sophisticated typography",
        tags: &["Elegant", "Classic", "Sophisticated"],
        family: TemplateFamily::Minimal,
        render: fallback::render_minimal,
    },
    Template {
        id: "tech-futuristic",
        name: "Tech Futuristic",
        description: "Cutting-edge design with futuristic elements",
        tags: &["Futuristic", "Tech", "Innovative"],
        family: TemplateFamily::Dark,
        render: fallback::render_dark,
    },
    Template {
        id: "clean-corporate",
        name: "Clean Corporate",
        description: "Professional corporate look for business",
        tags: &["Corporate", "Business", "Clean"],
        family: TemplateFamily::Minimal,
        render: fallback::render_minimal,
    },
    Template {
        id: "artistic-portfolio",
        name: "Artistic Portfolio",
        description: "Express your creativity with artistic layout",
        tags: &["Artistic", "Creative", "Unique"],
        family: TemplateFamily::Gradient,
        render: fallback::render_gradient,
    },
    Template {
        id: "developer-showcase",
        name: "Developer Showcase",
        description: "Perfect for developers with code-focused design",
        tags: &["Developer", "Code", "Technical"],
        family: TemplateFamily::Dark,
        render: fallback::render_dark,
    },
    Template {
        id: "designer-creative",
        name: "Designer Creative",
        description: "Showcase design work with visual emphasis",
        tags: &["Designer", "Visual", "Portfolio"],
        family: TemplateFamily::Designer,
        render: fallback::render_designer,
    },
];

pub fn find_template(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}
