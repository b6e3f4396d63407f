//! Assembles the final deployable site: HTML document shell, companion
//! stylesheet, and README.

use crate::models::portfolio::PortfolioSchema;
use crate::render::escape::escape_html;
use crate::templates::Template;

/// Everything the packaging step needs, fully rendered.
#[derive(Debug, Clone)]
pub struct SiteBundle {
    pub index_html: String,
    pub styles_css: String,
    pub readme_md: String,
}

/// Wraps a rendered body fragment in the full document shell. The shell
/// carries the Tailwind CDN script with the extended color ramps the
/// designer family needs, since the exported site has no build step.
pub fn html_document(data: &PortfolioSchema, body: &str) -> String {
    let name = escape_html(&data.name);
    let title = escape_html(&data.title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{name} - {title}</title>
  <!-- Tailwind CSS with full configuration -->
  <script src="https://cdn.tailwindcss.com"></script>
  <script>
    tailwind.config = {{
      theme: {{
        extend: {{
          colors: {{
            fuchsia: {{50:'#fdf4ff',100:'#fae8ff',200:'#f5d0fe',300:'#f0abfc',400:'#e879f9',500:'#d946ef',600:'#c026d3',700:'#a21caf',800:'#86198f',900:'#701a75'}},
            purple: {{50:'#faf5ff',100:'#f3e8ff',200:'#e9d5ff',300:'#d8b4fe',400:'#c084fc',500:'#a855f7',600:'#9333ea',700:'#7e22ce',800:'#6b21a8',900:'#581c87'}},
            indigo: {{50:'#eef2ff',100:'#e0e7ff',200:'#c7d2fe',300:'#a5b4fc',400:'#818cf8',500:'#6366f1',600:'#4f46e5',700:'#4338ca',800:'#3730a3',900:'#312e81'}}
          }},
          blur: {{ '3xl':'96px' }}
        }}
      }}
    }}
  </script>
  <!-- Safelist hint (non-functional comment for reference of unusual classes) -->
  <!-- SAFELIST: bg-gradient-to-br from-fuchsia-50 via-purple-50 to-indigo-50 from-fuchsia-600 via-purple-600 to-indigo-600 from-fuchsia-200 to-purple-200 from-fuchsia-500 to-purple-600 -->
  <link rel="preconnect" href="https://fonts.googleapis.com" />
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin />
  <link href="https://fonts.googleapis.com/css2?family=Inter:wght@100;200;300;400;500;600;700;800;900&display=swap" rel="stylesheet" />
  <link rel="stylesheet" href="styles.css" />
  <style>
    body {{ font-family: 'Inter', sans-serif; margin:0; padding:0; }}
    html {{ scroll-behavior:smooth; }}
    .gradient-text {{ background:linear-gradient(to right,#c026d3,#9333ea,#4f46e5); -webkit-background-clip:text; background-clip:text; -webkit-text-fill-color:transparent; }}
  </style>
</head>
<body>
{body}
</body>
</html>"#
    )
}

/// Companion stylesheet: resets, animations, print and responsive overrides.
/// Static apart from the template name in the header comment.
pub fn generate_css(template: &Template) -> String {
    format!(
        r#"/* Portfolio Styles - {name} */
/*
 * Note: This portfolio uses Tailwind CSS via CDN for styling.
 * Additional custom styles and overrides are defined below.
 */

* {{
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}}

body {{
    font-family: 'Inter', sans-serif;
    line-height: 1.6;
    background: #fff;
    -webkit-font-smoothing: antialiased;
    -moz-osx-font-smoothing: grayscale;
}}

/* Smooth scrolling */
html {{
    scroll-behavior: smooth;
}}

/* Custom animations */
@keyframes fadeIn {{
    from {{
        opacity: 0;
        transform: translateY(20px);
    }}
    to {{
        opacity: 1;
        transform: translateY(0);
    }}
}}

@keyframes float {{
    0%, 100% {{
        transform: translateY(0);
    }}
    50% {{
        transform: translateY(-20px);
    }}
}}

@keyframes pulse {{
    0%, 100% {{
        opacity: 1;
    }}
    50% {{
        opacity: 0.5;
    }}
}}

.fade-in {{
    animation: fadeIn 0.6s ease-out;
}}

.float {{
    animation: float 3s ease-in-out infinite;
}}

/* Enhanced hover effects */
.hover-lift {{
    transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
}}

.hover-lift:hover {{
    transform: translateY(-8px);
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);
}}

/* Gradient text utility */
.gradient-text {{
    background: linear-gradient(to right, #c026d3, #9333ea, #4f46e5);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    background-clip: text;
    color: transparent;
}}

/* Custom scrollbar for webkit browsers */
::-webkit-scrollbar {{
    width: 10px;
    height: 10px;
}}

::-webkit-scrollbar-track {{
    background: #f1f1f1;
}}

::-webkit-scrollbar-thumb {{
    background: linear-gradient(to bottom, #c026d3, #9333ea);
    border-radius: 5px;
}}

::-webkit-scrollbar-thumb:hover {{
    background: linear-gradient(to bottom, #a21caf, #7e22ce);
}}

/* Print styles */
@media print {{
    body {{
        background: white;
    }}

    .no-print {{
        display: none;
    }}

    a[href]:after {{
        content: " (" attr(href) ")";
    }}
}}

/* Responsive typography */
@media (max-width: 768px) {{
    h1 {{
        font-size: 2.5rem !important;
        line-height: 1.2 !important;
    }}
    h2 {{
        font-size: 2rem !important;
        line-height: 1.3 !important;
    }}
    h3 {{
        font-size: 1.5rem !important;
    }}

    .text-7xl {{ font-size: 3rem !important; }}
    .text-6xl {{ font-size: 2.5rem !important; }}
    .text-5xl {{ font-size: 2rem !important; }}
    .text-4xl {{ font-size: 1.75rem !important; }}
    .text-3xl {{ font-size: 1.5rem !important; }}
    .text-2xl {{ font-size: 1.25rem !important; }}
    .text-xl {{ font-size: 1.125rem !important; }}

    /* Adjust padding and spacing */
    .py-24 {{ padding-top: 3rem !important; padding-bottom: 3rem !important; }}
    .py-20 {{ padding-top: 2.5rem !important; padding-bottom: 2.5rem !important; }}
    .py-16 {{ padding-top: 2rem !important; padding-bottom: 2rem !important; }}
    .py-12 {{ padding-top: 1.5rem !important; padding-bottom: 1.5rem !important; }}

    .px-8 {{ padding-left: 1rem !important; padding-right: 1rem !important; }}

    .gap-8 {{ gap: 1rem !important; }}
    .gap-6 {{ gap: 0.75rem !important; }}

    .mb-12 {{ margin-bottom: 2rem !important; }}
    .mb-8 {{ margin-bottom: 1.5rem !important; }}
    .mb-6 {{ margin-bottom: 1rem !important; }}
}}

@media (max-width: 640px) {{
    .text-8xl {{ font-size: 2.5rem !important; }}

    /* Force single column on mobile */
    .grid-cols-2,
    .grid-cols-3,
    .grid-cols-4 {{
        grid-template-columns: 1fr !important;
    }}
}}

/* Reduced motion for accessibility */
@media (prefers-reduced-motion: reduce) {{
    *,
    *::before,
    *::after {{
        animation-duration: 0.01ms !important;
        animation-iteration-count: 1 !important;
        transition-duration: 0.01ms !important;
    }}
}}
"#,
        name = template.name
    )
}

/// README shipped next to the site: how to open and deploy it.
pub fn generate_readme(data: &PortfolioSchema, template: &Template) -> String {
    format!(
        r#"# {name}'s Portfolio

This portfolio was generated using **AI-FOLIO** - *make a portfolio in less than a minute*.

## Template: {template_name}

{template_description}

## How to Use

1. Open `index.html` in your web browser
2. Deploy to any web hosting service (Vercel, Netlify, GitHub Pages, etc.)

## Deployment Instructions

### Vercel
```bash
npm install -g vercel
vercel --prod
```

### Netlify
1. Drag and drop this folder to https://app.netlify.com/drop
2. Your site will be live instantly!

### GitHub Pages
1. Create a new repository
2. Upload these files
3. Go to Settings -> Pages -> Select "main" branch
4. Your site will be live at https://username.github.io/repo-name

## Customization

- Edit `index.html` to update content
- Modify `styles.css` to change styling
- All responsive and works on mobile!

## Technologies Used

- HTML5
- CSS3 (TailwindCSS)
- JavaScript

---

Generated with AI-FOLIO
"#,
        name = data.name,
        template_name = template.name,
        template_description = template.description,
    )
}
