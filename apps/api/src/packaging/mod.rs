//! Archive packaging for the exported site.

pub mod handlers;

use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::errors::AppError;
use crate::render::SiteBundle;

/// Download filename: whitespace runs become hyphens, everything lowercased.
/// Punctuation is preserved ("Jane Q. Public" → "jane-q.-public-portfolio.zip").
pub fn archive_filename(name: &str) -> String {
    let slug = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("{slug}-portfolio.zip")
}

/// Serializes the bundle into a zip archive with exactly three entries.
/// Failure leaves nothing behind; the caller's schema is untouched.
pub fn build_archive(bundle: &SiteBundle) -> Result<Vec<u8>, AppError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let entries = [
        ("index.html", bundle.index_html.as_str()),
        ("styles.css", bundle.styles_css.as_str()),
        ("README.md", bundle.readme_md.as_str()),
    ];

    for (path, content) in entries {
        writer
            .start_file(path, options)
            .map_err(|e| AppError::Packaging(format!("Failed to add {path}: {e}")))?;
        writer
            .write_all(content.as_bytes())
            .map_err(|e| AppError::Packaging(format!("Failed to write {path}: {e}")))?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| AppError::Packaging(format!("Failed to finalize archive: {e}")))?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn bundle() -> SiteBundle {
        SiteBundle {
            index_html: "<!DOCTYPE html><html></html>".to_string(),
            styles_css: "body { margin: 0; }".to_string(),
            readme_md: "# Portfolio".to_string(),
        }
    }

    #[test]
    fn test_filename_normalization() {
        assert_eq!(
            archive_filename("Jane Q. Public"),
            "jane-q.-public-portfolio.zip"
        );
        assert_eq!(archive_filename("Alice"), "alice-portfolio.zip");
        assert_eq!(
            archive_filename("  Spaced   Out  "),
            "spaced-out-portfolio.zip"
        );
    }

    #[test]
    fn test_archive_contains_exactly_three_files() {
        let bytes = build_archive(&bundle()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["index.html", "styles.css", "README.md"]);
    }

    #[test]
    fn test_archive_round_trips_content() {
        let bytes = build_archive(&bundle()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

        let mut content = String::new();
        archive
            .by_name("README.md")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "# Portfolio");
    }
}
