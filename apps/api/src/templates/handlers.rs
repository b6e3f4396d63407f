//! Axum route handler for the template catalog.

use axum::Json;
use serde::Serialize;

use crate::templates::TEMPLATES;

#[derive(Debug, Serialize)]
pub struct TemplateMeta {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateMeta>> {
    let list = TEMPLATES
        .iter()
        .map(|t| TemplateMeta {
            id: t.id,
            name: t.name,
            description: t.description,
            tags: t.tags,
        })
        .collect();
    Json(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_has_all_templates() {
        let Json(list) = handle_list_templates().await;
        assert_eq!(list.len(), 10);
        assert!(list.iter().any(|t| t.id == "designer-creative"));
    }
}
