//! Axum route handlers for the README generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::readme::template::build_readme;
use crate::readme::validation::validate_request;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct GenerateReadmeRequest {
    #[serde(default, alias = "repoUrl")]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "techStackItems")]
    pub tech_stack: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ReadmeMetadata {
    pub project_name: String,
    /// The selected tokens exactly as received.
    pub tech_stack: Vec<String>,
    pub generated: bool,
}

#[derive(Debug, Serialize)]
pub struct GenerateReadmeResponse {
    pub markdown: String,
    pub metadata: ReadmeMetadata,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate-readme
///
/// Validates the request, infers README fields and renders the template.
pub async fn handle_generate_readme(
    State(state): State<AppState>,
    Json(request): Json<GenerateReadmeRequest>,
) -> Result<Json<GenerateReadmeResponse>, AppError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("generate_readme", %request_id);

    span.in_scope(|| -> Result<Json<GenerateReadmeResponse>, AppError> {
        let input = validate_request(request, state.config.max_description_chars)
            .inspect_err(|e| warn!("Rejected README request: {e}"))?;

        let readme = build_readme(&input)?;

        info!(
            project = %readme.fields.project_name,
            tech_tokens = input.tech_stack_items.len(),
            markdown_len = readme.markdown.len(),
            "README generated"
        );

        Ok(Json(GenerateReadmeResponse {
            markdown: readme.markdown,
            metadata: ReadmeMetadata {
                project_name: readme.fields.project_name,
                tech_stack: input.tech_stack_items,
                generated: true,
            },
        }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_snake_case_fields() {
        let json = serde_json::json!({
            "repo_url": "https://github.com/acme/widget",
            "description": null,
            "tech_stack": ["React"]
        });
        let request: GenerateReadmeRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.repo_url.as_deref(), Some("https://github.com/acme/widget"));
        assert!(request.description.is_none());
        assert_eq!(request.tech_stack, Some(vec!["React".to_string()]));
    }

    #[test]
    fn test_request_accepts_camel_case_aliases() {
        let json = serde_json::json!({
            "repoUrl": "https://github.com/acme/widget",
            "techStackItems": ["Docker"]
        });
        let request: GenerateReadmeRequest = serde_json::from_value(json).unwrap();
        assert!(request.repo_url.is_some());
        assert_eq!(request.tech_stack, Some(vec!["Docker".to_string()]));
    }

    #[test]
    fn test_request_fields_are_all_optional() {
        let request: GenerateReadmeRequest = serde_json::from_str("{}").unwrap();
        assert!(request.repo_url.is_none());
        assert!(request.description.is_none());
        assert!(request.tech_stack.is_none());
    }

    #[test]
    fn test_metadata_serializes_snake_case() {
        let metadata = ReadmeMetadata {
            project_name: "Widget".to_string(),
            tech_stack: vec!["React".to_string()],
            generated: true,
        };
        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["project_name"], "Widget");
        assert_eq!(value["tech_stack"][0], "React");
        assert_eq!(value["generated"], true);
    }
}
