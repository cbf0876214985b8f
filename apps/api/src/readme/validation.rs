//! Request validation for README generation.
//!
//! Runs before the inference engine; the engine assumes at least one of the
//! URL or description survived this step.

use crate::errors::AppError;
use crate::readme::handlers::GenerateReadmeRequest;
use crate::readme::inference::GenerationInput;

pub const MISSING_INPUT_MESSAGE: &str =
    "Please provide either a GitHub repository URL or a project description.";

/// Trims whitespace, then strips one trailing `.git` and one trailing `/`.
pub fn clean_repo_url(raw: &str) -> String {
    let url = raw.trim();
    let url = url.strip_suffix(".git").unwrap_or(url);
    let url = url.strip_suffix('/').unwrap_or(url);
    url.to_string()
}

/// Checks the `http(s)://[www.]github.com/owner/name[/]` shape.
pub fn is_github_url(url: &str) -> bool {
    let Some(rest) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    else {
        return false;
    };
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    let Some(path) = rest.strip_prefix("github.com/") else {
        return false;
    };
    let path = path.strip_suffix('/').unwrap_or(path);

    let Some((owner, name)) = path.split_once('/') else {
        return false;
    };

    let is_word = |c: char| c.is_alphanumeric() || c == '_' || c == '-';
    !owner.is_empty()
        && owner.chars().all(is_word)
        && !name.is_empty()
        && name.chars().all(|c| is_word(c) || c == '.')
}

/// Normalises the raw request and rejects it when generation has nothing to work from.
pub fn validate_request(
    request: GenerateReadmeRequest,
    max_description_chars: usize,
) -> Result<GenerationInput, AppError> {
    // Presence is judged on the raw values; cleanup happens afterwards.
    let repo_url = request.repo_url.filter(|url| !url.is_empty());
    let description = request.description.filter(|text| !text.is_empty());

    if repo_url.is_none() && description.is_none() {
        return Err(AppError::Validation(MISSING_INPUT_MESSAGE.to_string()));
    }

    // A URL that cleans down to nothing falls back to the default identity.
    let repo_url = repo_url
        .as_deref()
        .map(clean_repo_url)
        .filter(|url| !url.is_empty());

    if let Some(text) = &description {
        if text.chars().count() > max_description_chars {
            return Err(AppError::Validation(format!(
                "Description must be {max_description_chars} characters or less."
            )));
        }
    }

    if let Some(url) = &repo_url {
        if !is_github_url(url) {
            tracing::debug!("Repository URL does not look like a GitHub URL: {url}");
        }
    }

    Ok(GenerationInput {
        repo_url,
        description,
        tech_stack_items: request.tech_stack.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(repo_url: Option<&str>, description: Option<&str>) -> GenerateReadmeRequest {
        GenerateReadmeRequest {
            repo_url: repo_url.map(str::to_string),
            description: description.map(str::to_string),
            tech_stack: None,
        }
    }

    fn validation_message(err: AppError) -> String {
        match err {
            AppError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_clean_repo_url() {
        assert_eq!(
            clean_repo_url("  https://github.com/acme/widget.git  "),
            "https://github.com/acme/widget"
        );
        assert_eq!(
            clean_repo_url("https://github.com/acme/widget/"),
            "https://github.com/acme/widget"
        );
        assert_eq!(
            clean_repo_url("https://github.com/acme/widget"),
            "https://github.com/acme/widget"
        );
        assert_eq!(clean_repo_url("   "), "");
    }

    #[test]
    fn test_is_github_url() {
        assert!(is_github_url("https://github.com/acme/widget"));
        assert!(is_github_url("http://www.github.com/acme-co/widget.rs/"));
        assert!(!is_github_url("https://gitlab.com/acme/widget"));
        assert!(!is_github_url("https://github.com/acme"));
        assert!(!is_github_url("https://github.com/acme/widget/tree/main"));
        assert!(!is_github_url("github.com/acme/widget"));
    }

    #[test]
    fn test_both_inputs_absent_is_rejected() {
        let err = validate_request(request(None, None), 1000).unwrap_err();
        assert_eq!(validation_message(err), MISSING_INPUT_MESSAGE);
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let err = validate_request(request(Some(""), Some("")), 1000).unwrap_err();
        assert_eq!(validation_message(err), MISSING_INPUT_MESSAGE);
    }

    #[test]
    fn test_whitespace_description_is_present() {
        let input = validate_request(request(None, Some("   ")), 1000).unwrap();
        assert!(input.repo_url.is_none());
        assert_eq!(input.description.as_deref(), Some("   "));
    }

    #[test]
    fn test_url_that_cleans_to_nothing_is_accepted_without_url() {
        let input = validate_request(request(Some(".git"), None), 1000).unwrap();
        assert!(input.repo_url.is_none());
        assert!(input.description.is_none());

        let input = validate_request(request(Some("   "), None), 1000).unwrap();
        assert!(input.repo_url.is_none());
    }

    #[test]
    fn test_blank_description_survives_next_to_url() {
        let input =
            validate_request(request(Some("https://github.com/a/b"), Some("  ")), 1000).unwrap();
        assert_eq!(input.repo_url.as_deref(), Some("https://github.com/a/b"));
        assert_eq!(input.description.as_deref(), Some("  "));
    }

    #[test]
    fn test_description_at_limit_is_accepted() {
        let text = "x".repeat(1000);
        let input = validate_request(request(None, Some(&text)), 1000).unwrap();
        assert_eq!(input.description.as_deref(), Some(text.as_str()));
    }

    #[test]
    fn test_description_over_limit_is_rejected() {
        let text = "x".repeat(1001);
        let err = validate_request(request(None, Some(&text)), 1000).unwrap_err();
        assert_eq!(
            validation_message(err),
            "Description must be 1000 characters or less."
        );
    }

    #[test]
    fn test_limit_counts_characters() {
        let text = "ü".repeat(1000);
        assert!(validate_request(request(None, Some(&text)), 1000).is_ok());
    }

    #[test]
    fn test_url_is_normalised_and_tech_stack_defaults_empty() {
        let input =
            validate_request(request(Some(" https://github.com/acme/widget.git "), None), 1000)
                .unwrap();
        assert_eq!(input.repo_url.as_deref(), Some("https://github.com/acme/widget"));
        assert!(input.description.is_none());
        assert!(input.tech_stack_items.is_empty());
    }

    #[test]
    fn test_non_github_url_is_accepted() {
        let input =
            validate_request(request(Some("https://gitlab.com/acme/widget"), None), 1000).unwrap();
        assert_eq!(input.repo_url.as_deref(), Some("https://gitlab.com/acme/widget"));
    }
}
