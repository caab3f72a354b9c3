use serde::{Deserialize, Serialize};

use super::MovieDetails;

/// Language used when the client does not send one
pub const DEFAULT_LANGUAGE: &str = "en";

/// Body of POST /recommend
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl RecommendationRequest {
    /// Trimmed title, or `None` when absent or blank
    pub fn title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
    }

    pub fn language(&self) -> &str {
        self.language
            .as_deref()
            .map(str::trim)
            .filter(|language| !language.is_empty())
            .unwrap_or(DEFAULT_LANGUAGE)
    }
}

/// Resolved movie first, followed by its similar movies in provider order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResponse {
    pub recommendations: Vec<MovieDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: Option<&str>, language: Option<&str>) -> RecommendationRequest {
        RecommendationRequest {
            title: title.map(String::from),
            language: language.map(String::from),
        }
    }

    #[test]
    fn test_title_is_trimmed() {
        assert_eq!(request(Some("  Inception "), None).title(), Some("Inception"));
    }

    #[test]
    fn test_blank_title_is_missing() {
        assert_eq!(request(None, None).title(), None);
        assert_eq!(request(Some(""), None).title(), None);
        assert_eq!(request(Some(" \t\n"), None).title(), None);
    }

    #[test]
    fn test_language_defaults_to_english() {
        assert_eq!(request(Some("Inception"), None).language(), "en");
        assert_eq!(request(Some("Inception"), Some("  ")).language(), "en");
        assert_eq!(request(Some("Inception"), Some("hi")).language(), "hi");
    }

    #[test]
    fn test_request_deserialization() {
        let parsed: RecommendationRequest = serde_json::from_str(r#"{"title": "Dangal"}"#).unwrap();
        assert_eq!(parsed.title(), Some("Dangal"));
        assert_eq!(parsed.language(), "en");

        let parsed: RecommendationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.title(), None);
    }
}
