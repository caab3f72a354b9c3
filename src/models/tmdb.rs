// ============================================================================
// TMDB API Types
// ============================================================================

use serde::Deserialize;

use super::MovieId;

/// Response from GET /movie/{id}
///
/// Every field is optional; missing values are defaulted during normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbMovieDetails {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<TmdbGenre>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    pub name: String,
}

/// Entry in a search or similar-movies result page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TmdbMovieSummary {
    pub id: MovieId,
    #[serde(default)]
    pub title: Option<String>,
}

/// Paginated result list from /search/movie and /movie/{id}/similar
#[derive(Debug, Deserialize)]
pub struct TmdbPage {
    #[serde(default)]
    pub results: Option<Vec<TmdbMovieSummary>>,
}

impl TmdbPage {
    pub fn into_results(self) -> Vec<TmdbMovieSummary> {
        self.results.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_deserialization_ignores_extra_fields() {
        let json = r#"{
            "id": 27205,
            "title": "Inception",
            "overview": "Cobb, a skilled thief...",
            "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
            "runtime": 148
        }"#;

        let details: TmdbMovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.title.as_deref(), Some("Inception"));
        assert_eq!(details.genres.unwrap().len(), 2);
    }

    #[test]
    fn test_details_null_poster_path() {
        let json = r#"{"title": "Obscure Short", "poster_path": null, "genres": null}"#;

        let details: TmdbMovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.poster_path, None);
        assert!(details.genres.is_none());
    }

    #[test]
    fn test_page_without_results() {
        let page: TmdbPage = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert!(page.into_results().is_empty());

        let page: TmdbPage = serde_json::from_str(r#"{"results": null}"#).unwrap();
        assert!(page.into_results().is_empty());
    }

    #[test]
    fn test_page_keeps_provider_order() {
        let json = r#"{"page": 1, "results": [
            {"id": 27205, "title": "Inception"},
            {"id": 157336, "title": "Interstellar"},
            {"id": 155}
        ]}"#;

        let results = serde_json::from_str::<TmdbPage>(json).unwrap().into_results();
        let ids: Vec<u64> = results.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![27205, 157336, 155]);
        assert_eq!(results[2].title, None);
    }
}
