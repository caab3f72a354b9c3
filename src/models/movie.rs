use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::TmdbMovieDetails;

const UNKNOWN_TITLE: &str = "Unknown";
const MISSING_OVERVIEW: &str = "No description available.";
const MISSING_GENRES: &str = "N/A";

/// Numeric movie identifier assigned by TMDB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized movie record returned to clients and stored in the cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub title: String,
    pub poster: Option<String>,
    pub overview: String,
    pub genres: String,
    #[serde(rename = "tmdb_link")]
    pub external_link: String,
}

/// URL prefixes used to turn TMDB paths and ids into absolute links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrls {
    image_base_url: String,
    site_url: String,
}

impl MediaUrls {
    pub fn new(image_base_url: impl Into<String>, site_url: impl Into<String>) -> Self {
        Self {
            image_base_url: image_base_url.into().trim_end_matches('/').to_string(),
            site_url: site_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Poster paths from TMDB already carry their leading slash
    pub fn poster_url(&self, poster_path: &str) -> String {
        format!("{}{}", self.image_base_url, poster_path)
    }

    pub fn movie_url(&self, movie_id: MovieId) -> String {
        format!("{}/{}", self.site_url, movie_id)
    }
}

impl MovieDetails {
    /// Builds a record from a raw TMDB details payload, filling in defaults
    /// for anything the provider left out.
    pub fn from_tmdb(movie_id: MovieId, raw: TmdbMovieDetails, urls: &MediaUrls) -> Self {
        let genres = raw
            .genres
            .unwrap_or_default()
            .into_iter()
            .map(|genre| genre.name)
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            title: raw.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            poster: raw
                .poster_path
                .filter(|path| !path.is_empty())
                .map(|path| urls.poster_url(&path)),
            overview: raw.overview.unwrap_or_else(|| MISSING_OVERVIEW.to_string()),
            genres: if genres.is_empty() {
                MISSING_GENRES.to_string()
            } else {
                genres
            },
            external_link: urls.movie_url(movie_id),
        }
    }
}
