/// TMDB (The Movie Database) API provider
///
/// Endpoints used:
/// 1. Title Search: /search/movie → ranked candidates with TMDB ids
/// 2. Details: /movie/{id} → title, overview, genres, poster path
/// 3. Similar: /movie/{id}/similar → one page of related candidates
///
/// The API key travels as the `api_key` query parameter on every call.
use crate::{
    error::{AppError, AppResult},
    models::{MovieId, TmdbMovieDetails, TmdbMovieSummary, TmdbPage},
    services::providers::MovieProvider,
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    /// Creates a new TMDB provider
    ///
    /// `timeout` bounds each outbound request; `None` leaves requests unbounded.
    pub fn new(api_key: String, api_url: String, timeout: Option<Duration>) -> AppResult<Self> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Issues a GET against `path` and decodes the JSON body
    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> AppResult<T> {
        let url = self.endpoint(path);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                path = %path,
                response = %response_text,
                "Failed to deserialize TMDB response"
            );
            AppError::Upstream(format!("Failed to parse TMDB response: {}", e))
        })
    }
}

#[async_trait::async_trait]
impl MovieProvider for TmdbProvider {
    async fn search_movies(&self, query: &str, language: &str) -> AppResult<Vec<TmdbMovieSummary>> {
        let page: TmdbPage = self
            .get_json("/search/movie", &[("query", query), ("language", language)])
            .await?;
        let results = page.into_results();

        tracing::info!(
            query = %query,
            language = %language,
            results = results.len(),
            provider = "tmdb",
            "Title search completed"
        );

        Ok(results)
    }

    async fn movie_details(&self, movie_id: MovieId, language: &str) -> AppResult<TmdbMovieDetails> {
        let details: TmdbMovieDetails = self
            .get_json(&format!("/movie/{}", movie_id), &[("language", language)])
            .await?;

        tracing::info!(
            movie_id = %movie_id,
            language = %language,
            provider = "tmdb",
            "Movie details fetched"
        );

        Ok(details)
    }

    async fn similar_movies(
        &self,
        movie_id: MovieId,
        language: &str,
        page: u32,
    ) -> AppResult<Vec<TmdbMovieSummary>> {
        let page_param = page.to_string();
        let result: TmdbPage = self
            .get_json(
                &format!("/movie/{}/similar", movie_id),
                &[("language", language), ("page", page_param.as_str())],
            )
            .await?;
        let results = result.into_results();

        tracing::info!(
            movie_id = %movie_id,
            language = %language,
            page = page,
            results = results.len(),
            provider = "tmdb",
            "Similar movies fetched"
        );

        Ok(results)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
