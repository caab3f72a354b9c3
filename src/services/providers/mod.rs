/// Movie metadata provider abstraction
///
/// The recommendation flow only talks to the provider through this trait, so
/// tests can swap in a mock and the TMDB client stays the single place that
/// knows about URLs and credentials.
use crate::{
    error::AppResult,
    models::{MovieId, TmdbMovieDetails, TmdbMovieSummary},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for movie metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    /// Search movies by free-text title
    ///
    /// Results are in the provider's relevance order. An empty list means no match.
    async fn search_movies(&self, query: &str, language: &str) -> AppResult<Vec<TmdbMovieSummary>>;

    /// Fetch the raw details record for one movie
    async fn movie_details(&self, movie_id: MovieId, language: &str) -> AppResult<TmdbMovieDetails>;

    /// Fetch one page of movies the provider considers similar, in provider order
    async fn similar_movies(
        &self,
        movie_id: MovieId,
        language: &str,
        page: u32,
    ) -> AppResult<Vec<TmdbMovieSummary>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
