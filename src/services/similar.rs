use crate::{
    error::AppResult,
    models::{MovieDetails, MovieId},
    services::details::DetailFetcher,
};

/// Maximum number of similar movies included in a recommendation
pub const SIMILAR_LIMIT: usize = 10;

const SIMILAR_PAGE: u32 = 1;

/// Fetches details for up to [`SIMILAR_LIMIT`] movies similar to `movie_id`
///
/// Only the first result page is consulted. Order follows the provider and
/// duplicates are kept. Details are fetched one at a time; the first failure
/// aborts the whole list.
pub async fn get_similar_movies(
    fetcher: &DetailFetcher,
    movie_id: MovieId,
    language: &str,
) -> AppResult<Vec<MovieDetails>> {
    let candidates = fetcher
        .provider()
        .similar_movies(movie_id, language, SIMILAR_PAGE)
        .await?;

    let mut similar = Vec::with_capacity(candidates.len().min(SIMILAR_LIMIT));
    for candidate in candidates.into_iter().take(SIMILAR_LIMIT) {
        similar.push(fetcher.get_movie_details(candidate.id, language).await?);
    }

    tracing::debug!(
        movie_id = %movie_id,
        language = %language,
        count = similar.len(),
        "Similar movies resolved"
    );

    Ok(similar)
}
