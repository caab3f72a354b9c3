use crate::{error::AppResult, models::MovieId, services::providers::MovieProvider};

/// Resolves a free-text title to a movie id
///
/// Takes the provider's top-ranked search result without any local re-ranking.
/// Returns `None` when the search comes back empty.
pub async fn resolve_title(
    provider: &dyn MovieProvider,
    title: &str,
    language: &str,
) -> AppResult<Option<MovieId>> {
    let results = provider.search_movies(title, language).await?;
    let movie_id = results.first().map(|result| result.id);

    match movie_id {
        Some(id) => tracing::info!(title = %title, movie_id = %id, "Title resolved"),
        None => tracing::info!(title = %title, "Title did not match any movie"),
    }

    Ok(movie_id)
}
