use crate::{
    error::{AppError, AppResult},
    models::{RecommendationRequest, RecommendationResponse},
    services::{details::DetailFetcher, similar, title_search},
};

pub const MISSING_TITLE_MESSAGE: &str = "No movie title provided";
pub const NOT_FOUND_MESSAGE: &str = "Movie not found";

/// Builds recommendations for a title
///
/// Resolves the title, fetches the resolved movie's details and then its
/// similar movies. The resolved movie always comes first, so the list holds
/// between 1 and 1 + [`similar::SIMILAR_LIMIT`] records.
pub async fn get_recommendations(
    fetcher: &DetailFetcher,
    request: &RecommendationRequest,
) -> AppResult<RecommendationResponse> {
    let title = request
        .title()
        .ok_or_else(|| AppError::InvalidInput(MISSING_TITLE_MESSAGE.to_string()))?;
    let language = request.language();

    let movie_id = title_search::resolve_title(fetcher.provider(), title, language)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

    let original = fetcher.get_movie_details(movie_id, language).await?;
    let similar = similar::get_similar_movies(fetcher, movie_id, language).await?;

    let mut recommendations = Vec::with_capacity(1 + similar.len());
    recommendations.push(original);
    recommendations.extend(similar);

    Ok(RecommendationResponse { recommendations })
}
