mod movie;
mod recommendation;
mod tmdb;

pub use movie::{MediaUrls, MovieDetails, MovieId};
pub use recommendation::{RecommendationRequest, RecommendationResponse, DEFAULT_LANGUAGE};
pub use tmdb::{TmdbGenre, TmdbMovieDetails, TmdbMovieSummary, TmdbPage};
