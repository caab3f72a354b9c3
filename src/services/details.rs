use std::sync::Arc;

use crate::{
    cached,
    db::{CacheKey, DetailCache},
    error::AppResult,
    models::{MediaUrls, MovieDetails, MovieId},
    services::providers::MovieProvider,
};

/// Fetches normalized movie details, going to the provider only on a cache miss
#[derive(Clone)]
pub struct DetailFetcher {
    provider: Arc<dyn MovieProvider>,
    cache: DetailCache,
    urls: MediaUrls,
}

impl DetailFetcher {
    pub fn new(provider: Arc<dyn MovieProvider>, cache: DetailCache, urls: MediaUrls) -> Self {
        Self {
            provider,
            cache,
            urls,
        }
    }

    pub fn provider(&self) -> &dyn MovieProvider {
        self.provider.as_ref()
    }

    pub fn cache(&self) -> &DetailCache {
        &self.cache
    }

    /// Returns the details for `movie_id` in `language`
    ///
    /// Cached records are returned as-is and never refreshed.
    pub async fn get_movie_details(&self, movie_id: MovieId, language: &str) -> AppResult<MovieDetails> {
        cached!(self.cache, CacheKey::new(movie_id, language), async move {
            let raw = self.provider.movie_details(movie_id, language).await?;
            AppResult::Ok(MovieDetails::from_tmdb(movie_id, raw, &self.urls))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{TmdbGenre, TmdbMovieDetails};
    use crate::services::providers::MockMovieProvider;
    use tempfile::TempDir;

    fn urls() -> MediaUrls {
        MediaUrls::new(
            "https://image.tmdb.org/t/p/w500",
            "https://www.themoviedb.org/movie",
        )
    }

    async fn fetcher(provider: MockMovieProvider, dir: &TempDir) -> DetailFetcher {
        let cache = DetailCache::load(dir.path().join("cache.json")).await.unwrap();
        DetailFetcher::new(Arc::new(provider), cache, urls())
    }

    fn inception() -> TmdbMovieDetails {
        TmdbMovieDetails {
            title: Some("Inception".to_string()),
            overview: Some("Cobb steals secrets from dreams.".to_string()),
            poster_path: Some("/inception.jpg".to_string()),
            genres: Some(vec![TmdbGenre {
                name: "Action".to_string(),
            }]),
        }
    }

    #[tokio::test]
    async fn test_second_call_is_served_from_cache() {
        let dir = TempDir::new().unwrap();
        let mut provider = MockMovieProvider::new();
        provider
            .expect_movie_details()
            .withf(|id, language| *id == MovieId(27205) && language == "en")
            .times(1)
            .returning(|_, _| Ok(inception()));

        let fetcher = fetcher(provider, &dir).await;

        let first = fetcher.get_movie_details(MovieId(27205), "en").await.unwrap();
        let second = fetcher.get_movie_details(MovieId(27205), "en").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.title, "Inception");
        assert_eq!(first.poster.as_deref(), Some("https://image.tmdb.org/t/p/w500/inception.jpg"));
        assert_eq!(first.external_link, "https://www.themoviedb.org/movie/27205");
    }

    #[tokio::test]
    async fn test_languages_are_cached_separately() {
        let dir = TempDir::new().unwrap();
        let mut provider = MockMovieProvider::new();
        provider
            .expect_movie_details()
            .withf(|id, language| *id == MovieId(27205) && language == "en")
            .times(1)
            .returning(|_, _| Ok(inception()));
        provider
            .expect_movie_details()
            .withf(|id, language| *id == MovieId(27205) && language == "hi")
            .times(1)
            .returning(|_, _| {
                Ok(TmdbMovieDetails {
                    title: Some("इंसेप्शन".to_string()),
                    ..Default::default()
                })
            });

        let fetcher = fetcher(provider, &dir).await;

        let en = fetcher.get_movie_details(MovieId(27205), "en").await.unwrap();
        let hi = fetcher.get_movie_details(MovieId(27205), "hi").await.unwrap();

        assert_eq!(en.title, "Inception");
        assert_eq!(hi.title, "इंसेप्शन");
        assert_eq!(fetcher.cache().len().await, 2);
    }

    #[tokio::test]
    async fn test_cache_survives_restart() {
        let dir = TempDir::new().unwrap();
        let mut provider = MockMovieProvider::new();
        provider
            .expect_movie_details()
            .times(1)
            .returning(|_, _| Ok(inception()));

        let original = fetcher(provider, &dir)
            .await
            .get_movie_details(MovieId(27205), "en")
            .await
            .unwrap();

        // A fresh fetcher whose provider must not be called at all.
        let restarted = fetcher(MockMovieProvider::new(), &dir).await;
        let reloaded = restarted.get_movie_details(MovieId(27205), "en").await.unwrap();

        assert_eq!(reloaded, original);
    }

    #[tokio::test]
    async fn test_provider_failure_is_not_cached() {
        let dir = TempDir::new().unwrap();
        let mut provider = MockMovieProvider::new();
        provider
            .expect_movie_details()
            .times(1)
            .returning(|_, _| Err(AppError::Upstream("TMDB API returned status 503".to_string())));

        let fetcher = fetcher(provider, &dir).await;
        let result = fetcher.get_movie_details(MovieId(27205), "en").await;

        assert!(matches!(result, Err(AppError::Upstream(_))));
        assert!(fetcher.cache().is_empty().await);
    }
}
