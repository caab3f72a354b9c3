/// Get-or-compute against a [`DetailCache`](crate::db::DetailCache).
///
/// Returns the cached value when `$key` is present. Otherwise awaits `$block`,
/// stores its output under `$key` and returns it. Errors from the block or from
/// the cache write propagate with `?`, so the macro must be used inside a
/// function returning `AppResult`.
///
/// # Example
/// ```rust,ignore
/// async fn details(&self, key: CacheKey) -> AppResult<MovieDetails> {
///     cached!(self.cache, key, async move {
///         fetch_details_from_provider().await
///     })
/// }
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $block:expr) => {{
        let key = $key;
        if let Some(cached) = $cache.get(&key).await {
            tracing::debug!(key = %key, "Cache hit");
            Ok(cached)
        } else {
            tracing::debug!(key = %key, "Cache miss");
            let value = $block.await?;
            $cache.put(&key, &value).await?;
            Ok(value)
        }
    }};
}
