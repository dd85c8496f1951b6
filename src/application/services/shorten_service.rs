//! Link shortening and lookup service.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code};
use crate::utils::url_normalizer::{is_valid, is_valid_alias, normalize};

/// Aliases that collide with fixed routes and can never be followed.
const RESERVED_ALIASES: [&str; 3] = ["shorten", "info", "api"];

/// Service for creating and resolving shortened links.
///
/// Handles URL normalization and validation, custom alias checks, unique
/// code generation, and click counting on redirect-follow.
pub struct ShortenService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> ShortenService<R> {
    /// Creates a new service over a URL repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short link for `raw_url`, optionally under a custom alias.
    ///
    /// The URL is normalized first (trim, default scheme). An empty custom
    /// alias after trimming means "no alias requested" and falls back to
    /// code generation.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] when the normalized URL is empty or its
    ///   host fails the dot heuristic
    /// - [`AppError::InvalidAlias`] when the alias contains characters
    ///   outside alphanumeric, `-`, `_`
    /// - [`AppError::AliasTaken`] when the alias already exists or shadows
    ///   a fixed route, including the case where the storage-level
    ///   uniqueness check loses a race
    pub async fn create_short_link(
        &self,
        raw_url: &str,
        custom: Option<&str>,
    ) -> Result<UrlRecord, AppError> {
        let normalized = normalize(raw_url);
        if normalized.is_empty() || !is_valid(&normalized) {
            return Err(AppError::InvalidUrl);
        }

        let custom = custom.map(str::trim).filter(|c| !c.is_empty());

        let code = match custom {
            Some(alias) => {
                if !is_valid_alias(alias) {
                    return Err(AppError::InvalidAlias);
                }
                if RESERVED_ALIASES.contains(&alias) {
                    return Err(AppError::AliasTaken);
                }
                if self.repository.exists(alias).await? {
                    return Err(AppError::AliasTaken);
                }
                alias.to_string()
            }
            None => self.generate_unique_code().await?,
        };

        self.repository
            .insert(NewUrl {
                short_code: code,
                original_url: normalized,
            })
            .await
    }

    /// Resolves a code for a redirect, counting the click.
    ///
    /// Returns the record as it was before the increment; the caller only
    /// needs `original_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code, in which case
    /// nothing is mutated.
    pub async fn follow(&self, code: &str) -> Result<UrlRecord, AppError> {
        let record = self.get_info(code).await?;
        self.repository.increment_clicks(code).await?;
        Ok(record)
    }

    /// Looks up a record without touching the click counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code.
    pub async fn get_info(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(code))
    }

    async fn generate_unique_code(&self) -> Result<String, AppError> {
        let mut rng = StdRng::from_os_rng();
        let repository = self.repository.clone();

        generate_code(&mut rng, DEFAULT_CODE_LENGTH, move |code| {
            let repository = repository.clone();
            async move { repository.exists(&code).await }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use chrono::Utc;

    fn record(code: &str, url: &str, clicks: i64) -> UrlRecord {
        UrlRecord {
            short_code: code.to_string(),
            original_url: url.to_string(),
            clicks,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_with_generated_code() {
        let mut repo = MockUrlRepository::new();

        repo.expect_exists().returning(|_| Ok(false));
        repo.expect_insert().times(1).returning(|new_url| {
            assert_eq!(new_url.short_code.len(), 6);
            assert!(new_url.short_code.chars().all(|c| c.is_ascii_alphanumeric()));
            Ok(record(&new_url.short_code, &new_url.original_url, 0))
        });

        let service = ShortenService::new(Arc::new(repo));
        let link = service
            .create_short_link("https://example.com/page", None)
            .await
            .unwrap();

        assert_eq!(link.original_url, "https://example.com/page");
        assert_eq!(link.clicks, 0);
    }

    #[tokio::test]
    async fn test_create_normalizes_bare_host() {
        let mut repo = MockUrlRepository::new();

        repo.expect_exists().returning(|_| Ok(false));
        repo.expect_insert()
            .withf(|new_url| new_url.original_url == "http://example.com")
            .times(1)
            .returning(|new_url| Ok(record(&new_url.short_code, &new_url.original_url, 0)));

        let service = ShortenService::new(Arc::new(repo));
        let link = service
            .create_short_link(" example.com ", None)
            .await
            .unwrap();

        assert_eq!(link.original_url, "http://example.com");
    }

    #[tokio::test]
    async fn test_create_with_custom_alias() {
        let mut repo = MockUrlRepository::new();

        repo.expect_exists()
            .withf(|code| code == "my-link_1")
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_insert()
            .withf(|new_url| new_url.short_code == "my-link_1")
            .times(1)
            .returning(|new_url| Ok(record(&new_url.short_code, &new_url.original_url, 0)));

        let service = ShortenService::new(Arc::new(repo));
        let link = service
            .create_short_link("https://example.com", Some("my-link_1"))
            .await
            .unwrap();

        assert_eq!(link.short_code, "my-link_1");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_url_without_touching_store() {
        let repo = MockUrlRepository::new();
        let service = ShortenService::new(Arc::new(repo));

        let err = service.create_short_link("", None).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl));

        let err = service
            .create_short_link("http://localhost", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_alias() {
        let repo = MockUrlRepository::new();
        let service = ShortenService::new(Arc::new(repo));

        let err = service
            .create_short_link("https://example.com", Some("my link!"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidAlias));
    }

    #[tokio::test]
    async fn test_create_rejects_taken_alias_without_insert() {
        let mut repo = MockUrlRepository::new();

        repo.expect_exists().times(1).returning(|_| Ok(true));
        repo.expect_insert().times(0);

        let service = ShortenService::new(Arc::new(repo));
        let err = service
            .create_short_link("https://example.com", Some("taken"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::AliasTaken));
    }

    #[tokio::test]
    async fn test_create_rejects_route_shadowing_alias_without_store_access() {
        // "shorten", "info" and "api" are fixed routes; a link stored under
        // one of them could never be followed.
        for alias in ["shorten", "info", "api"] {
            let mut repo = MockUrlRepository::new();
            repo.expect_exists().times(0);
            repo.expect_insert().times(0);

            let service = ShortenService::new(Arc::new(repo));
            let err = service
                .create_short_link("https://example.com", Some(alias))
                .await
                .unwrap_err();

            assert!(matches!(err, AppError::AliasTaken));
        }
    }

    #[tokio::test]
    async fn test_empty_custom_alias_falls_back_to_generation() {
        let mut repo = MockUrlRepository::new();

        repo.expect_exists().returning(|_| Ok(false));
        repo.expect_insert()
            .withf(|new_url| new_url.short_code.len() == 6)
            .times(1)
            .returning(|new_url| Ok(record(&new_url.short_code, &new_url.original_url, 0)));

        let service = ShortenService::new(Arc::new(repo));
        let link = service
            .create_short_link("https://example.com", Some("  "))
            .await
            .unwrap();

        assert_eq!(link.short_code.len(), 6);
    }

    #[tokio::test]
    async fn test_generated_code_retries_past_collisions() {
        let mut repo = MockUrlRepository::new();
        let mut taken = 3;

        repo.expect_exists().returning(move |_| {
            if taken > 0 {
                taken -= 1;
                Ok(true)
            } else {
                Ok(false)
            }
        });
        repo.expect_insert()
            .times(1)
            .returning(|new_url| Ok(record(&new_url.short_code, &new_url.original_url, 0)));

        let service = ShortenService::new(Arc::new(repo));
        let link = service
            .create_short_link("https://example.com", None)
            .await
            .unwrap();

        // Three collisions still leave us in the fixed-length phase.
        assert_eq!(link.short_code.len(), 6);
    }

    #[tokio::test]
    async fn test_follow_increments_clicks() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_code()
            .withf(|code| code == "go1")
            .times(1)
            .returning(|_| Ok(Some(record("go1", "https://example.com/target", 4))));
        repo.expect_increment_clicks()
            .withf(|code| code == "go1")
            .times(1)
            .returning(|_| Ok(()));

        let service = ShortenService::new(Arc::new(repo));
        let link = service.follow("go1").await.unwrap();

        assert_eq!(link.original_url, "https://example.com/target");
    }

    #[tokio::test]
    async fn test_follow_unknown_code_does_not_increment() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_code().times(1).returning(|_| Ok(None));
        repo.expect_increment_clicks().times(0);

        let service = ShortenService::new(Arc::new(repo));
        let err = service.follow("nope").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_info_unknown_code() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));

        let service = ShortenService::new(Arc::new(repo));
        let err = service.get_info("nope").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
