//! Image URL construction for the TMDB image CDN
//!
//! Pure and total: a missing or empty path falls back to a fixed placeholder,
//! never an error. No validation is performed against the CDN itself.

/// Base URL for TMDB images.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

const POSTER_PLACEHOLDER: &str = "https://via.placeholder.com/342x513?text=No+Image+Available";
const BACKDROP_PLACEHOLDER: &str = "https://via.placeholder.com/1280x720?text=No+Image+Available";

/// Available poster sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PosterSize {
    Small,
    #[default]
    Medium,
    Large,
    Original,
}

impl PosterSize {
    /// CDN path token for this size.
    pub fn token(self) -> &'static str {
        match self {
            PosterSize::Small => "w185",
            PosterSize::Medium => "w342",
            PosterSize::Large => "w500",
            PosterSize::Original => "original",
        }
    }
}

/// Available backdrop sizes (wider pixel tokens than posters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackdropSize {
    Small,
    Medium,
    #[default]
    Large,
    Original,
}

impl BackdropSize {
    /// CDN path token for this size.
    pub fn token(self) -> &'static str {
        match self {
            BackdropSize::Small => "w300",
            BackdropSize::Medium => "w780",
            BackdropSize::Large => "w1280",
            BackdropSize::Original => "original",
        }
    }
}

/// Full poster URL for an API-relative path, or the poster placeholder when
/// the path is absent or empty.
pub fn poster_url(path: Option<&str>, size: PosterSize) -> String {
    match path {
        Some(p) if !p.is_empty() => format!("{}/{}{}", IMAGE_BASE_URL, size.token(), p),
        _ => POSTER_PLACEHOLDER.to_string(),
    }
}

/// Full backdrop URL for an API-relative path, or the backdrop placeholder
/// when the path is absent or empty.
pub fn backdrop_url(path: Option<&str>, size: BackdropSize) -> String {
    match path {
        Some(p) if !p.is_empty() => format!("{}/{}{}", IMAGE_BASE_URL, size.token(), p),
        _ => BACKDROP_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_placeholder_for_absent_paths() {
        // None and "" must be indistinguishable.
        assert_eq!(poster_url(None, PosterSize::Medium), POSTER_PLACEHOLDER);
        assert_eq!(poster_url(Some(""), PosterSize::Medium), POSTER_PLACEHOLDER);
        assert_eq!(
            poster_url(None, PosterSize::Original),
            poster_url(Some(""), PosterSize::Small)
        );
    }

    #[test]
    fn test_backdrop_placeholder_for_absent_paths() {
        assert_eq!(backdrop_url(None, BackdropSize::Large), BACKDROP_PLACEHOLDER);
        assert_eq!(
            backdrop_url(Some(""), BackdropSize::Original),
            BACKDROP_PLACEHOLDER
        );
    }

    #[test]
    fn test_placeholders_are_distinct_per_asset_class() {
        assert_ne!(
            poster_url(None, PosterSize::default()),
            backdrop_url(None, BackdropSize::default())
        );
    }

    #[test]
    fn test_poster_url_contains_path_and_size_token() {
        let path = "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg";
        for size in [
            PosterSize::Small,
            PosterSize::Medium,
            PosterSize::Large,
            PosterSize::Original,
        ] {
            let url = poster_url(Some(path), size);
            assert!(url.ends_with(path), "path must be a suffix: {url}");
            assert!(url.contains(size.token()), "token missing: {url}");
            assert!(url.starts_with(IMAGE_BASE_URL));
        }
    }

    #[test]
    fn test_backdrop_url_contains_path_and_size_token() {
        let path = "/fCayJrkfRaCRCTh8GqN30f8oyQF.jpg";
        let url = backdrop_url(Some(path), BackdropSize::Medium);
        assert_eq!(url, format!("{IMAGE_BASE_URL}/w780{path}"));
    }

    #[test]
    fn test_default_sizes() {
        // Poster defaults to medium, backdrop to large.
        assert_eq!(PosterSize::default().token(), "w342");
        assert_eq!(BackdropSize::default().token(), "w1280");
    }

    #[test]
    fn test_size_tokens_differ_between_asset_classes() {
        assert_ne!(PosterSize::Small.token(), BackdropSize::Small.token());
        assert_ne!(PosterSize::Large.token(), BackdropSize::Large.token());
    }
}
