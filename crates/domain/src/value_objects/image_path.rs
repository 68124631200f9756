//! Cover image path normalization.
//!
//! Image paths arrive from clients in several shapes (full URLs pasted
//! from a browser, paths with the historical `/Images` casing, missing
//! leading slash). The stored form is always a site-local path with a
//! single leading `/` and a lowercase `images` first segment.

use url::Url;

/// Normalize a cover image path for storage.
///
/// Rules, applied in order:
/// - trim whitespace; an empty result stores nothing (`None`)
/// - an absolute URL keeps only its path portion (scheme/host stripped)
/// - a leading `Images` segment (any case) is rewritten to `images`
/// - the result always starts with exactly one `/`
pub fn normalize_image_path(path: Option<&str>) -> Option<String> {
    let trimmed = path?.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Relative paths fail to parse as URLs and pass through unchanged.
    let local = match Url::parse(trimmed) {
        Ok(url) if url.has_host() => url.path().to_string(),
        _ => trimmed.to_string(),
    };

    let rest = local.trim_start_matches('/');
    let (head, tail) = match rest.split_once('/') {
        Some((head, tail)) => (head, Some(tail)),
        None => (rest, None),
    };

    let head = if head.eq_ignore_ascii_case("images") {
        "images"
    } else {
        head
    };

    match tail {
        Some(tail) => Some(format!("/{head}/{tail}")),
        None => Some(format!("/{head}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_store_nothing() {
        assert_eq!(normalize_image_path(None), None);
        assert_eq!(normalize_image_path(Some("")), None);
        assert_eq!(normalize_image_path(Some("   ")), None);
    }

    #[test]
    fn absolute_url_keeps_only_the_local_path() {
        assert_eq!(
            normalize_image_path(Some("https://host/Images/cover.png")),
            Some("/images/cover.png".to_string())
        );
        assert_eq!(
            normalize_image_path(Some("http://cdn.example.com/covers/alpha.jpg")),
            Some("/covers/alpha.jpg".to_string())
        );
    }

    #[test]
    fn leading_images_segment_is_lowercased() {
        assert_eq!(
            normalize_image_path(Some("/Images/Avatar.png")),
            Some("/images/Avatar.png".to_string())
        );
        assert_eq!(
            normalize_image_path(Some("IMAGES/x.png")),
            Some("/images/x.png".to_string())
        );
        // Only the first segment is rewritten.
        assert_eq!(
            normalize_image_path(Some("/covers/Images/x.png")),
            Some("/covers/Images/x.png".to_string())
        );
    }

    #[test]
    fn leading_separator_is_forced_and_deduplicated() {
        assert_eq!(
            normalize_image_path(Some("covers/x.png")),
            Some("/covers/x.png".to_string())
        );
        assert_eq!(
            normalize_image_path(Some("//covers/x.png")),
            Some("/covers/x.png".to_string())
        );
    }

    #[test]
    fn bare_segment_still_gets_a_slash() {
        assert_eq!(
            normalize_image_path(Some("Images")),
            Some("/images".to_string())
        );
    }

    #[test]
    fn already_normalized_paths_are_untouched() {
        assert_eq!(
            normalize_image_path(Some("/images/covers/gta5.jpg")),
            Some("/images/covers/gta5.jpg".to_string())
        );
    }
}
