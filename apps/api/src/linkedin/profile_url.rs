//! Profile URL validation.

use reqwest::Url;

const LINKEDIN_HOST: &str = "linkedin.com";

/// Returns the profile slug of a LinkedIn URL (`.../in/jane-doe/` → `jane-doe`).
///
/// `None` unless the URL is http(s), the host is `linkedin.com` or one of its
/// subdomains, and the path has a non-empty last segment. One trailing slash is
/// tolerated.
pub fn extract_username(profile_url: &str) -> Option<String> {
    let url = Url::parse(profile_url.trim()).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    let host = url.host_str()?.to_ascii_lowercase();
    let host_ok = host == LINKEDIN_HOST || host.ends_with(&format!(".{LINKEDIN_HOST}"));
    if !host_ok {
        return None;
    }

    let segments: Vec<&str> = url.path_segments()?.collect();
    let last = match segments.as_slice() {
        [.., prev, ""] => *prev,
        [.., last] => *last,
        [] => return None,
    };

    if last.is_empty() {
        None
    } else {
        Some(last.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_url_yields_slug() {
        assert_eq!(
            extract_username("https://www.linkedin.com/in/jane-doe").as_deref(),
            Some("jane-doe")
        );
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        assert_eq!(
            extract_username("https://linkedin.com/in/jane-doe/").as_deref(),
            Some("jane-doe")
        );
    }

    #[test]
    fn test_other_domains_are_rejected() {
        assert!(extract_username("https://example.com/in/jane-doe").is_none());
        assert!(extract_username("https://notlinkedin.com/in/jane-doe").is_none());
        assert!(extract_username("https://linkedin.com.evil.io/in/jane-doe").is_none());
    }

    #[test]
    fn test_non_http_and_garbage_are_rejected() {
        assert!(extract_username("ftp://linkedin.com/in/jane-doe").is_none());
        assert!(extract_username("not a url").is_none());
        assert!(extract_username("").is_none());
    }

    #[test]
    fn test_empty_path_is_rejected() {
        assert!(extract_username("https://www.linkedin.com/").is_none());
        assert!(extract_username("https://www.linkedin.com//").is_none());
    }
}
