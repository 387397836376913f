//! Identity extraction — turns a profile URL into the username it points at.
//!
//! Profile URLs follow `/<segment>/<username>/...`, e.g.
//! `https://www.reddit.com/user/kojied/` or `https://www.reddit.com/u/kojied`.

use url::{ParseError, Url};

/// Returns the second path segment of `profile_url`, or `None` when the URL
/// cannot be parsed or its path is too short.
///
/// A URL without a scheme (`www.reddit.com/user/kojied`) is read as https.
pub fn extract_username(profile_url: &str) -> Option<String> {
    let trimmed = profile_url.trim();
    let url = match Url::parse(trimmed) {
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{trimmed}")).ok()?,
        Err(_) => return None,
    };

    // path() always starts with '/', so index 0 is the empty string.
    url.path()
        .split('/')
        .nth(2)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_name_from_user_url() {
        assert_eq!(
            extract_username("https://www.reddit.com/user/kojied/").as_deref(),
            Some("kojied")
        );
    }

    #[test]
    fn test_extracts_name_with_trailing_segments() {
        assert_eq!(
            extract_username("https://site/u/alice/comments/?sort=top").as_deref(),
            Some("alice")
        );
    }

    #[test]
    fn test_short_path_is_absent() {
        assert_eq!(extract_username("https://www.reddit.com/user"), None);
        assert_eq!(extract_username("https://www.reddit.com/"), None);
        assert_eq!(extract_username("https://www.reddit.com"), None);
    }

    #[test]
    fn test_empty_name_segment_is_absent() {
        assert_eq!(extract_username("https://www.reddit.com/user/"), None);
        assert_eq!(extract_username("https://www.reddit.com/user//posts"), None);
    }

    #[test]
    fn test_url_without_scheme() {
        assert_eq!(
            extract_username("www.reddit.com/user/Hungry-Move-6603").as_deref(),
            Some("Hungry-Move-6603")
        );
    }

    #[test]
    fn test_malformed_url_is_absent() {
        assert_eq!(extract_username("http://[::1"), None);
        assert_eq!(extract_username(""), None);
    }
}
