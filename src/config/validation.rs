//! Configuration validation logic.

use crate::config::loader::Config;
use crate::config::modes::DownloadMode;
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Reddit usernames: 3-20 chars, alphanumeric, hyphens, underscores.
static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{3,20}$").expect("username pattern is valid"));

/// Post permalink path: /r/<subreddit>/comments/<id>[/<slug>]
static PERMALINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/r/[A-Za-z0-9_]+/comments/[A-Za-z0-9]+(/[^/]*)?/?$")
        .expect("permalink pattern is valid")
});

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_origin(&config.account.origin)?;

    match config.options.download_mode {
        DownloadMode::Saved => validate_username(&config.account.username)?,
        DownloadMode::Single => {
            let post = config
                .options
                .single_post
                .as_deref()
                .ok_or_else(|| Error::MissingConfig("single_post (post permalink)".into()))?;
            parse_post_permalink(post)?;
        }
    }

    Ok(())
}

/// Validate the Reddit username.
pub fn validate_username(username: &str) -> Result<()> {
    let clean = username.trim().trim_start_matches("u/");

    if clean.is_empty() {
        return Err(Error::MissingConfig("username".to_string()));
    }

    if !USERNAME_PATTERN.is_match(clean) {
        return Err(Error::ConfigValidation {
            field: "username".to_string(),
            message: format!(
                "Username '{}' must be 3-20 characters of letters, digits, '-' or '_'",
                username
            ),
        });
    }

    let lower = clean.to_lowercase();
    if matches!(lower.as_str(), "replaceme" | "username" | "your_username") {
        return Err(Error::ConfigValidation {
            field: "username".to_string(),
            message: format!(
                "Username '{}' appears to be a placeholder. Please provide your Reddit username.",
                username
            ),
        });
    }

    Ok(())
}

/// Validate the site origin.
pub fn validate_origin(origin: &str) -> Result<()> {
    let url = Url::parse(origin)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "origin".to_string(),
            message: format!("Origin must be an http(s) URL (got '{}')", origin),
        });
    }

    if url.host_str().is_none() {
        return Err(Error::ConfigValidation {
            field: "origin".to_string(),
            message: format!("Origin has no host: '{}'", origin),
        });
    }

    Ok(())
}

/// Normalize a post permalink URL.
///
/// Drops the query string, fragment, trailing `.json` and trailing slash.
pub fn parse_post_permalink(input: &str) -> Result<String> {
    let input = input.trim();
    let mut url = Url::parse(input).map_err(|_| Error::ConfigValidation {
        field: "single_post".to_string(),
        message: format!("Not a URL: '{}'", input),
    })?;

    url.set_query(None);
    url.set_fragment(None);

    let path = url.path().trim_end_matches(".json").to_string();
    if !PERMALINK_PATTERN.is_match(&path) {
        return Err(Error::ConfigValidation {
            field: "single_post".to_string(),
            message: format!(
                "Could not find a post permalink in '{}'. Expected .../r/<subreddit>/comments/<id>/...",
                input
            ),
        });
    }
    url.set_path(path.trim_end_matches('/'));

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        assert!(validate_username("spez").is_ok());
        assert!(validate_username("u/some_user-1").is_ok());
    }

    #[test]
    fn test_invalid_username() {
        assert!(matches!(
            validate_username(""),
            Err(Error::MissingConfig(_))
        ));
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username("replaceme").is_err());
    }

    #[test]
    fn test_validate_origin() {
        assert!(validate_origin("https://www.reddit.com").is_ok());
        assert!(validate_origin("https://old.reddit.com/").is_ok());
        assert!(validate_origin("ftp://reddit.com").is_err());
        assert!(validate_origin("not a url").is_err());
    }

    #[test]
    fn test_parse_post_permalink() {
        assert_eq!(
            parse_post_permalink("https://www.reddit.com/r/cats/comments/abc123/a_cat/?utm=x")
                .unwrap(),
            "https://www.reddit.com/r/cats/comments/abc123/a_cat"
        );
        assert_eq!(
            parse_post_permalink("https://www.reddit.com/r/cats/comments/abc123/.json").unwrap(),
            "https://www.reddit.com/r/cats/comments/abc123"
        );
    }

    #[test]
    fn test_parse_post_permalink_invalid() {
        assert!(parse_post_permalink("https://www.reddit.com/user/someone/saved").is_err());
        assert!(parse_post_permalink("abc123").is_err());
    }

    #[test]
    fn test_single_mode_requires_post() {
        let mut config = Config::default();
        config.options.download_mode = DownloadMode::Single;
        assert!(matches!(
            validate_config(&config),
            Err(Error::MissingConfig(_))
        ));

        config.options.single_post =
            Some("https://www.reddit.com/r/cats/comments/abc123/a_cat/".into());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_saved_mode_requires_username() {
        let mut config = Config::default();
        assert!(validate_config(&config).is_err());

        config.account.username = "someone".into();
        assert!(validate_config(&config).is_ok());
    }
}
