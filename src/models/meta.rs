use serde::Serialize;

/// Number of build SHA characters shown in the HTML footer.
pub const SHORT_SHA_LEN: usize = 7;

/// Per-request snapshot of deployment information.
///
/// Built by [`crate::config::load_build_metadata`]; every field falls back to
/// a sentinel when its environment variable is absent.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BuildMetadata {
    /// Deployment/site identifier.
    pub site_name: String,
    /// Version of the functions host extension.
    pub functions_version: String,
    /// Language runtime version. The key name is part of the public JSON schema.
    pub python_version: String,
    /// Full build commit SHA, or "local".
    pub build_sha: String,
    /// RFC 3339 UTC timestamp taken when the metadata was built.
    pub utc_time: String,
    /// Deployment region label.
    pub region: String,
}

impl BuildMetadata {
    /// Returns the build SHA truncated to [`SHORT_SHA_LEN`] characters.
    ///
    /// Truncation counts characters, so a non-ASCII value never splits a
    /// code point.
    pub fn short_sha(&self) -> &str {
        match self.build_sha.char_indices().nth(SHORT_SHA_LEN) {
            Some((idx, _)) => &self.build_sha[..idx],
            None => &self.build_sha,
        }
    }
}

/// Outward-facing contact links used by the HTML action buttons.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactLinks {
    pub github_url: String,
    pub linkedin_url: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta_with_sha(sha: &str) -> BuildMetadata {
        BuildMetadata {
            site_name: "unknown".to_string(),
            functions_version: "unknown".to_string(),
            python_version: "unknown".to_string(),
            build_sha: sha.to_string(),
            utc_time: "2025-01-15T08:00:00.000000+00:00".to_string(),
            region: "unknown".to_string(),
        }
    }

    #[test]
    fn test_short_sha_truncates_long_values() {
        assert_eq!(meta_with_sha("abcdefgh1234").short_sha(), "abcdefg");
    }

    #[test]
    fn test_short_sha_keeps_short_values() {
        assert_eq!(meta_with_sha("local").short_sha(), "local");
        assert_eq!(meta_with_sha("abcdefg").short_sha(), "abcdefg");
        assert_eq!(meta_with_sha("").short_sha(), "");
    }

    #[test]
    fn test_short_sha_counts_characters_not_bytes() {
        let meta = meta_with_sha("ééééééééé");
        assert_eq!(meta.short_sha(), "ééééééé");
        assert_eq!(meta.short_sha().chars().count(), SHORT_SHA_LEN);
    }
}
