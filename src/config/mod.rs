//! Environment-driven configuration.
//!
//! Every value the endpoint reads from the environment is listed in
//! [`EnvVar`], together with the keys it is looked up under and the default
//! used when none of them is set. Nothing is cached: callers load a fresh
//! snapshot per request.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::meta::{BuildMetadata, ContactLinks};

/// A recognized configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvVar {
    SiteName,
    FunctionsVersion,
    RuntimeVersion,
    BuildSha,
    Region,
    GithubUrl,
    LinkedinUrl,
    Email,
}

impl EnvVar {
    /// Environment keys checked in order; the first non-empty one wins.
    ///
    /// The `VERCEL_*` fallbacks are system variables the host sets on every
    /// deployment, so a Vercel build reports its commit and region without
    /// extra setup.
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            EnvVar::SiteName => &["WEBSITE_SITE_NAME", "VERCEL_PROJECT_PRODUCTION_URL"],
            EnvVar::FunctionsVersion => &["FUNCTIONS_EXTENSION_VERSION"],
            EnvVar::RuntimeVersion => &["PYTHON_VERSION"],
            EnvVar::BuildSha => &["APP_BUILD_SHA", "VERCEL_GIT_COMMIT_SHA"],
            EnvVar::Region => &["APP_REGION", "VERCEL_REGION"],
            EnvVar::GithubUrl => &["APP_GITHUB_URL"],
            EnvVar::LinkedinUrl => &["APP_LINKEDIN_URL"],
            EnvVar::Email => &["APP_EMAIL"],
        }
    }

    /// Value used when no key is set.
    pub fn default_value(&self) -> &'static str {
        match self {
            EnvVar::BuildSha => "local",
            EnvVar::GithubUrl => "https://github.com/sajsamuel",
            EnvVar::LinkedinUrl => "https://www.linkedin.com",
            EnvVar::Email => "sajksamuel@outlook.com",
            EnvVar::SiteName
            | EnvVar::FunctionsVersion
            | EnvVar::RuntimeVersion
            | EnvVar::Region => "unknown",
        }
    }

    /// Resolve this value through `lookup`, falling back to the default.
    pub fn resolve<F>(&self, lookup: &F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        self.keys()
            .iter()
            .copied()
            .filter_map(|key| lookup(key))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .unwrap_or_else(|| self.default_value().to_string())
    }
}

/// Reads a key from the process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Build metadata from an arbitrary lookup and a fixed instant.
pub fn build_metadata_from<F>(lookup: &F, now: DateTime<Utc>) -> BuildMetadata
where
    F: Fn(&str) -> Option<String>,
{
    BuildMetadata {
        site_name: EnvVar::SiteName.resolve(lookup),
        functions_version: EnvVar::FunctionsVersion.resolve(lookup),
        python_version: EnvVar::RuntimeVersion.resolve(lookup),
        build_sha: EnvVar::BuildSha.resolve(lookup),
        utc_time: now.to_rfc3339_opts(SecondsFormat::Micros, false),
        region: EnvVar::Region.resolve(lookup),
    }
}

/// Snapshot the process environment and the current UTC time.
pub fn load_build_metadata() -> BuildMetadata {
    build_metadata_from(&process_env, Utc::now())
}

pub fn contact_links_from<F>(lookup: &F) -> ContactLinks
where
    F: Fn(&str) -> Option<String>,
{
    ContactLinks {
        github_url: EnvVar::GithubUrl.resolve(lookup),
        linkedin_url: EnvVar::LinkedinUrl.resolve(lookup),
        email: EnvVar::Email.resolve(lookup),
    }
}

pub fn load_contact_links() -> ContactLinks {
    contact_links_from(&process_env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_missing_environment_uses_sentinels() {
        let meta = build_metadata_from(&lookup_from(&[]), fixed_now());
        assert_eq!(meta.site_name, "unknown");
        assert_eq!(meta.functions_version, "unknown");
        assert_eq!(meta.python_version, "unknown");
        assert_eq!(meta.build_sha, "local");
        assert_eq!(meta.region, "unknown");
    }

    #[test]
    fn test_values_are_read_from_primary_keys() {
        let lookup = lookup_from(&[
            ("WEBSITE_SITE_NAME", "sajbio-func"),
            ("FUNCTIONS_EXTENSION_VERSION", "~4"),
            ("PYTHON_VERSION", "3.11"),
            ("APP_BUILD_SHA", "abcdefgh1234"),
            ("APP_REGION", "Canada Central"),
        ]);
        let meta = build_metadata_from(&lookup, fixed_now());
        assert_eq!(meta.site_name, "sajbio-func");
        assert_eq!(meta.functions_version, "~4");
        assert_eq!(meta.python_version, "3.11");
        assert_eq!(meta.build_sha, "abcdefgh1234");
        assert_eq!(meta.region, "Canada Central");
    }

    #[test]
    fn test_primary_key_wins_over_fallback() {
        let lookup = lookup_from(&[
            ("APP_BUILD_SHA", "1111111"),
            ("VERCEL_GIT_COMMIT_SHA", "2222222"),
            ("VERCEL_REGION", "iad1"),
        ]);
        let meta = build_metadata_from(&lookup, fixed_now());
        assert_eq!(meta.build_sha, "1111111");
        assert_eq!(meta.region, "iad1");
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let lookup = lookup_from(&[("APP_BUILD_SHA", "   "), ("APP_REGION", "")]);
        let meta = build_metadata_from(&lookup, fixed_now());
        assert_eq!(meta.build_sha, "local");
        assert_eq!(meta.region, "unknown");
    }

    #[test]
    fn test_utc_time_is_rfc3339_with_utc_offset() {
        let meta = build_metadata_from(&lookup_from(&[]), fixed_now());
        assert_eq!(meta.utc_time, "2025-01-15T08:30:00.000000+00:00");
        assert!(DateTime::parse_from_rfc3339(&meta.utc_time).is_ok());
    }

    #[test]
    fn test_contact_link_defaults_and_overrides() {
        let links = contact_links_from(&lookup_from(&[]));
        assert_eq!(links.github_url, "https://github.com/sajsamuel");
        assert_eq!(links.linkedin_url, "https://www.linkedin.com");
        assert_eq!(links.email, "sajksamuel@outlook.com");

        let links = contact_links_from(&lookup_from(&[("APP_EMAIL", "me@example.com")]));
        assert_eq!(links.email, "me@example.com");
    }

    const ALL_VARS: [EnvVar; 8] = [
        EnvVar::SiteName,
        EnvVar::FunctionsVersion,
        EnvVar::RuntimeVersion,
        EnvVar::BuildSha,
        EnvVar::Region,
        EnvVar::GithubUrl,
        EnvVar::LinkedinUrl,
        EnvVar::Email,
    ];

    #[test]
    fn test_every_var_has_keys_and_a_default() {
        for var in ALL_VARS {
            assert!(!var.keys().is_empty(), "{var:?} has no keys");
            assert!(!var.default_value().is_empty(), "{var:?} has no default");
        }
    }
}
