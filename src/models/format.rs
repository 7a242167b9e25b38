/// Output representation selected by the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderFormat {
    /// Pretty-printed JSON document (the default).
    #[default]
    Json,
    /// Full HTML page.
    Html,
}

impl RenderFormat {
    /// Parse a `format` parameter value.
    ///
    /// Matching is trimmed and case-insensitive. Anything that is not "html"
    /// selects JSON, including an absent or empty value.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "html" => RenderFormat::Html,
            _ => RenderFormat::Json,
        }
    }

    /// Derive the format from a raw query string (without the leading `?`).
    ///
    /// The first `format` pair wins and other parameters are ignored. An
    /// undecodable query string is treated like a missing one.
    pub fn from_query(query: Option<&str>) -> Self {
        let pairs: Vec<(String, String)> = query
            .and_then(|q| serde_urlencoded::from_str(q).ok())
            .unwrap_or_default();
        let format = pairs
            .into_iter()
            .find(|(key, _)| key == "format")
            .map(|(_, value)| value);
        Self::from_param(format.as_deref())
    }

    /// MIME type sent in the `Content-Type` header.
    pub fn content_type(&self) -> &'static str {
        match self {
            RenderFormat::Json => "application/json",
            RenderFormat::Html => "text/html; charset=utf-8",
        }
    }
}

impl std::fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderFormat::Json => write!(f, "json"),
            RenderFormat::Html => write!(f, "html"),
        }
    }
}
