//! Coordinator endpoint resolution: host/port from flags or environment,
//! with the scheme and port-suffix rules the deployment edge expects.

use url::Url;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: &str = "9000";

/// A resolved coordinator endpoint. Built once at startup; the poller and
/// the header both read the same URL for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: String,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }

    /// Resolve from explicit values, falling back to `COORDINATOR_HOST` /
    /// `COORDINATOR_PORT`, then to localhost:9000.
    pub fn resolve(host: Option<String>, port: Option<String>) -> Self {
        let host = host
            .or_else(|| std::env::var("COORDINATOR_HOST").ok())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.into());
        let port = port
            .or_else(|| std::env::var("COORDINATOR_PORT").ok())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PORT.into());
        Self { host, port }
    }

    /// Full status URL. Port 443 means https; the `:443`/`:80` suffix is
    /// dropped for its matching scheme.
    pub fn status_url(&self) -> String {
        let scheme = if self.port == "443" { "https" } else { "http" };
        let suffix = match (scheme, self.port.as_str()) {
            ("https", "443") | ("http", "80") => String::new(),
            _ => format!(":{}", self.port),
        };
        format!("{scheme}://{}{suffix}/api/status", self.host)
    }
}

/// Validate a caller-supplied status URL (e.g. pointing at a relay).
pub fn parse_status_url(raw: &str) -> Result<String, String> {
    let url = Url::parse(raw).map_err(|e| format!("invalid URL '{raw}': {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        other => Err(format!("unsupported scheme '{other}' in '{raw}'")),
    }
}
