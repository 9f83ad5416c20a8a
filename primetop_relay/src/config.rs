//! Relay configuration: upstream coordinator resolution and listen port.

pub const DEFAULT_LISTEN_PORT: u16 = 8787;

/// Build the coordinator status URL. Port 443 means https; the
/// `:443`/`:80` suffix is dropped for its matching scheme.
pub fn status_url(host: &str, port: &str) -> String {
    let scheme = if port == "443" { "https" } else { "http" };
    let suffix = match (scheme, port) {
        ("https", "443") | ("http", "80") => String::new(),
        _ => format!(":{port}"),
    };
    format!("{scheme}://{host}{suffix}/api/status")
}

/// Resolve the upstream from `COORDINATOR_HOST` / `COORDINATOR_PORT`,
/// defaulting to localhost:9000. Called once at startup.
pub fn coordinator_status_url() -> String {
    let host = std::env::var("COORDINATOR_HOST")
        .ok()
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "localhost".into());
    let port = std::env::var("COORDINATOR_PORT")
        .ok()
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "9000".into());
    status_url(&host, &port)
}

/// Pull `--port NUM` / `-p NUM` / `--port=NUM` out of the args, if given.
pub fn parse_port<I: IntoIterator<Item = String>>(args: I) -> Option<u16> {
    let mut it = args.into_iter();
    let _ = it.next(); // program name
    let mut long: Option<String> = None;
    let mut short: Option<String> = None;
    while let Some(a) = it.next() {
        match a.as_str() {
            "--port" => long = it.next(),
            "-p" => short = it.next(),
            _ if a.starts_with("--port=") => {
                if let Some((_, v)) = a.split_once('=') {
                    long = Some(v.to_string());
                }
            }
            _ => {}
        }
    }
    long.or(short).and_then(|s| s.parse::<u16>().ok())
}

/// Listen port: flag, then `PRIMETOP_RELAY_PORT`, then the default.
pub fn listen_port<I: IntoIterator<Item = String>>(args: I) -> u16 {
    parse_port(args)
        .or_else(|| {
            std::env::var("PRIMETOP_RELAY_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
        })
        .unwrap_or(DEFAULT_LISTEN_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_url_port_rules() {
        assert_eq!(status_url("localhost", "9000"), "http://localhost:9000/api/status");
        assert_eq!(status_url("c.example.com", "443"), "https://c.example.com/api/status");
        assert_eq!(status_url("c.example.com", "80"), "http://c.example.com/api/status");
    }

    fn argv(v: &[&str]) -> Vec<String> {
        std::iter::once("relay")
            .chain(v.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn port_long_short_and_assign() {
        assert_eq!(parse_port(argv(&["--port", "9001"])), Some(9001));
        assert_eq!(parse_port(argv(&["-p", "9002"])), Some(9002));
        assert_eq!(parse_port(argv(&["--port=9003"])), Some(9003));
        assert_eq!(parse_port(argv(&[])), None);
        assert_eq!(parse_port(argv(&["--port", "notanumber"])), None);
    }
}
