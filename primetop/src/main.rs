//! Entry point for the primetop TUI. Parses args and runs the App.

use std::env;

use primetop::app::App;
use primetop::config::{parse_status_url, Endpoint};
use primetop::profiles::{load_profiles, remember_profile, ProfileEntry};

struct ParsedArgs {
    host: Option<String>,
    port: Option<String>,
    url: Option<String>,
    profile: Option<String>,
    save: bool,
    dry_run: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "primetop".into());
    let usage = format!(
        "Usage: {prog} [--host HOST|-H HOST] [--port PORT|-p PORT] [--profile NAME|-P NAME] [--save] [--dry-run] [http(s)://HOST:PORT/api/status]"
    );
    let mut host: Option<String> = None;
    let mut port: Option<String> = None;
    let mut url: Option<String> = None;
    let mut profile: Option<String> = None;
    let mut save = false; // --save
    let mut dry_run = false; // --dry-run

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                return Err(usage);
            }
            "--host" | "-H" => {
                host = it.next();
            }
            "--port" | "-p" => {
                port = it.next();
            }
            "--profile" | "-P" => {
                profile = it.next();
            }
            "--save" => {
                save = true;
            }
            "--dry-run" => {
                dry_run = true;
            }
            _ if arg.starts_with("--host=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        host = Some(v.to_string());
                    }
                }
            }
            _ if arg.starts_with("--port=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        port = Some(v.to_string());
                    }
                }
            }
            _ if arg.starts_with("--profile=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        profile = Some(v.to_string());
                    }
                }
            }
            _ => {
                if url.is_none() {
                    url = Some(arg);
                } else {
                    return Err(format!("Unexpected argument. {usage}"));
                }
            }
        }
    }
    Ok(ParsedArgs {
        host,
        port,
        url,
        profile,
        save,
        dry_run,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reuse the same parsing logic for testability
    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{msg}");
            return Ok(());
        }
    };

    // Resolve the status URL: explicit URL wins, then host/port flags
    // (plus env fallbacks), then a saved profile, then plain defaults.
    let (status_url, new_entry): (String, Option<ProfileEntry>) =
        if let Some(raw) = parsed.url.as_deref() {
            match parse_status_url(raw) {
                Ok(u) => {
                    let entry = ProfileEntry::from_url(&u);
                    (u, Some(entry))
                }
                Err(msg) => {
                    eprintln!("{msg}");
                    return Ok(());
                }
            }
        } else if parsed.host.is_some() || parsed.port.is_some() {
            let ep = Endpoint::resolve(parsed.host.clone(), parsed.port.clone());
            let entry = ProfileEntry::from_endpoint(&ep);
            (ep.status_url(), Some(entry))
        } else if let Some(name) = parsed.profile.as_deref() {
            let profiles = load_profiles();
            match profiles.profiles.get(name) {
                Some(entry) => (entry.status_url(), None),
                None => {
                    eprintln!(
                        "Profile '{name}' does not exist; pass --host/--port or a URL to create it."
                    );
                    return Ok(());
                }
            }
        } else {
            let ep = Endpoint::resolve(None, None);
            (ep.status_url(), Some(ProfileEntry::from_endpoint(&ep)))
        };

    // Persist under the profile name when endpoint details were given.
    if let (Some(name), Some(entry)) = (parsed.profile.as_deref(), new_entry) {
        let mut profiles = load_profiles();
        let _ = remember_profile(&mut profiles, name, entry, parsed.save);
    }

    if parsed.dry_run {
        println!("{status_url}");
        return Ok(());
    }

    let mut app = App::new(status_url.clone());
    app.run(&status_url).await
}
