//! Saved coordinator profiles: a JSON mapping of profile name -> endpoint,
//! stored under $XDG_CONFIG_HOME/primetop/profiles.json (fallback
//! ~/.config/primetop/profiles.json).

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::PathBuf};

use crate::config::Endpoint;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProfileEntry {
    pub host: String,
    pub port: String,
    /// Set when the profile points at a full relay/status URL instead of a
    /// host/port pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ProfileEntry {
    pub fn from_endpoint(ep: &Endpoint) -> Self {
        Self {
            host: ep.host.clone(),
            port: ep.port.clone(),
            url: None,
        }
    }

    pub fn from_url(url: &str) -> Self {
        Self {
            host: String::new(),
            port: String::new(),
            url: Some(url.to_string()),
        }
    }

    /// The status URL this profile resolves to.
    pub fn status_url(&self) -> String {
        match &self.url {
            Some(u) => u.clone(),
            None => Endpoint::new(self.host.clone(), self.port.clone()).status_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProfilesFile {
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileEntry>,
    #[serde(default)]
    pub version: u32,
}

pub fn config_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("primetop")
    } else {
        dirs_next::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("primetop")
    }
}

pub fn profiles_path() -> PathBuf {
    config_dir().join("profiles.json")
}

pub fn load_profiles() -> ProfilesFile {
    let path = profiles_path();
    match fs::read_to_string(&path) {
        Ok(s) => serde_json::from_str(&s).unwrap_or_default(),
        Err(_) => ProfilesFile::default(),
    }
}

pub fn save_profiles(p: &ProfilesFile) -> std::io::Result<()> {
    let path = profiles_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_vec_pretty(p).map_err(std::io::Error::other)?;
    fs::write(path, data)
}

/// Whether `entry` should be written under a name whose current value is
/// `existing`. New names save immediately; a changed entry only overwrites
/// when forced; an identical entry is never rewritten.
pub fn should_write(existing: Option<&ProfileEntry>, entry: &ProfileEntry, force: bool) -> bool {
    match existing {
        None => true,
        Some(current) => *current != *entry && force,
    }
}

/// Record `entry` under `name`, persisting when [`should_write`] says so.
/// Returns whether the file was written.
pub fn remember_profile(
    profiles: &mut ProfilesFile,
    name: &str,
    entry: ProfileEntry,
    force: bool,
) -> bool {
    if !should_write(profiles.profiles.get(name), &entry, force) {
        return false;
    }
    profiles.profiles.insert(name.to_string(), entry);
    save_profiles(profiles).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_resolves_host_port_or_url() {
        let ep = ProfileEntry {
            host: "node1".into(),
            port: "9000".into(),
            url: None,
        };
        assert_eq!(ep.status_url(), "http://node1:9000/api/status");

        let relay = ProfileEntry::from_url("https://relay.example.com/api/status");
        assert_eq!(relay.status_url(), "https://relay.example.com/api/status");
    }

    #[test]
    fn changed_entry_needs_force_to_overwrite() {
        let current = ProfileEntry::from_url("http://one/api/status");
        let changed = ProfileEntry::from_url("http://two/api/status");

        assert!(should_write(None, &changed, false));
        assert!(!should_write(Some(&current), &current.clone(), false));
        assert!(!should_write(Some(&current), &changed, false));
        assert!(should_write(Some(&current), &changed, true));
    }
}
