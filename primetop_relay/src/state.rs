//! Shared relay state: one HTTP client and the resolved upstream URL.

use reqwest::Client;

#[derive(Clone)]
pub struct RelayState {
    pub client: Client,
    pub status_url: String,
}
