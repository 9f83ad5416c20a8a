//! primetop_relay: a stateless HTTP relay that performs the dashboard's
//! status GET server-side and mirrors the coordinator's response with
//! permissive CORS headers.

pub mod config;
pub mod relay;
pub mod state;
