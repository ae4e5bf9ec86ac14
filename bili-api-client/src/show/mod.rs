//! Bilibili Show Ticketing Client
//!
//! Pure HTTP client for the show.bilibili.com ticketing API.
//!
//! # Features
//! - Project catalog with session and ticket listing
//! - Stored buyer identity retrieval
//! - Two-step order flow (purchase token, then order creation)
//! - Click-telemetry fabrication for the order endpoint

pub mod antibot;
pub mod client;
pub mod error;
pub mod order;
pub mod policy;
pub mod types;

pub use antibot::ClickPosition;
pub use client::ShowClient;
pub use error::ShowError;
pub use order::{OrderPayload, TicketOrder};
pub use types::*;
