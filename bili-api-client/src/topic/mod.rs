//! Bilibili Topic Client
//!
//! Pure HTTP client for the topic endpoints on api.bilibili.com.
//!
//! # Features
//! - Topic details and card feeds
//! - Hot topic list and topic search
//! - Like / favorite interactions (credential gated)

pub mod client;
pub mod error;
pub mod types;

pub use client::TopicClient;
pub use error::TopicError;
pub use types::*;
