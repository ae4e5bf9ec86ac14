// Bilibili API Client
//
// Pure HTTP client bindings for Bilibili's show-ticketing and topic APIs.
// Every operation is a single request/response unit; callers supply a
// `Credential` by reference for the endpoints that need one, and every
// failure propagates unchanged for the caller to handle.
//
// Architecture:
// - show: ticket catalog, buyer identity and the two-step order flow
//   (show.bilibili.com)
// - topic: topic browsing and interaction (api.bilibili.com)
// - credential / device: cookie bundle and device fingerprint shared by
//   the provider modules

pub mod credential;
pub mod device;
pub mod show;
pub mod topic;

// Re-export client types for convenience
pub use credential::{Credential, CredentialError};
pub use show::{ShowClient, ShowError, TicketOrder};
pub use topic::{TopicClient, TopicError};
