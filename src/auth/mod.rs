//! OAuth2 client-credentials authentication.
//!
//! [`TokenManager`] owns one cached access token per credential
//! configuration and serializes refresh so concurrent callers never issue
//! duplicate token requests. [`TokenRegistry`] maps value-equal
//! [`ClientCredentials`] to a single shared manager.

mod credentials;
mod manager;
mod token;

pub use credentials::ClientCredentials;
pub use manager::{TokenManager, TokenRegistry};
