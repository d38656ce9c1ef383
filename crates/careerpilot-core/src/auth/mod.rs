//! Login state kept between command invocations.
//!
//! A `Session` holds the bearer token on disk until it expires (60 minutes
//! after login). A `CredentialStore` optionally remembers the password in
//! the OS keychain so an expired token can be replaced without prompting.

pub mod credentials;
pub mod session;

pub use credentials::CredentialStore;
pub use session::{Session, SessionData};
