//! Identity domain models
//!
//! Everything the rest of the system knows about "who is signed in":
//! the canonical [`UserIdentity`] snapshot, the [`SessionState`] wrapper
//! with its one-way `ready` latch, and the error taxonomy for
//! gateway-originated authentication failures.

pub mod error;
pub mod provider;
pub mod session;
pub mod user;

pub use error::{CredentialError, ProviderAuthError};
pub use provider::ProviderKind;
pub use session::SessionState;
pub use user::UserIdentity;
