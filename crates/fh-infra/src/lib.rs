//! FolioHub Infrastructure Adapters
//!
//! Implementations of the `fh-core` ports plus the seed content a fresh
//! namespace renders: an in-memory identity gateway for development and
//! tests, and a file-backed settings repository.

pub mod identity;
pub mod seed;
pub mod settings;

pub use identity::InMemoryIdentityGateway;
pub use settings::FileSettingsRepository;
