//! # fh-core
//!
//! Core domain models and business logic for FolioHub.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod identity;
pub mod portfolio;
pub mod ports;
pub mod settings;

// Re-export commonly used types at the crate root
pub use identity::{CredentialError, ProviderAuthError, ProviderKind, SessionState, UserIdentity};
pub use portfolio::{
    FormMode, MutationState, PortfolioSeed, Profile, Project, ProjectDraft, ProjectFilter,
    ProjectId, ProjectStatus, ProjectStoreError, StatusFilter, ValidationError,
};
pub use settings::Settings;
