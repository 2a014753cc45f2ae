//! Portfolio domain models
//!
//! The project entity and its draft/validation rules, the derived
//! filter predicate, the profile-card content, and the pure state
//! machine behind the add/edit/delete modal workflow.

pub mod error;
pub mod filter;
pub mod mutation;
pub mod profile;
pub mod project;
pub mod seed;

pub use error::{ProjectStoreError, ValidationError};
pub use filter::{ProjectFilter, StatusFilter};
pub use mutation::{FormMode, MutationState};
pub use profile::Profile;
pub use project::{Project, ProjectDraft, ProjectId, ProjectStatus};
pub use seed::PortfolioSeed;
