//! FolioHub Application Orchestration Layer
//!
//! Session, edit-mode, project-store and mutation-workflow orchestration
//! over the domain models and ports of `fh-core`.

pub mod editing;
pub mod layout;
pub mod profile;
pub mod projects;
pub mod session;

pub use editing::{EditModeController, EditModeHandle};
pub use fh_core::PortfolioSeed;
pub use layout::{LayoutContext, PortfolioLayout};
pub use profile::ProfileStore;
pub use projects::{MutationWorkflow, ProjectRepository, WorkflowError};
pub use session::SessionStore;
