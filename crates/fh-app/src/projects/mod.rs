//! Project store and modal mutation workflow

pub mod repository;
pub mod workflow;

pub use repository::ProjectRepository;
pub use workflow::{MutationWorkflow, WorkflowError};
