//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic and
//! infrastructure implementations, keeping the core independent of
//! external dependencies. The identity gateway is consumed, never
//! implemented, by the core.

pub mod identity_gateway;
pub mod settings;

pub use identity_gateway::{IdentityChange, IdentityGatewayPort};
pub use settings::SettingsPort;
