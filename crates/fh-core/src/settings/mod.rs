pub mod defaults;
pub mod model;

pub use model::{AuthSettings, GeneralSettings, Settings, Theme, CURRENT_SCHEMA_VERSION};
