pub mod assets;
mod health;
mod revalidate;
pub mod router;
pub mod state;

pub use state::{ApiState, ApiStateError};

/// OpenAPI tag for system-level endpoints.
pub(crate) const SYSTEM_TAG: &str = "System";
