//! Ergonomic re-exports for slice crates and applications.

pub use crate::config::load_config;
pub use crate::security::access::AccessGuard;
pub use crate::server::{ApiState, ApiStateError};
pub use campus_domain::config::SiteConfig;
pub use campus_domain::registry::{FeatureSlice, InitializedSlice};
