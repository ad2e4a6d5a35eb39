//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports ergonomic helpers for config loading,
//! capability checks, and the system-level HTTP surface.
//!
//! ## Config loading
//! ```rust,ignore
//! use campus_kernel::config::load_config;
//! let cfg: serde_json::Value = load_config::<serde_json::Value>(Some("server")).unwrap();
//! ```

pub mod config;
pub mod prelude;
pub mod security;
pub mod server;

pub use campus_domain as domain;
