//! Facade crate for the Campus site features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] to register the feature slices, then mount [`features`] routers
//!   alongside `server::router::system_router`.

pub use campus_domain as domain;
pub use campus_kernel as kernel;

pub mod server {
    pub mod router {
        pub use campus_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use campus_contact as contact;
    pub use campus_diagnostics as diagnostics;
    pub use campus_pages as pages;

    pub const ENABLED: &[&str] = &["pages", "contact", "diagnostics"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all feature slices.
#[must_use]
pub fn init() -> Vec<domain::registry::InitializedSlice> {
    vec![features::pages::init(), features::contact::init(), features::diagnostics::init()]
}
