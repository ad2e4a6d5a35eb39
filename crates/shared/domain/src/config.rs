use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level site configuration shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub server: ServerConfig,
    pub site: SiteMeta,
    pub security: SecurityConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

/// Public-facing site identity rendered into page chrome.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    pub name: String,
    pub description: String,
}

/// Shared-secret knobs for operator endpoints.
///
/// The revalidation endpoint is gated by nothing but this secret, so an empty
/// value rejects every call (empty submitted secrets never match).
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub revalidate_secret: String,
}

/// `SurrealDB` connection configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub credentials: Option<DatabaseCredentials>,
}

/// `SurrealDB` root credentials (optional when using unauthenticated engines like mem://).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseCredentials {
    pub username: String,
    pub password: String,
}

/// Static asset root (favicon and generated icons live here).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub static_dir: PathBuf,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4690 }
    }
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            name: "Harborlight Academy".to_owned(),
            description: "A school for curious minds".to_owned(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "mem://".to_owned(),
            namespace: "campus".to_owned(),
            database: "site".to_owned(),
            credentials: None,
        }
    }
}

impl Default for DatabaseCredentials {
    fn default() -> Self {
        Self { username: "root".to_owned(), password: "root".to_owned() }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { static_dir: PathBuf::from("public") }
    }
}
