use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Custom error type for config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `server.toml`). If no path is provided, it defaults to `"server"`.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `CAMPUS__`.
///    Nested structures are accessed using double underscores (e.g., `CAMPUS__SECURITY__REVALIDATE_SECRET`
///    maps to `security.revalidate_secret`).
///
/// # Type Parameters
/// * `T`: The target configuration structure. Must implement [`serde::Deserialize`].
///
/// # Arguments
/// * `path`: An optional file path to the configuration source. Defaults to the `server` file in the current working directory.
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use campus_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder().add_source(File::from(effective_path.as_path()).required(true)).add_source(
        Environment::with_prefix("CAMPUS").separator("__").convert_case(config::Case::Snake),
    );

    info!("Loading config from {}", effective_path.display());

    let config = builder.build()?.try_deserialize::<T>()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_domain::config::SiteConfig;
    use std::io::Write;

    #[test]
    fn loads_layered_toml_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file_path = dir.path().join("server.toml");
        let mut file = std::fs::File::create(&file_path).expect("create config");
        writeln!(
            file,
            "[server]\nport = 9090\n\n[security]\nrevalidate_secret = \"token\"\n"
        )
        .expect("write config");

        let cfg: SiteConfig =
            load_config(Some(dir.path().join("server"))).expect("load config");
        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.security.revalidate_secret, "token");
        // Untouched sections keep their defaults.
        assert_eq!(cfg.database.url, "mem://");
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_config::<SiteConfig>(Some("definitely/not/here"));
        assert!(result.is_err());
    }
}
