//! # Database Infrastructure
//!
//! This crate provides a unified interface for initializing and managing [SurrealDB](https://surrealdb.com)
//! connections across the workspace, plus the one write path the site owns:
//! inserting contact-form submissions.
//!
//! ## Key Features
//! - **Engine Agnostic**: Supports `mem://`, `ws://`, and `http://` via the `any` engine.
//! - **Resilient Connectivity**: Built-in retry logic for health checks during engine startup.
//! - **Builder Pattern**: Fluent API for configuring connections and authentication.
//!
//! ## Example
//!
//! ```rust
//! use campus_database::{Database, DatabaseError};
//! use campus_domain::contact::ContactSubmission;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), DatabaseError> {
//!     let db = Database::builder()
//!         .url("mem://")
//!         .session("campus", "site")
//!         .init()
//!         .await?;
//!
//!     db.insert_contact_submission(&ContactSubmission::new("A", "B", "a@b.c", "hi")).await?;
//!     Ok(())
//! }
//! ```

mod error;
mod record;

pub use error::DatabaseError;

use campus_domain::contact::ContactSubmission;
use record::SubmissionRecord;
use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;
use surrealdb::Surreal;
use surrealdb::engine::any::{Any, connect};
use surrealdb::opt::auth::Root;
use tracing::{info, instrument, warn};

/// Table receiving contact-form submissions. Rows are written once here and
/// owned by back-office tooling afterwards.
pub const CONTACT_SUBMISSIONS_TABLE: &str = "contact_submissions";

/// Inner state of the [`Database`] wrapper.
#[derive(Debug)]
pub struct DatabaseInner {
    instance: Surreal<Any>,
    ns: String,
    db: String,
}

impl Drop for DatabaseInner {
    fn drop(&mut self) {
        info!(ns = %self.ns, db = %self.db, "SurrealDB session handle dropped");
    }
}

/// `SurrealDB` client wrapper that provides thread-safety and contextual error handling.
#[derive(Debug, Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

impl Database {
    /// Creates a new [`DatabaseBuilder`].
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }
}

impl Deref for Database {
    type Target = Surreal<Any>;

    fn deref(&self) -> &Self::Target {
        &self.inner.instance
    }
}

/// A fluent builder for configuring and establishing a `SurrealDB` connection.
///
/// This builder ensures that fundamental parameters like the connection URL,
/// namespace, and database name are provided upfront.
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug, Default)]
pub struct DatabaseBuilder {
    url: Option<String>,
    ns: Option<String>,
    db: Option<String>,
    auth: Option<(String, String)>,
}

impl DatabaseBuilder {
    /// Creates a new [`DatabaseBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the connection URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the namespace and database name.
    pub fn session(mut self, namespace: impl Into<String>, database: impl Into<String>) -> Self {
        self.ns = Some(namespace.into());
        self.db = Some(database.into());
        self
    }

    /// Add root credentials to the connection.
    pub fn auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some((username.into(), password.into()));
        self
    }

    /// Consumes the builder and attempts to establish a connection to the database.
    ///
    /// # Process
    /// 1. **Validation**: Ensures URL, Namespace, and Database name are provided.
    /// 2. **Engine Initialization**: Connects to the underlying `SurrealDB` engine (Any).
    /// 3. **Resilience**: Performs up to 3 health checks. If the first check fails,
    ///    it retries with exponential backoff (starting at 500ms).
    /// 4. **Authentication**: If credentials were provided via [`auth`](Self::auth),
    ///    signs in as a Root user.
    /// 5. **Session Activation**: Sets the global namespace and database for the connection.
    ///
    /// # Errors
    /// * [`DatabaseError::Validation`] if required parameters are missing.
    /// * [`DatabaseError::Connection`] if the engine fails to start or remains unhealthy.
    /// * [`DatabaseError::Auth`] if the provided credentials are rejected.
    /// * [`DatabaseError::Surreal`] if the session activation (`use_ns`/`use_db`) fails.
    #[instrument(skip(self), fields(url = self.url, ns = self.ns, db = self.db))]
    pub async fn init(self) -> Result<Database, DatabaseError> {
        let url = self.url.ok_or(DatabaseError::Validation("URL is required"))?;
        let ns = self.ns.ok_or(DatabaseError::Validation("Namespace is required"))?;
        let db = self.db.ok_or(DatabaseError::Validation("Database is required"))?;

        let instance = connect(&url)
            .await
            .map_err(|e| DatabaseError::Connection(format!("initializing engine: {e}")))?;

        // 1. Connectivity & Health Check with Retries
        let mut delay = Duration::from_millis(500);
        for attempt in 1..=3 {
            if instance.health().await.is_ok() {
                break;
            }
            if attempt == 3 {
                return Err(DatabaseError::Connection(format!("{url}: unhealthy after retries")));
            }
            warn!(attempt, ?delay, "Database not ready, retrying...");
            tokio::time::sleep(delay).await;
            delay *= 2;
        }

        // 2. Authentication
        if let Some((u, p)) = self.auth {
            instance
                .signin(Root { username: u, password: p })
                .await
                .map_err(|e| DatabaseError::Auth(e.to_string()))?;
        }

        // 3. Session Initialization
        instance.use_ns(&ns).use_db(&db).await?;

        let version =
            instance.version().await.map_or_else(|_| "unknown".to_owned(), |v| v.to_string());
        info!(namespace = %ns, database = %db, %version, "SurrealDB connection established");

        Ok(Database { inner: Arc::new(DatabaseInner { instance, ns, db }) })
    }
}

impl Database {
    /// Writes one contact-form submission into [`CONTACT_SUBMISSIONS_TABLE`].
    ///
    /// Values are persisted exactly as supplied; this layer performs no
    /// trimming or validation.
    ///
    /// # Errors
    /// Returns [`DatabaseError::Surreal`] if the insert statement fails.
    #[instrument(skip_all)]
    pub async fn insert_contact_submission(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), DatabaseError> {
        let record = SubmissionRecord::from(submission);

        self.inner
            .instance
            .query("CREATE type::table($table) CONTENT $data")
            .bind(("table", CONTACT_SUBMISSIONS_TABLE))
            .bind(("data", record))
            .await?
            .check()?;

        Ok(())
    }

    /// Reads back every stored submission, in no guaranteed order.
    ///
    /// The site itself never renders these; the read path exists for
    /// diagnostics and back-office tooling.
    ///
    /// # Errors
    /// Returns [`DatabaseError::Surreal`] if the query or decoding fails.
    pub async fn list_contact_submissions(&self) -> Result<Vec<ContactSubmission>, DatabaseError> {
        let records = self
            .inner
            .instance
            .query(
                "SELECT first_name, last_name, email, message, status \
                 FROM type::table($table)",
            )
            .bind(("table", CONTACT_SUBMISSIONS_TABLE))
            .await?
            .take::<Vec<SubmissionRecord>>(0)?;

        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Lightweight single-shot connectivity check used by probes.
    ///
    /// # Errors
    /// Returns [`DatabaseError::Surreal`] if the round trip fails.
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        self.inner.instance.query("RETURN true").await?.check()?;
        Ok(())
    }

    /// Engine version string, as reported by the active session.
    ///
    /// # Errors
    /// Returns [`DatabaseError::Surreal`] if the session cannot answer.
    pub async fn server_version(&self) -> Result<String, DatabaseError> {
        Ok(self.inner.instance.version().await?.to_string())
    }
}
