//! Connectivity diagnostics slice.
//!
//! Operator-facing probes behind `GET /api/diagnostics`. Every probe is a
//! single-shot check with a tri-state outcome; there is no retry loop and no
//! background polling, a fresh report is built per request.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::get;
use campus_domain::registry::{FeatureSlice, InitializedSlice};
use campus_kernel::server::ApiState;
use serde::Serialize;
use std::any::Any;

/// Outcome of one probe.
///
/// Reports serialize a probe that never ran as `pending`; handlers normally
/// resolve every probe before responding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProbeStatus {
    #[default]
    Pending,
    Connected,
    Error {
        message: String,
    },
}

impl ProbeStatus {
    fn from_result<T, E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Connected,
            Err(error) => Self::Error { message: error.to_string() },
        }
    }
}

/// Presence flags for the configuration the site depends on. Values are
/// never echoed, only whether they are set.
#[derive(Debug, Serialize)]
pub struct EnvReport {
    pub site_name: bool,
    pub database_url: bool,
    pub revalidate_secret: bool,
}

#[derive(Debug, Serialize)]
pub struct DiagnosticsReport {
    pub backend: ProbeStatus,
    pub session: ProbeStatus,
    pub env: EnvReport,
    pub cached_pages: u64,
    pub slices: Vec<&'static str>,
}

/// Feature state for the diagnostics slice.
#[derive(Debug)]
pub struct DiagnosticsSlice;

impl FeatureSlice for DiagnosticsSlice {
    fn name(&self) -> &'static str {
        "diagnostics"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[must_use]
pub fn init() -> InitializedSlice {
    InitializedSlice::new(DiagnosticsSlice)
}

pub fn router() -> Router<ApiState> {
    Router::new().route("/api/diagnostics", get(diagnostics_handler))
}

/// Probes the backend connection.
async fn backend_probe(state: &ApiState) -> ProbeStatus {
    ProbeStatus::from_result(state.database.ping().await)
}

/// Probes the backend session by asking for server version info.
async fn session_probe(state: &ApiState) -> ProbeStatus {
    ProbeStatus::from_result(state.database.server_version().await)
}

fn env_probe(state: &ApiState) -> EnvReport {
    EnvReport {
        site_name: !state.config.site.name.is_empty(),
        database_url: !state.config.database.url.is_empty(),
        revalidate_secret: !state.config.security.revalidate_secret.is_empty(),
    }
}

async fn diagnostics_handler(State(state): State<ApiState>) -> Json<DiagnosticsReport> {
    let backend = backend_probe(&state).await;
    let session = session_probe(&state).await;

    if let ProbeStatus::Error { message } = &backend {
        tracing::warn!(probe = "backend", "diagnostics probe failed: {message}");
    }
    if let ProbeStatus::Error { message } = &session {
        tracing::warn!(probe = "session", "diagnostics probe failed: {message}");
    }

    Json(DiagnosticsReport {
        backend,
        session,
        env: env_probe(&state),
        cached_pages: state.cache.entry_count(),
        slices: state.slice_names().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_status_serializes_as_tagged_lowercase() {
        let pending = serde_json::to_value(ProbeStatus::Pending).unwrap();
        assert_eq!(pending["status"], "pending");

        let connected = serde_json::to_value(ProbeStatus::Connected).unwrap();
        assert_eq!(connected["status"], "connected");

        let error = serde_json::to_value(ProbeStatus::Error { message: "down".to_owned() }).unwrap();
        assert_eq!(error["status"], "error");
        assert_eq!(error["message"], "down");
    }

    #[test]
    fn probe_status_from_result() {
        assert_eq!(ProbeStatus::from_result(Ok::<_, std::io::Error>(())), ProbeStatus::Connected);

        let err: Result<(), _> = Err(std::io::Error::other("unreachable"));
        assert_eq!(
            ProbeStatus::from_result(err),
            ProbeStatus::Error { message: "unreachable".to_owned() }
        );
    }
}
