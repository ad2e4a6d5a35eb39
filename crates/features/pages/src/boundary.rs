//! Error boundary for subtree rendering.
//!
//! A boundary guards one fallible region of a page: the first failed render
//! trips it into the faulted state, after which it always emits the fallback
//! markup and never re-evaluates its children. Recovery requires building a
//! fresh boundary (in practice: the next request renders a new page tree).

use maud::{Markup, html};
use thiserror::Error;

/// Errors surfaced while producing a page subtree.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A component's required content was absent or unusable.
    #[error("missing content: {0}")]
    MissingContent(&'static str),
}

#[derive(Debug)]
enum BoundaryState {
    Healthy,
    Faulted { message: String, detail: String },
}

/// Two-state guard around fallible subtree rendering.
#[derive(Debug)]
pub struct ErrorBoundary {
    state: BoundaryState,
}

impl ErrorBoundary {
    #[must_use]
    pub const fn new() -> Self {
        Self { state: BoundaryState::Healthy }
    }

    /// Evaluates `children` and returns its markup, or the fallback once the
    /// boundary has faulted.
    ///
    /// The transition happens at most once: after the first error the closure
    /// is never called again, even if later data would render fine.
    pub fn render<F>(&mut self, children: F) -> Markup
    where
        F: FnOnce() -> Result<Markup, RenderError>,
    {
        if let BoundaryState::Faulted { message, detail } = &self.state {
            return Self::fallback(message, detail);
        }

        match children() {
            Ok(markup) => markup,
            Err(error) => {
                let message = error.to_string();
                let detail = format!("{error:?}");
                tracing::error!(%message, "render boundary tripped");
                self.state = BoundaryState::Faulted { message: message.clone(), detail: detail.clone() };
                Self::fallback(&message, &detail)
            }
        }
    }

    #[must_use]
    pub const fn is_faulted(&self) -> bool {
        matches!(self.state, BoundaryState::Faulted { .. })
    }

    fn fallback(message: &str, detail: &str) -> Markup {
        html! {
            div class="error-boundary" role="alert" {
                p { "Something went wrong rendering this section." }
                p class="error-message" { (message) }
                details {
                    summary { "Details" }
                    pre { (detail) }
                }
            }
        }
    }
}

impl Default for ErrorBoundary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_boundary_renders_children() {
        let mut boundary = ErrorBoundary::new();
        let markup = boundary.render(|| Ok(html! { p { "fine" } }));
        assert!(markup.into_string().contains("fine"));
        assert!(!boundary.is_faulted());
    }

    #[test]
    fn first_error_trips_the_boundary() {
        let mut boundary = ErrorBoundary::new();
        let markup = boundary.render(|| Err(RenderError::MissingContent("program levels")));

        let html = markup.into_string();
        assert!(html.contains("missing content: program levels"));
        assert!(html.contains("<details>"));
        assert!(boundary.is_faulted());
    }

    #[test]
    fn faulted_boundary_never_rerenders_children() {
        let mut boundary = ErrorBoundary::new();
        let _ = boundary.render(|| Err(RenderError::MissingContent("stats")));

        // The data is "valid" now, but the boundary must stay faulted.
        let mut called = false;
        let markup = boundary.render(|| {
            called = true;
            Ok(html! { p { "recovered" } })
        });

        assert!(!called, "children must not be re-evaluated");
        assert!(boundary.is_faulted());
        assert!(markup.into_string().contains("missing content: stats"));
    }
}
