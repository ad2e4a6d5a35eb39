use campus_domain::roles::Role;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("role '{current}' is not permitted here")]
    Denied { current: Role },
}

/// Capability checks over the closed role set.
///
/// The *current* role is resolved by the authentication collaborator and
/// passed in; this guard only answers the membership question.
#[derive(Debug)]
pub struct AccessGuard;

impl AccessGuard {
    /// Returns whether `current` is a member of the allowed set.
    #[must_use]
    pub fn check(current: Role, allowed: &[Role]) -> bool {
        allowed.contains(&current)
    }

    /// Like [`check`](Self::check), but as a fallible guard for handlers
    /// that should refuse the request outright instead of swapping content.
    ///
    /// # Errors
    /// Returns [`AccessError::Denied`] when `current` is not allowed.
    pub fn require(current: Role, allowed: &[Role]) -> Result<(), AccessError> {
        if Self::check(current, allowed) { Ok(()) } else { Err(AccessError::Denied { current }) }
    }
}
