//! Role-gated rendering.

use campus_domain::roles::Role;
use campus_kernel::security::access::AccessGuard;
use maud::{Markup, html};

/// Renders `children` only when `current` is a member of `allowed`;
/// otherwise renders `fallback` (default: nothing).
///
/// Pure: no memoization, no side effects. Resolution of the current role is
/// the authentication collaborator's job.
#[must_use]
pub fn role_gate(
    current: Role,
    allowed: &[Role],
    children: Markup,
    fallback: Option<Markup>,
) -> Markup {
    if AccessGuard::check(current, allowed) {
        children
    } else {
        fallback.unwrap_or_else(|| html! {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn children() -> Markup {
        html! { p { "secret" } }
    }

    #[test]
    fn full_truth_table() {
        for current in Role::ALL {
            for allowed in Role::ALL {
                let rendered = role_gate(current, &[allowed], children(), None).into_string();
                if current == allowed {
                    assert!(rendered.contains("secret"), "{current} vs {allowed}");
                } else {
                    assert!(rendered.is_empty(), "{current} vs {allowed}");
                }
            }
        }
    }

    #[test]
    fn multi_role_set_admits_each_member() {
        let allowed = [Role::Admin, Role::Editor];
        assert!(role_gate(Role::Admin, &allowed, children(), None).into_string().contains("secret"));
        assert!(role_gate(Role::Editor, &allowed, children(), None).into_string().contains("secret"));
        assert!(role_gate(Role::Viewer, &allowed, children(), None).into_string().is_empty());
    }

    #[test]
    fn fallback_is_rendered_for_outsiders() {
        let fallback = html! { p { "ask an admin" } };
        let rendered = role_gate(Role::Viewer, &[Role::Admin], children(), Some(fallback));
        assert!(rendered.into_string().contains("ask an admin"));
    }
}
