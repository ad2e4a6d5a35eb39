use campus_domain::roles::Role;
use campus_kernel::security::access::AccessGuard;

#[test]
fn membership_check_covers_every_role_combination() {
    for current in Role::ALL {
        for allowed in Role::ALL {
            assert_eq!(AccessGuard::check(current, &[allowed]), current == allowed);
        }
    }

    assert!(AccessGuard::check(Role::Editor, &[Role::Admin, Role::Editor]));
    assert!(!AccessGuard::check(Role::Viewer, &[Role::Admin, Role::Editor]));
    assert!(!AccessGuard::check(Role::Admin, &[]));
}

#[test]
fn require_rejects_non_members() {
    assert!(AccessGuard::require(Role::Admin, &[Role::Admin]).is_ok());
    let err = AccessGuard::require(Role::Viewer, &[Role::Admin]).unwrap_err();
    assert!(err.to_string().contains("viewer"));
}
