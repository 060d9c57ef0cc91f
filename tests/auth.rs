use firelist::auth::{AuthProvider, AuthUser, SessionAuth};

fn user(id: &str) -> AuthUser {
    AuthUser {
        user_id: id.to_string(),
        email: format!("{id}@example.com"),
        id_token: "token".to_string(),
        refresh_token: "refresh".to_string(),
    }
}

#[test]
fn test_new_session_is_signed_out() {
    let session = SessionAuth::new();
    assert!(session.current_user().is_none());
    assert!(session.current_user_id().is_none());
}

#[test]
fn test_signed_in_session_exposes_user() {
    let session = SessionAuth::signed_in(user("user-1"));
    assert_eq!(session.current_user_id().as_deref(), Some("user-1"));
    assert_eq!(session.current_user().unwrap().email, "user-1@example.com");
}

#[test]
fn test_set_user_swaps_session() {
    let session = SessionAuth::new();

    session.set_user(Some(user("first")));
    assert_eq!(session.current_user_id().as_deref(), Some("first"));

    session.set_user(Some(user("second")));
    assert_eq!(session.current_user_id().as_deref(), Some("second"));
}

#[test]
fn test_sign_out_clears_session() {
    let session = SessionAuth::signed_in(user("user-1"));
    session.sign_out();
    assert!(session.current_user().is_none());
}
