use epoch_domain::EpochId;
use epoch_session::{SessionContext, SessionStore, keys};

fn logged_in_context() -> SessionContext {
    SessionContext {
        is_logged_in: true,
        name: "Alice".into(),
        email: "alice@example.com".into(),
        phone: "9876543210".into(),
        college: "X Institute".into(),
        epoch_id: Some(EpochId::try_from("EPOCH007").unwrap()),
    }
}

#[test]
fn login_then_load_round_trips_identity() {
    let store = SessionStore::new();
    logged_in_context().login(&store).unwrap();

    let loaded = SessionContext::load(&store);
    assert!(loaded.is_logged_in);
    assert!(loaded.can_register());
    assert_eq!(loaded.name, "Alice");
    assert_eq!(loaded.epoch_id.unwrap().as_str(), "EPOCH007");
}

#[test]
fn login_without_epoch_id_is_rejected() {
    let store = SessionStore::new();
    let mut ctx = logged_in_context();
    ctx.epoch_id = None;
    assert!(ctx.login(&store).is_err());
    assert_eq!(store.get(keys::IS_LOGGED_IN), None);
}

#[test]
fn logout_clears_every_identity_key() {
    let store = SessionStore::new();
    logged_in_context().login(&store).unwrap();
    store.set(keys::REMEMBERED_USER, "alice@example.com");

    store.logout();

    for key in keys::CLEARED_ON_LOGOUT {
        assert_eq!(store.get(key), None, "{key} should be cleared");
    }
    let loaded = SessionContext::load(&store);
    assert!(!loaded.is_logged_in);
    assert!(!loaded.can_register());
}

#[test]
fn malformed_stored_epoch_id_loads_as_absent() {
    let store = SessionStore::new();
    store.set(keys::IS_LOGGED_IN, "true");
    store.set(keys::EPOCH_ID, "EPOCH-XYZ");

    let loaded = SessionContext::load(&store);
    assert!(loaded.is_logged_in);
    assert!(loaded.epoch_id.is_none());
    assert!(!loaded.can_register());
}
