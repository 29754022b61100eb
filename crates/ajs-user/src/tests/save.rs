use crate::tests::{COOKIE_KEY, LOCAL_KEY, fixture, memory_only, traits};

use ajs_storage::{CookieStore, LocalStore};

use serde_json::json;

#[test]
fn given_id_when_save_then_cookie_holds_id() {
    let mut fx = fixture();
    fx.user.set_id(Some("id"));

    assert!(fx.user.save());

    assert_eq!(fx.cookies.get(COOKIE_KEY).unwrap().as_deref(), Some("id"));
}

#[test]
fn given_traits_when_save_then_local_store_holds_traits() {
    let mut fx = fixture();
    fx.user.set_traits(Some(traits(json!({ "trait": true }))));

    assert!(fx.user.save());

    assert_eq!(fx.local.get(LOCAL_KEY).unwrap(), Some(json!({ "trait": true })));
}

#[test]
fn given_nothing_stored_when_save_then_empty_traits_written_and_no_cookie() {
    let mut fx = fixture();

    assert!(fx.user.save());

    assert_eq!(fx.cookies.get(COOKIE_KEY).unwrap(), None);
    assert_eq!(fx.local.get(LOCAL_KEY).unwrap(), Some(json!({})));
}

#[test]
fn given_memory_only_when_save_then_false_and_backends_untouched() {
    // Given
    let mut fx = memory_only();
    fx.user.set_id(Some("id"));
    fx.user.set_traits(Some(traits(json!({ "trait": true }))));

    // When
    let saved = fx.user.save();

    // Then
    assert!(!saved);
    assert!(fx.cookies.is_empty().unwrap());
    assert!(fx.local.is_empty().unwrap());
}

#[test]
fn given_cookie_when_save_then_expiry_refreshed() {
    // Given
    let mut fx = fixture();
    fx.user
        .set_options(json!({ "cookie": { "maxAge": 3600 } }))
        .unwrap();
    fx.user.set_id(Some("id"));
    let first = fx.cookies.cookie(COOKIE_KEY).unwrap().unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));

    // When
    fx.user.save();

    // Then
    let second = fx.cookies.cookie(COOKIE_KEY).unwrap().unwrap();
    assert!(second.expires_at.unwrap() > first.expires_at.unwrap());
}
