use crate::IdentityOptions;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serde_json::json;

// =========================================================================
// Defaults
// =========================================================================

#[test]
fn given_default_options_when_inspect_then_matches_documented_defaults() {
    // When
    let options = IdentityOptions::default();

    // Then
    assert_that!(options.persist, eq(true));
    assert_that!(options.cookie.key.as_str(), eq(crate::DEFAULT_COOKIE_KEY));
    assert_that!(options.cookie.key.as_str(), eq("ajs_user_id"));
    assert_that!(options.cookie.old_key.as_str(), eq("ajs_user"));
    assert_that!(options.local_storage.key.as_str(), eq("ajs_user_traits"));
    assert_that!(options.cookie.max_age, eq(crate::DEFAULT_COOKIE_MAX_AGE_SECS));
    assert_that!(options.cookie.path.as_str(), eq("/"));
    assert!(options.cookie.domain.is_none());
    assert_that!(options.carry_anonymous_traits, eq(true));
    assert!(options.extra.is_empty());
}

// =========================================================================
// Patch merging
// =========================================================================

#[test]
fn given_unknown_option_when_from_patch_then_defaults_fill_the_rest() {
    // When
    let options = IdentityOptions::from_patch(json!({ "option": true })).unwrap();

    // Then
    let serialized = serde_json::to_value(&options).unwrap();
    assert_eq!(
        serialized,
        json!({
            "option": true,
            "persist": true,
            "carryAnonymousTraits": true,
            "cookie": {
                "key": "ajs_user_id",
                "oldKey": "ajs_user",
                "maxAge": crate::DEFAULT_COOKIE_MAX_AGE_SECS,
                "path": "/"
            },
            "localStorage": {
                "key": "ajs_user_traits"
            }
        })
    );
}

#[test]
fn given_partial_cookie_patch_when_from_patch_then_old_key_keeps_default() {
    // When
    let options = IdentityOptions::from_patch(json!({ "cookie": { "key": "uid" } })).unwrap();

    // Then
    assert_that!(options.cookie.key.as_str(), eq("uid"));
    assert_that!(options.cookie.old_key.as_str(), eq("ajs_user"));
    assert_that!(options.local_storage.key.as_str(), eq("ajs_user_traits"));
}

#[test]
fn given_persist_false_when_from_patch_then_only_persist_changes() {
    let options = IdentityOptions::from_patch(json!({ "persist": false })).unwrap();

    assert_that!(options.persist, eq(false));
    assert_eq!(options.cookie, crate::CookieConfig::default());
}

#[test]
fn given_same_patch_twice_when_from_patch_then_results_equal() {
    let first = IdentityOptions::from_patch(json!({ "localStorage": { "key": "t" } })).unwrap();
    let second = IdentityOptions::from_patch(json!({ "localStorage": { "key": "t" } })).unwrap();

    assert_eq!(first, second);
}

#[test]
fn given_null_patch_when_from_patch_then_defaults() {
    let result = IdentityOptions::from_patch(serde_json::Value::Null);

    assert_that!(result, ok(anything()));
    assert_eq!(result.unwrap(), IdentityOptions::default());
}

#[test]
fn given_wrong_type_when_from_patch_then_serde_error() {
    // When
    let result = IdentityOptions::from_patch(json!({ "persist": "yes" }));

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("Serde"));
}

#[test]
fn given_non_object_patch_when_from_patch_then_error() {
    let result = IdentityOptions::from_patch(json!(true));

    assert_that!(result, err(anything()));
}

#[test]
fn given_options_with_extra_keys_when_log_summary_then_does_not_panic() {
    let options =
        IdentityOptions::from_patch(json!({ "option": true, "cookie": { "domain": "a.io" } }))
            .unwrap();

    options.log_summary();
    IdentityOptions::default().log_summary();
}
