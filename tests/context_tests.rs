//! Snapshot publication and reload behavior.

mod common;

use std::sync::Arc;
use std::thread;

use common::load;
use termsettings::{SettingsContext, SettingsLoadError};

const DEFAULTS: &str = r#"{ "profiles": [ { "name": "a" }, { "name": "b" } ] }"#;

#[test]
fn test_readers_keep_their_snapshot_across_reload() {
    let ctx = SettingsContext::new(load(DEFAULTS, "{}").expect("load"));
    let snapshot = ctx.current();

    ctx.reload(|| load(DEFAULTS, r#"{ "profiles": [ { "name": "c" } ] }"#))
        .expect("reload");

    assert_eq!(snapshot.profiles().len(), 2);
    assert_eq!(ctx.current().profiles().len(), 3);
}

#[test]
fn test_fatal_reload_keeps_previous_snapshot() {
    let ctx = SettingsContext::new(load(DEFAULTS, "{}").expect("load"));
    let before = ctx.current();

    let hide_all = r#"{ "profiles": [ { "name": "a", "hidden": true }, { "name": "b", "hidden": true } ] }"#;
    let result = ctx.reload(|| load(DEFAULTS, hide_all));

    assert!(matches!(result, Err(SettingsLoadError::AllProfilesHidden)));
    assert!(Arc::ptr_eq(&before, &ctx.current()));
}

#[test]
fn test_snapshot_shared_across_threads() {
    let ctx = Arc::new(SettingsContext::new(load(DEFAULTS, "{}").expect("load")));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ctx = Arc::clone(&ctx);
            thread::spawn(move || ctx.current().profiles().len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("reader thread"), 2);
    }
}
