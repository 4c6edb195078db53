// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use fnboard_app::{FilterStore, OwnerFilterController};
use fnboard_db::{Store, validate_db_path};
use fnboard_testkit::record;

#[test]
fn validate_db_path_rejects_uri_forms() {
    assert!(validate_db_path("file:test.db").is_err());
    assert!(validate_db_path("https://example.com/db.sqlite").is_err());
    assert!(validate_db_path("db.sqlite?mode=ro").is_err());
    assert!(validate_db_path("").is_err());
    assert!(validate_db_path(":memory:").is_ok());
    assert!(validate_db_path("/tmp/fnboard.db").is_ok());
}

#[test]
fn bootstrap_rejects_foreign_database() -> Result<()> {
    let store = Store::open_memory()?;
    store
        .raw_connection()
        .execute_batch("CREATE TABLE projects (id INTEGER PRIMARY KEY);")?;

    let error = store
        .bootstrap()
        .expect_err("foreign schema should fail");
    assert!(
        error
            .to_string()
            .contains("missing required table `settings`")
    );
    Ok(())
}

#[test]
fn bootstrap_rejects_settings_table_missing_columns() -> Result<()> {
    let store = Store::open_memory()?;
    store
        .raw_connection()
        .execute_batch("CREATE TABLE settings (key TEXT PRIMARY KEY, value TEXT NOT NULL);")?;

    let error = store
        .bootstrap()
        .expect_err("incomplete schema should fail");
    let message = error.to_string();
    assert!(message.contains("missing required columns"));
    assert!(message.contains("updated_at"));
    Ok(())
}

#[test]
fn filter_store_round_trip() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;

    assert_eq!(store.load_filter()?, None);
    store.save_filter("acme")?;
    assert_eq!(store.load_filter()?.as_deref(), Some("acme"));
    store.save_filter("")?;
    assert_eq!(store.load_filter()?.as_deref(), Some(""));
    Ok(())
}

#[test]
fn filter_persists_across_reopen() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("fnboard.db");

    {
        let store = Store::open(&path)?;
        store.bootstrap()?;
        let mut controller = OwnerFilterController::initialize(&store, "acme", None)?;
        controller.set_filter("acme")?;
    }

    let store = Store::open(&path)?;
    store.bootstrap()?;
    let controller = OwnerFilterController::initialize(&store, "acme", None)?;
    assert_eq!(controller.filter().as_str(), "acme");

    let records = vec![record("a", "1", "acme"), record("b", "2", "globex")];
    assert!(controller.matches(&records[0].git_owner));
    assert!(!controller.matches(&records[1].git_owner));
    Ok(())
}

#[test]
fn restored_filter_outside_context_is_dropped_but_kept_on_disk() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;
    store.save_filter("globex")?;

    let known = vec!["openfaas".to_owned()];
    let controller = OwnerFilterController::initialize(&store, "acme", Some(known.as_slice()))?;
    assert!(!controller.filter().is_active());
    assert_eq!(store.load_filter()?.as_deref(), Some("globex"));
    Ok(())
}

#[test]
fn restored_filter_for_known_org_is_kept() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;
    store.save_filter("openfaas")?;

    let known = vec!["openfaas".to_owned()];
    let controller = OwnerFilterController::initialize(&store, "acme", Some(known.as_slice()))?;
    assert_eq!(controller.filter().as_str(), "openfaas");
    Ok(())
}
