use super::*;
use crate::condition::Condition;
use crate::config::{ConnectionDescriptor, ExecutorConfig, LemkPgConfig, PoolMode};
use crate::error::LemkPgError;
use crate::join::On;
use crate::value::{FieldMap, Quoting};

fn demo_config() -> LemkPgConfig {
    LemkPgConfig::new(ConnectionDescriptor::new(
        "demo_db",
        "postgres",
        "pass",
        "127.0.0.1",
    ))
}

fn assert_send_sync<T: Send + Sync + Clone>() {}

#[test]
fn test_async_api_is_shareable() {
    assert_send_sync::<LemkPgAsyncApi>();
    assert_send_sync::<LemkPgApi>();
}

#[test]
fn test_dsn_from_constructor() {
    let db = LemkPgApi::new("demo_db", "postgres", "pass", "127.0.0.1");
    assert_eq!(
        db.dsn(),
        "dbname=demo_db user=postgres password=pass host=127.0.0.1"
    );
    assert_eq!(db.executor().config().pool_mode, PoolMode::PerCall);
}

#[test]
fn test_blocking_downgrades_shared_pool() {
    let config = demo_config().executor(ExecutorConfig::new().shared_pool(8));
    let db = LemkPgApi::from_config(config);
    assert_eq!(db.executor().config().pool_mode, PoolMode::PerCall);
}

#[test]
fn test_async_keeps_shared_pool() {
    let config = demo_config().executor(ExecutorConfig::new().shared_pool(8));
    let db = LemkPgAsyncApi::from_config(config).unwrap();
    assert_eq!(db.executor().config().pool_mode, PoolMode::Shared);
}

#[test]
fn test_quoting_flows_into_builder() {
    let config = demo_config().executor(ExecutorConfig::new().escape_literals());
    let db = LemkPgAsyncApi::from_config(config).unwrap();
    assert_eq!(db.builder().quoting(), Quoting::Escaped);
}

#[test]
fn test_blocking_invalid_join_kind_fails_before_io() {
    let db = LemkPgApi::new("demo_db", "postgres", "pass", "127.0.0.1");
    let err = db
        .get_with_join(
            "demo",
            "datatable",
            "CROSS JOIN",
            &["*"],
            &On::eq("demo.trans", "datatable.trans"),
            &[],
        )
        .unwrap_err();
    assert!(matches!(err, LemkPgError::InvalidJoinKind(_)));
}

#[test]
fn test_blocking_invalid_conditions_fail_before_io() {
    let db = LemkPgApi::new("demo_db", "postgres", "pass", "127.0.0.1");
    let conds = [Condition::new("a", "=", "1"), Condition::new("b", "=", "2")];
    let err = db
        .update("demo", &FieldMap::from([("a", "2")]), &conds)
        .unwrap_err();
    assert!(matches!(err, LemkPgError::InvalidConditionList(_)));
    let err = db.delete_records("demo", &conds).unwrap_err();
    assert!(matches!(err, LemkPgError::InvalidConditionList(_)));
}

#[tokio::test]
async fn test_async_invalid_join_kind_fails_before_io() {
    let db = LemkPgAsyncApi::new("demo_db", "postgres", "pass", "127.0.0.1");
    let err = db
        .get_with_join("a", "b", "NATURAL JOIN", &["*"], &On::eq("a.id", "b.id"), &[])
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_async_invalid_conditions_fail_before_io() {
    let db = LemkPgAsyncApi::new("demo_db", "postgres", "pass", "127.0.0.1");
    let err = db
        .count("demo", "*", &[Condition::or("a", "=", "1")])
        .await
        .unwrap_err();
    assert!(matches!(err, LemkPgError::InvalidConditionList(_)));
}

#[tokio::test]
async fn test_blocking_inside_runtime_is_rejected() {
    let db = LemkPgApi::new("demo_db", "postgres", "pass", "127.0.0.1");
    let err = db.get_all("demo", None).unwrap_err();
    assert!(matches!(err, LemkPgError::Runtime(_)));
}

#[cfg(unix)]
#[tokio::test]
async fn test_connection_failure_propagates() {
    let db = LemkPgAsyncApi::new("demo_db", "postgres", "pass", "/nonexistent/lemkpg");
    let err = db.get_all("demo", None).await.unwrap_err();
    assert!(matches!(err, LemkPgError::Pool(_)));
}

#[cfg(unix)]
#[test]
fn test_blocking_connection_failure_propagates() {
    let db = LemkPgApi::new("demo_db", "postgres", "pass", "/nonexistent/lemkpg");
    let err = db.delete_table("demo").unwrap_err();
    assert!(matches!(err, LemkPgError::Pool(_)));
}
