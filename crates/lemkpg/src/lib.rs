//! # lemkpg
//!
//! Quick access to PostgreSQL without writing SQL by hand.
//!
//! ## Features
//!
//! - **Plain parameters**: table names, column maps, condition tuples and join triples
//!   are assembled into one SQL statement per call
//! - **Two call styles**: [`LemkPgApi`] blocks, [`LemkPgAsyncApi`] returns futures; both
//!   build the exact same statements
//! - **Driver passthrough**: `tokio-postgres` errors surface unmodified as [`LemkPgError::Query`]
//! - **Explicit pooling**: a transient pool per call by default, or one shared pool
//!   ([`PoolMode`])
//!
//! Literals are interpolated into the statement, not bound as parameters. Use
//! [`Quoting::Escaped`] (or sanitize inputs) when values come from untrusted sources.
//!
//! ## Example
//!
//! ```ignore
//! use lemkpg::{Condition, FieldMap, LemkPgApi, On, SqlValue};
//!
//! let db = LemkPgApi::new("demo_db", "postgres", "pass", "127.0.0.1");
//!
//! db.create_table("demo", &FieldMap::from([("id", "integer"), ("symbol", "text")]), false)?;
//! db.insert("demo", &[SqlValue::from(1), SqlValue::from("A")], None)?;
//!
//! let rows = db.get(
//!     "demo",
//!     &["symbol"],
//!     &[Condition::new("id", "=", "1")],
//!     true,
//!     None,
//! )?;
//!
//! let joined = db.inner_join(
//!     "demo",
//!     "datatable",
//!     &On::eq("demo.id", "datatable.id"),
//!     &[],
//!     None,
//!     true,
//! )?;
//! ```

pub mod api;
pub mod builder;
pub mod client;
pub mod condition;
pub mod config;
pub mod error;
pub mod executor;
pub mod join;
pub mod pool;
pub mod value;

pub use api::{LemkPgApi, LemkPgAsyncApi};
pub use builder::{Aggregate, OrderBy, SortDirection, StatementBuilder};
pub use client::GenericClient;
pub use condition::{Condition, build_conditions, build_conditions_with, conditions_from_json, where_clause};
pub use config::{ConnectionDescriptor, ExecutorConfig, LemkPgConfig, PoolMode};
pub use error::{LemkPgError, LemkPgResult};
pub use executor::Executor;
pub use join::{JOINS_LIST, JoinKind, On};
pub use pool::create_pool;
pub use value::{FieldMap, Quoting, SqlValue};

pub use tokio_postgres::Row;
