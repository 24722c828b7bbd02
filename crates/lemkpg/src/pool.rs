//! Connection pool utilities

use crate::error::{LemkPgError, LemkPgResult};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use tokio_postgres::NoTls;

/// Create a connection pool from a connection string.
///
/// Accepts both the key/value form (`dbname=demo user=postgres host=...`)
/// and `postgres://` URLs. The pool does not connect until the first
/// checkout, so a wrong host only surfaces when a statement runs.
pub fn create_pool(dsn: &str, max_size: usize) -> LemkPgResult<Pool> {
    let pg_config: tokio_postgres::Config = dsn
        .parse()
        .map_err(|e: tokio_postgres::Error| LemkPgError::Connection(e.to_string()))?;

    let mgr = Manager::from_config(pg_config, NoTls, default_manager_config());
    Pool::builder(mgr)
        .max_size(max_size.max(1))
        .build()
        .map_err(|e| LemkPgError::Pool(e.to_string()))
}

fn default_manager_config() -> ManagerConfig {
    ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_lazily_from_key_value_dsn() {
        let pool = create_pool(
            "dbname=demo_db user=postgres password=pass host=127.0.0.1",
            1,
        )
        .unwrap();
        assert_eq!(pool.status().max_size, 1);
        assert_eq!(pool.status().size, 0);
    }

    #[test]
    fn rejects_unparseable_dsn() {
        let err = create_pool("host=localhost port=notaport", 1).unwrap_err();
        assert!(matches!(err, LemkPgError::Connection(_)));
    }
}
