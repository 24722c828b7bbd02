//! Quickstart for lemkpg
//!
//! Run with: cargo run --example quickstart -p lemkpg
//!
//! Set the connection in a .env file or the environment:
//! LEMKPG_DB_NAME=demo_db
//! LEMKPG_DB_USER=postgres
//! LEMKPG_DB_PASSWORD=pass
//! LEMKPG_DB_HOST=127.0.0.1
//!
//! Statements are logged at DEBUG under the `lemkpg.sql` target:
//! RUST_LOG=lemkpg.sql=debug cargo run --example quickstart -p lemkpg

use lemkpg::{
    Condition, ExecutorConfig, FieldMap, LemkPgAsyncApi, LemkPgConfig, LemkPgError, On, OrderBy,
    SqlValue,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), LemkPgError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // One pool for the whole run, literals escaped
    let config = LemkPgConfig::from_env()?.executor(
        ExecutorConfig::new()
            .shared_pool(4)
            .escape_literals(),
    );
    let db = LemkPgAsyncApi::from_config(config)?;

    // Setup
    db.delete_table("trades").await?;
    db.delete_table("desks").await?;
    db.create_table(
        "trades",
        &FieldMap::from([("desk", "text"), ("symbol", "text"), ("qty", "integer")]),
        true,
    )
    .await?;
    db.create_table("desks", &FieldMap::from([("desk", "text"), ("owner", "text")]), false)
        .await?;

    for (desk, symbol, qty) in [("rates", "UST10", 5), ("rates", "BUND", 3), ("fx", "EURUSD", 9)] {
        db.insert(
            "trades",
            &[SqlValue::from(desk), SqlValue::from(symbol), SqlValue::from(qty)],
            Some(&["desk", "symbol", "qty"]),
        )
        .await?;
    }
    db.insert("desks", &[SqlValue::from("rates"), SqlValue::from("O'Brien")], None)
        .await?;

    // Reads return at most one row
    let rows = db.get_all("trades", Some(&OrderBy::desc("qty"))).await?;
    if let Some(row) = rows.first() {
        println!("largest trade: {}", row.get::<_, String>("symbol"));
    }

    let rows = db
        .get(
            "trades",
            &["symbol", "qty"],
            &[Condition::new("desk", "=", "rates"), Condition::and("qty", "<", "4")],
            false,
            None,
        )
        .await?;
    if let Some(row) = rows.first() {
        println!("small rates trade: {} x{}", row.get::<_, String>(0), row.get::<_, i32>(1));
    }

    db.update(
        "trades",
        &FieldMap::from([("qty", "6")]),
        &[Condition::new("symbol", "=", "UST10")],
    )
    .await?;

    let rows = db.sum("trades", "qty", &[Condition::new("desk", "=", "rates")]).await?;
    if let Some(row) = rows.first() {
        println!("rates total: {}", row.get::<_, i64>(0));
    }

    let rows = db
        .inner_join(
            "trades",
            "desks",
            &On::eq("trades.desk", "desks.desk"),
            &[Condition::new("trades.symbol", "=", "BUND")],
            Some(&["trades.symbol", "desks.owner"]),
            false,
        )
        .await?;
    if let Some(row) = rows.first() {
        println!("{} is booked by {}", row.get::<_, String>(0), row.get::<_, String>(1));
    }

    // Cleanup
    db.delete_records("trades", &[Condition::new("desk", "=", "fx")]).await?;
    db.clear_table("trades").await?;
    db.delete_table("trades").await?;
    db.delete_table("desks").await?;

    println!("done");
    Ok(())
}
