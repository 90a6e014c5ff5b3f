//! Schema setup against `DATABASE_URL`.
//!
//! Idempotent: tables and indexes are created only when missing.

pub(crate) async fn run() -> anyhow::Result<()> {
    let _storage = crate::connect().await?;
    println!("Migration complete!");
    Ok(())
}
