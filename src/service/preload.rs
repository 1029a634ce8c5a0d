use crate::db::{Employee, Order, Person, Record, SqliteStorage, Status};
use crate::error::PayrollError;
use std::fmt::Debug;
use tracing::info;

/// Seed every empty table with sample records.
pub async fn preload(storage: &SqliteStorage) -> Result<(), PayrollError> {
    seed(
        storage,
        vec![
            Employee::new("Bilbo", "Baggins", "burglar"),
            Employee::new("Frodo", "Baggins", "thief"),
        ],
    )
    .await?;
    seed(
        storage,
        vec![
            Order::new("MacBook Pro", Status::Completed),
            Order::new("iPhone", Status::InProgress),
        ],
    )
    .await?;
    seed(
        storage,
        vec![
            Person::new("Andrew", "He likes cakes."),
            Person::new("Garfield", "Meoooow."),
        ],
    )
    .await?;
    Ok(())
}

async fn seed<R: Record + Debug>(
    storage: &SqliteStorage,
    records: Vec<R>,
) -> Result<(), PayrollError> {
    let existing = storage.count::<R>().await?;
    if existing > 0 {
        info!(kind = R::KIND, count = existing, "table not empty; skipping preload");
        return Ok(());
    }

    for record in records {
        let saved = storage.create(record).await?;
        info!("Preloading {:?}", saved);
    }
    for record in storage.list::<R>().await? {
        info!("Preloaded {:?}", record);
    }
    Ok(())
}
