//! CSV intake for rating many entities in one run.
//!
//! Each file carries a header row naming the entity fields, e.g.
//! `name,food_quality,environment,location`. Values are not range checked.

use super::domain::{Dish, Restaurant};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read entity file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid entity CSV data: {0}")]
    Csv(#[from] csv::Error),
}

pub fn read_restaurants<R: Read>(reader: R) -> Result<Vec<Restaurant>, ImportError> {
    read_records(reader, "restaurant")
}

pub fn read_dishes<R: Read>(reader: R) -> Result<Vec<Dish>, ImportError> {
    read_records(reader, "dish")
}

pub fn restaurants_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Restaurant>, ImportError> {
    let file = std::fs::File::open(path)?;
    read_restaurants(file)
}

pub fn dishes_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Dish>, ImportError> {
    let file = std::fs::File::open(path)?;
    read_dishes(file)
}

fn read_records<T, R>(reader: R, kind: &'static str) -> Result<Vec<T>, ImportError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<T>() {
        records.push(record?);
    }

    info!(kind, count = records.len(), "entity file imported");
    Ok(records)
}
