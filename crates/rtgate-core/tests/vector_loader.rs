//! JSON test vector loader shared by catalog/partition tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CatalogVector {
    pub description: String,
    pub family: String,
    pub names: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PartitionVector {
    pub description: String,
    pub family: String,
    pub allow: Vec<String>,
    #[serde(default)]
    pub expect: Option<PartitionExpect>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct PartitionExpect {
    pub disabled_len: usize,
    pub enabled: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub code: String,
}

pub fn load<T: DeserializeOwned>(name: &str) -> T {
    let s = fs::read_to_string(format!("tests/vectors/{name}"))
        .unwrap_or_else(|e| panic!("read vector {name}: {e}"));
    serde_json::from_str(&s).unwrap()
}
