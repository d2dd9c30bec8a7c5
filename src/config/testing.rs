//! Shared fixtures for the config unit tests.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::database::{KeyValueStore, Rows};
use super::StoreError;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section1 {
    pub varint1: i64,
    pub varstring1: String,
    pub varbool1: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section2 {
    pub varint2: i64,
    pub varstring2: String,
    pub varbool2: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestConf {
    pub section1: Section1,
    pub section2: Section2,
}

crate::record! {
    Section1 { varint1, varstring1, varbool1 }
    Section2 { varint2, varstring2, varbool2 }
    TestConf { section1, section2 }
}

/// Builds a lookup over a fixed set of variables.
pub fn env_of(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: Vec<(String, String)> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| {
        vars.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

/// In-memory stand-in for a SQL connection.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<Result<(String, String), String>>,
    fail_query: bool,
    closed: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn with_rows(rows: &[(&str, &str)]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|(k, v)| Ok((k.to_string(), v.to_string())))
                .collect(),
            ..Self::default()
        }
    }

    pub fn failing_query() -> Self {
        Self {
            fail_query: true,
            ..Self::default()
        }
    }

    /// Appends a row that fails to scan.
    pub fn with_bad_row(mut self, message: &str) -> Self {
        self.rows.push(Err(message.to_string()));
        self
    }

    /// Handle that flips to `true` once the store is closed.
    pub fn closed_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.closed)
    }
}

impl KeyValueStore for MemoryStore {
    fn query_pairs(&mut self, table: &str) -> Result<Rows<'_>, StoreError> {
        if self.fail_query {
            return Err(format!("relation \"{table}\" does not exist").into());
        }
        Ok(Box::new(self.rows.iter().map(
            |row| -> Result<(String, String), StoreError> { row.clone().map_err(Into::into) },
        )))
    }

    fn close(self) -> Result<(), StoreError> {
        self.closed.set(true);
        Ok(())
    }
}
