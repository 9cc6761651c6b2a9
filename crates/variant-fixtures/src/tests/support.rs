use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use datafusion_common::{DataFusionError, ScalarValue};
use snafu::ResultExt;

use crate::engine::{Engine, Row};
use crate::error::{self as error, Result};

/// An engine scripted with exact SQL -> rows responses. Unscripted queries
/// fail the way a real engine rejects an unknown function, and every query is
/// logged so tests can assert on what the generator actually ran.
#[derive(Default)]
pub struct ScriptedEngine {
    responses: HashMap<String, Vec<Row>>,
    log: Mutex<Vec<String>>,
}

impl ScriptedEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_response(mut self, sql: &str, rows: Vec<Row>) -> Self {
        self.responses.insert(sql.to_string(), rows);
        self
    }

    #[allow(clippy::unwrap_used)]
    pub fn queries(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    #[allow(clippy::unwrap_used)]
    fn record(&self, sql: &str) {
        self.log.lock().unwrap().push(sql.to_string());
    }
}

#[async_trait]
impl Engine for ScriptedEngine {
    async fn execute(&self, sql: &str) -> Result<()> {
        self.record(sql);
        Ok(())
    }

    async fn fetch_all(&self, sql: &str) -> Result<Vec<Row>> {
        self.record(sql);
        self.responses.get(sql).cloned().map_or_else(
            || {
                Err(DataFusionError::Plan(format!("unscripted query: {sql}")))
                    .context(error::EngineQuerySnafu { query: sql })
            },
            Ok,
        )
    }
}

pub fn text(value: &str) -> ScalarValue {
    ScalarValue::Utf8(Some(value.to_string()))
}

pub fn one_cell(value: ScalarValue) -> Vec<Row> {
    vec![vec![value]]
}
