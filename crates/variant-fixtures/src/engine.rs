use std::sync::Arc;

use async_trait::async_trait;
use datafusion::prelude::{SessionConfig, SessionContext};
use datafusion_common::ScalarValue;
use snafu::ResultExt;

use crate::error::{self as error, Result};

pub type Row = Vec<ScalarValue>;

/// The seam to the external query engine. The engine must evaluate arbitrary
/// SQL text and hand back every result row as native scalar values; native
/// equality of those values is what the round-trip gate relies on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Engine: Send + Sync {
    /// Executes a statement for its side effects, discarding any rows.
    async fn execute(&self, sql: &str) -> Result<()>;

    /// Executes a query and fetches all result rows.
    async fn fetch_all(&self, sql: &str) -> Result<Vec<Row>>;
}

/// In-process backend over a DataFusion session.
///
/// The session is expected to already carry the `VARIANT`, `FROM_VARIANT` and
/// `TYPEOF` functions (plus enum type support); the generator does not
/// provide them. A context without them fails on the first catalog entry
/// with an engine query error.
pub struct DataFusionEngine {
    ctx: SessionContext,
}

impl DataFusionEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::from_context(SessionContext::new_with_config(SessionConfig::new()))
    }

    /// Wraps a pre-built session, e.g. one with the variant extension's
    /// functions registered.
    #[must_use]
    pub const fn from_context(ctx: SessionContext) -> Self {
        Self { ctx }
    }

    async fn collect(&self, sql: &str) -> Result<Vec<Row>> {
        let batches = self
            .ctx
            .sql(sql)
            .await
            .context(error::EngineQuerySnafu { query: sql })?
            .collect()
            .await
            .context(error::EngineQuerySnafu { query: sql })?;

        let mut rows = Vec::new();
        for batch in &batches {
            for index in 0..batch.num_rows() {
                let mut cells = Vec::with_capacity(batch.num_columns());
                for column in batch.columns() {
                    cells.push(
                        ScalarValue::try_from_array(column, index)
                            .context(error::EngineQuerySnafu { query: sql })?,
                    );
                }
                rows.push(cells);
            }
        }
        Ok(rows)
    }
}

impl Default for DataFusionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Engine for DataFusionEngine {
    #[tracing::instrument(name = "DataFusionEngine::execute", level = "trace", skip(self), err)]
    async fn execute(&self, sql: &str) -> Result<()> {
        self.collect(sql).await?;
        Ok(())
    }

    #[tracing::instrument(name = "DataFusionEngine::fetch_all", level = "trace", skip(self), err)]
    async fn fetch_all(&self, sql: &str) -> Result<Vec<Row>> {
        self.collect(sql).await
    }
}

/// Shared handle alias used by the generator.
pub type EngineRef = Arc<dyn Engine>;
