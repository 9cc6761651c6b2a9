use datafusion_common::ScalarValue;
use snafu::{OptionExt, ensure};

use crate::catalog;
use crate::display::{self, NULL_SENTINEL};
use crate::engine::EngineRef;
use crate::error::{self as error, Result};
use crate::fixture;
use crate::typemap;

/// Drives the per-entry pipeline over the literal catalog and produces the
/// generated suffix of the fixture file.
///
/// The run is a straight-line sequence: any engine failure or round-trip
/// mismatch aborts it. This is a batch generator run by a developer, not a
/// service; failures are meant to be seen and fixed, not handled.
pub struct Generator {
    engine: EngineRef,
    setup: Vec<String>,
    expressions: Vec<String>,
}

impl Generator {
    #[must_use]
    pub fn new(engine: EngineRef) -> Self {
        Self {
            engine,
            setup: catalog::SETUP.iter().map(ToString::to_string).collect(),
            expressions: catalog::EXPRESSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    #[must_use]
    pub fn with_setup<I, S>(mut self, setup: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.setup = setup.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_expressions<I, S>(mut self, expressions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expressions = expressions.into_iter().map(Into::into).collect();
        self
    }

    /// Runs the setup statements and the whole catalog, returning the
    /// generated fixture text.
    #[tracing::instrument(name = "Generator::run", level = "debug", skip(self), err)]
    pub async fn run(&self) -> Result<String> {
        for statement in &self.setup {
            self.engine.execute(statement).await?;
        }

        let mut out = String::new();
        for expression in &self.expressions {
            self.emit_entry(expression, &mut out).await?;
        }
        Ok(out)
    }

    async fn emit_entry(&self, expr: &str, out: &mut String) -> Result<()> {
        let forward = format!("SELECT VARIANT({expr})");
        let rendered = self.fetch_display(&format!("{forward}::VARCHAR;")).await?;
        fixture::push_block(out, &forward, &rendered);

        // Type classification runs for every entry, including a null result.
        let type_name = self.type_of(expr).await?;
        if typemap::round_trip_excluded(&type_name) {
            tracing::debug!(expr, %type_name, "composite type, forward-only coverage");
            return Ok(());
        }
        let normalized = typemap::normalize(&type_name);
        tracing::debug!(expr, %type_name, %normalized, "classified catalog entry");

        // An absent value has nothing to reconstruct.
        if rendered == NULL_SENTINEL {
            return Ok(());
        }

        let blob = format!("'{}'::BLOB", rendered.replace('\'', "\\x27"));
        let reference = self.fetch_one(&format!("SELECT {expr};")).await?;

        let reconstruct = format!("SELECT FROM_VARIANT('{normalized}', {blob})");
        let actual = self.fetch_one(&format!("{reconstruct};")).await?;
        ensure!(
            actual == reference,
            error::RoundTripMismatchSnafu {
                expr,
                expected: reference.to_string(),
                actual: actual.to_string(),
            }
        );

        let rendered = self
            .fetch_display(&format!("{reconstruct}::VARCHAR;"))
            .await?;
        fixture::push_block(out, &reconstruct, &rendered);
        Ok(())
    }

    async fn type_of(&self, expr: &str) -> Result<String> {
        let sql = format!("SELECT TYPEOF({expr});");
        match self.fetch_one(&sql).await? {
            ScalarValue::Utf8(Some(name))
            | ScalarValue::LargeUtf8(Some(name))
            | ScalarValue::Utf8View(Some(name)) => Ok(name),
            other => error::NonTextTypeNameSnafu {
                query: sql,
                value: other.to_string(),
            }
            .fail(),
        }
    }

    async fn fetch_display(&self, sql: &str) -> Result<String> {
        let rows = self.engine.fetch_all(sql).await?;
        Ok(display::render_rows(&rows))
    }

    /// First column of the first row; the single-value queries of the
    /// reconstruction path all go through here.
    async fn fetch_one(&self, sql: &str) -> Result<ScalarValue> {
        self.engine
            .fetch_all(sql)
            .await?
            .into_iter()
            .next()
            .and_then(|row| row.into_iter().next())
            .context(error::EmptyResultSnafu { query: sql })
    }
}
