//! Rendering of fetched rows into the expected-output text of a fixture
//! block: columns joined by a tab, rows joined by a newline, with the `NULL`
//! and `(empty)` sentinels the consuming harness expects.

use datafusion_common::ScalarValue;

pub const NULL_SENTINEL: &str = "NULL";
pub const EMPTY_SENTINEL: &str = "(empty)";

#[must_use]
pub fn render_rows(rows: &[Vec<ScalarValue>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(render_cell)
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_cell(value: &ScalarValue) -> String {
    if value.is_null() {
        return NULL_SENTINEL.to_string();
    }
    match value {
        ScalarValue::Utf8(Some(text))
        | ScalarValue::LargeUtf8(Some(text))
        | ScalarValue::Utf8View(Some(text)) => {
            if text.is_empty() {
                EMPTY_SENTINEL.to_string()
            } else {
                text.clone()
            }
        }
        other => other.to_string(),
    }
}
