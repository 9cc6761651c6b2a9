//! Type-name handling for the reconstruction path.
//!
//! `TYPEOF` reports engine-internal spellings; `FROM_VARIANT` accepts the
//! short names. Composite and parameterized types are covered by the forward
//! `VARIANT()` path only and never round-tripped.

const ROUND_TRIP_EXCLUDED_PREFIXES: [&str; 4] = ["DECIMAL", "LIST", "STRUCT", "MAP"];

/// Whether a type name is excluded from round-trip testing. Every prefix in
/// the exclusion list is checked.
#[must_use]
pub fn round_trip_excluded(type_name: &str) -> bool {
    ROUND_TRIP_EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| type_name.starts_with(prefix))
}

/// Maps an engine-internal type spelling to the name accepted by
/// `FROM_VARIANT`. Unmapped names pass through unchanged; if the engine does
/// not recognize one, the reconstruction query fails and the run stops.
#[must_use]
pub fn normalize(type_name: &str) -> &str {
    match type_name {
        // A null-typed expression reconstructs as text.
        "NULL" | "enum_type" => "VARCHAR",
        "TIME WITH TIME ZONE" => "TIMETZ",
        "TIMESTAMP WITH TIME ZONE" => "TIMESTAMPTZ",
        "TIMESTAMP (SEC)" => "TIMESTAMP_S",
        "TIMESTAMP (MS)" => "TIMESTAMP_MS",
        "TIMESTAMP (NS)" => "TIMESTAMP_NS",
        other => other,
    }
}
