/// Core data types for the DDL lookup helpers.
///
/// This module defines the shared domain model imported by all other modules,
/// plus the crate error type. It contains no I/O — records are produced by
/// the provider boundary (`provider::ddl`) and consumed by the resolver and
/// fetcher.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Location catalog types
// ---------------------------------------------------------------------------

/// One row of the DDL locations catalog: a monitoring location paired with
/// one Aquo metadata combination.
///
/// The same location `code` appears once per metadata combination in the
/// catalog (e.g. HOEK measuring water level against NAP, and HOEK again for
/// the astronomical tide prediction), which is why resolution filters on the
/// categorical fields and not on the code alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Unique location index code, e.g. "HOEK".
    pub code: String,
    /// Human-readable location name, e.g. "Hoek van Holland".
    pub name: String,
    /// Quantity code (Grootheid), e.g. "WATHTE" for water level.
    pub quantity_code: String,
    /// Grouping code (Groepering), "NVT" when not applicable.
    pub grouping_code: String,
    /// Reference datum code (Hoedanigheid), e.g. "NAP".
    pub reference_datum_code: String,
    /// Processing pipeline classifier, e.g. "meting" or "verwachting".
    pub process_type: String,
    /// EPSG code of the coordinate system the DDL reports, e.g. "25831".
    pub coordinate_system: String,
    pub x: f64,
    pub y: f64,
}

// ---------------------------------------------------------------------------
// Measurement types
// ---------------------------------------------------------------------------

/// A single timestamped value from the DDL measurements service.
///
/// `value` is NaN where the service returned its missing-value sentinel
/// (see `provider::ddl::MISSING_VALUE_SENTINEL`).
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    /// Measurement status, e.g. "Gecontroleerd" (checked).
    pub status: Option<String>,
    /// Quality flag code as reported by the service.
    pub quality_code: Option<String>,
}

/// The measurement series for one resolved location over one date range,
/// as returned by the provider. The helper layer never mutates this.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementSeries {
    pub location_code: String,
    pub location_name: String,
    pub quantity_code: String,
    /// Unit code (Eenheid), e.g. "cm".
    pub unit: String,
    pub measurements: Vec<Measurement>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when resolving locations or fetching measurements.
#[derive(Debug, Clone, PartialEq)]
pub enum DdlError {
    /// Non-2xx HTTP response from the DDL services.
    HttpError(u16),
    /// The request could not be sent (connect failure, timeout, ...).
    RequestFailed(String),
    /// The response body could not be deserialized.
    ParseError(String),
    /// The service answered `"Succesvol": false`; carries the Foutmelding.
    ServiceError(String),
    /// The resolution filter matched zero catalog rows. `filters` is the
    /// full filter set that was applied, for diagnosability.
    LocationNotFound { identifier: String, filters: String },
    /// The resolution filter matched more than one catalog row under the
    /// strict tie-break policy.
    AmbiguousLocation {
        identifier: String,
        count: usize,
        filters: String,
    },
    /// Name-based resolution was attempted without a process-type filter,
    /// which has no safe default.
    MissingProcessType { identifier: String },
    /// `start_date > end_date`; rejected before the provider is called.
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

impl std::fmt::Display for DdlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DdlError::HttpError(code) => write!(f, "HTTP error: {}", code),
            DdlError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            DdlError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            DdlError::ServiceError(msg) => write!(f, "DDL service error: {}", msg),
            DdlError::LocationNotFound { identifier, filters } => {
                write!(
                    f,
                    "No location matched '{}' with filters [{}]",
                    identifier, filters
                )
            }
            DdlError::AmbiguousLocation {
                identifier,
                count,
                filters,
            } => {
                write!(
                    f,
                    "{} locations matched '{}' with filters [{}]; refine the filters or opt into TieBreak::FirstRow",
                    count, identifier, filters
                )
            }
            DdlError::MissingProcessType { identifier } => {
                write!(
                    f,
                    "Resolving '{}' by name requires a process_type filter (no safe default exists)",
                    identifier
                )
            }
            DdlError::InvalidDateRange { start, end } => {
                write!(f, "Invalid date range: start {} is after end {}", start, end)
            }
        }
    }
}

impl std::error::Error for DdlError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_carries_identifier_and_filters() {
        let err = DdlError::LocationNotFound {
            identifier: "HOEK".to_string(),
            filters: "quantity_code=WATHTE, grouping_code=NVT".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("HOEK"), "message must name the identifier: {}", msg);
        assert!(
            msg.contains("quantity_code=WATHTE"),
            "message must list the filters used: {}",
            msg
        );
    }

    #[test]
    fn test_invalid_range_message_shows_both_dates() {
        let err = DdlError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            end: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2020-01-02") && msg.contains("2020-01-01"));
    }
}
