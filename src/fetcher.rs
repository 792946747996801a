/// Measurement retrieval for a resolved location over a calendar-date range.
///
/// The fetcher validates the range, then delegates to the provider verbatim
/// and returns its series unmodified. No retry, no post-processing.

use chrono::NaiveDate;

use crate::filters::FilterCriteria;
use crate::model::{DdlError, LocationRecord, MeasurementSeries};
use crate::provider::Provider;
use crate::resolver::{self, Identifier};

/// Fetches the series for `location` over `[start_date, end_date]`.
///
/// # Errors
/// - `DdlError::InvalidDateRange` when `start_date > end_date`; the
///   provider is not called in that case. `start_date == end_date` is a
///   valid one-day range.
/// - any provider error, propagated unchanged.
pub fn fetch_measurements(
    provider: &impl Provider,
    location: &LocationRecord,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<MeasurementSeries, DdlError> {
    if start_date > end_date {
        return Err(DdlError::InvalidDateRange {
            start: start_date,
            end: end_date,
        });
    }
    provider.get_measurements(location, start_date, end_date)
}

/// Resolves `identifier` + `filters` to one location and fetches its series
/// in a single call — the common lookup-then-fetch composition.
pub fn measurements_for(
    provider: &impl Provider,
    identifier: &Identifier,
    filters: &FilterCriteria,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<MeasurementSeries, DdlError> {
    // Validate the range before touching the network at all.
    if start_date > end_date {
        return Err(DdlError::InvalidDateRange {
            start: start_date,
            end: end_date,
        });
    }
    let location = resolver::resolve_location(provider, identifier, filters)?;
    fetch_measurements(provider, &location, start_date, end_date)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
