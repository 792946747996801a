/// ddl_service: lookup helpers for the Rijkswaterstaat DDL water data services.
///
/// Resolves a human-friendly location identifier (index code or name) plus a
/// small set of categorical filters to exactly one catalog row, then fetches
/// the measurement series for that row over a date range. Everything else —
/// network I/O, caching, the wire format — lives behind the `Provider` trait.
///
/// # Module structure
///
/// ```text
/// ddl_service
/// ├── model       — shared data types (LocationRecord, MeasurementSeries, DdlError)
/// ├── filters     — FilterCriteria with the documented WATHTE/NVT/NAP defaults
/// ├── config      — ddl.toml loader (provider endpoint, filter overrides)
/// ├── resolver    — identifier + filters -> exactly one LocationRecord
/// ├── fetcher     — date-range validation + measurement retrieval
/// └── provider
///     ├── mod     — the Provider trait and CatalogFilter
///     ├── ddl     — DDL web services client: request bodies + JSON parsing
///     └── fixtures (test only) — representative DDL response payloads
/// ```

pub mod config;
pub mod fetcher;
pub mod filters;
pub mod model;
pub mod provider;
pub mod resolver;

pub use fetcher::{fetch_measurements, measurements_for};
pub use filters::FilterCriteria;
pub use model::{DdlError, LocationRecord, Measurement, MeasurementSeries};
pub use provider::{CatalogFilter, Provider, ddl::DdlProvider};
pub use resolver::{Identifier, TieBreak, resolve_location, resolve_location_with};
