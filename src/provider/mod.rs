/// External data provider boundary.
///
/// The resolver and fetcher talk to the DDL services exclusively through the
/// `Provider` trait, so tests can substitute a stub provider with a fixed
/// catalog. `ddl` is the real blocking-HTTP implementation.

pub mod ddl;

#[cfg(test)]
pub(crate) mod fixtures;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{DdlError, LocationRecord, MeasurementSeries};

/// Server-side catalog filter: selects which metadata lists the DDL catalog
/// service includes in its response. Mirrors the `CatalogusFilter` request
/// object.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogFilter {
    #[serde(rename = "Grootheden")]
    pub quantities: bool,
    #[serde(rename = "Groeperingen")]
    pub groupings: bool,
    #[serde(rename = "Hoedanigheden")]
    pub reference_datums: bool,
    #[serde(rename = "Eenheden")]
    pub units: bool,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        // Everything the resolver filters on, plus units for the series.
        CatalogFilter {
            quantities: true,
            groupings: true,
            reference_datums: true,
            units: true,
        }
    }
}

/// The two-call contract this crate requires of its data provider.
pub trait Provider {
    /// Returns the full locations catalog as flat rows, one per
    /// location x metadata combination, in the provider's own order.
    ///
    /// `use_cache` allows the provider to serve a previously fetched
    /// catalog; the resolver treats the cache as opaque.
    fn list_locations(
        &self,
        catalog_filter: Option<&CatalogFilter>,
        use_cache: bool,
    ) -> Result<Vec<LocationRecord>, DdlError>;

    /// Returns the measurement series for one resolved location over the
    /// given calendar-date range (interval semantics are the provider's).
    fn get_measurements(
        &self,
        location: &LocationRecord,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<MeasurementSeries, DdlError>;
}
