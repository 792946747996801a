/// Rijkswaterstaat DDL (DistributieLaag) web services client.
///
/// Handles request-body construction and JSON response parsing for the two
/// services this crate consumes:
///   POST {base}/METADATASERVICES_DBO/OphalenCatalogus
///   POST {base}/ONLINEWAARNEMINGENSERVICES_DBO/OphalenWaarnemingen
///
/// See `fixtures.rs` for annotated examples of both response envelopes.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::json;

use crate::model::{DdlError, LocationRecord, Measurement, MeasurementSeries};
use crate::provider::{CatalogFilter, Provider};

const DDL_API_BASE: &str = "https://waterwebservices.rijkswaterstaat.nl";
const CATALOG_ENDPOINT: &str = "/METADATASERVICES_DBO/OphalenCatalogus";
const MEASUREMENTS_ENDPOINT: &str = "/ONLINEWAARNEMINGENSERVICES_DBO/OphalenWaarnemingen";

/// Values at or above this are the DDL's missing-value sentinel and are
/// mapped to NaN during parsing.
pub const MISSING_VALUE_SENTINEL: f64 = 999_999_999.0;

/// The fixed offset the DDL expects in Periode timestamps (MET).
const PERIOD_OFFSET: &str = "+01:00";

// ---------------------------------------------------------------------------
// Serde structures for response deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "Succesvol")]
    succesvol: bool,
    #[serde(rename = "Foutmelding")]
    foutmelding: Option<String>,
}

#[derive(Deserialize)]
struct CatalogusResponse {
    #[serde(rename = "LocatieLijst", default)]
    locatie_lijst: Vec<Locatie>,
    #[serde(rename = "AquoMetadataLijst", default)]
    aquo_metadata_lijst: Vec<AquoMetadata>,
    #[serde(rename = "AquoMetadataLocatieLijst", default)]
    aquo_metadata_locatie_lijst: Vec<MetadataLocatieKoppeling>,
}

#[derive(Deserialize)]
struct Locatie {
    #[serde(rename = "Locatie_MessageID")]
    message_id: i64,
    #[serde(rename = "Coordinatenstelsel")]
    coordinatenstelsel: String,
    #[serde(rename = "X")]
    x: f64,
    #[serde(rename = "Y")]
    y: f64,
    #[serde(rename = "Naam")]
    naam: String,
    #[serde(rename = "Code")]
    code: String,
}

#[derive(Deserialize)]
struct AquoMetadata {
    #[serde(rename = "AquoMetadata_MessageID")]
    message_id: i64,
    #[serde(rename = "ProcesType", default)]
    proces_type: Option<String>,
    #[serde(rename = "Grootheid")]
    grootheid: CodedValue,
    #[serde(rename = "Groepering")]
    groepering: CodedValue,
    #[serde(rename = "Hoedanigheid")]
    hoedanigheid: CodedValue,
    #[serde(rename = "Eenheid", default)]
    eenheid: Option<CodedValue>,
}

#[derive(Deserialize)]
struct CodedValue {
    #[serde(rename = "Code")]
    code: String,
}

/// One row of the many-to-many join table. The service spells the metadata
/// key with a capital D here ("AquoMetaData_MessageID"), unlike the
/// metadata list itself.
#[derive(Deserialize)]
struct MetadataLocatieKoppeling {
    #[serde(rename = "AquoMetaData_MessageID")]
    aquo_metadata_message_id: i64,
    #[serde(rename = "Locatie_MessageID")]
    locatie_message_id: i64,
}

#[derive(Deserialize)]
struct WaarnemingenResponse {
    #[serde(rename = "WaarnemingenLijst", default)]
    waarnemingen_lijst: Vec<Waarneming>,
}

#[derive(Deserialize)]
struct Waarneming {
    #[serde(rename = "Locatie")]
    locatie: Locatie,
    #[serde(rename = "AquoMetadata")]
    aquo_metadata: AquoMetadata,
    #[serde(rename = "MetingenLijst", default)]
    metingen_lijst: Vec<Meting>,
}

#[derive(Deserialize)]
struct Meting {
    #[serde(rename = "Tijdstip")]
    tijdstip: String,
    #[serde(rename = "Meetwaarde")]
    meetwaarde: Meetwaarde,
    #[serde(rename = "WaarnemingMetadata", default)]
    waarneming_metadata: Option<WaarnemingMetadata>,
}

#[derive(Deserialize)]
struct Meetwaarde {
    #[serde(rename = "Waarde_Numeriek")]
    waarde_numeriek: f64,
}

#[derive(Deserialize, Default)]
struct WaarnemingMetadata {
    #[serde(rename = "StatuswaardeLijst", default)]
    statuswaarde_lijst: Vec<String>,
    #[serde(rename = "KwaliteitswaardecodeLijst", default)]
    kwaliteitswaardecode_lijst: Vec<String>,
}

// ---------------------------------------------------------------------------
// Request construction
// ---------------------------------------------------------------------------

/// Builds the OphalenCatalogus request body for the given catalog filter.
pub fn build_catalogus_request(filter: &CatalogFilter) -> serde_json::Value {
    json!({ "CatalogusFilter": filter })
}

/// Formats one bound of the Periode range. The DDL expects millisecond
/// precision and a fixed MET offset regardless of DST.
fn format_period_bound(date: NaiveDate, time: &str) -> String {
    format!("{}T{}.000{}", date.format("%Y-%m-%d"), time, PERIOD_OFFSET)
}

/// Builds the OphalenWaarnemingen request body for one resolved location
/// over an inclusive calendar-date range.
pub fn build_waarnemingen_request(
    location: &LocationRecord,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> serde_json::Value {
    json!({
        "Locatie": {
            "Code": location.code,
            "X": location.x,
            "Y": location.y
        },
        "AquoPlusWaarnemingMetadata": {
            "AquoMetadata": {
                "Grootheid": { "Code": location.quantity_code },
                "Groepering": { "Code": location.grouping_code },
                "Hoedanigheid": { "Code": location.reference_datum_code }
            }
        },
        "Periode": {
            "Begindatumtijd": format_period_bound(start_date, "00:00:00"),
            "Einddatumtijd": format_period_bound(end_date, "23:59:59")
        }
    })
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Deserializes the shared envelope and rejects `"Succesvol": false`
/// responses, surfacing the service's Foutmelding.
fn check_envelope(json: &str) -> Result<(), DdlError> {
    let envelope: Envelope = serde_json::from_str(json)
        .map_err(|e| DdlError::ParseError(format!("JSON deserialization failed: {}", e)))?;
    if !envelope.succesvol {
        return Err(DdlError::ServiceError(
            envelope
                .foutmelding
                .unwrap_or_else(|| "service reported failure without Foutmelding".to_string()),
        ));
    }
    Ok(())
}

/// Parses an OphalenCatalogus response into flat `LocationRecord` rows by
/// joining `LocatieLijst` and `AquoMetadataLijst` through the
/// `AquoMetadataLocatieLijst` table.
///
/// Row order follows the join table's order, so the catalog order is stable
/// across calls — the `TieBreak::FirstRow` resolution policy depends on
/// this.
///
/// # Errors
/// - `DdlError::ServiceError` — `"Succesvol": false` envelope.
/// - `DdlError::ParseError` — malformed JSON, or a join entry referencing a
///   location or metadata id that is not present in its list.
pub fn parse_catalogus_response(json: &str) -> Result<Vec<LocationRecord>, DdlError> {
    check_envelope(json)?;

    let response: CatalogusResponse = serde_json::from_str(json)
        .map_err(|e| DdlError::ParseError(format!("JSON deserialization failed: {}", e)))?;

    let locations: HashMap<i64, &Locatie> = response
        .locatie_lijst
        .iter()
        .map(|l| (l.message_id, l))
        .collect();
    let metadata: HashMap<i64, &AquoMetadata> = response
        .aquo_metadata_lijst
        .iter()
        .map(|m| (m.message_id, m))
        .collect();

    let mut records = Vec::with_capacity(response.aquo_metadata_locatie_lijst.len());
    for koppeling in &response.aquo_metadata_locatie_lijst {
        let locatie = locations.get(&koppeling.locatie_message_id).ok_or_else(|| {
            DdlError::ParseError(format!(
                "join entry references unknown Locatie_MessageID {}",
                koppeling.locatie_message_id
            ))
        })?;
        let meta = metadata
            .get(&koppeling.aquo_metadata_message_id)
            .ok_or_else(|| {
                DdlError::ParseError(format!(
                    "join entry references unknown AquoMetadata_MessageID {}",
                    koppeling.aquo_metadata_message_id
                ))
            })?;

        records.push(LocationRecord {
            code: locatie.code.clone(),
            name: locatie.naam.clone(),
            quantity_code: meta.grootheid.code.clone(),
            grouping_code: meta.groepering.code.clone(),
            reference_datum_code: meta.hoedanigheid.code.clone(),
            process_type: meta.proces_type.clone().unwrap_or_default(),
            coordinate_system: locatie.coordinatenstelsel.clone(),
            x: locatie.x,
            y: locatie.y,
        });
    }

    Ok(records)
}

/// Parses an OphalenWaarnemingen response into a `MeasurementSeries`.
///
/// Measurement values at or above `MISSING_VALUE_SENTINEL` become NaN; the
/// entries themselves are kept so the series retains its full timeline.
///
/// # Errors
/// - `DdlError::ServiceError` — `"Succesvol": false` envelope, or a success
///   envelope with no `WaarnemingenLijst` entries.
/// - `DdlError::ParseError` — malformed JSON or an unparseable Tijdstip.
pub fn parse_waarnemingen_response(json: &str) -> Result<MeasurementSeries, DdlError> {
    check_envelope(json)?;

    let response: WaarnemingenResponse = serde_json::from_str(json)
        .map_err(|e| DdlError::ParseError(format!("JSON deserialization failed: {}", e)))?;

    let mut entries = response.waarnemingen_lijst.into_iter();
    let first = entries.next().ok_or_else(|| {
        DdlError::ServiceError("response contained no WaarnemingenLijst entries".to_string())
    })?;

    let unit = first
        .aquo_metadata
        .eenheid
        .as_ref()
        .map(|e| e.code.clone())
        .unwrap_or_default();

    let mut series = MeasurementSeries {
        location_code: first.locatie.code.clone(),
        location_name: first.locatie.naam.clone(),
        quantity_code: first.aquo_metadata.grootheid.code.clone(),
        unit,
        measurements: Vec::new(),
    };

    // A single-location request normally yields one entry, but the service
    // may split long ranges across several.
    for waarneming in std::iter::once(first).chain(entries) {
        for meting in waarneming.metingen_lijst {
            series.measurements.push(parse_meting(meting)?);
        }
    }

    Ok(series)
}

fn parse_meting(meting: Meting) -> Result<Measurement, DdlError> {
    let timestamp: DateTime<Utc> = DateTime::parse_from_rfc3339(&meting.tijdstip)
        .map_err(|e| {
            DdlError::ParseError(format!(
                "Failed to parse Tijdstip '{}': {}",
                meting.tijdstip, e
            ))
        })?
        .with_timezone(&Utc);

    let raw = meting.meetwaarde.waarde_numeriek;
    let value = if raw >= MISSING_VALUE_SENTINEL {
        warn!("sentinel value at {} mapped to NaN", meting.tijdstip);
        f64::NAN
    } else {
        raw
    };

    let metadata = meting.waarneming_metadata.unwrap_or_default();
    Ok(Measurement {
        timestamp,
        value,
        status: metadata.statuswaarde_lijst.first().cloned(),
        quality_code: metadata.kwaliteitswaardecode_lijst.first().cloned(),
    })
}

// ---------------------------------------------------------------------------
// HTTP provider
// ---------------------------------------------------------------------------

/// Blocking HTTP implementation of `Provider` against the public DDL
/// services. Holds an in-memory catalog cache used when callers pass
/// `use_cache = true`.
pub struct DdlProvider {
    client: reqwest::blocking::Client,
    base_url: String,
    catalog_cache: Mutex<Option<Vec<LocationRecord>>>,
}

impl DdlProvider {
    pub fn new() -> Self {
        Self::with_base_url(DDL_API_BASE)
    }

    /// Builds a provider from loaded configuration, honoring a configured
    /// base URL override.
    pub fn from_config(config: &crate::config::ServiceConfig) -> Self {
        match &config.provider.base_url {
            Some(url) => Self::with_base_url(url),
            None => Self::new(),
        }
    }

    /// Point the provider at an alternate base URL (test servers).
    pub fn with_base_url(base_url: &str) -> Self {
        DdlProvider {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            catalog_cache: Mutex::new(None),
        }
    }

    fn post_json(&self, endpoint: &str, body: &serde_json::Value) -> Result<String, DdlError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| DdlError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DdlError::HttpError(response.status().as_u16()));
        }

        response
            .text()
            .map_err(|e| DdlError::RequestFailed(e.to_string()))
    }
}

impl Default for DdlProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for DdlProvider {
    fn list_locations(
        &self,
        catalog_filter: Option<&CatalogFilter>,
        use_cache: bool,
    ) -> Result<Vec<LocationRecord>, DdlError> {
        if use_cache {
            // Poisoned lock degrades to a cache miss.
            if let Ok(cache) = self.catalog_cache.lock() {
                if let Some(records) = cache.as_ref() {
                    debug!("serving {} catalog rows from cache", records.len());
                    return Ok(records.clone());
                }
            }
        }

        let default_filter = CatalogFilter::default();
        let filter = catalog_filter.unwrap_or(&default_filter);
        let body = build_catalogus_request(filter);
        let records = parse_catalogus_response(&self.post_json(CATALOG_ENDPOINT, &body)?)?;

        if use_cache {
            if let Ok(mut cache) = self.catalog_cache.lock() {
                *cache = Some(records.clone());
            }
        }

        Ok(records)
    }

    fn get_measurements(
        &self,
        location: &LocationRecord,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<MeasurementSeries, DdlError> {
        let body = build_waarnemingen_request(location, start_date, end_date);
        parse_waarnemingen_response(&self.post_json(MEASUREMENTS_ENDPOINT, &body)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
