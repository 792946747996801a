/// Location resolution: identifier + categorical filters -> exactly one row.
///
/// Matching is always exact and case-exact; the identifier constraint and
/// every supplied filter field are combined with logical AND. There is no
/// prefix or fuzzy matching and no normalization.

use crate::filters::FilterCriteria;
use crate::model::{DdlError, LocationRecord};
use crate::provider::Provider;

/// Which catalog column the identifier string is matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// Match against the unique index code, e.g. `Code("HOEK")`.
    Code(String),
    /// Match against the location name, e.g. `Name("Hoek van Holland")`.
    /// Requires `filters.process_type` to be set.
    Name(String),
}

impl Identifier {
    pub fn code(code: &str) -> Self {
        Identifier::Code(code.to_string())
    }

    pub fn name(name: &str) -> Self {
        Identifier::Name(name.to_string())
    }

    fn value(&self) -> &str {
        match self {
            Identifier::Code(s) | Identifier::Name(s) => s,
        }
    }

    fn matches(&self, record: &LocationRecord) -> bool {
        match self {
            Identifier::Code(code) => record.code == *code,
            Identifier::Name(name) => record.name == *name,
        }
    }
}

/// What to do when filtering leaves more than one catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Fail with `AmbiguousLocation`. A silently chosen row risks fetching
    /// the wrong series, so this is the default.
    Strict,
    /// Take the first matching row in catalog order. Deterministic (the
    /// catalog join preserves response order) but only safe when the caller
    /// knows the duplicates are interchangeable.
    FirstRow,
}

/// Resolves `identifier` + `filters` against the provider's locations
/// catalog under the strict tie-break policy.
///
/// # Errors
/// - `DdlError::LocationNotFound` — zero rows matched; the message carries
///   the identifier and the full filter set.
/// - `DdlError::AmbiguousLocation` — more than one row matched.
/// - `DdlError::MissingProcessType` — name-based lookup without a
///   process-type filter.
/// - any provider error, propagated unchanged.
pub fn resolve_location(
    provider: &impl Provider,
    identifier: &Identifier,
    filters: &FilterCriteria,
) -> Result<LocationRecord, DdlError> {
    resolve_location_with(provider, identifier, filters, TieBreak::Strict, true)
}

/// As `resolve_location`, with an explicit tie-break policy and cache flag.
pub fn resolve_location_with(
    provider: &impl Provider,
    identifier: &Identifier,
    filters: &FilterCriteria,
    tie_break: TieBreak,
    use_cache: bool,
) -> Result<LocationRecord, DdlError> {
    if matches!(identifier, Identifier::Name(_)) && filters.process_type.is_none() {
        return Err(DdlError::MissingProcessType {
            identifier: identifier.value().to_string(),
        });
    }

    let catalog = provider.list_locations(None, use_cache)?;

    let mut matched: Vec<LocationRecord> = catalog
        .into_iter()
        .filter(|record| identifier.matches(record) && filters.matches(record))
        .collect();

    match matched.len() {
        0 => Err(DdlError::LocationNotFound {
            identifier: identifier.value().to_string(),
            filters: filters.summary(),
        }),
        1 => Ok(matched.remove(0)),
        count => match tie_break {
            TieBreak::Strict => Err(DdlError::AmbiguousLocation {
                identifier: identifier.value().to_string(),
                count,
                filters: filters.summary(),
            }),
            TieBreak::FirstRow => Ok(matched.remove(0)),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
