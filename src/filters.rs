/// Categorical filter criteria applied during location resolution.
///
/// The original helpers buried the default codes in call signatures; here
/// they live in one named structure so they are documented and overridable.
/// A field set to `None` is not filtered on at all.

use serde::Deserialize;

use crate::model::LocationRecord;

/// Default quantity code: water level (Grootheid "WATHTE").
pub const DEFAULT_QUANTITY_CODE: &str = "WATHTE";

/// Default grouping code: not applicable (Groepering "NVT").
pub const DEFAULT_GROUPING_CODE: &str = "NVT";

/// Default reference datum: Normaal Amsterdams Peil (Hoedanigheid "NAP").
pub const DEFAULT_REFERENCE_DATUM_CODE: &str = "NAP";

/// Exact-match constraints on the categorical catalog columns.
///
/// Matching is case-exact, with all supplied fields combined by logical AND.
/// `process_type` carries no default: it varies too much across locations
/// for any single value to be safe, and name-based resolution requires it
/// explicitly (see `resolver::resolve_location`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilterCriteria {
    pub quantity_code: Option<String>,
    pub grouping_code: Option<String>,
    pub reference_datum_code: Option<String>,
    pub process_type: Option<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            quantity_code: Some(DEFAULT_QUANTITY_CODE.to_string()),
            grouping_code: Some(DEFAULT_GROUPING_CODE.to_string()),
            reference_datum_code: Some(DEFAULT_REFERENCE_DATUM_CODE.to_string()),
            process_type: None,
        }
    }
}

impl FilterCriteria {
    /// No constraints at all: every catalog row matches.
    pub fn none() -> Self {
        FilterCriteria {
            quantity_code: None,
            grouping_code: None,
            reference_datum_code: None,
            process_type: None,
        }
    }

    /// True when the record satisfies every supplied constraint.
    pub fn matches(&self, record: &LocationRecord) -> bool {
        let field_ok = |constraint: &Option<String>, value: &str| match constraint {
            Some(required) => required == value,
            None => true,
        };

        field_ok(&self.quantity_code, &record.quantity_code)
            && field_ok(&self.grouping_code, &record.grouping_code)
            && field_ok(&self.reference_datum_code, &record.reference_datum_code)
            && field_ok(&self.process_type, &record.process_type)
    }

    /// Renders every supplied constraint as `name=value` pairs, for error
    /// messages. Unconstrained fields are omitted.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(q) = &self.quantity_code {
            parts.push(format!("quantity_code={}", q));
        }
        if let Some(g) = &self.grouping_code {
            parts.push(format!("grouping_code={}", g));
        }
        if let Some(r) = &self.reference_datum_code {
            parts.push(format!("reference_datum_code={}", r));
        }
        if let Some(p) = &self.process_type {
            parts.push(format!("process_type={}", p));
        }
        if parts.is_empty() {
            "no filters".to_string()
        } else {
            parts.join(", ")
        }
    }
}
