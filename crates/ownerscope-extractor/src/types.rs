//! Extraction outcome types

use ownerscope_domain::CompanyRecord;

/// Outcome of running the extraction engine over a reply
///
/// Both variants carry a usable record. `Degraded` marks the case where
/// every strategy failed and the record is a placeholder with a diagnostic
/// description, so callers can distinguish full success from best-effort
/// output without inspecting sentinel strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// A record was recovered by one of the extraction strategies
    Extracted(CompanyRecord),

    /// No strategy recovered anything; the record is a placeholder
    Degraded {
        /// Placeholder record with unknown name and empty owners
        record: CompanyRecord,
        /// Human-readable summary of the failure
        reason: String,
    },
}

impl Extraction {
    /// The record, regardless of variant
    pub fn record(&self) -> &CompanyRecord {
        match self {
            Extraction::Extracted(record) => record,
            Extraction::Degraded { record, .. } => record,
        }
    }

    /// Mutable access to the record, regardless of variant
    pub fn record_mut(&mut self) -> &mut CompanyRecord {
        match self {
            Extraction::Extracted(record) => record,
            Extraction::Degraded { record, .. } => record,
        }
    }

    /// Consume the outcome, yielding the record
    pub fn into_record(self) -> CompanyRecord {
        match self {
            Extraction::Extracted(record) => record,
            Extraction::Degraded { record, .. } => record,
        }
    }

    /// True for the degraded variant
    pub fn is_degraded(&self) -> bool {
        matches!(self, Extraction::Degraded { .. })
    }

    /// The failure summary, when degraded
    pub fn degraded_reason(&self) -> Option<&str> {
        match self {
            Extraction::Extracted(_) => None,
            Extraction::Degraded { reason, .. } => Some(reason),
        }
    }
}
