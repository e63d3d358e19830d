//! Second-pass merge policy
//!
//! The two halves are deliberately asymmetric, matching the behavior this
//! pipeline normalizes: owners replace wholesale, management merges
//! per-slot.

use ownerscope_domain::{CompanyRecord, Management, Owner};

/// Fold second-pass results into the first-pass record.
///
/// Owners from the follow-up, when any were found, wholly replace the
/// record's owners list (the follow-up only runs when that list is empty).
/// Follow-up management replaces a missing block outright, but against a
/// partial block it only fills slots that are currently absent.
pub fn apply_followup(
    record: &mut CompanyRecord,
    owners: Vec<Owner>,
    management: Option<Management>,
) {
    if !owners.is_empty() {
        record.owners = owners;
    }

    if let Some(extra) = management {
        match record.management.as_mut() {
            None => record.management = Some(extra),
            Some(existing) => existing.fill_missing_from(extra),
        }
    }
}
