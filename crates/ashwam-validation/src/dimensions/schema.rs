//! Schema dimension.

use std::collections::BTreeMap;

use ashwam_core::record::ExtractionRecord;

/// Check one record, tallying each defect kind into `defect_counts`.
/// Returns whether the record is schema-valid.
pub fn check(record: &ExtractionRecord, defect_counts: &mut BTreeMap<String, usize>) -> bool {
    match record.schema_check() {
        Ok(()) => true,
        Err(defects) => {
            for defect in defects {
                *defect_counts.entry(defect.kind().to_string()).or_insert(0) += 1;
            }
            false
        }
    }
}
