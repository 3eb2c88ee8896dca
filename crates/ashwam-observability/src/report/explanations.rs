use std::collections::BTreeMap;

use ashwam_core::models::InvariantExplanation;

/// `(key, definition, risk_mitigated, action_on_failure)`.
const EXPLANATIONS: [(&str, &str, &str, &str); 4] = [
    (
        "schema_validity",
        "Rate of outputs conforming to expected JSON schema",
        "Structural errors, incomplete data",
        "Investigate parser version, schema changes",
    ),
    (
        "evidence_span_validity",
        "Rate of extracted items whose evidencespan appears verbatim in journal text",
        "Hallucinations, fabricated evidence",
        "Review and retrain model, investigate prompt changes",
    ),
    (
        "hallucination_rate",
        "Rate of extracted items not supported by source text",
        "Unsafe claims, trust degradation",
        "Immediate human review, potential rollback",
    ),
    (
        "contradiction_rate",
        "Same evidence span extracted with conflicting polarity",
        "Logical inconsistency, user confusion",
        "Human review, model retraining",
    ),
];

/// Static explanation of each invariant, keyed by invariant name.
pub fn invariant_explanations() -> BTreeMap<String, InvariantExplanation> {
    EXPLANATIONS
        .iter()
        .map(|&(key, definition, risk_mitigated, action_on_failure)| {
            (
                key.to_string(),
                InvariantExplanation {
                    definition: definition.to_string(),
                    risk_mitigated: risk_mitigated.to_string(),
                    action_on_failure: action_on_failure.to_string(),
                },
            )
        })
        .collect()
}
