//! Evidence grounding dimension.
//!
//! A span is grounded when it occurs in the journal text, ignoring case.
//! An empty span is neither grounded nor hallucinated.

/// Outcome of checking one evidence span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanVerdict {
    /// No span given; excluded from both evidence and hallucination counts.
    Empty,
    Grounded,
    Hallucinated,
}

/// Journal text lowercased once, reused for every item of a record.
#[derive(Debug, Clone)]
pub struct GroundingText {
    lowered: String,
}

impl GroundingText {
    pub fn new(text: &str) -> Self {
        Self {
            lowered: text.to_lowercase(),
        }
    }

    pub fn classify(&self, span: &str) -> SpanVerdict {
        if span.is_empty() {
            SpanVerdict::Empty
        } else if !self.lowered.is_empty() && self.lowered.contains(&span.to_lowercase()) {
            SpanVerdict::Grounded
        } else {
            SpanVerdict::Hallucinated
        }
    }
}

/// One-shot form of [`GroundingText::classify`].
pub fn classify(span: &str, text: &str) -> SpanVerdict {
    GroundingText::new(text).classify(span)
}
