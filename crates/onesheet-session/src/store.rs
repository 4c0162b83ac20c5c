//! Canonical document plus field-level edits.

use onesheet_core::models::document::OnePagerDocument;
use onesheet_core::models::field::{BenefitPart, CtaPart, FieldPath, StatPart};

use crate::error::SessionError;

/// Holds the current one-pager and propagates edits from the rendered view
/// back into it.
///
/// Edits are last-write-wins per field, with no history. Only the addressed
/// leaf changes; the document stays structurally valid because cardinalities
/// are never touched.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    document: OnePagerDocument,
}

impl DocumentStore {
    pub fn new(document: OnePagerDocument) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &OnePagerDocument {
        &self.document
    }

    pub fn into_document(self) -> OnePagerDocument {
        self.document
    }

    /// Replace the value at `field`, returning the updated document.
    ///
    /// Indices are valid by construction for parsed paths; a hand-built
    /// out-of-range path is reported, never a panic.
    pub fn apply_edit(
        &mut self,
        field: FieldPath,
        value: &str,
    ) -> Result<&OnePagerDocument, SessionError> {
        let out_of_range = SessionError::FieldOutOfRange(field);
        let doc = &mut self.document;

        let slot = match field {
            FieldPath::Headline => &mut doc.headline,
            FieldPath::Subheadline => &mut doc.subheadline,
            FieldPath::Problem => &mut doc.problem,
            FieldPath::Solution => &mut doc.solution,
            FieldPath::Benefit(i, part) => {
                let benefit = doc.benefits.get_mut(i).ok_or(out_of_range)?;
                match part {
                    BenefitPart::Title => &mut benefit.title,
                    BenefitPart::Description => &mut benefit.description,
                }
            }
            FieldPath::Feature(i) => doc.features.get_mut(i).ok_or(out_of_range)?,
            FieldPath::Cta(part) => match part {
                CtaPart::Primary => &mut doc.cta.primary,
                CtaPart::Secondary => &mut doc.cta.secondary,
                CtaPart::Text => &mut doc.cta.text,
            },
            FieldPath::Stat(i, part) => {
                let stat = doc.stats.get_mut(i).ok_or(out_of_range)?;
                match part {
                    StatPart::Value => &mut stat.value,
                    StatPart::Label => &mut stat.label,
                }
            }
        };

        value.clone_into(slot);
        Ok(&self.document)
    }
}
