//! The rendering surface seam.
//!
//! The engine never touches the document itself. Callers pass a surface that
//! owns the annotations; the browser adapter writes to the DOM, tests and
//! native callers use `AnnotationBoard`.

use std::collections::BTreeMap;

use vet_model::FieldId;

use crate::annotation::{Affordance, ErrorAnnotation};

/// Where annotations and affordances are rendered.
pub trait RenderSurface {
    /// Remove the field's annotation, if any, and reset it to `Affordance::Neutral`.
    fn clear(&mut self, field: &FieldId);

    /// Attach an annotation next to its field.
    fn annotate(&mut self, annotation: &ErrorAnnotation);

    /// Apply the style signal for the field's latest outcome.
    fn mark(&mut self, field: &FieldId, affordance: Affordance);
}

impl<S: RenderSurface + ?Sized> RenderSurface for &mut S {
    fn clear(&mut self, field: &FieldId) {
        (**self).clear(field)
    }

    fn annotate(&mut self, annotation: &ErrorAnnotation) {
        (**self).annotate(annotation)
    }

    fn mark(&mut self, field: &FieldId, affordance: Affordance) {
        (**self).mark(field, affordance)
    }
}

/// Headless surface holding at most one annotation per field.
#[derive(Debug, Clone, Default)]
pub struct AnnotationBoard {
    annotations: BTreeMap<FieldId, ErrorAnnotation>,
    affordances: BTreeMap<FieldId, Affordance>,
}

impl AnnotationBoard {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// The annotation currently shown for a field.
    pub fn annotation(&self, field: &FieldId) -> Option<&ErrorAnnotation> {
        self.annotations.get(field)
    }

    /// All annotations, ordered by field id.
    pub fn annotations(&self) -> impl Iterator<Item = &ErrorAnnotation> {
        self.annotations.values()
    }

    /// The affordance currently applied to a field.
    pub fn affordance(&self, field: &FieldId) -> Affordance {
        self.affordances.get(field).copied().unwrap_or_default()
    }

    /// Number of annotations shown.
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

impl RenderSurface for AnnotationBoard {
    fn clear(&mut self, field: &FieldId) {
        self.annotations.remove(field);
        self.affordances.insert(field.clone(), Affordance::Neutral);
    }

    fn annotate(&mut self, annotation: &ErrorAnnotation) {
        self.annotations
            .insert(annotation.field.clone(), annotation.clone());
    }

    fn mark(&mut self, field: &FieldId, affordance: Affordance) {
        self.affordances.insert(field.clone(), affordance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    #[test]
    fn test_annotate_replaces() {
        // GIVEN
        let mut board = AnnotationBoard::new();
        let field = FieldId::new("email");
        board.annotate(&ErrorAnnotation::new(field.clone(), Rule::Required, "first"));

        // WHEN
        board.annotate(&ErrorAnnotation::new(field.clone(), Rule::EmailFormat, "second"));

        // THEN
        assert_eq!(board.len(), 1);
        assert_eq!(board.annotation(&field).unwrap().message, "second");
    }

    #[test]
    fn test_clear_resets_affordance() {
        let mut board = AnnotationBoard::new();
        let field = FieldId::new("name");
        board.mark(&field, Affordance::Invalid);
        board.annotate(&ErrorAnnotation::new(field.clone(), Rule::Required, "x"));

        board.clear(&field);

        assert!(board.is_empty());
        assert_eq!(board.affordance(&field), Affordance::Neutral);
    }
}
