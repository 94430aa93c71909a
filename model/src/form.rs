//! Forms: ordered collections of fields.

use serde::{Deserialize, Serialize};

use crate::{Field, FieldId, FormId, ModelError, ModelResult};

/// An ordered collection of fields considered together for validity.
///
/// Order only matters for display and error placement. Field ids are unique
/// within a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    id: FormId,
    fields: Vec<Field>,
}

impl Form {
    /// Create an empty form.
    pub fn new(id: impl Into<FormId>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    /// Create a form from a list of fields, rejecting duplicate names.
    pub fn with_fields(
        id: impl Into<FormId>,
        fields: impl IntoIterator<Item = Field>,
    ) -> ModelResult<Self> {
        let mut form = Self::new(id);
        for field in fields {
            form.push(field)?;
        }
        Ok(form)
    }

    /// Rebuild a deserialized form through the same checks as `with_fields`.
    pub fn checked(self) -> ModelResult<Self> {
        Self::with_fields(self.id, self.fields)
    }

    /// Append a field.
    pub fn push(&mut self, field: Field) -> ModelResult<()> {
        if field.id.as_str().is_empty() {
            return Err(ModelError::EmptyFieldName);
        }
        if self.contains(&field.id) {
            return Err(ModelError::duplicate_field(&self.id, &field.id));
        }
        self.fields.push(field);
        Ok(())
    }

    /// The form's id.
    pub fn id(&self) -> &FormId {
        &self.id
    }

    /// All fields in document order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns true if a field with this id exists.
    pub fn contains(&self, id: &FieldId) -> bool {
        self.fields.iter().any(|f| &f.id == id)
    }

    /// Get a field by id.
    pub fn field(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| &f.id == id)
    }

    /// Get a mutable field by id.
    pub fn field_mut(&mut self, id: &FieldId) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| &f.id == id)
    }

    /// Replace a field's value.
    pub fn set_value(&mut self, id: &FieldId, value: impl Into<String>) -> ModelResult<()> {
        let form_id = self.id.clone();
        let field = self
            .field_mut(id)
            .ok_or_else(|| ModelError::unknown_field(&form_id, id))?;
        field.value = value.into();
        Ok(())
    }

    /// Clear every value, like the form element's `reset()`.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a Form {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_form() -> Form {
        Form::with_fields(
            "contact-form",
            [
                Field::text("name").required(),
                Field::email("email").required(),
                Field::telephone("phone"),
                Field::text("message").required(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_duplicate_field_rejected() {
        // GIVEN
        let mut form = contact_form();

        // WHEN
        let result = form.push(Field::text("name"));

        // THEN
        assert_eq!(
            result,
            Err(ModelError::DuplicateField {
                form: FormId::new("contact-form"),
                field: FieldId::new("name"),
            })
        );
        assert_eq!(form.len(), 4);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut form = Form::new("f");
        assert_eq!(form.push(Field::text("")), Err(ModelError::EmptyFieldName));
    }

    #[test]
    fn test_set_value_and_reset() {
        // GIVEN
        let mut form = contact_form();
        form.set_value(&"email".into(), "a@b.com").unwrap();

        // THEN
        assert_eq!(form.field(&"email".into()).unwrap().value, "a@b.com");

        // WHEN
        form.reset();

        // THEN
        assert!(form.fields().iter().all(|f| f.value.is_empty()));
    }

    #[test]
    fn test_set_value_unknown_field() {
        let mut form = contact_form();
        let err = form.set_value(&"fax".into(), "x").unwrap_err();
        assert_eq!(err.to_string(), "Unknown field fax in form #contact-form");
    }

    #[test]
    fn test_checked_rejects_duplicates_from_json() {
        let form = Form {
            id: FormId::new("f"),
            fields: vec![Field::text("a"), Field::text("a")],
        };
        assert!(form.checked().is_err());
    }
}
