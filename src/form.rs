use crate::inputs::{FieldId, FieldValue, Gender};
use leptos::logging::warn;
use serde::Serialize;

/// The live, editable record of every field on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub birthdate: String,
    pub gender: Gender,
    pub accept_promotions: bool,
}

impl FormState {
    /// Merge a single-field update into the record.
    ///
    /// A value of the wrong kind for the field (text into the checkbox, or a
    /// checked flag into a text input) is dropped.
    pub fn set(&mut self, field: FieldId, value: FieldValue) {
        match (field, value) {
            (FieldId::AcceptPromotions, FieldValue::Checked(checked)) => {
                self.accept_promotions = checked
            }
            (FieldId::AcceptPromotions, FieldValue::Text(text)) => {
                warn!("ignoring text {text:?} for checkbox field");
            }
            (field, FieldValue::Text(text)) => {
                if let Some(slot) = self.text_mut(field) {
                    *slot = text;
                }
            }
            (field, FieldValue::Checked(_)) => {
                warn!("ignoring checked flag for text field `{}`", field.dom_id());
            }
        }
    }

    /// ### Returns
    /// The value of a text field; None for the checkbox
    pub fn text(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::Name => Some(&self.name),
            FieldId::Email => Some(&self.email),
            FieldId::Password => Some(&self.password),
            FieldId::ConfirmPassword => Some(&self.confirm_password),
            FieldId::Birthdate => Some(&self.birthdate),
            FieldId::AcceptPromotions => None,
        }
    }

    fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::Name => Some(&mut self.name),
            FieldId::Email => Some(&mut self.email),
            FieldId::Password => Some(&mut self.password),
            FieldId::ConfirmPassword => Some(&mut self.confirm_password),
            FieldId::Birthdate => Some(&mut self.birthdate),
            FieldId::AcceptPromotions => None,
        }
    }

    /// The first required text input left empty, in document order.
    pub fn first_missing_required(&self) -> Option<FieldId> {
        FieldId::REQUIRED
            .into_iter()
            .find(|field| self.text(*field).is_some_and(str::is_empty))
    }
}

/// Snapshot of the form captured on submit. Never edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedState(FormState);

impl SavedState {
    pub fn capture(form: &FormState) -> SavedState {
        SavedState(form.clone())
    }

    pub fn fields(&self) -> &FormState {
        &self.0
    }

    /// Pretty-printed JSON (two-space indent) for the saved-data panel
    pub fn dump(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.0)
    }
}
