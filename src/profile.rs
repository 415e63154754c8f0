use crate::form::{FormState, SavedState};
use crate::inputs::{FieldId, FieldValue, Gender};
use std::sync::Arc;

/// Result of pressing the save button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    /// A required text input is empty; nothing was saved
    Blocked(FieldId),
}

/// View model of the profile page: field values, the saved snapshot, the
/// preview image and the UI flags. Every user event maps to exactly one
/// method here; the frontend holds this in a signal and re-derives the view
/// after each call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    form: FormState,
    saved: Option<Arc<SavedState>>,
    preview: Option<Arc<str>>,
    require_message: bool,
    show_password: bool,
    image_uploaded: bool,
}

impl ProfileForm {
    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn saved(&self) -> Option<&SavedState> {
        self.saved.as_deref()
    }

    /// Shared handle to the snapshot; stays pointer-equal until the next save
    pub fn saved_handle(&self) -> Option<Arc<SavedState>> {
        self.saved.clone()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Shared handle to the data URI; cloning it does not copy the image
    pub fn preview_handle(&self) -> Option<Arc<str>> {
        self.preview.clone()
    }

    pub fn require_message(&self) -> bool {
        self.require_message
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn image_uploaded(&self) -> bool {
        self.image_uploaded
    }

    /// Text input or checkbox changed. Editing the name also recomputes the
    /// required-field hint.
    pub fn on_change(&mut self, field: FieldId, value: FieldValue) {
        if let (FieldId::Name, FieldValue::Text(text)) = (field, &value) {
            self.require_message = text.is_empty();
        }
        self.form.set(field, value);
    }

    /// The name input gained focus
    pub fn on_name_focus(&mut self) {
        self.require_message = self.form.name.is_empty();
    }

    pub fn select_gender(&mut self, gender: Gender) {
        self.form.gender = gender;
    }

    /// One flag drives both password inputs, so they are always revealed together.
    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Copy the current fields into the saved snapshot, unless a required
    /// input is empty. Matching passwords are not checked.
    pub fn submit(&mut self) -> SubmitOutcome {
        if let Some(field) = self.form.first_missing_required() {
            return SubmitOutcome::Blocked(field);
        }
        self.saved = Some(Arc::new(SavedState::capture(&self.form)));
        SubmitOutcome::Saved
    }

    /// A file selection happened. The uploaded flag is set before any
    /// reading starts, even when the selection is empty, and never cleared.
    pub fn begin_image_upload(&mut self) {
        self.image_uploaded = true;
    }

    /// A preview read completed. The latest completion wins.
    pub fn apply_preview(&mut self, data_uri: String) {
        self.preview = Some(data_uri.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum NameStep {
        Edit(String),
        Focus,
    }

    fn name_step() -> impl Strategy<Value = NameStep> {
        prop_oneof![
            Just(NameStep::Edit(String::new())),
            "[a-zA-Z ]{0,4}".prop_map(NameStep::Edit),
            Just(NameStep::Focus),
        ]
    }

    fn type_into(profile: &mut ProfileForm, field: FieldId, s: &str) {
        profile.on_change(field, FieldValue::Text(s.to_string()));
    }

    fn fill_all(profile: &mut ProfileForm) {
        type_into(profile, FieldId::Name, "Ali");
        type_into(profile, FieldId::Email, "a@b.com");
        type_into(profile, FieldId::Password, "x");
        type_into(profile, FieldId::ConfirmPassword, "y");
        type_into(profile, FieldId::Birthdate, "1990-01-01");
    }

    #[test]
    fn test_required_hint_follows_name() {
        let mut profile = ProfileForm::default();
        assert!(!profile.require_message());
        // keystroke-by-keystroke: "A", "Al", then backspace down to ""
        for (text, hint) in [("A", false), ("Al", false), ("A", false), ("", true), ("B", false)] {
            type_into(&mut profile, FieldId::Name, text);
            assert_eq!(profile.require_message(), hint, "after typing {text:?}");
        }
    }

    #[test]
    fn test_only_name_drives_hint() {
        let mut profile = ProfileForm::default();
        type_into(&mut profile, FieldId::Email, "");
        assert!(!profile.require_message());
        profile.on_name_focus();
        assert!(profile.require_message());
        type_into(&mut profile, FieldId::Name, "Ali");
        profile.on_name_focus();
        assert!(!profile.require_message());
    }

    #[test]
    fn test_gender_selection_is_idempotent() {
        let mut profile = ProfileForm::default();
        assert_eq!(profile.form().gender, Gender::Male);
        profile.select_gender(Gender::Female);
        profile.select_gender(Gender::Female);
        assert_eq!(profile.form().gender, Gender::Female);
        profile.select_gender(Gender::Male);
        assert_eq!(profile.form().gender, Gender::Male);
    }

    #[test]
    fn test_password_toggle_parity() {
        let mut profile = ProfileForm::default();
        for n in 1..=6 {
            profile.toggle_password_visibility();
            assert_eq!(profile.show_password(), n % 2 == 1);
        }
    }

    #[test]
    fn test_submit_saves_mismatched_passwords() {
        let mut profile = ProfileForm::default();
        fill_all(&mut profile);
        profile.select_gender(Gender::Female);
        profile.on_change(FieldId::AcceptPromotions, FieldValue::Checked(true));
        assert_eq!(profile.submit(), SubmitOutcome::Saved);

        let saved = profile.saved().unwrap().fields();
        assert_eq!(saved.name, "Ali");
        assert_eq!(saved.email, "a@b.com");
        assert_eq!(saved.password, "x");
        assert_eq!(saved.confirm_password, "y");
        assert_eq!(saved.birthdate, "1990-01-01");
        assert_eq!(saved.gender, Gender::Female);
        assert!(saved.accept_promotions);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut profile = ProfileForm::default();
        fill_all(&mut profile);
        profile.submit();
        type_into(&mut profile, FieldId::Name, "Reza");
        assert_eq!(profile.saved().unwrap().fields().name, "Ali");
        assert_eq!(profile.form().name, "Reza");
    }

    #[test]
    fn test_submit_blocked_on_empty_name() {
        let mut profile = ProfileForm::default();
        fill_all(&mut profile);
        type_into(&mut profile, FieldId::Name, "");
        assert_eq!(profile.submit(), SubmitOutcome::Blocked(FieldId::Name));
        assert!(profile.saved().is_none());
    }

    #[test]
    fn test_upload_flag_precedes_preview() {
        let mut profile = ProfileForm::default();
        assert!(!profile.image_uploaded());
        profile.begin_image_upload();
        assert!(profile.image_uploaded());
        assert!(profile.preview().is_none());
        profile.apply_preview("data:image/png;base64,AAAA".to_string());
        assert_eq!(profile.preview(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_upload_flag_is_one_way() {
        let mut profile = ProfileForm::default();
        // empty selection: flag set, no read follows
        profile.begin_image_upload();
        assert!(profile.image_uploaded());
        assert!(profile.preview().is_none());
        profile.begin_image_upload();
        assert!(profile.image_uploaded());
    }

    #[test]
    fn test_saved_handle_survives_edits() {
        let mut profile = ProfileForm::default();
        fill_all(&mut profile);
        profile.submit();
        let before = profile.saved_handle().unwrap();
        type_into(&mut profile, FieldId::Email, "c@d.com");
        profile.toggle_password_visibility();
        assert!(Arc::ptr_eq(&before, &profile.saved_handle().unwrap()));
        profile.submit();
        assert!(!Arc::ptr_eq(&before, &profile.saved_handle().unwrap()));
    }

    proptest! {
        #[test]
        fn prop_hint_shown_iff_name_empty(steps in prop::collection::vec(name_step(), 1..40)) {
            let mut profile = ProfileForm::default();
            for step in steps {
                match step {
                    NameStep::Edit(text) => type_into(&mut profile, FieldId::Name, &text),
                    NameStep::Focus => profile.on_name_focus(),
                }
                prop_assert_eq!(profile.require_message(), profile.form().name.is_empty());
            }
        }

        #[test]
        fn prop_toggle_parity(count in 0..64usize) {
            let mut profile = ProfileForm::default();
            for _ in 0..count {
                profile.toggle_password_visibility();
            }
            prop_assert_eq!(profile.show_password(), count % 2 == 1);
        }
    }
}
