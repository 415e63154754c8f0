use serde::Serialize;

/// The two options of the gender picker. The form always holds exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Display order of the picker (right-to-left page, so female comes first in the DOM)
    pub const ALL: [Gender; 2] = [Gender::Female, Gender::Male];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Identifies one bound form control. The DOM `id` of each input is the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Birthdate,
    AcceptPromotions,
}

impl FieldId {
    /// Required text inputs, in document order (the order native validation reports them)
    pub const REQUIRED: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Birthdate,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirmPassword",
            FieldId::Birthdate => "birthdate",
            FieldId::AcceptPromotions => "acceptPromotions",
        }
    }

    /// ### Returns
    /// Some(field) for a known input id; None otherwise
    pub fn from_dom_id(id: &str) -> Option<FieldId> {
        match id {
            "name" => Some(FieldId::Name),
            "email" => Some(FieldId::Email),
            "password" => Some(FieldId::Password),
            "confirmPassword" => Some(FieldId::ConfirmPassword),
            "birthdate" => Some(FieldId::Birthdate),
            "acceptPromotions" => Some(FieldId::AcceptPromotions),
            _ => None,
        }
    }

    pub fn is_checkbox(self) -> bool {
        matches!(self, FieldId::AcceptPromotions)
    }
}

/// A raw value taken from a change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    /// Checkbox fields take the `checked` flag, every other field takes the string value.
    pub fn from_event(field: FieldId, value: String, checked: bool) -> FieldValue {
        if field.is_checkbox() {
            FieldValue::Checked(checked)
        } else {
            FieldValue::Text(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_ids() {
        let all = [
            FieldId::Name,
            FieldId::Email,
            FieldId::Password,
            FieldId::ConfirmPassword,
            FieldId::Birthdate,
            FieldId::AcceptPromotions,
        ];
        for field in all {
            assert_eq!(FieldId::from_dom_id(field.dom_id()), Some(field));
        }
        assert_eq!(FieldId::from_dom_id("fileInput"), None);
        assert_eq!(FieldId::from_dom_id("confirm_password"), None);
        assert_eq!(FieldId::from_dom_id(""), None);
    }

    #[test]
    fn test_value_from_event() {
        assert_eq!(
            FieldValue::from_event(FieldId::AcceptPromotions, "on".to_string(), true),
            FieldValue::Checked(true)
        );
        assert_eq!(
            FieldValue::from_event(FieldId::Email, "a@b.com".to_string(), false),
            FieldValue::Text("a@b.com".to_string())
        );
        // the checked flag of a text input is meaningless and ignored
        assert_eq!(
            FieldValue::from_event(FieldId::Name, String::new(), true),
            FieldValue::Text(String::new())
        );
    }

    #[test]
    fn test_gender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        assert_eq!(Gender::default(), Gender::Male);
        assert_eq!(Gender::Male.as_str(), "male");
    }
}
