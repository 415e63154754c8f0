use crate::assets::PLACEHOLDER_AVATAR;
use crate::form::SavedState;
use crate::inputs::Gender;
use crate::profile::ProfileForm;
use leptos::logging::warn;
use std::sync::Arc;

const INPUT_BASE_CLASS: &str = "mt-1 block w-full h-[50px] px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:ring-2 focus:outline-none sm:text-sm text-right";
const NAME_RING_OK: &str = "focus:ring-blue-500";
const NAME_RING_REQUIRED: &str = "focus:ring-red-500";

const GENDER_OPTION_CLASS: &str = "flex flex-col justify-center items-center bg-gray-200 cursor-pointer w-[90px] h-[90px] rounded-[15px]";
const GENDER_SELECTED: &str = "ring-2 ring-orange-300";

const UPLOAD_ICON_EMPTY: &str = "absolute top-[115px] ml-[120px]";
const UPLOAD_ICON_UPLOADED: &str = "absolute top-[60px] ml-[160px]";

/// The cheap, per-keystroke part of the view. The avatar image and the saved
/// dump can be large, so they are derived separately by [`avatar_src`] and
/// [`saved_dump`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub show_required_hint: bool,
    pub name_input_class: String,
    pub selected_gender: Gender,
    /// `type` attribute shared by the password and confirm-password inputs
    pub password_input_type: &'static str,
    pub show_avatar_masks: bool,
    pub upload_icon_class: &'static str,
}

impl RenderState {
    pub fn derive(profile: &ProfileForm) -> RenderState {
        let ring = if profile.require_message() {
            NAME_RING_REQUIRED
        } else {
            NAME_RING_OK
        };
        RenderState {
            show_required_hint: profile.require_message(),
            name_input_class: format!("{INPUT_BASE_CLASS} {ring}"),
            selected_gender: profile.form().gender,
            password_input_type: if profile.show_password() {
                "text"
            } else {
                "password"
            },
            show_avatar_masks: !profile.image_uploaded(),
            upload_icon_class: if profile.image_uploaded() {
                UPLOAD_ICON_UPLOADED
            } else {
                UPLOAD_ICON_EMPTY
            },
        }
    }

    pub fn gender_option_class(&self, gender: Gender) -> String {
        if gender == self.selected_gender {
            format!("{GENDER_OPTION_CLASS} {GENDER_SELECTED}")
        } else {
            GENDER_OPTION_CLASS.to_string()
        }
    }
}

/// Preview data URI, or the placeholder before any read has completed.
/// Returns the shared handle, so an unchanged preview compares by pointer.
pub fn avatar_src(profile: &ProfileForm) -> Arc<str> {
    profile
        .preview_handle()
        .unwrap_or_else(|| Arc::from(PLACEHOLDER_AVATAR))
}

pub fn saved_dump(saved: &SavedState) -> Option<String> {
    match saved.dump() {
        Ok(dump) => Some(dump),
        Err(err) => {
            warn!("cannot display saved data: {err}");
            None
        }
    }
}
