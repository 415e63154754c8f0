//! This module contains the frontend components for the profile page.
use crate::assets::SAVE_LABEL;
use crate::inputs::FieldId;
use crate::profile::{ProfileForm, SubmitOutcome};
use crate::render::{RenderState, avatar_src};
use leptos::ev::SubmitEvent;
use leptos::logging::{log, warn};
use leptos::prelude::*;

mod avatar;
mod fields;
mod gender;
mod saved;

use avatar::Avatar;
use fields::{NameField, PasswordField, PromotionsCheckbox, TextField};
use gender::GenderPicker;
use saved::SavedPanel;

const FORM_ID: &str = "profileForm";

#[component]
pub fn App() -> impl IntoView {
    let profile = RwSignal::new(ProfileForm::default());
    // Every write to `profile` re-derives the view state. The avatar and the
    // snapshot are shared handles, so keystrokes leave those two memos unchanged.
    let render = Memo::new(move |_| profile.with(RenderState::derive));
    let avatar = Memo::new(move |_| profile.with(avatar_src));
    let saved = Memo::new(move |_| profile.with(ProfileForm::saved_handle));

    // The browser runs its required-field check before this fires; the view
    // model repeats the check in case the event was dispatched by script.
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match profile.try_update(ProfileForm::submit) {
            Some(SubmitOutcome::Saved) => log!("profile saved"),
            Some(SubmitOutcome::Blocked(field)) => {
                warn!("not saved: `{}` is required", field.dom_id())
            }
            None => {}
        }
    };

    view! {
        <div class="flex flex-col justify-center items-center font-vazir h-screen w-screen bg-white">
            <Avatar profile render avatar />
            <form
                id=FORM_ID
                on:submit=on_submit
                class="z-50 flex flex-row-reverse w-full h-3/5 text-right items-center justify-center gap-[180px]"
            >
                <div class="flex flex-col gap-7">
                    <NameField profile render />
                    <TextField profile field=FieldId::Birthdate calendar=true />
                    <GenderPicker profile render />
                </div>
                <div class="flex flex-col gap-7">
                    <TextField profile field=FieldId::Email input_type="email" />
                    <PasswordField profile render field=FieldId::Password />
                    <PasswordField profile render field=FieldId::ConfirmPassword />
                    <PromotionsCheckbox profile />
                </div>
            </form>
            <button
                type="submit"
                form=FORM_ID
                class="w-[320px] h-[50px] py-2 px-4 bg-cyan-600 text-white font-semibold rounded-md shadow-sm hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500"
            >
                {SAVE_LABEL}
            </button>
            <SavedPanel saved />
        </div>
    }
}
