use super::fields::LABEL_CLASS;
use crate::assets::{GENDER_LABEL, gender_alt, gender_icon, gender_label};
use crate::inputs::Gender;
use crate::profile::ProfileForm;
use crate::render::RenderState;
use leptos::prelude::*;

/// Two clickable tiles; the one matching the current gender gets a ring.
#[component]
pub fn GenderPicker(profile: RwSignal<ProfileForm>, render: Memo<RenderState>) -> impl IntoView {
    view! {
        <div class="mb-4">
            <label class=LABEL_CLASS>{GENDER_LABEL}</label>
            <div class="flex justify-center gap-10 mt-2">
                {Gender::ALL
                    .into_iter()
                    .map(move |gender| {
                        view! {
                            <div
                                class=move || render.with(|r| r.gender_option_class(gender))
                                on:click=move |_| profile.update(|p| p.select_gender(gender))
                            >
                                <img
                                    src=gender_icon(gender)
                                    alt=gender_alt(gender)
                                    width="50"
                                    height="50"
                                />
                                <p>{gender_label(gender)}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
