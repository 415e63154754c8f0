//! Text, password and checkbox inputs bound to the profile view model.

use crate::assets::{
    CALENDAR_ICON, REQUIRED_HINT, VISIBILITY_ICON, field_label, field_placeholder,
};
use crate::inputs::{FieldId, FieldValue};
use crate::profile::ProfileForm;
use crate::render::RenderState;
use leptos::ev::Event;
use leptos::logging::warn;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

pub(super) const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700";
const INPUT_CLASS: &str = "mt-1 block w-full h-[50px] px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm text-right";
const PASSWORD_INPUT_CLASS: &str = "block w-full h-[50px] px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm text-right";

/// Route an input/change event to the view model, keyed by the input's DOM id.
fn handle_change(profile: RwSignal<ProfileForm>, ev: &Event) {
    let input = event_target::<HtmlInputElement>(ev);
    let id = input.id();
    let Some(field) = FieldId::from_dom_id(&id) else {
        warn!("change event from unbound input `{id}`");
        return;
    };
    let value = FieldValue::from_event(field, input.value(), input.checked());
    profile.update(|p| p.on_change(field, value));
}

fn text_of(profile: RwSignal<ProfileForm>, field: FieldId) -> impl Fn() -> String {
    move || profile.with(|p| p.form().text(field).unwrap_or_default().to_string())
}

/// Name input with the required-field hint underneath
#[component]
pub fn NameField(profile: RwSignal<ProfileForm>, render: Memo<RenderState>) -> impl IntoView {
    let field = FieldId::Name;
    view! {
        <div class="flex flex-col gap-2 w-[350px]">
            <label for=field.dom_id() class=LABEL_CLASS>
                {field_label(field)}
            </label>
            <input
                type="text"
                id=field.dom_id()
                prop:value=text_of(profile, field)
                on:input=move |ev| handle_change(profile, &ev)
                on:focus=move |_| profile.update(ProfileForm::on_name_focus)
                placeholder=field_placeholder(field)
                required=true
                class=move || render.with(|r| r.name_input_class.clone())
            />
            <Show when=move || render.with(|r| r.show_required_hint)>
                <p class="absolute mt-[90px] text-left text-[11px] text-red-500">{REQUIRED_HINT}</p>
            </Show>
        </div>
    }
}

/// ### Parameters
/// `input_type`: the `type` attribute, e.g. `email`
///
/// `calendar`: draw the calendar glyph inside the input
#[component]
pub fn TextField(
    profile: RwSignal<ProfileForm>,
    field: FieldId,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] calendar: bool,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2 w-[350px]">
            <label for=field.dom_id() class=LABEL_CLASS>
                {field_label(field)}
            </label>
            <div class="relative">
                <input
                    type=input_type
                    id=field.dom_id()
                    prop:value=text_of(profile, field)
                    on:input=move |ev| handle_change(profile, &ev)
                    placeholder=field_placeholder(field)
                    required=true
                    class=INPUT_CLASS
                />
                {calendar
                    .then(|| {
                        view! {
                            <img
                                src=CALENDAR_ICON
                                alt="View calendar"
                                width="22"
                                height="22"
                                class="absolute bottom-3 left-4 cursor-pointer"
                            />
                        }
                    })}
            </div>
        </div>
    }
}

/// Password-type input. Every instance shares the one visibility flag.
#[component]
pub fn PasswordField(
    profile: RwSignal<ProfileForm>,
    render: Memo<RenderState>,
    field: FieldId,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2 w-[350px]">
            <label for=field.dom_id() class=LABEL_CLASS>
                {field_label(field)}
            </label>
            <div class="relative mt-1">
                <input
                    type=move || render.with(|r| r.password_input_type)
                    id=field.dom_id()
                    prop:value=text_of(profile, field)
                    on:input=move |ev| handle_change(profile, &ev)
                    placeholder=field_placeholder(field)
                    required=true
                    class=PASSWORD_INPUT_CLASS
                />
                <img
                    src=VISIBILITY_ICON
                    alt="Toggle password visibility"
                    width="33"
                    height="33"
                    class="absolute bottom-2 left-3 cursor-pointer"
                    on:click=move |_| profile.update(ProfileForm::toggle_password_visibility)
                />
            </div>
        </div>
    }
}

#[component]
pub fn PromotionsCheckbox(profile: RwSignal<ProfileForm>) -> impl IntoView {
    let field = FieldId::AcceptPromotions;
    view! {
        <div class="flex flex-row-reverse gap-2 items-center justify-start">
            <input
                type="checkbox"
                id=field.dom_id()
                prop:checked=move || profile.with(|p| p.form().accept_promotions)
                on:change=move |ev| handle_change(profile, &ev)
                class="h-4 w-4 border-gray-300 rounded cursor-pointer"
            />
            <label class="flex flex-row-reverse items-center gap-3" for=field.dom_id()>
                <span class="ml-2 text-sm text-right text-gray-600">{field_label(field)}</span>
            </label>
        </div>
    }
}
