use crate::assets::UPLOAD_ICON;
use crate::preview::{finish_preview, select_image, spawn_preview};
use crate::profile::ProfileForm;
use crate::render::RenderState;
use leptos::ev::{Event, MouseEvent};
use leptos::html::Input;
use leptos::logging::log;
use leptos::prelude::*;
use std::sync::Arc;
use web_sys::HtmlInputElement;

/// Profile picture with the upload glyph. Clicking it opens the hidden file
/// picker; the chosen image replaces the placeholder once it has been read.
#[component]
pub fn Avatar(
    profile: RwSignal<ProfileForm>,
    render: Memo<RenderState>,
    avatar: Memo<Arc<str>>,
) -> impl IntoView {
    let file_input = NodeRef::<Input>::new();

    let open_picker = move |_: MouseEvent| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_select = move |ev: Event| {
        let file = event_target::<HtmlInputElement>(&ev)
            .files()
            .and_then(|files| files.get(0));
        let Some(pending) = profile.try_update(|p| select_image(p, file)).flatten() else {
            log!("file picker closed without a selection");
            return;
        };
        let file = pending.source();
        log!(
            "selected `{}` ({} bytes, {:?})",
            file.name(),
            file.size(),
            file.type_()
        );
        spawn_preview(pending, move |result| {
            if profile.try_update(|p| finish_preview(p, result)).is_none() {
                log!("preview read finished after the page was unmounted");
            }
        });
    };

    view! {
        <div class="flex justify-center mb-6 cursor-pointer relative" on:click=open_picker>
            <Show when=move || render.with(|r| r.show_avatar_masks)>
                <div class="absolute w-[60px] rounded-full mt-[20px] h-[60px] bg-white"></div>
                <div class="absolute w-[120px] rounded-full mt-[90px] h-[160px] bg-white"></div>
            </Show>
            <img
                src=move || avatar.get().to_string()
                alt="Profile Placeholder"
                width="140"
                height="140"
            />
            <img
                src=UPLOAD_ICON
                alt="Upload Icon"
                width="30"
                height="30"
                class=move || render.with(|r| r.upload_icon_class)
            />
        </div>
        <input
            type="file"
            id="fileInput"
            accept="image/*"
            style="display: none"
            node_ref=file_input
            on:change=on_select
        />
    }
}
