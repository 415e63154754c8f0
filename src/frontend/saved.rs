use crate::assets::SAVED_DATA_HEADING;
use crate::form::SavedState;
use crate::render::saved_dump;
use leptos::prelude::*;
use std::sync::Arc;

/// JSON dump of the last saved snapshot; absent until the first save.
/// Only re-rendered when a new snapshot is taken.
#[component]
pub fn SavedPanel(saved: Memo<Option<Arc<SavedState>>>) -> impl IntoView {
    view! {
        <Show when=move || saved.with(Option::is_some)>
            <div class="absolute top-0 left-0 p-4 bg-gray-100 rounded-lg shadow-sm">
                <h2 class="text-lg font-medium mb-2">{SAVED_DATA_HEADING}</h2>
                <pre class="text-sm">
                    {move || {
                        saved.with(|s| s.as_deref().and_then(saved_dump).unwrap_or_default())
                    }}
                </pre>
            </div>
        </Show>
    }
}
