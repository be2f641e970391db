//! Media Field Component
//!
//! Shows the attachment behind an id and lets the user change or clear it.

use alliance_core::{MediaInfo, MediaResolver};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::context::use_admin_context;

#[component]
pub fn MediaField(
    #[prop(into)] label: String,
    attachment_id: u32,
    #[prop(into)] on_select: Callback<u32>,
) -> impl IntoView {
    let ctx = use_admin_context();
    let (media, set_media) = signal::<Option<MediaInfo>>(None);
    let (loading, set_loading) = signal(attachment_id > 0);

    if attachment_id > 0 {
        let library = ctx.media.get_value();
        spawn_local(async move {
            match library.resolve(attachment_id).await {
                Ok(found) => set_media.set(found),
                Err(err) => warn!(attachment_id, error = %err, "media lookup failed"),
            }
            set_loading.set(false);
        });
    }

    let preview = move || match media.get() {
        Some(info) if info.is_video() => view! {
            <video class="s2j-media-thumb" src=info.url muted=true preload="metadata"></video>
        }
        .into_any(),
        Some(info) => view! { <img class="s2j-media-thumb" src=info.url alt=info.alt /> }.into_any(),
        None if loading.get() => view! { <span class="spinner is-active"></span> }.into_any(),
        None if attachment_id > 0 => view! {
            <span class="s2j-media-missing">{format!("Attachment #{attachment_id} not found")}</span>
        }
        .into_any(),
        None => view! { <span class="s2j-media-empty">"No media selected"</span> }.into_any(),
    };

    view! {
        <div class="s2j-media-field">
            <span class="s2j-media-label">{label}</span>
            <div class="s2j-media-preview">{preview}</div>
            <input
                type="number"
                min="0"
                class="small-text"
                placeholder="Attachment ID"
                prop:value={move || if attachment_id > 0 { attachment_id.to_string() } else { String::new() }}
                on:change=move |ev| {
                    let id = event_target_value(&ev).trim().parse::<u32>().unwrap_or(0);
                    on_select.run(id);
                }
            />
            <Show when={move || attachment_id > 0}>
                <button type="button" class="button button-link-delete" on:click=move |_| on_select.run(0)>
                    "Remove"
                </button>
            </Show>
        </div>
    }
}
