//! Settings Form Component
//!
//! Display style selection plus a preview of how the confirmed partners
//! group under the rank labels on the front page.

use alliance_core::grouping::group_by_rank;
use alliance_core::{DisplayStyle, Notice, Notifier, Partner, Record, Settings};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_admin_context;
use crate::store::{store_set_display_style, use_admin_store, AdminStateStoreFields, NoticeSource, StoreNotifier};

#[component]
pub fn SettingsForm() -> impl IntoView {
    let ctx = use_admin_context();
    let store = use_admin_store();
    let notifier = StoreNotifier::new(store, NoticeSource::Settings);
    let saving = ctx.settings_saving;

    // Partners go out as last confirmed; their draft stays pending
    let save = move |_| {
        let endpoint = ctx.partner_endpoint.get_value();
        let settings = Settings {
            display_style: store.display_style().get_untracked(),
            ..endpoint.settings()
        };
        let partners = ctx.partners.confirmed();
        saving.set(true);
        spawn_local(async move {
            match endpoint.save_settings(settings, &partners).await {
                Ok(receipt) => notifier.notify(Notice::success(
                    receipt.message.unwrap_or_else(|| Partner::SAVED_MESSAGE.to_string()),
                )),
                Err(err) => notifier.notify(Notice::from_error(&err)),
            }
            saving.set(false);
        });
    };

    let styles = DisplayStyle::ALL
        .into_iter()
        .map(|style| {
            view! {
                <label class="s2j-style-option">
                    <input
                        type="radio"
                        name="s2j-display-style"
                        value=style.as_str()
                        prop:checked=move || store.display_style().get() == style
                        on:change=move |_| store_set_display_style(&store, style)
                    />
                    <strong>{style.label()}</strong>
                    <span class="description">{style.description()}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="s2j-settings-form">
            <h2>"Display Settings"</h2>
            <fieldset class="s2j-style-options">{styles}</fieldset>
            <button
                type="button"
                class="button button-primary"
                disabled=move || ctx.save_all_busy()
                on:click=save
            >
                {move || if saving.get() { "Saving…" } else { "Save Settings" }}
            </button>
            <RankPreview />
        </div>
    }
}

#[component]
fn RankPreview() -> impl IntoView {
    let ctx = use_admin_context();
    let store = use_admin_store();

    let groups = move || {
        let partners = ctx.partners.confirmed();
        let labels = store.rank_labels().get();
        let groups = group_by_rank(&partners, &labels);
        if groups.is_empty() {
            return view! {
                <p class="description">"Add rank labels to group partners on the front page."</p>
            }
            .into_any();
        }
        let rendered = groups
            .into_iter()
            .map(|group| {
                let placeholder = group.is_placeholder();
                let summary = if placeholder {
                    "No partners shown yet".to_string()
                } else {
                    format!("{} partner(s)", group.partners.len())
                };
                view! {
                    <li class="s2j-rank-group" class:s2j-placeholder=placeholder>
                        <strong>{group.label.title.clone()}</strong>
                        " "
                        <span class="description">{summary}</span>
                    </li>
                }
            })
            .collect_view();
        view! { <ul class="s2j-rank-preview-list">{rendered}</ul> }.into_any()
    };

    view! {
        <div class="s2j-rank-preview">
            <h3>"Front Page Preview"</h3>
            {groups}
        </div>
    }
}
