//! Notice Area Component
//!
//! Renders pending notices in WordPress admin-notice style. Each notice
//! dismisses itself after its delay or when closed.

use alliance_core::NoticeAction;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::context::use_admin_context;
use crate::store::{store_dismiss_notice, use_admin_store, AdminStateStoreFields, NoticeEntry, NoticeSource};

#[component]
pub fn NoticeArea() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <div class="s2j-notices" aria-live="polite">
            <For
                each=move || store.notices().get()
                key=|entry| entry.id
                children=move |entry| view! { <NoticeItem entry=entry /> }
            />
        </div>
    }
}

#[component]
fn NoticeItem(entry: NoticeEntry) -> impl IntoView {
    let store = use_admin_store();
    let ctx = use_admin_context();
    let NoticeEntry { id, source, notice } = entry;

    // Settings are saved from the form, not through an editor
    let action = notice
        .action
        .filter(|action| !(*action == NoticeAction::Retry && source == NoticeSource::Settings));

    let run_action = move |action: NoticeAction| {
        store_dismiss_notice(&store, id);
        match action {
            NoticeAction::Retry => spawn_local(async move {
                let retried = match source {
                    NoticeSource::Partners => ctx.partners.retry().await,
                    NoticeSource::RankLabels => ctx.rank_labels.retry().await,
                    NoticeSource::Settings => Ok(()),
                };
                if let Err(err) = retried {
                    warn!(error = %err, "retry failed");
                }
            }),
            NoticeAction::RefreshPage => {
                if let Some(window) = web_sys::window() {
                    if window.location().reload().is_err() {
                        warn!("page reload was refused");
                    }
                }
            }
        }
    };

    view! {
        <div class=format!("notice notice-{} s2j-notice", notice.kind.as_str()) role="alert">
            <p>
                <strong>{notice.title}</strong>
                " "
                {notice.message}
            </p>
            {notice.suggestion.map(|suggestion| view! { <p class="s2j-notice-suggestion">{suggestion}</p> })}
            {action.map(|action| view! {
                <button type="button" class="button button-small" on:click=move |_| run_action(action)>
                    {action.label()}
                </button>
            })}
            <button type="button" class="notice-dismiss" on:click=move |_| store_dismiss_notice(&store, id)>
                <span class="screen-reader-text">"Dismiss this notice."</span>
            </button>
        </div>
    }
}
