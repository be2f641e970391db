//! S2J Alliance Manager Admin App
//!
//! Settings, rank labels and the partner list, stacked in one admin page.

use alliance_core::AdminConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tracing::{info, warn};

use crate::commands::{MediaLibrary, PartnerEndpoint, RankLabelEndpoint, RestClient};
use crate::components::{ContentList, NoticeArea, RankLabelManager, SettingsForm};
use crate::context::AdminContext;
use crate::store::{store_set_display_style, store_set_rank_labels, AdminState, NoticeSource, StoreNotifier};

#[component]
pub fn App(config: AdminConfig) -> impl IntoView {
    let store = Store::new(AdminState::default());
    provide_context(store);
    provide_context(config.strings.clone());

    let client = RestClient::new(config);
    let ctx = AdminContext::new(
        PartnerEndpoint::new(client.clone()),
        RankLabelEndpoint::new(client.clone()),
        MediaLibrary::new(client),
        (
            StoreNotifier::new(store, NoticeSource::Partners),
            StoreNotifier::new(store, NoticeSource::RankLabels),
        ),
    );
    provide_context(ctx);

    // Rank labels first so the partner rank selector has its options
    spawn_local(async move {
        if let Err(err) = ctx.rank_labels.load().await {
            warn!(error = %err, "rank labels failed to load");
        }
        match ctx.partners.load().await {
            Ok(()) => {
                let settings = ctx.partner_endpoint.get_value().settings();
                store_set_display_style(&store, settings.display_style);
                info!(partners = ctx.partners.len(), "admin data loaded");
            }
            Err(err) => warn!(error = %err, "partners failed to load"),
        }
    });

    Effect::new(move |_| {
        store_set_rank_labels(&store, ctx.rank_labels.confirmed());
    });

    view! {
        <div class="wrap s2j-alliance-manager">
            <h1>"S2J Alliance Manager"</h1>
            <NoticeArea />
            <SettingsForm />
            <RankLabelManager />
            <ContentList />
        </div>
    }
}

/// Rendered instead of the app when the host page sent no usable config
#[component]
pub fn StartupError(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="notice notice-error">
            <p>
                <strong>"S2J Alliance Manager could not start. "</strong>
                {message}
            </p>
            <p>"Reload the page. If the problem persists, reactivate the plugin."</p>
        </div>
    }
}
