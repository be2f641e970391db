//! S2J Alliance Manager Admin Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod logging;
mod store;

use app::{App, StartupError};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Element the plugin's admin page renders for us
const MOUNT_ID: &str = "s2j-alliance-manager-admin";

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(MOUNT_ID))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());

    match (config::read_host_config(), root) {
        (Ok(config), Some(root)) => {
            tracing::info!(api_url = %config.api_url, "mounting admin app");
            leptos::mount::mount_to(root, move || view! { <App config=config.clone() /> }).forget();
        }
        (Ok(config), None) => {
            tracing::warn!(id = MOUNT_ID, "mount element missing, using body");
            mount_to_body(move || view! { <App config=config.clone() /> });
        }
        (Err(error), _) => {
            tracing::error!(error = %error, "invalid host configuration");
            let message = error.to_string();
            mount_to_body(move || view! { <StartupError message=message.clone() /> });
        }
    }
}
