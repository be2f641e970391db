//! Partner Commands
//!
//! Partners live inside the plugin settings option, so saving them goes
//! through `save-all` together with the display style and ffmpeg path.
//! Only one `save-all` request runs at a time; a second one is refused
//! with `SyncError::Busy` instead of racing the first.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use alliance_core::{Partner, Persistence, Record, SaveReceipt, Settings, SettingsEnvelope, SyncError};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use super::{ApiResponse, RestClient};

#[derive(Serialize)]
struct SaveAllArgs<'a> {
    settings: &'a Settings,
    content_models: &'a [Partner],
}

#[derive(Clone)]
pub struct PartnerEndpoint {
    client: RestClient,
    settings: Rc<RefCell<Settings>>,
    in_flight: Rc<Cell<bool>>,
}

/// Clears the in-flight flag when the request ends, however it ends
struct SaveAllGuard(Rc<Cell<bool>>);

impl Drop for SaveAllGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl PartnerEndpoint {
    pub fn new(client: RestClient) -> Self {
        Self {
            client,
            settings: Rc::new(RefCell::new(Settings::default())),
            in_flight: Rc::new(Cell::new(false)),
        }
    }

    /// Settings as last loaded or saved
    pub fn settings(&self) -> Settings {
        self.settings.borrow().clone()
    }

    pub async fn load_settings(&self) -> Result<Settings, SyncError> {
        let envelope: SettingsEnvelope = self.client.get("settings").await?;
        *self.settings.borrow_mut() = envelope.settings.clone();
        Ok(envelope.settings)
    }

    /// Saves `settings` alongside the given (confirmed) partner list.
    pub async fn save_settings(&self, settings: Settings, partners: &[Partner]) -> Result<SaveReceipt, SyncError> {
        let receipt = self.save_all(&settings, partners).await?;
        info!(display_style = settings.display_style.as_str(), "settings saved");
        *self.settings.borrow_mut() = settings;
        Ok(receipt)
    }

    pub fn is_saving(&self) -> bool {
        self.in_flight.get()
    }

    async fn save_all(&self, settings: &Settings, partners: &[Partner]) -> Result<SaveReceipt, SyncError> {
        if self.in_flight.replace(true) {
            warn!("save-all already in flight");
            return Err(SyncError::Busy);
        }
        let _guard = SaveAllGuard(Rc::clone(&self.in_flight));
        let args = SaveAllArgs {
            settings,
            content_models: partners,
        };
        let response: ApiResponse = self.client.post("save-all", &args).await?;
        response.into_receipt()
    }
}

#[async_trait(?Send)]
impl Persistence<Partner> for PartnerEndpoint {
    async fn load(&self) -> Result<Vec<Partner>, SyncError> {
        self.load_settings().await?;
        let mut partners: Vec<Partner> = self.client.get("content-models").await?;
        for (index, partner) in partners.iter_mut().enumerate() {
            partner.assign_id(index as u32 + 1);
        }
        Ok(partners)
    }

    async fn save(&self, records: &[Partner]) -> Result<SaveReceipt, SyncError> {
        let settings = self.settings();
        self.save_all(&settings, records).await
    }
}
