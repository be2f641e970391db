//! Domain Layer
//!
//! Contains the editable records and the shared record abstraction.
//! Nothing in here talks to the network.

mod record;
mod partner;
mod rank_label;
mod settings;
mod media;
mod wire;

pub use record::{Record, SENTINEL_ID};
pub use partner::{Behavior, Partner, PartnerChange, DEFAULT_RANK};
pub use rank_label::{RankLabel, RankLabelChange};
pub use settings::{DisplayStyle, Settings, SettingsEnvelope};
pub use media::{MediaInfo, MediaResolver};
