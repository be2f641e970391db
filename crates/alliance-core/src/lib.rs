//! Alliance Core
//!
//! Editing model behind the alliance manager admin screens: records,
//! ordered draft lists with stable row numbers, and the controller that
//! saves a whole list at once.

pub mod config;
pub mod domain;
pub mod draft;
pub mod error;
pub mod grouping;
pub mod memory;
pub mod notice;
pub mod slug;
pub mod sync;
pub mod validation;

pub use config::{AdminConfig, ConfigError, UiStrings};
pub use domain::{
    Behavior, DisplayStyle, MediaInfo, MediaResolver, Partner, PartnerChange, RankLabel, RankLabelChange, Record,
    Settings, SettingsEnvelope,
};
pub use draft::{Direction, Edit, OrderedDraftList};
pub use error::{ErrorCategory, SyncError};
pub use notice::{Notice, NoticeAction, NoticeKind, NoticeLog, Notifier};
pub use sync::{Persistence, SaveReceipt, SaveTicket, SyncController, SyncOperation, SyncState};
