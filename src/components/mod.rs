//! UI Components
//!
//! Reusable Leptos components.

mod content_list;
mod delete_confirm_button;
mod draft_toolbar;
mod media_field;
mod message_modal;
mod notice_area;
mod rank_label_manager;
mod row_actions;
mod settings_form;

pub use content_list::ContentList;
pub use delete_confirm_button::DeleteConfirmButton;
pub use draft_toolbar::DraftToolbar;
pub use media_field::MediaField;
pub use message_modal::MessageModal;
pub use notice_area::NoticeArea;
pub use rank_label_manager::RankLabelManager;
pub use row_actions::RowActions;
pub use settings_form::SettingsForm;
