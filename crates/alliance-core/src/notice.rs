//! User-visible notices
//!
//! Exactly one notice is produced for every save attempt. Success notices
//! dismiss after 5 seconds, error notices after 10.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::error::SyncError;
use crate::validation::summarize;

pub const SUCCESS_DISMISS_AFTER: Duration = Duration::from_secs(5);
pub const ERROR_DISMISS_AFTER: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// Follow-up offered next to an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeAction {
    /// Run the save again; the draft is still there
    Retry,
    /// Reload the page
    RefreshPage,
}

impl NoticeAction {
    pub fn label(&self) -> &'static str {
        match self {
            NoticeAction::Retry => "Retry",
            NoticeAction::RefreshPage => "Refresh Page",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    pub suggestion: Option<String>,
    pub action: Option<NoticeAction>,
    pub dismiss_after: Duration,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Saved".to_string(),
            message: message.into(),
            suggestion: None,
            action: None,
            dismiss_after: SUCCESS_DISMISS_AFTER,
        }
    }

    fn error(title: &str, message: impl Into<String>, suggestion: Option<&str>, action: Option<NoticeAction>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.to_string(),
            message: message.into(),
            suggestion: suggestion.map(str::to_string),
            action,
            dismiss_after: ERROR_DISMISS_AFTER,
        }
    }

    pub fn from_error(err: &SyncError) -> Self {
        match err {
            SyncError::Validation(issues) => {
                let message = if issues.is_empty() {
                    "Please check your input and try again.".to_string()
                } else {
                    summarize(issues)
                };
                Self::error(
                    "Validation Error",
                    message,
                    Some("Review the highlighted fields and correct any errors."),
                    None,
                )
            }
            SyncError::Network(_) => Self::error(
                "Connection Error",
                "Unable to connect to the server. Please check your internet connection and try again.",
                Some("Check your internet connection, then retry. Your unsaved changes are kept."),
                Some(NoticeAction::Retry),
            ),
            SyncError::Permission { status: 401 } => Self::error(
                "Authentication Required",
                "You need to log in again to continue.",
                Some("Please refresh the page and log in again."),
                Some(NoticeAction::RefreshPage),
            ),
            SyncError::Permission { .. } => Self::error(
                "Access Denied",
                "You do not have permission to perform this action.",
                Some("Contact your administrator if you believe this is an error."),
                None,
            ),
            SyncError::NotFound(_) => Self::error(
                "Not Found",
                "The requested resource was not found.",
                Some("The item may have been deleted. Please refresh the page."),
                Some(NoticeAction::RefreshPage),
            ),
            SyncError::Server { message, .. } => Self::error(
                "Server Error",
                message.clone(),
                Some("Please try again. If the problem persists, contact your administrator."),
                Some(NoticeAction::Retry),
            ),
            SyncError::Busy => Self::error(
                "Save In Progress",
                "Your previous changes are still being saved.",
                Some("Wait for the current save to finish, then try again."),
                None,
            ),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Receives notices produced by a sync controller
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}

/// In-memory notifier that keeps every notice; clones share the log.
#[derive(Debug, Clone, Default)]
pub struct NoticeLog {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.notices.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.borrow().is_empty()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }

    pub fn clear(&self) {
        self.notices.borrow_mut().clear();
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Rule, ValidationIssue};

    #[test]
    fn test_dismiss_delays() {
        assert_eq!(Notice::success("ok").dismiss_after, Duration::from_secs(5));
        let notice = Notice::from_error(&SyncError::Network("refused".to_string()));
        assert_eq!(notice.dismiss_after, Duration::from_secs(10));
        assert_eq!(notice.action, Some(NoticeAction::Retry));
    }

    #[test]
    fn test_each_category_has_distinct_title() {
        let errors = [
            SyncError::Validation(vec![ValidationIssue::new(0, Rule::TitleRequired)]),
            SyncError::Network("down".to_string()),
            SyncError::Permission { status: 403 },
            SyncError::NotFound("gone".to_string()),
            SyncError::Server {
                status: Some(500),
                message: "boom".to_string(),
            },
        ];
        let mut titles: Vec<String> = errors.iter().map(|e| Notice::from_error(e).title).collect();
        titles.dedup();
        assert_eq!(titles.len(), errors.len());
    }

    #[test]
    fn test_validation_notice_lists_rules() {
        let notice = Notice::from_error(&SyncError::Validation(vec![ValidationIssue::new(0, Rule::TitleRequired)]));
        assert_eq!(notice.message, "Row #1: Title is required.");
        assert!(notice.is_error());
    }

    #[test]
    fn test_unauthenticated_asks_for_refresh() {
        let notice = Notice::from_error(&SyncError::Permission { status: 401 });
        assert_eq!(notice.title, "Authentication Required");
        assert_eq!(notice.action, Some(NoticeAction::RefreshPage));
    }

    #[test]
    fn test_notice_log_shares_entries() {
        let log = NoticeLog::new();
        let shared = log.clone();
        shared.notify(Notice::success("Rank labels saved successfully."));
        assert_eq!(log.len(), 1);
        assert_eq!(log.last().map(|n| n.kind), Some(NoticeKind::Success));
    }
}
