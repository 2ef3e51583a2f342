use super::entity::{Notice, Severity};

/// User-visible notice sink (dialogs/toasts on the client).
#[cfg_attr(test, mockall::automock)]
pub trait NoticeChannel: Send + Sync {
    fn notify(&self, severity: Severity, title: &str, message: &str) -> Notice;
}
