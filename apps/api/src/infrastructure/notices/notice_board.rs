use crate::domain::notice::channel::NoticeChannel;
use crate::domain::notice::entity::{Notice, Severity};
use crate::infrastructure::feed::{self, FeedEvent, FeedSender};
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

/// Keeps the most recent notices and pushes each new one to feed subscribers.
pub struct NoticeBoard {
    history: Mutex<VecDeque<Notice>>,
    limit: usize,
    feed: FeedSender,
}

impl NoticeBoard {
    pub fn new(limit: usize, feed: FeedSender) -> Self {
        Self {
            history: Mutex::new(VecDeque::with_capacity(limit)),
            limit: limit.max(1),
            feed,
        }
    }

    /// Oldest first.
    pub fn recent(&self) -> Vec<Notice> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }
}

impl NoticeChannel for NoticeBoard {
    fn notify(&self, severity: Severity, title: &str, message: &str) -> Notice {
        let notice = Notice::new(severity, title, message);
        match severity {
            Severity::Error => tracing::warn!(title, message, "error notice raised"),
            Severity::Success => tracing::info!(title, message, "notice raised"),
        }

        {
            let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
            history.push_back(notice.clone());
            while history.len() > self.limit {
                history.pop_front();
            }
        }

        feed::publish(&self.feed, &FeedEvent::Notice { notice: &notice });
        notice
    }
}
