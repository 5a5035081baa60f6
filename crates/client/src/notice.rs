//! Transient user-visible messages.
//!
//! At most one notice is visible. Showing a notice starts a timer that hides
//! it after the configured duration; showing another one cancels that timer
//! and starts a fresh one.
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::Serialize;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    notice: Option<Notice>,
}

#[derive(Debug)]
pub struct NoticeBoard {
    slot: Arc<Mutex<Slot>>,
    timer: Option<JoinHandle<()>>,
    duration: Duration,
}

impl NoticeBoard {
    pub fn new(duration: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            timer: None,
            duration,
        }
    }

    /// Replace the visible notice and restart the hide timer. Outside a
    /// tokio runtime the notice stays until the next one replaces it.
    pub fn show(&mut self, notice: Notice) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        let generation = {
            let mut slot = lock(&self.slot);
            slot.generation += 1;
            slot.notice = Some(notice);
            slot.generation
        };

        let Ok(runtime) = Handle::try_current() else {
            debug!("no runtime, notice will not auto-hide");
            return;
        };
        let slot = Arc::clone(&self.slot);
        let duration = self.duration;
        self.timer = Some(runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            let mut slot = lock(&slot);
            if slot.generation == generation {
                slot.notice = None;
            }
        }));
    }

    pub fn current(&self) -> Option<Notice> {
        lock(&self.slot).notice.clone()
    }

    pub fn clear(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        let mut slot = lock(&self.slot);
        slot.generation += 1;
        slot.notice = None;
    }
}

impl Drop for NoticeBoard {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
