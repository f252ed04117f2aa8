//! Transient page notifications
//!
//! A [`NoticeSlot`] holds at most one notification. Showing a new one replaces
//! whatever is on screen, there is no queue. Every notice gets a fresh
//! [`NoticeId`] so timers started for an older notice can't touch a newer one.

/// Notification kind
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS modifier class, used as `form-notification {class}`
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NoticeKind::Success => "#4caf50",
            NoticeKind::Error => "#f44336",
        }
    }
}

/// Notification content
#[derive(Clone, Debug, PartialEq, Eq)]
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

/// Identifies one displayed notice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

/// Where a displayed notice is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeStage {
    /// Slid in and waiting out the display window
    Showing,
    /// Playing the reverse slide before removal
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveNotice {
    pub id: NoticeId,
    pub notice: Notice,
    pub stage: NoticeStage,
}

/// Single notification slot
#[derive(Clone, Debug, Default)]
pub struct NoticeSlot {
    current: Option<ActiveNotice>,
    next_id: u64,
}

impl NoticeSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display `notice`, discarding any notice currently shown
    pub fn show(&mut self, notice: Notice) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;

        if let Some(previous) = self.current.replace(ActiveNotice {
            id,
            notice,
            stage: NoticeStage::Showing,
        }) {
            tracing::debug!("Replacing notice {:?}", previous.id);
        }

        id
    }

    pub fn current(&self) -> Option<&ActiveNotice> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Start the exit transition. Returns false if `id` is no longer shown.
    pub fn begin_exit(&mut self, id: NoticeId) -> bool {
        match self.current.as_mut() {
            Some(active) if active.id == id && active.stage == NoticeStage::Showing => {
                active.stage = NoticeStage::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Remove the notice. Returns false if `id` is no longer shown.
    pub fn remove(&mut self, id: NoticeId) -> bool {
        if self.current.as_ref().is_some_and(|active| active.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
