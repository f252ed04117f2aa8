//! Cancellable one-shot timers
//!
//! A [`TimerSlot`] holds at most one pending timeout. Scheduling a new one
//! drops, and so cancels, the previous. On the server every call is a no-op.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct TimerSlot {
    #[cfg(feature = "hydrate")]
    handle: StoredValue<Option<gloo_timers::callback::Timeout>, LocalStorage>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            handle: StoredValue::new_local(None),
        }
    }

    /// Run `callback` after `millis`, replacing any pending timeout
    pub fn schedule(&self, millis: u32, callback: impl FnOnce() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            let timeout = gloo_timers::callback::Timeout::new(millis, callback);
            self.handle.set_value(Some(timeout));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (millis, callback);
        }
    }

    /// Cancel the pending timeout, if any
    pub fn cancel(&self) {
        #[cfg(feature = "hydrate")]
        {
            self.handle.set_value(None);
        }
    }
}

impl Default for TimerSlot {
    fn default() -> Self {
        Self::new()
    }
}
