//! Notification toast
//!
//! Shows one toast at a time in the top right corner. A new toast replaces
//! the current one immediately; each toast slides out and removes itself,
//! keyframes included, once its display window is over.

use leptos::prelude::*;

use crate::core::config::NOTICE_TRANSITION_MS;
use crate::core::notice::{ActiveNotice, Notice, NoticeId, NoticeKind, NoticeSlot, NoticeStage};
use crate::ui::timers::TimerSlot;

const SLIDE_IN_KEYFRAMES: &str = r#"
@keyframes slideIn {
    from {
        transform: translateX(400px);
        opacity: 0;
    }
    to {
        transform: translateX(0);
        opacity: 1;
    }
}
"#;

/// Notification context for showing toasts from any component
#[derive(Clone, Copy)]
pub struct NoticeContext {
    slot: RwSignal<NoticeSlot>,
    exit_timer: TimerSlot,
    removal_timer: TimerSlot,
    display_ms: u32,
}

impl NoticeContext {
    /// Show `notice`, replacing the current one
    pub fn show(&self, notice: Notice) {
        let Some(id) = self.slot.try_update(|slot| slot.show(notice)) else {
            return;
        };

        // the replaced toast's pending removal no longer applies
        self.removal_timer.cancel();

        let ctx = *self;
        self.exit_timer.schedule(self.display_ms, move || ctx.begin_exit(id));
    }

    /// Remove the toast right away
    pub fn dismiss(&self, id: NoticeId) {
        self.slot.update(|slot| {
            slot.remove(id);
        });
    }

    pub fn current(&self) -> Option<ActiveNotice> {
        self.slot.with(|slot| slot.current().cloned())
    }

    fn begin_exit(&self, id: NoticeId) {
        let leaving = self
            .slot
            .try_update(|slot| slot.begin_exit(id))
            .unwrap_or(false);

        if leaving {
            let ctx = *self;
            self.removal_timer
                .schedule(NOTICE_TRANSITION_MS, move || ctx.dismiss(id));
        }
    }
}

/// Provide the notification context to the application
pub fn provide_notice_context(display_ms: u32) -> NoticeContext {
    let ctx = NoticeContext {
        slot: RwSignal::new(NoticeSlot::new()),
        exit_timer: TimerSlot::new(),
        removal_timer: TimerSlot::new(),
        display_ms,
    };
    provide_context(ctx);
    ctx
}

/// Use notification context from anywhere in the component tree
pub fn use_notice_context() -> NoticeContext {
    use_context::<NoticeContext>().expect("NoticeContext should be provided")
}

/// Renders the current toast, if any. Place once per page.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let notices = use_notice_context();

    view! {
        {move || notices.current().map(|active| view! { <NoticeToast active=active notices=notices /> })}
    }
}

#[component]
fn NoticeToast(active: ActiveNotice, notices: NoticeContext) -> impl IntoView {
    let id = active.id;
    let kind = active.notice.kind;

    let role = match kind {
        NoticeKind::Success => "status",
        NoticeKind::Error => "alert",
    };

    let animation = match active.stage {
        NoticeStage::Showing => "slideIn 0.3s ease",
        NoticeStage::Leaving => "slideIn 0.3s ease reverse",
    };

    let style = format!(
        "position: fixed; top: 100px; right: 20px; padding: 15px 25px; \
         background-color: {}; color: white; border-radius: 5px; \
         box-shadow: 0 4px 15px rgba(0, 0, 0, 0.3); z-index: 10000; \
         animation: {}; max-width: 400px; font-weight: 500; \
         display: flex; align-items: flex-start; gap: 12px;",
        kind.background(),
        animation
    );

    view! {
        <style>{SLIDE_IN_KEYFRAMES}</style>
        <div
            class=format!("form-notification {}", kind.class())
            role=role
            style=style
        >
            <span class="form-notification-message">{active.notice.message}</span>
            <button
                type="button"
                class="form-notification-close"
                aria-label="Dismiss notification"
                on:click=move |_| notices.dismiss(id)
            >
                "×"
            </button>
        </div>
    }
}
