//! Contact form component
//!
//! Wires the form inputs and submit button to a [`SubmissionController`].
//! The delivery call runs in a local task; its settlement and the cooldown
//! that follows are dropped when a newer attempt has started.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::contact::{
    AttemptToken, ContactFields, FetchDelivery, SubmissionController, dispatch,
};
use crate::ui::common::{FormField, TextAreaField};
use crate::ui::notifications::use_notice_context;
use crate::ui::site_config::use_site_config;
use crate::ui::timers::TimerSlot;

pub const SUBMIT_LABEL: &str = "Send Message";

/// Signals backing the four inputs
#[derive(Clone, Copy)]
struct FieldSignals {
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    message: RwSignal<String>,
}

impl FieldSignals {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
        }
    }

    fn snapshot(&self) -> ContactFields {
        ContactFields {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            message: self.message.get_untracked(),
        }
    }

    fn clear(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.phone.set(String::new());
        self.message.set(String::new());
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = use_site_config();
    let notices = use_notice_context();

    let controller = SubmissionController::new(&config, SUBMIT_LABEL);
    if let Err(err) = controller.endpoint() {
        tracing::warn!("Contact form endpoint unusable: {}", err);
    }
    let controller = RwSignal::new(controller);
    let fields = FieldSignals::new();
    let cooldown = TimerSlot::new();

    let delivery = FetchDelivery::new(config.delivery_mode);
    let cooldown_ms = config.cooldown_ms;

    let recover_after_cooldown = move |token: AttemptToken| {
        cooldown.schedule(cooldown_ms, move || {
            controller.update(|c| {
                c.recover(token);
            });
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // a new attempt supersedes the previous cooldown
        cooldown.cancel();

        let begun = controller.try_update(|c| c.begin(fields.snapshot(), chrono::Local::now()));

        let pending = match begun {
            Some(Ok(pending)) => pending,
            Some(Err(err)) => {
                if err.is_configuration() {
                    tracing::warn!("Contact form not submitted: {}", err);
                } else {
                    tracing::error!("Contact form not submitted: {}", err);
                }
                notices.show(err.notice());
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let result = dispatch(&delivery, &pending).await;

            let Some(Some(settlement)) =
                controller.try_update(|c| c.settle(pending.token, result))
            else {
                return;
            };

            if settlement.clear_form {
                fields.clear();
            }
            notices.show(settlement.notice);
            recover_after_cooldown(settlement.token);
        });
    };

    let button = move || controller.with(|c| c.button().clone());

    view! {
        <form class="contact-form" id="contactForm" on:submit=on_submit>
            <FormField name="name" label="Name" required=true placeholder="Your name" value=fields.name />
            <FormField
                name="email"
                label="Email"
                required=true
                input_type="email"
                placeholder="you@example.com"
                value=fields.email
            />
            <FormField
                name="phone"
                label="Phone"
                input_type="tel"
                placeholder="Optional"
                value=fields.phone
            />
            <TextAreaField
                name="message"
                label="Message"
                required=true
                placeholder="Tell us about your project"
                value=fields.message
            />
            <button
                type="submit"
                class="btn btn-primary submit-btn"
                disabled=move || button().disabled
                style=move || button().style()
            >
                {move || button().label}
            </button>
        </form>
    }
}
