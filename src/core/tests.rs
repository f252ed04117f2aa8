#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::Utc;
    use futures::executor::block_on;
    use url::Url;

    use crate::core::contact::{
        ContactError, ContactFields, Delivery, PHONE_PLACEHOLDER, RETRY_LABEL, SENT_LABEL,
        SubmissionController, SubmitPhase, dispatch,
    };
    use crate::core::notice::{Notice, NoticeKind, NoticeSlot};
    use crate::core::SiteConfig;

    const LABEL: &str = "Send Message";

    /// Records every URL it is asked to deliver and answers with a fixed outcome
    struct FakeDelivery {
        calls: RefCell<Vec<Url>>,
        outcome: Result<(), ContactError>,
    }

    impl FakeDelivery {
        fn succeeding() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                outcome: Ok(()),
            }
        }

        fn failing() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                outcome: Err(ContactError::Delivery("Failed to fetch".to_string())),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl Delivery for FakeDelivery {
        async fn deliver(&self, url: &Url) -> Result<(), ContactError> {
            self.calls.borrow_mut().push(url.clone());
            self.outcome.clone()
        }
    }

    /// Minimal stand-in for the page: form fields, one notice slot, one controller
    struct Page {
        fields: ContactFields,
        controller: SubmissionController,
        notices: NoticeSlot,
    }

    impl Page {
        fn new(endpoint: Option<&str>) -> Self {
            let config = SiteConfig {
                contact_endpoint: endpoint.map(str::to_string),
                ..SiteConfig::default()
            };
            Self {
                fields: ContactFields {
                    name: "Grace".to_string(),
                    email: "grace@example.com".to_string(),
                    phone: String::new(),
                    message: "Quote for a new roof".to_string(),
                },
                controller: SubmissionController::new(&config, LABEL),
                notices: NoticeSlot::new(),
            }
        }

        /// Same sequence the contact form component runs on submit
        fn submit<D: Delivery>(
            &mut self,
            delivery: &D,
        ) -> Option<crate::core::contact::AttemptToken> {
            let pending = match self.controller.begin(self.fields.clone(), Utc::now()) {
                Ok(pending) => pending,
                Err(err) => {
                    self.notices.show(err.notice());
                    return None;
                }
            };

            let result = block_on(dispatch(delivery, &pending));
            let settlement = self.controller.settle(pending.token, result)?;
            if settlement.clear_form {
                self.fields = ContactFields::default();
            }
            self.notices.show(settlement.notice);
            Some(settlement.token)
        }

        fn notice(&self) -> Option<&Notice> {
            self.notices.current().map(|active| &active.notice)
        }
    }

    const ENDPOINT: &str = "https://script.google.com/macros/s/abc/exec";

    #[test]
    fn test_configuration_gate_never_delivers() {
        for endpoint in [None, Some(""), Some("YOUR_SCRIPT_URL"), Some("ftp://example.com")] {
            let mut page = Page::new(endpoint);
            let delivery = FakeDelivery::succeeding();

            assert!(page.submit(&delivery).is_none());

            assert_eq!(delivery.call_count(), 0, "endpoint {endpoint:?}");
            assert_eq!(page.controller.button().label, LABEL);
            assert!(!page.controller.button().disabled);
            assert_eq!(page.notice().unwrap().kind, NoticeKind::Error);
            assert!(page.notice().unwrap().message.starts_with("Configuration error"));
            // fields untouched
            assert_eq!(page.fields.name, "Grace");
        }
    }

    #[test]
    fn test_optimistic_success_clears_form() {
        let mut page = Page::new(Some(ENDPOINT));
        let delivery = FakeDelivery::succeeding();

        let token = page.submit(&delivery).unwrap();

        assert_eq!(delivery.call_count(), 1);
        assert_eq!(page.controller.phase(), SubmitPhase::Succeeded);
        assert_eq!(page.fields, ContactFields::default());
        assert_eq!(page.notice().unwrap().kind, NoticeKind::Success);
        assert_eq!(page.controller.button().label, SENT_LABEL);

        // cooldown elapses
        assert!(page.controller.recover(token));
        assert_eq!(page.controller.button().label, LABEL);
        assert!(!page.controller.button().disabled);
    }

    #[test]
    fn test_delivered_url_carries_placeholder_phone() {
        let mut page = Page::new(Some(ENDPOINT));
        let delivery = FakeDelivery::succeeding();

        page.submit(&delivery);

        let calls = delivery.calls.borrow();
        let phone = calls[0]
            .query_pairs()
            .find(|(key, _)| key == "phone")
            .map(|(_, value)| value.into_owned());
        assert_eq!(phone.as_deref(), Some(PHONE_PLACEHOLDER));
        assert_eq!(calls[0].host_str(), Some("script.google.com"));
    }

    #[test]
    fn test_failure_keeps_fields_and_allows_retry() {
        let mut page = Page::new(Some(ENDPOINT));
        let failing = FakeDelivery::failing();

        let token = page.submit(&failing).unwrap();

        assert_eq!(page.controller.phase(), SubmitPhase::Failed);
        assert_eq!(page.controller.button().label, RETRY_LABEL);
        assert!(!page.controller.button().disabled);
        assert_eq!(page.fields.name, "Grace");
        assert_eq!(page.notice().unwrap().kind, NoticeKind::Error);

        // retry right away, before the cooldown fires
        let succeeding = FakeDelivery::succeeding();
        let retry = page.submit(&succeeding).unwrap();

        // the first cooldown timer fires late and must not undo the success
        assert!(!page.controller.recover(token));
        assert_eq!(page.controller.button().label, SENT_LABEL);
        assert!(page.controller.recover(retry));
        assert_eq!(page.controller.button().label, LABEL);
    }

    #[test]
    fn test_single_notification_after_repeated_submits() {
        let mut page = Page::new(Some(ENDPOINT));

        page.submit(&FakeDelivery::failing());
        page.submit(&FakeDelivery::succeeding());

        let current = page.notices.current().unwrap();
        assert_eq!(current.notice.kind, NoticeKind::Success);
    }
}
