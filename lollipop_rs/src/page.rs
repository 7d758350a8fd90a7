//! Page-level UI state and its transitions.
//!
//! [`PageState`] is everything the landing page remembers between renders:
//! whether the hero order form is open, the three calculator inputs and the
//! open FAQ entry. All of it resets on reload. Transitions are synchronous
//! and never touch the network.

use crate::delivery::{
    DeliveryQuote, DeliveryRegion, DeliveryRequest, DeliverySpeed, DeliveryWeight,
};
use crate::error::LeadError;
use crate::lead::{FormKind, LeadSubmission};

/// Sink for transient user-facing messages (a toast, in the browser).
pub trait Notifier {
    fn success(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn success(&self, message: &str) {
        (**self).success(message)
    }
}

/// Visibility of the order inquiry form under the hero call-to-action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderForm {
    #[default]
    Closed,
    Open,
}

impl OrderForm {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Single-open, collapsible accordion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    /// Open `index`, closing whichever entry was open; clicking the open entry closes it.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageState {
    pub order_form: OrderForm,
    pub delivery: DeliveryRequest,
    pub faq: FaqAccordion,
}

impl PageState {
    pub fn toggle_order_form(&mut self) {
        self.order_form = self.order_form.toggled();
    }

    pub fn set_region(&mut self, region: DeliveryRegion) {
        self.delivery.region = region;
    }

    pub fn set_speed(&mut self, speed: DeliverySpeed) {
        self.delivery.speed = speed;
    }

    pub fn set_weight(&mut self, weight: DeliveryWeight) {
        self.delivery.weight = weight;
    }

    pub fn quote(&self) -> DeliveryQuote {
        self.delivery.quote()
    }

    /// Accept a lead: notify once with `notice` and, for the hero form,
    /// collapse it. The lead is dropped when this returns.
    ///
    /// A lead with an empty required field is rejected without notifying and
    /// without touching state.
    pub fn submit_lead(
        &mut self,
        lead: LeadSubmission,
        notice: &str,
        notifier: impl Notifier,
    ) -> Result<(), LeadError> {
        if let Err(err) = lead.check_required() {
            tracing::warn!("lead rejected: {err}");
            return Err(err);
        }
        let kind = lead.kind();
        drop(lead);

        tracing::debug!(form = %kind, "lead accepted");
        notifier.success(notice);
        if kind == FormKind::HeroOrder {
            self.order_form = OrderForm::Closed;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::{ConsultationRequest, OrderInquiry};
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl Notifier for Recorder {
        fn success(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    fn hero_lead() -> LeadSubmission {
        LeadSubmission::Order(OrderInquiry {
            name: "Иван".into(),
            phone: "+7 900 123-45-67".into(),
            volume: "50 кг".into(),
        })
    }

    #[test]
    fn toggle_twice_restores() {
        let mut state = PageState::default();
        for _ in 0..2 {
            state.toggle_order_form();
        }
        assert_eq!(state.order_form, OrderForm::Closed);
        state.toggle_order_form();
        assert!(state.order_form.is_open());
    }

    #[test]
    fn hero_submit_notifies_once_and_closes() {
        let mut state = PageState::default();
        state.toggle_order_form();
        let recorder = Recorder::default();

        state.submit_lead(hero_lead(), "ok", &recorder).unwrap();

        assert_eq!(*recorder.0.borrow(), vec!["ok".to_string()]);
        assert_eq!(state.order_form, OrderForm::Closed);
    }

    #[test]
    fn closing_submit_leaves_hero_form_alone() {
        let mut state = PageState::default();
        state.toggle_order_form();
        let recorder = Recorder::default();
        let lead = LeadSubmission::Consultation(ConsultationRequest {
            name: "Анна".into(),
            phone: "+7 900 000-00-00".into(),
            email: "anna@example.ru".into(),
            region: "Казань".into(),
            design: None,
        });

        state.submit_lead(lead, "ok", &recorder).unwrap();

        assert_eq!(recorder.0.borrow().len(), 1);
        assert_eq!(state.order_form, OrderForm::Open);
    }

    #[test]
    fn rejected_lead_is_silent() {
        let mut state = PageState::default();
        state.toggle_order_form();
        let recorder = Recorder::default();

        let result = state.submit_lead(
            LeadSubmission::Order(OrderInquiry::default()),
            "ok",
            &recorder,
        );

        assert!(result.is_err());
        assert!(recorder.0.borrow().is_empty());
        assert_eq!(state.order_form, OrderForm::Open);
    }

    #[test]
    fn accordion_is_single_open_and_collapsible() {
        let mut faq = FaqAccordion::default();
        faq.toggle(1);
        assert!(faq.is_open(1));
        faq.toggle(3);
        assert!(!faq.is_open(1));
        assert_eq!(faq.open_index(), Some(3));
        faq.toggle(3);
        assert_eq!(faq.open_index(), None);
    }
}
