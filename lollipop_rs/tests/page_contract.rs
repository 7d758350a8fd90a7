//! Page-level contract: defaults, calculator output and lead handling as the
//! landing page sees them.

use std::cell::Cell;

use lollipop::{
    Carrier, ConsultationRequest, DeliveryRegion, DeliverySpeed, DeliveryWeight, DesignPreference,
    LeadSubmission, Notifier, OrderForm, OrderInquiry, PageState, SiteConfig,
};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct CountingNotifier {
    calls: Cell<usize>,
    last: std::cell::RefCell<String>,
}

impl Notifier for CountingNotifier {
    fn success(&self, message: &str) {
        self.calls.set(self.calls.get() + 1);
        *self.last.borrow_mut() = message.to_string();
    }
}

#[test]
fn fresh_page_defaults() {
    let page = PageState::default();
    assert_eq!(page.order_form, OrderForm::Closed);
    assert_eq!(page.delivery.region, DeliveryRegion::Moscow);
    assert_eq!(page.delivery.speed, DeliverySpeed::Standard);
    assert_eq!(page.delivery.weight.kg(), 50);
    assert_eq!(page.faq.open_index(), None);
}

#[test]
fn fresh_page_quotes_free_moscow_delivery() {
    let quote = PageState::default().quote();
    let shown: Vec<(&str, String)> = quote
        .iter()
        .map(|q| (q.carrier.name(), q.display_price()))
        .collect();
    assert_eq!(
        shown,
        vec![
            ("Деловые Линии", "~0 ₽".to_string()),
            ("СДЭК", "~0 ₽".to_string()),
            ("Delivery Express", "~0 ₽".to_string()),
        ]
    );
}

#[test]
fn heaviest_express_shipment_to_other_region() {
    let mut page = PageState::default();
    page.set_region(DeliveryRegion::from_key_or_other("other"));
    page.set_speed(DeliverySpeed::from_key_or_standard("express"));
    page.set_weight(DeliveryWeight::parse_input("500").unwrap());

    // 8000 × 1.8 = 14400; × 0.65 = 9360; × 1.8 = 25920
    let prices: Vec<u32> = page.quote().iter().map(|q| q.price).collect();
    assert_eq!(prices, vec![14400, 9360, 25920]);
}

#[test]
fn select_values_match_serde_keys() {
    for region in DeliveryRegion::ALL {
        assert_eq!(serde_json::to_string(&region).unwrap(), format!("\"{}\"", region.key()));
    }
    for speed in DeliverySpeed::ALL {
        assert_eq!(serde_json::to_string(&speed).unwrap(), format!("\"{}\"", speed.key()));
    }
    for design in DesignPreference::ALL {
        assert_eq!(serde_json::to_string(&design).unwrap(), format!("\"{}\"", design.key()));
    }
}

#[test]
fn weight_deserialization_enforces_the_grid() {
    assert_eq!(serde_json::from_str::<DeliveryWeight>("125").unwrap().kg(), 125);
    assert!(serde_json::from_str::<DeliveryWeight>("127").is_err());
    assert!(serde_json::from_str::<DeliveryWeight>("1000").is_err());
}

#[test]
fn both_forms_notify_exactly_once_with_the_configured_text() {
    let config = SiteConfig::embedded();
    let notifier = CountingNotifier::default();
    let mut page = PageState::default();

    page.toggle_order_form();
    page.submit_lead(
        LeadSubmission::Order(OrderInquiry {
            name: "Иван Петров".into(),
            phone: "+7 (900) 123-45-67".into(),
            volume: "1000 шт".into(),
        }),
        &config.notice.success,
        &notifier,
    )
    .unwrap();
    assert_eq!(notifier.calls.get(), 1);
    assert_eq!(page.order_form, OrderForm::Closed);

    page.submit_lead(
        LeadSubmission::Consultation(ConsultationRequest {
            name: "Иван Петров".into(),
            phone: "+7 (900) 123-45-67".into(),
            email: "example@mail.ru".into(),
            region: "Москва".into(),
            design: Some(DesignPreference::Yes),
        }),
        &config.notice.success,
        &notifier,
    )
    .unwrap();
    assert_eq!(notifier.calls.get(), 2);
    assert_eq!(
        *notifier.last.borrow(),
        "Заявка принята! Менеджер свяжется с вами в течение 30 минут"
    );
}

#[test]
fn whitespace_only_hero_fields_still_confirm_and_close() {
    let notifier = CountingNotifier::default();
    let mut page = PageState::default();
    page.toggle_order_form();

    page.submit_lead(
        LeadSubmission::Order(OrderInquiry {
            name: " ".into(),
            phone: "+7 (900) 123-45-67".into(),
            volume: "1000 шт".into(),
        }),
        "ok",
        &notifier,
    )
    .unwrap();

    assert_eq!(notifier.calls.get(), 1);
    assert_eq!(page.order_form, OrderForm::Closed);
}

#[test]
fn carriers_are_listed_primary_first() {
    assert!(Carrier::ALL[0].is_primary());
    assert!(Carrier::ALL[1..].iter().all(|c| !c.is_primary()));
}
