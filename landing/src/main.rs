// ChupaChups Opt landing page — Leptos 0.8 Edition
// Developed by the ChupaChups Opt web team (c)2024

mod sections;

use leptos::prelude::*;
use lollipop::{PageState, SiteConfig};
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Route `log` (and `tracing` events from the core) to the browser console.
fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(&format!(
            "[lollipop] console logger unavailable: {err}"
        )));
    }
}

#[component]
fn App() -> impl IntoView {
    let site = SiteConfig::embedded();
    let state = RwSignal::new(PageState::default());
    let toaster = Toaster::new(site.notice.duration_ms);
    let notice = site.notice.success.clone();
    let (brand, lead, image) = (
        site.brand.clone(),
        site.hero_lead.clone(),
        site.hero_image.clone(),
    );
    log::info!("{} landing mounted", site.short_brand);

    view! {
        <div class="page">
            <main>
                <Hero
                    state=state
                    toaster=toaster
                    brand=brand
                    lead=lead
                    image=image
                    notice=notice.clone()
                />
                <Loyalty />
                <DeliveryCalculator state=state />
                <Faq state=state />
                <ClosingForm state=state toaster=toaster notice=notice />
            </main>
            <Footer site=site />
            <ToastStack toaster=toaster />
        </div>
    }
}
