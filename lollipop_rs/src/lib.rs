//! # lollipop
//!
//! Core of the ChupaChups Opt wholesale landing page: the delivery cost
//! calculator, the lead forms and the page's UI state, kept free of any DOM
//! code so they can be tested natively.
//!
//! ## Modules
//!
//! - [`delivery`] - rate table, weight surcharge, carrier quotes
//! - [`lead`] - lead form submissions and their required fields
//! - [`page`] - page state machine and the [`Notifier`] seam
//! - [`content`] - loyalty tiers, pilot offer, FAQ
//! - [`config`] - `site.toml` copy and contacts
//! - [`icon`] - glyph names used by the page
//!
//! ## Quick Start
//!
//! ```rust
//! use lollipop::{DeliveryRegion, DeliverySpeed, PageState};
//!
//! let mut page = PageState::default();
//! page.set_region(DeliveryRegion::Kazan);
//! page.set_speed(DeliverySpeed::Express);
//!
//! let quote = page.quote();
//! assert_eq!(quote.primary().price, 4500);
//! assert_eq!(quote.primary().display_price(), "~4500 ₽");
//! ```
//!
//! ---
//!
//! ChupaChups Opt web team (c)2024

pub mod config;
pub mod content;
pub mod delivery;
pub mod error;
pub mod icon;
pub mod lead;
pub mod page;

pub use config::SiteConfig;
pub use delivery::{
    Carrier, CarrierQuote, DeliveryQuote, DeliveryRegion, DeliveryRequest, DeliverySpeed,
    DeliveryWeight,
};
pub use error::{LeadError, LollipopError, Result};
pub use icon::IconName;
pub use lead::{ConsultationRequest, DesignPreference, FormKind, LeadSubmission, OrderInquiry};
pub use page::{FaqAccordion, Notifier, OrderForm, PageState};
