// Landing page sections
// Developed by the ChupaChups Opt web team (c)2024

mod calculator;
mod closing;
mod faq;
mod footer;
mod hero;
mod icons;
mod loyalty;
mod toast;

pub use calculator::DeliveryCalculator;
pub use closing::ClosingForm;
pub use faq::Faq;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::Icon;
pub use loyalty::Loyalty;
pub use toast::{ToastStack, Toaster};
