//! Inline SVG icons (Feather/Lucide outline set, 24px grid).

use leptos::prelude::*;
use lollipop::IconName;

/// Renders a named glyph as an inline, stroke-drawn SVG.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon name=IconName::Truck size=24 class="text-primary" /> }
/// ```
#[component]
pub fn Icon(
    name: IconName,
    /// Icon size in pixels
    #[prop(default = 20)]
    size: u32,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let px = size.to_string();
    let class = format!("icon icon-{} {}", name.as_str(), class);

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=px.clone()
            height=px
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=path_data(name)></path>
        </svg>
    }
}

fn path_data(name: IconName) -> &'static str {
    match name {
        IconName::Calculator => ICON_CALCULATOR,
        IconName::Package => ICON_PACKAGE,
        IconName::Star => ICON_STAR,
        IconName::Crown => ICON_CROWN,
        IconName::TrendingDown => ICON_TRENDING_DOWN,
        IconName::Gift => ICON_GIFT,
        IconName::Zap => ICON_ZAP,
        IconName::ArrowRight => ICON_ARROW_RIGHT,
        IconName::Truck => ICON_TRUCK,
        IconName::Download => ICON_DOWNLOAD,
        IconName::Phone => ICON_PHONE,
        IconName::Mail => ICON_MAIL,
        IconName::MapPin => ICON_MAP_PIN,
        IconName::ChevronDown => ICON_CHEVRON_DOWN,
        IconName::CheckCircle => ICON_CHECK_CIRCLE,
    }
}

// =============================================================================
// Path data
// =============================================================================

const ICON_CALCULATOR: &str = "M6 2h12a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z M8 6h8 M16 14v4 M16 10h.01 M12 10h.01 M8 10h.01 M12 14h.01 M8 14h.01 M12 18h.01 M8 18h.01";

const ICON_PACKAGE: &str = "M16.5 9.4 7.55 4.24 M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z M3.29 7 12 12l8.71-5 M12 22V12";

const ICON_STAR: &str = "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";

const ICON_CROWN: &str = "M2 4l3 12h14l3-12-6 7-4-7-4 7-6-7z M5 20h14";

const ICON_TRENDING_DOWN: &str = "M22 17l-8.5-8.5-5 5L2 7 M16 17h6v-6";

const ICON_GIFT: &str = "M20 12v10H4V12 M2 7h20v5H2z M12 22V7 M12 7H7.5a2.5 2.5 0 0 1 0-5C11 2 12 7 12 7z M12 7h4.5a2.5 2.5 0 0 0 0-5C13 2 12 7 12 7z";

const ICON_ZAP: &str = "M13 2L3 14h9l-1 8 10-12h-9l1-8z";

const ICON_ARROW_RIGHT: &str = "M5 12h14 M12 5l7 7-7 7";

const ICON_TRUCK: &str = "M1 3h15v13H1z M16 8h4l3 3v5h-7V8z M8 18.5a2.5 2.5 0 1 1-5 0 2.5 2.5 0 0 1 5 0z M21 18.5a2.5 2.5 0 1 1-5 0 2.5 2.5 0 0 1 5 0z";

const ICON_DOWNLOAD: &str = "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4 M7 10l5 5 5-5 M12 15V3";

const ICON_PHONE: &str = "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z";

const ICON_MAIL: &str = "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z M22 6l-10 7L2 6";

const ICON_MAP_PIN: &str = "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z M15 10a3 3 0 1 1-6 0 3 3 0 0 1 6 0z";

const ICON_CHEVRON_DOWN: &str = "M6 9l6 6 6-6";

const ICON_CHECK_CIRCLE: &str = "M22 11.08V12a10 10 0 1 1-5.93-9.14 M22 4L12 14.01l-3-3";
