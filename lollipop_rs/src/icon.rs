//! Named glyphs used by the page.
//!
//! The core only names icons; turning a name into pixels is the job of the
//! rendering layer.

/// Every glyph the page references.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconName {
    Calculator,
    Package,
    Star,
    Crown,
    TrendingDown,
    Gift,
    Zap,
    ArrowRight,
    Truck,
    Download,
    Phone,
    Mail,
    MapPin,
    ChevronDown,
    CheckCircle,
}

impl IconName {
    /// Stable kebab-case name, used as a CSS hook (`icon-<name>`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Calculator => "calculator",
            Self::Package => "package",
            Self::Star => "star",
            Self::Crown => "crown",
            Self::TrendingDown => "trending-down",
            Self::Gift => "gift",
            Self::Zap => "zap",
            Self::ArrowRight => "arrow-right",
            Self::Truck => "truck",
            Self::Download => "download",
            Self::Phone => "phone",
            Self::Mail => "mail",
            Self::MapPin => "map-pin",
            Self::ChevronDown => "chevron-down",
            Self::CheckCircle => "check-circle",
        }
    }
}
