//! Delivery cost estimation.
//!
//! A twelve-entry rate table keyed by destination region and speed, a linear
//! surcharge above 100 kg, and three carriers whose prices are derived from
//! the primary carrier's price. Everything here is pure: the page recomputes
//! a [`DeliveryQuote`] on every input change.
//!
//! ```rust
//! use lollipop::delivery::{DeliveryRegion, DeliveryRequest, DeliverySpeed, DeliveryWeight};
//!
//! let request = DeliveryRequest {
//!     region: DeliveryRegion::Rostov,
//!     speed: DeliverySpeed::Standard,
//!     weight: DeliveryWeight::default(),
//! };
//! let quote = request.quote();
//! assert_eq!(quote.primary().price, 2500);
//! assert_eq!(quote.secondary().price, 1625);
//! assert_eq!(quote.tertiary().price, 4500);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LollipopError, Result};
use crate::icon::IconName;

/// Fixed origin of every shipment (the factory).
pub const ORIGIN_LABEL: &str = "Волгоград (производство)";

/// Weight up to which no surcharge applies.
pub const SURCHARGE_THRESHOLD_KG: u32 = 100;

/// Every `SURCHARGE_DIVISOR_KG` kilograms above the threshold add 100% to the base cost.
pub const SURCHARGE_DIVISOR_KG: f64 = 500.0;

// ============================================
// Region
// ============================================

/// Destination region offered by the calculator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryRegion {
    #[default]
    Moscow,
    Kazan,
    Rostov,
    Leningrad,
    Volgograd,
    Other,
}

impl DeliveryRegion {
    /// Display order of the region picker.
    pub const ALL: [Self; 6] = [
        Self::Moscow,
        Self::Kazan,
        Self::Rostov,
        Self::Leningrad,
        Self::Volgograd,
        Self::Other,
    ];

    /// Option value used in the `<select>`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Moscow => "moscow",
            Self::Kazan => "kazan",
            Self::Rostov => "rostov",
            Self::Leningrad => "leningrad",
            Self::Volgograd => "volgograd",
            Self::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Moscow => "Москва",
            Self::Kazan => "Казань",
            Self::Rostov => "Ростов-на-Дону",
            Self::Leningrad => "Ленинградская обл.",
            Self::Volgograd => "Волгоградская обл.",
            Self::Other => "Другой регион",
        }
    }

    /// Row of [`RATE_TABLE`] for this region.
    pub fn rate(self) -> Rate {
        RATE_TABLE[self as usize]
    }

    /// Lenient parse for values read back from the DOM.
    ///
    /// Unknown keys land on [`DeliveryRegion::Other`], the most expensive row,
    /// so a broken picker never under-quotes.
    pub fn from_key_or_other(key: &str) -> Self {
        key.parse().unwrap_or_else(|err: LollipopError| {
            tracing::warn!("{err}; falling back to `other`");
            Self::Other
        })
    }
}

impl FromStr for DeliveryRegion {
    type Err = LollipopError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|region| region.key() == s)
            .ok_or_else(|| LollipopError::UnknownRegion(s.to_string()))
    }
}

impl fmt::Display for DeliveryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================
// Speed
// ============================================

/// Shipping urgency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliverySpeed {
    #[default]
    Standard,
    Express,
}

impl DeliverySpeed {
    pub const ALL: [Self; 2] = [Self::Standard, Self::Express];

    pub fn key(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Express => "express",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Стандарт (3–5 дней)",
            Self::Express => "Экспресс (1–2 дня)",
        }
    }

    /// Lenient parse for values read back from the DOM; unknown keys fall back to standard.
    pub fn from_key_or_standard(key: &str) -> Self {
        key.parse().unwrap_or_else(|err: LollipopError| {
            tracing::warn!("{err}; falling back to `standard`");
            Self::Standard
        })
    }
}

impl FromStr for DeliverySpeed {
    type Err = LollipopError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|speed| speed.key() == s)
            .ok_or_else(|| LollipopError::UnknownSpeed(s.to_string()))
    }
}

impl fmt::Display for DeliverySpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================
// Weight
// ============================================

/// Shipment weight in kilograms, always within `MIN..=MAX` and on the `STEP` grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DeliveryWeight(u32);

impl DeliveryWeight {
    pub const MIN: u32 = 5;
    pub const MAX: u32 = 500;
    pub const STEP: u32 = 5;
    pub const DEFAULT: u32 = 50;

    /// Strict constructor.
    pub fn new(kg: u32) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&kg) {
            return Err(LollipopError::WeightOutOfRange { kg });
        }
        if kg % Self::STEP != 0 {
            return Err(LollipopError::WeightOffStep { kg });
        }
        Ok(Self(kg))
    }

    /// Clamp into range and round to the nearest step, like a range slider does.
    pub fn snapped(kg: i64) -> Self {
        let step = i64::from(Self::STEP);
        let clamped = kg.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        let rounded = (clamped + step / 2) / step * step;
        // MIN and MAX are both on the grid, so rounding cannot leave the range
        Self(rounded as u32)
    }

    /// Parse the string value of an `<input type="range">`.
    pub fn parse_input(raw: &str) -> Result<Self> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| LollipopError::InvalidWeight(raw.to_string()))?;
        if !value.is_finite() {
            return Err(LollipopError::InvalidWeight(raw.to_string()));
        }
        Ok(Self::snapped(value.round() as i64))
    }

    pub fn kg(self) -> u32 {
        self.0
    }

    /// Surcharge factor for this weight. See [`weight_multiplier`].
    pub fn multiplier(self) -> f64 {
        weight_multiplier(self.0)
    }
}

impl Default for DeliveryWeight {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u32> for DeliveryWeight {
    type Error = LollipopError;

    fn try_from(kg: u32) -> Result<Self> {
        Self::new(kg)
    }
}

impl From<DeliveryWeight> for u32 {
    fn from(weight: DeliveryWeight) -> Self {
        weight.0
    }
}

impl fmt::Display for DeliveryWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} кг", self.0)
    }
}

/// `1` up to the threshold, then `1 + (kg - 100) / 500`.
///
/// Accepts any weight, not only slider values: 600 kg gives exactly 2.
pub fn weight_multiplier(kg: u32) -> f64 {
    if kg <= SURCHARGE_THRESHOLD_KG {
        1.0
    } else {
        1.0 + f64::from(kg - SURCHARGE_THRESHOLD_KG) / SURCHARGE_DIVISOR_KG
    }
}

// ============================================
// Rate table
// ============================================

/// Base cost in roubles for one region, per speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rate {
    pub standard: u32,
    pub express: u32,
}

impl Rate {
    pub const fn for_speed(self, speed: DeliverySpeed) -> u32 {
        match speed {
            DeliverySpeed::Standard => self.standard,
            DeliverySpeed::Express => self.express,
        }
    }
}

/// Indexed by `DeliveryRegion as usize`, in [`DeliveryRegion::ALL`] order.
pub const RATE_TABLE: [Rate; 6] = [
    Rate { standard: 0, express: 2500 },    // moscow
    Rate { standard: 1200, express: 4500 }, // kazan
    Rate { standard: 2500, express: 6000 }, // rostov
    Rate { standard: 800, express: 3500 },  // leningrad
    Rate { standard: 2800, express: 6500 }, // volgograd
    Rate { standard: 3500, express: 8000 }, // other
];

/// Table lookup before any surcharge.
pub fn base_cost(region: DeliveryRegion, speed: DeliverySpeed) -> u32 {
    region.rate().for_speed(speed)
}

fn round_roubles(value: f64) -> u32 {
    value.round() as u32
}

// ============================================
// Carriers
// ============================================

/// The three carriers shown under the calculator, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Carrier {
    BusinessLines,
    Cdek,
    DeliveryExpress,
}

impl Carrier {
    pub const ALL: [Self; 3] = [Self::BusinessLines, Self::Cdek, Self::DeliveryExpress];

    pub fn name(self) -> &'static str {
        match self {
            Self::BusinessLines => "Деловые Линии",
            Self::Cdek => "СДЭК",
            Self::DeliveryExpress => "Delivery Express",
        }
    }

    pub fn note(self) -> &'static str {
        match self {
            Self::BusinessLines => "для опта от 20 кг",
            Self::Cdek => "универсальный",
            Self::DeliveryExpress => "срочная доставка",
        }
    }

    pub fn transit(self) -> &'static str {
        match self {
            Self::BusinessLines => "2 дня",
            Self::Cdek => "2-3 дня",
            Self::DeliveryExpress => "день в день",
        }
    }

    pub fn icon(self) -> IconName {
        match self {
            Self::BusinessLines => IconName::Truck,
            Self::Cdek => IconName::Package,
            Self::DeliveryExpress => IconName::Zap,
        }
    }

    /// Price relative to the primary carrier.
    pub fn factor(self) -> f64 {
        match self {
            Self::BusinessLines => 1.0,
            Self::Cdek => 0.65,
            Self::DeliveryExpress => 1.8,
        }
    }

    /// The primary carrier is the recommended one and drawn highlighted.
    pub fn is_primary(self) -> bool {
        self == Self::BusinessLines
    }

    /// Derive this carrier's price from the already rounded primary price.
    pub fn price_from_primary(self, primary: u32) -> u32 {
        if self.is_primary() {
            primary
        } else {
            round_roubles(f64::from(primary) * self.factor())
        }
    }
}

// ============================================
// Quote
// ============================================

/// The three controlled inputs of the calculator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeliveryRequest {
    pub region: DeliveryRegion,
    pub speed: DeliverySpeed,
    pub weight: DeliveryWeight,
}

impl DeliveryRequest {
    /// `round(base × multiplier)`.
    pub fn primary_price(&self) -> u32 {
        let base = base_cost(self.region, self.speed);
        round_roubles(f64::from(base) * self.weight.multiplier())
    }

    pub fn quote(&self) -> DeliveryQuote {
        let primary = self.primary_price();
        let carriers = Carrier::ALL.map(|carrier| CarrierQuote {
            carrier,
            price: carrier.price_from_primary(primary),
        });
        tracing::debug!(
            region = self.region.key(),
            speed = self.speed.key(),
            kg = self.weight.kg(),
            primary,
            "delivery quote"
        );
        DeliveryQuote { carriers }
    }
}

/// Price offered by one carrier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarrierQuote {
    pub carrier: Carrier,
    /// Whole roubles.
    pub price: u32,
}

impl CarrierQuote {
    /// Approximate price as shown on the page, e.g. `~2500 ₽`.
    pub fn display_price(&self) -> String {
        format!("~{} ₽", self.price)
    }
}

/// Result of the calculator for every carrier, in [`Carrier::ALL`] order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeliveryQuote {
    pub carriers: [CarrierQuote; 3],
}

impl DeliveryQuote {
    pub fn primary(&self) -> CarrierQuote {
        self.carriers[0]
    }

    pub fn secondary(&self) -> CarrierQuote {
        self.carriers[1]
    }

    pub fn tertiary(&self) -> CarrierQuote {
        self.carriers[2]
    }

    pub fn iter(&self) -> impl Iterator<Item = &CarrierQuote> {
        self.carriers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn all_weights() -> impl Iterator<Item = DeliveryWeight> {
        (DeliveryWeight::MIN..=DeliveryWeight::MAX)
            .step_by(DeliveryWeight::STEP as usize)
            .map(|kg| DeliveryWeight::new(kg).unwrap())
    }

    #[test]
    fn multiplier_is_one_up_to_threshold() {
        for kg in 0..=SURCHARGE_THRESHOLD_KG {
            assert_eq!(weight_multiplier(kg), 1.0, "kg = {kg}");
        }
    }

    #[test]
    fn multiplier_grows_linearly_above_threshold() {
        assert_eq!(weight_multiplier(105), 1.01);
        assert_eq!(weight_multiplier(350), 1.5);
        assert_eq!(weight_multiplier(500), 1.8);
        assert_eq!(weight_multiplier(600), 2.0);
    }

    #[test]
    fn rate_table_matches_region_order() {
        let table: Vec<_> = DeliveryRegion::ALL
            .into_iter()
            .map(|r| {
                (
                    r.key(),
                    base_cost(r, DeliverySpeed::Standard),
                    base_cost(r, DeliverySpeed::Express),
                )
            })
            .collect();
        assert_eq!(
            table,
            vec![
                ("moscow", 0, 2500),
                ("kazan", 1200, 4500),
                ("rostov", 2500, 6000),
                ("leningrad", 800, 3500),
                ("volgograd", 2800, 6500),
                ("other", 3500, 8000),
            ]
        );
    }

    #[test]
    fn moscow_standard_is_free_at_any_weight() {
        for weight in all_weights() {
            let quote = DeliveryRequest {
                region: DeliveryRegion::Moscow,
                speed: DeliverySpeed::Standard,
                weight,
            }
            .quote();
            assert!(quote.iter().all(|q| q.price == 0), "{weight}");
        }
    }

    #[test]
    fn rostov_standard_at_default_weight() {
        let quote = DeliveryRequest {
            region: DeliveryRegion::Rostov,
            speed: DeliverySpeed::Standard,
            weight: DeliveryWeight::default(),
        }
        .quote();
        let prices: Vec<u32> = quote.iter().map(|q| q.price).collect();
        assert_eq!(prices, vec![2500, 1625, 4500]);
    }

    #[test]
    fn surcharge_applies_to_primary_then_carriers_derive() {
        // 1200 × 1.1 = 1320; 1320 × 0.65 = 858; 1320 × 1.8 = 2376
        let quote = DeliveryRequest {
            region: DeliveryRegion::Kazan,
            speed: DeliverySpeed::Standard,
            weight: DeliveryWeight::new(150).unwrap(),
        }
        .quote();
        assert_eq!(quote.primary().price, 1320);
        assert_eq!(quote.secondary().price, 858);
        assert_eq!(quote.tertiary().price, 2376);
    }

    #[test]
    fn carrier_prices_are_ordered_for_every_input() {
        for region in DeliveryRegion::ALL {
            for speed in DeliverySpeed::ALL {
                for weight in all_weights() {
                    let quote = DeliveryRequest { region, speed, weight }.quote();
                    let (p, s, t) = (
                        quote.primary().price,
                        quote.secondary().price,
                        quote.tertiary().price,
                    );
                    assert!(s <= p && p <= t, "{region:?}/{speed:?}/{weight}: {s} {p} {t}");
                }
            }
        }
    }

    #[test]
    fn region_keys_round_trip_through_from_str() {
        for region in DeliveryRegion::ALL {
            assert_eq!(region.key().parse::<DeliveryRegion>(), Ok(region));
        }
        assert_eq!(
            "tver".parse::<DeliveryRegion>(),
            Err(LollipopError::UnknownRegion("tver".into()))
        );
    }

    #[test]
    fn lenient_parsers_fall_back() {
        assert_eq!(DeliveryRegion::from_key_or_other(""), DeliveryRegion::Other);
        assert_eq!(DeliveryRegion::from_key_or_other("kazan"), DeliveryRegion::Kazan);
        assert_eq!(DeliverySpeed::from_key_or_standard("overnight"), DeliverySpeed::Standard);
        assert_eq!(DeliverySpeed::from_key_or_standard("express"), DeliverySpeed::Express);
    }

    #[test]
    fn strict_weight_rejects_off_grid_values() {
        assert_eq!(DeliveryWeight::new(0), Err(LollipopError::WeightOutOfRange { kg: 0 }));
        assert_eq!(DeliveryWeight::new(505), Err(LollipopError::WeightOutOfRange { kg: 505 }));
        assert_eq!(DeliveryWeight::new(52), Err(LollipopError::WeightOffStep { kg: 52 }));
        assert_eq!(DeliveryWeight::new(500).map(DeliveryWeight::kg), Ok(500));
    }

    #[test]
    fn snapping_behaves_like_a_range_input() {
        assert_eq!(DeliveryWeight::snapped(-40).kg(), 5);
        assert_eq!(DeliveryWeight::snapped(3).kg(), 5);
        assert_eq!(DeliveryWeight::snapped(52).kg(), 50);
        assert_eq!(DeliveryWeight::snapped(53).kg(), 55);
        assert_eq!(DeliveryWeight::snapped(9_000).kg(), 500);
    }

    #[test]
    fn slider_strings_parse() {
        assert_eq!(DeliveryWeight::parse_input("125").map(DeliveryWeight::kg), Ok(125));
        assert_eq!(DeliveryWeight::parse_input(" 77.6 ").map(DeliveryWeight::kg), Ok(80));
        assert_eq!(
            DeliveryWeight::parse_input("heavy"),
            Err(LollipopError::InvalidWeight("heavy".into()))
        );
        assert!(DeliveryWeight::parse_input("NaN").is_err());
    }

    #[test]
    fn unparsable_weight_message_quotes_the_input() {
        let err = DeliveryWeight::parse_input("heavy").unwrap_err();
        assert_eq!(err.to_string(), "weight is not a number: \"heavy\"");
    }

    #[test]
    fn display_price_uses_tilde_and_rouble_sign() {
        let quote = CarrierQuote { carrier: Carrier::Cdek, price: 1625 };
        assert_eq!(quote.display_price(), "~1625 ₽");
    }
}
