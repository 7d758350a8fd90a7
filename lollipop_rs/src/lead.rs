//! Lead-capture forms.
//!
//! A lead only lives for the duration of a submit handler: it is checked,
//! acknowledged through the [`Notifier`](crate::page::Notifier) and dropped.
//! Field values are never logged or stored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LeadError;

/// Which of the two forms produced a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormKind {
    /// Collapsible order inquiry under the hero call-to-action.
    HeroOrder,
    /// Always-visible form in the closing section.
    ClosingConsultation,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HeroOrder => "hero order",
            Self::ClosingConsultation => "closing consultation",
        })
    }
}

/// Answer to "Нужна помощь с дизайном упаковки?".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignPreference {
    Yes,
    No,
    Maybe,
}

impl DesignPreference {
    pub const ALL: [Self; 3] = [Self::Yes, Self::No, Self::Maybe];

    pub fn key(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Maybe => "maybe",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Да, нужна помощь",
            Self::No => "Нет, у меня есть дизайн",
            Self::Maybe => "Не уверен",
        }
    }

    /// The picker starts with no choice; an empty value means "not answered".
    pub fn from_optional_key(key: &str) -> Option<Self> {
        key.parse().ok()
    }
}

impl FromStr for DesignPreference {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|p| p.key() == s).ok_or(())
    }
}

/// Hero form: name, phone and a free-text order volume ("1000 шт или 50 кг").
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderInquiry {
    pub name: String,
    pub phone: String,
    pub volume: String,
}

/// Closing form. The design preference is optional in the markup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsultationRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub region: String,
    pub design: Option<DesignPreference>,
}

/// A submission from either form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeadSubmission {
    Order(OrderInquiry),
    Consultation(ConsultationRequest),
}

impl LeadSubmission {
    pub fn kind(&self) -> FormKind {
        match self {
            Self::Order(_) => FormKind::HeroOrder,
            Self::Consultation(_) => FormKind::ClosingConsultation,
        }
    }

    /// Same rule as the `required` attributes in the markup: a required
    /// field fails only when it is empty. Whitespace counts as a value.
    pub fn check_required(&self) -> Result<(), LeadError> {
        let form = self.kind();
        let required: Vec<(&'static str, &str)> = match self {
            Self::Order(o) => vec![
                ("name", o.name.as_str()),
                ("phone", o.phone.as_str()),
                ("volume", o.volume.as_str()),
            ],
            Self::Consultation(c) => vec![
                ("name", c.name.as_str()),
                ("phone", c.phone.as_str()),
                ("email", c.email.as_str()),
                ("region", c.region.as_str()),
            ],
        };
        match required.iter().find(|(_, value)| value.is_empty()) {
            Some(&(field, _)) => Err(LeadError::MissingField { form, field }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> OrderInquiry {
        OrderInquiry {
            name: "Иван Петров".into(),
            phone: "+7 (900) 123-45-67".into(),
            volume: "1000 шт".into(),
        }
    }

    #[test]
    fn complete_order_passes() {
        assert_eq!(LeadSubmission::Order(order()).check_required(), Ok(()));
    }

    #[test]
    fn empty_field_is_reported_by_name() {
        let lead = LeadSubmission::Order(OrderInquiry { phone: String::new(), ..order() });
        assert_eq!(
            lead.check_required(),
            Err(LeadError::MissingField { form: FormKind::HeroOrder, field: "phone" })
        );
    }

    #[test]
    fn whitespace_satisfies_required() {
        let lead = LeadSubmission::Order(OrderInquiry { name: " ".into(), ..order() });
        assert_eq!(lead.check_required(), Ok(()));
    }

    #[test]
    fn design_preference_is_optional() {
        let lead = LeadSubmission::Consultation(ConsultationRequest {
            name: "Анна".into(),
            phone: "+7 900 000-00-00".into(),
            email: "anna@example.ru".into(),
            region: "Казань".into(),
            design: None,
        });
        assert_eq!(lead.check_required(), Ok(()));
        assert_eq!(lead.kind(), FormKind::ClosingConsultation);
    }

    #[test]
    fn consultation_reports_first_missing_field() {
        let lead = LeadSubmission::Consultation(ConsultationRequest {
            name: "Анна".into(),
            ..Default::default()
        });
        assert_eq!(
            lead.check_required(),
            Err(LeadError::MissingField { form: FormKind::ClosingConsultation, field: "phone" })
        );
    }

    #[test]
    fn design_keys() {
        assert_eq!(DesignPreference::from_optional_key("maybe"), Some(DesignPreference::Maybe));
        assert_eq!(DesignPreference::from_optional_key(""), None);
    }
}
