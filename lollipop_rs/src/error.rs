//! Error types for the landing page core.

use thiserror::Error;

use crate::lead::FormKind;

/// Errors raised while turning raw page input into typed values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LollipopError {
    #[error("unknown delivery region: {0:?}")]
    UnknownRegion(String),

    #[error("unknown delivery speed: {0:?}")]
    UnknownSpeed(String),

    #[error("weight {kg} kg is outside the 5..=500 kg range")]
    WeightOutOfRange { kg: u32 },

    #[error("weight {kg} kg is not a multiple of 5 kg")]
    WeightOffStep { kg: u32 },

    #[error("weight is not a number: {0:?}")]
    InvalidWeight(String),
}

/// Rejection of a lead form that reached the handler with an empty required field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeadError {
    #[error("{form} form is missing required field `{field}`")]
    MissingField { form: FormKind, field: &'static str },
}

pub type Result<T> = std::result::Result<T, LollipopError>;
