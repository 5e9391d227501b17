//! Error types of the kinetics engine.
//!
//! Every failure of the engine is reported synchronously through [`KineticsError`].
//! Variants fall into two families, available through [`KineticsError::kind`]:
//! - **validation** errors: a scalar input is non-finite or outside its physical domain
//!   (raised before any time stepping starts, no partial result is produced);
//! - **configuration** errors: an unknown integration method name, or a steady-state
//!   request for an unfed continuous reactor.
//!
//! Negative concentrations produced by step overshoot are *not* errors: they are clamped
//! to zero inside the integrator.
use thiserror::Error;

/// Family of a [`KineticsError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Configuration,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KineticsError {
    #[error("parameter `{parameter}` must be a finite number, got {value}")]
    NonFinite { parameter: &'static str, value: f64 },
    #[error("parameter `{parameter}` must be {requirement}, got {value}")]
    OutOfDomain {
        parameter: &'static str,
        value: f64,
        requirement: &'static str,
    },
    #[error("time step dt = {dt} is larger than the final time t_final = {t_final}")]
    StepExceedsHorizon { dt: f64, t_final: f64 },
    #[error("time grid needs {steps} steps, more than the maximum of {max}; increase dt")]
    TooManySteps { steps: f64, max: usize },
    #[error("continuous operation requires feed conditions (`Sin` and `D`)")]
    MissingFeed,
    #[error("unknown integration method `{name}`, available methods: {available}")]
    UnknownMethod { name: String, available: String },
    #[error("dilution rate `D` is 0: an unfed, undiluted continuous reactor has no steady state")]
    ZeroDilution,
}

impl KineticsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KineticsError::NonFinite { .. }
            | KineticsError::OutOfDomain { .. }
            | KineticsError::StepExceedsHorizon { .. }
            | KineticsError::TooManySteps { .. }
            | KineticsError::MissingFeed => ErrorKind::Validation,
            KineticsError::UnknownMethod { .. } | KineticsError::ZeroDilution => {
                ErrorKind::Configuration
            }
        }
    }

    /// Name of the offending parameter, if the error is tied to a single one.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            KineticsError::NonFinite { parameter, .. }
            | KineticsError::OutOfDomain { parameter, .. } => Some(*parameter),
            KineticsError::StepExceedsHorizon { .. } | KineticsError::TooManySteps { .. } => {
                Some("dt")
            }
            KineticsError::MissingFeed => None,
            KineticsError::UnknownMethod { .. } => Some("method"),
            KineticsError::ZeroDilution => Some("D"),
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }
}

/// Accepted domain of a scalar parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Domain {
    Positive,
    NonNegative,
}

/// Checks that `value` is finite and lies in `domain`.
pub(crate) fn check(parameter: &'static str, value: f64, domain: Domain) -> Result<(), KineticsError> {
    if !value.is_finite() {
        return Err(KineticsError::NonFinite { parameter, value });
    }
    let (ok, requirement) = match domain {
        Domain::Positive => (value > 0.0, "> 0"),
        Domain::NonNegative => (value >= 0.0, ">= 0"),
    };
    if ok {
        Ok(())
    } else {
        Err(KineticsError::OutOfDomain {
            parameter,
            value,
            requirement,
        })
    }
}
