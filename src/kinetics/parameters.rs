//! # Parameter set of a bioprocess simulation
//!
//! A simulation request is described by four groups of numbers:
//! - [`KineticParameters`]: Monod growth, yield, maintenance, decay and Luedeking-Piret
//!   product formation coefficients;
//! - [`FeedConditions`]: feed substrate concentration and dilution rate (continuous operation only);
//! - [`TimeGrid`]: integration horizon and step size;
//! - [`InitialState`]: biomass, substrate and product concentrations at `t = 0`.
//!
//! [`ParameterSet`] bundles them. It is built once per request and not mutated afterwards.
//! All structs deserialize from the engineering symbols used in task files
//! (`mu_max`, `Ks`, `Yxs`, `mS`, `kd`, `alpha`, `beta`, `Sin`, `D`, `X0`, `S0`, `P0`,
//! `t_final`, `dt`); the maintenance, decay and product coefficients default to zero.
//!
//! Every group has a `validate()` method that rejects non-finite and out-of-domain values
//! with a [`KineticsError`] naming the offending parameter.
use super::errors::{Domain, KineticsError, check};
use serde::{Deserialize, Serialize};

/// Kinetic coefficients of Monod growth with maintenance, decay and Luedeking-Piret product formation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KineticParameters {
    /// maximum specific growth rate, 1/time
    pub mu_max: f64,
    /// half-saturation constant, mass/volume
    #[serde(rename = "Ks")]
    pub ks: f64,
    /// biomass/substrate yield
    #[serde(rename = "Yxs")]
    pub yxs: f64,
    /// maintenance coefficient, 1/time
    #[serde(rename = "mS", default)]
    pub m_s: f64,
    /// specific decay rate, 1/time
    #[serde(default)]
    pub kd: f64,
    /// growth-associated product coefficient
    #[serde(default)]
    pub alpha: f64,
    /// non-growth-associated product coefficient, 1/time
    #[serde(default)]
    pub beta: f64,
}

impl KineticParameters {
    /// Pure Monod growth: no maintenance, no decay, no product.
    pub fn monod(mu_max: f64, ks: f64, yxs: f64) -> Self {
        Self {
            mu_max,
            ks,
            yxs,
            m_s: 0.0,
            kd: 0.0,
            alpha: 0.0,
            beta: 0.0,
        }
    }

    pub fn with_maintenance(mut self, m_s: f64) -> Self {
        self.m_s = m_s;
        self
    }

    pub fn with_decay(mut self, kd: f64) -> Self {
        self.kd = kd;
        self
    }

    /// Luedeking-Piret coefficients
    pub fn with_product(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    pub fn validate(&self) -> Result<(), KineticsError> {
        check("mu_max", self.mu_max, Domain::Positive)?;
        check("Ks", self.ks, Domain::Positive)?;
        check("Yxs", self.yxs, Domain::Positive)?;
        check("mS", self.m_s, Domain::NonNegative)?;
        check("kd", self.kd, Domain::NonNegative)?;
        check("alpha", self.alpha, Domain::NonNegative)?;
        check("beta", self.beta, Domain::NonNegative)?;
        Ok(())
    }
}

/// Feed of a continuously stirred reactor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedConditions {
    /// feed substrate concentration, mass/volume
    #[serde(rename = "Sin")]
    pub s_in: f64,
    /// dilution rate F/V, 1/time
    #[serde(rename = "D")]
    pub dilution: f64,
}

impl FeedConditions {
    pub fn new(s_in: f64, dilution: f64) -> Self {
        Self { s_in, dilution }
    }

    pub fn validate(&self) -> Result<(), KineticsError> {
        check("Sin", self.s_in, Domain::Positive)?;
        check("D", self.dilution, Domain::NonNegative)?;
        Ok(())
    }
}

/// Largest number of integration steps a single grid may request.
pub const MAX_STEPS: usize = 10_000_000;

/// `t_final / dt` closer than this (relative) to an integer counts as an exact multiple.
const MULTIPLE_TOLERANCE: f64 = 1e-9;

/// Uniform time grid `0, dt, 2 dt, ...` not exceeding `t_final`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    pub t_final: f64,
    pub dt: f64,
}

impl TimeGrid {
    pub fn new(t_final: f64, dt: f64) -> Self {
        Self { t_final, dt }
    }

    pub fn validate(&self) -> Result<(), KineticsError> {
        check("t_final", self.t_final, Domain::Positive)?;
        check("dt", self.dt, Domain::Positive)?;
        if self.dt > self.t_final {
            return Err(KineticsError::StepExceedsHorizon {
                dt: self.dt,
                t_final: self.t_final,
            });
        }
        let ratio = self.ratio();
        if ratio > MAX_STEPS as f64 {
            return Err(KineticsError::TooManySteps {
                steps: ratio,
                max: MAX_STEPS,
            });
        }
        Ok(())
    }

    /// `t_final / dt`, snapped to the nearest integer when the horizon is a multiple of the
    /// step up to floating-point rounding (`2.3 / 0.1` gives 22.999999999999996).
    fn ratio(&self) -> f64 {
        let ratio = self.t_final / self.dt;
        let nearest = ratio.round();
        if (ratio - nearest).abs() <= MULTIPLE_TOLERANCE * nearest.max(1.0) {
            nearest
        } else {
            ratio
        }
    }

    /// Number of integration steps, `floor(t_final / dt)` with exact multiples recognised.
    /// Saturates at [`MAX_STEPS`] for grids that did not pass [`TimeGrid::validate`].
    pub fn steps(&self) -> usize {
        let ratio = self.ratio().floor();
        if ratio.is_nan() || ratio < 0.0 {
            0
        } else {
            (ratio as usize).min(MAX_STEPS)
        }
    }

    /// Number of samples in the resulting series, `steps() + 1`.
    pub fn samples(&self) -> usize {
        self.steps() + 1
    }

    /// Time of sample `i`. Computed from the index so that rounding does not accumulate,
    /// and never past `t_final`.
    pub fn time_at(&self, i: usize) -> f64 {
        (i as f64 * self.dt).min(self.t_final)
    }
}

/// Concentrations at `t = 0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialState {
    #[serde(rename = "X0")]
    pub x0: f64,
    #[serde(rename = "S0")]
    pub s0: f64,
    #[serde(rename = "P0", default)]
    pub p0: f64,
}

impl InitialState {
    pub fn new(x0: f64, s0: f64, p0: f64) -> Self {
        Self { x0, s0, p0 }
    }

    pub fn validate(&self) -> Result<(), KineticsError> {
        check("X0", self.x0, Domain::NonNegative)?;
        check("S0", self.s0, Domain::NonNegative)?;
        check("P0", self.p0, Domain::NonNegative)?;
        Ok(())
    }
}

/// Complete, immutable description of one simulation request.
///
/// `feed` is `None` for batch operation; it is ignored by the batch simulator when present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub kinetics: KineticParameters,
    #[serde(default)]
    pub feed: Option<FeedConditions>,
    pub grid: TimeGrid,
    pub initial: InitialState,
}

impl ParameterSet {
    pub fn batch(kinetics: KineticParameters, grid: TimeGrid, initial: InitialState) -> Self {
        Self {
            kinetics,
            feed: None,
            grid,
            initial,
        }
    }

    pub fn continuous(
        kinetics: KineticParameters,
        feed: FeedConditions,
        grid: TimeGrid,
        initial: InitialState,
    ) -> Self {
        Self {
            kinetics,
            feed: Some(feed),
            grid,
            initial,
        }
    }

    /// Validates the fields shared by both operating modes.
    pub fn validate(&self) -> Result<(), KineticsError> {
        self.grid.validate()?;
        self.initial.validate()?;
        self.kinetics.validate()?;
        Ok(())
    }

    /// Validates everything and returns the feed, which continuous operation requires.
    pub fn validate_continuous(&self) -> Result<FeedConditions, KineticsError> {
        self.validate()?;
        let feed = self.feed.ok_or(KineticsError::MissingFeed)?;
        feed.validate()?;
        Ok(feed)
    }
}
