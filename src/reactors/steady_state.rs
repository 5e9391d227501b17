//! # Analytical chemostat steady state
//!
//! Solves `dX/dt = dS/dt = dP/dt = 0` for a continuously stirred reactor in closed form,
//! without any time stepping:
//!
//! 1. `mu* = D + kd`. If `mu_max <= mu*` no biomass equilibrium exists: washout,
//!    `(S*, X*, P*) = (Sin, 0, 0)`.
//! 2. Monod inverted at `mu*`: `S* = Ks * mu* / (mu_max - mu*)`.
//! 3. Substrate balance: `X* = D * (Sin - S*) / (mu* / Yxs + mS)`. If `X* < 1e-6` or
//!    `S* > Sin` the equilibrium is not feasible and washout is reported.
//! 4. Product balance: `P* = X* * (alpha * g* + beta) / D`, with `g*` the growth term of the
//!    chosen [`GrowthAssociation`] at `mu*` (`D` for net growth, `D + kd` for specific growth).
//!
//! `D = 0` has no steady state (the reactor is unfed) and is a configuration error.
use crate::kinetics::errors::{Domain, KineticsError, check};
use crate::kinetics::monod::GrowthAssociation;
use crate::kinetics::parameters::{FeedConditions, KineticParameters};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Biomass below which the equilibrium counts as washout
pub const WASHOUT_BIOMASS: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteadyState {
    #[serde(rename = "S")]
    pub s: f64,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "P")]
    pub p: f64,
    /// `false` denotes washout
    pub feasible: bool,
}

impl SteadyState {
    pub fn washout(s_in: f64) -> Self {
        Self {
            s: s_in,
            x: 0.0,
            p: 0.0,
            feasible: false,
        }
    }

    /// `(S*, X*, P*)`
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.s, self.x, self.p)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyStateSolver {
    pub kinetics: KineticParameters,
    pub feed: FeedConditions,
    pub association: GrowthAssociation,
}

impl SteadyStateSolver {
    pub fn new(kinetics: KineticParameters, feed: FeedConditions) -> Self {
        Self {
            kinetics,
            feed,
            association: GrowthAssociation::default(),
        }
    }

    pub fn with_association(mut self, association: GrowthAssociation) -> Self {
        self.association = association;
        self
    }

    pub fn solve(&self) -> Result<SteadyState, KineticsError> {
        self.kinetics.validate()?;
        check("Sin", self.feed.s_in, Domain::Positive)?;
        check("D", self.feed.dilution, Domain::NonNegative)?;
        if self.feed.dilution == 0.0 {
            return Err(KineticsError::ZeroDilution);
        }

        let k = &self.kinetics;
        let FeedConditions { s_in, dilution: d } = self.feed;
        let mu_star = d + k.kd;
        if k.mu_max <= mu_star {
            warn!(
                "washout: mu_max = {} does not exceed D + kd = {}",
                k.mu_max, mu_star
            );
            return Ok(SteadyState::washout(s_in));
        }

        let s_star = k.ks * mu_star / (k.mu_max - mu_star);
        let x_star = d * (s_in - s_star) / (mu_star / k.yxs + k.m_s);
        if x_star < WASHOUT_BIOMASS || s_star > s_in {
            warn!(
                "washout: S* = {} against Sin = {}, X* = {}",
                s_star, s_in, x_star
            );
            return Ok(SteadyState::washout(s_in));
        }

        let growth = self.association.driving_rate(mu_star, k.kd);
        let p_star = x_star * (k.alpha * growth + k.beta) / d;
        info!(
            "steady state at D = {}: S* = {:.6}, X* = {:.6}, P* = {:.6}",
            d, s_star, x_star, p_star
        );
        Ok(SteadyState {
            s: s_star,
            x: x_star,
            p: p_star,
            feasible: true,
        })
    }
}
