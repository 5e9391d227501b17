//! # Monod kinetic model
//!
//! Right-hand side of the biomass (X), substrate (S) and product (P) balances of a stirred
//! bioreactor:
//!
//! ```text
//! mu  = mu_max * S / (Ks + S)                      (0 when S <= 0)
//! dX  = (mu - kd - D) * X
//! dS  = D * (Sin - S) - (mu / Yxs + mS) * X
//! dP  = alpha * g + beta * X - D * P
//! ```
//!
//! where `g` is the growth term feeding the Luedeking-Piret product formation, selected by
//! [`GrowthAssociation`]. For batch operation `D = 0` and the feed terms vanish.
//!
//! The model is a pure function of state and parameters: it never clamps its inputs or
//! outputs (apart from `mu` for a non-positive substrate) and keeps no state between calls.
use super::parameters::{FeedConditions, KineticParameters};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// State vector `(X, S, P)`
pub type Concentrations = Vector3<f64>;

/// Which biomass growth rate drives growth-associated product formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthAssociation {
    /// `alpha * (mu - kd) * X`
    #[default]
    NetGrowth,
    /// `alpha * mu * X`
    SpecificGrowth,
}

impl GrowthAssociation {
    /// Growth rate multiplying `alpha * X` at specific growth rate `mu`.
    pub fn driving_rate(&self, mu: f64, kd: f64) -> f64 {
        match self {
            GrowthAssociation::NetGrowth => mu - kd,
            GrowthAssociation::SpecificGrowth => mu,
        }
    }
}

/// Operating mode of the reactor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReactorMode {
    /// closed vessel, no feed and no outflow
    Batch,
    /// continuously fed and drained at dilution rate `D`
    Continuous(FeedConditions),
}

impl ReactorMode {
    pub fn name(&self) -> &'static str {
        match self {
            ReactorMode::Batch => "batch",
            ReactorMode::Continuous(_) => "cstr",
        }
    }

    /// `(D, Sin)`; zero for batch operation
    fn feed_terms(&self) -> (f64, f64) {
        match self {
            ReactorMode::Batch => (0.0, 0.0),
            ReactorMode::Continuous(feed) => (feed.dilution, feed.s_in),
        }
    }
}

/// Specific rates and state derivatives at one point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    /// specific growth rate
    pub mu: f64,
    /// specific substrate uptake rate `mu / Yxs + mS`
    pub q_s: f64,
    /// specific product formation rate `alpha * g + beta`, `g` per [`GrowthAssociation`]
    pub q_p: f64,
    /// `(dX/dt, dS/dt, dP/dt)`
    pub derivative: Concentrations,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KineticModel {
    pub parameters: KineticParameters,
    pub mode: ReactorMode,
    pub association: GrowthAssociation,
}

impl KineticModel {
    pub fn new(parameters: KineticParameters, mode: ReactorMode) -> Self {
        Self {
            parameters,
            mode,
            association: GrowthAssociation::default(),
        }
    }

    pub fn batch(parameters: KineticParameters) -> Self {
        Self::new(parameters, ReactorMode::Batch)
    }

    pub fn continuous(parameters: KineticParameters, feed: FeedConditions) -> Self {
        Self::new(parameters, ReactorMode::Continuous(feed))
    }

    pub fn with_association(mut self, association: GrowthAssociation) -> Self {
        self.association = association;
        self
    }

    /// Monod specific growth rate. Zero for a non-positive substrate concentration.
    pub fn specific_growth_rate(&self, s: f64) -> f64 {
        if s <= 0.0 {
            return 0.0;
        }
        let k = &self.parameters;
        k.mu_max * s / (k.ks + s)
    }

    pub fn rates(&self, state: &Concentrations) -> Rates {
        let k = &self.parameters;
        let (x, s, p) = (state[0], state[1], state[2]);
        let (d, s_in) = self.mode.feed_terms();

        let mu = self.specific_growth_rate(s);
        let q_s = mu / k.yxs + k.m_s;
        let growth = self.association.driving_rate(mu, k.kd);
        let q_p = k.alpha * growth + k.beta;

        let dx = (mu - k.kd - d) * x;
        let ds = d * (s_in - s) - q_s * x;
        let dp = q_p * x - d * p;

        Rates {
            mu,
            q_s,
            q_p,
            derivative: Vector3::new(dx, ds, dp),
        }
    }

    /// `(dX/dt, dS/dt, dP/dt)` at `state`
    pub fn derivative(&self, state: &Concentrations) -> Concentrations {
        self.rates(state).derivative
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params() -> KineticParameters {
        KineticParameters::monod(0.4, 0.5, 0.5)
    }

    #[test]
    fn test_monod_rate() {
        let model = KineticModel::batch(params());
        assert_relative_eq!(model.specific_growth_rate(0.5), 0.2, epsilon = 1e-15);
        assert_relative_eq!(model.specific_growth_rate(10.0), 0.4 * 10.0 / 10.5, epsilon = 1e-15);
        assert!(model.specific_growth_rate(1e9) < 0.4);
        assert_eq!(model.specific_growth_rate(0.0), 0.0);
        assert_eq!(model.specific_growth_rate(-0.3), 0.0);
    }

    #[test]
    fn test_batch_derivatives() {
        let k = params().with_maintenance(0.02).with_decay(0.01).with_product(0.3, 0.05);
        let model = KineticModel::batch(k);
        let (x, s, p) = (2.0, 4.0, 1.0);
        let rates = model.rates(&Vector3::new(x, s, p));
        let mu = 0.4 * s / (0.5 + s);
        assert_relative_eq!(rates.mu, mu, epsilon = 1e-15);
        let dx = (mu - 0.01) * x;
        assert_relative_eq!(rates.derivative[0], dx, epsilon = 1e-14);
        assert_relative_eq!(rates.derivative[1], -(mu * x) / 0.5 - 0.02 * x, epsilon = 1e-14);
        assert_relative_eq!(rates.derivative[2], 0.3 * dx + 0.05 * x, epsilon = 1e-14);
        assert_relative_eq!(rates.q_s, mu / 0.5 + 0.02, epsilon = 1e-15);
    }

    #[test]
    fn test_continuous_derivatives() {
        let k = params().with_maintenance(0.02).with_decay(0.01).with_product(0.3, 0.05);
        let feed = FeedConditions::new(10.0, 0.1);
        let model = KineticModel::continuous(k, feed);
        let (x, s, p) = (2.0, 4.0, 1.0);
        let d = model.derivative(&Vector3::new(x, s, p));
        let mu = 0.4 * s / (0.5 + s);
        assert_relative_eq!(d[0], (mu - 0.01 - 0.1) * x, epsilon = 1e-14);
        assert_relative_eq!(d[1], 0.1 * (10.0 - s) - mu * x / 0.5 - 0.02 * x, epsilon = 1e-14);
        // dilution does not drive product formation
        assert_relative_eq!(d[2], -0.1 * p + 0.3 * (mu - 0.01) * x + 0.05 * x, epsilon = 1e-14);
    }

    #[test]
    fn test_specific_growth_association() {
        let k = params().with_decay(0.05).with_product(0.5, 0.0);
        let net = KineticModel::batch(k);
        let gross = net.with_association(GrowthAssociation::SpecificGrowth);
        let state = Vector3::new(1.0, 2.0, 0.0);
        let mu = net.specific_growth_rate(2.0);
        assert_relative_eq!(net.derivative(&state)[2], 0.5 * (mu - 0.05), epsilon = 1e-15);
        assert_relative_eq!(gross.derivative(&state)[2], 0.5 * mu, epsilon = 1e-15);
    }

    #[test]
    fn test_depleted_substrate_stops_growth() {
        let model = KineticModel::batch(params().with_decay(0.02));
        let rates = model.rates(&Vector3::new(1.0, -1e-6, 0.0));
        assert_eq!(rates.mu, 0.0);
        assert_relative_eq!(rates.derivative[0], -0.02, epsilon = 1e-15);
        assert_eq!(rates.derivative[1], 0.0);
    }

    #[test]
    fn test_zero_dilution_matches_batch() {
        let k = params().with_maintenance(0.01).with_product(0.2, 0.01);
        let batch = KineticModel::batch(k);
        let cstr = KineticModel::continuous(k, FeedConditions::new(10.0, 0.0));
        let state = Vector3::new(0.7, 3.3, 0.4);
        assert_eq!(batch.derivative(&state), cstr.derivative(&state));
    }
}
