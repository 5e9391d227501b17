//! # Batch and continuous (CSTR) reactor simulators
//!
//! Both simulators drive the same loop: starting from the initial state at `t = 0` they
//! apply [`Integrator::step`] to the [`KineticModel`] derivative `floor(t_final / dt)`
//! times, recording time, concentrations and the specific growth rate after every step.
//! They differ only in the [`ReactorMode`] handed to the kinetic model.
//!
//! ## Time grid
//! - the series has `floor(t_final / dt) + 1` samples at `t_i = i * dt`, where a ratio
//!   within `1e-9` (relative) of an integer counts as an exact multiple, so `2.3 / 0.1`
//!   gives 24 samples ending at `2.3`;
//! - when `t_final` is not a multiple of `dt` the last sample lies before `t_final`
//!   (by less than `dt`); callers must not assume exact endpoint alignment;
//! - grids needing more than [`MAX_STEPS`](crate::kinetics::parameters::MAX_STEPS) steps
//!   are rejected during validation.
//!
//! ## Guarantees
//! - all parameters are validated before the first step, so a failed request produces no
//!   partial series;
//! - `X, S, P >= 0` at every sample (clamped by the integrator);
//! - identical inputs give bit-identical series (no randomness, no clock).
use super::integrator::{IntegrationMethod, Integrator};
use crate::kinetics::errors::KineticsError;
use crate::kinetics::monod::{Concentrations, GrowthAssociation, KineticModel, ReactorMode};
use crate::kinetics::parameters::{InitialState, ParameterSet, TimeGrid};
use log::{debug, info, warn};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// One sample of a trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactorState {
    pub t: f64,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "S")]
    pub s: f64,
    #[serde(rename = "P")]
    pub p: f64,
}

impl ReactorState {
    pub fn new(t: f64, concentrations: &Concentrations) -> Self {
        Self {
            t,
            x: concentrations[0],
            s: concentrations[1],
            p: concentrations[2],
        }
    }
}

/// Simulated trajectory stored column-wise: five sequences of equal length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeSeries {
    pub t: Vec<f64>,
    #[serde(rename = "X")]
    pub x: Vec<f64>,
    #[serde(rename = "S")]
    pub s: Vec<f64>,
    #[serde(rename = "P")]
    pub p: Vec<f64>,
    pub mu: Vec<f64>,
}

impl TimeSeries {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            t: Vec::with_capacity(n),
            x: Vec::with_capacity(n),
            s: Vec::with_capacity(n),
            p: Vec::with_capacity(n),
            mu: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, state: ReactorState, mu: f64) {
        self.t.push(state.t);
        self.x.push(state.x);
        self.s.push(state.s);
        self.p.push(state.p);
        self.mu.push(mu);
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn state(&self, i: usize) -> Option<ReactorState> {
        if i >= self.len() {
            return None;
        }
        Some(ReactorState {
            t: self.t[i],
            x: self.x[i],
            s: self.s[i],
            p: self.p[i],
        })
    }

    pub fn first(&self) -> Option<ReactorState> {
        self.state(0)
    }

    pub fn last(&self) -> Option<ReactorState> {
        self.len().checked_sub(1).and_then(|i| self.state(i))
    }

    pub fn states(&self) -> impl Iterator<Item = ReactorState> + '_ {
        (0..self.len()).filter_map(move |i| self.state(i))
    }

    /// `(t, X, S, P, mu)`
    pub fn into_columns(self) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.t, self.x, self.s, self.p, self.mu)
    }
}

/// Driving loop shared by the batch and continuous simulators
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simulation {
    pub model: KineticModel,
    pub integrator: Integrator,
    pub grid: TimeGrid,
    pub initial: InitialState,
}

impl Simulation {
    pub fn run(&self) -> TimeSeries {
        let n = self.grid.samples();
        let dt = self.grid.dt;
        info!(
            "{} simulation: {} steps of dt = {} with {}",
            self.model.mode.name(),
            n - 1,
            dt,
            self.integrator.method
        );
        debug!("kinetics: {:?}", self.model.parameters);

        let derivative = |y: &Concentrations| self.model.derivative(y);
        let mut series = TimeSeries::with_capacity(n);
        let mut y = Vector3::new(self.initial.x0, self.initial.s0, self.initial.p0);
        series.push(ReactorState::new(0.0, &y), self.model.specific_growth_rate(y[1]));

        let mut clamped_steps = 0usize;
        for i in 1..n {
            let (next, clamped) = self.integrator.step(derivative, &y, dt);
            if clamped {
                clamped_steps += 1;
            }
            y = next;
            series.push(
                ReactorState::new(self.grid.time_at(i), &y),
                self.model.specific_growth_rate(y[1]),
            );
        }

        if clamped_steps > 0 {
            warn!(
                "negative concentrations clamped to zero in {} of {} steps; consider a smaller dt",
                clamped_steps,
                n - 1
            );
        }
        if let Some(last) = series.last() {
            info!(
                "{} simulation finished at t = {}: X = {:.6}, S = {:.6}, P = {:.6}",
                self.model.mode.name(),
                last.t,
                last.x,
                last.s,
                last.p
            );
        }
        series
    }
}

/// Closed vessel: no feed, no outflow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSimulator {
    simulation: Simulation,
}

impl BatchSimulator {
    /// Validates `params` (any feed conditions are ignored).
    pub fn new(params: &ParameterSet, method: IntegrationMethod) -> Result<Self, KineticsError> {
        params.validate()?;
        Ok(Self {
            simulation: Simulation {
                model: KineticModel::batch(params.kinetics),
                integrator: Integrator::new(method),
                grid: params.grid,
                initial: params.initial,
            },
        })
    }

    pub fn with_association(mut self, association: GrowthAssociation) -> Self {
        self.simulation.model = self.simulation.model.with_association(association);
        self
    }

    pub fn run(&self) -> TimeSeries {
        self.simulation.run()
    }
}

/// Continuously fed and drained stirred tank
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousSimulator {
    simulation: Simulation,
}

impl ContinuousSimulator {
    /// Validates `params`, which must carry feed conditions. `D = 0` is accepted and
    /// reproduces batch behaviour.
    pub fn new(params: &ParameterSet, method: IntegrationMethod) -> Result<Self, KineticsError> {
        let feed = params.validate_continuous()?;
        if feed.dilution == 0.0 {
            debug!("continuous reactor with D = 0 behaves as a batch reactor");
        }
        Ok(Self {
            simulation: Simulation {
                model: KineticModel::continuous(params.kinetics, feed),
                integrator: Integrator::new(method),
                grid: params.grid,
                initial: params.initial,
            },
        })
    }

    pub fn with_association(mut self, association: GrowthAssociation) -> Self {
        self.simulation.model = self.simulation.model.with_association(association);
        self
    }

    pub fn run(&self) -> TimeSeries {
        self.simulation.run()
    }
}

/// Simulates `params` in `mode`: batch when `mode` is [`ReactorMode::Batch`], otherwise a CSTR
/// fed as given by the mode (overriding `params.feed`).
pub fn simulate(
    params: &ParameterSet,
    mode: ReactorMode,
    method: IntegrationMethod,
    association: GrowthAssociation,
) -> Result<TimeSeries, KineticsError> {
    let series = match mode {
        ReactorMode::Batch => BatchSimulator::new(params, method)?
            .with_association(association)
            .run(),
        ReactorMode::Continuous(feed) => {
            let params = ParameterSet {
                feed: Some(feed),
                ..*params
            };
            ContinuousSimulator::new(&params, method)?
                .with_association(association)
                .run()
        }
    };
    Ok(series)
}
