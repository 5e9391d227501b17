//! # Fixed-step integrators
//!
//! Advances the `(X, S, P)` state vector by one time step.
//!
//! ## Available methods
//! | name             | aliases                   | order | stages |
//! |------------------|---------------------------|-------|--------|
//! | `explicit-euler` | `euler`, `forward-euler`  | 1     | 1      |
//! | `runge-kutta-4`  | `rk4`                     | 4     | 4      |
//!
//! Methods form the closed enum [`IntegrationMethod`] (static dispatch through
//! `enum_dispatch`), so an unsupported name is rejected when the method is parsed,
//! never in the middle of a run. Runge-Kutta 4 is the default: the balances become mildly
//! stiff close to substrate depletion and Euler needs much smaller steps there.
//!
//! ## Non-negativity
//! After every step [`Integrator`] clamps each concentration to `max(0, value)`. This is a
//! numerical safeguard against overshoot near depletion, not a physical mechanism, and it
//! lives here so that the kinetic model stays a pure function. Intermediate Runge-Kutta
//! stages are not clamped.
use crate::kinetics::errors::KineticsError;
use crate::kinetics::monod::Concentrations;
use enum_dispatch::enum_dispatch;
use std::fmt;
use std::str::FromStr;

/// One explicit stepping rule `y(t + dt) = Phi(f, y(t), dt)`
#[enum_dispatch]
pub trait StepMethod {
    /// Unclamped next state.
    fn advance(
        &self,
        f: &dyn Fn(&Concentrations) -> Concentrations,
        y: &Concentrations,
        dt: f64,
    ) -> Concentrations;
    /// canonical name
    fn name(&self) -> &'static str;
    /// global convergence order
    fn order(&self) -> usize;
    /// right-hand side evaluations per step
    fn stages(&self) -> usize;
}

/// `y' = y + dt * f(y)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExplicitEuler;

impl StepMethod for ExplicitEuler {
    fn advance(
        &self,
        f: &dyn Fn(&Concentrations) -> Concentrations,
        y: &Concentrations,
        dt: f64,
    ) -> Concentrations {
        y + f(y) * dt
    }

    fn name(&self) -> &'static str {
        "explicit-euler"
    }

    fn order(&self) -> usize {
        1
    }

    fn stages(&self) -> usize {
        1
    }
}

/// Classical four-stage Runge-Kutta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RungeKutta4;

impl StepMethod for RungeKutta4 {
    fn advance(
        &self,
        f: &dyn Fn(&Concentrations) -> Concentrations,
        y: &Concentrations,
        dt: f64,
    ) -> Concentrations {
        let half = 0.5 * dt;
        let k1 = f(y);
        let k2 = f(&(y + k1 * half));
        let k3 = f(&(y + k2 * half));
        let k4 = f(&(y + k3 * dt));
        y + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
    }

    fn name(&self) -> &'static str {
        "runge-kutta-4"
    }

    fn order(&self) -> usize {
        4
    }

    fn stages(&self) -> usize {
        4
    }
}

#[enum_dispatch(StepMethod)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationMethod {
    ExplicitEuler,
    RungeKutta4,
}

/// Catalog entry: what a method name does numerically
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub order: usize,
    pub stages: usize,
}

impl IntegrationMethod {
    pub const ALL: [IntegrationMethod; 2] = [
        IntegrationMethod::ExplicitEuler(ExplicitEuler),
        IntegrationMethod::RungeKutta4(RungeKutta4),
    ];

    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            IntegrationMethod::ExplicitEuler(_) => &["euler", "forward-euler"],
            IntegrationMethod::RungeKutta4(_) => &["rk4"],
        }
    }

    /// Every available method with its convergence order and cost.
    pub fn catalog() -> Vec<MethodInfo> {
        Self::ALL
            .iter()
            .map(|m| MethodInfo {
                name: m.name(),
                aliases: m.aliases(),
                order: m.order(),
                stages: m.stages(),
            })
            .collect()
    }

    /// Parses a method name (case-insensitive, `_` and `-` interchangeable).
    pub fn from_name(name: &str) -> Result<Self, KineticsError> {
        let key = name.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|m| m.name() == key || m.aliases().contains(&key.as_str()))
            .ok_or_else(|| KineticsError::UnknownMethod {
                name: name.to_string(),
                available: Self::ALL
                    .iter()
                    .map(|m| m.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl Default for IntegrationMethod {
    fn default() -> Self {
        IntegrationMethod::RungeKutta4(RungeKutta4)
    }
}

impl FromStr for IntegrationMethod {
    type Err = KineticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for IntegrationMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Clamps every component to `max(0, value)`.
pub fn clamp_non_negative(y: Concentrations) -> Concentrations {
    y.map(|c| c.max(0.0))
}

/// Stepping method plus the non-negativity safeguard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Integrator {
    pub method: IntegrationMethod,
}

impl Integrator {
    pub fn new(method: IntegrationMethod) -> Self {
        Self { method }
    }

    /// Advances `y` by `dt`, clamps the result to non-negative concentrations and reports
    /// whether the clamp changed anything.
    pub fn step<F>(&self, f: F, y: &Concentrations, dt: f64) -> (Concentrations, bool)
    where
        F: Fn(&Concentrations) -> Concentrations,
    {
        let raw = self.method.advance(&f, y, dt);
        let clamped = clamp_non_negative(raw);
        (clamped, clamped != raw)
    }
}
