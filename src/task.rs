//! # Simulation task files
//!
//! A task file is a JSON document describing one simulation request:
//!
//! ```json
//! {
//!   "problem_name": "chemostat start-up",
//!   "reactor": "cstr",
//!   "method": "runge-kutta-4",
//!   "growth_association": "net_growth",
//!   "kinetics": {"mu_max": 0.4, "Ks": 0.5, "Yxs": 0.5, "mS": 0.0, "kd": 0.0, "alpha": 0.1, "beta": 0.01},
//!   "feed": {"Sin": 10.0, "D": 0.1},
//!   "grid": {"t_final": 100.0, "dt": 0.1},
//!   "initial": {"X0": 0.1, "S0": 10.0, "P0": 0.0},
//!   "steady_state": true,
//!   "loglevel": "info"
//! }
//! ```
//!
//! Only `reactor`, `kinetics`, `grid` and `initial` are required. `method` defaults to
//! `runge-kutta-4`, `feed` is required for `cstr` and ignored for `batch`, `steady_state`
//! asks for the analytical equilibrium next to the trajectory. It is ignored (with a warning)
//! for `batch`, and for a `cstr` with `D = 0` the trajectory is returned without an
//! equilibrium.
//!
//! ## Main methods
//! - `SimulationTask::from_file()` / `from_str()`: parse a task;
//! - `SimulationTask::run()`: validate, simulate and summarise;
//! - `solve_from_file()`: one shot, file to outcome;
//! - `init_logger()`: terminal logger at the task's `loglevel`.
use crate::kinetics::errors::KineticsError;
use crate::kinetics::monod::{GrowthAssociation, ReactorMode};
use crate::kinetics::parameters::{
    FeedConditions, InitialState, KineticParameters, ParameterSet, TimeGrid,
};
use crate::reactors::indicators::TrajectorySummary;
use crate::reactors::integrator::IntegrationMethod;
use crate::reactors::simulator::{TimeSeries, simulate};
use crate::reactors::steady_state::{SteadyState, SteadyStateSolver};
use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("failed to read task file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse task file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    UnknownLogLevel(String),
    #[error("logger already initialised: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Kinetics(#[from] KineticsError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactorKind {
    Batch,
    #[serde(alias = "continuous", alias = "CSTR")]
    Cstr,
}

fn default_method() -> String {
    IntegrationMethod::default().to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationTask {
    #[serde(default)]
    pub problem_name: Option<String>,
    pub reactor: ReactorKind,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub growth_association: GrowthAssociation,
    pub kinetics: KineticParameters,
    #[serde(default)]
    pub feed: Option<FeedConditions>,
    pub grid: TimeGrid,
    pub initial: InitialState,
    #[serde(default)]
    pub steady_state: bool,
    #[serde(default)]
    pub loglevel: Option<String>,
}

/// Result of a task, serialisable for downstream consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskOutcome {
    pub problem_name: Option<String>,
    pub reactor: ReactorKind,
    pub method: String,
    pub summary: Option<TrajectorySummary>,
    pub steady_state: Option<SteadyState>,
    pub series: TimeSeries,
}

impl SimulationTask {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TaskError> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, TaskError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn parameter_set(&self) -> ParameterSet {
        ParameterSet {
            kinetics: self.kinetics,
            feed: self.feed,
            grid: self.grid,
            initial: self.initial,
        }
    }

    /// Parsed `loglevel`, `Info` when absent.
    pub fn log_level(&self) -> Result<LevelFilter, TaskError> {
        match &self.loglevel {
            None => Ok(LevelFilter::Info),
            Some(level) => level
                .parse::<LevelFilter>()
                .map_err(|_| TaskError::UnknownLogLevel(level.clone())),
        }
    }

    pub fn run(&self) -> Result<TaskOutcome, TaskError> {
        let method = IntegrationMethod::from_name(&self.method)?;
        let params = self.parameter_set();
        if let Some(name) = &self.problem_name {
            info!("task `{}`: {:?} reactor", name, self.reactor);
        }

        let (series, steady_state) = match self.reactor {
            ReactorKind::Batch => {
                let series = simulate(&params, ReactorMode::Batch, method, self.growth_association)?;
                if self.steady_state {
                    warn!("`steady_state` is only defined for cstr tasks, ignored for batch");
                }
                (series, None)
            }
            ReactorKind::Cstr => {
                let feed = params.validate_continuous()?;
                let series = simulate(
                    &params,
                    ReactorMode::Continuous(feed),
                    method,
                    self.growth_association,
                )?;
                let steady_state = if self.steady_state {
                    match SteadyStateSolver::new(params.kinetics, feed)
                        .with_association(self.growth_association)
                        .solve()
                    {
                        Ok(ss) => Some(ss),
                        Err(KineticsError::ZeroDilution) => {
                            warn!("D = 0: no steady state, returning the trajectory only");
                            None
                        }
                        Err(e) => return Err(e.into()),
                    }
                } else {
                    None
                };
                (series, steady_state)
            }
        };

        Ok(TaskOutcome {
            problem_name: self.problem_name.clone(),
            reactor: self.reactor,
            method: method.to_string(),
            summary: TrajectorySummary::from_series(&series),
            steady_state,
            series,
        })
    }
}

/// Parses and runs the task in `path`.
pub fn solve_from_file<P: AsRef<Path>>(path: P) -> Result<TaskOutcome, TaskError> {
    SimulationTask::from_file(path)?.run()
}

/// Installs a terminal logger; `LevelFilter::Off` installs nothing.
pub fn init_logger(level: LevelFilter) -> Result<(), TaskError> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Debug)
        .set_target_level(LevelFilter::Trace)
        .build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}
