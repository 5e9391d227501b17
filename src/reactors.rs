/// Fixed-step integrators (explicit Euler, classical Runge-Kutta) with the
/// non-negativity clamp applied after each step.
pub mod integrator;
/// Batch and continuous reactor simulators producing a [`simulator::TimeSeries`].
///
/// # Examples
/// ```
/// use biokin::kinetics::parameters::{InitialState, KineticParameters, ParameterSet, TimeGrid};
/// use biokin::reactors::integrator::IntegrationMethod;
/// use biokin::reactors::simulator::BatchSimulator;
/// let params = ParameterSet::batch(
///     KineticParameters::monod(0.4, 0.5, 0.5),
///     TimeGrid::new(24.0, 0.1),
///     InitialState::new(0.1, 10.0, 0.0),
/// );
/// let series = BatchSimulator::new(&params, IntegrationMethod::default()).unwrap().run();
/// assert_eq!(series.len(), 241);
/// ```
pub mod simulator;
/// Closed-form chemostat equilibrium and washout detection.
pub mod steady_state;
pub mod indicators;

pub use indicators::TrajectorySummary;
pub use integrator::{IntegrationMethod, Integrator, StepMethod};
pub use simulator::{BatchSimulator, ContinuousSimulator, ReactorState, TimeSeries};
pub use steady_state::{SteadyState, SteadyStateSolver};
