/// Parameter groups of a simulation request (kinetics, feed, time grid, initial state)
/// and their validation.
///
/// # Examples
/// ```
/// use biokin::kinetics::parameters::{InitialState, KineticParameters, ParameterSet, TimeGrid};
/// let kinetics = KineticParameters::monod(0.4, 0.5, 0.5).with_product(0.1, 0.01);
/// let params = ParameterSet::batch(kinetics, TimeGrid::new(24.0, 0.1), InitialState::new(0.1, 10.0, 0.0));
/// assert!(params.validate().is_ok());
/// assert_eq!(params.grid.samples(), 241);
/// ```
pub mod parameters;
/// Monod growth with maintenance, decay and Luedeking-Piret product formation:
/// specific rates and state derivatives for batch and continuous operation.
///
/// # Examples
/// ```
/// use biokin::kinetics::monod::KineticModel;
/// use biokin::kinetics::parameters::KineticParameters;
/// use nalgebra::Vector3;
/// let model = KineticModel::batch(KineticParameters::monod(0.4, 0.5, 0.5));
/// let rates = model.rates(&Vector3::new(1.0, 0.5, 0.0));
/// assert!((rates.mu - 0.2).abs() < 1e-12);
/// ```
pub mod monod;
/// Error taxonomy of the engine: validation and configuration errors.
pub mod errors;

pub use errors::{ErrorKind, KineticsError};
pub use monod::{Concentrations, GrowthAssociation, KineticModel, Rates, ReactorMode};
pub use parameters::{FeedConditions, InitialState, KineticParameters, ParameterSet, TimeGrid};
