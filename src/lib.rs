//! # biokin
//!
//! Microbial bioprocess kinetics: Monod growth with maintenance, decay and
//! Luedeking-Piret product formation, integrated in time for batch and continuously
//! stirred (CSTR) reactors, plus the closed-form CSTR steady state.
//!
//! - [`kinetics`]: parameter sets, validation, errors and the kinetic model;
//! - [`reactors`]: integrators, batch/continuous simulators, steady-state solver, indicators;
//! - [`bioprocess_api`]: scalar-argument entry points returning plain sequences;
//! - [`task`]: JSON task files and logging setup for the command-line runner.
pub mod bioprocess_api;
pub mod kinetics;
pub mod reactors;
pub mod task;
