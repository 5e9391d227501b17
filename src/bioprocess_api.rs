//! # Flat entry points
//!
//! Scalar-argument functions for callers that hold plain numbers (input forms, scripting
//! bridges). Each call builds a [`ParameterSet`], validates it and runs the engine; the
//! returned vectors are owned by the caller.
//!
//! - [`simulate_batch`] / [`simulate_cstr`] return five equal-length sequences
//!   `(t, X, S, P, mu)`;
//! - [`cstr_steady_state`] returns `(S*, X*, P*)`; [`cstr_steady_state_full`] also reports
//!   feasibility.
//!
//! Argument order follows the engineering convention: time grid, initial state, feed,
//! kinetics, method.
#![allow(clippy::too_many_arguments)]
use crate::kinetics::errors::KineticsError;
use crate::kinetics::parameters::{
    FeedConditions, InitialState, KineticParameters, ParameterSet, TimeGrid,
};
use crate::reactors::integrator::IntegrationMethod;
use crate::reactors::simulator::{BatchSimulator, ContinuousSimulator};
use crate::reactors::steady_state::{SteadyState, SteadyStateSolver};

/// `(t, X, S, P, mu)`
pub type SeriesColumns = (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>);

pub fn simulate_batch(
    t_final: f64,
    dt: f64,
    x0: f64,
    s0: f64,
    p0: f64,
    mu_max: f64,
    ks: f64,
    yxs: f64,
    m_s: f64,
    kd: f64,
    alpha: f64,
    beta: f64,
    method: &str,
) -> Result<SeriesColumns, KineticsError> {
    let method = IntegrationMethod::from_name(method)?;
    let params = ParameterSet::batch(
        KineticParameters {
            mu_max,
            ks,
            yxs,
            m_s,
            kd,
            alpha,
            beta,
        },
        TimeGrid::new(t_final, dt),
        InitialState::new(x0, s0, p0),
    );
    Ok(BatchSimulator::new(&params, method)?.run().into_columns())
}

pub fn simulate_cstr(
    t_final: f64,
    dt: f64,
    x0: f64,
    s0: f64,
    p0: f64,
    s_in: f64,
    d: f64,
    mu_max: f64,
    ks: f64,
    yxs: f64,
    m_s: f64,
    kd: f64,
    alpha: f64,
    beta: f64,
    method: &str,
) -> Result<SeriesColumns, KineticsError> {
    let method = IntegrationMethod::from_name(method)?;
    let params = ParameterSet::continuous(
        KineticParameters {
            mu_max,
            ks,
            yxs,
            m_s,
            kd,
            alpha,
            beta,
        },
        FeedConditions::new(s_in, d),
        TimeGrid::new(t_final, dt),
        InitialState::new(x0, s0, p0),
    );
    Ok(ContinuousSimulator::new(&params, method)?.run().into_columns())
}

/// Chemostat equilibrium with its feasibility flag.
pub fn cstr_steady_state_full(
    s_in: f64,
    d: f64,
    mu_max: f64,
    ks: f64,
    yxs: f64,
    m_s: f64,
    kd: f64,
    alpha: f64,
    beta: f64,
) -> Result<SteadyState, KineticsError> {
    let kinetics = KineticParameters {
        mu_max,
        ks,
        yxs,
        m_s,
        kd,
        alpha,
        beta,
    };
    SteadyStateSolver::new(kinetics, FeedConditions::new(s_in, d)).solve()
}

/// `(S*, X*, P*)`; washout gives `(Sin, 0, 0)`.
pub fn cstr_steady_state(
    s_in: f64,
    d: f64,
    mu_max: f64,
    ks: f64,
    yxs: f64,
    m_s: f64,
    kd: f64,
    alpha: f64,
    beta: f64,
) -> Result<(f64, f64, f64), KineticsError> {
    cstr_steady_state_full(s_in, d, mu_max, ks, yxs, m_s, kd, alpha, beta).map(|ss| ss.as_tuple())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_simulate_batch_columns() {
        let (t, x, s, p, mu) = simulate_batch(
            24.0, 0.1, 0.1, 10.0, 0.0, 0.4, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0, "runge-kutta-4",
        )
        .unwrap();
        assert_eq!(t.len(), 241);
        for column in [&x, &s, &p, &mu] {
            assert_eq!(column.len(), t.len());
        }
        assert_relative_eq!(*x.last().unwrap(), 5.1, epsilon = 1e-3);
    }

    #[test]
    fn test_simulate_cstr_columns() {
        let (t, x, _, _, _) = simulate_cstr(
            10.0, 0.5, 0.1, 10.0, 0.0, 10.0, 0.1, 0.4, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0, "euler",
        )
        .unwrap();
        assert_eq!(t.len(), 21);
        assert_eq!(x.len(), 21);
    }

    #[test]
    fn test_unknown_method_rejected() {
        let err = simulate_batch(
            10.0, 0.1, 0.1, 10.0, 0.0, 0.4, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0, "midpoint",
        )
        .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_validation_before_stepping() {
        let err = simulate_cstr(
            10.0, 0.1, -0.1, 10.0, 0.0, 10.0, 0.1, 0.4, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0, "rk4",
        )
        .unwrap_err();
        assert_eq!(err.parameter(), Some("X0"));
        let err = simulate_batch(
            0.0, 0.1, 0.1, 10.0, 0.0, 0.4, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0, "rk4",
        )
        .unwrap_err();
        assert_eq!(err.parameter(), Some("t_final"));
    }

    #[test]
    fn test_steady_state_entry_points() {
        let (s, x, p) = cstr_steady_state(10.0, 0.1, 0.4, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0).unwrap();
        assert!(s < 10.0);
        assert!(x > 0.0);
        assert_eq!(p, 0.0);
        let full = cstr_steady_state_full(10.0, 0.5, 0.4, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0).unwrap();
        assert!(!full.feasible);
        assert_eq!(full.as_tuple(), (10.0, 0.0, 0.0));
        assert!(cstr_steady_state(10.0, 0.0, 0.4, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0).is_err());
    }
}
