//! Performance indicators of a simulated run: biomass peak, observed yield and
//! volumetric product productivity.
use super::simulator::TimeSeries;
use serde::{Deserialize, Serialize};

/// Substrate consumption below which the observed yield is reported as 0
const MIN_CONSUMED_SUBSTRATE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySummary {
    /// maximum biomass concentration
    pub x_max: f64,
    /// time of the first sample reaching `x_max`
    pub t_at_x_max: f64,
    /// `(X_end - X0) / (S0 - S_end)`, 0 when almost no substrate was consumed
    pub observed_yield: f64,
    /// `(P_end - P0) / t_end`, 0 for a zero-length run
    pub productivity: f64,
}

impl TrajectorySummary {
    /// `None` for an empty series.
    pub fn from_series(series: &TimeSeries) -> Option<Self> {
        let first = series.first()?;
        let last = series.last()?;

        let (i_max, x_max) = series
            .x
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (i, x)| {
                if x > best.1 { (i, x) } else { best }
            });

        let produced = last.x - first.x;
        let consumed = first.s - last.s;
        let observed_yield = if consumed > MIN_CONSUMED_SUBSTRATE {
            produced / consumed
        } else {
            0.0
        };
        let productivity = if last.t > 0.0 {
            (last.p - first.p) / last.t
        } else {
            0.0
        };

        Some(Self {
            x_max,
            t_at_x_max: series.t[i_max],
            observed_yield,
            productivity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactors::simulator::ReactorState;

    fn series(rows: &[(f64, f64, f64, f64)]) -> TimeSeries {
        let mut series = TimeSeries::with_capacity(rows.len());
        for &(t, x, s, p) in rows {
            series.push(ReactorState { t, x, s, p }, 0.0);
        }
        series
    }

    #[test]
    fn test_summary() {
        let s = series(&[
            (0.0, 1.0, 10.0, 0.0),
            (1.0, 3.0, 6.0, 1.0),
            (2.0, 4.0, 4.0, 2.0),
            (3.0, 3.5, 4.0, 3.0),
        ]);
        let summary = TrajectorySummary::from_series(&s).unwrap();
        assert_eq!(summary.x_max, 4.0);
        assert_eq!(summary.t_at_x_max, 2.0);
        assert_eq!(summary.observed_yield, 2.5 / 6.0);
        assert_eq!(summary.productivity, 1.0);
    }

    #[test]
    fn test_summary_without_consumption() {
        let s = series(&[(0.0, 1.0, 10.0, 0.5), (0.0, 1.0, 10.0, 0.5)]);
        let summary = TrajectorySummary::from_series(&s).unwrap();
        assert_eq!(summary.observed_yield, 0.0);
        assert_eq!(summary.productivity, 0.0);
        assert_eq!(summary.t_at_x_max, 0.0);
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(TrajectorySummary::from_series(&TimeSeries::default()), None);
    }
}
