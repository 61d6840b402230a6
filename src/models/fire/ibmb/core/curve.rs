//! Sampled temperature-time curve.

use std::{fmt, ops::Range};

use crate::support::{constraint::StrictlyPositive, units::TemperatureDifference};
use tracing::trace;
use uom::si::{
    f64::Time,
    temperature_interval::degree_celsius as delta_celsius,
    thermodynamic_temperature::degree_celsius,
    time::minute,
};

use super::{CharacteristicTemperatures, IbmbError, PhaseTimes};

/// Contiguous phases of the iBMB curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Quadratic growth from ambient to `T1`.
    Growth,
    /// Fully developed fire, rising from `T1` to `T2`.
    Rise,
    /// Decay from `T2` to `T3`.
    Decay,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Growth => f.write_str("growth"),
            Self::Rise => f.write_str("rise"),
            Self::Decay => f.write_str("decay"),
        }
    }
}

/// Gas temperature samples on a fixed time grid.
///
/// Times are in minutes and temperatures in degrees Celsius, matching how
/// fire curves are tabulated and plotted. Both sequences always have the
/// same length and times strictly increase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    time: Vec<f64>,
    temperature: Vec<f64>,
    phase_ends: [usize; 3],
}

impl Curve {
    /// Sample times, in minutes.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.time
    }

    /// Sample temperatures, in degrees Celsius.
    #[must_use]
    pub fn temperatures(&self) -> &[f64] {
        &self.temperature
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Returns `true` if the curve has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Iterates over `(minutes, °C)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.temperature.iter().copied())
    }

    /// Returns the time and temperature samples of a single phase.
    ///
    /// A phase may be empty if its interval is shorter than one time step.
    #[must_use]
    pub fn phase(&self, phase: Phase) -> (&[f64], &[f64]) {
        let range = self.phase_range(phase);
        (&self.time[range.clone()], &self.temperature[range])
    }

    /// Consumes the curve and returns `(times, temperatures)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.time, self.temperature)
    }

    fn phase_range(&self, phase: Phase) -> Range<usize> {
        let [growth, rise, decay] = self.phase_ends;
        match phase {
            Phase::Growth => 0..growth,
            Phase::Rise => growth..rise,
            Phase::Decay => rise..decay,
        }
    }

    fn extend(&mut self, samples: impl Iterator<Item = (f64, f64)>) -> usize {
        let before = self.time.len();
        for (x, temp) in samples {
            self.time.push(x);
            self.temperature.push(temp);
        }
        self.time.len() - before
    }
}

/// Samples the three curve phases.
///
/// The growth phase covers `[0, t1)`, the rise phase `[t1, t2)`, and the
/// decay phase `[t2, t3]`, all measured in the `times` of the actual fire
/// load. The rise phase interpolates against the reference `anchors`
/// instead, so its shape depends only on geometry.
///
/// Growth starts at `ambient_celsius` itself, so the first sample carries
/// the caller's value unchanged.
///
/// # Errors
///
/// Returns [`IbmbError::InvalidTimeStep`] for a non-positive step, and
/// [`IbmbError::DegenerateInterval`] if the anchor rise interval or either
/// actual interval is not strictly positive.
pub(super) fn sample(
    times: &PhaseTimes,
    anchors: &PhaseTimes,
    temperatures: &CharacteristicTemperatures,
    ambient_celsius: f64,
    step: Time,
) -> Result<Curve, IbmbError> {
    let step = StrictlyPositive::new(step)
        .map_err(IbmbError::InvalidTimeStep)?
        .into_inner()
        .get::<minute>();

    let anchor_span = check_interval(Phase::Rise, anchors.growth_end, anchors.rise_end)?;
    check_interval(Phase::Rise, times.growth_end, times.rise_end)?;
    let decay_span = check_interval(Phase::Decay, times.rise_end, times.decay_end)?;

    let t1 = times.growth_end.get::<minute>();
    let t2 = times.rise_end.get::<minute>();
    let t3 = times.decay_end.get::<minute>();
    let anchor_t1 = anchors.growth_end.get::<minute>();

    let temp_1 = temperatures.growth_end.get::<degree_celsius>();
    let temp_2 = temperatures.rise_end.get::<degree_celsius>();

    let growth_rise = temp_1 - ambient_celsius;
    let rise_rise = temperatures.rise_end.minus(temperatures.growth_end).get::<delta_celsius>();
    let decay_rise = temperatures.decay_end.minus(temperatures.rise_end).get::<delta_celsius>();

    let mut curve = Curve::default();

    let n = curve.extend(
        grid(0.0, t1, step, false)
            .map(|x| (x, growth_rise * (x / t1).powi(2) + ambient_celsius)),
    );
    curve.phase_ends[0] = curve.len();
    trace!(phase = %Phase::Growth, samples = n);

    let n = curve.extend(
        grid(t1, t2, step, false)
            .map(|x| (x, rise_rise * ((x - anchor_t1) / anchor_span).sqrt() + temp_1)),
    );
    curve.phase_ends[1] = curve.len();
    trace!(phase = %Phase::Rise, samples = n);

    let n = curve.extend(
        grid(t2, t3, step, true).map(|x| (x, decay_rise * ((x - t2) / decay_span).sqrt() + temp_2)),
    );
    curve.phase_ends[2] = curve.len();
    trace!(phase = %Phase::Decay, samples = n);

    Ok(curve)
}

/// Returns the interval length in minutes if `end` is strictly after `start`.
fn check_interval(phase: Phase, start: Time, end: Time) -> Result<f64, IbmbError> {
    StrictlyPositive::new(end - start)
        .map(|span| span.into_inner().get::<minute>())
        .map_err(|_| IbmbError::DegenerateInterval { phase, start, end })
}

/// Grid points `start + i·step` before `end`, or up to it if `include_end`.
fn grid(start: f64, end: f64, step: f64, include_end: bool) -> impl Iterator<Item = f64> {
    (0_u32..)
        .map(move |i| start + f64::from(i) * step)
        .take_while(move |&x| x < end || (include_end && x <= end))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::f64::ThermodynamicTemperature;

    fn minutes(m: f64) -> Time {
        Time::new::<minute>(m)
    }

    fn celsius(c: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(c)
    }

    fn phase_times(t1: f64, t2: f64, t3: f64) -> PhaseTimes {
        PhaseTimes {
            growth_end: minutes(t1),
            rise_end: minutes(t2),
            decay_end: minutes(t3),
        }
    }

    fn fixed_temperatures() -> CharacteristicTemperatures {
        CharacteristicTemperatures {
            growth_end: celsius(980.0),
            rise_end: celsius(1340.0),
            decay_end: celsius(660.0),
        }
    }

    #[test]
    fn grid_is_index_based() {
        let points: Vec<f64> = grid(0.0, 0.35, 0.1, false).collect();
        assert_eq!(points.len(), 4);
        assert_relative_eq!(points[3], 0.3, epsilon = 1e-12);

        assert_eq!(grid(1.0, 1.0, 0.1, false).count(), 0);
        assert_eq!(grid(1.0, 1.0, 0.1, true).count(), 1);
    }

    #[test]
    fn phases_meet_characteristic_temperatures() {
        let times = phase_times(1.0, 2.0, 3.0);
        let curve = sample(
            &times,
            &times,
            &fixed_temperatures(),
            20.0,
            minutes(0.5),
        )
        .unwrap();

        assert_eq!(curve.times().len(), 7);
        assert_eq!(curve.phase(Phase::Growth).0, &[0.0, 0.5]);
        assert_eq!(curve.phase(Phase::Rise).0, &[1.0, 1.5]);
        assert_eq!(curve.phase(Phase::Decay).0, &[2.0, 2.5, 3.0]);

        let temps = curve.temperatures();
        assert_relative_eq!(temps[0], 20.0, epsilon = 1e-9);
        assert_relative_eq!(temps[1], 0.25 * 960.0 + 20.0, epsilon = 1e-9);
        assert_relative_eq!(temps[2], 980.0, epsilon = 1e-9);
        assert_relative_eq!(temps[3], 360.0 * 0.5_f64.sqrt() + 980.0, epsilon = 1e-9);
        assert_relative_eq!(temps[4], 1340.0, epsilon = 1e-9);
        assert_relative_eq!(temps[6], 660.0, epsilon = 1e-9);
    }

    #[test]
    fn rise_uses_reference_anchors() {
        let times = phase_times(1.0, 2.0, 3.0);
        let anchors = phase_times(1.0, 5.0, 9.0);
        let curve = sample(
            &times,
            &anchors,
            &fixed_temperatures(),
            20.0,
            minutes(0.5),
        )
        .unwrap();

        let (_, rise) = curve.phase(Phase::Rise);
        assert_relative_eq!(rise[1], 360.0 * (0.5_f64 / 4.0).sqrt() + 980.0, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_intervals() {
        let err = sample(
            &phase_times(1.0, 2.0, 3.0),
            &phase_times(1.0, 1.0, 3.0),
            &fixed_temperatures(),
            20.0,
            minutes(0.1),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            IbmbError::DegenerateInterval {
                phase: Phase::Rise,
                ..
            }
        ));

        let err = sample(
            &phase_times(1.0, 2.0, 2.0),
            &phase_times(1.0, 5.0, 9.0),
            &fixed_temperatures(),
            20.0,
            minutes(0.1),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            IbmbError::DegenerateInterval {
                phase: Phase::Decay,
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_positive_step() {
        let times = phase_times(1.0, 2.0, 3.0);
        let err = sample(
            &times,
            &times,
            &fixed_temperatures(),
            20.0,
            minutes(0.0),
        )
        .unwrap_err();
        assert!(matches!(err, IbmbError::InvalidTimeStep(_)));
    }

    #[test]
    fn into_parts_keeps_lengths() {
        let times = phase_times(1.0, 2.0, 3.0);
        let curve = sample(
            &times,
            &times,
            &fixed_temperatures(),
            20.0,
            minutes(0.1),
        )
        .unwrap();
        let pairs: Vec<_> = curve.iter().collect();

        let (t, temp) = curve.into_parts();
        assert_eq!(t.len(), temp.len());
        assert_eq!(pairs.len(), t.len());
    }

    #[test]
    fn growth_starts_at_ambient_exactly() {
        let times = phase_times(1.0, 2.0, 3.0);
        for ambient in [21.7, 12.34, -5.3, 0.1] {
            let curve = sample(
                &times,
                &times,
                &fixed_temperatures(),
                ambient,
                minutes(0.1),
            )
            .unwrap();
            assert_eq!(curve.temperatures()[0], ambient);
        }
    }
}
