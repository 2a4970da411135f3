//! Linear domain -> range mapping used for both axis placement and color ramps.

/// Minimum and maximum of the finite values in `values` (NaN is skipped).
pub fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Position of `value` within the domain, 0.0 at the first bound and 1.0 at
    /// the second. A collapsed domain puts everything at 0.5.
    pub fn normalize(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            0.5
        } else {
            (value - d0) / span
        }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        r0 + self.normalize(value) * (r1 - r0)
    }

    pub fn invert(&self, position: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return (d0 + d1) / 2.0;
        }
        d0 + (position - r0) / span * (d1 - d0)
    }

    /// Roughly `count` round-valued ticks inside the domain, stepping by
    /// 1, 2 or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        if count == 0 || !lo.is_finite() || !hi.is_finite() {
            return Vec::new();
        }
        if lo == hi {
            return vec![lo];
        }

        let increment = tick_increment(lo, hi, count);
        if increment == 0.0 || !increment.is_finite() {
            return Vec::new();
        }

        if increment > 0.0 {
            let first = (lo / increment).ceil() as i64;
            let last = (hi / increment).floor() as i64;
            (first..=last).map(|i| i as f64 * increment).collect()
        } else {
            // Negative increments encode 1/step to keep fractional ticks exact.
            let inverse = -increment;
            let first = (lo * inverse).ceil() as i64;
            let last = (hi * inverse).floor() as i64;
            (first..=last).map(|i| i as f64 / inverse).collect()
        }
    }
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_skips_nan() {
        assert_eq!(extent([3.0, f64::NAN, -1.0, 2.0]), Some((-1.0, 3.0)));
        assert_eq!(extent(std::iter::empty()), None);
    }

    #[test]
    fn maps_endpoints_and_midpoint() {
        let scale = LinearScale::new((0.0, 10.0), (100.0, 200.0));
        assert_eq!(scale.map(0.0), 100.0);
        assert_eq!(scale.map(10.0), 200.0);
        assert_eq!(scale.map(5.0), 150.0);
        assert_eq!(scale.invert(150.0), 5.0);
    }

    #[test]
    fn reversed_range_flips_direction() {
        let scale = LinearScale::new((1.0, 12.0), (500.0, 60.0));
        assert_eq!(scale.map(1.0), 500.0);
        assert_eq!(scale.map(12.0), 60.0);
        assert!(scale.map(6.0) > scale.map(7.0));
    }

    #[test]
    fn collapsed_domain_maps_to_range_midpoint() {
        let scale = LinearScale::new((4.0, 4.0), (0.0, 100.0));
        assert_eq!(scale.map(4.0), 50.0);
        assert_eq!(scale.map(-30.0), 50.0);
    }

    #[test]
    fn year_ticks_use_round_steps() {
        let scale = LinearScale::new((1753.0, 2015.0), (0.0, 1000.0));
        let ticks = scale.ticks(10);
        assert_eq!(ticks.first(), Some(&1760.0));
        assert_eq!(ticks.last(), Some(&2000.0));
        assert!(ticks.windows(2).all(|w| (w[1] - w[0] - 20.0).abs() < 1e-9));
    }

    #[test]
    fn fractional_ticks_stay_exact() {
        let scale = LinearScale::new((0.0, 1.0), (0.0, 1.0));
        let ticks = scale.ticks(5);
        assert_eq!(ticks, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }
}
