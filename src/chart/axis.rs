/// A closed numeric range mapped onto one pixel axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Smallest axis covering `values`, padded by 5% on both ends.
    /// A single repeated value gets a unit margin instead.
    pub fn covering(values: impl IntoIterator<Item = f64>) -> Self {
        let (lo, hi) = values
            .into_iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

        if !lo.is_finite() || !hi.is_finite() {
            return Self::new(0.0, 1.0);
        }
        let span = hi - lo;
        if span < f64::EPSILON * hi.abs().max(1.0) {
            return Self::new(lo - 1.0, hi + 1.0);
        }
        let pad = span * 0.05;
        Self::new(lo - pad, hi + pad)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Linear map from data space onto `[start, end]` pixels. `end` may be
    /// smaller than `start` (the y axis grows upwards).
    pub fn to_pixel(&self, value: f64, start: f32, end: f32) -> f32 {
        let t = (value - self.min) / self.span();
        start + (t as f32) * (end - start)
    }

    /// Step between ticks: 1, 2 or 5 times a power of ten, aiming for
    /// roughly `target` ticks.
    pub fn tick_step(&self, target: usize) -> f64 {
        let raw = self.span() / target.max(1) as f64;
        let magnitude = 10f64.powf(raw.log10().floor());
        let normalized = raw / magnitude;
        let nice = if normalized < 1.5 {
            1.0
        } else if normalized < 3.0 {
            2.0
        } else if normalized < 7.0 {
            5.0
        } else {
            10.0
        };
        nice * magnitude
    }

    /// Tick positions inside the axis, with their labels.
    pub fn ticks(&self, target: usize) -> Vec<(f64, String)> {
        let step = self.tick_step(target);
        let decimals = (-step.log10().floor()).max(0.0) as usize;
        let first = (self.min / step).ceil() as i64;
        let last = (self.max / step + 1e-9).floor() as i64;

        (first..=last)
            .map(|i| {
                let mut value = i as f64 * step;
                if value.abs() < step * 1e-9 {
                    value = 0.0;
                }
                (value, format!("{value:.decimals$}"))
            })
            .collect()
    }
}
