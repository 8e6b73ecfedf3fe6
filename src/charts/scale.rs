//! Scales
//!
//! Map data values onto pixel ranges.

/// Continuous linear scale from a value domain onto a pixel range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value into the range (not clamped)
    pub fn map(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }
        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Evenly spaced "nice" tick values covering the domain
    ///
    /// The step is the largest of 1, 2, 2.5, 5 or 10 (times a power of ten)
    /// that does not exceed `span / intervals`, so every tick stays inside
    /// the domain.
    pub fn ticks(&self, intervals: usize) -> Vec<f64> {
        let (lo, hi) = self.domain;
        let span = hi - lo;
        if span <= 0.0 || intervals == 0 {
            return vec![lo];
        }

        let step = nice_step(span / intervals as f64);
        let first = (lo / step).ceil() * step;
        let mut ticks = Vec::new();
        let mut value = first;
        while value <= hi + step * 1e-9 {
            ticks.push(value);
            value += step;
        }
        ticks
    }
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let factor = [10.0, 5.0, 2.5, 2.0, 1.0]
        .into_iter()
        .find(|f| *f <= residual + 1e-12)
        .unwrap_or(1.0);
    factor * magnitude
}

/// Categorical scale splitting a pixel range into equal bands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    pub count: usize,
    pub range: (f64, f64),
    /// Fraction of each band left empty, split evenly on both sides
    pub padding: f64,
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64), padding: f64) -> Self {
        Self {
            count,
            range,
            padding: padding.clamp(0.0, 0.99),
        }
    }

    /// Full width of one band, padding included
    pub fn step(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.range.1 - self.range.0) / self.count as f64
    }

    /// Usable width of one band
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of the usable part of band `index`
    pub fn start(&self, index: usize) -> f64 {
        self.range.0 + self.step() * index as f64 + self.step() * self.padding / 2.0
    }

    pub fn center(&self, index: usize) -> f64 {
        self.range.0 + self.step() * (index as f64 + 0.5)
    }

    /// Band under a pixel coordinate, if any
    pub fn index_at(&self, x: f64) -> Option<usize> {
        let step = self.step();
        if step <= 0.0 || x < self.range.0 || x >= self.range.1 {
            return None;
        }
        let index = ((x - self.range.0) / step) as usize;
        (index < self.count).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_map_inverted_range() {
        // Canvas y grows downward, so value axes map onto a reversed range
        let scale = LinearScale::new((0.0, 800.0), (200.0, 10.0));
        assert!((scale.map(0.0) - 200.0).abs() < 1e-9);
        assert!((scale.map(800.0) - 10.0).abs() < 1e-9);
        assert!((scale.map(400.0) - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_ticks() {
        let ratio = LinearScale::new((0.0, 800.0), (0.0, 1.0));
        assert_eq!(ratio.ticks(4), vec![0.0, 200.0, 400.0, 600.0, 800.0]);

        let percent = LinearScale::new((0.0, 45.0), (0.0, 1.0));
        assert_eq!(percent.ticks(4), vec![0.0, 10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_band_scale() {
        let bands = BandScale::new(4, (0.0, 400.0), 0.2);
        assert!((bands.step() - 100.0).abs() < 1e-9);
        assert!((bands.bandwidth() - 80.0).abs() < 1e-9);
        assert!((bands.start(1) - 110.0).abs() < 1e-9);
        assert!((bands.center(3) - 350.0).abs() < 1e-9);
        assert_eq!(bands.index_at(0.0), Some(0));
        assert_eq!(bands.index_at(399.9), Some(3));
        assert_eq!(bands.index_at(400.0), None);
        assert_eq!(bands.index_at(-1.0), None);
    }
}
