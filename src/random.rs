use rand::Rng;

/// Source of uniform samples in `[0, 1)` used when spawning particles.
///
/// Every `rand` generator implements this, so callers pass
/// `rand::thread_rng()` in the browser and a seeded `StdRng` in tests.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed list of samples, wrapping around at the end.
#[cfg(test)]
pub(crate) struct Sequence {
    values: Vec<f64>,
    next: usize,
}

#[cfg(test)]
impl Sequence {
    pub(crate) fn new(values: &[f64]) -> Sequence {
        Sequence {
            values: values.to_vec(),
            next: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for Sequence {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
