//! Exponential moving average

/// EMA seeded with the first value, `alpha = 2 / (span + 1)`
pub fn ema(values: &[f64], span: usize) -> Vec<f64> {
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &value in values {
        let next = match prev {
            Some(p) => alpha * value + (1.0 - alpha) * p,
            None => value,
        };
        out.push(next);
        prev = Some(next);
    }
    out
}

/// Short, medium and long EMAs over the same prices
#[derive(Debug, Clone)]
pub struct EmaTriple {
    pub short: Vec<f64>,
    pub medium: Vec<f64>,
    pub long: Vec<f64>,
}

impl EmaTriple {
    pub fn new(values: &[f64], short: usize, medium: usize, long: usize) -> Self {
        Self {
            short: ema(values, short),
            medium: ema(values, medium),
            long: ema(values, long),
        }
    }
}
