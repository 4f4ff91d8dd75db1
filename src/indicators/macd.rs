//! Moving average convergence divergence

use super::ema;

/// MACD line, signal line and histogram
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub line: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// `line = EMA(fast) - EMA(slow)`, `signal = EMA(line, signal)`,
/// `histogram = line - signal`
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal: usize) -> MacdSeries {
    let fast_ema = ema(closes, fast);
    let slow_ema = ema(closes, slow);
    let line: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| f - s)
        .collect();
    let signal = ema(&line, signal);
    let histogram = line.iter().zip(&signal).map(|(l, s)| l - s).collect();

    MacdSeries {
        line,
        signal,
        histogram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::assert_close;

    #[test]
    fn test_macd_starts_at_zero() {
        let out = macd(&[10.0, 11.0, 12.0], 12, 26, 9);
        assert_close(out.line[0], 0.0);
        assert_close(out.histogram[0], 0.0);
    }

    #[test]
    fn test_macd_components_consistent() {
        let closes: Vec<f64> = (0..60).map(|i| 50.0 + (i as f64 * 0.3).cos()).collect();
        let out = macd(&closes, 12, 26, 9);
        assert_eq!(out.histogram.len(), closes.len());
        for i in 0..closes.len() {
            assert_close(out.histogram[i], out.line[i] - out.signal[i]);
        }
    }

    #[test]
    fn test_macd_positive_on_uptrend() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let out = macd(&closes, 12, 26, 9);
        assert!(out.line[59] > 0.0);
        assert!(out.histogram[59] > 0.0);
    }
}
