//! Relative strength index

use super::Series;

/// RSI with smoothing factor `1 / period`.
///
/// Average gain and loss use normalized exponential weights
/// (`sum(w_i * x_i) / sum(w_i)`, `w_i = (1 - 1/period)^i`) and become
/// defined once `period` price changes have been seen, i.e. from index
/// `period`.
///
/// A series with losses but no gains reads 0; gains but no losses reads 100.
/// With neither (flat prices) the ratio is 0/0 and the bar is `None`.
pub fn rsi(closes: &[f64], period: usize) -> Series {
    let mut out = vec![None; closes.len()];
    if period == 0 {
        return out;
    }

    let decay = 1.0 - 1.0 / period as f64;
    let mut gain_acc = 0.0;
    let mut loss_acc = 0.0;
    let mut weight = 0.0;

    for t in 1..closes.len() {
        let delta = closes[t] - closes[t - 1];
        gain_acc = delta.max(0.0) + decay * gain_acc;
        loss_acc = (-delta).max(0.0) + decay * loss_acc;
        weight = 1.0 + decay * weight;

        if t >= period {
            out[t] = from_averages(gain_acc / weight, loss_acc / weight);
        }
    }
    out
}

fn from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 {
        return (avg_gain > 0.0).then_some(100.0);
    }
    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}
