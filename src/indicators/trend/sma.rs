//! SMA (Simple Moving Average) rolling series

/// Rolling mean of the trailing `window` values ending at each position.
///
/// Positions with fewer than `window` values of history have no defined
/// mean and yield `None`; the first defined value appears at index
/// `window - 1`. A running sum keeps each step O(1), the full series O(n).
pub fn sma_series(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    let mut series = Vec::with_capacity(values.len());
    let mut running_sum = 0.0;

    for (i, value) in values.iter().enumerate() {
        running_sum += value;
        if i >= window {
            running_sum -= values[i - window];
        }
        if i + 1 >= window {
            series.push(Some(running_sum / window as f64));
        } else {
            series.push(None);
        }
    }

    series
}
