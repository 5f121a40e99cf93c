//! Differencing utilities for time series

/// Compute n-th order differences
pub fn difference(data: &[f64], order: usize) -> Vec<f64> {
    let mut result = data.to_vec();
    for _ in 0..order {
        if result.len() <= 1 {
            return Vec::new();
        }
        result = result.windows(2).map(|w| w[1] - w[0]).collect();
    }
    result
}

/// Last value of every differencing level below `order`, outermost first.
///
/// These are the constants of integration [`integrate`] needs to map
/// forecasts of the `order`-th difference back to the original scale.
pub fn integration_anchors(data: &[f64], order: usize) -> Vec<f64> {
    let mut anchors = Vec::with_capacity(order);
    let mut level = data.to_vec();
    for _ in 0..order {
        match level.last() {
            Some(&last) => anchors.push(last),
            None => break,
        }
        level = difference(&level, 1);
    }
    anchors
}

/// Reverse differencing using the anchors from [`integration_anchors`]
pub fn integrate(differenced: &[f64], anchors: &[f64]) -> Vec<f64> {
    let mut result = differenced.to_vec();
    for &anchor in anchors.iter().rev() {
        let mut acc = anchor;
        for value in result.iter_mut() {
            acc += *value;
            *value = acc;
        }
    }
    result
}
