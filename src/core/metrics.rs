/// `count / denominator * 100`, or 0 when there is nothing to divide by
pub fn percentage(count: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }

    count as f64 / denominator as f64 * 100.0
}

pub fn fraction(count: usize, denominator: usize) -> f64 {
    percentage(count, denominator) / 100.0
}

pub fn calculate_mean(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let total: u32 = values.iter().map(|&v| u32::from(v)).sum();
    f64::from(total) / values.len() as f64
}

/// Median of the values; the mean of the two middle values for even counts
pub fn calculate_median(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
    } else {
        f64::from(sorted[mid])
    }
}

pub fn count_at_least(values: &[u8], threshold: u8) -> usize {
    values.iter().filter(|&&v| v >= threshold).count()
}

/// Mean of the available means, ignoring questions nobody answered
pub fn combine_means(means: &[Option<f64>]) -> f64 {
    let present: Vec<f64> = means.iter().flatten().copied().collect();
    if present.is_empty() {
        return 0.0;
    }

    present.iter().sum::<f64>() / present.len() as f64
}
