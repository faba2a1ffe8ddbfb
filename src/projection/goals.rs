//! Goal-crossing lookup and profit/price sweeps

use serde::Serialize;

/// Month whose projected profit is nearest a USD target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalCrossing {
    pub target: f64,
    pub month: u32,
    pub projected_profit: f64,
    /// projected_profit - target (negative if the month falls short)
    pub gap: f64,
    /// First month whose projected profit meets the target, if any
    pub first_reached: Option<u32>,
}

impl GoalCrossing {
    /// Whether the nearest month itself meets the target
    pub fn nearest_meets_target(&self) -> bool {
        self.gap >= 0.0
    }

    /// Whether any month in the series meets the target
    pub fn reached(&self) -> bool {
        self.first_reached.is_some()
    }
}

/// Index of the value nearest `target`
///
/// Linear scan; ties resolve to the earliest index. Returns `None` only for
/// an empty slice.
pub fn nearest_index(values: &[f64], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, value) in values.iter().enumerate() {
        let err = (value - target).abs();
        let closer = match best {
            Some((_, best_err)) => err < best_err,
            None => true,
        };
        if closer {
            best = Some((idx, err));
        }
    }
    best.map(|(idx, _)| idx)
}

/// One point on the profit vs. price line
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub price: f64,
    pub profit: f64,
}

/// Profit of holding `tokens` at `points` evenly spaced prices in [min, max]
pub fn profit_price_sweep(
    tokens: f64,
    min_price: f64,
    max_price: f64,
    points: usize,
) -> Vec<SweepPoint> {
    match points {
        0 => Vec::new(),
        1 => vec![SweepPoint { price: min_price, profit: tokens * min_price }],
        n => {
            let step = (max_price - min_price) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let price = if i == n - 1 { max_price } else { min_price + step * i as f64 };
                    SweepPoint { price, profit: tokens * price }
                })
                .collect()
        }
    }
}

/// Token price at which `tokens` are worth `goal`
pub fn break_even_price(goal: f64, tokens: f64) -> Option<f64> {
    if tokens > 0.0 {
        Some(goal / tokens)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_nearest_exact_match() {
        let profits = [0.0, 500_000.0, 1_000_000.0, 2_000_000.0];
        assert_eq!(nearest_index(&profits, 1_000_000.0), Some(2));
    }

    #[test]
    fn test_nearest_tie_takes_first() {
        let profits = [0.0, 500_000.0, 1_500_000.0];
        assert_eq!(nearest_index(&profits, 1_000_000.0), Some(1));
    }

    #[test]
    fn test_nearest_never_crossed() {
        let profits = [10.0, 20.0, 30.0];
        assert_eq!(nearest_index(&profits, 1_000_000.0), Some(2));
        assert_eq!(nearest_index(&profits, -5.0), Some(0));
        assert_eq!(nearest_index(&[], 1.0), None);
    }

    #[test]
    fn test_profit_sweep() {
        let sweep = profit_price_sweep(1_000_000.0, 0.01, 12.0, 300);
        assert_eq!(sweep.len(), 300);
        assert_eq!(sweep[0].price, 0.01);
        assert_eq!(sweep[299].price, 12.0);
        assert_relative_eq!(sweep[299].profit, 12_000_000.0);
        for w in sweep.windows(2) {
            assert!(w[1].price > w[0].price);
        }
        assert!(profit_price_sweep(1.0, 0.0, 1.0, 0).is_empty());
        assert_eq!(
            profit_price_sweep(2.0, 0.5, 1.0, 1),
            vec![SweepPoint { price: 0.5, profit: 1.0 }]
        );
    }

    #[test]
    fn test_break_even_price() {
        assert_eq!(break_even_price(1_000_000.0, 500_000.0), Some(2.0));
        assert_eq!(break_even_price(1_000_000.0, 0.0), None);
    }
}
