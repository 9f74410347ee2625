use super::finite;

/// Owner-occupied share of the neighborhood, in percent.
pub(crate) fn ownership(rate: Option<f64>) -> f64 {
    match finite(rate) {
        Some(pct) if pct >= 80.0 => 10.0,
        Some(pct) if pct >= 65.0 => 6.0,
        Some(pct) if pct >= 50.0 => 2.0,
        Some(pct) if pct >= 35.0 => -2.0,
        Some(_) => -5.0,
        None => 0.0,
    }
}

/// Median household wealth, in thousands.
pub(crate) fn wealth(median: Option<f64>) -> f64 {
    match finite(median) {
        Some(k) if k >= 300.0 => 12.0,
        Some(k) if k >= 150.0 => 8.0,
        Some(k) if k >= 75.0 => 5.0,
        Some(k) if k >= 25.0 => 2.0,
        Some(k) if k >= 0.0 => 0.0,
        Some(_) => -2.0,
        None => 0.0,
    }
}

/// Average income, in thousands.
pub(crate) fn income(average: Option<f64>) -> f64 {
    match finite(average) {
        Some(k) if k >= 60.0 => 6.0,
        Some(k) if k >= 45.0 => 4.0,
        Some(k) if k >= 35.0 => 2.0,
        _ => 0.0,
    }
}

pub(crate) fn household_size(size: Option<f64>) -> f64 {
    match finite(size) {
        Some(n) if n >= 3.0 => 4.0,
        Some(n) if n >= 2.5 => 3.0,
        Some(n) if n >= 2.0 => 1.0,
        _ => 0.0,
    }
}

pub(crate) fn children(pct: Option<f64>) -> f64 {
    match finite(pct) {
        Some(p) if p >= 40.0 => 4.0,
        Some(p) if p >= 25.0 => 2.0,
        _ => 0.0,
    }
}

/// Ordinal urban-density class, 1 (very urban) to 5 (rural). Suburban areas score best.
pub(crate) fn urbanization(class: Option<f64>) -> f64 {
    match finite(class).map(|class| class.round() as i64) {
        Some(1) => -2.0,
        Some(2) => 2.0,
        Some(3) => 4.0,
        Some(4) => 3.0,
        _ => 0.0,
    }
}

pub(crate) fn high_income(pct: Option<f64>) -> f64 {
    match finite(pct) {
        Some(p) if p >= 30.0 => 5.0,
        Some(p) if p >= 20.0 => 3.0,
        Some(p) if p >= 10.0 => 1.0,
        _ => 0.0,
    }
}

/// Penalty only: never positive.
pub(crate) fn low_income(pct: Option<f64>) -> f64 {
    match finite(pct) {
        Some(p) if p >= 40.0 => -4.0,
        Some(p) if p >= 30.0 => -3.0,
        Some(p) if p >= 20.0 => -1.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_buckets(scorer: fn(Option<f64>) -> f64, cases: &[(f64, f64)]) {
        for &(input, expected) in cases {
            assert_eq!(scorer(Some(input)), expected, "input {input}");
        }
        assert_eq!(scorer(None), 0.0);
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_buckets(
            ownership,
            &[(80.0, 10.0), (79.9, 6.0), (65.0, 6.0), (64.9, 2.0), (50.0, 2.0), (49.9, -2.0), (35.0, -2.0), (34.9, -5.0)],
        );
        assert_buckets(
            wealth,
            &[(300.0, 12.0), (299.9, 8.0), (150.0, 8.0), (149.9, 5.0), (75.0, 5.0), (74.9, 2.0), (25.0, 2.0), (24.9, 0.0), (0.0, 0.0), (-0.1, -2.0)],
        );
        assert_buckets(
            income,
            &[(60.0, 6.0), (59.9, 4.0), (45.0, 4.0), (44.9, 2.0), (35.0, 2.0), (34.9, 0.0)],
        );
        assert_buckets(
            household_size,
            &[(3.0, 4.0), (2.9, 3.0), (2.5, 3.0), (2.4, 1.0), (2.0, 1.0), (1.9, 0.0)],
        );
        assert_buckets(children, &[(40.0, 4.0), (39.9, 2.0), (25.0, 2.0), (24.9, 0.0)]);
        assert_buckets(
            high_income,
            &[(30.0, 5.0), (29.9, 3.0), (20.0, 3.0), (19.9, 1.0), (10.0, 1.0), (9.9, 0.0)],
        );
        assert_buckets(
            low_income,
            &[(40.0, -4.0), (39.9, -3.0), (30.0, -3.0), (29.9, -1.0), (20.0, -1.0), (19.9, 0.0)],
        );
    }

    #[test]
    fn ownership_steps_through_five_buckets() {
        assert_eq!(ownership(Some(92.0)), 10.0);
        assert_eq!(ownership(Some(80.0)), 10.0);
        assert_eq!(ownership(Some(70.0)), 6.0);
        assert_eq!(ownership(Some(50.0)), 2.0);
        assert_eq!(ownership(Some(40.0)), -2.0);
        assert_eq!(ownership(Some(10.0)), -5.0);
        assert_eq!(ownership(None), 0.0);
    }

    #[test]
    fn negative_wealth_is_penalized() {
        assert_eq!(wealth(Some(-12.0)), -2.0);
        assert_eq!(wealth(Some(0.0)), 0.0);
        assert_eq!(wealth(Some(400.0)), 12.0);
    }

    #[test]
    fn urbanization_is_not_monotonic() {
        assert_eq!(urbanization(Some(1.0)), -2.0);
        assert_eq!(urbanization(Some(2.0)), 2.0);
        assert_eq!(urbanization(Some(3.0)), 4.0);
        assert_eq!(urbanization(Some(4.0)), 3.0);
        assert_eq!(urbanization(Some(5.0)), 0.0);
        assert_eq!(urbanization(Some(9.0)), 0.0);
        assert_eq!(urbanization(Some(300.0)), 0.0);
        assert_eq!(urbanization(Some(f64::NAN)), 0.0);
    }

    #[test]
    fn fractional_urbanization_rounds_to_the_nearest_class() {
        assert_eq!(urbanization(Some(2.6)), 4.0);
        assert_eq!(urbanization(Some(1.2)), -2.0);
    }

    #[test]
    fn low_income_never_rewards() {
        for pct in [0.0, 15.0, 25.0, 35.0, 80.0] {
            assert!(low_income(Some(pct)) <= 0.0);
        }
        assert_eq!(low_income(Some(45.0)), -4.0);
    }

    #[test]
    fn non_finite_inputs_count_as_missing() {
        assert_eq!(ownership(Some(f64::NAN)), 0.0);
        assert_eq!(wealth(Some(f64::NEG_INFINITY)), 0.0);
        assert_eq!(income(Some(f64::INFINITY)), 0.0);
    }
}
