use super::finite;

fn label_delta(class: &str) -> f64 {
    match class.trim().to_ascii_uppercase().as_str() {
        "G" => 12.0,
        "F" => 10.0,
        "E" => 8.0,
        "D" => 5.0,
        "C" => 2.0,
        "B" => 0.0,
        "A" => -1.0,
        "A+" | "A++" => -2.0,
        "A+++" | "A++++" => -3.0,
        _ => 0.0,
    }
}

fn index_delta(index: f64) -> f64 {
    if index > 2.5 {
        4.0
    } else if index > 1.8 {
        2.0
    } else if index > 1.2 {
        1.0
    } else if index >= 0.8 {
        0.0
    } else {
        -1.0
    }
}

/// Letter label and numeric energy index, summed into one raw value.
pub(crate) fn energy_label(class: Option<&str>, index: Option<f64>) -> f64 {
    let letter = class.map(label_delta).unwrap_or(0.0);
    let numeric = finite(index).map(index_delta).unwrap_or(0.0);
    letter + numeric
}

/// Annual gas usage in m³.
pub(crate) fn gas_usage(m3: Option<f64>) -> f64 {
    match finite(m3) {
        Some(v) if v >= 2500.0 => 8.0,
        Some(v) if v >= 1800.0 => 5.0,
        Some(v) if v >= 1200.0 => 2.0,
        Some(v) if v >= 800.0 => 0.0,
        Some(v) if v >= 500.0 => -2.0,
        Some(_) => -4.0,
        None => 0.0,
    }
}

/// Annual electricity usage in kWh.
pub(crate) fn electricity_usage(kwh: Option<f64>) -> f64 {
    match finite(kwh) {
        Some(v) if v >= 5000.0 => 8.0,
        Some(v) if v >= 3500.0 => 5.0,
        Some(v) if v >= 2500.0 => 3.0,
        Some(v) if v >= 1500.0 => 1.0,
        _ => 0.0,
    }
}

/// Construction year with a small area-level correction, clamped to [-2, 8].
pub(crate) fn building_age(construction_year: Option<i32>, built_after_2000_pct: Option<f64>) -> f64 {
    let from_year = match construction_year {
        Some(year) if year < 1945 => 6.0,
        Some(year) if year < 1975 => 5.0,
        Some(year) if year < 1992 => 3.0,
        Some(year) if year < 2006 => 1.0,
        Some(year) if year < 2015 => 0.0,
        Some(_) => -1.0,
        None => 0.0,
    };

    let area_adjustment = match finite(built_after_2000_pct) {
        Some(pct) if pct < 15.0 => 2.0,
        Some(pct) if pct > 70.0 => -2.0,
        _ => 0.0,
    };

    f64::clamp(from_year + area_adjustment, -2.0, 8.0)
}

/// Assessed (WOZ) value, in thousands.
pub(crate) fn woz_value(thousands: Option<f64>) -> f64 {
    match finite(thousands) {
        Some(v) if v >= 600.0 => 4.0,
        Some(v) if v >= 400.0 => 3.0,
        Some(v) if v >= 300.0 => 2.0,
        Some(v) if v >= 200.0 => 1.0,
        _ => 0.0,
    }
}
