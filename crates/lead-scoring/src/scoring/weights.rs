//! Per-vertical weight profiles.
//!
//! Profiles are plain data: each vertical overrides only the multipliers it cares
//! about and inherits the rest from [`DEFAULT_PROFILE`]. Tuning changes should show
//! up as diffs in this table, never as new branches in the scoring rules.

use serde::Serialize;

use super::factor::Factor;

/// Immutable set of per-factor multipliers for one service vertical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightProfile {
    pub name: &'static str,
    pub ownership: f64,
    pub wealth: f64,
    pub income: f64,
    pub household_size: f64,
    pub children: f64,
    pub urbanization: f64,
    pub high_income: f64,
    pub low_income: f64,
    pub energy_label: f64,
    pub gas_usage: f64,
    pub electricity_usage: f64,
    pub building_age: f64,
    pub woz_value: f64,
    pub lead_age: f64,
    pub status: f64,
    pub notes_activity: f64,
    pub photo_analysis: f64,
    pub consumer_note: f64,
    pub source_quality: f64,
    pub assignment: f64,
    pub appointments: f64,
}

impl WeightProfile {
    pub const fn weight(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Ownership => self.ownership,
            Factor::Wealth => self.wealth,
            Factor::Income => self.income,
            Factor::HouseholdSize => self.household_size,
            Factor::Children => self.children,
            Factor::Urbanization => self.urbanization,
            Factor::HighIncome => self.high_income,
            Factor::LowIncome => self.low_income,
            Factor::EnergyLabel => self.energy_label,
            Factor::GasUsage => self.gas_usage,
            Factor::ElectricityUsage => self.electricity_usage,
            Factor::BuildingAge => self.building_age,
            Factor::WozValue => self.woz_value,
            Factor::LeadAge => self.lead_age,
            Factor::Status => self.status,
            Factor::NotesActivity => self.notes_activity,
            Factor::PhotoAnalysis => self.photo_analysis,
            Factor::ConsumerNote => self.consumer_note,
            Factor::SourceQuality => self.source_quality,
            Factor::Assignment => self.assignment,
            Factor::Appointments => self.appointments,
        }
    }

    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_PROFILE.name
    }
}

pub const DEFAULT_PROFILE: WeightProfile = WeightProfile {
    name: "default",
    ownership: 1.0,
    wealth: 1.0,
    income: 1.0,
    household_size: 1.0,
    children: 1.0,
    urbanization: 1.0,
    high_income: 1.0,
    low_income: 1.0,
    energy_label: 1.0,
    gas_usage: 1.0,
    electricity_usage: 1.0,
    building_age: 1.0,
    woz_value: 1.0,
    lead_age: 1.0,
    status: 1.0,
    notes_activity: 1.0,
    photo_analysis: 1.0,
    consumer_note: 1.0,
    source_quality: 1.0,
    assignment: 1.0,
    appointments: 1.0,
};

const SOLAR: WeightProfile = WeightProfile {
    name: "solar",
    ownership: 1.5,
    wealth: 1.4,
    income: 1.2,
    high_income: 1.2,
    urbanization: 0.8,
    energy_label: 0.6,
    gas_usage: 0.5,
    electricity_usage: 1.8,
    building_age: 0.5,
    woz_value: 1.2,
    ..DEFAULT_PROFILE
};

const HEAT_PUMP: WeightProfile = WeightProfile {
    name: "heat_pump",
    ownership: 1.4,
    wealth: 1.3,
    income: 1.2,
    energy_label: 1.2,
    gas_usage: 1.6,
    electricity_usage: 0.8,
    building_age: 0.8,
    woz_value: 1.1,
    ..DEFAULT_PROFILE
};

const INSULATION: WeightProfile = WeightProfile {
    name: "insulation",
    ownership: 1.3,
    wealth: 1.1,
    energy_label: 1.5,
    gas_usage: 1.5,
    electricity_usage: 0.5,
    building_age: 1.4,
    ..DEFAULT_PROFILE
};

const WINDOWS: WeightProfile = WeightProfile {
    name: "windows",
    ownership: 1.3,
    wealth: 1.2,
    energy_label: 1.3,
    gas_usage: 1.1,
    electricity_usage: 0.5,
    building_age: 1.3,
    woz_value: 1.1,
    ..DEFAULT_PROFILE
};

const BOILER: WeightProfile = WeightProfile {
    name: "boiler",
    ownership: 1.1,
    wealth: 0.8,
    income: 0.8,
    energy_label: 0.8,
    gas_usage: 1.4,
    electricity_usage: 0.3,
    building_age: 1.0,
    lead_age: 1.3,
    consumer_note: 1.3,
    photo_analysis: 1.2,
    ..DEFAULT_PROFILE
};

const PLUMBING: WeightProfile = WeightProfile {
    name: "plumbing",
    ownership: 0.5,
    wealth: 0.4,
    income: 0.4,
    household_size: 0.6,
    children: 0.5,
    urbanization: 0.5,
    high_income: 0.4,
    low_income: 0.5,
    energy_label: 0.2,
    gas_usage: 0.3,
    electricity_usage: 0.2,
    building_age: 0.7,
    woz_value: 0.4,
    lead_age: 1.5,
    status: 1.2,
    notes_activity: 1.3,
    photo_analysis: 1.4,
    consumer_note: 1.5,
    appointments: 1.3,
    ..DEFAULT_PROFILE
};

const ELECTRICAL: WeightProfile = WeightProfile {
    name: "electrical",
    ownership: 0.7,
    wealth: 0.6,
    income: 0.6,
    energy_label: 0.3,
    gas_usage: 0.2,
    electricity_usage: 1.2,
    building_age: 1.2,
    lead_age: 1.4,
    photo_analysis: 1.3,
    consumer_note: 1.4,
    ..DEFAULT_PROFILE
};

const ROOFING: WeightProfile = WeightProfile {
    name: "roofing",
    ownership: 1.4,
    wealth: 1.0,
    energy_label: 0.7,
    gas_usage: 0.6,
    electricity_usage: 0.3,
    building_age: 1.5,
    woz_value: 1.2,
    lead_age: 1.2,
    photo_analysis: 1.5,
    consumer_note: 1.2,
    ..DEFAULT_PROFILE
};

const PAINTING: WeightProfile = WeightProfile {
    name: "painting",
    ownership: 1.2,
    wealth: 1.1,
    income: 1.1,
    energy_label: 0.2,
    gas_usage: 0.2,
    electricity_usage: 0.2,
    building_age: 1.1,
    woz_value: 1.3,
    photo_analysis: 1.3,
    ..DEFAULT_PROFILE
};

const HOME_BATTERY: WeightProfile = WeightProfile {
    name: "home_battery",
    ownership: 1.5,
    wealth: 1.6,
    income: 1.3,
    high_income: 1.4,
    energy_label: 0.4,
    gas_usage: 0.3,
    electricity_usage: 2.0,
    building_age: 0.3,
    woz_value: 1.3,
    ..DEFAULT_PROFILE
};

const EV_CHARGER: WeightProfile = WeightProfile {
    name: "ev_charger",
    ownership: 1.4,
    wealth: 1.3,
    income: 1.5,
    high_income: 1.5,
    urbanization: 1.2,
    energy_label: 0.2,
    gas_usage: 0.2,
    electricity_usage: 1.4,
    building_age: 0.3,
    ..DEFAULT_PROFILE
};

const VENTILATION: WeightProfile = WeightProfile {
    name: "ventilation",
    ownership: 1.2,
    energy_label: 1.2,
    gas_usage: 0.9,
    electricity_usage: 0.8,
    building_age: 1.2,
    household_size: 1.2,
    ..DEFAULT_PROFILE
};

const BATHROOM: WeightProfile = WeightProfile {
    name: "bathroom",
    ownership: 1.4,
    wealth: 1.4,
    income: 1.3,
    high_income: 1.2,
    energy_label: 0.3,
    gas_usage: 0.3,
    electricity_usage: 0.3,
    building_age: 1.0,
    woz_value: 1.4,
    photo_analysis: 1.2,
    ..DEFAULT_PROFILE
};

const KITCHEN: WeightProfile = WeightProfile {
    name: "kitchen",
    ownership: 1.4,
    wealth: 1.5,
    income: 1.4,
    high_income: 1.3,
    household_size: 1.2,
    energy_label: 0.2,
    gas_usage: 0.3,
    electricity_usage: 0.3,
    woz_value: 1.5,
    ..DEFAULT_PROFILE
};

const RENOVATION: WeightProfile = WeightProfile {
    name: "renovation",
    ownership: 1.5,
    wealth: 1.5,
    income: 1.3,
    high_income: 1.3,
    energy_label: 0.8,
    building_age: 1.4,
    woz_value: 1.5,
    notes_activity: 1.2,
    appointments: 1.2,
    ..DEFAULT_PROFILE
};

const FLOORING: WeightProfile = WeightProfile {
    name: "flooring",
    ownership: 1.2,
    wealth: 1.2,
    income: 1.1,
    energy_label: 0.3,
    gas_usage: 0.3,
    electricity_usage: 0.2,
    woz_value: 1.2,
    ..DEFAULT_PROFILE
};

const GARDEN: WeightProfile = WeightProfile {
    name: "garden",
    ownership: 1.3,
    wealth: 1.2,
    urbanization: 1.5,
    children: 1.2,
    energy_label: 0.1,
    gas_usage: 0.1,
    electricity_usage: 0.1,
    building_age: 0.3,
    woz_value: 1.3,
    ..DEFAULT_PROFILE
};

const CLEANING: WeightProfile = WeightProfile {
    name: "cleaning",
    ownership: 0.6,
    wealth: 1.2,
    income: 1.4,
    high_income: 1.4,
    household_size: 1.3,
    children: 1.3,
    energy_label: 0.1,
    gas_usage: 0.1,
    electricity_usage: 0.1,
    building_age: 0.2,
    ..DEFAULT_PROFILE
};

const LOCKSMITH: WeightProfile = WeightProfile {
    name: "locksmith",
    ownership: 0.4,
    wealth: 0.3,
    income: 0.3,
    household_size: 0.3,
    children: 0.3,
    urbanization: 0.6,
    high_income: 0.3,
    low_income: 0.3,
    energy_label: 0.0,
    gas_usage: 0.0,
    electricity_usage: 0.0,
    building_age: 0.2,
    woz_value: 0.3,
    lead_age: 1.8,
    status: 1.3,
    consumer_note: 1.5,
    assignment: 1.3,
    ..DEFAULT_PROFILE
};

const PEST_CONTROL: WeightProfile = WeightProfile {
    name: "pest_control",
    ownership: 0.6,
    wealth: 0.5,
    income: 0.5,
    urbanization: 1.2,
    energy_label: 0.0,
    gas_usage: 0.0,
    electricity_usage: 0.0,
    building_age: 0.8,
    lead_age: 1.5,
    photo_analysis: 1.5,
    consumer_note: 1.4,
    ..DEFAULT_PROFILE
};

/// Lookup table keyed by normalized service type. Dutch aliases share the record of
/// their English counterpart.
static PROFILES: &[(&str, &WeightProfile)] = &[
    ("solar", &SOLAR),
    ("zonnepanelen", &SOLAR),
    ("heat_pump", &HEAT_PUMP),
    ("warmtepomp", &HEAT_PUMP),
    ("insulation", &INSULATION),
    ("isolatie", &INSULATION),
    ("windows", &WINDOWS),
    ("kozijnen", &WINDOWS),
    ("boiler", &BOILER),
    ("cv-ketel", &BOILER),
    ("plumbing", &PLUMBING),
    ("loodgieter", &PLUMBING),
    ("electrical", &ELECTRICAL),
    ("elektricien", &ELECTRICAL),
    ("roofing", &ROOFING),
    ("dakwerk", &ROOFING),
    ("painting", &PAINTING),
    ("schilderwerk", &PAINTING),
    ("home_battery", &HOME_BATTERY),
    ("thuisbatterij", &HOME_BATTERY),
    ("ev_charger", &EV_CHARGER),
    ("laadpaal", &EV_CHARGER),
    ("ventilation", &VENTILATION),
    ("ventilatie", &VENTILATION),
    ("bathroom", &BATHROOM),
    ("badkamer", &BATHROOM),
    ("kitchen", &KITCHEN),
    ("keuken", &KITCHEN),
    ("renovation", &RENOVATION),
    ("verbouwing", &RENOVATION),
    ("flooring", &FLOORING),
    ("vloeren", &FLOORING),
    ("garden", &GARDEN),
    ("tuin", &GARDEN),
    ("cleaning", &CLEANING),
    ("schoonmaak", &CLEANING),
    ("locksmith", &LOCKSMITH),
    ("slotenmaker", &LOCKSMITH),
    ("pest_control", &PEST_CONTROL),
    ("ongediertebestrijding", &PEST_CONTROL),
];

/// Resolve the weight profile for a free-form service type.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Unknown or empty
/// input resolves to [`DEFAULT_PROFILE`].
pub fn resolve(service_type: &str) -> &'static WeightProfile {
    let key = service_type.trim().to_lowercase();
    if key.is_empty() {
        return &DEFAULT_PROFILE;
    }

    PROFILES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, profile)| *profile)
        .unwrap_or(&DEFAULT_PROFILE)
}

/// All lookup keys, including aliases, in table order.
pub fn registered_service_types() -> Vec<&'static str> {
    PROFILES.iter().map(|(name, _)| *name).collect()
}
