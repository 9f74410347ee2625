use serde::{Deserialize, Serialize};

/// Grouping used when reporting how a score was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorCategory {
    Demographic,
    Property,
    Behavioral,
}

/// Weighted factors known to the engine.
///
/// The ledger key of a factor is part of the persisted score format; renaming one
/// requires bumping [`crate::scoring::SCORING_VERSION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Ownership,
    Wealth,
    Income,
    HouseholdSize,
    Children,
    Urbanization,
    HighIncome,
    LowIncome,
    EnergyLabel,
    GasUsage,
    ElectricityUsage,
    BuildingAge,
    WozValue,
    LeadAge,
    Status,
    NotesActivity,
    PhotoAnalysis,
    ConsumerNote,
    SourceQuality,
    Assignment,
    Appointments,
}

impl Factor {
    pub const ALL: [Factor; 21] = [
        Factor::Ownership,
        Factor::Wealth,
        Factor::Income,
        Factor::HouseholdSize,
        Factor::Children,
        Factor::Urbanization,
        Factor::HighIncome,
        Factor::LowIncome,
        Factor::EnergyLabel,
        Factor::GasUsage,
        Factor::ElectricityUsage,
        Factor::BuildingAge,
        Factor::WozValue,
        Factor::LeadAge,
        Factor::Status,
        Factor::NotesActivity,
        Factor::PhotoAnalysis,
        Factor::ConsumerNote,
        Factor::SourceQuality,
        Factor::Assignment,
        Factor::Appointments,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Factor::Ownership => "ownership",
            Factor::Wealth => "wealth",
            Factor::Income => "income",
            Factor::HouseholdSize => "household_size",
            Factor::Children => "children",
            Factor::Urbanization => "urbanization",
            Factor::HighIncome => "high_income",
            Factor::LowIncome => "low_income",
            Factor::EnergyLabel => "energy_label",
            Factor::GasUsage => "gas_usage",
            Factor::ElectricityUsage => "electricity_usage",
            Factor::BuildingAge => "building_age",
            Factor::WozValue => "woz_value",
            Factor::LeadAge => "lead_age",
            Factor::Status => "status",
            Factor::NotesActivity => "notes_activity",
            Factor::PhotoAnalysis => "photo_analysis",
            Factor::ConsumerNote => "consumer_note",
            Factor::SourceQuality => "source_quality",
            Factor::Assignment => "assignment",
            Factor::Appointments => "appointments",
        }
    }

    pub const fn category(self) -> FactorCategory {
        match self {
            Factor::Ownership
            | Factor::Wealth
            | Factor::Income
            | Factor::HouseholdSize
            | Factor::Children
            | Factor::Urbanization
            | Factor::HighIncome
            | Factor::LowIncome => FactorCategory::Demographic,
            Factor::EnergyLabel
            | Factor::GasUsage
            | Factor::ElectricityUsage
            | Factor::BuildingAge
            | Factor::WozValue => FactorCategory::Property,
            Factor::LeadAge
            | Factor::Status
            | Factor::NotesActivity
            | Factor::PhotoAnalysis
            | Factor::ConsumerNote
            | Factor::SourceQuality
            | Factor::Assignment
            | Factor::Appointments => FactorCategory::Behavioral,
        }
    }

    /// Whether the enrichment confidence coefficient scales this factor.
    ///
    /// Energy label and construction year come from authoritative registries and are
    /// not scaled, while the statistical area-level estimates are.
    pub const fn confidence_scaled(self) -> bool {
        matches!(
            self,
            Factor::Ownership
                | Factor::Wealth
                | Factor::Income
                | Factor::HouseholdSize
                | Factor::Children
                | Factor::Urbanization
                | Factor::HighIncome
                | Factor::LowIncome
                | Factor::GasUsage
                | Factor::ElectricityUsage
                | Factor::WozValue
        )
    }
}
