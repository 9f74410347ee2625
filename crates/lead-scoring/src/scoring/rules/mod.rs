mod behavioral;
mod demographic;
mod property;

use super::factor::Factor;
use super::keywords::ScoringKeywords;
use super::ScoringInput;

/// Treat NaN and infinities as absent data.
pub(crate) fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Unweighted point value of every factor, in catalogue order.
pub(crate) fn raw_factors(input: &ScoringInput<'_>, keywords: &ScoringKeywords) -> Vec<(Factor, f64)> {
    let lead = input.lead;
    let service = input.service;

    Factor::ALL
        .iter()
        .map(|&factor| {
            let raw = match factor {
                Factor::Ownership => demographic::ownership(lead.ownership_rate),
                Factor::Wealth => demographic::wealth(lead.median_wealth),
                Factor::Income => demographic::income(lead.average_income),
                Factor::HouseholdSize => demographic::household_size(lead.household_size),
                Factor::Children => demographic::children(lead.children_pct),
                Factor::Urbanization => demographic::urbanization(lead.urbanization),
                Factor::HighIncome => demographic::high_income(lead.high_income_pct),
                Factor::LowIncome => demographic::low_income(lead.low_income_pct),
                Factor::EnergyLabel => {
                    property::energy_label(lead.energy_class.as_deref(), lead.energy_index)
                }
                Factor::GasUsage => property::gas_usage(lead.gas_usage),
                Factor::ElectricityUsage => property::electricity_usage(lead.electricity_usage),
                Factor::BuildingAge => {
                    property::building_age(lead.construction_year, lead.built_after_2000_pct)
                }
                Factor::WozValue => property::woz_value(lead.woz_value),
                Factor::LeadAge => behavioral::lead_age(lead.created_at, input.now),
                Factor::Status => behavioral::status(service.map(|service| service.status)),
                Factor::NotesActivity => behavioral::notes_activity(input.notes, input.now),
                Factor::PhotoAnalysis => behavioral::photo_analysis(input.photo_analysis),
                Factor::ConsumerNote => behavioral::consumer_note(
                    service.and_then(|service| service.consumer_note.as_deref()),
                    keywords,
                ),
                Factor::SourceQuality => behavioral::source_quality(
                    service.and_then(|service| service.source.as_deref()),
                    lead.source.as_deref(),
                    keywords,
                ),
                Factor::Assignment => behavioral::assignment(lead.assigned_agent),
                Factor::Appointments => behavioral::appointments(&input.appointments),
            };
            (factor, raw)
        })
        .collect()
}
