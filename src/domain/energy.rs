// SPDX-License-Identifier: MPL-2.0
//! Energy consumption datasets for the dashboard panel.

use serde::{Deserialize, Serialize};

/// Period selectable in the energy panel. Persisted across sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyPeriod {
    #[default]
    Today,
    Week,
    Month,
}

impl EnergyPeriod {
    pub const ALL: [EnergyPeriod; 3] = [EnergyPeriod::Today, EnergyPeriod::Week, EnergyPeriod::Month];

    pub fn i18n_key(self) -> &'static str {
        match self {
            EnergyPeriod::Today => "dashboard.energy.today",
            EnergyPeriod::Week => "dashboard.energy.week",
            EnergyPeriod::Month => "dashboard.energy.month",
        }
    }
}

/// One bar of the consumption chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyPoint {
    pub label: &'static str,
    pub kwh: f32,
}

const TODAY: [EnergyPoint; 8] = [
    EnergyPoint { label: "00:00", kwh: 0.8 },
    EnergyPoint { label: "03:00", kwh: 0.5 },
    EnergyPoint { label: "06:00", kwh: 0.9 },
    EnergyPoint { label: "09:00", kwh: 1.8 },
    EnergyPoint { label: "12:00", kwh: 2.3 },
    EnergyPoint { label: "15:00", kwh: 1.9 },
    EnergyPoint { label: "18:00", kwh: 2.7 },
    EnergyPoint { label: "21:00", kwh: 2.2 },
];

const WEEK: [EnergyPoint; 7] = [
    EnergyPoint { label: "Mon", kwh: 10.5 },
    EnergyPoint { label: "Tue", kwh: 12.2 },
    EnergyPoint { label: "Wed", kwh: 9.8 },
    EnergyPoint { label: "Thu", kwh: 11.3 },
    EnergyPoint { label: "Fri", kwh: 14.2 },
    EnergyPoint { label: "Sat", kwh: 16.5 },
    EnergyPoint { label: "Sun", kwh: 13.8 },
];

const MONTH: [EnergyPoint; 4] = [
    EnergyPoint { label: "Week 1", kwh: 68.0 },
    EnergyPoint { label: "Week 2", kwh: 72.0 },
    EnergyPoint { label: "Week 3", kwh: 65.0 },
    EnergyPoint { label: "Week 4", kwh: 70.0 },
];

/// Dataset for the given period.
pub fn consumption(period: EnergyPeriod) -> &'static [EnergyPoint] {
    match period {
        EnergyPeriod::Today => &TODAY,
        EnergyPeriod::Week => &WEEK,
        EnergyPeriod::Month => &MONTH,
    }
}

/// Sum of all points in the period, in kWh.
pub fn total_kwh(period: EnergyPeriod) -> f32 {
    consumption(period).iter().map(|p| p.kwh).sum()
}

/// Largest single point, used to scale chart bars. Never zero for the
/// shipped datasets.
pub fn peak_kwh(period: EnergyPeriod) -> f32 {
    consumption(period)
        .iter()
        .map(|p| p.kwh)
        .fold(0.0_f32, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datasets_have_expected_lengths() {
        assert_eq!(consumption(EnergyPeriod::Today).len(), 8);
        assert_eq!(consumption(EnergyPeriod::Week).len(), 7);
        assert_eq!(consumption(EnergyPeriod::Month).len(), 4);
    }

    #[test]
    fn totals_match_the_datasets() {
        assert!((total_kwh(EnergyPeriod::Today) - 13.1).abs() < 0.01);
        assert!((total_kwh(EnergyPeriod::Week) - 88.3).abs() < 0.01);
        assert!((total_kwh(EnergyPeriod::Month) - 275.0).abs() < 0.01);
    }

    #[test]
    fn peak_is_the_largest_point() {
        assert!((peak_kwh(EnergyPeriod::Today) - 2.7).abs() < f32::EPSILON);
        assert!((peak_kwh(EnergyPeriod::Week) - 16.5).abs() < f32::EPSILON);
        assert!((peak_kwh(EnergyPeriod::Month) - 72.0).abs() < f32::EPSILON);
    }

    #[test]
    fn default_period_is_today() {
        assert_eq!(EnergyPeriod::default(), EnergyPeriod::Today);
    }
}
