//! Back-fills two prior years of spend from the current year.
//!
//! Each year is the following year scaled by an independent multiplier in
//! `[0.8, 1.2]`. The generator is always supplied by the caller, so a seeded
//! `StdRng` reproduces a run exactly.

use factsheet_types::SpendRecord;
use rand::Rng;

pub const MAX_YEARLY_DRIFT: f64 = 0.2;

/// Years of the series, oldest first.
pub const SERIES_YEARS: [i32; 3] = [2022, 2023, 2024];

/// A spend record with its two derived prior years.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedSpend {
    record: SpendRecord,
    spend_2023: f64,
    spend_2022: f64,
}

impl SimulatedSpend {
    pub fn record(&self) -> &SpendRecord {
        &self.record
    }

    pub fn spend_2024(&self) -> f64 {
        self.record.spend_2024
    }

    pub fn spend_2023(&self) -> f64 {
        self.spend_2023
    }

    pub fn spend_2022(&self) -> f64 {
        self.spend_2022
    }

    /// `[2022, 2023, 2024]` values.
    pub fn series(&self) -> [f64; 3] {
        [self.spend_2022, self.spend_2023, self.record.spend_2024]
    }
}

/// Draws two multipliers per record, in record order, from one stream.
pub fn simulate_history<R>(records: Vec<SpendRecord>, rng: &mut R) -> Vec<SimulatedSpend>
where
    R: Rng,
{
    records
        .into_iter()
        .map(|record| {
            let m1: f64 = rng.random_range(-MAX_YEARLY_DRIFT..=MAX_YEARLY_DRIFT);
            let m2: f64 = rng.random_range(-MAX_YEARLY_DRIFT..=MAX_YEARLY_DRIFT);
            let spend_2023 = record.spend_2024 * (1.0 + m1);
            let spend_2022 = spend_2023 * (1.0 + m2);
            SimulatedSpend {
                record,
                spend_2023,
                spend_2022,
            }
        })
        .collect()
}

/// Element-wise sum of the series of several rows.
pub fn sum_series<'a>(rows: impl IntoIterator<Item = &'a SimulatedSpend>) -> [f64; 3] {
    rows.into_iter().fold([0.0; 3], |mut acc, row| {
        for (total, value) in acc.iter_mut().zip(row.series()) {
            *total += value;
        }
        acc
    })
}
