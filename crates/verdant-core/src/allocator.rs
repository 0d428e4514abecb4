//! Monthly service-distribution allocator.
//!
//! Given an annual visit target, spreads visits across the twelve months
//! of a year proportionally to each month's length in weeks, using the
//! largest-remainder method so the monthly counts always sum exactly to
//! the annual target.
//!
//! The computation is pure and deterministic: no I/O, no shared state, no
//! randomness. The cadence preference is part of the input contract but
//! does not alter the weighting; it rides along for display and future
//! use (see `cadence_does_not_alter_distribution` below, which pins that
//! behavior).
//!
//! # Examples
//!
//! ```rust
//! use verdant_core::{allocator, params::Distribute};
//!
//! let params = Distribute {
//!     year: 2026,
//!     annual_services: 24,
//!     cadence: Default::default(),
//! };
//!
//! let shares = allocator::distribute(&params);
//! assert_eq!(shares.len(), 12);
//! assert_eq!(shares.iter().map(|s| s.services).sum::<u32>(), 24);
//!
//! // Compact form, directly usable as a services_per_month value
//! let counts = allocator::services_array(&params);
//! assert_eq!(counts.iter().sum::<u32>(), 24);
//! ```

use std::cmp::Ordering;

use serde::Serialize;

use crate::params::Distribute;

/// Three-letter month abbreviations, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One month's share of the annual service target.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MonthShare {
    /// Month index, 0 (January) through 11 (December)
    pub month: u8,

    /// Three-letter month abbreviation
    pub name: &'static str,

    /// Length of the month in weeks, rounded to 2 decimals
    pub weeks: f64,

    /// Number of service visits allocated to the month
    pub services: u32,
}

/// Days in a calendar month, leap-year aware.
fn days_in_month(year: i16, month: i8) -> f64 {
    f64::from(jiff::civil::date(year, month, 1).days_in_month())
}

/// Compute the full monthly distribution for a year.
///
/// Each month is weighted by its length in weeks (`days / 7`, unrounded).
/// The real-valued proportional shares are floored, and the integer
/// shortfall is handed out one visit at a time to the months with the
/// largest fractional remainders; ties break toward the earlier month.
/// The returned shares are in calendar order and their `services` fields
/// always sum to exactly `annual_services`.
pub fn distribute(params: &Distribute) -> Vec<MonthShare> {
    let weeks: Vec<f64> = (1..=12)
        .map(|month| days_in_month(params.year, month) / 7.0)
        .collect();
    let total_weeks: f64 = weeks.iter().sum();
    let ideal_per_week = f64::from(params.annual_services) / total_weeks;

    let raw: Vec<f64> = weeks.iter().map(|w| w * ideal_per_week).collect();
    let mut services: Vec<u32> = raw.iter().map(|r| r.floor() as u32).collect();

    // Largest-remainder step: the floor pass can fall short of the target
    // by at most 11, since each month drops strictly less than one visit.
    let floored_total: u32 = services.iter().sum();
    let remainder = params.annual_services - floored_total;

    let mut by_fraction: Vec<usize> = (0..12).collect();
    // Stable sort: months with equal fractional remainders stay in
    // calendar order, so the earlier month wins the tie.
    by_fraction.sort_by(|&a, &b| {
        let fraction_a = raw[a] - raw[a].floor();
        let fraction_b = raw[b] - raw[b].floor();
        fraction_b
            .partial_cmp(&fraction_a)
            .unwrap_or(Ordering::Equal)
    });

    for &month in by_fraction.iter().take(remainder as usize) {
        services[month] += 1;
    }

    (0..12)
        .map(|m| MonthShare {
            month: m as u8,
            name: MONTH_NAMES[m],
            weeks: (weeks[m] * 100.0).round() / 100.0,
            services: services[m],
        })
        .collect()
}

/// Compute only the 12 monthly visit counts, January first.
///
/// Convenience form of [`distribute`] whose result is directly usable as
/// a `services_per_month` value.
pub fn services_array(params: &Distribute) -> [u32; 12] {
    let mut counts = [0u32; 12];
    for share in distribute(params) {
        counts[usize::from(share.month)] = share.services;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cadence;

    fn params(year: i16, annual_services: u32, cadence: Cadence) -> Distribute {
        Distribute {
            year,
            annual_services,
            cadence,
        }
    }

    #[test]
    fn sum_invariant_across_targets_and_years() {
        for year in [2023, 2024, 2025, 2026, 2100, 2000] {
            for annual in [0, 1, 5, 12, 24, 26, 52, 365] {
                let counts = services_array(&params(year, annual, Cadence::TwoWeek));
                assert_eq!(
                    counts.iter().sum::<u32>(),
                    annual,
                    "sum mismatch for year {year}, target {annual}"
                );
            }
        }
    }

    #[test]
    fn zero_services_yields_all_zeros() {
        let counts = services_array(&params(2026, 0, Cadence::TwoWeek));
        assert_eq!(counts, [0; 12]);
    }

    #[test]
    fn determinism() {
        let p = params(2026, 37, Cadence::FourWeek);
        assert_eq!(distribute(&p), distribute(&p));
    }

    #[test]
    fn cadence_does_not_alter_distribution() {
        // The cadence field is accepted but never enters the weighting.
        // If product intent ever changes, this test should change with it.
        for annual in [7, 24, 48] {
            assert_eq!(
                services_array(&params(2026, annual, Cadence::TwoWeek)),
                services_array(&params(2026, annual, Cadence::FourWeek)),
            );
        }
    }

    #[test]
    fn leap_year_shifts_february() {
        // 2024 has a 29-day February, 2023 a 28-day one. At 24 annual
        // services the remainder pass absorbs the difference and both
        // years land on an even two per month; the leap day still shows
        // in February's week count.
        let leap = distribute(&params(2024, 24, Cadence::TwoWeek));
        let common = distribute(&params(2023, 24, Cadence::TwoWeek));
        assert_eq!(common.iter().map(|s| s.services).sum::<u32>(), 24);
        assert_eq!(
            leap.iter().map(|s| s.services).collect::<Vec<_>>(),
            common.iter().map(|s| s.services).collect::<Vec<_>>(),
        );
        assert_eq!(common[1].weeks, 4.0);
        assert_eq!(leap[1].weeks, 4.14);

        // At higher targets the extra day buys February a whole visit.
        let leap = services_array(&params(2024, 122, Cadence::TwoWeek));
        let common = services_array(&params(2023, 122, Cadence::TwoWeek));
        assert_ne!(leap, common);
        assert_eq!(common[1], 9);
        assert_eq!(leap[1], 10);
    }

    #[test]
    fn twenty_four_services_approximates_two_per_month() {
        let shares = distribute(&params(2023, 24, Cadence::TwoWeek));

        // ~52.14 weeks over the year puts the ideal rate near 0.46
        // services/week: a 28-day February floors to 1 and 31-day months
        // floor to 2 before the remainder pass tops the short months up.
        assert_eq!(shares.iter().map(|s| s.services).sum::<u32>(), 24);
        for share in &shares {
            assert!(
                (1..=3).contains(&share.services),
                "{} got {}",
                share.name,
                share.services
            );
        }
    }

    #[test]
    fn week_counts_rounded_to_two_decimals() {
        let shares = distribute(&params(2023, 24, Cadence::TwoWeek));
        assert_eq!(shares[0].name, "Jan");
        assert_eq!(shares[0].weeks, 4.43); // 31 / 7
        assert_eq!(shares[1].weeks, 4.0); // 28 / 7
        assert_eq!(shares[3].weeks, 4.29); // 30 / 7

        let leap = distribute(&params(2024, 24, Cadence::TwoWeek));
        assert_eq!(leap[1].weeks, 4.14); // 29 / 7
    }

    #[test]
    fn months_in_calendar_order() {
        let shares = distribute(&params(2026, 12, Cadence::TwoWeek));
        for (index, share) in shares.iter().enumerate() {
            assert_eq!(usize::from(share.month), index);
            assert_eq!(share.name, MONTH_NAMES[index]);
        }
    }

    #[test]
    fn large_target_still_sums_exactly() {
        // No upper bound is applied; the remainder step is exact.
        let counts = services_array(&params(2026, 10_000, Cadence::TwoWeek));
        assert_eq!(counts.iter().sum::<u32>(), 10_000);
    }

    #[test]
    fn ties_break_toward_earlier_month() {
        // With 9 visits in 2023 every month floors to zero, so the
        // remainder pass walks the fraction ranking directly: the seven
        // 31-day months first, then the 30-day group, whose fractional
        // remainders tie exactly. The stable sort must hand the last two
        // visits to April and June, never to September or November.
        let counts = services_array(&params(2023, 9, Cadence::TwoWeek));
        assert_eq!(counts.iter().sum::<u32>(), 9);

        for index in [0, 2, 4, 6, 7, 9, 11] {
            assert_eq!(counts[index], 1, "31-day month {index} should get a visit");
        }
        assert_eq!(counts[3], 1, "April wins the first 30-day tie");
        assert_eq!(counts[5], 1, "June wins the second 30-day tie");
        assert_eq!(counts[8], 0);
        assert_eq!(counts[10], 0);
        assert_eq!(counts[1], 0, "February has the smallest share");
    }
}
