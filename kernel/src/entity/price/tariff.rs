use rust_decimal_macros::dec;

use crate::entity::{DaysRented, Money};

/// Regular: 2.00 covers the first two days, every further day costs 1.50.
pub const REGULAR_TARIFF: Tariff = Tariff::new(Money::new(dec!(2.00)), 2, Money::new(dec!(1.50)));

/// New release: 3.00 per day from the first day on.
pub const NEW_RELEASE_TARIFF: Tariff = Tariff::new(Money::ZERO, 0, Money::new(dec!(3.00)));

/// Children: 1.50 covers the first three days, every further day costs 1.50.
pub const CHILDREN_TARIFF: Tariff = Tariff::new(Money::new(dec!(1.50)), 3, Money::new(dec!(1.50)));

/// New releases rented for longer than this many days earn a bonus point.
pub const NEW_RELEASE_BONUS_AFTER_DAYS: u32 = 1;

/// A flat fee covering `covered_days`, plus a surcharge for every day beyond them.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Tariff {
    base: Money,
    covered_days: u32,
    per_extra_day: Money,
}

impl Tariff {
    pub const fn new(base: Money, covered_days: u32, per_extra_day: Money) -> Self {
        Self {
            base,
            covered_days,
            per_extra_day,
        }
    }

    pub fn base(&self) -> Money {
        self.base
    }

    pub fn covered_days(&self) -> u32 {
        self.covered_days
    }

    pub fn per_extra_day(&self) -> Money {
        self.per_extra_day
    }

    pub fn charge(&self, days: &DaysRented) -> Money {
        let extra_days = days.as_ref().saturating_sub(self.covered_days);
        self.base + self.per_extra_day * extra_days
    }
}
