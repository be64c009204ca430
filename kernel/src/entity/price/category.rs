use std::fmt::{Display, Formatter};
use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::entity::{
    DaysRented, FrequentRenterPoints, Money, Tariff, CHILDREN_TARIFF, NEW_RELEASE_BONUS_AFTER_DAYS,
    NEW_RELEASE_TARIFF, REGULAR_TARIFF,
};
use crate::KernelError;

const REGULAR: &str = "Regular";
const NEW_RELEASE: &str = "New Release";
const CHILDREN: &str = "Children";

/// Pricing strategy of a movie. Charge and points depend on the rented days only.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PriceCategory {
    Regular,
    NewRelease,
    Children,
}

impl PriceCategory {
    pub const ALL: [PriceCategory; 3] = [
        PriceCategory::Regular,
        PriceCategory::NewRelease,
        PriceCategory::Children,
    ];

    pub fn tariff(&self) -> &'static Tariff {
        match self {
            PriceCategory::Regular => &REGULAR_TARIFF,
            PriceCategory::NewRelease => &NEW_RELEASE_TARIFF,
            PriceCategory::Children => &CHILDREN_TARIFF,
        }
    }

    pub fn charge(&self, days: &DaysRented) -> Money {
        self.tariff().charge(days)
    }

    pub fn points(&self, days: &DaysRented) -> FrequentRenterPoints {
        match self {
            PriceCategory::NewRelease if *days.as_ref() > NEW_RELEASE_BONUS_AFTER_DAYS => {
                FrequentRenterPoints::new(2u32)
            }
            _ => FrequentRenterPoints::new(1u32),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PriceCategory::Regular => REGULAR,
            PriceCategory::NewRelease => NEW_RELEASE,
            PriceCategory::Children => CHILDREN,
        }
    }
}

impl Display for PriceCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PriceCategory {
    type Err = Report<KernelError>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            REGULAR => Ok(PriceCategory::Regular),
            NEW_RELEASE => Ok(PriceCategory::NewRelease),
            CHILDREN => Ok(PriceCategory::Children),
            _ => Err(Report::new(KernelError::InvalidArgument)
                .attach_printable(format!("Unknown price category: {s}"))),
        }
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    use crate::entity::{DaysRented, FrequentRenterPoints, Money, PriceCategory};
    use crate::KernelError;

    fn days(value: u32) -> DaysRented {
        DaysRented::new(value).unwrap()
    }

    #[test]
    fn regular_charges_base_then_surcharge() {
        let regular = PriceCategory::Regular;
        assert_eq!(regular.charge(&days(1)), Money::new(dec!(2.00)));
        assert_eq!(regular.charge(&days(2)), Money::new(dec!(2.00)));
        assert_eq!(regular.charge(&days(3)), Money::new(dec!(3.50)));
        assert_eq!(regular.charge(&days(5)), Money::new(dec!(6.50)));
    }

    #[test]
    fn new_release_is_linear() {
        let new_release = PriceCategory::NewRelease;
        assert_eq!(new_release.charge(&days(1)), Money::new(dec!(3.00)));
        assert_eq!(new_release.charge(&days(4)), Money::new(dec!(12.00)));
    }

    #[test]
    fn children_charges_base_then_surcharge() {
        let children = PriceCategory::Children;
        assert_eq!(children.charge(&days(1)), Money::new(dec!(1.50)));
        assert_eq!(children.charge(&days(3)), Money::new(dec!(1.50)));
        assert_eq!(children.charge(&days(4)), Money::new(dec!(3.00)));
    }

    #[test]
    fn points_per_category() {
        let one = FrequentRenterPoints::new(1u32);
        let two = FrequentRenterPoints::new(2u32);
        assert_eq!(PriceCategory::Regular.points(&days(10)), one);
        assert_eq!(PriceCategory::Children.points(&days(10)), one);
        assert_eq!(PriceCategory::NewRelease.points(&days(1)), one);
        assert_eq!(PriceCategory::NewRelease.points(&days(2)), two);
    }

    #[test]
    fn parses_display_names() {
        for category in PriceCategory::ALL {
            assert_eq!(category.to_string().parse::<PriceCategory>().unwrap(), category);
        }
        let error = "Premium".parse::<PriceCategory>().unwrap_err();
        assert_eq!(error.current_context(), &KernelError::InvalidArgument);
    }

    proptest! {
        #[test]
        fn charge_never_decreases(day in 1u32..10_000) {
            for category in PriceCategory::ALL {
                let today = category.charge(&days(day));
                let tomorrow = category.charge(&days(day + 1));
                prop_assert!(tomorrow >= today);
                prop_assert!(today >= Money::ZERO);
            }
        }

        #[test]
        fn points_are_one_or_two(day in 1u32..10_000) {
            for category in PriceCategory::ALL {
                let points = *category.points(&days(day)).as_ref();
                prop_assert!((1..=2).contains(&points));
            }
        }
    }
}
