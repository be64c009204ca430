use destructure::Mutation;
use vodca::References;

use crate::entity::{FrequentRenterPoints, Money, Rental, User};
use crate::statement::{Statement, StatementContents};
use crate::KernelError;

/// Column widths of a printed [`Bill`].
#[derive(Debug, Clone, Eq, PartialEq, References, Mutation)]
pub struct BillLayout {
    title_width: usize,
    days_width: usize,
    amount_width: usize,
}

impl BillLayout {
    pub fn new(title_width: usize, days_width: usize, amount_width: usize) -> Self {
        Self {
            title_width,
            days_width,
            amount_width,
        }
    }
}

impl Default for BillLayout {
    fn default() -> Self {
        Self::new(30, 4, 10)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Bill {
    contents: StatementContents,
    layout: BillLayout,
}

impl Bill {
    pub fn new(
        last_name: impl AsRef<str>,
        first_name: impl AsRef<str>,
        rentals: Option<Vec<Rental>>,
    ) -> error_stack::Result<Self, KernelError> {
        Ok(Self {
            contents: StatementContents::new(last_name, first_name, rentals)?,
            layout: BillLayout::default(),
        })
    }

    pub fn for_user(user: &User, rentals: Vec<Rental>) -> error_stack::Result<Self, KernelError> {
        Self::new(user.last_name().as_ref(), user.first_name().as_ref(), Some(rentals))
    }

    pub fn with_layout(mut self, layout: BillLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn layout(&self) -> &BillLayout {
        &self.layout
    }

    pub fn total_charge(&self) -> Money {
        self.rentals().iter().map(Rental::charge).sum()
    }

    pub fn total_points(&self) -> FrequentRenterPoints {
        self.rentals().iter().map(Rental::points).sum()
    }

    fn row(&self, title: &str, days: &str, amount: &str) -> String {
        format!(
            "\t{title:<title_width$}{days:>days_width$}{amount:>amount_width$}",
            title_width = self.layout.title_width,
            days_width = self.layout.days_width,
            amount_width = self.layout.amount_width,
        )
    }
}

impl Statement for Bill {
    fn contents(&self) -> &StatementContents {
        &self.contents
    }

    fn print(&self) -> String {
        let mut lines = Vec::with_capacity(self.rentals().len() + 4);
        lines.push(format!(
            "Rental Record for {} {}",
            self.first_name(),
            self.last_name()
        ));
        lines.push(self.row("Title", "Days", "Amount"));
        lines.extend(self.rentals().iter().map(|rental| {
            self.row(
                rental.movie().title().as_ref(),
                &rental.days_rented().as_ref().to_string(),
                &rental.charge().to_string(),
            )
        }));
        lines.push(format!("Total charge: {}", self.total_charge()));
        lines.push(format!(
            "You earned {} frequent renter points",
            self.total_points()
        ));
        lines.join("\n")
    }
}

#[cfg(test)]
mod test {
    use std::thread;

    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    use crate::entity::{FrequentRenterPoints, Money, PriceCategory, Rental};
    use crate::statement::test::{movie, rental, three_rentals, user};
    use crate::statement::{Bill, BillLayout, Statement};
    use crate::KernelError;

    #[test]
    fn prints_customer_rentals_and_totals() {
        let hans = user("Muster", "Hans");
        let rentals = vec![
            rental(&hans, movie("Avatar", PriceCategory::Regular), 3),
            rental(&hans, movie("Casablanca", PriceCategory::Regular), 1),
        ];
        let bill = Bill::for_user(&hans, rentals).unwrap();

        assert_eq!(bill.total_charge(), Money::new(dec!(5.50)));
        assert_eq!(bill.total_points(), FrequentRenterPoints::new(2u32));

        let expected = [
            "Rental Record for Hans Muster",
            "\tTitle                         Days    Amount",
            "\tAvatar                           3      3.50",
            "\tCasablanca                       1      2.00",
            "Total charge: 5.50",
            "You earned 2 frequent renter points",
        ]
        .join("\n");
        assert_eq!(bill.print(), expected);
    }

    #[test]
    fn prints_truncated_names_in_header() {
        let bill = Bill::new("Mustermann", "Maximilian", Some(vec![])).unwrap();
        assert!(bill.print().starts_with("Rental Record for Maxim.. Muste..\n"));
    }

    #[test]
    fn empty_bill_has_zero_totals() {
        let bill = Bill::new("Muster", "Hans", Some(vec![])).unwrap();
        assert_eq!(bill.total_charge(), Money::ZERO);
        assert_eq!(bill.total_points(), FrequentRenterPoints::default());
        let expected = [
            "Rental Record for Hans Muster",
            "\tTitle                         Days    Amount",
            "Total charge: 0.00",
            "You earned 0 frequent renter points",
        ]
        .join("\n");
        assert_eq!(bill.print(), expected);
    }

    #[test]
    fn absent_rentals_are_rejected() {
        let error = Bill::new("Muster", "Hans", None).unwrap_err();
        assert_eq!(error.current_context(), &KernelError::InvalidArgument);
    }

    #[test]
    fn custom_layout_changes_columns() {
        let hans = user("Muster", "Hans");
        let rentals = vec![rental(&hans, movie("Up", PriceCategory::NewRelease), 2)];
        let bill = Bill::for_user(&hans, rentals)
            .unwrap()
            .with_layout(BillLayout::new(6, 3, 7));
        let printed = bill.print();
        assert!(printed.contains("\tUp      2   6.00\n"));
        assert!(printed.ends_with("You earned 2 frequent renter points"));
    }

    #[test]
    fn printing_is_deterministic_across_threads() {
        let bill = Bill::new("Muster", "Hans", Some(three_rentals())).unwrap();
        let expected = bill.print();
        let bill = &bill;
        thread::scope(|scope| {
            let handles: Vec<_> = (0..4).map(|_| scope.spawn(move || bill.print())).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    fn any_rental() -> impl Strategy<Value = Rental> {
        let category = prop::sample::select(PriceCategory::ALL.to_vec());
        (category, 1u32..60).prop_map(|(category, days)| {
            rental(&user("Muster", "Hans"), movie("Alien", category), days)
        })
    }

    proptest! {
        #[test]
        fn totals_are_sums_of_lines(rentals in prop::collection::vec(any_rental(), 0..25)) {
            let charge: Money = rentals.iter().map(Rental::charge).sum();
            let points: u32 = rentals.iter().map(|rental| *rental.points().as_ref()).sum();
            let bill = Bill::new("Muster", "Hans", Some(rentals)).unwrap();
            prop_assert_eq!(bill.total_charge(), charge);
            prop_assert_eq!(bill.total_charge(), bill.total_charge());
            prop_assert_eq!(*bill.total_points().as_ref(), points);
        }
    }
}
