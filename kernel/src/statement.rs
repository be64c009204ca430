mod bill;

pub use self::bill::*;
use error_stack::Report;
use vodca::References;

use crate::entity::Rental;
use crate::KernelError;

const NAME_LIMIT: usize = 8;
const NAME_KEPT: usize = 5;
const NAME_ELLIPSIS: &str = "..";

/// Shortens a name longer than eight characters to its first five followed by `..`.
pub fn display_name(name: &str) -> String {
    if name.chars().count() <= NAME_LIMIT {
        return name.to_string();
    }
    let mut shortened: String = name.chars().take(NAME_KEPT).collect();
    shortened.push_str(NAME_ELLIPSIS);
    shortened
}

/// Customer names and rentals shared by every [`Statement`] renderer.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct StatementContents {
    last_name: String,
    first_name: String,
    rentals: Vec<Rental>,
}

impl StatementContents {
    /// `None` stands for an absent rentals collection and is rejected.
    /// An empty collection is a valid statement without lines.
    pub fn new(
        last_name: impl AsRef<str>,
        first_name: impl AsRef<str>,
        rentals: Option<Vec<Rental>>,
    ) -> error_stack::Result<Self, KernelError> {
        let (last_name, first_name) = (last_name.as_ref(), first_name.as_ref());
        if last_name.is_empty() || first_name.is_empty() {
            return Err(Report::new(KernelError::InvalidArgument)
                .attach_printable("Statement names must not be empty"));
        }
        let rentals = rentals.ok_or_else(|| {
            Report::new(KernelError::InvalidArgument)
                .attach_printable("Statement requires a rentals collection")
        })?;
        Ok(Self {
            last_name: display_name(last_name),
            first_name: display_name(first_name),
            rentals,
        })
    }
}

pub trait Statement: Sync + Send {
    fn contents(&self) -> &StatementContents;

    /// Rentals in the order they were supplied.
    fn rentals(&self) -> &[Rental] {
        self.contents().rentals()
    }

    fn first_name(&self) -> &str {
        self.contents().first_name()
    }

    fn last_name(&self) -> &str {
        self.contents().last_name()
    }

    /// Multi-line text aligned for a fixed-width font.
    fn print(&self) -> String;
}

#[cfg(test)]
pub(crate) mod test {
    use proptest::prelude::*;
    use time::macros::date;
    use uuid::Uuid;

    use crate::entity::{
        AgeRating, BirthDate, DaysRented, FirstName, IsRented, LastName, Movie, MovieId,
        MovieTitle, PriceCategory, ReleaseDate, Rental, RentalDate, RentalId, User, UserId,
    };
    use crate::statement::{display_name, Statement, StatementContents};
    use crate::KernelError;

    pub(crate) fn movie(title: &str, price_category: PriceCategory) -> Movie {
        Movie::new(
            Some(MovieId::new(Uuid::new_v4())),
            MovieTitle::new(title).unwrap(),
            ReleaseDate::new(date!(2017 - 03 - 10)),
            AgeRating::new(6).unwrap(),
            price_category,
            IsRented::new(true),
        )
    }

    pub(crate) fn user(last_name: &str, first_name: &str) -> User {
        User::new(
            UserId::new(Uuid::new_v4()),
            LastName::new(last_name).unwrap(),
            FirstName::new(first_name).unwrap(),
            BirthDate::new(date!(1960 - 02 - 12)),
        )
    }

    pub(crate) fn rental(user: &User, movie: Movie, days: u32) -> Rental {
        Rental::new(
            RentalId::new(Uuid::new_v4()),
            movie,
            user.clone(),
            DaysRented::new(days).unwrap(),
            RentalDate::new(date!(2017 - 10 - 15)),
        )
    }

    pub(crate) fn three_rentals() -> Vec<Rental> {
        let renter = user("Muster", "Hans");
        vec![
            rental(&renter, movie("Avatar", PriceCategory::Regular), 3),
            rental(&renter, movie("Casablanca", PriceCategory::Regular), 1),
            rental(&renter, movie("Frozen", PriceCategory::Children), 4),
        ]
    }

    struct PlainStatement(StatementContents);

    impl Statement for PlainStatement {
        fn contents(&self) -> &StatementContents {
            &self.0
        }

        fn print(&self) -> String {
            String::new()
        }
    }

    #[test]
    fn keeps_short_names() {
        let statement = PlainStatement(
            StatementContents::new("Muster", "Hans", Some(three_rentals())).unwrap(),
        );
        assert_eq!(statement.last_name(), "Muster");
        assert_eq!(statement.first_name(), "Hans");
        assert_eq!(statement.rentals().len(), 3);
    }

    #[test]
    fn truncates_long_names() {
        let contents = StatementContents::new("Mustermann", "Maximilian", Some(vec![])).unwrap();
        assert_eq!(contents.last_name(), "Muste..");
        assert_eq!(contents.first_name(), "Maxim..");
    }

    #[test]
    fn eight_characters_pass_through() {
        assert_eq!(display_name("Annemari"), "Annemari");
        assert_eq!(display_name("Annemarie"), "Annem..");
        assert_eq!(display_name("Zoë-Müller"), "Zoë-M..");
    }

    #[test]
    fn absent_rentals_are_rejected() {
        let error = StatementContents::new("Muster", "Hans", None).unwrap_err();
        assert_eq!(error.current_context(), &KernelError::InvalidArgument);
    }

    #[test]
    fn empty_names_are_rejected() {
        let error = StatementContents::new("", "Hans", Some(vec![])).unwrap_err();
        assert_eq!(error.current_context(), &KernelError::InvalidArgument);
    }

    proptest! {
        #[test]
        fn display_name_truncation(name in "\\PC{0,20}") {
            let shown = display_name(&name);
            if name.chars().count() <= 8 {
                prop_assert_eq!(shown, name);
            } else {
                let expected: String = name.chars().take(5).chain("..".chars()).collect();
                prop_assert_eq!(shown, expected);
            }
        }

        #[test]
        fn rentals_keep_caller_order(order in Just(vec![0usize, 1, 2]).prop_shuffle()) {
            let rentals = three_rentals();
            let supplied: Vec<Rental> = order.iter().map(|index| rentals[*index].clone()).collect();
            let statement = PlainStatement(
                StatementContents::new("Muster", "Hans", Some(supplied.clone())).unwrap(),
            );
            prop_assert_eq!(statement.rentals(), supplied.as_slice());
        }
    }
}
