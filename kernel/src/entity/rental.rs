mod days;
mod id;
mod rental_date;

pub use self::{days::*, id::*, rental_date::*};
use destructure::Destructure;
use vodca::References;

use crate::entity::{FrequentRenterPoints, Money, Movie, User};

/// One movie rented by one user. The fee is always derived from the movie's price category.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Rental {
    id: RentalId,
    movie: Movie,
    user: User,
    days_rented: DaysRented,
    rental_date: RentalDate,
}

impl Rental {
    pub fn new(
        id: RentalId,
        movie: Movie,
        user: User,
        days_rented: DaysRented,
        rental_date: RentalDate,
    ) -> Self {
        Self {
            id,
            movie,
            user,
            days_rented,
            rental_date,
        }
    }

    pub fn charge(&self) -> Money {
        self.movie.price_category().charge(&self.days_rented)
    }

    pub fn points(&self) -> FrequentRenterPoints {
        self.movie.price_category().points(&self.days_rented)
    }
}
