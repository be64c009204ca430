mod age_rating;
mod id;
mod release_date;
mod title;

pub use self::{age_rating::*, id::*, release_date::*, title::*};
use destructure::{Destructure, Mutation};
use error_stack::Report;
use vodca::References;

use crate::entity::{IsRented, PriceCategory};
use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Movie {
    id: Option<MovieId>,
    title: MovieTitle,
    release_date: ReleaseDate,
    age_rating: AgeRating,
    price_category: PriceCategory,
    rented: IsRented,
}

impl Movie {
    pub fn new(
        id: Option<MovieId>,
        title: MovieTitle,
        release_date: ReleaseDate,
        age_rating: AgeRating,
        price_category: PriceCategory,
        rented: IsRented,
    ) -> Self {
        Self {
            id,
            title,
            release_date,
            age_rating,
            price_category,
            rented,
        }
    }

    pub fn is_rented(&self) -> bool {
        *self.rented.as_ref()
    }

    pub fn rent(&mut self) -> error_stack::Result<(), KernelError> {
        if self.is_rented() {
            return Err(Report::new(KernelError::Concurrency)
                .attach_printable(format!("Movie {} is already rented", self.title.as_ref())));
        }
        self.rented = IsRented::new(true);
        Ok(())
    }

    pub fn give_back(&mut self) {
        self.rented = IsRented::new(false);
    }

    pub fn change_price_category(&mut self, price_category: PriceCategory) {
        self.price_category = price_category;
    }
}
