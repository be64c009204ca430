use error_stack::Report;
use rust_decimal::Decimal;
use time::Date;
use uuid::Uuid;

use kernel::prelude::entity::Rental;
use kernel::KernelError;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RentalDto {
    pub id: Uuid,
    pub movie_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub days_rented: u32,
    pub rental_date: Date,
    pub charge: Decimal,
    pub points: u32,
}

impl TryFrom<Rental> for RentalDto {
    type Error = Report<KernelError>;
    fn try_from(value: Rental) -> Result<Self, Self::Error> {
        let movie_id = value.movie().id().ok_or_else(|| {
            Report::new(KernelError::Internal).attach_printable("Rented movie has no id")
        })?;
        Ok(Self {
            id: (*value.id()).into(),
            movie_id: movie_id.into(),
            user_id: (*value.user().id()).into(),
            title: value.movie().title().as_ref().clone(),
            days_rented: (*value.days_rented()).into(),
            rental_date: (*value.rental_date()).into(),
            charge: value.charge().into(),
            points: value.points().into(),
        })
    }
}

#[derive(Debug)]
pub struct RentMovieDto {
    pub user_id: Uuid,
    pub movie_id: Uuid,
    pub days_rented: i64,
    pub rental_date: Date,
}

#[derive(Debug)]
pub struct ReturnMovieDto {
    pub rental_id: Uuid,
}

#[derive(Debug)]
pub struct GetRentalsOfUserDto {
    pub user_id: Uuid,
}
