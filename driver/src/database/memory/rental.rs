use error_stack::Report;
use tracing::debug;

use kernel::interface::query::RentalQuery;
use kernel::interface::update::RentalModifier;
use kernel::prelude::entity::{DaysRented, MovieId, Rental, RentalDate, RentalId, UserId};
use kernel::KernelError;

use crate::database::memory::{InMemoryTransaction, Store};

/// Stored form of a rental: movie and user are kept as references and resolved on read.
#[derive(Debug, Clone)]
pub struct RentalRow {
    id: RentalId,
    movie_id: MovieId,
    user_id: UserId,
    days_rented: DaysRented,
    rental_date: RentalDate,
}

impl Store {
    fn resolve(&self, row: &RentalRow) -> error_stack::Result<Rental, KernelError> {
        let dangling = |kind: &str| {
            Report::new(KernelError::Internal)
                .attach_printable(format!("Rental {:?} refers to a missing {kind}", row.id))
        };
        let movie = self
            .movies
            .iter()
            .find(|movie| movie.id().as_ref() == Some(&row.movie_id))
            .ok_or_else(|| dangling("movie"))?;
        let user = self
            .users
            .iter()
            .find(|user| user.id() == &row.user_id)
            .ok_or_else(|| dangling("user"))?;
        Ok(Rental::new(
            row.id,
            movie.clone(),
            user.clone(),
            row.days_rented,
            row.rental_date,
        ))
    }
}

pub struct InMemoryRentalRepository;

#[async_trait::async_trait]
impl RentalQuery for InMemoryRentalRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &RentalId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        con.rentals
            .iter()
            .find(|row| &row.id == id)
            .map(|row| con.resolve(row))
            .transpose()
    }

    async fn find_by_movie_id(
        &self,
        con: &mut InMemoryTransaction,
        movie_id: &MovieId,
    ) -> error_stack::Result<Option<Rental>, KernelError> {
        con.rentals
            .iter()
            .find(|row| &row.movie_id == movie_id)
            .map(|row| con.resolve(row))
            .transpose()
    }

    async fn find_by_user_id(
        &self,
        con: &mut InMemoryTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<Rental>, KernelError> {
        let mut rows: Vec<&RentalRow> = con
            .rentals
            .iter()
            .filter(|row| &row.user_id == user_id)
            .collect();
        rows.sort_by_key(|row| row.rental_date);
        rows.into_iter().map(|row| con.resolve(row)).collect()
    }
}

#[async_trait::async_trait]
impl RentalModifier for InMemoryRentalRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        rental: &Rental,
    ) -> error_stack::Result<(), KernelError> {
        let movie_id = rental.movie().id().ok_or_else(|| {
            Report::new(KernelError::InvalidArgument)
                .attach_printable("Rented movie was never stored")
        })?;
        if con.rentals.iter().any(|row| &row.id == rental.id()) {
            return Err(Report::new(KernelError::Concurrency)
                .attach_printable(format!("Rental {:?} already exists", rental.id())));
        }
        con.rentals.push(RentalRow {
            id: *rental.id(),
            movie_id,
            user_id: *rental.user().id(),
            days_rented: *rental.days_rented(),
            rental_date: *rental.rental_date(),
        });
        debug!("Created rental {:?}", rental.id());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        rental_id: &RentalId,
    ) -> error_stack::Result<(), KernelError> {
        con.rentals.retain(|row| &row.id != rental_id);
        Ok(())
    }
}
