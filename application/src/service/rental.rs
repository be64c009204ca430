use error_stack::Report;
use tracing::debug;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnMovieQuery, DependOnRentalQuery, DependOnUserQuery, MovieQuery, RentalQuery,
    UserQuery,
};
use kernel::interface::update::{
    DependOnMovieModifier, DependOnRentalModifier, MovieModifier, RentalModifier,
};
use kernel::prelude::entity::{DaysRented, MovieId, Rental, RentalDate, RentalId, UserId};
use kernel::KernelError;

use crate::service::not_found;
use crate::transfer::{GetRentalsOfUserDto, RentMovieDto, RentalDto, ReturnMovieDto};

#[async_trait::async_trait]
pub trait GetRentalService: 'static + Sync + Send + DependOnUserQuery + DependOnRentalQuery {
    async fn get_rentals_of_user(
        &self,
        dto: GetRentalsOfUserDto,
    ) -> error_stack::Result<Vec<RentalDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        if self
            .user_query()
            .find_by_id(&mut connection, &user_id)
            .await?
            .is_none()
        {
            return Err(not_found("User", user_id));
        }
        let rentals = self
            .rental_query()
            .find_by_user_id(&mut connection, &user_id)
            .await?;

        rentals
            .into_iter()
            .map(RentalDto::try_from)
            .collect::<Result<Vec<RentalDto>, Report<KernelError>>>()
    }
}

impl<T> GetRentalService for T where T: DependOnUserQuery + DependOnRentalQuery {}

#[async_trait::async_trait]
pub trait RentMovieService:
    'static
    + Sync
    + Send
    + DependOnUserQuery
    + DependOnMovieQuery
    + DependOnMovieModifier
    + DependOnRentalModifier
{
    #[tracing::instrument(skip(self))]
    async fn rent_movie(&self, dto: RentMovieDto) -> error_stack::Result<Uuid, KernelError> {
        let days_rented = DaysRented::new(dto.days_rented)?;

        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let user = self
            .user_query()
            .find_by_id(&mut connection, &user_id)
            .await?
            .ok_or_else(|| not_found("User", user_id))?;
        let movie_id = MovieId::new(dto.movie_id);
        let mut movie = self
            .movie_query()
            .find_by_id(&mut connection, &movie_id)
            .await?
            .ok_or_else(|| not_found("Movie", movie_id))?;

        movie.rent()?;
        self.movie_modifier()
            .update(&mut connection, &movie)
            .await?;

        let uuid = Uuid::new_v4();
        let rental = Rental::new(
            RentalId::new(uuid),
            movie,
            user,
            days_rented,
            RentalDate::new(dto.rental_date),
        );
        self.rental_modifier()
            .create(&mut connection, &rental)
            .await?;
        connection.commit().await?;

        debug!("Rental {uuid} created, charge {}", rental.charge());
        Ok(uuid)
    }
}

impl<T> RentMovieService for T where
    T: DependOnUserQuery + DependOnMovieQuery + DependOnMovieModifier + DependOnRentalModifier
{
}

#[async_trait::async_trait]
pub trait ReturnMovieService:
    'static + Sync + Send + DependOnRentalQuery + DependOnRentalModifier + DependOnMovieModifier
{
    #[tracing::instrument(skip(self))]
    async fn return_movie(&self, dto: ReturnMovieDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let rental_id = RentalId::new(dto.rental_id);
        let rental = self
            .rental_query()
            .find_by_id(&mut connection, &rental_id)
            .await?
            .ok_or_else(|| not_found("Rental", rental_id))?;

        let mut movie = rental.movie().clone();
        movie.give_back();
        self.movie_modifier()
            .update(&mut connection, &movie)
            .await?;
        self.rental_modifier()
            .delete(&mut connection, &rental_id)
            .await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<T> ReturnMovieService for T where
    T: DependOnRentalQuery + DependOnRentalModifier + DependOnMovieModifier
{
}

#[cfg(test)]
mod test {
    use rust_decimal_macros::dec;
    use time::macros::date;
    use uuid::Uuid;

    use driver::module::InMemoryModule;
    use kernel::KernelError;

    use crate::service::{
        CreateMovieService, CreateUserService, DeleteMovieService, DeleteUserService,
        GetMovieService, GetRentalService, RentMovieService, ReturnMovieService,
    };
    use crate::transfer::{
        CreateMovieDto, CreateUserDto, DeleteMovieDto, DeleteUserDto, GetMovieDto,
        GetRentalsOfUserDto, RentMovieDto, ReturnMovieDto,
    };

    async fn setup(module: &InMemoryModule) -> error_stack::Result<(Uuid, Uuid), KernelError> {
        let user_id = module
            .create_user(CreateUserDto {
                last_name: "Hunziker".to_string(),
                first_name: "Hans".to_string(),
                birth_date: date!(1960 - 02 - 12),
            })
            .await?;
        let movie_id = module
            .create_movie(CreateMovieDto {
                title: "Casablanca".to_string(),
                release_date: date!(2017 - 03 - 10),
                age_rating: 6,
                price_category: "Children".to_string(),
            })
            .await?;
        Ok((user_id, movie_id))
    }

    fn rent(user_id: Uuid, movie_id: Uuid, days_rented: i64) -> RentMovieDto {
        RentMovieDto {
            user_id,
            movie_id,
            days_rented,
            rental_date: date!(2017 - 10 - 15),
        }
    }

    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let module = InMemoryModule::new();
        let (user_id, movie_id) = setup(&module).await?;

        let rental_id = module.rent_movie(rent(user_id, movie_id, 5)).await?;
        let movie = module
            .get_movie(GetMovieDto { id: movie_id })
            .await?
            .expect("stored movie");
        assert!(movie.rented);

        let rentals = module
            .get_rentals_of_user(GetRentalsOfUserDto { user_id })
            .await?;
        assert_eq!(rentals.len(), 1);
        assert_eq!(rentals[0].id, rental_id);
        assert_eq!(rentals[0].title, "Casablanca");
        assert_eq!(rentals[0].charge, dec!(4.50));
        assert_eq!(rentals[0].points, 1);

        let error = module
            .delete_movie(DeleteMovieDto { id: movie_id })
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::Concurrency);
        let error = module
            .delete_user(DeleteUserDto { id: user_id })
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::Concurrency);

        module.return_movie(ReturnMovieDto { rental_id }).await?;
        let movie = module
            .get_movie(GetMovieDto { id: movie_id })
            .await?
            .expect("stored movie");
        assert!(!movie.rented);
        assert!(module
            .get_rentals_of_user(GetRentalsOfUserDto { user_id })
            .await?
            .is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn rented_movie_cannot_be_rented_again() -> error_stack::Result<(), KernelError> {
        let module = InMemoryModule::new();
        let (user_id, movie_id) = setup(&module).await?;
        module.rent_movie(rent(user_id, movie_id, 1)).await?;

        let error = module
            .rent_movie(rent(user_id, movie_id, 1))
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::Concurrency);
        let rentals = module
            .get_rentals_of_user(GetRentalsOfUserDto { user_id })
            .await?;
        assert_eq!(rentals.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_requests_are_rejected() -> error_stack::Result<(), KernelError> {
        let module = InMemoryModule::new();
        let (user_id, movie_id) = setup(&module).await?;

        let error = module
            .rent_movie(rent(user_id, movie_id, 0))
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::InvalidArgument);

        let error = module
            .rent_movie(rent(Uuid::new_v4(), movie_id, 1))
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::NotFound);

        let error = module
            .rent_movie(rent(user_id, Uuid::new_v4(), 1))
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::NotFound);

        let error = module
            .return_movie(ReturnMovieDto {
                rental_id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::NotFound);

        let error = module
            .get_rentals_of_user(GetRentalsOfUserDto {
                user_id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::NotFound);
        Ok(())
    }
}
