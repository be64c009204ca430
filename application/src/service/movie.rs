use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnMovieQuery, MovieQuery};
use kernel::interface::update::{DependOnMovieModifier, MovieModifier};
use kernel::prelude::entity::{
    AgeRating, IsRented, Movie, MovieId, MovieTitle, PriceCategory, ReleaseDate,
};
use kernel::KernelError;
use tracing::debug;

use crate::service::not_found;
use crate::transfer::{
    CreateMovieDto, DeleteMovieDto, FindMovieByTitleDto, GetAllMovieDto, GetMovieDto, MovieDto,
    UpdateMovieDto,
};

#[async_trait::async_trait]
pub trait GetMovieService: 'static + Sync + Send + DependOnMovieQuery {
    async fn get_movie(
        &self,
        dto: GetMovieDto,
    ) -> error_stack::Result<Option<MovieDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = MovieId::new(dto.id);
        let movie = self.movie_query().find_by_id(&mut connection, &id).await?;

        movie.map(MovieDto::try_from).transpose()
    }

    async fn get_movies(
        &self,
        dto: GetAllMovieDto,
    ) -> error_stack::Result<Vec<MovieDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let movies = self
            .movie_query()
            .find_all(&mut connection, &dto.limit, &dto.offset)
            .await?;

        movies.into_iter().map(MovieDto::try_from).collect()
    }

    async fn find_movies_by_title(
        &self,
        dto: FindMovieByTitleDto,
    ) -> error_stack::Result<Vec<MovieDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let title = MovieTitle::new(dto.title)?;
        let movies = self
            .movie_query()
            .find_by_title(&mut connection, &title)
            .await?;

        movies.into_iter().map(MovieDto::try_from).collect()
    }
}

impl<T> GetMovieService for T where T: DependOnMovieQuery {}

#[async_trait::async_trait]
pub trait CreateMovieService: 'static + Sync + Send + DependOnMovieModifier {
    #[tracing::instrument(skip(self))]
    async fn create_movie(&self, dto: CreateMovieDto) -> error_stack::Result<Uuid, KernelError> {
        let movie = Movie::new(
            None,
            MovieTitle::new(dto.title)?,
            ReleaseDate::new(dto.release_date),
            AgeRating::new(dto.age_rating)?,
            dto.price_category.parse::<PriceCategory>()?,
            IsRented::default(),
        );

        let mut connection = self.database_connection().transact().await?;
        let id = self
            .movie_modifier()
            .create(&mut connection, &movie)
            .await?;
        connection.commit().await?;

        debug!("Movie {id:?} added to catalog");
        Ok(id.into())
    }
}

impl<T> CreateMovieService for T where T: DependOnMovieModifier {}

#[async_trait::async_trait]
pub trait UpdateMovieService:
    'static + Sync + Send + DependOnMovieQuery + DependOnMovieModifier
{
    #[tracing::instrument(skip(self))]
    async fn update_movie(&self, dto: UpdateMovieDto) -> error_stack::Result<(), KernelError> {
        let title = dto.title.map(MovieTitle::new).transpose()?;
        let age_rating = dto.age_rating.map(AgeRating::new).transpose()?;
        let price_category = dto
            .price_category
            .map(|name| name.parse::<PriceCategory>())
            .transpose()?;

        let mut connection = self.database_connection().transact().await?;

        let id = MovieId::new(dto.id);
        let mut movie = self
            .movie_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| not_found("Movie", id))?;

        movie.substitute(|movie| {
            if let Some(title) = title {
                *movie.title = title;
            }
            if let Some(release_date) = dto.release_date {
                *movie.release_date = ReleaseDate::new(release_date);
            }
            if let Some(age_rating) = age_rating {
                *movie.age_rating = age_rating;
            }
        });
        if let Some(price_category) = price_category {
            movie.change_price_category(price_category);
        }

        self.movie_modifier()
            .update(&mut connection, &movie)
            .await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<T> UpdateMovieService for T where T: DependOnMovieQuery + DependOnMovieModifier {}

#[async_trait::async_trait]
pub trait DeleteMovieService:
    'static + Sync + Send + DependOnMovieQuery + DependOnMovieModifier
{
    /// Unknown ids are ignored. A rented movie stays in the catalog until it is returned.
    #[tracing::instrument(skip(self))]
    async fn delete_movie(&self, dto: DeleteMovieDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = MovieId::new(dto.id);
        let movie = self.movie_query().find_by_id(&mut connection, &id).await?;
        if movie.as_ref().is_some_and(Movie::is_rented) {
            return Err(error_stack::Report::new(KernelError::Concurrency)
                .attach_printable(format!("Movie {id:?} is still rented")));
        }

        self.movie_modifier()
            .delete(&mut connection, &id)
            .await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<T> DeleteMovieService for T where T: DependOnMovieQuery + DependOnMovieModifier {}
