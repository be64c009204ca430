use error_stack::Report;
use time::Date;
use uuid::Uuid;

use kernel::prelude::entity::{DestructMovie, Movie, SelectLimit, SelectOffset};
use kernel::KernelError;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MovieDto {
    pub id: Uuid,
    pub title: String,
    pub release_date: Date,
    pub age_rating: u32,
    pub price_category: String,
    pub rented: bool,
}

impl TryFrom<Movie> for MovieDto {
    type Error = Report<KernelError>;
    fn try_from(value: Movie) -> Result<Self, Self::Error> {
        let DestructMovie {
            id,
            title,
            release_date,
            age_rating,
            price_category,
            rented,
        } = value.into_destruct();
        let id = id.ok_or_else(|| {
            Report::new(KernelError::Internal).attach_printable("Stored movie has no id")
        })?;
        Ok(Self {
            id: id.into(),
            title: title.into(),
            release_date: release_date.into(),
            age_rating: age_rating.into(),
            price_category: price_category.to_string(),
            rented: rented.into(),
        })
    }
}

#[derive(Debug)]
pub struct GetMovieDto {
    pub id: Uuid,
}

#[derive(Debug, Default)]
pub struct GetAllMovieDto {
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

#[derive(Debug)]
pub struct FindMovieByTitleDto {
    pub title: String,
}

#[derive(Debug)]
pub struct CreateMovieDto {
    pub title: String,
    pub release_date: Date,
    pub age_rating: i64,
    pub price_category: String,
}

#[derive(Debug)]
pub struct UpdateMovieDto {
    pub id: Uuid,
    pub title: Option<String>,
    pub release_date: Option<Date>,
    pub age_rating: Option<i64>,
    pub price_category: Option<String>,
}

#[derive(Debug)]
pub struct DeleteMovieDto {
    pub id: Uuid,
}
