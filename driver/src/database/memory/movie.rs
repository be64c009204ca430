use error_stack::Report;
use tracing::debug;
use uuid::Uuid;

use kernel::interface::query::MovieQuery;
use kernel::interface::update::MovieModifier;
use kernel::prelude::entity::{Movie, MovieId, MovieTitle, SelectLimit, SelectOffset};
use kernel::KernelError;

use crate::database::memory::{missing, InMemoryTransaction};

pub struct InMemoryMovieRepository;

#[async_trait::async_trait]
impl MovieQuery for InMemoryMovieRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &MovieId,
    ) -> error_stack::Result<Option<Movie>, KernelError> {
        Ok(con
            .movies
            .iter()
            .find(|movie| movie.id().as_ref() == Some(id))
            .cloned())
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Movie>, KernelError> {
        Ok(con
            .movies
            .iter()
            .skip(*offset.as_ref())
            .take(*limit.as_ref())
            .cloned()
            .collect())
    }

    async fn find_by_title(
        &self,
        con: &mut InMemoryTransaction,
        title: &MovieTitle,
    ) -> error_stack::Result<Vec<Movie>, KernelError> {
        Ok(con
            .movies
            .iter()
            .filter(|movie| movie.title() == title)
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl MovieModifier for InMemoryMovieRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        movie: &Movie,
    ) -> error_stack::Result<MovieId, KernelError> {
        if let Some(id) = movie.id() {
            return Err(Report::new(KernelError::InvalidArgument)
                .attach_printable(format!("Movie {id:?} is already stored")));
        }
        let id = MovieId::new(Uuid::new_v4());
        let mut stored = movie.clone();
        stored.substitute(|movie| *movie.id = Some(id));
        con.movies.push(stored);
        debug!("Created movie {id:?}");
        Ok(id)
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        movie: &Movie,
    ) -> error_stack::Result<(), KernelError> {
        let id = movie.id().ok_or_else(|| {
            Report::new(KernelError::InvalidArgument)
                .attach_printable("Cannot update a movie that was never stored")
        })?;
        let stored = con
            .movies
            .iter_mut()
            .find(|stored| stored.id().as_ref() == Some(&id))
            .ok_or_else(|| missing("Movie", id))?;
        *stored = movie.clone();
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        movie_id: &MovieId,
    ) -> error_stack::Result<(), KernelError> {
        con.movies
            .retain(|movie| movie.id().as_ref() != Some(movie_id));
        Ok(())
    }
}
