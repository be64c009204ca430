use std::ops::Deref;
use std::sync::Arc;

use vodca::References;

use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::query::{DependOnMovieQuery, DependOnRentalQuery, DependOnUserQuery};
use kernel::interface::update::{
    DependOnMovieModifier, DependOnRentalModifier, DependOnUserModifier,
};

use crate::database::{
    InMemoryDatabase, InMemoryMovieRepository, InMemoryRentalRepository, InMemoryUserRepository,
};

/// Wires the in-memory collaborators into every `DependOn*` seam the services need.
#[derive(Clone)]
pub struct InMemoryModule(Arc<Handler>);

impl InMemoryModule {
    pub fn new() -> Self {
        Self::with_database(InMemoryDatabase::new())
    }

    pub fn with_database(database: InMemoryDatabase) -> Self {
        Self(Arc::new(Handler { database }))
    }
}

impl Default for InMemoryModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for InMemoryModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    database: InMemoryDatabase,
}

impl DependOnDatabaseConnection for InMemoryModule {
    type DatabaseConnection = InMemoryDatabase;
    fn database_connection(&self) -> &Self::DatabaseConnection {
        self.database()
    }
}

impl DependOnMovieQuery for InMemoryModule {
    type MovieQuery = InMemoryMovieRepository;
    fn movie_query(&self) -> &Self::MovieQuery {
        &InMemoryMovieRepository
    }
}

impl DependOnMovieModifier for InMemoryModule {
    type MovieModifier = InMemoryMovieRepository;
    fn movie_modifier(&self) -> &Self::MovieModifier {
        &InMemoryMovieRepository
    }
}

impl DependOnUserQuery for InMemoryModule {
    type UserQuery = InMemoryUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &InMemoryUserRepository
    }
}

impl DependOnUserModifier for InMemoryModule {
    type UserModifier = InMemoryUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &InMemoryUserRepository
    }
}

impl DependOnRentalQuery for InMemoryModule {
    type RentalQuery = InMemoryRentalRepository;
    fn rental_query(&self) -> &Self::RentalQuery {
        &InMemoryRentalRepository
    }
}

impl DependOnRentalModifier for InMemoryModule {
    type RentalModifier = InMemoryRentalRepository;
    fn rental_modifier(&self) -> &Self::RentalModifier {
        &InMemoryRentalRepository
    }
}
