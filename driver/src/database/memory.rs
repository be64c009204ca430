use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::time::Duration;

use error_stack::{Report, ResultExt};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::entity::{Movie, User};
use kernel::KernelError;

pub use self::{movie::*, rental::*, user::*};

mod movie;
mod rental;
mod user;

const LOCK_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Default)]
pub struct Store {
    movies: Vec<Movie>,
    users: Vec<User>,
    rentals: Vec<RentalRow>,
}

/// Process-local store. Transactions are serialized: each one holds the store lock
/// and works on a copy that is written back on commit.
#[derive(Debug, Clone)]
pub struct InMemoryDatabase {
    store: Arc<Mutex<Store>>,
    lock_timeout: Duration,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(Store::default())),
            lock_timeout: LOCK_TIMEOUT,
        }
    }

    pub fn with_lock_timeout(mut self, lock_timeout: Duration) -> Self {
        self.lock_timeout = lock_timeout;
        self
    }
}

impl Default for InMemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let guard = tokio::time::timeout(self.lock_timeout, self.store.clone().lock_owned())
            .await
            .change_context_lazy(|| KernelError::Timeout)
            .attach_printable_lazy(|| "Failed to acquire in-memory store")?;
        let working = guard.clone();
        Ok(InMemoryTransaction { guard, working })
    }
}

pub struct InMemoryTransaction {
    guard: OwnedMutexGuard<Store>,
    working: Store,
}

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        let InMemoryTransaction { mut guard, working } = self;
        *guard = working;
        debug!("Committed in-memory transaction");
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        debug!("Rolled back in-memory transaction");
        Ok(())
    }
}

impl Deref for InMemoryTransaction {
    type Target = Store;
    fn deref(&self) -> &Self::Target {
        &self.working
    }
}

impl DerefMut for InMemoryTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.working
    }
}

pub(in crate::database) fn missing(kind: &str, id: impl std::fmt::Debug) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("{kind} {id:?} does not exist"))
}
