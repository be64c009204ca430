use error_stack::Report;
use tracing::debug;

use kernel::interface::query::UserQuery;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{SelectLimit, SelectOffset, User, UserId};
use kernel::KernelError;

use crate::database::memory::{missing, InMemoryTransaction};

pub struct InMemoryUserRepository;

#[async_trait::async_trait]
impl UserQuery for InMemoryUserRepository {
    type Transaction = InMemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        Ok(con.users.iter().find(|user| user.id() == id).cloned())
    }

    async fn find_all(
        &self,
        con: &mut InMemoryTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<User>, KernelError> {
        Ok(con
            .users
            .iter()
            .skip(*offset.as_ref())
            .take(*limit.as_ref())
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl UserModifier for InMemoryUserRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        if con.users.iter().any(|stored| stored.id() == user.id()) {
            return Err(Report::new(KernelError::Concurrency)
                .attach_printable(format!("User {:?} already exists", user.id())));
        }
        con.users.push(user.clone());
        debug!("Created user {:?}", user.id());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        let stored = con
            .users
            .iter_mut()
            .find(|stored| stored.id() == user.id())
            .ok_or_else(|| missing("User", user.id()))?;
        *stored = user.clone();
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut InMemoryTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<(), KernelError> {
        con.users.retain(|user| user.id() != user_id);
        Ok(())
    }
}
