use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnRentalQuery, DependOnUserQuery, RentalQuery, UserQuery};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{BirthDate, FirstName, LastName, User, UserId};
use kernel::KernelError;

use crate::transfer::{CreateUserDto, DeleteUserDto, GetAllUserDto, GetUserDto, UserDto};

#[async_trait::async_trait]
pub trait GetUserService: 'static + Sync + Send + DependOnUserQuery {
    async fn get_user(
        &self,
        dto: GetUserDto,
    ) -> error_stack::Result<Option<UserDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = UserId::new(dto.id);
        let user = self.user_query().find_by_id(&mut connection, &id).await?;

        Ok(user.map(UserDto::from))
    }

    async fn get_users(
        &self,
        dto: GetAllUserDto,
    ) -> error_stack::Result<Vec<UserDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let users = self
            .user_query()
            .find_all(&mut connection, &dto.limit, &dto.offset)
            .await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }
}

impl<T> GetUserService for T where T: DependOnUserQuery {}

#[async_trait::async_trait]
pub trait CreateUserService: 'static + Sync + Send + DependOnUserModifier {
    #[tracing::instrument(skip(self))]
    async fn create_user(&self, dto: CreateUserDto) -> error_stack::Result<Uuid, KernelError> {
        let uuid = Uuid::new_v4();
        let user = User::new(
            UserId::new(uuid),
            LastName::new(dto.last_name)?,
            FirstName::new(dto.first_name)?,
            BirthDate::new(dto.birth_date),
        );

        let mut connection = self.database_connection().transact().await?;
        self.user_modifier().create(&mut connection, &user).await?;
        connection.commit().await?;

        Ok(uuid)
    }
}

impl<T> CreateUserService for T where T: DependOnUserModifier {}

#[async_trait::async_trait]
pub trait DeleteUserService:
    'static + Sync + Send + DependOnUserModifier + DependOnRentalQuery
{
    /// Users with open rentals are kept so their bills stay complete.
    #[tracing::instrument(skip(self))]
    async fn delete_user(&self, dto: DeleteUserDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = UserId::new(dto.id);
        let open = self
            .rental_query()
            .find_by_user_id(&mut connection, &id)
            .await?;
        if !open.is_empty() {
            return Err(Report::new(KernelError::Concurrency).attach_printable(format!(
                "User {id:?} still has {} open rentals",
                open.len()
            )));
        }

        self.user_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<T> DeleteUserService for T where T: DependOnUserModifier + DependOnRentalQuery {}
