use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{DependOnRentalQuery, DependOnUserQuery, RentalQuery, UserQuery};
use kernel::prelude::entity::UserId;
use kernel::prelude::statement::{Bill, Statement};
use kernel::KernelError;
use tracing::debug;

use crate::service::not_found;
use crate::transfer::{BillSummaryDto, GetBillDto};

#[async_trait::async_trait]
pub trait BillService: 'static + Sync + Send + DependOnUserQuery + DependOnRentalQuery {
    /// Builds the bill of every open rental of a user, oldest rental first.
    async fn load_bill(&self, dto: GetBillDto) -> error_stack::Result<Bill, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let user_id = UserId::new(dto.user_id);
        let user = self
            .user_query()
            .find_by_id(&mut connection, &user_id)
            .await?
            .ok_or_else(|| not_found("User", user_id))?;
        let rentals = self
            .rental_query()
            .find_by_user_id(&mut connection, &user_id)
            .await?;

        debug!("Billing {} rentals of user {user_id:?}", rentals.len());
        Bill::for_user(&user, rentals)
    }

    #[tracing::instrument(skip(self))]
    async fn print_bill(&self, dto: GetBillDto) -> error_stack::Result<String, KernelError> {
        Ok(self.load_bill(dto).await?.print())
    }

    #[tracing::instrument(skip(self))]
    async fn summarize_bill(
        &self,
        dto: GetBillDto,
    ) -> error_stack::Result<BillSummaryDto, KernelError> {
        BillSummaryDto::try_from(self.load_bill(dto).await?)
    }
}

impl<T> BillService for T where T: DependOnUserQuery + DependOnRentalQuery {}
