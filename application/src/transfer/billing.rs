use error_stack::Report;
use rust_decimal::Decimal;
use uuid::Uuid;

use kernel::prelude::statement::{Bill, Statement};
use kernel::KernelError;

use crate::transfer::RentalDto;

#[derive(Debug)]
pub struct GetBillDto {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BillSummaryDto {
    pub first_name: String,
    pub last_name: String,
    pub rentals: Vec<RentalDto>,
    pub total_charge: Decimal,
    pub total_points: u32,
}

impl TryFrom<Bill> for BillSummaryDto {
    type Error = Report<KernelError>;
    fn try_from(value: Bill) -> Result<Self, Self::Error> {
        Ok(Self {
            first_name: value.first_name().to_string(),
            last_name: value.last_name().to_string(),
            rentals: value
                .rentals()
                .iter()
                .cloned()
                .map(RentalDto::try_from)
                .collect::<Result<Vec<RentalDto>, Report<KernelError>>>()?,
            total_charge: value.total_charge().into(),
            total_points: value.total_points().into(),
        })
    }
}
