mod birth_date;
mod id;
mod name;

pub use self::{birth_date::*, id::*, name::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct User {
    id: UserId,
    last_name: LastName,
    first_name: FirstName,
    birth_date: BirthDate,
}

impl User {
    pub fn new(
        id: UserId,
        last_name: LastName,
        first_name: FirstName,
        birth_date: BirthDate,
    ) -> Self {
        Self {
            id,
            last_name,
            first_name,
            birth_date,
        }
    }
}
