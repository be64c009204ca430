use time::Date;
use uuid::Uuid;

use kernel::prelude::entity::{DestructUser, SelectLimit, SelectOffset, User};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UserDto {
    pub id: Uuid,
    pub last_name: String,
    pub first_name: String,
    pub birth_date: Date,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let DestructUser {
            id,
            last_name,
            first_name,
            birth_date,
        } = value.into_destruct();
        Self {
            id: id.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            birth_date: birth_date.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct GetAllUserDto {
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

#[derive(Debug)]
pub struct GetUserDto {
    pub id: Uuid,
}

#[derive(Debug)]
pub struct CreateUserDto {
    pub last_name: String,
    pub first_name: String,
    pub birth_date: Date,
}

#[derive(Debug)]
pub struct DeleteUserDto {
    pub id: Uuid,
}
