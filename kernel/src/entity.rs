mod common;
mod movie;
mod price;
mod rental;
mod user;

pub use self::{common::*, movie::*, price::*, rental::*, user::*};
