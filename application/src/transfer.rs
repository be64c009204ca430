mod billing;
mod movie;
mod rental;
mod user;

pub use self::{billing::*, movie::*, rental::*, user::*};
