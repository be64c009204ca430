use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Fromln,
    AsRefln,
    Serialize,
    Deserialize,
)]
pub struct RentalDate(Date);

impl RentalDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}
