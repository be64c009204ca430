use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

/// Number of days a movie is rented for. Always at least one.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct DaysRented(u32);

impl DaysRented {
    pub fn new(days: impl Into<i64>) -> error_stack::Result<Self, KernelError> {
        let days = days.into();
        match u32::try_from(days) {
            Ok(days) if days > 0 => Ok(Self(days)),
            _ => Err(Report::new(KernelError::InvalidArgument)
                .attach_printable(format!("Days rented must be positive, got {days}"))),
        }
    }
}
