use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct AgeRating(u32);

impl AgeRating {
    pub fn new(rating: impl Into<i64>) -> error_stack::Result<Self, KernelError> {
        let rating = rating.into();
        u32::try_from(rating).map(Self).map_err(|error| {
            Report::new(error)
                .change_context(KernelError::InvalidArgument)
                .attach_printable(format!("Age rating must be non-negative, got {rating}"))
        })
    }
}
