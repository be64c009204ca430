use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize,
)]
pub struct IsRented(bool);

impl IsRented {
    pub fn new(value: impl Into<bool>) -> Self {
        IsRented(value.into())
    }
}
