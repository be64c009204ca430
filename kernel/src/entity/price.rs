mod category;
mod points;
mod tariff;

pub use self::{category::*, points::*, tariff::*};
