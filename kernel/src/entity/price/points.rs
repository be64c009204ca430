use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
    Fromln,
    AsRefln,
)]
pub struct FrequentRenterPoints(u32);

impl FrequentRenterPoints {
    pub fn new(points: impl Into<u32>) -> Self {
        Self(points.into())
    }
}

impl Add for FrequentRenterPoints {
    type Output = FrequentRenterPoints;
    fn add(self, rhs: Self) -> Self::Output {
        FrequentRenterPoints(self.0 + rhs.0)
    }
}

impl Sum for FrequentRenterPoints {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(FrequentRenterPoints::default(), Add::add)
    }
}

impl Display for FrequentRenterPoints {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}
