mod flag;
mod money;
mod operation;

pub use self::{flag::*, money::*, operation::*};
