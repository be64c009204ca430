mod billing;
mod movie;
mod rental;
mod user;

pub use self::{billing::*, movie::*, rental::*, user::*};
use error_stack::Report;
use kernel::KernelError;

pub(crate) fn not_found(kind: &str, id: impl std::fmt::Debug) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("{kind} {id:?} was not found"))
}
