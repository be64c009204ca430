use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

fn non_empty(name: String, field: &str) -> error_stack::Result<String, KernelError> {
    if name.is_empty() {
        return Err(Report::new(KernelError::InvalidArgument)
            .attach_printable(format!("{field} must not be empty")));
    }
    Ok(name)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct LastName(String);

impl LastName {
    pub fn new(name: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        non_empty(name.into(), "Last name").map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct FirstName(String);

impl FirstName {
    pub fn new(name: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        non_empty(name.into(), "First name").map(Self)
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{FirstName, LastName};
    use crate::KernelError;

    #[test]
    fn empty_names_are_rejected() {
        let last = LastName::new("").unwrap_err();
        assert_eq!(last.current_context(), &KernelError::InvalidArgument);
        let first = FirstName::new(String::new()).unwrap_err();
        assert_eq!(first.current_context(), &KernelError::InvalidArgument);
    }

    #[test]
    fn names_are_kept_verbatim() {
        assert_eq!(LastName::new("Mustermann").unwrap().as_ref(), "Mustermann");
        assert_eq!(FirstName::new("Hans").unwrap().as_ref(), "Hans");
    }
}
