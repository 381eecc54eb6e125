//! Errors for the fallible edges of the crate.
//!
//! Layout itself never fails; these cover strict name parsing and the
//! window registry.

use alloc::string::String;

use crate::window::WindowId;

/// Arrangement error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ArrangeError {
    /// Strategy name not recognized.
    #[error("unknown layout strategy `{0}`")]
    UnknownStrategy(String),
    /// No open window has this id.
    #[error("no window with id {0}")]
    UnknownWindow(WindowId),
    /// A window with this id is already open.
    #[error("window {0} is already open")]
    DuplicateWindow(WindowId),
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages() {
        assert_eq!(
            ArrangeError::UnknownStrategy("spiral".into()).to_string(),
            "unknown layout strategy `spiral`"
        );
        assert_eq!(
            ArrangeError::UnknownWindow(WindowId::Index(4)).to_string(),
            "no window with id #4"
        );
        assert_eq!(
            ArrangeError::DuplicateWindow("notes".into()).to_string(),
            "window notes is already open"
        );
    }
}
