//! Layout error types.

use thiserror::Error;

/// Which grid axis an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Column,
    Row,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Column => write!(f, "column"),
            Self::Row => write!(f, "row"),
        }
    }
}

/// Errors raised during a placement pass.
///
/// These are configuration errors on the caller's side; the walker never
/// catches or retries them, they propagate straight out of
/// [`place_all`](crate::BlockWalker::place_all).
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The effective column or row count for a container resolved to zero,
    /// which would make the cell size a division by zero.
    #[error("container {container:?} resolves to zero {axis} cells")]
    ZeroCells { container: String, axis: Axis },

    /// A child's kind tag is not in the placement registry.
    #[error("cannot place widget {widget:?}: kind {kind:?} is not registered")]
    UnplaceableKind { widget: String, kind: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_cells_message_names_container() {
        let err = LayoutError::ZeroCells {
            container: "sidebar".into(),
            axis: Axis::Column,
        };
        assert_eq!(
            err.to_string(),
            "container \"sidebar\" resolves to zero column cells"
        );
    }

    #[test]
    fn test_unplaceable_kind_message_names_widget_and_kind() {
        let err = LayoutError::UnplaceableKind {
            widget: "toolbar".into(),
            kind: "Gizmo".into(),
        };
        assert_eq!(
            err.to_string(),
            "cannot place widget \"toolbar\": kind \"Gizmo\" is not registered"
        );
    }
}
