//! Resource and operation selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, DispatchResult};

/// Top-level category of remote functionality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    #[default]
    Academic,
    Document,
    Key,
}

impl Resource {
    /// All resources, in the order the node lists them.
    pub const ALL: [Self; 3] = [Self::Academic, Self::Document, Self::Key];

    /// Value used by the host.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Academic => "academic",
            Self::Document => "document",
            Self::Key => "key",
        }
    }

    /// Label shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Academic => "Academic",
            Self::Document => "Document",
            Self::Key => "Key",
        }
    }

    /// Operation used when the host does not name one.
    #[must_use]
    pub const fn default_operation(self) -> Operation {
        match self {
            Self::Academic => Operation::Search,
            Self::Document => Operation::Parse,
            Self::Key => Operation::Validate,
        }
    }

    /// Operations valid for this resource.
    #[must_use]
    pub const fn operations(self) -> &'static [Operation] {
        match self {
            Self::Academic => &[Operation::Search, Operation::Fetch],
            Self::Document => &[Operation::Parse, Operation::Upload],
            Self::Key => &[Operation::Validate],
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Action within a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Search,
    Fetch,
    Parse,
    Upload,
    Validate,
}

impl Operation {
    /// Value used by the host.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Fetch => "fetch",
            Self::Parse => "parse",
            Self::Upload => "upload",
            Self::Validate => "validate",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// A valid (resource, operation) pair.
///
/// Constructing one through [`Selection::new`] is the only place the pairing
/// rule is checked; everything downstream matches on these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    AcademicSearch,
    AcademicFetch,
    DocumentParse,
    DocumentUpload,
    KeyValidate,
}

impl Selection {
    /// Every selectable pair.
    pub const ALL: [Self; 5] = [
        Self::AcademicSearch,
        Self::AcademicFetch,
        Self::DocumentParse,
        Self::DocumentUpload,
        Self::KeyValidate,
    ];

    /// Pair a resource with an operation, defaulting the operation.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the operation does not belong to the resource.
    pub fn new(resource: Resource, operation: Option<Operation>) -> DispatchResult<Self> {
        let operation = operation.unwrap_or_else(|| resource.default_operation());

        match (resource, operation) {
            (Resource::Academic, Operation::Search) => Ok(Self::AcademicSearch),
            (Resource::Academic, Operation::Fetch) => Ok(Self::AcademicFetch),
            (Resource::Document, Operation::Parse) => Ok(Self::DocumentParse),
            (Resource::Document, Operation::Upload) => Ok(Self::DocumentUpload),
            (Resource::Key, Operation::Validate) => Ok(Self::KeyValidate),
            _ => {
                let valid =
                    resource.operations().iter().map(|op| op.value()).collect::<Vec<_>>();
                Err(DispatchError::validation(
                    "operation",
                    format!(
                        "'{operation}' is not an operation of resource '{resource}' (expected one of: {})",
                        valid.join(", ")
                    ),
                ))
            }
        }
    }

    /// The resource half of the pair.
    #[must_use]
    pub const fn resource(self) -> Resource {
        match self {
            Self::AcademicSearch | Self::AcademicFetch => Resource::Academic,
            Self::DocumentParse | Self::DocumentUpload => Resource::Document,
            Self::KeyValidate => Resource::Key,
        }
    }

    /// The operation half of the pair.
    #[must_use]
    pub const fn operation(self) -> Operation {
        match self {
            Self::AcademicSearch => Operation::Search,
            Self::AcademicFetch => Operation::Fetch,
            Self::DocumentParse => Operation::Parse,
            Self::DocumentUpload => Operation::Upload,
            Self::KeyValidate => Operation::Validate,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.resource(), self.operation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pairs() {
        for selection in Selection::ALL {
            let rebuilt = Selection::new(selection.resource(), Some(selection.operation())).unwrap();
            assert_eq!(rebuilt, selection);
        }
    }

    #[test]
    fn test_default_operation() {
        assert_eq!(Selection::new(Resource::Academic, None).unwrap(), Selection::AcademicSearch);
        assert_eq!(Selection::new(Resource::Document, None).unwrap(), Selection::DocumentParse);
        assert_eq!(Selection::new(Resource::Key, None).unwrap(), Selection::KeyValidate);
    }

    #[test]
    fn test_mismatched_pair_rejected() {
        let err = Selection::new(Resource::Key, Some(Operation::Search)).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("validate"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Selection::DocumentUpload.to_string(), "document/upload");
    }
}
