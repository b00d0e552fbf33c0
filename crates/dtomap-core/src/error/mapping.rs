use super::{Error, ErrorKind};

/// Error when a record type or value violates the mapping contract.
///
/// These are raised while building entity metadata, while synthesizing SQL
/// that needs an identity column, or while turning rows back into records.
#[derive(Debug)]
pub(super) struct MappingError {
    entity: Box<str>,
    kind: MappingErrorKind,
}

#[derive(Debug)]
enum MappingErrorKind {
    /// The operation needs an identity field and the type declares none.
    MissingIdentity { operation: &'static str },

    /// The identity field exists but holds no value.
    NullIdentity { operation: &'static str },

    /// The identity field's type cannot receive a generated identifier.
    UnsupportedIdentity { field: Box<str>, ty: Box<str> },

    /// More than one field is marked as the identity.
    AmbiguousIdentity { first: Box<str>, second: Box<str> },

    /// A non-nullable field has no column in the row being loaded.
    MissingField { column: Box<str> },

    /// Two fields resolve to the same column name.
    DuplicateColumn { column: Box<str> },
}

impl std::error::Error for MappingError {}

impl core::fmt::Display for MappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let entity = &self.entity;

        f.write_str("mapping error: ")?;

        match &self.kind {
            MappingErrorKind::MissingIdentity { operation } => write!(
                f,
                "`{entity}` does not declare an identity field; cannot {operation}"
            ),
            MappingErrorKind::NullIdentity { operation } => {
                write!(f, "identity of `{entity}` is not set; cannot {operation}")
            }
            MappingErrorKind::UnsupportedIdentity { field, ty } => write!(
                f,
                "identity field `{entity}.{field}` has type `{ty}`; only integer and String identities are supported"
            ),
            MappingErrorKind::AmbiguousIdentity { first, second } => write!(
                f,
                "`{entity}` marks both `{first}` and `{second}` as identity fields"
            ),
            MappingErrorKind::MissingField { column } => write!(
                f,
                "column `{column}` is missing from the row while loading `{entity}`"
            ),
            MappingErrorKind::DuplicateColumn { column } => write!(
                f,
                "more than one field of `{entity}` maps to column `{column}`"
            ),
        }
    }
}

impl Error {
    /// The type declares no identity field but `operation` requires one.
    pub fn missing_identity(entity: impl Into<String>, operation: &'static str) -> Error {
        mapping(entity, MappingErrorKind::MissingIdentity { operation })
    }

    /// The record's identity value is unset but `operation` requires one.
    pub fn null_identity(entity: impl Into<String>, operation: &'static str) -> Error {
        mapping(entity, MappingErrorKind::NullIdentity { operation })
    }

    /// The identity field has a type that generated identifiers cannot be assigned to.
    pub fn unsupported_identity(
        entity: impl Into<String>,
        field: impl Into<String>,
        ty: impl Into<String>,
    ) -> Error {
        mapping(
            entity,
            MappingErrorKind::UnsupportedIdentity {
                field: field.into().into(),
                ty: ty.into().into(),
            },
        )
    }

    /// Two fields of the same type are marked as identity.
    pub fn ambiguous_identity(
        entity: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Error {
        mapping(
            entity,
            MappingErrorKind::AmbiguousIdentity {
                first: first.into().into(),
                second: second.into().into(),
            },
        )
    }

    /// A row lacks the column of a non-nullable field.
    pub fn missing_field(entity: impl Into<String>, column: impl Into<String>) -> Error {
        mapping(
            entity,
            MappingErrorKind::MissingField {
                column: column.into().into(),
            },
        )
    }

    /// Two fields of the same type resolve to one column name.
    pub fn duplicate_column(entity: impl Into<String>, column: impl Into<String>) -> Error {
        mapping(
            entity,
            MappingErrorKind::DuplicateColumn {
                column: column.into().into(),
            },
        )
    }

    /// Returns `true` for any mapping error.
    pub fn is_mapping(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::Mapping(_)))
    }

    pub fn is_missing_identity(&self) -> bool {
        self.is_mapping_kind(|kind| matches!(kind, MappingErrorKind::MissingIdentity { .. }))
    }

    pub fn is_null_identity(&self) -> bool {
        self.is_mapping_kind(|kind| matches!(kind, MappingErrorKind::NullIdentity { .. }))
    }

    pub fn is_unsupported_identity(&self) -> bool {
        self.is_mapping_kind(|kind| matches!(kind, MappingErrorKind::UnsupportedIdentity { .. }))
    }

    pub fn is_ambiguous_identity(&self) -> bool {
        self.is_mapping_kind(|kind| matches!(kind, MappingErrorKind::AmbiguousIdentity { .. }))
    }

    pub fn is_missing_field(&self) -> bool {
        self.is_mapping_kind(|kind| matches!(kind, MappingErrorKind::MissingField { .. }))
    }

    pub fn is_duplicate_column(&self) -> bool {
        self.is_mapping_kind(|kind| matches!(kind, MappingErrorKind::DuplicateColumn { .. }))
    }

    fn is_mapping_kind(&self, f: impl Fn(&MappingErrorKind) -> bool) -> bool {
        self.any_kind(|kind| match kind {
            ErrorKind::Mapping(err) => f(&err.kind),
            _ => false,
        })
    }
}

fn mapping(entity: impl Into<String>, kind: MappingErrorKind) -> Error {
    Error::from(ErrorKind::Mapping(MappingError {
        entity: entity.into().into(),
        kind,
    }))
}
