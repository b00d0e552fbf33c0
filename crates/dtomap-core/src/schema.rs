mod cache;
pub use cache::MetadataCache;

mod def;
pub use def::{EntityDef, FieldDef};

mod field;
pub use field::{FieldDescriptor, Identity, IdentityType};

mod metadata;
pub use metadata::EntityMetadata;

/// Strips the module path and generic arguments from a type name.
///
/// `app::dto::SomeSimpleType<T>` becomes `SomeSimpleType`.
pub fn bare_type_name(type_name: &str) -> &str {
    let without_generics = match type_name.find('<') {
        Some(pos) => &type_name[..pos],
        None => type_name,
    };

    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
        .trim()
}
