/// Creates a new identifier prefixed with `__dtomap_` to avoid name collisions
/// with user-defined names in generated code.
pub(crate) fn ident(name: &str) -> syn::Ident {
    quote::format_ident!("__dtomap_{name}")
}
