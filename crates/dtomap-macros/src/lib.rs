extern crate proc_macro;

use proc_macro::TokenStream;

/// Implements `dtomap::Entity` for a struct with named fields.
///
/// Struct attributes: `#[table = "name"]`, `#[naming(snake_case | lower_case | verbatim)]`.
///
/// Field attributes: `#[key]`, `#[skip]`, `#[column("name")]`, `#[naming(..)]` and
/// `#[codec(timestamp | ipv4 | json | stringify | construct(Type))]`.
#[proc_macro_derive(Entity, attributes(table, naming, key, skip, column, codec))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    match dtomap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
