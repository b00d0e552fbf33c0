mod definition;
mod util;
mod values;

use crate::schema::Entity;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The entity being expanded
    entity: &'a Entity,

    /// Path prefix for dtomap types
    dtomap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let dtomap = &self.dtomap;
        let ident = &self.entity.ident;
        let (impl_generics, ty_generics, where_clause) = self.entity.generics.split_for_impl();

        let definition = self.expand_definition();
        let to_values = self.expand_to_values();
        let from_values = self.expand_from_values();
        let set_identity = self.expand_set_identity();

        wrap_in_const(quote! {
            impl #impl_generics #dtomap::Entity for #ident #ty_generics #where_clause {
                #definition
                #to_values
                #from_values
                #set_identity
            }
        })
    }
}

pub(super) fn entity(entity: &Entity) -> TokenStream {
    Expand {
        entity,
        dtomap: quote!(_dtomap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use dtomap as _dtomap;
            #code
        };
    }
}
