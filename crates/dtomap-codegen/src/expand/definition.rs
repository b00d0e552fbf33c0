use super::Expand;
use crate::schema::{Codec, Field, Naming};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_definition(&self) -> TokenStream {
        let dtomap = &self.dtomap;

        let table = self
            .entity
            .attrs
            .table
            .as_ref()
            .map(|table| quote!(.table(#table)));

        let naming = self.entity.attrs.naming.as_ref().map(|naming| {
            let naming = self.expand_naming(naming);
            quote!(.naming(#naming))
        });

        let fields = self.entity.fields.iter().map(|field| {
            let field_def = self.expand_field_def(field);
            quote!(.field(#field_def))
        });

        quote! {
            fn definition() -> #dtomap::EntityDef {
                #dtomap::EntityDef::new(::std::any::type_name::<Self>())
                    #table
                    #naming
                    #( #fields )*
            }
        }
    }

    fn expand_field_def(&self, field: &Field) -> TokenStream {
        let dtomap = &self.dtomap;
        let name = field.ident.to_string();
        let ty = &field.ty;
        let ty_text = quote!(#ty).to_string();

        let mut def = quote!(#dtomap::FieldDef::new(#name, #ty_text));

        if field.nullable() {
            def.extend(quote!(.nullable()));
        }

        if field.is_key() {
            def.extend(quote!(.identity()));
        }

        if field.attrs.skip {
            def.extend(quote!(.ignore()));
        }

        if let Some(naming) = &field.attrs.naming {
            let naming = self.expand_naming(naming);
            def.extend(quote!(.naming(#naming)));
        }

        let codec = &field.attrs.codec;
        if codec.to_storage.is_some() || codec.from_storage.is_some() {
            let to_storage = self.expand_codec(codec.to_storage.as_ref());
            let from_storage = self.expand_codec(codec.from_storage.as_ref());

            def.extend(quote! {
                .codec(#dtomap::FieldCodec {
                    to_storage: #to_storage,
                    from_storage: #from_storage,
                })
            });
        }

        def
    }

    fn expand_naming(&self, naming: &Naming) -> TokenStream {
        let dtomap = &self.dtomap;

        match naming {
            Naming::SnakeCase => quote!(#dtomap::Naming::SnakeCase),
            Naming::LowerCase => quote!(#dtomap::Naming::LowerCase),
            Naming::Verbatim => quote!(#dtomap::Naming::Verbatim),
            Naming::Forced(name) => quote!(#dtomap::Naming::forced(#name)),
        }
    }

    fn expand_codec(&self, codec: Option<&Codec>) -> TokenStream {
        let dtomap = &self.dtomap;

        let variant = match codec {
            None => return quote!(::std::option::Option::None),
            Some(Codec::Timestamp) => quote!(Timestamp),
            Some(Codec::Ipv4) => quote!(Ipv4),
            Some(Codec::Json) => quote!(Json),
            Some(Codec::Stringify) => quote!(Stringify),
            Some(Codec::Construct(_)) => quote!(Construct),
        };

        quote!(::std::option::Option::Some(#dtomap::Codec::#variant))
    }
}
