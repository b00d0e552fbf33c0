use super::{util, Expand};
use crate::schema::{Codec, Field};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_to_values(&self) -> TokenStream {
        let dtomap = &self.dtomap;
        let values = self.entity.mapped_fields().map(|field| self.expand_to_value(field));

        quote! {
            fn to_values(&self) -> #dtomap::Result<::std::vec::Vec<#dtomap::Value>> {
                ::std::result::Result::Ok(::std::vec![ #( #values, )* ])
            }
        }
    }

    fn expand_to_value(&self, field: &Field) -> TokenStream {
        let dtomap = &self.dtomap;
        let ident = &field.ident;
        let value = util::ident("value");

        match (&field.attrs.codec.to_storage, field.nullable()) {
            (Some(Codec::Json), false) => quote!(#dtomap::encode_json(&self.#ident)?),
            (Some(Codec::Json), true) => quote! {
                match &self.#ident {
                    ::std::option::Option::Some(#value) => #dtomap::encode_json(#value)?,
                    ::std::option::Option::None => #dtomap::Value::Null,
                }
            },
            (Some(Codec::Stringify), false) => {
                quote!(#dtomap::Value::String(::std::string::ToString::to_string(&self.#ident)))
            }
            (Some(Codec::Stringify), true) => quote! {
                match &self.#ident {
                    ::std::option::Option::Some(#value) => {
                        #dtomap::Value::String(::std::string::ToString::to_string(#value))
                    }
                    ::std::option::Option::None => #dtomap::Value::Null,
                }
            },
            _ => quote!(#dtomap::ToValue::to_value(&self.#ident)),
        }
    }

    pub(super) fn expand_from_values(&self) -> TokenStream {
        let dtomap = &self.dtomap;
        let values = util::ident("values");

        let fields = self.entity.fields.iter().map(|field| {
            let ident = &field.ident;
            let init = self.expand_from_value(field, &values);
            quote!(#ident: #init)
        });

        quote! {
            fn from_values(mut #values: #dtomap::Values) -> #dtomap::Result<Self> {
                ::std::result::Result::Ok(Self {
                    #( #fields, )*
                })
            }
        }
    }

    fn expand_from_value(&self, field: &Field, values: &syn::Ident) -> TokenStream {
        let dtomap = &self.dtomap;
        let name = field.ident.to_string();
        let value = util::ident("value");

        if field.attrs.skip {
            return quote!(::std::default::Default::default());
        }

        match (&field.attrs.codec.from_storage, field.nullable()) {
            (Some(Codec::Json), _) => {
                quote!(#dtomap::decode_json(#values.next_field(#name)?)?)
            }
            (Some(Codec::Construct(scalar)), false) => quote! {
                ::std::convert::From::from(
                    <#scalar as #dtomap::FromValue>::from_value(#values.next_field(#name)?)?
                )
            },
            (Some(Codec::Construct(scalar)), true) => quote! {
                match #values.next_field(#name)? {
                    #dtomap::Value::Null => ::std::option::Option::None,
                    #value => ::std::option::Option::Some(::std::convert::From::from(
                        <#scalar as #dtomap::FromValue>::from_value(#value)?
                    )),
                }
            },
            _ => quote!(#values.decode(#name)?),
        }
    }

    pub(super) fn expand_set_identity(&self) -> TokenStream {
        let dtomap = &self.dtomap;
        let value = util::ident("value");

        let body = match self.entity.key_field() {
            Some(field) => {
                let ident = &field.ident;
                quote! {
                    self.#ident = #dtomap::FromValue::from_value(#value)?;
                    ::std::result::Result::Ok(())
                }
            }
            None => {
                let entity = self.entity.ident.to_string();
                quote! {
                    let _ = #value;
                    ::std::result::Result::Err(#dtomap::Error::missing_identity(#entity, "assign an identity"))
                }
            }
        };

        quote! {
            fn set_identity(&mut self, #value: #dtomap::Value) -> #dtomap::Result<()> {
                #body
            }
        }
    }
}
