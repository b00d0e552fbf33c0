use super::{EntityAttr, ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Entity {
    /// Struct identifier
    pub(crate) ident: syn::Ident,

    /// Struct generics
    pub(crate) generics: syn::Generics,

    /// Struct-level attributes
    pub(crate) attrs: EntityAttr,

    /// Fields in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Entity {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Entity> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "entity fields must be named",
            ));
        };

        let mut errs = ErrorSet::new();

        let mut attrs = EntityAttr::default();
        let res = attrs.populate_from_ast(&ast.attrs);
        errs.parsed(res);

        let mut fields = Vec::with_capacity(node.named.len());

        for node in &node.named {
            fields.extend(errs.parsed(Field::from_ast(node)));
        }

        let mut keys = fields.iter().filter(|field| field.is_key());
        if let (Some(_), Some(second)) = (keys.next(), keys.next()) {
            errs.spanned(&second.attrs.key, "an entity can have only one #[key] field");
        }

        errs.finish(Entity {
            ident: ast.ident.clone(),
            generics: ast.generics.clone(),
            attrs,
            fields,
        })
    }

    pub(crate) fn key_field(&self) -> Option<&Field> {
        self.fields.iter().find(|field| field.is_key())
    }

    /// Fields taking part in mapping, in declaration order.
    pub(crate) fn mapped_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| !field.attrs.skip)
    }
}
