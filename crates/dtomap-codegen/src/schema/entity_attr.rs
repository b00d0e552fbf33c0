use super::{ErrorSet, Naming};

#[derive(Debug, Default)]
pub(crate) struct EntityAttr {
    /// Optional database table name to map the entity to
    pub(crate) table: Option<syn::LitStr>,

    /// Naming applied to the table and every field without an override
    pub(crate) naming: Option<Naming>,
}

impl EntityAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if attr.path().is_ident("table") {
                if let Some(table) = errs.parsed(table_name(attr)) {
                    errs.set_once(&mut self.table, table, attr, "table");
                }
            } else if attr.path().is_ident("naming") {
                if let Some(naming) = errs.parsed(Naming::from_ast(attr)) {
                    errs.set_once(&mut self.naming, naming, attr, "naming");
                }
            } else if attr.path().is_ident("column") || attr.path().is_ident("codec") {
                errs.spanned(attr, "this attribute belongs on a field");
            }
        }

        errs.finish(())
    }
}

/// Reads `#[table = "name"]`.
fn table_name(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    if let syn::Meta::NameValue(meta) = &attr.meta {
        if let syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Str(lit),
            ..
        }) = &meta.value
        {
            return Ok(lit.clone());
        }
    }

    Err(syn::Error::new_spanned(
        attr,
        "expected `table = \"table_name\"`",
    ))
}
