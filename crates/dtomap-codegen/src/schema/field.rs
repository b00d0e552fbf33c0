use super::{CodecAttr, ErrorSet, Naming};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug)]
pub(crate) struct FieldAttr {
    /// The field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// The field is annotated with `#[skip]`
    pub(crate) skip: bool,

    /// Column naming from `#[column("..")]` or `#[naming(..)]`
    pub(crate) naming: Option<Naming>,

    pub(crate) codec: CodecAttr,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Field> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "entity fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut key = None;
        let mut skip = None;
        let mut naming = None;
        let mut codec = CodecAttr::default();

        for attr in &field.attrs {
            let path = attr.path();

            if path.is_ident("key") {
                errs.set_once(&mut key, attr.clone(), attr, "key");
            } else if path.is_ident("skip") {
                errs.set_once(&mut skip, (), attr, "skip");
            } else if path.is_ident("column") || path.is_ident("naming") {
                let parsed = if path.is_ident("column") {
                    attr.parse_args().map(Naming::Forced)
                } else {
                    Naming::from_ast(attr)
                };

                if let Some(parsed) = errs.parsed(parsed) {
                    if naming.is_some() {
                        errs.spanned(attr, "field already has a column name or naming");
                    } else {
                        naming = Some(parsed);
                    }
                }
            } else if path.is_ident("codec") {
                let res = codec.populate_from_ast(attr);
                errs.parsed(res);
            } else if path.is_ident("table") {
                errs.spanned(attr, "#[table] belongs on the struct");
            }
        }

        if skip.is_some() && key.is_some() {
            errs.spanned(
                field,
                "#[key] and #[skip] cannot be combined on the same field",
            );
        }

        if skip.is_some() && (naming.is_some() || !codec.is_empty()) {
            errs.spanned(field, "skipped fields cannot have a column, naming or codec");
        }

        errs.finish(Field {
            ident: ident.clone(),
            ty: field.ty.clone(),
            attrs: FieldAttr {
                key,
                skip: skip.is_some(),
                naming,
                codec,
            },
        })
    }

    pub(crate) fn is_key(&self) -> bool {
        self.attrs.key.is_some()
    }

    /// `Option<T>` fields accept null and missing columns.
    pub(crate) fn nullable(&self) -> bool {
        let syn::Type::Path(path) = &self.ty else {
            return false;
        };

        path.qself.is_none()
            && path
                .path
                .segments
                .last()
                .is_some_and(|segment| segment.ident == "Option")
    }
}
