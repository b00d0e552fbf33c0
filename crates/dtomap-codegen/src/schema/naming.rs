mod kw {
    syn::custom_keyword!(snake_case);
    syn::custom_keyword!(lower_case);
    syn::custom_keyword!(verbatim);
}

/// Argument of `#[naming(..)]`, or a forced name from `#[column("..")]`.
#[derive(Debug, Clone)]
pub(crate) enum Naming {
    SnakeCase,
    LowerCase,
    Verbatim,
    Forced(syn::LitStr),
}

impl Naming {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Naming> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Naming {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();

        if lookahead.peek(kw::snake_case) {
            let _kw: kw::snake_case = input.parse()?;
            Ok(Self::SnakeCase)
        } else if lookahead.peek(kw::lower_case) {
            let _kw: kw::lower_case = input.parse()?;
            Ok(Self::LowerCase)
        } else if lookahead.peek(kw::verbatim) {
            let _kw: kw::verbatim = input.parse()?;
            Ok(Self::Verbatim)
        } else {
            Err(lookahead.error())
        }
    }
}
