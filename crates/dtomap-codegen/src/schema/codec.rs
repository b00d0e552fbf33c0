use syn::parenthesized;

mod kw {
    syn::custom_keyword!(timestamp);
    syn::custom_keyword!(ipv4);
    syn::custom_keyword!(json);
    syn::custom_keyword!(stringify);
    syn::custom_keyword!(construct);
}

#[derive(Debug, Clone)]
pub(crate) enum Codec {
    Timestamp,
    Ipv4,
    Json,
    Stringify,
    /// Reads the stored value as the given type and converts it with `From`.
    Construct(syn::Type),
}

impl Codec {
    fn writes(&self) -> bool {
        !matches!(self, Codec::Construct(_))
    }

    fn reads(&self) -> bool {
        !matches!(self, Codec::Stringify)
    }
}

/// Codecs configured on a field, one per direction.
#[derive(Debug, Default)]
pub(crate) struct CodecAttr {
    pub(crate) to_storage: Option<Codec>,
    pub(crate) from_storage: Option<Codec>,
}

impl CodecAttr {
    pub(crate) fn is_empty(&self) -> bool {
        self.to_storage.is_none() && self.from_storage.is_none()
    }

    /// Adds the codecs listed in one `#[codec(..)]` attribute.
    pub(super) fn populate_from_ast(&mut self, attr: &syn::Attribute) -> syn::Result<()> {
        let codecs =
            attr.parse_args_with(syn::punctuated::Punctuated::<Codec, syn::Token![,]>::parse_terminated)?;

        for codec in codecs {
            if codec.writes() {
                if self.to_storage.is_some() {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "field already has a codec for storing values",
                    ));
                }
                self.to_storage = Some(codec.clone());
            }

            if codec.reads() {
                if self.from_storage.is_some() {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "field already has a codec for reading values",
                    ));
                }
                self.from_storage = Some(codec);
            }
        }

        Ok(())
    }
}

impl syn::parse::Parse for Codec {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();

        if lookahead.peek(kw::timestamp) {
            let _kw: kw::timestamp = input.parse()?;
            Ok(Self::Timestamp)
        } else if lookahead.peek(kw::ipv4) {
            let _kw: kw::ipv4 = input.parse()?;
            Ok(Self::Ipv4)
        } else if lookahead.peek(kw::json) {
            let _kw: kw::json = input.parse()?;
            Ok(Self::Json)
        } else if lookahead.peek(kw::stringify) {
            let _kw: kw::stringify = input.parse()?;
            Ok(Self::Stringify)
        } else if lookahead.peek(kw::construct) {
            let _kw: kw::construct = input.parse()?;
            let content;
            parenthesized!(content in input);
            Ok(Self::Construct(content.parse()?))
        } else {
            Err(lookahead.error())
        }
    }
}
