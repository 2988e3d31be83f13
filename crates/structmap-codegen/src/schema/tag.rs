use syn::punctuated::Punctuated;

/// One alias from a `#[tag(map = "Alias", json = "alias")]` attribute.
#[derive(Debug)]
pub(crate) struct Tag {
    /// Tag name the alias is declared under
    pub(crate) key: syn::Ident,

    /// The alias
    pub(crate) value: syn::LitStr,
}

impl Tag {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Vec<Tag>> {
        let pairs = attr.parse_args_with(
            Punctuated::<syn::MetaNameValue, syn::Token![,]>::parse_terminated,
        )?;

        let mut tags: Vec<Tag> = vec![];

        for pair in pairs {
            let Some(key) = pair.path.get_ident() else {
                return Err(syn::Error::new_spanned(&pair.path, "expected a tag name"));
            };

            let syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Str(value),
                ..
            }) = &pair.value
            else {
                return Err(syn::Error::new_spanned(
                    &pair.value,
                    "tag value must be a string literal",
                ));
            };

            if tags.iter().any(|tag| tag.key == *key) {
                return Err(syn::Error::new_spanned(
                    key,
                    format!("duplicate tag `{key}`"),
                ));
            }

            tags.push(Tag {
                key: key.clone(),
                value: value.clone(),
            });
        }

        if tags.is_empty() {
            return Err(syn::Error::new_spanned(
                attr,
                "expected at least one `name = \"alias\"` pair",
            ));
        }

        Ok(tags)
    }
}
