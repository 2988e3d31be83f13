use super::{ErrorSet, Tag};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type, with `Self` replaced by the record's name
    pub(crate) ty: syn::Type,

    /// True for `pub` fields. Only these take part in mapping.
    pub(crate) public: bool,

    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Aliases from `#[tag(...)]`
    pub(crate) tags: Vec<Tag>,

    /// Conversion directive from `#[mapconv("...")]`
    pub(crate) mapconv: Option<syn::LitStr>,

    /// True if the field is annotated with `#[readonly]`
    pub(crate) readonly: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, record_ident: &syn::Ident) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let public = matches!(field.vis, syn::Visibility::Public(_));

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();
        let mut seen_tag = false;

        for attr in &field.attrs {
            let known = if attr.path().is_ident("tag") {
                if seen_tag {
                    errs.spanned(attr, "duplicate #[tag] attribute");
                } else if let Some(tags) = errs.check(Tag::from_ast(attr)) {
                    attrs.tags = tags;
                }
                seen_tag = true;
                true
            } else if attr.path().is_ident("mapconv") {
                if attrs.mapconv.is_some() {
                    errs.spanned(attr, "duplicate #[mapconv] attribute");
                } else if let Some(lit) = errs.check(attr.parse_args::<syn::LitStr>()) {
                    if lit.value().is_empty() {
                        errs.spanned(&lit, "conversion directive must not be empty");
                    }
                    attrs.mapconv = Some(lit);
                }
                true
            } else if attr.path().is_ident("readonly") {
                if attrs.readonly {
                    errs.spanned(attr, "duplicate #[readonly] attribute");
                } else {
                    errs.check(attr.meta.require_path_only().map(|_| ()));
                    attrs.readonly = true;
                }
                true
            } else {
                false
            };

            if known && !public {
                errs.spanned(attr, "mapping attributes require a `pub` field");
            }
        }

        errs.finish()?;

        let mut ty = field.ty.clone();
        rewrite_self(&mut ty, record_ident);

        Ok(Self {
            ident: ident.clone(),
            ty,
            public,
            attrs,
        })
    }
}

fn rewrite_self(ty: &mut syn::Type, record: &syn::Ident) {
    use syn::visit_mut::VisitMut;

    struct RewriteSelf<'a>(&'a syn::Ident);

    impl VisitMut for RewriteSelf<'_> {
        fn visit_path_mut(&mut self, path: &mut syn::Path) {
            syn::visit_mut::visit_path_mut(self, path);

            if path.is_ident("Self") {
                path.segments[0].ident = self.0.clone();
            }
        }
    }

    RewriteSelf(record).visit_type_mut(ty);
}
