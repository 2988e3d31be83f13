use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// All fields in declaration order, public or not
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let data = match &ast.data {
            syn::Data::Struct(data) => data,
            syn::Data::Enum(data) => {
                return Err(syn::Error::new_spanned(
                    data.enum_token,
                    "`Record` can only be derived for structs",
                ))
            }
            syn::Data::Union(data) => {
                return Err(syn::Error::new_spanned(
                    data.union_token,
                    "`Record` can only be derived for structs",
                ))
            }
        };

        let syn::Fields::Named(node) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "record fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut fields = vec![];

        for node in &node.named {
            if let Some(field) = errs.check(Field::from_ast(node, &ast.ident)) {
                fields.push(field);
            }
        }

        errs.finish()?;

        Ok(Self {
            ident: ast.ident.clone(),
            fields,
        })
    }

    /// Public fields paired with their position in the record's value.
    pub(crate) fn public_fields(&self) -> impl Iterator<Item = (usize, &Field)> {
        self.fields
            .iter()
            .filter(|field| field.public)
            .enumerate()
    }
}
