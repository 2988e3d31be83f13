use super::{util, Expand};
use crate::schema::Field;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let structmap = &self.structmap;
        let ident = &self.record.ident;
        let name = ident.to_string();
        let fields = self
            .record
            .public_fields()
            .map(|(index, field)| self.expand_field_schema(index, field));

        quote! {
            impl #structmap::Record for #ident {
                fn schema() -> &'static #structmap::RecordSchema {
                    static SCHEMA: ::std::sync::OnceLock<#structmap::RecordSchema> =
                        ::std::sync::OnceLock::new();

                    SCHEMA.get_or_init(|| #structmap::RecordSchema {
                        name: #name,
                        fields: ::std::vec![#( #fields ),*],
                    })
                }

                fn record_type() -> #structmap::RecordType {
                    #structmap::RecordType::of::<#ident>(<#ident as #structmap::Record>::schema)
                }
            }
        }
    }

    fn expand_field_schema(&self, index: usize, field: &Field) -> TokenStream {
        let structmap = &self.structmap;
        let name = field.ident.to_string();
        let index = util::int(index);
        let ty = &field.ty;
        let read_only = field.attrs.readonly;

        let tags = field.attrs.tags.iter().map(|tag| {
            let key = tag.key.to_string();
            let value = &tag.value;
            quote!(#structmap::Tag { key: #key, value: #value })
        });

        let convert_to = match &field.attrs.mapconv {
            Some(directive) => quote!(::std::option::Option::Some(#directive)),
            None => quote!(::std::option::Option::None),
        };

        quote! {
            #structmap::FieldSchema {
                name: #name,
                index: #index,
                ty: <#ty as #structmap::Field>::ty(),
                tags: ::std::vec![#( #tags ),*],
                convert_to: #convert_to,
                read_only: #read_only,
            }
        }
    }
}
