use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_field_impl(&self) -> TokenStream {
        let structmap = &self.structmap;
        let ident = &self.record.ident;

        let to_values = self.record.public_fields().map(|(_, field)| {
            let field_ident = &field.ident;
            quote!(#structmap::Field::to_value(&self.#field_ident))
        });

        // Private fields are invisible to mapping and start from their
        // default when a record is built from scratch.
        let mut position = 0;
        let load_fields = self.record.fields.iter().map(|field| {
            let field_ident = &field.ident;

            if field.public {
                let index = util::int(position);
                position += 1;
                quote!(#field_ident: #structmap::Field::load(record.take(#index))?)
            } else {
                quote!(#field_ident: ::std::default::Default::default())
            }
        });

        let store_fields = self.record.public_fields().map(|(index, field)| {
            let field_ident = &field.ident;
            let index = util::int(index);
            quote!(#structmap::Field::store(&mut self.#field_ident, record.take(#index))?;)
        });

        quote! {
            impl #structmap::Field for #ident {
                fn ty() -> #structmap::Type {
                    #structmap::Type::Record(<#ident as #structmap::Record>::record_type())
                }

                fn to_value(&self) -> #structmap::Value {
                    #structmap::Value::record_from_vec(::std::vec![#( #to_values ),*])
                }

                fn load(value: #structmap::Value) -> #structmap::Result<Self> {
                    #[allow(unused_mut, unused_variables)]
                    let mut record = #structmap::load_record(
                        value,
                        <#ident as #structmap::Record>::record_type(),
                    )?;

                    ::std::result::Result::Ok(#ident {
                        #( #load_fields, )*
                    })
                }

                fn store(&mut self, value: #structmap::Value) -> #structmap::Result<()> {
                    #[allow(unused_mut, unused_variables)]
                    let mut record = #structmap::load_record(
                        value,
                        <#ident as #structmap::Record>::record_type(),
                    )?;

                    #( #store_fields )*

                    ::std::result::Result::Ok(())
                }
            }
        }
    }
}
