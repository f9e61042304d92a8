use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let record_ident = &self.record.ident;
        let record_name = record_ident.to_string();
        let fields_ident = util::ident("FIELDS");
        let get_arms = self.expand_get_arms();
        let set_arms = self.expand_set_arms();

        quote! {
            impl #rowmap::Record for #record_ident {
                const NAME: &'static str = #record_name;

                fn fields() -> &'static [#rowmap::Field] {
                    &#fields_ident
                }

                fn get(&self, index: usize) -> #rowmap::Result<#rowmap::Value> {
                    match index {
                        #get_arms
                        _ => Err(#rowmap::Error::metadata(
                            #record_name,
                            #rowmap::format!("no field at index {index}"),
                        )),
                    }
                }

                #[allow(unreachable_code, unused_variables)]
                fn set(&mut self, index: usize, value: #rowmap::Value) -> #rowmap::Result<()> {
                    match index {
                        #set_arms
                        _ => {
                            return Err(#rowmap::Error::metadata(
                                #record_name,
                                #rowmap::format!("no field at index {index}"),
                            ))
                        }
                    }
                    Ok(())
                }
            }
        }
    }

    fn expand_get_arms(&self) -> TokenStream {
        let rowmap = &self.rowmap;

        self.record
            .mapped_fields()
            .enumerate()
            .map(|(index, (field, _))| {
                let index = util::int(index);
                let ident = &field.ident;
                let ty = &field.ty;

                quote!(#index => Ok(<#ty as #rowmap::Primitive>::to_value(&self.#ident)),)
            })
            .collect()
    }

    fn expand_set_arms(&self) -> TokenStream {
        let rowmap = &self.rowmap;

        self.record
            .mapped_fields()
            .enumerate()
            .map(|(index, (field, _))| {
                let index = util::int(index);
                let ident = &field.ident;
                let ty = &field.ty;

                quote!(#index => self.#ident = <#ty as #rowmap::Primitive>::load(value)?,)
            })
            .collect()
    }
}
