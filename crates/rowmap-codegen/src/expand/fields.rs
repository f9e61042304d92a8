use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

impl Expand<'_> {
    /// The `static` descriptor table, one `Field` per mapped struct field.
    pub(super) fn expand_fields_static(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let fields_ident = util::ident("FIELDS");

        let descriptors: Vec<_> = self
            .record
            .mapped_fields()
            .map(|(field, column)| {
                let name = field.ident.unraw().to_string();
                let mut descriptor = quote!(#rowmap::Field::new(#name, #column));

                if field.is_key() {
                    descriptor = quote!(#descriptor.with_primary_key());
                }

                if field.is_auto() {
                    descriptor = quote!(#descriptor.with_auto_increment());
                }

                if field.is_read_only() {
                    descriptor = quote!(#descriptor.with_read_only());
                }

                descriptor
            })
            .collect();

        let len = util::int(descriptors.len());

        quote! {
            static #fields_ident: [#rowmap::Field; #len] = [
                #( #descriptors, )*
            ];
        }
    }
}
