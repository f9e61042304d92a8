use proc_macro2::{Literal, TokenStream};
use quote::ToTokens;

/// Unsuffixed integer literal, for match arms and array lengths.
pub(crate) fn int(v: usize) -> TokenStream {
    Literal::usize_unsuffixed(v).into_token_stream()
}

/// Identifier prefixed with `__ROWMAP_` so generated items cannot collide
/// with user code.
pub(crate) fn ident(name: &str) -> syn::Ident {
    quote::format_ident!("__ROWMAP_{name}")
}
