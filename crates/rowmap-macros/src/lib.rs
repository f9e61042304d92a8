extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `rowmap::Record` for a struct with named fields.
///
/// Field attributes:
///
/// - `#[column]` / `#[column("name")]`: map the field to a column (named
///   after the field unless given). Fields without it are not mapped.
/// - `#[key]`: primary key; at most one per record.
/// - `#[auto]`: assigned by the database on insert (auto-increment).
/// - `#[readonly]`: owned by the database; never inserted or updated.
#[proc_macro_derive(Record, attributes(column, key, auto, readonly))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match rowmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
