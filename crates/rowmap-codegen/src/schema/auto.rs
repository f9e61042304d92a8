/// Checks the form of an `#[auto]` attribute: either bare `#[auto]` or
/// `#[auto(increment)]`. Both mean the database assigns the value on insert.
pub(super) fn validate(attr: &syn::Attribute) -> syn::Result<()> {
    match &attr.meta {
        syn::Meta::Path(_) => Ok(()),
        syn::Meta::List(list) => match list.parse_args::<syn::Ident>() {
            Ok(strategy) if strategy == "increment" => Ok(()),
            _ => Err(unknown_strategy(attr)),
        },
        syn::Meta::NameValue(_) => Err(unknown_strategy(attr)),
    }
}

fn unknown_strategy(attr: &syn::Attribute) -> syn::Error {
    syn::Error::new_spanned(
        attr,
        "unknown #[auto] strategy; expected #[auto] or #[auto(increment)]",
    )
}
