use super::{auto, Column, ErrorSet};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// Set if the field is annotated with `#[auto]`
    pub(crate) auto: Option<syn::Attribute>,

    /// Set if the field is annotated with `#[readonly]`
    pub(crate) read_only: Option<syn::Attribute>,

    /// Set if the field is mapped to a column
    pub(crate) column: Option<Column>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("auto") {
                if attrs.auto.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[auto] attribute"));
                } else {
                    match auto::validate(attr) {
                        Ok(()) => attrs.auto = Some(attr.clone()),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("readonly") {
                if attrs.read_only.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[readonly] attribute",
                    ));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    attrs.read_only = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(column) => attrs.column = Some(column),
                        Err(err) => errs.push(err),
                    }
                }
            }
        }

        // Flags only make sense on a field that has a column to emit.
        if attrs.column.is_none() {
            if let Some(attr) = &attrs.key {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "#[key] requires the field to be mapped with #[column]",
                ));
            }

            if let Some(attr) = &attrs.auto {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "#[auto] requires the field to be mapped with #[column]",
                ));
            }

            if let Some(attr) = &attrs.read_only {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "#[readonly] requires the field to be mapped with #[column]",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ident.clone(),
            ty: field.ty.clone(),
            attrs,
        })
    }

    /// Column the field maps to, or `None` for unmapped fields.
    pub(crate) fn column_name(&self) -> Option<String> {
        let column = self.attrs.column.as_ref()?;

        Some(match &column.name {
            Some(name) => name.value(),
            None => self.ident.unraw().to_string(),
        })
    }

    pub(crate) fn is_key(&self) -> bool {
        self.attrs.key.is_some()
    }

    pub(crate) fn is_auto(&self) -> bool {
        self.attrs.auto.is_some()
    }

    pub(crate) fn is_read_only(&self) -> bool {
        self.attrs.read_only.is_some()
    }
}
