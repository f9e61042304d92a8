use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// All struct fields, mapped or not
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record types cannot be generic",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut fields = vec![];
        let mut key: Option<&syn::Ident> = None;

        for node in &node.named {
            match Field::from_ast(node) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        for field in &fields {
            let Some(attr) = &field.attrs.key else {
                continue;
            };

            if let Some(first) = key {
                errs.push(syn::Error::new_spanned(
                    attr,
                    format!("record already has a primary key field `{first}`"),
                ));
            } else {
                key = Some(&field.ident);
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            fields,
        })
    }

    /// Fields that carry a column, in declaration order. Their position in
    /// this iterator is their index in the descriptor table.
    pub(crate) fn mapped_fields(&self) -> impl Iterator<Item = (&Field, String)> + '_ {
        self.fields
            .iter()
            .filter_map(|field| field.column_name().map(|column| (field, column)))
    }
}
