use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, FieldsNamed, Type};

/// Ensure input is a struct and return its fields.
pub fn require_struct_fields(input: &DeriveInput) -> syn::Result<&Fields> {
    match &input.data {
        Data::Struct(s) => Ok(&s.fields),
        _ => Err(syn::Error::new(
            input.ident.span(),
            "This derive can only be used on structs",
        )),
    }
}

/// Return named fields if the struct has them; otherwise error.
pub fn require_named_fields(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    let fields = require_struct_fields(input)?;
    match fields {
        Fields::Named(named) => Ok(named),
        Fields::Unnamed(_) => Err(syn::Error::new(
            fields.span(),
            "This derive requires a struct with named fields (e.g. `struct X { ... }`)",
        )),
        Fields::Unit => Err(syn::Error::new(
            fields.span(),
            "This derive requires a non-unit struct with fields",
        )),
    }
}

/// Reject generic inputs; the argument pack works with concrete field types.
pub fn require_non_generic(input: &DeriveInput) -> syn::Result<()> {
    if input.generics.params.is_empty() {
        Ok(())
    } else {
        Err(syn::Error::new(
            input.generics.span(),
            "This derive does not support generic types",
        ))
    }
}

/// Whether the type's last path segment is `Option`.
pub fn is_option(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Option"),
        _ => false,
    }
}
