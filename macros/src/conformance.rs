//! Conformance emitter: `impl DiscriminatedUnion for <Enum>`

use quote::quote;

use crate::types::{DeclarationSpec, FragmentKind, GeneratedFragment};

/// Emit the capability impl unless the caller declares it themselves.
/// Only needs the shape type to be part of the same expansion.
pub fn emit(spec: &DeclarationSpec) -> syn::Result<Option<GeneratedFragment>> {
    if spec.already_declares_capability {
        return Ok(None);
    }

    let krate = &spec.crate_path;
    let type_name = &spec.type_name;
    let shape = &spec.discriminant_name;
    let (impl_generics, ty_generics, where_clause) = spec.generics.split_for_impl();

    GeneratedFragment::item(
        FragmentKind::Conformance,
        quote! {
            impl #impl_generics #krate::DiscriminatedUnion for #type_name #ty_generics #where_clause {
                type Discriminant = #shape;

                #[inline]
                fn discriminant(&self) -> #shape {
                    Self::discriminant(self)
                }
            }
        },
    )
    .map(Some)
}
