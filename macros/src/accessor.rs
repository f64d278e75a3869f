//! Accessor synthesizer: `discriminant(&self)` on the input enum

use quote::quote;

use crate::types::{DeclarationSpec, FragmentKind, GeneratedFragment};

pub fn synthesize(spec: &DeclarationSpec) -> syn::Result<GeneratedFragment> {
    let vis = &spec.vis;
    let shape = &spec.discriminant_name;

    let arms = spec.variants.iter().map(|variant| {
        let pattern = variant.wildcard_pattern();
        let name = &variant.name;
        let cfgs = &variant.cfg_attrs;
        quote! { #(#cfgs)* #pattern => #shape::#name, }
    });

    // `*self` keeps the match valid for an enum without variants
    GeneratedFragment::member(
        FragmentKind::Accessor,
        quote! {
            /// The payload-free discriminant of this value.
            #[inline]
            #vis fn discriminant(&self) -> #shape {
                match *self {
                    #(#arms)*
                }
            }
        },
    )
}
