//! Extractor synthesizer: the shared extraction error and one
//! `tuple_from_<variant>` narrowing operation per payload-carrying variant

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::naming::{extractor_name, internal_binding, ref_extractor_name, unraw};
use crate::types::{DeclarationSpec, FragmentKind, GeneratedFragment, VariantSpec};

/// Return type of an extractor: the bare field type for a single field,
/// a tuple in declaration order otherwise
fn payload_type(variant: &VariantSpec, by_ref: bool) -> TokenStream2 {
    let types: Vec<TokenStream2> = variant
        .payload
        .iter()
        .map(|p| {
            let ty = &p.ty;
            if by_ref {
                quote! { &#ty }
            } else {
                quote! { #ty }
            }
        })
        .collect();

    match types.as_slice() {
        [single] => single.clone(),
        _ => quote! { (#(#types),*) },
    }
}

/// Expression rebuilding the payload from the bound fields
fn payload_value(variant: &VariantSpec) -> TokenStream2 {
    let bindings: Vec<_> = variant.payload.iter().map(|p| &p.binding).collect();
    match bindings.as_slice() {
        [single] => quote! { #single },
        _ => quote! { (#(#bindings),*) },
    }
}

fn extractor_doc(variant: &VariantSpec, by_ref: bool) -> String {
    let name = unraw(&variant.name);
    let mut doc = if by_ref {
        format!(
            "Borrows the payload of a `{}` value, or reports which variant was found instead.",
            name
        )
    } else {
        format!(
            "Moves the payload out of a `{}` value, or reports which variant was found instead.",
            name
        )
    };

    let deferred: Vec<String> = variant
        .payload
        .iter()
        .filter(|p| p.is_deferred)
        .map(|p| format!("`{}`", unraw(&p.binding)))
        .collect();
    if !deferred.is_empty() {
        doc.push_str(&format!(
            "\n\nDeferred fields ({}) are returned unevaluated; call them to produce the value.",
            deferred.join(", ")
        ));
    }

    doc
}

/// Generate the extraction error enum shared by every extractor of one
/// expansion, followed by its accessors and trait impls
pub fn synthesize_error(spec: &DeclarationSpec) -> syn::Result<Vec<GeneratedFragment>> {
    let vis = &spec.vis;
    let shape = &spec.discriminant_name;
    let error = &spec.error_name;
    let doc = format!(
        "Returned when a payload extractor of [`{}`] is called on a different variant.",
        unraw(&spec.type_name)
    );

    let error_enum = quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #vis enum #error {
            InvalidExtraction {
                expected: #shape,
                actual: #shape,
            },
        }
    };

    let accessors = quote! {
        impl #error {
            /// The variant the extractor narrows to.
            #vis fn expected(&self) -> #shape {
                match *self {
                    Self::InvalidExtraction { expected, .. } => expected,
                }
            }

            /// The variant the value actually was.
            #vis fn actual(&self) -> #shape {
                match *self {
                    Self::InvalidExtraction { actual, .. } => actual,
                }
            }
        }
    };

    let display = quote! {
        impl ::core::fmt::Display for #error {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match *self {
                    Self::InvalidExtraction { expected, actual } => ::core::write!(
                        f,
                        "invalid payload extraction: expected `{}`, found `{}`",
                        expected,
                        actual
                    ),
                }
            }
        }
    };

    let std_error = quote! {
        impl ::std::error::Error for #error {}
    };

    [error_enum, accessors, display, std_error]
        .into_iter()
        .map(|tokens| GeneratedFragment::item(FragmentKind::ErrorType, tokens))
        .collect()
}

/// Generate the owning (unless `ref_only`) and borrowing extractors of one
/// variant
fn synthesize_variant(
    spec: &DeclarationSpec,
    variant: &VariantSpec,
) -> syn::Result<Vec<GeneratedFragment>> {
    let vis = &spec.vis;
    let shape = &spec.discriminant_name;
    let error = &spec.error_name;
    let name = &variant.name;
    let cfgs = &variant.cfg_attrs;
    let instance = internal_binding("instance");

    let pattern = variant.binding_pattern();
    let value = payload_value(variant);

    let owned_name = extractor_name(name);
    let owned_type = payload_type(variant, false);
    let owned_doc = extractor_doc(variant, false);
    let owned = quote! {
        #(#cfgs)*
        #[doc = #owned_doc]
        #vis fn #owned_name(self) -> ::core::result::Result<#owned_type, #error> {
            match self {
                #pattern => ::core::result::Result::Ok(#value),
                #[allow(unreachable_patterns)]
                #instance => ::core::result::Result::Err(#error::InvalidExtraction {
                    expected: #shape::#name,
                    actual: #instance.discriminant(),
                }),
            }
        }
    };

    let ref_name = ref_extractor_name(name);
    let ref_type = payload_type(variant, true);
    let ref_doc = extractor_doc(variant, true);
    let borrowed = quote! {
        #(#cfgs)*
        #[doc = #ref_doc]
        #vis fn #ref_name(&self) -> ::core::result::Result<#ref_type, #error> {
            match self {
                #pattern => ::core::result::Result::Ok(#value),
                #[allow(unreachable_patterns)]
                _ => ::core::result::Result::Err(#error::InvalidExtraction {
                    expected: #shape::#name,
                    actual: self.discriminant(),
                }),
            }
        }
    };

    let mut fragments = Vec::with_capacity(2);
    if spec.owned_extractors {
        fragments.push(GeneratedFragment::member(FragmentKind::Extractor, owned)?);
    }
    fragments.push(GeneratedFragment::member(FragmentKind::Extractor, borrowed)?);
    Ok(fragments)
}

/// Extractors for every variant with a non-empty payload, in source order
pub fn synthesize(spec: &DeclarationSpec) -> syn::Result<Vec<GeneratedFragment>> {
    let mut fragments = Vec::new();
    for variant in spec.variants.iter().filter(|v| v.has_payload()) {
        fragments.extend(synthesize_variant(spec, variant)?);
    }
    Ok(fragments)
}
