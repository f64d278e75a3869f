//! Expansion driver: gate, inspect, synthesize, assemble

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{ImplItem, Item};

use crate::args::UnionArgs;
use crate::types::{DeclarationSpec, FragmentNode, GeneratedFragment};
use crate::{accessor, conformance, diagnostic, extractor, inspector, predicate, shape};

/// Run every synthesizer over the model and sort the fragments into
/// canonical order: shape type, accessor, predicates, error type,
/// extractors, conformance
pub fn generate_fragments(spec: &DeclarationSpec) -> syn::Result<Vec<GeneratedFragment>> {
    let mut fragments = Vec::new();
    fragments.extend(extractor::synthesize(spec)?);
    fragments.extend(predicate::synthesize(spec)?);
    fragments.push(accessor::synthesize(spec)?);
    fragments.extend(extractor::synthesize_error(spec)?);
    fragments.extend(shape::synthesize(spec)?);

    // Stable, so fragments of one kind keep their source order
    fragments.sort_by_key(|f| f.kind);

    if let Some(fragment) = conformance::emit(spec)? {
        fragments.push(fragment);
    }
    Ok(fragments)
}

/// Render fragments in order; consecutive members share one inherent impl
fn assemble(spec: &DeclarationSpec, fragments: &[GeneratedFragment]) -> TokenStream2 {
    let type_name = &spec.type_name;
    let (impl_generics, ty_generics, where_clause) = spec.generics.split_for_impl();

    let mut output = TokenStream2::new();
    let mut members: Vec<&ImplItem> = Vec::new();

    let flush = |members: &mut Vec<&ImplItem>, output: &mut TokenStream2| {
        if members.is_empty() {
            return;
        }
        let pending = std::mem::take(members);
        output.extend(quote! {
            #[automatically_derived]
            impl #impl_generics #type_name #ty_generics #where_clause {
                #(#pending)*
            }
        });
    };

    for fragment in fragments {
        match &fragment.node {
            FragmentNode::Member(member) => members.push(member),
            FragmentNode::Item(item) => {
                flush(&mut members, &mut output);
                item.to_tokens(&mut output);
            }
        }
    }
    flush(&mut members, &mut output);

    output
}

/// Expand `#[discriminated_union(args)]` applied to `input`
pub fn expand(args: TokenStream2, input: TokenStream2) -> syn::Result<TokenStream2> {
    let item: Item = syn::parse2(input)?;
    let item_enum = diagnostic::require_enum(item)?;
    let args = UnionArgs::parse(args)?;
    let spec = inspector::inspect(&item_enum, &args)?;

    let fragments = generate_fragments(&spec)?;
    let cleaned = inspector::strip_deferred_markers(&item_enum);
    let generated = assemble(&spec, &fragments);

    Ok(quote! {
        #cleaned
        #generated
    })
}

/// Output used when expansion fails: the input item without generated
/// fragments, followed by the error
pub fn expand_or_error(args: TokenStream2, input: TokenStream2) -> TokenStream2 {
    match expand(args, input.clone()) {
        Ok(expanded) => expanded,
        Err(err) => {
            let error = err.to_compile_error();
            // Drop `#[deferred]` markers so they do not add errors of their own
            let original = match syn::parse2::<syn::ItemEnum>(input.clone()) {
                Ok(item_enum) => inspector::strip_deferred_markers(&item_enum).to_token_stream(),
                Err(_) => input,
            };
            quote! {
                #original
                #error
            }
        }
    }
}
