//! Entry gate: the attribute only applies to enums

use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Item, ItemEnum};

/// Describe the kind of an item for diagnostics (e.g. "a struct")
fn descriptive_item_kind(item: &Item) -> &'static str {
    match item {
        Item::Const(_) => "a constant",
        Item::Enum(_) => "an enum",
        Item::ExternCrate(_) => "an extern crate",
        Item::Fn(_) => "a function",
        Item::ForeignMod(_) => "an extern block",
        Item::Impl(_) => "an impl block",
        Item::Macro(_) => "a macro invocation",
        Item::Mod(_) => "a module",
        Item::Static(_) => "a static",
        Item::Struct(_) => "a struct",
        Item::Trait(_) => "a trait",
        Item::TraitAlias(_) => "a trait alias",
        Item::Type(_) => "a type alias",
        Item::Union(_) => "a union",
        Item::Use(_) => "a use declaration",
        _ => "an item",
    }
}

/// Span of the keyword introducing the item, where the diagnostic is anchored
fn keyword_span(item: &Item) -> Span {
    match item {
        Item::Const(i) => i.const_token.span,
        Item::ExternCrate(i) => i.extern_token.span,
        Item::Fn(i) => i.sig.fn_token.span,
        Item::ForeignMod(i) => i.abi.extern_token.span,
        Item::Impl(i) => i.impl_token.span,
        Item::Macro(i) => i.mac.path.span(),
        Item::Mod(i) => i.mod_token.span,
        Item::Static(i) => i.static_token.span,
        Item::Struct(i) => i.struct_token.span,
        Item::Trait(i) => i.trait_token.span,
        Item::TraitAlias(i) => i.trait_token.span,
        Item::Type(i) => i.type_token.span,
        Item::Union(i) => i.union_token.span,
        Item::Use(i) => i.use_token.span,
        other => other.span(),
    }
}

/// Accept an enum, reject everything else with a `NotASumType` diagnostic
pub fn require_enum(item: Item) -> syn::Result<ItemEnum> {
    match item {
        Item::Enum(item_enum) => Ok(item_enum),
        other => Err(syn::Error::new(
            keyword_span(&other),
            format!(
                "`#[discriminated_union]` can only be attached to an enum, not {}",
                descriptive_item_kind(&other)
            ),
        )),
    }
}
