//! Data model shared by the inspector and the synthesizers

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{Attribute, Generics, Ident, ImplItem, Item, Path, Type, Visibility};

/// How a variant declares its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantStyle {
    Unit,
    Unnamed,
    Named,
}

/// One payload field of a variant
#[derive(Debug, Clone)]
pub struct PayloadParam {
    /// The declared field name, `None` for tuple fields
    pub label: Option<Ident>,

    /// Local name the field is bound to in generated patterns
    /// (the label, or `index<N>` for tuple fields)
    pub binding: Ident,

    /// Field type with any `#[deferred]` marker already stripped
    pub ty: Type,

    pub is_deferred: bool,
}

/// One variant of the input enum
#[derive(Debug, Clone)]
pub struct VariantSpec {
    pub name: Ident,
    pub style: VariantStyle,
    pub payload: Vec<PayloadParam>,

    /// `#[cfg(..)]` attributes of the variant, repeated on everything
    /// generated for it
    pub cfg_attrs: Vec<Attribute>,
}

impl VariantSpec {
    pub fn has_payload(&self) -> bool {
        !self.payload.is_empty()
    }

    pub fn is_conditional(&self) -> bool {
        !self.cfg_attrs.is_empty()
    }

    /// Pattern matching this variant without binding its payload
    /// (e.g. `Self::Bird(..)`)
    pub fn wildcard_pattern(&self) -> TokenStream2 {
        let name = &self.name;
        match self.style {
            VariantStyle::Unit => quote! { Self::#name },
            VariantStyle::Unnamed => quote! { Self::#name(..) },
            VariantStyle::Named => quote! { Self::#name { .. } },
        }
    }

    /// Pattern binding every payload field to its binding name
    /// (e.g. `Self::Bird(index0, index1)`)
    pub fn binding_pattern(&self) -> TokenStream2 {
        let name = &self.name;
        let bindings = self.payload.iter().map(|p| &p.binding);
        match self.style {
            VariantStyle::Unit => quote! { Self::#name },
            VariantStyle::Unnamed => quote! { Self::#name(#(#bindings),*) },
            VariantStyle::Named => {
                let labels = self.payload.iter().map(|p| &p.label);
                quote! { Self::#name { #(#labels: #bindings),* } }
            }
        }
    }
}

/// The whole input declaration plus the names of its companion types
pub struct DeclarationSpec {
    pub type_name: Ident,
    pub vis: Visibility,
    pub generics: Generics,
    pub variants: Vec<VariantSpec>,

    /// Name of the generated shape enum (e.g. `PetDiscriminant`)
    pub discriminant_name: Ident,

    /// Name of the generated extraction error (e.g. `PetPayloadExtractionError`)
    pub error_name: Ident,

    /// Path to the runtime crate holding the capability traits
    pub crate_path: Path,

    /// The caller declares the `DiscriminatedUnion` impl itself
    pub already_declares_capability: bool,

    /// Emit `tuple_from_<variant>(self)` next to the borrowing extractor
    pub owned_extractors: bool,
}

/// Canonical position of a fragment in the expansion output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FragmentKind {
    ShapeType,
    Accessor,
    Predicate,
    ErrorType,
    Extractor,
    Conformance,
}

#[derive(Debug, Clone)]
pub enum FragmentNode {
    /// A module-level item (enum, trait impl, ...)
    Item(Item),

    /// A member of the inherent impl block of the input type
    Member(ImplItem),
}

/// One independently parseable unit of generated syntax
#[derive(Debug, Clone)]
pub struct GeneratedFragment {
    pub kind: FragmentKind,
    pub node: FragmentNode,
}

impl GeneratedFragment {
    /// Parse `tokens` as a module-level item
    pub fn item(kind: FragmentKind, tokens: TokenStream2) -> syn::Result<Self> {
        Ok(GeneratedFragment {
            kind,
            node: FragmentNode::Item(syn::parse2(tokens)?),
        })
    }

    /// Parse `tokens` as an impl member
    pub fn member(kind: FragmentKind, tokens: TokenStream2) -> syn::Result<Self> {
        Ok(GeneratedFragment {
            kind,
            node: FragmentNode::Member(syn::parse2(tokens)?),
        })
    }

    /// Name of the generated item or member, if it has one
    #[cfg(test)]
    pub fn ident(&self) -> Option<&Ident> {
        match &self.node {
            FragmentNode::Item(Item::Enum(e)) => Some(&e.ident),
            FragmentNode::Member(ImplItem::Fn(f)) => Some(&f.sig.ident),
            _ => None,
        }
    }
}

impl ToTokens for GeneratedFragment {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        match &self.node {
            FragmentNode::Item(item) => item.to_tokens(tokens),
            FragmentNode::Member(member) => member.to_tokens(tokens),
        }
    }
}
