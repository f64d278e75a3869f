//! Naming scheme for generated items and bindings

use proc_macro2::{Ident, Span};
use quote::format_ident;

/// Variant name without any raw identifier prefix
pub fn unraw(ident: &Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}

/// Convert a PascalCase (or camelCase) identifier to snake_case
/// (e.g. "HydraHead" -> "hydra_head", "HTTPRequest" -> "http_request")
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = if i > 0 { Some(chars[i - 1]) } else { None };
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some('_') => false,
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                _ => false,
            };
            if boundary {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// `Pet` -> `PetDiscriminant`
pub fn discriminant_type_name(type_name: &Ident) -> Ident {
    format_ident!("{}Discriminant", type_name, span = type_name.span())
}

/// `Pet` -> `PetPayloadExtractionError`
pub fn error_type_name(type_name: &Ident) -> Ident {
    format_ident!("{}PayloadExtractionError", type_name, span = type_name.span())
}

/// `Dog` -> `is_dog`
pub fn predicate_name(variant: &Ident) -> Ident {
    format_ident!("is_{}", to_snake_case(&unraw(variant)), span = variant.span())
}

/// `Bird` -> `tuple_from_bird`
pub fn extractor_name(variant: &Ident) -> Ident {
    format_ident!("tuple_from_{}", to_snake_case(&unraw(variant)), span = variant.span())
}

/// `Bird` -> `tuple_from_bird_ref`
pub fn ref_extractor_name(variant: &Ident) -> Ident {
    format_ident!("tuple_from_{}_ref", to_snake_case(&unraw(variant)), span = variant.span())
}

/// Binding for an unlabeled payload field at position `index`
/// (`index0`, `index1`, ...). Extractor patterns rely on this being stable.
pub fn positional_binding(index: usize) -> Ident {
    Ident::new(&format!("index{}", index), Span::mixed_site())
}

/// Binding for a labeled payload field; raw labels stay raw
pub fn labeled_binding(label: &Ident) -> Ident {
    let name = label.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => Ident::new_raw(stripped, Span::mixed_site()),
        None => Ident::new(&name, Span::mixed_site()),
    }
}

/// Internal local that cannot collide with names at the call site
pub fn internal_binding(name: &str) -> Ident {
    Ident::new(name, Span::mixed_site())
}
