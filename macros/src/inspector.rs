//! Declaration inspector: turns the attributed enum into a `DeclarationSpec`

use std::collections::{HashMap, HashSet};
use syn::{
    punctuated::Punctuated, Attribute, Field, Fields, GenericArgument, Generics, Ident, ItemEnum,
    Meta, PathArguments, Token, Type, TypeParamBound, WherePredicate,
};

use crate::args::UnionArgs;
use crate::naming::{
    discriminant_type_name, error_type_name, extractor_name, labeled_binding, positional_binding,
    predicate_name, ref_extractor_name, unraw,
};
use crate::types::{DeclarationSpec, PayloadParam, VariantSpec, VariantStyle};

const DEFERRED_MARKER: &str = "deferred";

fn is_deferred_marker(attr: &Attribute) -> bool {
    attr.path().is_ident(DEFERRED_MARKER)
}

fn has_fn_bound(bounds: &Punctuated<TypeParamBound, Token![+]>) -> bool {
    bounds.iter().any(|bound| match bound {
        TypeParamBound::Trait(t) => t
            .path
            .segments
            .last()
            .is_some_and(|s| s.ident == "Fn" || s.ident == "FnMut" || s.ident == "FnOnce"),
        _ => false,
    })
}

/// Type parameters bounded by `Fn`, `FnMut` or `FnOnce`, inline or in the
/// where clause
fn callable_params(generics: &Generics) -> HashSet<Ident> {
    let mut params: HashSet<Ident> = generics
        .type_params()
        .filter(|p| has_fn_bound(&p.bounds))
        .map(|p| p.ident.clone())
        .collect();

    if let Some(where_clause) = &generics.where_clause {
        for predicate in &where_clause.predicates {
            if let WherePredicate::Type(pt) = predicate {
                if let Type::Path(tp) = &pt.bounded_ty {
                    if let Some(ident) = tp.path.get_ident() {
                        if has_fn_bound(&pt.bounds) {
                            params.insert(ident.clone());
                        }
                    }
                }
            }
        }
    }
    params
}

/// Whether a field of type `ty` can be called to produce its value:
/// `fn` pointers, `dyn Fn*` behind a reference or `Box`/`Rc`/`Arc`, and
/// type parameters with an `Fn*` bound
fn is_callable(ty: &Type, params: &HashSet<Ident>) -> bool {
    match ty {
        Type::BareFn(_) => true,
        Type::Paren(t) => is_callable(&t.elem, params),
        Type::Group(t) => is_callable(&t.elem, params),
        Type::Reference(r) => is_callable(&r.elem, params),
        Type::TraitObject(t) => has_fn_bound(&t.bounds),
        Type::Path(tp) if tp.qself.is_none() => {
            if let Some(ident) = tp.path.get_ident() {
                return params.contains(ident);
            }
            let Some(last) = tp.path.segments.last() else {
                return false;
            };
            let is_pointer = last.ident == "Box" || last.ident == "Rc" || last.ident == "Arc";
            match &last.arguments {
                PathArguments::AngleBracketed(args) if is_pointer => args.args.iter().any(
                    |arg| matches!(arg, GenericArgument::Type(inner) if is_callable(inner, params)),
                ),
                _ => false,
            }
        }
        _ => false,
    }
}

/// Check the `#[deferred]` markers on a field, returning whether it has one
fn deferred_flag(field: &Field, params: &HashSet<Ident>) -> syn::Result<bool> {
    let mut found = false;
    for attr in field.attrs.iter().filter(|a| is_deferred_marker(a)) {
        if !matches!(attr.meta, Meta::Path(_)) {
            return Err(syn::Error::new_spanned(attr, "`#[deferred]` takes no arguments"));
        }
        if found {
            return Err(syn::Error::new_spanned(attr, "duplicate `#[deferred]` marker"));
        }
        found = true;
    }
    if found && !is_callable(&field.ty, params) {
        return Err(syn::Error::new_spanned(
            &field.ty,
            "`#[deferred]` needs a callable field type, such as `fn() -> T` or `Box<dyn Fn() -> T>`",
        ));
    }
    Ok(found)
}

fn inspect_payload(
    fields: &Fields,
    params: &HashSet<Ident>,
) -> syn::Result<(VariantStyle, Vec<PayloadParam>)> {
    let style = match fields {
        Fields::Named(_) => VariantStyle::Named,
        Fields::Unnamed(_) => VariantStyle::Unnamed,
        Fields::Unit => VariantStyle::Unit,
    };

    let payload = fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let binding = match &field.ident {
                Some(label) => labeled_binding(label),
                None => positional_binding(index),
            };
            Ok(PayloadParam {
                label: field.ident.clone(),
                binding,
                // The marker lives in `field.attrs`, so the type is already bare
                ty: field.ty.clone(),
                is_deferred: deferred_flag(field, params)?,
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok((style, payload))
}

/// Inherent members generated for one variant
fn member_names(variant: &VariantSpec, owned_extractors: bool) -> Vec<Ident> {
    let mut names = vec![predicate_name(&variant.name)];
    if variant.has_payload() {
        if owned_extractors {
            names.push(extractor_name(&variant.name));
        }
        names.push(ref_extractor_name(&variant.name));
    }
    names
}

/// Record `name` for `variant`. Two conditional variants may share a name,
/// since their cfgs can be mutually exclusive; otherwise `describe` builds
/// the error.
fn claim<'a>(
    claimed: &mut HashMap<String, (&'a Ident, bool)>,
    name: String,
    variant: &'a Ident,
    conditional: bool,
    describe: impl FnOnce(&Ident) -> String,
) -> syn::Result<()> {
    match claimed.get(&name) {
        Some((_, true)) if conditional => Ok(()),
        Some((previous, _)) => Err(syn::Error::new_spanned(variant, describe(*previous))),
        None => {
            claimed.insert(name, (variant, conditional));
            Ok(())
        }
    }
}

/// Build the declaration model. Variants are kept in source order.
pub fn inspect(item: &ItemEnum, args: &UnionArgs) -> syn::Result<DeclarationSpec> {
    let params = callable_params(&item.generics);
    let owned_extractors = !args.ref_only;
    let mut variant_names = HashMap::new();
    let mut members = HashMap::new();
    let mut variants = Vec::with_capacity(item.variants.len());

    for variant in &item.variants {
        let name = &variant.ident;
        let cfg_attrs: Vec<Attribute> = variant
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("cfg"))
            .cloned()
            .collect();
        let conditional = !cfg_attrs.is_empty();

        claim(&mut variant_names, unraw(name), name, conditional, |_| {
            format!("duplicate variant `{}`", unraw(name))
        })?;

        let (style, payload) = inspect_payload(&variant.fields, &params)?;
        let spec = VariantSpec {
            name: name.clone(),
            style,
            payload,
            cfg_attrs,
        };

        // Distinct variants must still produce distinct member names
        for member in member_names(&spec, owned_extractors) {
            claim(&mut members, member.to_string(), name, conditional, |previous| {
                format!(
                    "variants `{}` and `{}` both generate the member `{}`",
                    unraw(previous),
                    unraw(name),
                    member
                )
            })?;
        }

        variants.push(spec);
    }

    Ok(DeclarationSpec {
        type_name: item.ident.clone(),
        vis: item.vis.clone(),
        generics: item.generics.clone(),
        variants,
        discriminant_name: args
            .discriminant
            .clone()
            .unwrap_or_else(|| discriminant_type_name(&item.ident)),
        error_name: args
            .error
            .clone()
            .unwrap_or_else(|| error_type_name(&item.ident)),
        crate_path: args.crate_path(),
        already_declares_capability: args.external_impl,
        owned_extractors,
    })
}

/// Copy of the enum with every `#[deferred]` marker removed, for re-emission
pub fn strip_deferred_markers(item: &ItemEnum) -> ItemEnum {
    let mut stripped = item.clone();
    for variant in stripped.variants.iter_mut() {
        for field in variant.fields.iter_mut() {
            field.attrs.retain(|attr| !is_deferred_marker(attr));
        }
    }
    stripped
}
