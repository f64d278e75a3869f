//! Shape synthesizer: the payload-free companion enum and its capabilities

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::LitStr;

use crate::naming::unraw;
use crate::types::{DeclarationSpec, FragmentKind, GeneratedFragment, VariantSpec};

/// Value of `int_value()` for the variant at `index`: its position among the
/// variants compiled in, so that it always indexes `ALL_CASES`
fn position(spec: &DeclarationSpec, index: usize) -> TokenStream2 {
    if !spec.variants.iter().any(VariantSpec::is_conditional) {
        return quote! { #index };
    }

    let steps = spec.variants[..index].iter().map(|v| {
        let cfgs = &v.cfg_attrs;
        quote! { #(#cfgs)* { position += 1; } }
    });
    quote! {
        {
            #[allow(unused_mut)]
            let mut position = 0usize;
            #(#steps)*
            position
        }
    }
}

/// Generate the discriminant enum followed by its trait impls
pub fn synthesize(spec: &DeclarationSpec) -> syn::Result<Vec<GeneratedFragment>> {
    let vis = &spec.vis;
    let krate = &spec.crate_path;
    let shape = &spec.discriminant_name;
    let type_name = &spec.type_name;
    let doc = format!("Payload-free discriminant of [`{}`].", unraw(type_name));

    let mut cases = Vec::new();
    let mut payload_arms = Vec::new();
    let mut all_cases = Vec::new();
    let mut key_arms = Vec::new();
    let mut position_arms = Vec::new();
    let mut parse_arms = Vec::new();
    for (index, variant) in spec.variants.iter().enumerate() {
        let name = &variant.name;
        let cfgs = &variant.cfg_attrs;
        let key = LitStr::new(&unraw(name), name.span());
        let has_payload = variant.has_payload();
        let position = position(spec, index);

        cases.push(quote! { #(#cfgs)* #name, });
        payload_arms.push(quote! { #(#cfgs)* Self::#name => #has_payload, });
        all_cases.push(quote! { #(#cfgs)* Self::#name });
        key_arms.push(quote! { #(#cfgs)* Self::#name => #key, });
        position_arms.push(quote! { #(#cfgs)* Self::#name => #position, });
        parse_arms.push(quote! { #(#cfgs)* #key => ::core::option::Option::Some(Self::#name), });
    }

    let shape_enum = quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #vis enum #shape {
            #(#cases)*
        }
    };

    // One arm per variant and no wildcard, so the match stays exhaustive
    let inherent = quote! {
        impl #shape {
            /// Whether the originating variant carries a payload.
            #vis fn has_associated_type(&self) -> bool {
                match *self {
                    #(#payload_arms)*
                }
            }
        }
    };

    let case_iterable = quote! {
        impl #krate::CaseIterable for #shape {
            const ALL_CASES: &'static [Self] = &[#(#all_cases),*];
        }
    };

    let coding_key = quote! {
        impl #krate::CodingKey for #shape {
            fn string_value(&self) -> &'static str {
                match *self {
                    #(#key_arms)*
                }
            }

            fn int_value(&self) -> usize {
                match *self {
                    #(#position_arms)*
                }
            }

            fn from_string_value(value: &str) -> ::core::option::Option<Self> {
                match value {
                    #(#parse_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn from_int_value(value: usize) -> ::core::option::Option<Self> {
                <Self as #krate::CaseIterable>::ALL_CASES.get(value).copied()
            }
        }
    };

    let display = quote! {
        impl ::core::fmt::Display for #shape {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(#krate::CodingKey::string_value(self))
            }
        }
    };

    let from_str = quote! {
        impl ::core::str::FromStr for #shape {
            type Err = #krate::UnknownDiscriminant;

            fn from_str(value: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as #krate::CodingKey>::from_string_value(value)
                    .ok_or_else(|| #krate::UnknownDiscriminant::new(value))
            }
        }
    };

    let marker = quote! {
        impl #krate::DiscriminantType for #shape {}
    };

    [
        shape_enum,
        inherent,
        case_iterable,
        coding_key,
        display,
        from_str,
        marker,
    ]
    .into_iter()
    .map(|tokens| GeneratedFragment::item(FragmentKind::ShapeType, tokens))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::UnionArgs;
    use crate::inspector::inspect;
    use crate::types::FragmentNode;
    use syn::{parse_quote, Item, ItemEnum};

    fn spec_for(item: ItemEnum) -> DeclarationSpec {
        inspect(&item, &UnionArgs::default()).unwrap()
    }

    fn pet() -> DeclarationSpec {
        spec_for(parse_quote! {
            pub enum Pet {
                Dog,
                Cat { curious: bool },
                Parrot,
                Snake,
                Bird(String, i32),
                Hydra(#[deferred] fn() -> String, String),
            }
        })
    }

    fn items(fragments: &[GeneratedFragment]) -> Vec<&Item> {
        fragments
            .iter()
            .map(|f| match &f.node {
                FragmentNode::Item(item) => item,
                FragmentNode::Member(_) => panic!("shape fragments are items"),
            })
            .collect()
    }

    #[test]
    fn test_shape_enum_mirrors_variants() {
        let fragments = synthesize(&pet()).unwrap();
        assert!(fragments.iter().all(|f| f.kind == FragmentKind::ShapeType));

        let expected: Item = parse_quote! {
            #[doc = "Payload-free discriminant of [`Pet`]."]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub enum PetDiscriminant {
                Dog,
                Cat,
                Parrot,
                Snake,
                Bird,
                Hydra,
            }
        };
        assert_eq!(items(&fragments)[0], &expected);
    }

    #[test]
    fn test_has_associated_type_is_exhaustive() {
        let fragments = synthesize(&pet()).unwrap();
        let expected: Item = parse_quote! {
            impl PetDiscriminant {
                /// Whether the originating variant carries a payload.
                pub fn has_associated_type(&self) -> bool {
                    match *self {
                        Self::Dog => false,
                        Self::Cat => true,
                        Self::Parrot => false,
                        Self::Snake => false,
                        Self::Bird => true,
                        Self::Hydra => true,
                    }
                }
            }
        };
        assert_eq!(items(&fragments)[1], &expected);
    }

    #[test]
    fn test_capability_impls() {
        let fragments = synthesize(&pet()).unwrap();
        let traits: Vec<String> = items(&fragments)
            .iter()
            .filter_map(|item| match item {
                Item::Impl(imp) => imp.trait_.as_ref().map(|(_, path, _)| {
                    path.segments.last().unwrap().ident.to_string()
                }),
                _ => None,
            })
            .collect();
        assert_eq!(
            traits,
            ["CaseIterable", "CodingKey", "Display", "FromStr", "DiscriminantType"]
        );
    }

    #[test]
    fn test_case_iterable_in_source_order() {
        let fragments = synthesize(&pet()).unwrap();
        let expected: Item = parse_quote! {
            impl ::discriminated_union::CaseIterable for PetDiscriminant {
                const ALL_CASES: &'static [Self] = &[
                    Self::Dog,
                    Self::Cat,
                    Self::Parrot,
                    Self::Snake,
                    Self::Bird,
                    Self::Hydra
                ];
            }
        };
        assert_eq!(items(&fragments)[2], &expected);
    }

    #[test]
    fn test_generics_do_not_leak_into_shape() {
        let spec = spec_for(parse_quote! {
            enum Either<L, R> {
                Left(L),
                Right(R),
            }
        });
        let fragments = synthesize(&spec).unwrap();
        match items(&fragments)[0] {
            Item::Enum(shape) => {
                assert_eq!(shape.ident, "EitherDiscriminant");
                assert!(shape.generics.params.is_empty());
                assert_eq!(shape.variants.len(), 2);
            }
            other => panic!("expected enum, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_enum_still_has_shape() {
        let spec = spec_for(parse_quote! { enum Never {} });
        let fragments = synthesize(&spec).unwrap();
        match items(&fragments)[0] {
            Item::Enum(shape) => assert!(shape.variants.is_empty()),
            other => panic!("expected enum, got {:?}", other),
        }
    }

    #[test]
    fn test_conditional_variant_keeps_its_cfg() {
        let spec = spec_for(parse_quote! {
            enum Mode {
                Fast,
                #[cfg(any())]
                Hidden(u8),
                Slow(u32),
            }
        });
        let fragments = synthesize(&spec).unwrap();
        let items = items(&fragments);

        let expected: Item = parse_quote! {
            #[doc = "Payload-free discriminant of [`Mode`]."]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            enum ModeDiscriminant {
                Fast,
                #[cfg(any())]
                Hidden,
                Slow,
            }
        };
        assert_eq!(items[0], &expected);

        let expected: Item = parse_quote! {
            impl ::discriminated_union::CaseIterable for ModeDiscriminant {
                const ALL_CASES: &'static [Self] = &[
                    Self::Fast,
                    #[cfg(any())]
                    Self::Hidden,
                    Self::Slow
                ];
            }
        };
        assert_eq!(items[2], &expected);
    }

    #[test]
    fn test_positions_skip_disabled_variants() {
        let spec = spec_for(parse_quote! {
            enum Mode {
                Fast,
                #[cfg(any())]
                Hidden(u8),
                Slow(u32),
            }
        });
        let expected: syn::Expr = parse_quote! {
            {
                #[allow(unused_mut)]
                let mut position = 0usize;
                { position += 1; }
                #[cfg(any())]
                { position += 1; }
                position
            }
        };
        let actual: syn::Expr = syn::parse2(position(&spec, 2)).unwrap();
        assert_eq!(actual, expected);

        // Without conditional variants the position is a literal
        let actual: syn::Expr = syn::parse2(position(&pet(), 4)).unwrap();
        let expected: syn::Expr = parse_quote!(4usize);
        assert_eq!(actual, expected);
    }
}
