//! Predicate synthesizer: one `is_<variant>` per variant

use quote::quote;

use crate::naming::{predicate_name, unraw};
use crate::types::{DeclarationSpec, FragmentKind, GeneratedFragment};

pub fn synthesize(spec: &DeclarationSpec) -> syn::Result<Vec<GeneratedFragment>> {
    let vis = &spec.vis;
    let shape = &spec.discriminant_name;

    spec.variants
        .iter()
        .map(|variant| {
            let name = &variant.name;
            let method = predicate_name(name);
            let doc = format!("Whether this value is the `{}` variant.", unraw(name));
            let cfgs = &variant.cfg_attrs;
            GeneratedFragment::member(
                FragmentKind::Predicate,
                quote! {
                    #(#cfgs)*
                    #[doc = #doc]
                    #[inline]
                    #vis fn #method(&self) -> bool {
                        self.discriminant() == #shape::#name
                    }
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::UnionArgs;
    use crate::inspector::inspect;
    use crate::types::FragmentNode;
    use syn::{parse_quote, ImplItem};

    #[test]
    fn test_every_variant_gets_a_predicate() {
        let spec = inspect(
            &parse_quote! {
                pub enum Pet {
                    Dog,
                    Cat { curious: bool },
                    Parrot,
                    Snake,
                    Bird(String, i32),
                    Hydra(#[deferred] fn() -> String, String),
                }
            },
            &UnionArgs::default(),
        )
        .unwrap();

        let fragments = synthesize(&spec).unwrap();
        let names: Vec<String> = fragments
            .iter()
            .map(|f| f.ident().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            ["is_dog", "is_cat", "is_parrot", "is_snake", "is_bird", "is_hydra"]
        );
    }

    #[test]
    fn test_predicate_compares_discriminants() {
        let spec = inspect(
            &parse_quote! { pub enum Pet { HydraHead } },
            &UnionArgs::default(),
        )
        .unwrap();
        let fragments = synthesize(&spec).unwrap();

        let expected: ImplItem = parse_quote! {
            #[doc = "Whether this value is the `HydraHead` variant."]
            #[inline]
            pub fn is_hydra_head(&self) -> bool {
                self.discriminant() == PetDiscriminant::HydraHead
            }
        };
        match &fragments[0].node {
            FragmentNode::Member(member) => assert_eq!(member, &expected),
            FragmentNode::Item(_) => panic!("predicates are impl members"),
        }
    }

    #[test]
    fn test_conditional_predicate_keeps_its_cfg() {
        let spec = inspect(
            &parse_quote! { enum Mode { #[cfg(any())] Hidden } },
            &UnionArgs::default(),
        )
        .unwrap();
        let fragments = synthesize(&spec).unwrap();

        let expected: ImplItem = parse_quote! {
            #[cfg(any())]
            #[doc = "Whether this value is the `Hidden` variant."]
            #[inline]
            fn is_hidden(&self) -> bool {
                self.discriminant() == ModeDiscriminant::Hidden
            }
        };
        match &fragments[0].node {
            FragmentNode::Member(member) => assert_eq!(member, &expected),
            FragmentNode::Item(_) => panic!("predicates are impl members"),
        }
    }
}
