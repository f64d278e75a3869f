//! `has_discriminant!(value, Shape::A, Shape::B, ...)`

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use std::collections::HashSet;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Expr, Path, Token,
};

pub struct HasDiscriminantInput {
    pub value: Expr,
    pub candidates: Vec<Path>,
}

impl Parse for HasDiscriminantInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let value: Expr = input.parse()?;
        if input.is_empty() {
            return Err(syn::Error::new_spanned(
                &value,
                "`has_discriminant!` needs at least one candidate discriminant",
            ));
        }
        input.parse::<Token![,]>()?;

        let parsed = Punctuated::<Path, Token![,]>::parse_terminated(input)?;
        if parsed.is_empty() {
            return Err(syn::Error::new_spanned(
                &value,
                "`has_discriminant!` needs at least one candidate discriminant",
            ));
        }

        // A single identifier in pattern position would bind instead of match
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for path in parsed {
            if path.leading_colon.is_none() && path.segments.len() < 2 {
                return Err(syn::Error::new_spanned(
                    &path,
                    format!(
                        "candidate `{}` must be a path to a discriminant variant, such as `Discriminant::{}`",
                        path.to_token_stream(),
                        path.to_token_stream()
                    ),
                ));
            }
            if seen.insert(path.to_token_stream().to_string()) {
                candidates.push(path);
            }
        }

        Ok(HasDiscriminantInput { value, candidates })
    }
}

/// Immediately evaluated block matching the value's discriminant against
/// every candidate, defaulting to `false`
pub fn expand(input: TokenStream2) -> syn::Result<TokenStream2> {
    let HasDiscriminantInput { value, candidates } = syn::parse2(input)?;
    Ok(quote! {
        {
            match (#value).discriminant() {
                #(#candidates => true,)*
                #[allow(unreachable_patterns)]
                _ => false,
            }
        }
    })
}
