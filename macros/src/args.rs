//! Arguments of `#[discriminated_union(...)]`

use proc_macro2::TokenStream as TokenStream2;
use syn::{meta::ParseNestedMeta, parse::Parser, parse_quote, Ident, LitStr, Path, Token};

/// Parsed attribute arguments. Every field is optional; defaults are
/// derived from the enum name.
#[derive(Default)]
pub struct UnionArgs {
    /// `discriminant = Name`
    pub discriminant: Option<Ident>,

    /// `error = Name`
    pub error: Option<Ident>,

    /// `crate = "path::to::facade"`
    pub crate_path: Option<Path>,

    /// `external_impl`: the caller writes the `DiscriminatedUnion` impl
    pub external_impl: bool,

    /// `ref_only`: only borrowing extractors, for enums that implement `Drop`
    pub ref_only: bool,
}

impl UnionArgs {
    pub fn parse(tokens: TokenStream2) -> syn::Result<Self> {
        let mut args = UnionArgs::default();
        let parser = syn::meta::parser(|meta| args.parse_one(meta));
        parser.parse2(tokens)?;
        Ok(args)
    }

    fn parse_one(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("discriminant") {
            if self.discriminant.is_some() {
                return Err(meta.error("duplicate `discriminant` argument"));
            }
            self.discriminant = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("error") {
            if self.error.is_some() {
                return Err(meta.error("duplicate `error` argument"));
            }
            self.error = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("crate") {
            if self.crate_path.is_some() {
                return Err(meta.error("duplicate `crate` argument"));
            }
            let lit: LitStr = meta.value()?.parse()?;
            self.crate_path = Some(lit.parse()?);
        } else if meta.path.is_ident("external_impl") {
            Self::parse_flag(&meta, "external_impl", &mut self.external_impl)?;
        } else if meta.path.is_ident("ref_only") {
            Self::parse_flag(&meta, "ref_only", &mut self.ref_only)?;
        } else {
            return Err(meta.error(
                "unsupported argument; expected `discriminant`, `error`, `crate`, `external_impl` or `ref_only`",
            ));
        }
        Ok(())
    }

    /// A bare keyword argument that may appear at most once
    fn parse_flag(meta: &ParseNestedMeta, name: &str, flag: &mut bool) -> syn::Result<()> {
        if !meta.input.is_empty() && !meta.input.peek(Token![,]) {
            return Err(meta.error(format!("`{}` takes no value", name)));
        }
        if *flag {
            return Err(meta.error(format!("duplicate `{}` argument", name)));
        }
        *flag = true;
        Ok(())
    }

    /// Path to the runtime crate, `::discriminated_union` unless overridden
    pub fn crate_path(&self) -> Path {
        match &self.crate_path {
            Some(path) => path.clone(),
            None => parse_quote!(::discriminated_union),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn test_empty_args() {
        let args = UnionArgs::parse(TokenStream2::new()).unwrap();
        assert!(args.discriminant.is_none());
        assert!(args.error.is_none());
        assert!(!args.external_impl);
        assert!(!args.ref_only);
        let expected: Path = parse_quote!(::discriminated_union);
        assert_eq!(args.crate_path(), expected);
    }

    #[test]
    fn test_all_args() {
        let args = UnionArgs::parse(quote! {
            discriminant = PetKind,
            error = PetError,
            crate = "my_facade::du",
            external_impl,
            ref_only
        })
        .unwrap();
        assert_eq!(args.discriminant.unwrap(), "PetKind");
        assert_eq!(args.error.unwrap(), "PetError");
        assert!(args.external_impl);
        assert!(args.ref_only);
        let expected: Path = parse_quote!(my_facade::du);
        assert_eq!(args.crate_path.unwrap(), expected);
    }

    #[test]
    fn test_rejects_unknown_argument() {
        let err = UnionArgs::parse(quote! { shape = PetKind }).err().unwrap();
        assert!(err.to_string().starts_with("unsupported argument"));
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = UnionArgs::parse(quote! { discriminant = A, discriminant = B })
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "duplicate `discriminant` argument");
    }

    #[test]
    fn test_rejects_valued_flag() {
        let err = UnionArgs::parse(quote! { external_impl = true }).err().unwrap();
        assert_eq!(err.to_string(), "`external_impl` takes no value");
    }

    #[test]
    fn test_rejects_repeated_ref_only() {
        let err = UnionArgs::parse(quote! { ref_only, ref_only }).err().unwrap();
        assert_eq!(err.to_string(), "duplicate `ref_only` argument");

        let err = UnionArgs::parse(quote! { ref_only = "yes" }).err().unwrap();
        assert_eq!(err.to_string(), "`ref_only` takes no value");
    }
}
