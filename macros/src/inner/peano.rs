//! Natural-number alias generation.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, Ident, LitInt};

pub struct PeanoInput {
    pub max: usize,
}

impl Parse for PeanoInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        if max > 256 {
            return Err(syn::Error::new(lit.span(), "peano! supports at most 256 aliases"));
        }
        Ok(PeanoInput { max })
    }
}

/// `D0 = Z`, then `Dn = S<D(n-1)>` up to the requested bound.
pub fn expand_peano(input: PeanoInput) -> TokenStream {
    let aliases = (0..=input.max).map(|n| {
        let name = Ident::new(&format!("D{n}"), Span::call_site());
        let doc = format!("The natural number {n}.");
        let body = if n == 0 {
            quote! { Z }
        } else {
            let prev = Ident::new(&format!("D{}", n - 1), Span::call_site());
            quote! { S<#prev> }
        };
        quote! {
            #[doc = #doc]
            pub type #name = #body;
        }
    });

    quote! { #(#aliases)* }
}
