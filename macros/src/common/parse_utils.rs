//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Ident, Token, Type,
};

use super::BoolExpr;

// =============================================================================
// Subject Constraint Parsing: `T: Expr`
// =============================================================================

/// A boolean constraint on one type: `T: BoolExpr`
///
/// Used in:
/// - `type_check!(Ptr<u8>: IsScalar & !IsConst)`
pub struct GenericConstraint {
    pub subject: Type,
    pub expr: BoolExpr,
}

impl Parse for GenericConstraint {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let subject: Type = input.parse()?;
        input.parse::<Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(GenericConstraint { subject, expr })
    }
}

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse a comma-separated list of items
pub fn parse_comma_separated<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let items = Punctuated::<T, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().collect())
}

/// Parse comma-separated types (e.g., in `from(A, B, C)`)
pub fn parse_type_list(input: ParseStream) -> syn::Result<Vec<Type>> {
    parse_comma_separated(input)
}

// =============================================================================
// Keyword Detection
// =============================================================================

/// Check if the next identifier is any of the given keywords
pub fn peek_any_keyword(input: ParseStream, keywords: &[&str]) -> bool {
    if input.peek(Ident) {
        let fork = input.fork();
        if let Ok(ident) = fork.parse::<Ident>() {
            let name = ident.to_string();
            return keywords.contains(&name.as_str());
        }
    }
    false
}
