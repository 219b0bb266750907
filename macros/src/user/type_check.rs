use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::common::{bool_expr_to_predicate, GenericConstraint};

/// `type_check!(T: Expr)` lowers `Expr` to one predicate type and reads its
/// value, so the result is usable in `const` context.
pub fn expand_type_check(input: GenericConstraint) -> TokenStream2 {
    let GenericConstraint { subject, expr } = input;
    match bool_expr_to_predicate(&expr, &subject) {
        Ok(predicate) => quote! {
            <#predicate as ::tola_traits::Predicate>::VALUE
        },
        Err(err) => err.to_compile_error(),
    }
}
