// Boolean expression parsing and lowering for predicate checks

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    GenericArgument, PathArguments, Token, Type,
};

// =============================================================================
// Boolean Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Pred(Type),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else {
        let ty: Type = input.parse()?;
        Ok(BoolExpr::Pred(ty))
    }
}

// =============================================================================
// Lowering
// =============================================================================

/// Lower an expression to a predicate type about `subject`.
///
/// `a & b & c` becomes one `Conjunction<(a, b, c)>` so that evaluation stops
/// at the first false operand; `|` likewise becomes `Disjunction`.
pub fn bool_expr_to_predicate(expr: &BoolExpr, subject: &Type) -> syn::Result<TokenStream> {
    match expr {
        BoolExpr::Pred(ty) => {
            let applied = apply_subject(ty, subject)?;
            Ok(quote! { #applied })
        }
        BoolExpr::And(..) => {
            let mut operands = Vec::new();
            flatten_and(expr, &mut operands);
            let lowered = operands
                .into_iter()
                .map(|e| bool_expr_to_predicate(e, subject))
                .collect::<syn::Result<Vec<_>>>()?;
            Ok(quote! { ::tola_traits::Conjunction<(#(#lowered,)*)> })
        }
        BoolExpr::Or(..) => {
            let mut operands = Vec::new();
            flatten_or(expr, &mut operands);
            let lowered = operands
                .into_iter()
                .map(|e| bool_expr_to_predicate(e, subject))
                .collect::<syn::Result<Vec<_>>>()?;
            Ok(quote! { ::tola_traits::Disjunction<(#(#lowered,)*)> })
        }
        BoolExpr::Not(operand) => {
            let o = bool_expr_to_predicate(operand, subject)?;
            Ok(quote! { ::tola_traits::Negation<#o> })
        }
    }
}

fn flatten_and<'a>(expr: &'a BoolExpr, out: &mut Vec<&'a BoolExpr>) {
    match expr {
        BoolExpr::And(lhs, rhs) => {
            flatten_and(lhs, out);
            flatten_and(rhs, out);
        }
        other => out.push(other),
    }
}

fn flatten_or<'a>(expr: &'a BoolExpr, out: &mut Vec<&'a BoolExpr>) {
    match expr {
        BoolExpr::Or(lhs, rhs) => {
            flatten_or(lhs, out);
            flatten_or(rhs, out);
        }
        other => out.push(other),
    }
}

/// `IsConst` -> `IsConst<T>`, `IsSame<_, u8>` -> `IsSame<T, u8>`.
fn apply_subject(predicate: &Type, subject: &Type) -> syn::Result<Type> {
    let mut applied = predicate.clone();
    if replace_placeholder(&mut applied, subject) {
        return Ok(applied);
    }

    match &mut applied {
        Type::Path(path) if path.qself.is_none() => {
            let Some(last) = path.path.segments.last_mut() else {
                return Err(syn::Error::new_spanned(predicate, "expected a predicate"));
            };
            match &last.arguments {
                PathArguments::None => {
                    last.arguments = PathArguments::AngleBracketed(syn::parse_quote!(<#subject>));
                    Ok(applied)
                }
                _ => Ok(applied),
            }
        }
        _ => Err(syn::Error::new_spanned(
            predicate,
            "expected a predicate name such as `IsConst` or `IsSame<_, i32>`",
        )),
    }
}

/// Replace every `_` in `ty` with `subject`; true if any was found.
fn replace_placeholder(ty: &mut Type, subject: &Type) -> bool {
    match ty {
        Type::Infer(_) => {
            *ty = subject.clone();
            true
        }
        Type::Path(path) => {
            let mut found = false;
            if let Some(qself) = &mut path.qself {
                found |= replace_placeholder(&mut qself.ty, subject);
            }
            for segment in path.path.segments.iter_mut() {
                if let PathArguments::AngleBracketed(args) = &mut segment.arguments {
                    for arg in args.args.iter_mut() {
                        if let GenericArgument::Type(inner) = arg {
                            found |= replace_placeholder(inner, subject);
                        }
                    }
                }
            }
            found
        }
        Type::Tuple(tuple) => tuple
            .elems
            .iter_mut()
            .fold(false, |found, elem| replace_placeholder(elem, subject) | found),
        Type::Paren(paren) => replace_placeholder(&mut paren.elem, subject),
        Type::Group(group) => replace_placeholder(&mut group.elem, subject),
        _ => false,
    }
}
