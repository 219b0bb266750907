use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Attribute, Data, DeriveInput, Ident, Token, Type,
};

use crate::common::{parse_type_list, peek_any_keyword};

/// #[derive(TypeShape)] generates a call to the declarative macro bridge
/// plus, for structs and unions, the special-member registry.
///
/// The bridge expands `concat!(module_path!(), ..)` at the use site, so the
/// identity hash sees the full path of the type.
pub fn expand_derive_type_shape(input: DeriveInput) -> TokenStream2 {
    match derive(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn derive(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`TypeShape` cannot be derived for generic items",
        ));
    }

    let options = ShapeOptions::from_attrs(&input.attrs)?;
    match &input.data {
        Data::Struct(_) => class_shape(&input.ident, &options, false),
        Data::Union(_) => class_shape(&input.ident, &options, true),
        Data::Enum(_) => enum_shape(&input.ident, &options, repr_type(&input.attrs)?),
    }
}

// =============================================================================
// #[shape(..)] options
// =============================================================================

/// One entry of `bases(..)`: `A`, `private A`, `protected A` or `public A`.
struct BaseSpec {
    public: bool,
    ty: Type,
}

impl Parse for BaseSpec {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut public = true;
        if peek_any_keyword(input, &["private", "protected", "public"]) && input.peek2(Ident) {
            let access: Ident = input.parse()?;
            public = access == "public";
        }
        let ty: Type = input.parse()?;
        Ok(BaseSpec { public, ty })
    }
}

#[derive(Default)]
struct Deleted {
    default: bool,
    copy: bool,
    moves: bool,
    copy_assign: bool,
    move_assign: bool,
    destructor: bool,
}

#[derive(Default)]
struct ShapeOptions {
    bases: Vec<BaseSpec>,
    implicit: Vec<Vec<Type>>,
    explicit: Vec<Vec<Type>>,
    from_any: bool,
    into: Vec<Type>,
    assign: Vec<Type>,
    deleted: Deleted,
    non_trivial: bool,
    throwing: bool,
    unscoped: Option<Span>,
    /// First option that only makes sense on a class.
    class_only: Option<Span>,
}

impl ShapeOptions {
    fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut options = ShapeOptions::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("shape")) {
            attr.parse_nested_meta(|meta| {
                let Some(key) = meta.path.get_ident().map(Ident::to_string) else {
                    return Err(meta.error("unsupported shape option"));
                };
                if key != "unscoped" && options.class_only.is_none() {
                    options.class_only = Some(key_span(&meta.path));
                }

                match key.as_str() {
                    "bases" => {
                        let content;
                        syn::parenthesized!(content in meta.input);
                        let bases = content.parse_terminated(BaseSpec::parse, Token![,])?;
                        options.bases.extend(bases);
                    }
                    "from" => {
                        let content;
                        syn::parenthesized!(content in meta.input);
                        options.implicit.push(parse_type_list(&content)?);
                    }
                    "explicit" => {
                        let content;
                        syn::parenthesized!(content in meta.input);
                        options.explicit.push(parse_type_list(&content)?);
                    }
                    "into" => {
                        let content;
                        syn::parenthesized!(content in meta.input);
                        options.into.extend(parse_type_list(&content)?);
                    }
                    "assign" => {
                        let content;
                        syn::parenthesized!(content in meta.input);
                        options.assign.extend(parse_type_list(&content)?);
                    }
                    "delete" => {
                        meta.parse_nested_meta(|member| {
                            let deleted = &mut options.deleted;
                            let slot = match member.path.get_ident().map(Ident::to_string).as_deref() {
                                Some("default") => &mut deleted.default,
                                Some("copy") => &mut deleted.copy,
                                Some("move") => &mut deleted.moves,
                                Some("copy_assign") => &mut deleted.copy_assign,
                                Some("move_assign") => &mut deleted.move_assign,
                                Some("destructor") => &mut deleted.destructor,
                                _ => {
                                    return Err(member.error(
                                        "expected one of `default`, `copy`, `move`, \
                                         `copy_assign`, `move_assign`, `destructor`",
                                    ));
                                }
                            };
                            *slot = true;
                            Ok(())
                        })?;
                    }
                    "from_any" => options.from_any = true,
                    "non_trivial" => options.non_trivial = true,
                    "throwing" => options.throwing = true,
                    "unscoped" => options.unscoped = Some(key_span(&meta.path)),
                    _ => return Err(meta.error(format!("unsupported shape option `{key}`"))),
                }
                Ok(())
            })?;
        }

        Ok(options)
    }
}

fn key_span(path: &syn::Path) -> Span {
    path.get_ident().map_or_else(Span::call_site, Ident::span)
}

/// Underlying type of an enum from `#[repr(..)]`; `i32` when absent.
fn repr_type(attrs: &[Attribute]) -> syn::Result<Ident> {
    const INTEGERS: &[&str] = &[
        "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
    ];

    let mut repr = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident() {
                if INTEGERS.contains(&ident.to_string().as_str()) {
                    repr = Some(ident.clone());
                }
            }
            // `align(..)` and friends carry arguments
            if meta.input.peek(syn::token::Paren) {
                let args;
                syn::parenthesized!(args in meta.input);
                args.parse::<TokenStream2>()?;
            }
            Ok(())
        })?;
    }
    Ok(repr.unwrap_or_else(|| Ident::new("i32", Span::call_site())))
}

// =============================================================================
// Code generation
// =============================================================================

fn flag(value: bool) -> TokenStream2 {
    if value {
        quote! { ::tola_traits::True }
    } else {
        quote! { ::tola_traits::False }
    }
}

fn type_list<'a>(types: impl IntoIterator<Item = &'a Type>) -> TokenStream2 {
    let types = types.into_iter();
    quote! { ::tola_traits::list![#(#types),*] }
}

fn ctor_list<'a>(ctors: impl IntoIterator<Item = &'a Vec<Type>>) -> TokenStream2 {
    let params = ctors.into_iter().map(|params| type_list(params));
    quote! { ::tola_traits::list![#(#params),*] }
}

fn class_shape(ident: &Ident, options: &ShapeOptions, union: bool) -> syn::Result<TokenStream2> {
    if let Some(span) = options.unscoped {
        return Err(syn::Error::new(span, "`unscoped` applies to enums only"));
    }

    let name = ident.to_string();
    let union = flag(union);
    let bases = type_list(options.bases.iter().map(|base| &base.ty));
    let public_bases = type_list(options.bases.iter().filter(|base| base.public).map(|base| &base.ty));

    let deleted = &options.deleted;
    let default_ctor = flag(!deleted.default);
    let copy_ctor = flag(!deleted.copy);
    let move_ctor = flag(!deleted.moves);
    let copy_assign = flag(!deleted.copy_assign);
    let move_assign = flag(!deleted.move_assign);
    let destructor = flag(!deleted.destructor);
    let trivial = flag(!options.non_trivial);
    let nothrow = flag(!options.throwing);
    let from_any = flag(options.from_any);

    let ctors = ctor_list(options.implicit.iter().chain(options.explicit.iter()));
    let converting = ctor_list(options.implicit.iter());
    let conversions = type_list(&options.into);
    let assigns = type_list(&options.assign);

    Ok(quote! {
        ::tola_traits::__impl_type_shape!(#ident, #name, {
            referenceable: ::tola_traits::True,
            class_or_union: ::tola_traits::True,
            union: #union,
            unscoped_enum: ::tola_traits::False,
            bases: #bases,
            public_bases: #public_bases,
            members: Self,
            arith: ::tola_traits::model::NotArithmetic,
            align: ::core::mem::align_of::<Self>(),
        });

        impl ::tola_traits::model::Members for #ident {
            type DefaultCtor = #default_ctor;
            type CopyCtor = #copy_ctor;
            type MoveCtor = #move_ctor;
            type CopyAssign = #copy_assign;
            type MoveAssign = #move_assign;
            type Destructor = #destructor;
            type Trivial = #trivial;
            type Nothrow = #nothrow;
            type FromAny = #from_any;
            type Ctors = #ctors;
            type Converting = #converting;
            type Conversions = #conversions;
            type Assigns = #assigns;
        }
    })
}

fn enum_shape(ident: &Ident, options: &ShapeOptions, repr: Ident) -> syn::Result<TokenStream2> {
    if let Some(span) = options.class_only {
        return Err(syn::Error::new(span, "only `unscoped` applies to enums"));
    }

    let name = ident.to_string();
    let unscoped = options.unscoped.is_some();
    let arith = if unscoped {
        quote! { #repr }
    } else {
        quote! { ::tola_traits::model::NotArithmetic }
    };
    let unscoped = flag(unscoped);

    Ok(quote! {
        ::tola_traits::__impl_type_shape!(#ident, #name, {
            referenceable: ::tola_traits::True,
            class_or_union: ::tola_traits::False,
            union: ::tola_traits::False,
            unscoped_enum: #unscoped,
            bases: ::tola_traits::HNil,
            public_bases: ::tola_traits::HNil,
            members: ::tola_traits::model::Builtin,
            arith: #arith,
            align: ::core::mem::align_of::<Self>(),
        });
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(src: &str) -> syn::Result<ShapeOptions> {
        let input: DeriveInput = syn::parse_str(src)?;
        ShapeOptions::from_attrs(&input.attrs)
    }

    #[test]
    fn parses_bases_with_access() {
        let parsed = options("#[shape(bases(A, private B, protected C))] struct X;").unwrap();
        let public: Vec<bool> = parsed.bases.iter().map(|base| base.public).collect();
        assert_eq!(public, [true, false, false]);
    }

    #[test]
    fn constructors_keep_their_parameter_lists() {
        let parsed = options("#[shape(from(i32), from(i32, f64), explicit(u8))] struct X;").unwrap();
        assert_eq!(parsed.implicit.len(), 2);
        assert_eq!(parsed.implicit[1].len(), 2);
        assert_eq!(parsed.explicit.len(), 1);
    }

    #[test]
    fn rejects_unknown_options() {
        assert!(options("#[shape(frobnicate)] struct X;").is_err());
        assert!(options("#[shape(delete(everything))] struct X;").is_err());
    }

    #[test]
    fn rejects_generics() {
        let input: DeriveInput = syn::parse_str("struct X<T>(T);").unwrap();
        assert!(derive(&input).is_err());
    }

    #[test]
    fn enum_repr_defaults_to_i32() {
        let input: DeriveInput = syn::parse_str("#[repr(C, u8)] enum E { A }").unwrap();
        assert_eq!(repr_type(&input.attrs).unwrap(), "u8");
        let input: DeriveInput = syn::parse_str("enum E { A }").unwrap();
        assert_eq!(repr_type(&input.attrs).unwrap(), "i32");
    }

    #[test]
    fn class_options_are_rejected_on_enums() {
        let input: DeriveInput = syn::parse_str("#[shape(from(i32))] enum E { A }").unwrap();
        assert!(derive(&input).is_err());
        let input: DeriveInput = syn::parse_str("#[shape(unscoped)] struct S;").unwrap();
        assert!(derive(&input).is_err());
    }
}
