use crate::macros::derived_trait_names;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::{Attribute, ItemStruct, Lit, LitStr, Meta, MetaNameValue};

/// Derives every wire model carries unless the struct already lists them.
const DEFAULT_DERIVES: [&str; 4] = ["Debug", "Clone", "Serialize", "Deserialize"];

/// Expands the `#[api_model]` attribute macro.
///
/// Backend DTOs use camelCase keys and may grow new fields at any time, so
/// unknown fields are tolerated unless `deny_unknown_fields = true` is passed.
pub fn expand(args: TokenStream, input: ItemStruct) -> TokenStream {
    let args = match ModelArgs::parse(args) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };
    let existing = match SerdeAttrs::collect(&input.attrs) {
        Ok(existing) => existing,
        Err(err) => return err.to_compile_error(),
    };

    let derives = derived_trait_names(&input.attrs);
    let missing: Vec<TokenStream> = DEFAULT_DERIVES
        .iter()
        .filter(|name| !derives.contains(**name))
        .map(|name| match *name {
            "Serialize" => quote! { ::serde::Serialize },
            "Deserialize" => quote! { ::serde::Deserialize },
            "Clone" => quote! { Clone },
            _ => quote! { Debug },
        })
        .collect();
    let derive_attr = if missing.is_empty() {
        quote! {}
    } else {
        quote! { #[derive(#(#missing),*)] }
    };

    let rename_attr = match rename_attr(args.rename_all, existing.rename_all.as_ref()) {
        Ok(attr) => attr,
        Err(err) => return err.to_compile_error(),
    };
    let deny_attr = if args.deny_unknown_fields && !existing.deny_unknown_fields {
        quote! { #[serde(deny_unknown_fields)] }
    } else {
        quote! {}
    };

    quote! {
        #derive_attr
        #rename_attr
        #deny_attr
        #input
    }
}

struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

impl ModelArgs {
    fn parse(args: TokenStream) -> syn::Result<Self> {
        let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
        let metas = parser.parse2(args)?;

        let mut rename_all = None;
        let mut deny_unknown_fields = None;

        for meta in metas {
            let Meta::NameValue(nv) = meta else {
                return Err(syn::Error::new_spanned(
                    meta,
                    "Expected name-value arguments like `rename_all = \"...\"`",
                ));
            };

            if nv.path.is_ident("rename_all") {
                let Lit::Str(lit) = literal(&nv)? else {
                    return Err(syn::Error::new_spanned(&nv.value, "rename_all must be a string"));
                };
                if rename_all.replace(lit.clone()).is_some() {
                    return Err(syn::Error::new_spanned(nv, "Duplicate argument"));
                }
            } else if nv.path.is_ident("deny_unknown_fields") {
                let Lit::Bool(lit) = literal(&nv)? else {
                    return Err(syn::Error::new_spanned(
                        &nv.value,
                        "deny_unknown_fields must be a boolean",
                    ));
                };
                if deny_unknown_fields.replace(lit.value).is_some() {
                    return Err(syn::Error::new_spanned(nv, "Duplicate argument"));
                }
            } else {
                return Err(syn::Error::new_spanned(
                    nv.path,
                    "Unsupported argument; expected rename_all or deny_unknown_fields",
                ));
            }
        }

        Ok(Self { rename_all, deny_unknown_fields: deny_unknown_fields.unwrap_or(false) })
    }
}

fn literal(nv: &MetaNameValue) -> syn::Result<&Lit> {
    match &nv.value {
        syn::Expr::Lit(expr) => Ok(&expr.lit),
        other => Err(syn::Error::new_spanned(other, "Expected a literal value")),
    }
}

#[derive(Default)]
struct SerdeAttrs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

impl SerdeAttrs {
    fn collect(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut found = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    found.rename_all = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("deny_unknown_fields") {
                    found.deny_unknown_fields = true;
                } else if meta.input.peek(syn::Token![=]) {
                    // Other container attributes (default, tag, ...) are left to serde.
                    let _: syn::Expr = meta.value()?.parse()?;
                }
                Ok(())
            })?;
        }

        Ok(found)
    }
}

fn rename_attr(requested: Option<LitStr>, existing: Option<&LitStr>) -> syn::Result<TokenStream> {
    let requested = requested.unwrap_or_else(|| LitStr::new("camelCase", Span::call_site()));

    match existing {
        Some(lit) if lit.value() != requested.value() => Err(syn::Error::new_spanned(
            lit,
            "Conflicting serde rename_all; remove it or pass the same value to api_model",
        )),
        Some(_) => Ok(quote! {}),
        None => Ok(quote! { #[serde(rename_all = #requested)] }),
    }
}
