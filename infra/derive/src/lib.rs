#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate of the workspace.
//!
//! * [`macro@gymhub_error`] turns an enum into a `thiserror` error with context support.
//! * [`macro@api_model`] stamps the serde policy used for backend DTOs.
//! * [`macro@main`] boots the tokio runtime through `gymhub_runtime`.
//!
//! The examples below are `ignore`d because proc-macro crates cannot use their own macros.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the tokio runtime for a binary.
///
/// # Arguments
///
/// * `interactive` - Current-thread runtime for short-lived CLI invocations.
/// * `multi_thread` - Work-stealing runtime for long-running sessions.
/// * `default` - Same as `multi_thread` with auto-detected worker count.
///
/// # Examples
///
/// ```rust,ignore
/// #[gymhub_runtime::main(interactive)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for structs exchanged with the backend.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Clone`, `Serialize` and `Deserialize` when missing.
/// * **Serde Policy**: `rename_all = "camelCase"` unless overridden; unknown fields are
///   accepted unless `deny_unknown_fields = true`.
///
/// # Example
///
/// ```rust,ignore
/// use gymhub_derive::api_model;
///
/// #[api_model]
/// pub struct Producto {
///     pub nombre: String,
///     pub precio_venta: f64,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::model::expand(attr.into(), input).into()
}

/// Attribute macro for domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants holding a `source` field,
///   so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant exists.
/// * **Kind**: `kind()` returns the variant name for structured logging.
///
/// # Requirements
///
/// 1. Only enums with named-field variants are accepted.
/// 2. Variants with a `source` need a `context: Option<Cow<'static, str>>` field.
///
/// # Example
///
/// ```rust,ignore
/// use gymhub_derive::gymhub_error;
/// use std::borrow::Cow;
///
/// #[gymhub_error]
/// pub enum CatalogError {
///     #[error("Http error{}: {source}", format_context(.context))]
///     Http { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn gymhub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
