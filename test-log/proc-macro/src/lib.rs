// Copyright (C) 2019-2021 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: (Apache-2.0 OR MIT)

#![deny(rustdoc::broken_intra_doc_links, missing_docs)]

//! A crate providing a replacement #[[macro@test]] attribute that
//! initializes the tracing subscriber of `seqlist-test-log` before running
//! tests.

use darling::ast::NestedMeta;
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, parse_quote, ItemFn, Meta, ReturnType};

/// A procedural macro for the `test` attribute.
///
/// Tests written with it log through the workspace subscriber, filtered by
/// `RUST_LOG`, and their output is captured per test like `println!`.
///
/// Convert a whole module by importing the attribute over the built-in one:
/// ```rust,ignore
/// # mod fordoctest {
/// use seqlist_test_log::test;
///
/// #[test]
/// fn it_still_works() {
///   // ...
/// }
/// # }
/// ```
///
/// Another test attribute can be wrapped by passing it as the argument, e.g.
/// `#[test(other_crate::test)]`.
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = match NestedMeta::parse_meta_list(attr.into()) {
        Ok(v) => v,
        Err(_) => {
            panic!("unsupported arguments supplied: {}", quote! { attr });
        }
    };
    let input = parse_macro_input!(item as ItemFn);

    let inner_test = match args.as_slice() {
        [] => NestedMeta::Meta(Meta::Path(parse_quote! { ::core::prelude::v1::test })),
        [m] => m.clone(),
        _ => panic!("unsupported attributes supplied: expected at most one, got {}", args.len()),
    };

    expand_wrapper(&inner_test, &input)
}

/// Emit code for a wrapper function around a test function.
fn expand_wrapper(inner_test: &NestedMeta, wrappee: &ItemFn) -> TokenStream {
    let attrs = &wrappee.attrs;
    let async_ = &wrappee.sig.asyncness;
    let await_ = if async_.is_some() {
        quote! {.await}
    } else {
        quote! {}
    };
    let body = &wrappee.block;
    let test_name = &wrappee.sig.ident;

    // A #[should_panic] test cannot return a value, so the return type is
    // only forwarded when one is declared.
    let ret = match &wrappee.sig.output {
        ReturnType::Default => quote! {},
        ReturnType::Type(_, type_) => quote! {-> #type_},
    };

    let result = quote! {
      #[#inner_test]
      #(#attrs)*
      #async_ fn #test_name() #ret {
        #async_ fn test_impl() #ret {
          #body
        }

        ::seqlist_test_log::initialize();

        test_impl()#await_
      }
    };
    result.into()
}
