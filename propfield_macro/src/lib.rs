use proc_macro_crate::FoundCrate;
use proc_macro2::{Span, TokenStream};
use quote::quote;

mod properties_impl;

/// Turns the `#[property(..)]` fields of a struct into zero-sized properties.
///
/// See the `propfield` crate for the declaration syntax.
#[proc_macro_attribute]
pub fn properties(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let root = propfield_root();
    properties_impl::properties_impl(root, attr.into(), item.into()).into()
}

fn propfield_root() -> TokenStream {
    match proc_macro_crate::crate_name("propfield") {
        // `propfield` declares `extern crate self as propfield`, so the absolute
        // path also resolves inside its own doctests and unit tests.
        Ok(FoundCrate::Itself) | Err(_) => quote!(::propfield),
        Ok(FoundCrate::Name(name)) => {
            let ident = syn::Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
    }
}
