use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input, spanned::Spanned};

use crate::utils;

pub fn derive_kv_display_inner(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let struct_ident = input.ident.clone();

    let Data::Struct(data_struct) = &input.data else {
        return syn::Error::new(input.span(), "KvDisplay can only be derived for structs")
            .to_compile_error()
            .into();
    };

    let Fields::Named(fields) = &data_struct.fields else {
        return syn::Error::new(input.span(), "KvDisplay requires named fields")
            .to_compile_error()
            .into();
    };

    let idents: Vec<_> = fields.named.iter().filter_map(|f| f.ident.as_ref()).collect();

    // One `\tkey = value` line per field, keys padded to a common width.
    let keys: Vec<String> = idents.iter().map(|ident| ident.to_string()).collect();
    let width = keys.iter().map(String::len).max().unwrap_or(0);
    let mut template = String::new();
    for key in &keys {
        template.push_str(&format!("\n\t{key:<width$} = {{}}"));
    }
    let template_lit = utils::lit(&template);

    let expanded = quote! {
        impl std::fmt::Display for #struct_ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, #template_lit, #(&self.#idents),*)
            }
        }
    };

    TokenStream::from(expanded)
}
