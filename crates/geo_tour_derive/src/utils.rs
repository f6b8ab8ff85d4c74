use proc_macro2::Span;
use quote::quote;
use syn::{LitStr, Path, Type};

pub fn lit(value: &str) -> LitStr {
    LitStr::new(value, Span::call_site())
}

/// `OutputFormat` -> `output-format`.
pub fn to_kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (idx, ch) in s.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if idx != 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Expression turning the in-scope `raw: String` into a field value.
pub fn build_cli_parse_expr(ty: &Type, parse_with: Option<&Path>) -> proc_macro2::TokenStream {
    match parse_with {
        Some(parse_with) => quote! { #parse_with(&raw)? },
        None => quote! {
            raw.parse::<#ty>()
                .map_err(|e| crate::Error::invalid_input(format!(
                    "Invalid value for --{name}: {raw} ({e})"
                )))?
        },
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::{build_cli_parse_expr, lit, to_kebab_case};

    #[test]
    fn to_kebab_case_inserts_dashes_before_ascii_uppercase() {
        assert_eq!(to_kebab_case("OutputFormat"), "output-format");
        assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
        assert_eq!(to_kebab_case("X"), "x");
    }

    #[test]
    fn lit_keeps_value() {
        assert_eq!(lit("log-level").value(), "log-level");
    }

    #[test]
    fn parse_expr_uses_custom_parser_when_given() {
        let ty: syn::Type = parse_quote!(OutputFormat);
        let path: syn::Path = parse_quote!(OutputFormat::parse);
        let expr = build_cli_parse_expr(&ty, Some(&path)).to_string();
        assert!(expr.contains("OutputFormat :: parse"));
        assert!(!expr.contains("map_err"));
    }

    #[test]
    fn parse_expr_falls_back_to_from_str() {
        let ty: syn::Type = parse_quote!(f64);
        let expr = build_cli_parse_expr(&ty, None).to_string();
        assert!(expr.contains("parse :: < f64 >"));
        assert!(expr.contains("invalid_input"));
    }
}
