//! Proc macros shared by the geo-tour crates.
//!
//! Generated code refers to `crate::Error` and `crate::Result`, so the derives
//! are meant to be used from inside `geo_tour_core`.

mod cli_options;
mod cli_value;
mod kv_display;
mod timer;
mod utils;

use proc_macro::TokenStream;

/// Logs the wall-clock time of the annotated function at `debug` level.
///
/// ```ignore
/// #[geo_tour_derive::timer("solver")]
/// fn solve(points: &[Point]) -> Result<TourResult> { .. }
/// ```
#[proc_macro_attribute]
pub fn timer(attr: TokenStream, item: TokenStream) -> TokenStream {
    timer::timer_inner(attr, item)
}

#[proc_macro_derive(CliValue, attributes(cli_value, cli))]
pub fn derive_cli_value(item: TokenStream) -> TokenStream {
    cli_value::derive_cli_value_inner(item)
}

#[proc_macro_derive(CliOptions, attributes(cli))]
pub fn derive_cli_options(item: TokenStream) -> TokenStream {
    cli_options::derive_cli_options_inner(item)
}

#[proc_macro_derive(KvDisplay)]
pub fn derive_kv_display(item: TokenStream) -> TokenStream {
    kv_display::derive_kv_display_inner(item)
}
