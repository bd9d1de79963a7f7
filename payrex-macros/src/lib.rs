//! Derive macros for the `payrex` client.
//!
//! `#[derive(FormEncode)]` turns a parameter struct into a form-encodable
//! value. Every field must name its wire key:
//!
//! ```rust,ignore
//! use payrex::FormEncode;
//!
//! #[derive(FormEncode)]
//! struct RefundUpdateParams {
//!     #[form(key = "metadata")]
//!     metadata: Option<std::collections::HashMap<String, String>>,
//! }
//! ```

use proc_macro::TokenStream;

mod form_encode;

/// Derive `payrex::encode::FormEncode` and `payrex::encode::FormObject`.
///
/// Fields are encoded in declaration order. A field without
/// `#[form(key = "...")]`, an empty key, or a key used twice is rejected at
/// compile time.
#[proc_macro_derive(FormEncode, attributes(form))]
pub fn form_encode_derive(input: TokenStream) -> TokenStream {
    form_encode::form_encode_derive_impl(input)
}
