use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DataStruct, DeriveInput, Field, Fields, LitStr, parse_macro_input};

/// Implementation of `#[derive(FormEncode)]`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(FormEncode)]
/// struct PaymentIntentCaptureParams {
///     #[form(key = "amount")]
///     amount: i64,
/// }
///
/// // Expands to (roughly):
/// impl payrex::encode::FormEncode for PaymentIntentCaptureParams {
///     fn encode_into(&self, parent: &str, out: &mut payrex::encode::FormValues) {
///         payrex::encode::FormEncode::encode_into(
///             &self.amount,
///             &payrex::encode::child_key(parent, "amount"),
///             out,
///         );
///     }
/// }
/// ```
pub fn form_encode_derive_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(named),
            ..
        }) => &named.named,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "FormEncode can only be derived for structs with named fields",
            ));
        }
    };

    let mut keys: Vec<String> = Vec::with_capacity(fields.len());
    let mut encode_calls = Vec::with_capacity(fields.len());

    for field in fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let key = wire_key(field)?;

        if keys.contains(&key.value()) {
            return Err(syn::Error::new_spanned(
                &key,
                format!("wire key `{}` is used by more than one field", key.value()),
            ));
        }
        keys.push(key.value());

        encode_calls.push(quote! {
            payrex::encode::FormEncode::encode_into(
                &self.#ident,
                &payrex::encode::child_key(parent, #key),
                out,
            );
        });
    }

    Ok(quote! {
        impl #impl_generics payrex::encode::FormEncode for #name #ty_generics #where_clause {
            fn encode_into(&self, parent: &str, out: &mut payrex::encode::FormValues) {
                #(#encode_calls)*
            }
        }

        impl #impl_generics payrex::encode::FormObject for #name #ty_generics #where_clause {
            const WIRE_KEYS: &'static [&'static str] = &[#(#keys),*];
        }
    })
}

/// Read the mandatory `#[form(key = "...")]` attribute of a field.
fn wire_key(field: &Field) -> syn::Result<LitStr> {
    let mut key: Option<LitStr> = None;

    for attr in field.attrs.iter().filter(|a| a.path().is_ident("form")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("key") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(meta.error("wire key must not be empty"));
                }
                key = Some(lit);
                Ok(())
            } else {
                Err(meta.error("unsupported form attribute, expected `key = \"...\"`"))
            }
        })?;
    }

    key.ok_or_else(|| {
        let field_name = field
            .ident
            .as_ref()
            .map(|i| i.to_string())
            .unwrap_or_default();
        syn::Error::new_spanned(
            field,
            format!("field `{field_name}` is missing #[form(key = \"...\")]"),
        )
    })
}
