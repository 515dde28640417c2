use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Error, Fields};

/// Generates `get_<field>()` (a clone) and `get_<field>_ref()` for every
/// named field. Every field type must be `Clone`.
#[proc_macro_derive(Getter)]
pub fn derive_getter(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Error::new_spanned(name, "Getter needs named fields")
                    .to_compile_error()
                    .into()
            }
        },
        _ => {
            return Error::new_spanned(name, "Getter only supports structs")
                .to_compile_error()
                .into()
        }
    };

    let getters = fields.iter().filter_map(|field| {
        let ident = field.ident.as_ref()?;
        let ty = &field.ty;
        let get = format_ident!("get_{}", ident);
        let get_ref = format_ident!("get_{}_ref", ident);
        Some(quote! {
            pub fn #get(&self) -> #ty {
                ::std::clone::Clone::clone(&self.#ident)
            }

            pub fn #get_ref(&self) -> &#ty {
                &self.#ident
            }
        })
    });

    quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #(#getters)*
        }
    }
    .into()
}
