use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::{ItemStruct, LitStr};

pub fn expand(args: TokenStream, input: ItemStruct) -> TokenStream {
    let mut id: Option<LitStr> = None;
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("id") {
            id = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported foundry_object argument, expected `id = \"...\"`"))
        }
    });
    if let Err(err) = parser.parse2(args) {
        return err.into_compile_error();
    }

    let ident = &input.ident;
    let id = id.map_or_else(|| ident.to_string(), |lit| lit.value());
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let debug = (!crate::derived_traits(&input.attrs).contains("Debug"))
        .then(|| quote! { #[derive(Debug)] });

    quote! {
        #debug
        #input

        #[automatically_derived]
        impl #impl_generics ::foundry_registry::Object for #ident #ty_generics #where_clause {
            #[inline]
            fn id(&self) -> &str {
                #id
            }
        }
    }
}
