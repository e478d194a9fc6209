use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Index, Member, parse_macro_input, parse_quote};

#[proc_macro_derive(Wire, attributes(wire))]
pub fn derive_wire(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    derive_wire_expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn derive_wire_expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    match &input.data {
        Data::Struct(data_struct) => impl_wire_struct(&input, &data_struct.fields),
        Data::Enum(_) => Err(syn::Error::new_spanned(
            name,
            "Enum types are not supported",
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            name,
            "Union types are not supported",
        )),
    }
}

fn is_skipped(field: &syn::Field) -> syn::Result<bool> {
    let mut skip = false;
    for attr in &field.attrs {
        if attr.path().is_ident("wire") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported wire attribute, expected `skip`"))
                }
            })?;
        }
    }
    Ok(skip)
}

fn impl_wire_struct(input: &DeriveInput, fields: &Fields) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let mut wire_members = Vec::new();
    let mut wire_types = Vec::new();
    let mut wire_bindings = Vec::new();
    let mut skipped_members = Vec::new();
    let mut skipped_types = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(index)),
        };

        if is_skipped(field)? {
            skipped_members.push(member);
            skipped_types.push(field.ty.clone());
        } else {
            wire_members.push(member);
            wire_types.push(field.ty.clone());
            wire_bindings.push(format_ident!("__field{}", index));
        }
    }

    // Bound field types rather than type parameters, so a parameter used only
    // in skipped fields needs nothing beyond `Default`.
    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        let where_clause = generics.make_where_clause();
        for ty in &wire_types {
            where_clause.predicates.push(parse_quote!(#ty: packwire::Wire));
        }
        for ty in &skipped_types {
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::core::default::Default));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // A struct with nothing to encode leaves the buffer and cursor untouched.
    let allow_unused = if wire_members.is_empty() {
        quote! { #[allow(unused_variables)] }
    } else {
        quote! {}
    };

    let expanded = quote! {
        impl #impl_generics packwire::Wire for #name #ty_generics #where_clause {
            const SHAPE: packwire::Shape = packwire::Shape::Tuple;
            const FIXED_SIZE: Option<usize> = packwire::fixed_size_of_members(&[
                #(<#wire_types as packwire::Wire>::FIXED_SIZE),*
            ]);

            fn encoded_len(&self) -> usize {
                0 #(+ packwire::Wire::encoded_len(&self.#wire_members))*
            }

            #allow_unused
            fn encode_value(&self, buffer: &mut Vec<u8>) {
                #(
                    packwire::Wire::encode_value(&self.#wire_members, buffer);
                )*
            }

            #allow_unused
            fn decode_value(cursor: &mut packwire::Cursor<'_>) -> packwire::DecodeResult<Self> {
                #(
                    let #wire_bindings = <#wire_types as packwire::Wire>::decode_value(cursor)?;
                )*

                Ok(Self {
                    #(#wire_members: #wire_bindings,)*
                    #(#skipped_members: Default::default(),)*
                })
            }
        }
    };

    Ok(expanded)
}
