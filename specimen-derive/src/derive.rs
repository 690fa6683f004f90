//! Implementation of the `#[derive(Sample)]` macro.
//!
//! For structs the macro emits the declarative field schema (`Composite`)
//! that replaces runtime property reflection, plus a `Sample` impl that walks
//! it. For enums it emits uniform variant selection, and a variant listing
//! (`Enumerated`) when the enum is fieldless.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    Data, DataEnum, DataStruct, DeriveInput, Error, Field, Fields, GenericParam, Result, Variant,
    Visibility, parse_macro_input, parse_quote,
};

/// Main entry point for the Sample derive macro
pub fn derive_sample_impl(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> Result<TokenStream> {
    match &input.data {
        Data::Struct(data_struct) => expand_struct(input, data_struct),
        Data::Enum(data_enum) => expand_enum(input, data_enum),
        Data::Union(_) => Err(Error::new_spanned(
            input,
            "Sample derive is not supported for unions",
        )),
    }
}

/// Add the bounds generated impls need to every type parameter
fn add_trait_bounds(generics: &mut syn::Generics) {
    for param in &mut generics.params {
        if let GenericParam::Type(ref mut type_param) = *param {
            type_param.bounds.push(parse_quote!(specimen::Sample));
            type_param.bounds.push(parse_quote!('static));
        }
    }
}

/// True if the field carries `#[sample(skip)]`
fn field_is_skipped(field: &Field) -> Result<bool> {
    for attr in &field.attrs {
        if attr.path().is_ident("sample") {
            let mut skip = false;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported sample attribute; expected `skip`"))
                }
            })?;
            if skip {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

fn expand_struct(input: &DeriveInput, data: &DataStruct) -> Result<TokenStream> {
    let name = &input.ident;

    let fields = match &data.fields {
        Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
        Fields::Unit => Vec::new(),
        Fields::Unnamed(_) => {
            return Err(Error::new_spanned(
                input,
                "Sample derive targets structs with named fields; tuple structs are not supported",
            ));
        }
    };

    // Only public, non-skipped fields enter the schema; everything else keeps
    // its Default::default() value.
    let mut field_entries = Vec::new();
    for field in fields {
        if !matches!(field.vis, Visibility::Public(_)) {
            continue;
        }
        if field_is_skipped(field)? {
            continue;
        }

        let field_ident = field.ident.as_ref().unwrap();
        let field_name = field_ident.to_string();
        let field_ty = &field.ty;

        field_entries.push(quote! {
            specimen::Field::new(
                #field_name,
                ::core::mem::offset_of!(Self, #field_ident),
                ::core::any::TypeId::of::<#field_ty>(),
                |value: &mut Self,
                 rng: &mut dyn specimen::rand::RngCore,
                 config: &specimen::GenerateConfig| {
                    value.#field_ident =
                        <#field_ty as specimen::Sample>::build_named(#field_name, rng, config);
                },
            )
        });
    }

    let mut bounded_generics = input.generics.clone();
    add_trait_bounds(&mut bounded_generics);
    let (impl_generics, ty_generics, where_clause) = bounded_generics.split_for_impl();

    // Generation starts from Default::default(), the parameterless
    // constructor. For generic structs the obligation is deferred to a where
    // clause so it resolves per instantiation; for concrete structs the
    // supertrait check on the impl itself already points at the right place.
    let where_with_default = if input.generics.params.is_empty() {
        quote! { #where_clause }
    } else {
        match where_clause {
            Some(clause) => quote! { #clause, #name #ty_generics: ::core::default::Default },
            None => quote! { where #name #ty_generics: ::core::default::Default },
        }
    };

    Ok(quote! {
        impl #impl_generics specimen::Composite for #name #ty_generics #where_with_default {
            fn fields() -> Vec<specimen::Field<Self>> {
                vec![
                    #(#field_entries,)*
                ]
            }
        }

        impl #impl_generics specimen::Sample for #name #ty_generics #where_with_default {
            fn build(
                rng: &mut dyn specimen::rand::RngCore,
                config: &specimen::GenerateConfig,
            ) -> Self {
                specimen::populate::<Self>(&[], rng, config)
            }
        }
    })
}

fn expand_enum(input: &DeriveInput, data: &DataEnum) -> Result<TokenStream> {
    let name = &input.ident;
    let variants: Vec<&Variant> = data.variants.iter().collect();
    let fieldless = variants
        .iter()
        .all(|variant| matches!(variant.fields, Fields::Unit));
    let generic = !input.generics.params.is_empty();

    if variants.is_empty() && generic {
        return Err(Error::new_spanned(
            input,
            "Sample derive does not support empty generic enums",
        ));
    }

    // Fieldless, non-generic enums get a variant listing for EnumGenerator.
    let enumerated_impl = if fieldless && !generic {
        let listed = variants.iter().map(|variant| {
            let variant_name = &variant.ident;
            quote! { #name::#variant_name }
        });
        quote! {
            impl specimen::Enumerated for #name {
                fn variants() -> &'static [Self] {
                    const VARIANTS: &[#name] = &[#(#listed,)*];
                    VARIANTS
                }
            }
        }
    } else {
        quote! {}
    };

    // An enum with no variants has no values to build.
    if variants.is_empty() {
        return Ok(enumerated_impl);
    }

    let variant_count = variants.len();
    let variant_arms = variants
        .iter()
        .enumerate()
        .map(|(index, variant)| {
            let variant_name = &variant.ident;
            let variant_body = match &variant.fields {
                Fields::Named(fields_named) => {
                    let field_values = fields_named.named.iter().map(|field| {
                        let field_ident = field.ident.as_ref().unwrap();
                        let field_name = field_ident.to_string();
                        let field_ty = &field.ty;
                        quote! {
                            #field_ident: <#field_ty as specimen::Sample>::build_named(
                                #field_name, rng, config,
                            )
                        }
                    });
                    quote! {
                        Self::#variant_name {
                            #(#field_values,)*
                        }
                    }
                }
                Fields::Unnamed(fields_unnamed) => {
                    let field_values = fields_unnamed.unnamed.iter().map(|field| {
                        let field_ty = &field.ty;
                        quote! {
                            <#field_ty as specimen::Sample>::build(rng, config)
                        }
                    });
                    quote! {
                        Self::#variant_name(
                            #(#field_values,)*
                        )
                    }
                }
                Fields::Unit => quote! { Self::#variant_name },
            };

            quote! {
                #index => #variant_body
            }
        })
        .collect::<Vec<_>>();

    let mut bounded_generics = input.generics.clone();
    add_trait_bounds(&mut bounded_generics);
    let (impl_generics, ty_generics, where_clause) = bounded_generics.split_for_impl();

    Ok(quote! {
        #enumerated_impl

        impl #impl_generics specimen::Sample for #name #ty_generics #where_clause {
            fn build(
                rng: &mut dyn specimen::rand::RngCore,
                config: &specimen::GenerateConfig,
            ) -> Self {
                use specimen::rand::Rng;
                let variant_index = rng.gen_range(0..#variant_count);
                match variant_index {
                    #(#variant_arms,)*
                    _ => unreachable!("Invalid variant index"),
                }
            }
        }
    })
}
