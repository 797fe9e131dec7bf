use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Attribute, Expr, GenericArgument, Ident, PathArguments, Token, Type, Visibility,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    token,
};

/// One field of a `config!` block.
///
/// Two forms are accepted:
/// ```text
/// /// docs
/// field: Type = default
/// field: Type (PartialType = default)
/// ```
/// The second form is used for nested config structs, where the partial
/// struct should deserialize into the nested `Partial*` type.
struct ConfigField {
    attrs: Vec<Attribute>,
    name: Ident,
    ty: Type,
    partial_ty: Option<Type>,
    default_value: Expr,
}

impl Parse for ConfigField {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let name: Ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let ty: Type = input.parse()?;

        let (partial_ty, default_value) = if input.peek(token::Paren) {
            let content;
            syn::parenthesized!(content in input);
            let partial_ty: Type = content.parse()?;
            content.parse::<Token![=]>()?;
            (Some(partial_ty), content.parse()?)
        } else {
            input.parse::<Token![=]>()?;
            (None, input.parse()?)
        };

        Ok(ConfigField {
            attrs,
            name,
            ty,
            partial_ty,
            default_value,
        })
    }
}

struct ConfigInput {
    attrs: Vec<Attribute>,
    vis: Visibility,
    name: Ident,
    fields: Punctuated<ConfigField, Token![,]>,
}

impl Parse for ConfigInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![struct]>()?;
        let name: Ident = input.parse()?;
        let content;
        syn::braced!(content in input);
        let fields = content.parse_terminated(ConfigField::parse, Token![,])?;
        Ok(ConfigInput {
            attrs,
            vis,
            name,
            fields,
        })
    }
}

/// Checks whether a type is spelled `Option<T>`, so it is not wrapped twice in
/// the partial struct.
fn is_option(ty: &Type) -> bool {
    let Type::Path(tp) = ty else {
        return false;
    };
    let Some(seg) = tp.path.segments.last() else {
        return false;
    };
    if seg.ident != "Option" {
        return false;
    }
    match &seg.arguments {
        PathArguments::AngleBracketed(args) => {
            args.args.len() == 1 && matches!(args.args[0], GenericArgument::Type(_))
        }
        _ => false,
    }
}

fn partial_field_type(field: &ConfigField) -> TokenStream2 {
    let ty = &field.ty;
    match &field.partial_ty {
        Some(pt) => quote! { #pt },
        None if is_option(ty) => quote! { #ty },
        None => quote! { Option<#ty> },
    }
}

fn accessors(field: &ConfigField) -> TokenStream2 {
    let name = &field.name;
    let ty = &field.ty;
    let with_name = format_ident!("with_{}", name);
    let set_name = format_ident!("set_{}", name);
    let get_name = format_ident!("get_{}", name);

    quote! {
        pub fn #with_name(mut self, #name: #ty) -> Self {
            self.#name = #name;
            self
        }
        pub fn #set_name(&mut self, #name: #ty) {
            self.#name = #name;
        }
        pub fn #get_name(&self) -> &#ty {
            &self.#name
        }
    }
}

/// Generates a configuration struct, its `Partial*` counterpart that is read
/// from TOML, and the glue between them. Fields missing from the file fall
/// back to their declared defaults.
#[proc_macro]
pub fn config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as ConfigInput);
    let attrs = &input.attrs;
    let vis = &input.vis;
    let struct_name = &input.name;
    let partial_struct_name = format_ident!("Partial{}", struct_name);

    let fields = input.fields.iter().map(|f| {
        let field_attrs = &f.attrs;
        let name = &f.name;
        let ty = &f.ty;
        quote! {
            #( #field_attrs )*
            #name: #ty
        }
    });

    let partial_fields = input.fields.iter().map(|f| {
        let name = &f.name;
        let partial_ty = partial_field_type(f);
        quote! { #name: #partial_ty }
    });

    let from_partial = input.fields.iter().map(|f| {
        let name = &f.name;
        let default_value = &f.default_value;
        quote! { #name: partial.#name.into_or(#default_value) }
    });

    let defaults = input.fields.iter().map(|f| {
        let name = &f.name;
        let default_value = &f.default_value;
        quote! { #name: #default_value }
    });

    let methods = input.fields.iter().map(accessors);

    let expanded = quote! {
        #( #attrs )*
        #[derive(Debug, Clone, PartialEq, serde::Serialize)]
        #vis struct #struct_name {
            #( #fields, )*
        }

        #[derive(Debug, Clone, Default, serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        #vis struct #partial_struct_name {
            #( #partial_fields, )*
        }

        impl #struct_name {
            pub fn from_partial(partial: #partial_struct_name) -> Self {
                use crate::config::IntoOr;
                Self {
                    #( #from_partial, )*
                }
            }
            pub fn from_toml(content: &str) -> anyhow::Result<Self> {
                Ok(Self::from_partial(toml::from_str(content)?))
            }
            pub fn from_file<P: AsRef<std::path::Path>>(file_path: P) -> anyhow::Result<Self> {
                let content = std::fs::read_to_string(file_path)?;
                Self::from_toml(&content)
            }
            pub fn from_optional_file<P: AsRef<std::path::Path>>(file_path: Option<P>) -> anyhow::Result<Self> {
                match file_path {
                    Some(p) => Self::from_file(p),
                    None => Ok(Self::default()),
                }
            }
            #( #methods )*
        }

        impl Default for #struct_name {
            fn default() -> Self {
                #struct_name {
                    #( #defaults, )*
                }
            }
        }

        impl crate::config::IntoOr<#struct_name> for Option<#partial_struct_name> {
            fn into_or(self, or: #struct_name) -> #struct_name {
                match self {
                    Some(t) => #struct_name::from_partial(t),
                    None => or,
                }
            }
        }
    };

    TokenStream::from(expanded)
}
