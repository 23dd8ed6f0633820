use convert_case::{Case, Casing};
use darling::util::Flag;
use darling::{FromDeriveInput, FromVariant};
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{parse_macro_input, Data, DataEnum, DeriveInput, Generics};

#[proc_macro_derive(FieldRegistry, attributes(search))]
pub fn derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = EnumOpts::from_derive_input(&input).expect("Unable to parse enum options");

    let DeriveInput {
        ident,
        data,
        generics,
        ..
    } = input;

    let data = match data {
        Data::Enum(data) => data,
        _ => panic!("Derive can only be used on enum types"),
    };

    let info = collect(&data);

    let expanded_fields = expand_fields(&ident, &info.fields);
    let expanded_registry = expand_registry(&ident, &generics, &opts, &info);

    let expanded = quote! {
        #expanded_fields

        #expanded_registry
    };

    proc_macro::TokenStream::from(expanded)
}

fn field_ident(base: &Ident) -> Ident {
    Ident::new(&format!("{}Field", base), base.span())
}

fn expand_fields(base: &Ident, fields: &[Field]) -> TokenStream {
    let name = field_ident(base);
    let variants = fields.iter().map(|field| &field.ident);

    quote! {
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        pub enum #name {
            #(#variants, )*
        }
    }
}

fn expand_registry(
    ident: &Ident,
    generics: &Generics,
    opts: &EnumOpts,
    info: &Info,
) -> TokenStream {
    let ident_field = field_ident(ident);

    let ty = match generics.lifetimes().count() {
        0 => quote! { #ident },
        1 => quote! { #ident<'s> },
        _ => panic!("Registry types can have at most one lifetime"),
    };

    let names = info.fields.iter().flat_map(|field| {
        let ident = &field.ident;
        let ident_field = &ident_field;
        field.names.iter().map(move |name| {
            quote! { (#name, #ident_field::#ident) }
        })
    });

    let general = info
        .fields
        .iter()
        .filter(|field| field.default)
        .map(|field| {
            let ident = &field.ident;
            quote! { #ident_field::#ident }
        })
        .collect::<Vec<_>>();

    let logographic = info
        .fields
        .iter()
        .filter(|field| field.default && field.logographic)
        .map(|field| {
            let ident = &field.ident;
            quote! { #ident_field::#ident }
        })
        .collect::<Vec<_>>();

    // without dedicated fields, logographic input falls back to the general ones
    let logographic = match logographic.is_empty() {
        true => general.clone(),
        false => logographic,
    };

    let matchers = info.fields.iter().map(|field| {
        let ident = &field.ident;
        quote! {
            #ident_field::#ident => Self::#ident(zhquery::lir::FromValue::from_value(value))
        }
    });

    let tags = opts.tags.is_present();
    let quiz = opts.quiz.is_present();

    quote! {
        impl<'s> zhquery::lir::FieldRegistry<'s> for #ty {
            type Field = #ident_field;

            const FIELDS: &'static [(&'static str, Self::Field)] = &[
                #(#names, )*
            ];

            const EXTENSIONS: zhquery::extension::Extensions = zhquery::extension::Extensions {
                tags: #tags,
                quiz: #quiz,
            };

            fn default_fields(script: zhquery::script::ScriptClass) -> &'static [Self::Field] {
                match script {
                    zhquery::script::ScriptClass::Logographic => &[ #(#logographic, )* ],
                    zhquery::script::ScriptClass::General => &[ #(#general, )* ],
                }
            }

            fn matcher(field: Self::Field, value: ::std::borrow::Cow<'s, str>) -> Self {
                match field {
                    #(#matchers, )*
                }
            }
        }
    }
}

struct Info {
    fields: Vec<Field>,
}

struct Field {
    ident: Ident,
    /// Primary name first, then aliases
    names: Vec<String>,
    default: bool,
    logographic: bool,
}

#[derive(FromDeriveInput, Default)]
#[darling(default, attributes(search))]
struct EnumOpts {
    tags: Flag,
    quiz: Flag,
}

#[derive(FromVariant, Default)]
#[darling(default, attributes(search))]
struct VariantOpts {
    rename: Option<String>,
    #[darling(multiple)]
    alias: Vec<String>,
    // Part of the default fields
    default: Flag,
    logographic: Flag,
}

fn collect(data: &DataEnum) -> Info {
    let mut fields = vec![];

    for variant in &data.variants {
        let opts = VariantOpts::from_variant(variant).expect("Unable to parse variant options");

        if variant.fields.len() != 1 {
            panic!("Variant must have exactly one field");
        }

        if opts.logographic.is_present() && !opts.default.is_present() {
            panic!("Only default fields can be logographic");
        }

        let name = opts
            .rename
            .unwrap_or_else(|| variant.ident.to_string().to_case(Case::Camel));

        let mut names = vec![name.to_lowercase()];
        names.extend(opts.alias.into_iter().map(|alias| alias.to_lowercase()));

        fields.push(Field {
            ident: variant.ident.clone(),
            names,
            default: opts.default.is_present(),
            logographic: opts.logographic.is_present(),
        });
    }

    Info { fields }
}
