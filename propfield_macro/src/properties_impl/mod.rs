use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::spanned::Spanned;
use syn::{Attribute, Fields, Ident, Item, Visibility, parse_quote};

use self::property_attr::{is_property_attr, parse_property_attr};
use self::property_type::{PropertyDecl, gen_property_type, property_type_ident};

mod property_attr;
mod property_type;

pub fn properties_impl(root: TokenStream, attr: TokenStream, item: TokenStream) -> TokenStream {
    expand(&root, attr, item).unwrap_or_else(syn::Error::into_compile_error)
}

fn push_error(errors: &mut Option<syn::Error>, error: syn::Error) {
    match errors {
        Some(existing) => existing.combine(error),
        None => *errors = Some(error),
    }
}

/// Arguments of `#[properties(..)]`.
#[derive(Default)]
struct OwnerArgs {
    /// Method the generated `Drop` calls, from `drop = method`.
    drop_hook: Option<Ident>,
}

fn parse_owner_args(attr: TokenStream) -> syn::Result<OwnerArgs> {
    let mut args = OwnerArgs::default();
    let parser = syn::meta::parser(|meta| {
        if !meta.path.is_ident("drop") {
            return Err(meta.error("expected `drop = method`"));
        }
        if args.drop_hook.is_some() {
            return Err(meta.error("duplicate `drop` hook"));
        }
        args.drop_hook = Some(meta.value()?.parse()?);
        Ok(())
    });
    parser.parse2(attr)?;
    Ok(args)
}

fn expand(root: &TokenStream, attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let args = parse_owner_args(attr)?;

    let mut item_struct = match syn::parse2::<Item>(item)? {
        Item::Struct(item_struct) => item_struct,
        Item::Enum(item_enum) => {
            return Err(syn::Error::new(
                item_enum.enum_token.span,
                "properties can only be declared on structs, not enums",
            ));
        }
        Item::Union(item_union) => {
            return Err(syn::Error::new(
                item_union.union_token.span,
                "properties can only be declared on structs, not unions",
            ));
        }
        other => {
            return Err(syn::Error::new(
                other.span(),
                "`#[properties]` expects a struct",
            ));
        }
    };

    let owner = &item_struct.ident;
    let vis = &item_struct.vis;
    let generics = &item_struct.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let fields_span = item_struct.fields.span();
    let Fields::Named(fields) = &mut item_struct.fields else {
        return Err(syn::Error::new(
            fields_span,
            "properties need named fields, the field name locates the property",
        ));
    };

    let mut errors = None;
    let mut generated = Vec::new();
    let mut type_names = HashMap::new();

    for field in fields.named.iter_mut() {
        let (property_attrs, other_attrs): (Vec<Attribute>, Vec<Attribute>) =
            field.attrs.drain(..).partition(is_property_attr);
        field.attrs = other_attrs;

        let Some(field_ident) = field.ident.clone() else {
            continue;
        };

        let property_attr = match property_attrs.as_slice() {
            [] => {
                if !matches!(field.vis, Visibility::Inherited) {
                    push_error(
                        &mut errors,
                        syn::Error::new(
                            field.vis.span(),
                            "fields of a struct with properties must be private unless they are properties",
                        ),
                    );
                }
                continue;
            }
            [property_attr] => property_attr,
            [_, duplicate, ..] => {
                push_error(
                    &mut errors,
                    syn::Error::new(duplicate.span(), "duplicate `#[property]` attribute"),
                );
                continue;
            }
        };

        let kind = match parse_property_attr(property_attr) {
            Ok(kind) => kind,
            Err(error) => {
                push_error(&mut errors, error);
                continue;
            }
        };

        let property_ident = match property_type_ident(owner, &field_ident) {
            Ok(property_ident) => property_ident,
            Err(error) => {
                push_error(&mut errors, error);
                continue;
            }
        };
        if let Some(first) = type_names.insert(property_ident.to_string(), field_ident.clone()) {
            push_error(
                &mut errors,
                syn::Error::new(
                    field_ident.span(),
                    format!(
                        "fields `{first}` and `{field_ident}` both generate `{property_ident}`"
                    ),
                ),
            );
            continue;
        }

        let decl = PropertyDecl {
            ident: &property_ident,
            owner,
            generics,
            field: &field_ident,
            vis,
            value: &field.ty,
            kind: &kind,
            cfgs: field
                .attrs
                .iter()
                .filter(|attr| attr.path().is_ident("cfg"))
                .collect(),
        };
        generated.push(gen_property_type(root, &decl));

        field.ty = parse_quote!(#property_ident #ty_generics);
    }

    if let Some(errors) = errors {
        return Err(errors);
    }

    // Owners with `Drop` cannot be destructured or partially moved, which keeps
    // every property inside the owner it was placed in.
    let drop_hook = args
        .drop_hook
        .as_ref()
        .map(|hook| quote!(<#owner #ty_generics>::#hook(self);));

    Ok(quote! {
        #item_struct
        #(#generated)*

        impl #impl_generics #root::internal::Drop for #owner #ty_generics #where_clause {
            fn drop(&mut self) {
                #drop_hook
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use quote::{ToTokens, quote};
    use syn::{ImplItem, Item};

    use super::expand;

    fn expand_file(input: proc_macro2::TokenStream) -> syn::File {
        expand_file_with(quote!(), input)
    }

    fn expand_file_with(
        attr: proc_macro2::TokenStream,
        input: proc_macro2::TokenStream,
    ) -> syn::File {
        let tokens = expand(&quote!(::propfield), attr, input).unwrap();
        syn::parse2(tokens).unwrap()
    }

    fn expand_error(attr: proc_macro2::TokenStream, input: proc_macro2::TokenStream) -> String {
        expand(&quote!(::propfield), attr, input)
            .unwrap_err()
            .into_iter()
            .map(|error| error.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn find_struct<'a>(file: &'a syn::File, name: &str) -> &'a syn::ItemStruct {
        file.items
            .iter()
            .find_map(|item| match item {
                Item::Struct(item_struct) if item_struct.ident == name => Some(item_struct),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no struct `{name}` in:\n{}", prettyplease::unparse(file)))
    }

    /// Names of the inherent methods generated for `name`.
    fn inherent_methods(file: &syn::File, name: &str) -> Vec<String> {
        file.items
            .iter()
            .filter_map(|item| match item {
                Item::Impl(item_impl) if item_impl.trait_.is_none() => Some(item_impl),
                _ => None,
            })
            .filter(|item_impl| match &*item_impl.self_ty {
                syn::Type::Path(path) => path.path.segments.last().unwrap().ident == name,
                _ => false,
            })
            .flat_map(|item_impl| &item_impl.items)
            .filter_map(|impl_item| match impl_item {
                ImplItem::Fn(f) => Some(f.sig.ident.to_string()),
                _ => None,
            })
            .collect()
    }

    /// Every impl block, inherent or trait, whose self type is `name`.
    fn impls_for<'a>(file: &'a syn::File, name: &str) -> Vec<&'a syn::ItemImpl> {
        file.items
            .iter()
            .filter_map(|item| match item {
                Item::Impl(item_impl) => Some(item_impl),
                _ => None,
            })
            .filter(|item_impl| match &*item_impl.self_ty {
                syn::Type::Path(path) => path.path.segments.last().unwrap().ident == name,
                _ => false,
            })
            .collect()
    }

    fn drop_fn(item_impl: &syn::ItemImpl) -> &syn::ImplItemFn {
        item_impl
            .items
            .iter()
            .find_map(|impl_item| match impl_item {
                ImplItem::Fn(f) if f.sig.ident == "drop" => Some(f),
                _ => None,
            })
            .unwrap()
    }

    fn field_type(item_struct: &syn::ItemStruct, field: &str) -> String {
        item_struct
            .fields
            .iter()
            .find(|f| f.ident.as_ref().is_some_and(|ident| ident == field))
            .unwrap()
            .ty
            .to_token_stream()
            .to_string()
    }

    #[test]
    fn test_read_write() {
        let file = expand_file(quote! {
            pub struct Gauge {
                raw: u8,
                #[property(get = pub level, set = pub set_level)]
                pub level: u8,
            }
        });

        let owner = find_struct(&file, "Gauge");
        assert_eq!(field_type(owner, "level"), "GaugeLevelProperty");
        assert_eq!(field_type(owner, "raw"), "u8");
        assert!(
            owner.fields.iter().all(|f| f.attrs.is_empty()),
            "property attributes must be stripped:\n{}",
            prettyplease::unparse(&file)
        );

        let property = find_struct(&file, "GaugeLevelProperty");
        assert!(matches!(property.vis, syn::Visibility::Public(_)));
        assert_eq!(
            inherent_methods(&file, "GaugeLevelProperty"),
            ["new", "get", "set", "assign"]
        );

        let rendered = prettyplease::unparse(&file);
        assert!(rendered.contains("unsafe impl ::propfield::PropertyField for GaugeLevelProperty"));
    }

    #[test]
    fn test_read_only() {
        let file = expand_file(quote! {
            struct Gauge {
                base: i32,
                #[property(get = pub doubled)]
                doubled: i32,
            }
        });

        assert!(matches!(
            find_struct(&file, "GaugeDoubledProperty").vis,
            syn::Visibility::Inherited
        ));
        assert_eq!(
            inherent_methods(&file, "GaugeDoubledProperty"),
            ["new", "get"]
        );
    }

    #[test]
    fn test_write_only() {
        let file = expand_file(quote! {
            pub(crate) struct Journal {
                entries: Vec<String>,
                #[property(set = pub(crate) record)]
                pub entry: String,
            }
        });

        assert!(matches!(
            find_struct(&file, "JournalEntryProperty").vis,
            syn::Visibility::Restricted(_)
        ));
        assert_eq!(
            inherent_methods(&file, "JournalEntryProperty"),
            ["new", "set"]
        );
    }

    #[test]
    fn test_generic_owner() {
        let file = expand_file(quote! {
            pub struct Slot<'a, T: Clone, const N: usize>
            where
                T: Default,
            {
                items: [&'a T; N],
                #[property(get = pub first)]
                pub first: T,
            }
        });

        let owner = find_struct(&file, "Slot");
        assert_eq!(field_type(owner, "first"), "SlotFirstProperty < 'a , T , N >");

        let property = find_struct(&file, "SlotFirstProperty");
        assert_eq!(property.generics.params.len(), 3);
        assert!(property.generics.where_clause.is_some());
    }

    #[test]
    fn test_cfg_is_carried_over() {
        let file = expand_file(quote! {
            struct Gauge {
                raw: u8,
                #[cfg(feature = "levels")]
                #[property(get = level)]
                level: u8,
            }
        });

        let property = find_struct(&file, "GaugeLevelProperty");
        assert!(property.attrs.iter().any(|attr| attr.path().is_ident("cfg")));
        let property_impls = impls_for(&file, "GaugeLevelProperty");
        assert_eq!(property_impls.len(), 3);
        assert!(
            property_impls
                .iter()
                .all(|item_impl| item_impl.attrs.iter().any(|attr| attr.path().is_ident("cfg")))
        );
    }

    #[test]
    fn test_owner_gets_drop() {
        let file = expand_file(quote! {
            pub struct Slot<'a, T: Clone>
            where
                T: Default,
            {
                items: &'a [T],
                #[property(get = pub first)]
                pub first: T,
            }
        });

        let drops = impls_for(&file, "Slot")
            .into_iter()
            .filter(|item_impl| item_impl.trait_.is_some())
            .collect::<Vec<_>>();
        assert_eq!(drops.len(), 1);

        let drop_impl = drops[0];
        let (_, trait_path, _) = drop_impl.trait_.as_ref().unwrap();
        assert_eq!(trait_path.segments.last().unwrap().ident, "Drop");
        assert_eq!(drop_impl.generics.params.len(), 2);
        assert!(drop_impl.generics.where_clause.is_some());
        assert!(
            drop_fn(drop_impl).block.stmts.is_empty(),
            "drop must be a no-op without a hook:\n{}",
            prettyplease::unparse(&file)
        );
    }

    #[test]
    fn test_drop_hook_is_called() {
        let file = expand_file_with(
            quote!(drop = release),
            quote! {
                struct Lease {
                    ticks: u32,
                    #[property(get = ticks)]
                    ticks_left: u32,
                }
            },
        );

        let drop_impl = impls_for(&file, "Lease")
            .into_iter()
            .find(|item_impl| item_impl.trait_.is_some())
            .unwrap();
        let body = drop_fn(drop_impl).block.to_token_stream().to_string();
        assert_eq!(body, "{ < Lease > :: release (self) ; }");
    }

    #[test]
    fn test_rejects_unknown_argument() {
        insta::assert_snapshot!(
            expand_error(quote!(debug), quote!(struct A { x: u8 })),
            @"expected `drop = method`"
        );
    }

    #[test]
    fn test_rejects_second_drop_hook() {
        insta::assert_snapshot!(
            expand_error(quote!(drop = a, drop = b), quote!(struct A { x: u8 })),
            @"duplicate `drop` hook"
        );
    }

    #[test]
    fn test_rejects_colliding_type_names() {
        insta::assert_snapshot!(
            expand_error(quote!(), quote! {
                struct Gauge {
                    raw: u8,
                    #[property(get = level)]
                    level: u8,
                    #[property(get = level)]
                    _level: u8,
                    #[property(get = level)]
                    level_: u8,
                }
            }),
            @r"
        fields `level` and `_level` both generate `GaugeLevelProperty`
        fields `_level` and `level_` both generate `GaugeLevelProperty`
        "
        );
    }

    #[test]
    fn test_rejects_underscore_only_name() {
        insta::assert_snapshot!(
            expand_error(quote!(), quote! {
                struct Gauge {
                    #[property(get = level)]
                    __: u8,
                }
            }),
            @"`__` has no letters or digits to name a property type after"
        );
    }

    #[test]
    fn test_rejects_enum() {
        insta::assert_snapshot!(
            expand_error(quote!(), quote!(enum A { X })),
            @"properties can only be declared on structs, not enums"
        );
    }

    #[test]
    fn test_rejects_tuple_struct() {
        insta::assert_snapshot!(
            expand_error(quote!(), quote!(struct A(u8);)),
            @"properties need named fields, the field name locates the property"
        );
    }

    #[test]
    fn test_rejects_public_storage() {
        insta::assert_snapshot!(
            expand_error(quote!(), quote! {
                struct A {
                    pub raw: u8,
                    #[property(get = pub level)]
                    pub level: u8,
                }
            }),
            @"fields of a struct with properties must be private unless they are properties"
        );
    }

    #[test]
    fn test_collects_every_error() {
        insta::assert_snapshot!(
            expand_error(quote!(), quote! {
                struct A {
                    #[property(get = a)]
                    #[property(set = b)]
                    twice: u8,
                    #[property()]
                    empty: u8,
                }
            }),
            @r"
        duplicate `#[property]` attribute
        a property needs at least one of `get` or `set`
        "
        );
    }
}
