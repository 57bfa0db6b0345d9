use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Attribute, Generics, Ident, Type, Visibility};

use super::property_attr::{Accessor, PropertyKind};

/// Everything needed to generate the property type for one field.
pub struct PropertyDecl<'a> {
    /// Name of the generated type, see [`property_type_ident`].
    pub ident: &'a Ident,
    pub owner: &'a Ident,
    pub generics: &'a Generics,
    pub field: &'a Ident,
    /// The owner's visibility, reused for the generated type.
    pub vis: &'a Visibility,
    pub value: &'a Type,
    pub kind: &'a PropertyKind,
    pub cfgs: Vec<&'a Attribute>,
}

/// `GaugeLevelProperty` for the field `level` of `Gauge`.
pub fn property_type_ident(owner: &Ident, field: &Ident) -> syn::Result<Ident> {
    let camel = field
        .unraw()
        .to_string()
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<String>();

    if camel.is_empty() {
        return Err(syn::Error::new(
            field.span(),
            format!("`{field}` has no letters or digits to name a property type after"),
        ));
    }

    Ok(format_ident!(
        "{}{}Property",
        owner.unraw(),
        camel,
        span = field.span()
    ))
}

/// Generates the zero-sized property type, its `PropertyField` implementation
/// and the `get`/`set`/`assign` surface allowed by its kind.
pub fn gen_property_type(root: &TokenStream, decl: &PropertyDecl<'_>) -> TokenStream {
    let PropertyDecl {
        ident,
        owner,
        generics,
        field,
        vis,
        value,
        kind,
        cfgs,
    } = decl;

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let owner_ty = quote!(#owner #ty_generics);
    let where_decl = &generics.where_clause;

    let name = ident.to_string();
    let doc = format!(" Zero-sized property `{field}` of `{owner}`.");
    let gettable = kind.getter().is_some();
    let settable = kind.setter().is_some();

    let read_surface = kind
        .getter()
        .map(|getter| gen_read_surface(root, &owner_ty, value, getter));
    let write_surface = kind
        .setter()
        .map(|setter| gen_write_surface(root, &owner_ty, value, setter));
    let assign_surface = match kind {
        PropertyKind::ReadWrite { getter, setter } => {
            Some(gen_assign_surface(root, &owner_ty, getter, setter))
        }
        _ => None,
    };

    quote! {
        #(#cfgs)*
        #[doc = #doc]
        #vis struct #ident #generics #where_decl {
            _owner: #root::internal::PhantomData<fn() -> #owner_ty>,
        }

        #(#cfgs)*
        #[allow(dead_code, reason = "generated code")]
        impl #impl_generics #ident #ty_generics #where_clause {
            /// Creates the property. Only valid as the initializer of its field.
            const fn new() -> Self {
                Self {
                    _owner: #root::internal::PhantomData,
                }
            }

            #read_surface
            #write_surface
            #assign_surface
        }

        #(#cfgs)*
        unsafe impl #impl_generics #root::PropertyField for #ident #ty_generics #where_clause {
            type Owner = #owner_ty;
            type Value = #value;
            const OFFSET: usize = #root::internal::offset_of!(#owner_ty, #field);
            const GETTABLE: bool = #gettable;
            const SETTABLE: bool = #settable;
        }

        #(#cfgs)*
        impl #impl_generics #root::internal::fmt::Debug for #ident #ty_generics #where_clause {
            fn fmt(
                &self,
                f: &mut #root::internal::fmt::Formatter<'_>,
            ) -> #root::internal::fmt::Result {
                f.write_str(#name)
            }
        }
    }
}

fn gen_read_surface(
    root: &TokenStream,
    owner_ty: &TokenStream,
    value: &Type,
    getter: &Accessor,
) -> TokenStream {
    let Accessor { vis, method } = getter;
    quote! {
        /// Reads the value through the owner's getter.
        #[inline]
        #vis fn get(&self) -> #value {
            unsafe { #root::internal::get(self, <#owner_ty>::#method) }
        }
    }
}

fn gen_write_surface(
    root: &TokenStream,
    owner_ty: &TokenStream,
    value: &Type,
    setter: &Accessor,
) -> TokenStream {
    let Accessor { vis, method } = setter;
    quote! {
        /// Writes the value through the owner's setter.
        #[inline]
        #vis fn set(&mut self, value: #value) {
            unsafe { #root::internal::set(self, value, <#owner_ty>::#method) }
        }
    }
}

fn gen_assign_surface(
    root: &TokenStream,
    owner_ty: &TokenStream,
    getter: &Accessor,
    setter: &Accessor,
) -> TokenStream {
    let get_method = &getter.method;
    let Accessor {
        vis,
        method: set_method,
    } = setter;
    quote! {
        /// Copies the value of `source`, read through its own owner, into this
        /// property's owner.
        #[inline]
        #vis fn assign(&mut self, source: &Self) {
            unsafe {
                #root::internal::assign(
                    self,
                    source,
                    <#owner_ty>::#get_method,
                    <#owner_ty>::#set_method,
                )
            }
        }
    }
}
