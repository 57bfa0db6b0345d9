use syn::spanned::Spanned;
use syn::{Attribute, Ident, Visibility};

/// One side of a property binding: the owner method and the visibility of the
/// generated `get` or `set`.
#[derive(Debug, Clone)]
pub struct Accessor {
    pub vis: Visibility,
    pub method: Ident,
}

/// Which accessors a `#[property(..)]` field binds.
#[derive(Debug, Clone)]
pub enum PropertyKind {
    ReadWrite { getter: Accessor, setter: Accessor },
    ReadOnly { getter: Accessor },
    WriteOnly { setter: Accessor },
}

impl PropertyKind {
    pub fn getter(&self) -> Option<&Accessor> {
        match self {
            PropertyKind::ReadWrite { getter, .. } | PropertyKind::ReadOnly { getter } => {
                Some(getter)
            }
            PropertyKind::WriteOnly { .. } => None,
        }
    }

    pub fn setter(&self) -> Option<&Accessor> {
        match self {
            PropertyKind::ReadWrite { setter, .. } | PropertyKind::WriteOnly { setter } => {
                Some(setter)
            }
            PropertyKind::ReadOnly { .. } => None,
        }
    }
}

pub fn is_property_attr(attr: &Attribute) -> bool {
    attr.path().is_ident("property")
}

/// Parses `#[property(get = [vis] method, set = [vis] method)]`.
pub fn parse_property_attr(attr: &Attribute) -> syn::Result<PropertyKind> {
    let mut getter = None;
    let mut setter = None;

    attr.parse_nested_meta(|meta| {
        let slot = if meta.path.is_ident("get") {
            &mut getter
        } else if meta.path.is_ident("set") {
            &mut setter
        } else {
            return Err(meta.error("expected `get` or `set`"));
        };

        if slot.is_some() {
            return Err(meta.error("duplicate accessor"));
        }

        let value = meta.value()?;
        let vis: Visibility = value.parse()?;
        let method: Ident = value.parse()?;
        *slot = Some(Accessor { vis, method });
        Ok(())
    })?;

    match (getter, setter) {
        (Some(getter), Some(setter)) => Ok(PropertyKind::ReadWrite { getter, setter }),
        (Some(getter), None) => Ok(PropertyKind::ReadOnly { getter }),
        (None, Some(setter)) => Ok(PropertyKind::WriteOnly { setter }),
        (None, None) => Err(syn::Error::new(
            attr.span(),
            "a property needs at least one of `get` or `set`",
        )),
    }
}
