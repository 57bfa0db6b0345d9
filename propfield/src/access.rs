//! The forwarding half of the property core.
//!
//! Accessors arrive as function items, which are zero-sized and resolved at
//! compile time, so each call below monomorphizes to a direct call of the bound
//! getter or setter on the recovered owner.

use crate::field::PropertyField;
use crate::owner::{owner, owner_mut};

/// Reads a property by calling `getter` on its owner.
///
/// # Safety
/// `property` must sit inside a live owner that nothing borrows mutably for the
/// duration of the call (see [`owner`]).
#[inline(always)]
pub unsafe fn get<P, G>(property: &P, getter: G) -> P::Value
where
    P: PropertyField,
    G: FnOnce(&P::Owner) -> P::Value,
{
    const { assert!(P::GETTABLE, "property has no getter bound") };
    // SAFETY: forwarded to the caller.
    getter(unsafe { owner(property) })
}

/// Writes a property by calling `setter` on its owner.
///
/// # Safety
/// `property` must sit inside a live owner, and no other borrow of that owner
/// may be used during the call (see [`owner_mut`]).
#[inline(always)]
pub unsafe fn set<P, S>(property: &mut P, value: P::Value, setter: S)
where
    P: PropertyField,
    S: FnOnce(&mut P::Owner, P::Value),
{
    const { assert!(P::SETTABLE, "property has no setter bound") };
    // SAFETY: forwarded to the caller.
    setter(unsafe { owner_mut(property) }, value)
}

/// Copies the value of `source` into `target`.
///
/// The value is read from `source`'s owner and handed to `target`'s setter;
/// the two properties stay tied to their own owners.
///
/// # Safety
/// The requirements of [`get`] for `source` and of [`set`] for `target`.
#[inline(always)]
pub unsafe fn assign<P, G, S>(target: &mut P, source: &P, getter: G, setter: S)
where
    P: PropertyField,
    G: FnOnce(&P::Owner) -> P::Value,
    S: FnOnce(&mut P::Owner, P::Value),
{
    // SAFETY: forwarded to the caller.
    unsafe {
        let value = get(source, getter);
        set(target, value, setter);
    }
}
