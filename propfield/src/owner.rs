use core::ptr;

use crate::field::{PropertyField, assert_layout};

/// Recovers the struct that `property` is embedded in.
///
/// The property is zero-sized, so its address is the address of its slot in the
/// owner; stepping back [`PropertyField::OFFSET`] bytes lands on the owner itself.
///
/// # Safety
/// `property` must be the field at `OFFSET` inside a live `Owner`, and no
/// mutable borrow of any part of that owner may be used while the returned
/// reference is alive.
#[inline(always)]
pub unsafe fn owner<P: PropertyField>(property: &P) -> &P::Owner {
    assert_layout::<P>();
    // SAFETY: the caller guarantees `property` sits at `OFFSET` inside a live
    // owner, so the adjusted pointer is in bounds and points at its start.
    unsafe {
        &*ptr::from_ref(property)
            .byte_sub(P::OFFSET)
            .cast::<P::Owner>()
    }
}

/// Mutable counterpart of [`owner`].
///
/// # Safety
/// As for [`owner`], and additionally no other borrow of any part of the owner
/// may be used while the returned reference is alive.
#[inline(always)]
pub unsafe fn owner_mut<P: PropertyField>(property: &mut P) -> &mut P::Owner {
    assert_layout::<P>();
    // SAFETY: placement as in `owner`; exclusivity is the caller's contract.
    unsafe {
        &mut *ptr::from_mut(property)
            .byte_sub(P::OFFSET)
            .cast::<P::Owner>()
    }
}
