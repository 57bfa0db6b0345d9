use core::mem::{align_of, size_of};

/// Type-level description of a property embedded in an owner struct.
///
/// Implemented by the types that [`#[properties]`](crate::properties) generates
/// for each `#[property(..)]` field. An implementation says which struct the
/// property lives in, what value it forwards, and at which byte offset inside
/// that struct it sits. Nothing is stored at runtime.
///
/// # Safety
/// Implementors must guarantee that:
/// - `Self` is zero-sized with an alignment of one,
/// - every value of `Self` that is ever borrowed lives inside an `Owner`, as the
///   field whose offset is [`OFFSET`](Self::OFFSET),
/// - `OFFSET` is exactly `core::mem::offset_of!(Owner, field)`.
///
/// Size, alignment and the offset bound are also checked at compile time by
/// [`assert_layout`]; placement is up to the implementor.
pub unsafe trait PropertyField: Sized {
    /// The struct that contains the property.
    type Owner: Sized;

    /// The value produced by the getter and accepted by the setter.
    type Value;

    /// Byte offset of the property field inside [`Owner`](Self::Owner).
    const OFFSET: usize;

    /// Whether a getter is bound.
    const GETTABLE: bool;

    /// Whether a setter is bound.
    const SETTABLE: bool;
}

/// Fails the build, during monomorphization, if `P` cannot be used for owner
/// recovery.
#[inline(always)]
pub const fn assert_layout<P: PropertyField>() {
    const {
        assert!(
            size_of::<P>() == 0,
            "a property must be zero-sized to recover its owner"
        );
        assert!(
            align_of::<P>() == 1,
            "a property must have an alignment of one"
        );
        assert!(
            P::OFFSET <= size_of::<P::Owner>(),
            "a property offset must lie within its owner"
        );
        assert!(
            P::GETTABLE || P::SETTABLE,
            "a property needs a getter, a setter, or both"
        );
    }
}
