//! Zero-sized, field-like properties.
//!
//! A property is a struct field that stores nothing. Reading it calls a getter
//! on the struct that contains it, writing it calls a setter. The property finds
//! that struct from its own address and the field offset the compiler computed,
//! so it needs neither a back-pointer nor any other per-instance storage.
//!
//! ```rust
//! use propfield::properties;
//!
//! #[properties]
//! pub struct Gauge {
//!     raw: u8,
//!     base: i32,
//!     #[property(get = pub level, set = pub set_level)]
//!     pub level: u8,
//!     #[property(get = pub doubled)]
//!     pub doubled: i32,
//! }
//!
//! impl Gauge {
//!     pub fn new(base: i32) -> Self {
//!         Gauge {
//!             raw: 0,
//!             base,
//!             level: GaugeLevelProperty::new(),
//!             doubled: GaugeDoubledProperty::new(),
//!         }
//!     }
//!
//!     fn level(&self) -> u8 {
//!         self.raw
//!     }
//!
//!     fn set_level(&mut self, value: u8) {
//!         self.raw = value.min(100);
//!     }
//!
//!     fn doubled(&self) -> i32 {
//!         self.base * 2
//!     }
//! }
//!
//! let mut gauge = Gauge::new(21);
//! gauge.level.set(150);
//! assert_eq!(gauge.level.get(), 100);
//! assert_eq!(gauge.doubled.get(), 42);
//! assert_eq!(std::mem::size_of::<Gauge>(), std::mem::size_of::<(u8, i32)>());
//! ```
//!
//! # Declaring properties
//! Put [`#[properties]`](properties) on the owning struct and mark each property
//! field with `#[property(..)]`:
//!
//! - `#[property(get = [vis] getter, set = [vis] setter)]` declares a read-write
//!   property with `get`, `set` and `assign` methods,
//! - `#[property(get = [vis] getter)]` declares a read-only property,
//! - `#[property(set = [vis] setter)]` declares a write-only property.
//!
//! The getter must be a method `fn(&self) -> T` and the setter a method
//! `fn(&mut self, T)` on the owner, where `T` is the type written on the field.
//! The visibility in front of each accessor becomes the visibility of the
//! generated `get` or `set`; it defaults to private.
//!
//! For every property field the macro generates a zero-sized type named after the
//! owner and the field in `CamelCase` (`level` in `Gauge` becomes
//! `GaugeLevelProperty`) and replaces the field type with it. Its `new`
//! constructor is private to the owner's module. Two fields that map to the same
//! type name, such as `level` and `_level`, are rejected.
//!
//! The macro also implements `Drop` for the owner, so a property can never be
//! moved out of it. An owner that needs its own drop logic names a method
//! `fn(&mut self)` with `#[properties(drop = method)]` instead of writing a
//! `Drop` impl:
//!
//! ```rust
//! use std::cell::Cell;
//!
//! #[propfield::properties(drop = release)]
//! struct Lease<'a> {
//!     released: &'a Cell<bool>,
//!     ticks: u32,
//!     #[property(get = ticks)]
//!     ticks_left: u32,
//! }
//!
//! impl Lease<'_> {
//!     fn ticks(&self) -> u32 {
//!         self.ticks
//!     }
//!
//!     fn release(&mut self) {
//!         self.released.set(true);
//!     }
//! }
//!
//! let released = Cell::new(false);
//! let lease = Lease {
//!     released: &released,
//!     ticks: 3,
//!     ticks_left: LeaseTicksLeftProperty::new(),
//! };
//! assert_eq!(lease.ticks_left.get(), 3);
//! drop(lease);
//! assert!(released.get());
//! ```
//!
//! # Compile-time rejections
//! Writing a read-only property does not compile:
//! ```compile_fail
//! # use propfield::properties;
//! #[properties]
//! struct Base {
//!     base: i32,
//!     #[property(get = pub doubled)]
//!     doubled: i32,
//! }
//! impl Base {
//!     fn doubled(&self) -> i32 { self.base * 2 }
//! }
//! let mut b = Base { base: 1, doubled: BaseDoubledProperty::new() };
//! b.doubled.set(4);
//! ```
//!
//! Reading a write-only property does not compile:
//! ```compile_fail
//! # use propfield::properties;
//! #[properties]
//! struct Sink {
//!     last: u32,
//!     #[property(set = pub push)]
//!     input: u32,
//! }
//! impl Sink {
//!     fn push(&mut self, value: u32) { self.last = value; }
//! }
//! let s = Sink { last: 0, input: SinkInputProperty::new() };
//! let _ = s.input.get();
//! ```
//!
//! A property cannot be copied out of its owner:
//! ```compile_fail
//! # use propfield::properties;
//! #[properties]
//! struct Base {
//!     base: i32,
//!     #[property(get = pub doubled)]
//!     doubled: i32,
//! }
//! impl Base {
//!     fn doubled(&self) -> i32 { self.base * 2 }
//! }
//! let b = Base { base: 1, doubled: BaseDoubledProperty::new() };
//! let _copy = b.doubled.clone();
//! ```
//!
//! Nor moved out of it, into a local or onto the heap:
//! ```compile_fail
//! # use propfield::properties;
//! #[properties]
//! struct Base {
//!     base: i32,
//!     #[property(get = pub doubled)]
//!     doubled: i32,
//! }
//! impl Base {
//!     fn doubled(&self) -> i32 { self.base * 2 }
//! }
//! let b = Base { base: 1, doubled: BaseDoubledProperty::new() };
//! let moved = b.doubled;
//! let _ = moved.get();
//! ```
//! ```compile_fail
//! # use propfield::properties;
//! #[properties]
//! struct Base {
//!     base: i32,
//!     #[property(get = pub doubled)]
//!     doubled: i32,
//! }
//! impl Base {
//!     fn doubled(&self) -> i32 { self.base * 2 }
//! }
//! let b = Base { base: 1, doubled: BaseDoubledProperty::new() };
//! let boxed = Box::new(b.doubled);
//! let _ = boxed.get();
//! ```
//!
//! Destructuring the owner is rejected the same way:
//! ```compile_fail
//! # use propfield::properties;
//! #[properties]
//! struct Base {
//!     base: i32,
//!     #[property(get = pub doubled)]
//!     doubled: i32,
//! }
//! impl Base {
//!     fn doubled(&self) -> i32 { self.base * 2 }
//! }
//! let b = Base { base: 1, doubled: BaseDoubledProperty::new() };
//! let Base { doubled, .. } = b;
//! ```
//!
//! A hand-written `Drop` conflicts with the one the macro generates; use
//! `#[properties(drop = method)]`:
//! ```compile_fail
//! # use propfield::properties;
//! #[properties]
//! struct Base {
//!     base: i32,
//!     #[property(get = pub doubled)]
//!     doubled: i32,
//! }
//! impl Base {
//!     fn doubled(&self) -> i32 { self.base * 2 }
//! }
//! impl Drop for Base {
//!     fn drop(&mut self) {}
//! }
//! ```
//!
//! Owner recovery is not available to safe code, even from a property borrow:
//! ```compile_fail
//! # use propfield::properties;
//! #[properties]
//! struct Base {
//!     base: i32,
//!     #[property(get = pub doubled)]
//!     doubled: i32,
//! }
//! impl Base {
//!     fn doubled(&self) -> i32 { self.base * 2 }
//! }
//! let mut b = Base { base: 1, doubled: BaseDoubledProperty::new() };
//! let _owner: &mut Base = propfield::internal::owner_mut(&mut b.doubled);
//! ```
//!
//! A property needs at least one accessor:
//! ```compile_fail
//! # use propfield::properties;
//! #[properties]
//! struct Empty {
//!     #[property()]
//!     nothing: u8,
//! }
//! ```
//!
//! A hand-written [`PropertyField`] must name a real member of its owner:
//! ```compile_fail
//! struct Marker;
//! struct Owner {
//!     marker: Marker,
//! }
//! unsafe impl propfield::PropertyField for Marker {
//!     type Owner = Owner;
//!     type Value = u8;
//!     const OFFSET: usize = core::mem::offset_of!(Owner, missing);
//!     const GETTABLE: bool = true;
//!     const SETTABLE: bool = false;
//! }
//! ```
//!
//! And a hand-written [`PropertyField`] must be zero-sized:
//! ```compile_fail
//! use core::mem::offset_of;
//! struct Fat(u32);
//! struct Owner {
//!     fat: Fat,
//! }
//! unsafe impl propfield::PropertyField for Fat {
//!     type Owner = Owner;
//!     type Value = u32;
//!     const OFFSET: usize = offset_of!(Owner, fat);
//!     const GETTABLE: bool = true;
//!     const SETTABLE: bool = false;
//! }
//! propfield::assert_layout::<Fat>();
//! ```
//!
//! # Restrictions
//! A property only works while it sits inside its owner. The generated types
//! implement neither `Clone`, `Copy` nor `Default`, only the owner's module can
//! construct them, and the generated `Drop` on the owner rules out moving them
//! out. Inside the owner's module, call a property's `new` only as the
//! initializer of its field.
//!
//! The owner's other fields must stay private. Property fields themselves are
//! separate fields to the borrow checker, which does not see that a property
//! call reaches the whole owner: do not hold a borrow of one property field
//! across a `set` or `assign` on another property of the same owner.
//!
//! Owner recovery derives the owner from a borrow of a zero-sized field. The
//! Tree Borrows aliasing model accepts this; Stacked Borrows, which Miri checks
//! by default, does not, so run Miri with `-Zmiri-tree-borrows`.
//!
//! Properties add no synchronization; a property call behaves exactly like a
//! direct call to the bound accessor.

#![no_std]

extern crate self as propfield;

mod access;
mod field;
mod owner;

pub use field::{PropertyField, assert_layout};
pub use propfield_macro::properties;

#[doc(hidden)]
pub mod internal {
    pub use core::fmt;
    pub use core::marker::PhantomData;
    pub use core::mem::offset_of;
    pub use core::ops::Drop;

    pub use crate::access::{assign, get, set};
    pub use crate::owner::{owner, owner_mut};
}
