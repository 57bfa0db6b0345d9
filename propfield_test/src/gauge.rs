use std::cell::Cell;

use propfield::properties;

/// A level clamped to `0..=100` next to a read-only view of twice its base.
///
/// `doubled` has no setter, so it cannot be written:
/// ```compile_fail
/// let mut gauge = propfield_test::Gauge::new(1);
/// gauge.doubled.set(4);
/// ```
///
/// only this module may construct its properties:
/// ```compile_fail
/// let _level = propfield_test::GaugeLevelProperty::new();
/// ```
///
/// and a property cannot be moved out of its gauge:
/// ```compile_fail
/// let gauge = propfield_test::Gauge::new(1);
/// let level = gauge.level;
/// let _ = level.get();
/// ```
/// ```compile_fail
/// let gauge = propfield_test::Gauge::new(21);
/// let moved = Box::new(gauge.doubled);
/// let _ = moved.get();
/// ```
///
/// Recovering the gauge from a property borrow needs `unsafe`:
/// ```compile_fail
/// let mut gauge = propfield_test::Gauge::new(1);
/// let (level, doubled) = (&mut gauge.level, &gauge.doubled);
/// let shared = propfield::internal::owner(doubled);
/// let exclusive = propfield::internal::owner_mut(level);
/// exclusive.set_base(99);
/// let _ = shared.base();
/// ```
#[properties]
#[derive(Debug)]
pub struct Gauge {
    raw: i32,
    base: i32,
    reads: Cell<u32>,
    #[property(get = pub level, set = pub set_level)]
    pub level: i32,
    #[property(get = pub doubled)]
    pub doubled: i32,
}

impl Gauge {
    pub fn new(base: i32) -> Self {
        Gauge {
            raw: 0,
            base,
            reads: Cell::new(0),
            level: GaugeLevelProperty::new(),
            doubled: GaugeDoubledProperty::new(),
        }
    }

    pub fn base(&self) -> i32 {
        self.base
    }

    pub fn set_base(&mut self, base: i32) {
        self.base = base;
    }

    /// How many times a getter ran.
    pub fn reads(&self) -> u32 {
        self.reads.get()
    }

    fn level(&self) -> i32 {
        self.reads.set(self.reads.get() + 1);
        self.raw
    }

    fn set_level(&mut self, value: i32) {
        self.raw = value.clamp(0, 100);
    }

    fn doubled(&self) -> i32 {
        self.reads.set(self.reads.get() + 1);
        self.base * 2
    }
}
