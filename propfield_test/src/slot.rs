use std::mem;

use propfield::properties;

/// Holds a value and remembers every value it replaced.
#[properties]
pub struct Slot<T: Clone> {
    value: T,
    replaced: Vec<T>,
    #[property(get = pub current, set = pub replace)]
    pub current: T,
}

impl<T: Clone> Slot<T> {
    pub fn new(value: T) -> Self {
        Slot {
            value,
            replaced: Vec::new(),
            current: SlotCurrentProperty::new(),
        }
    }

    pub fn replaced(&self) -> &[T] {
        &self.replaced
    }

    fn current(&self) -> T {
        self.value.clone()
    }

    fn replace(&mut self, value: T) {
        let old = mem::replace(&mut self.value, value);
        self.replaced.push(old);
    }
}
