pub(crate) mod gauge;
pub(crate) mod journal;
pub(crate) mod slot;

pub use gauge::{Gauge, GaugeDoubledProperty, GaugeLevelProperty};
pub use journal::{Journal, JournalEntryProperty};
pub use slot::{Slot, SlotCurrentProperty};
