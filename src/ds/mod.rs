pub mod freq_index;
pub mod key_list;
pub mod slot_arena;

pub use freq_index::FreqIndex;
pub use key_list::KeyList;
pub use slot_arena::{SlotArena, SlotId};
