pub mod batch;
pub mod effect;
pub mod event;
pub mod intent;
pub mod key_bindings;
pub mod reducer;

pub use batch::UpdateBatch;
pub use effect::Effect;
pub use event::ValueChange;
pub use intent::Intent;
pub use key_bindings::KeyBindings;
pub use reducer::Reducer;
