pub mod config;
pub mod core;
pub mod error;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod ui;

pub use config::FormDefinition;
pub use error::{FormError, Result};

pub use runtime::{Effect, Intent, KeyBindings, UpdateBatch};

pub use state::form::{FormSnapshot, MultiStepForm};
pub use state::session::{FormSession, SessionSnapshot};
pub use state::step::StepDescriptor;
pub use state::store::ValueStore;

pub use ui::renderer::{RenderFrame, Renderer};
