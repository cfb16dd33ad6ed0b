mod step_renderer;

pub use step_renderer::{MountChange, StepRenderer};
