pub mod completion;
pub mod form;
pub mod navigator;
pub mod session;
pub mod step;
pub mod store;
pub mod validation;
