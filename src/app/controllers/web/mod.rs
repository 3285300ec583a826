pub mod errors;
pub mod form;
