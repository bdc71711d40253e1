pub mod backend;
pub mod form;
