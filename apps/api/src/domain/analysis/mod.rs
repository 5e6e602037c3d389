pub mod errors;
pub mod session;
pub mod value_objects;
