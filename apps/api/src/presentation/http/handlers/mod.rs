pub mod analyze;
pub mod docs;
pub mod health;
