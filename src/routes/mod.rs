pub mod answers;
pub mod docs;
pub mod health;
pub mod questions;
