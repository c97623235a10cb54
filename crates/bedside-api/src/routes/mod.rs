pub mod drugs;
pub mod health;
pub mod instruments;
pub mod interval;
pub mod tools;
