pub mod notice;
pub mod tool;
