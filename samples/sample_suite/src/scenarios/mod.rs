pub mod employees;
pub mod timeoffs;
