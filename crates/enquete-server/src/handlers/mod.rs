pub mod admin;
pub mod export;
pub mod participant;
pub mod results;
