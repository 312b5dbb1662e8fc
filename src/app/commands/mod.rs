pub mod doctor;
pub mod sample;
pub mod setup;
