//! cordboot: Bootstrap the CORD-19 analysis project in place.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, DEFAULT_PYTHON, DoctorOptions, DoctorOutcome, SampleStatus, SetupOptions,
    SetupOutcome, doctor_at, generate_sample_at, setup, setup_at,
};
