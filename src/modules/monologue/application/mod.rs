pub mod domain;
pub mod monologue_use_cases;
pub mod ports;
pub mod service;

pub use monologue_use_cases::MonologueUseCases;
