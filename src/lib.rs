// Emulator front-end input core

pub mod engine;
