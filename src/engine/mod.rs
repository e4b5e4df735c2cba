// Engine modules: input core, emulated systems, turbo

pub mod input;
pub mod system;
pub mod turbo;
