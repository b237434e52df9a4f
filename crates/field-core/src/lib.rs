pub mod animator;
pub mod burst;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod host;
pub mod input;
pub mod particle;
pub mod profile;
pub mod quantum;

pub use animator::*;
pub use burst::*;
pub use config::*;
pub use error::FieldError;
pub use field::*;
pub use host::*;
pub use input::*;
pub use particle::*;
pub use profile::*;
pub use quantum::*;
