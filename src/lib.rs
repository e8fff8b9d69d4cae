pub mod config;
pub mod core;
pub mod feedback;
pub mod scoring;

pub use crate::core::reconstructor::{reconstruct, reconstruct_decoded};
pub use crate::core::symbol::{neutralize, parse_stream, CodaClass, Phoneme};
pub use crate::core::target::{decompose_target, decompose_to_jamo};
pub use crate::scoring::engine::{evaluate, score, EvaluationResult};
