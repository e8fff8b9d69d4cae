pub mod reconstructor;
pub mod symbol;
pub mod target;
pub mod unicode;
