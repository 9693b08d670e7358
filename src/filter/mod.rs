pub mod criteria;
pub mod engine;
pub mod patterns;


pub use criteria::*;
pub use engine::*;
pub use patterns::*;
