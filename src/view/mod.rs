pub mod detail;
pub mod pagination;
pub mod table;

pub use detail::*;
pub use pagination::*;
pub use table::*;
