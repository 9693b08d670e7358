// Contracts of the form relays the widget talks to. The relays themselves
// live outside this crate; only their request and response shapes are here.

pub mod csrf;
pub mod signup;
pub mod submission;

pub use csrf::*;
pub use signup::*;
pub use submission::*;
