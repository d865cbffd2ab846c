pub mod fees;
pub mod platform;
pub mod pool;
pub mod token;

pub use fees::*;
pub use platform::*;
pub use pool::*;
pub use token::*;
