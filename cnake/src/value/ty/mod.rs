pub mod none;
pub mod number;

pub use none::NoneType;
pub use number::Number;
