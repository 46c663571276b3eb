//! Arithmetic tools operating on two numeric operands.

pub mod add;
pub mod multiply;
mod operands;

pub use add::AddTool;
pub use multiply::MultiplyTool;
pub use operands::BinaryOperands;
