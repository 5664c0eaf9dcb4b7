use super::*;

pub use self::{instruction::Instruction, instructions::Instructions, tapscript::tapscript};

mod instruction;
mod instructions;
pub mod opcodes;
mod tapscript;
