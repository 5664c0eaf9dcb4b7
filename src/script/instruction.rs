use super::*;

/// A decoded script token.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Instruction<'a> {
  PushBytes(&'a [u8]),
  Op(Opcode),
}

impl<'a> Instruction<'a> {
  pub fn push_bytes(self) -> Option<&'a [u8]> {
    match self {
      Self::PushBytes(bytes) => Some(bytes),
      Self::Op(_) => None,
    }
  }

  pub fn opcode(self) -> Option<Opcode> {
    match self {
      Self::PushBytes(_) => None,
      Self::Op(opcode) => Some(opcode),
    }
  }

  pub(crate) fn is_empty_push(self) -> bool {
    self == Self::PushBytes(&[])
  }
}

/// Pushes render with the smallest opcode that can carry their payload,
/// which is not necessarily the one that encoded them.
impl fmt::Display for Instruction<'_> {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Op(opcode) => write!(f, "{opcode}"),
      Self::PushBytes([]) => write!(f, "{}", opcodes::OP_FALSE),
      Self::PushBytes(bytes) => {
        let opcode = match bytes.len() {
          len @ 1..=75 => Opcode::from(u8::try_from(len).unwrap_or_default()),
          76..=0xff => opcodes::all::OP_PUSHDATA1,
          0x100..=0xffff => opcodes::all::OP_PUSHDATA2,
          _ => opcodes::all::OP_PUSHDATA4,
        };

        write!(f, "{opcode} {}", hex::encode(bytes))
      }
    }
  }
}
