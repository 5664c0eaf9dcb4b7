use {
  super::*,
  std::iter::{self, FusedIterator},
};

/// Cursor over the instructions of a raw script with one slot of lookahead.
///
/// A decode error kills the stream. The error is yielded once and every
/// later read reports end of script.
#[derive(Debug, Clone)]
pub struct Instructions<'a> {
  data: &'a [u8],
  enforce_minimal: bool,
  peeked: Option<Peeked<'a>>,
  position: usize,
}

#[derive(Debug, Clone)]
struct Peeked<'a> {
  checkpoint: usize,
  instruction: Option<DecodeResult<Instruction<'a>>>,
}

impl<'a> Instructions<'a> {
  pub fn new(script: &'a [u8]) -> Self {
    Self {
      data: script,
      enforce_minimal: false,
      peeked: None,
      position: 0,
    }
  }

  /// Like [`Instructions::new`], but rejects pushes that violate BIP62
  /// minimality.
  pub fn minimal(script: &'a [u8]) -> Self {
    Self {
      enforce_minimal: true,
      ..Self::new(script)
    }
  }

  pub fn peek(&mut self) -> Option<&DecodeResult<Instruction<'a>>> {
    if self.peeked.is_none() {
      self.peeked = Some(self.decode());
    }

    self
      .peeked
      .as_ref()
      .and_then(|peeked| peeked.instruction.as_ref())
  }

  /// Pairs each instruction with the opcode that encoded it, so a
  /// `OP_PUSHDATA1` push stays distinguishable from a direct push.
  pub fn encoded(mut self) -> impl Iterator<Item = DecodeResult<(Opcode, Instruction<'a>)>> {
    iter::from_fn(move || {
      let opcode = Opcode::from(*self.data.get(self.position)?);
      Some(self.next()?.map(|instruction| (opcode, instruction)))
    })
  }

  fn decode(&self) -> Peeked<'a> {
    let Some(&byte) = self.data.get(self.position) else {
      return Peeked {
        checkpoint: self.position,
        instruction: None,
      };
    };

    let position = self.position + 1;

    let push = match Opcode::from(byte).classify(ClassifyContext::Legacy) {
      Class::PushBytes(n) => match (self.enforce_minimal, self.data.get(position), n) {
        (true, Some(&next), 1) if next == 0x81 || (1..=16).contains(&next) => {
          Err(DecodeError::NonMinimalPush)
        }
        (_, None, 0) => Ok((&[][..], position)),
        _ => usize::try_from(n)
          .map_err(|_| DecodeError::NumericOverflow)
          .and_then(|n| self.take(position, n)),
      },
      Class::Ordinary(Ordinary::OP_PUSHDATA1) => self.push_data(position, 1, 76),
      Class::Ordinary(Ordinary::OP_PUSHDATA2) => self.push_data(position, 2, 0x100),
      Class::Ordinary(Ordinary::OP_PUSHDATA4) => self.push_data(position, 4, 0x10000),
      _ => {
        return Peeked {
          checkpoint: position,
          instruction: Some(Ok(Instruction::Op(Opcode::from(byte)))),
        }
      }
    };

    match push {
      Ok((bytes, checkpoint)) => Peeked {
        checkpoint,
        instruction: Some(Ok(Instruction::PushBytes(bytes))),
      },
      Err(err) => Peeked {
        checkpoint: self.data.len(),
        instruction: Some(Err(err)),
      },
    }
  }

  fn push_data(
    &self,
    position: usize,
    size: usize,
    min_len: usize,
  ) -> DecodeResult<(&'a [u8], usize)> {
    let (len, position) = self.take(position, size)?;

    let len = len
      .iter()
      .rev()
      .fold(0u64, |acc, &byte| acc << 8 | u64::from(byte));

    let len = usize::try_from(len).map_err(|_| DecodeError::NumericOverflow)?;

    ensure!(!self.enforce_minimal || len >= min_len, NonMinimalPush);

    self.take(position, len)
  }

  fn take(&self, position: usize, len: usize) -> DecodeResult<(&'a [u8], usize)> {
    let end = position
      .checked_add(len)
      .ok_or(DecodeError::NumericOverflow)?;

    let bytes = self
      .data
      .get(position..end)
      .ok_or(DecodeError::EarlyEndOfScript)?;

    Ok((bytes, end))
  }
}

impl<'a> Iterator for Instructions<'a> {
  type Item = DecodeResult<Instruction<'a>>;

  fn next(&mut self) -> Option<Self::Item> {
    let Peeked {
      checkpoint,
      instruction,
    } = match self.peeked.take() {
      Some(peeked) => peeked,
      None => self.decode(),
    };

    self.position = checkpoint;

    instruction
  }
}

impl FusedIterator for Instructions<'_> {}
