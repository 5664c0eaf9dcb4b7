use super::*;

pub(crate) const PROTOCOL_ID: [u8; 3] = *b"ord";
pub(crate) const BODY_TAG: [u8; 0] = [];

pub type RawEnvelope = Envelope<Vec<Vec<u8>>>;
pub type ParsedEnvelope = Envelope<Inscription>;

/// An `OP_FALSE OP_IF "ord" … OP_ENDIF` fragment found in a tapscript.
#[derive(Default, PartialEq, Clone, Serialize, Deserialize, Debug, Eq)]
pub struct Envelope<T> {
  pub input: u32,
  pub offset: u32,
  pub payload: T,
  pub pushnum: bool,
  pub stutter: bool,
}

impl RawEnvelope {
  /// Envelopes from every input of `transaction`. Inputs that fail to
  /// decode contribute nothing.
  pub fn from_transaction(transaction: &Transaction) -> Vec<Self> {
    let mut envelopes = Vec::new();

    for (input, txin) in (0..).zip(&transaction.input) {
      match Self::from_input(input, &txin.witness) {
        Ok(input_envelopes) => envelopes.extend(input_envelopes),
        Err(err) => log::debug!("skipping input {input}: {err}"),
      }
    }

    envelopes
  }

  pub fn from_input(input: u32, witness: &Witness) -> DecodeResult<Vec<Self>> {
    Self::from_tapscript(script::tapscript(witness)?, input)
  }

  pub fn from_tapscript(tapscript: &[u8], input: u32) -> DecodeResult<Vec<Self>> {
    let mut scanner = EnvelopeScanner {
      input,
      instructions: Instructions::new(tapscript),
      offset: 0,
      stuttered: false,
    };

    let mut envelopes = Vec::new();

    loop {
      match scanner.next_envelope() {
        Ok(envelope) => envelopes.push(envelope),
        Err(DecodeError::NoInscriptionFound) => return Ok(envelopes),
        Err(err) => return Err(err),
      }
    }
  }
}

struct EnvelopeScanner<'a> {
  input: u32,
  instructions: Instructions<'a>,
  offset: u32,
  stuttered: bool,
}

impl<'a> EnvelopeScanner<'a> {
  /// Scans forward to the next complete envelope. Returns
  /// `NoInscriptionFound` once the script is exhausted.
  fn next_envelope(&mut self) -> DecodeResult<RawEnvelope> {
    while let Some(instruction) = self.instructions.next().transpose()? {
      if instruction.is_empty_push() {
        if let Some(envelope) = self.parse_envelope()? {
          return Ok(envelope);
        }
      }
    }

    NoInscriptionFound.fail()
  }

  fn accept(&mut self, instruction: Instruction) -> DecodeResult<bool> {
    if self.instructions.peek() == Some(&Ok(instruction)) {
      self.instructions.next().transpose()?;
      Ok(true)
    } else {
      Ok(false)
    }
  }

  fn parse_envelope(&mut self) -> DecodeResult<Option<RawEnvelope>> {
    if !self.accept(Instruction::Op(opcodes::all::OP_IF))?
      || !self.accept(Instruction::PushBytes(&PROTOCOL_ID))?
    {
      self.stuttered = matches!(
        self.instructions.peek(),
        Some(Ok(instruction)) if instruction.is_empty_push()
      );
      return Ok(None);
    }

    let mut pushnum = false;

    let mut payload = Vec::new();

    while let Some(instruction) = self.instructions.next().transpose()? {
      match instruction {
        Instruction::Op(opcodes::all::OP_ENDIF) => {
          let envelope = RawEnvelope {
            input: self.input,
            offset: self.offset,
            payload,
            pushnum,
            stutter: self.stuttered,
          };

          log::trace!(
            "found envelope at input {} offset {} with {} pushes",
            envelope.input,
            envelope.offset,
            envelope.payload.len(),
          );

          self.offset = self
            .offset
            .checked_add(1)
            .ok_or(DecodeError::NumericOverflow)?;

          return Ok(Some(envelope));
        }
        Instruction::PushBytes(push) => payload.push(push.to_vec()),
        Instruction::Op(opcode) => match opcode.classify(ClassifyContext::TapScript) {
          Class::PushNum(n) => {
            pushnum = true;
            payload.push(vec![pushnum_byte(n)?]);
          }
          _ => break,
        },
      }
    }

    self.stuttered = false;

    Ok(None)
  }
}

fn pushnum_byte(n: i32) -> DecodeResult<u8> {
  if n == -1 {
    Ok(0x81)
  } else {
    u8::try_from(n).map_err(|_| DecodeError::NumericOverflow)
  }
}
