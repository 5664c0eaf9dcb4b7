use super::*;

/// Why an inscription is cursed. An uncursed inscription has no `Curse`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, DeserializeFromStr, SerializeDisplay)]
pub enum Curse {
  DuplicateField,
  IncompleteField,
  NotAtOffsetZero,
  NotInFirstInput,
  Pointer,
  Pushnum,
  Reinscription,
  Stutter,
  UnrecognizedEvenField,
}

impl Curse {
  pub const ALL: [Curse; 9] = [
    Self::DuplicateField,
    Self::IncompleteField,
    Self::NotAtOffsetZero,
    Self::NotInFirstInput,
    Self::Pointer,
    Self::Pushnum,
    Self::Reinscription,
    Self::Stutter,
    Self::UnrecognizedEvenField,
  ];

  pub fn title(self) -> &'static str {
    match self {
      Self::DuplicateField => "duplicate-field",
      Self::IncompleteField => "incomplete-field",
      Self::NotAtOffsetZero => "not-at-offset-zero",
      Self::NotInFirstInput => "not-in-first-input",
      Self::Pointer => "pointer",
      Self::Pushnum => "pushnum",
      Self::Reinscription => "reinscription",
      Self::Stutter => "stutter",
      Self::UnrecognizedEvenField => "unrecognized-even-field",
    }
  }

  /// Curse rules of the tagged protocol. Nothing is cursed at or after
  /// `jubilee_height`.
  ///
  /// Reinscriptions depend on what was inscribed earlier on the same sat and
  /// are left to the caller.
  pub fn tagged(envelope: &ParsedEnvelope, height: u32, jubilee_height: u32) -> Option<Self> {
    if height >= jubilee_height {
      return None;
    }

    let inscription = &envelope.payload;

    if inscription.duplicate_field {
      Some(Self::DuplicateField)
    } else if inscription.incomplete_field {
      Some(Self::IncompleteField)
    } else if envelope.input != 0 {
      Some(Self::NotInFirstInput)
    } else if envelope.offset != 0 {
      Some(Self::NotAtOffsetZero)
    } else if inscription.pointer.is_some() {
      Some(Self::Pointer)
    } else if envelope.pushnum {
      Some(Self::Pushnum)
    } else if envelope.stutter {
      Some(Self::Stutter)
    } else {
      None
    }
  }

  /// Curse rules of the sequential protocol, which predates the jubilee.
  pub fn sequential(envelope: &ParsedEnvelope) -> Option<Self> {
    if envelope.payload.unrecognized_even_field {
      Some(Self::UnrecognizedEvenField)
    } else if envelope.input != 0 {
      Some(Self::NotInFirstInput)
    } else if envelope.offset != 0 {
      Some(Self::NotAtOffsetZero)
    } else {
      None
    }
  }
}

impl fmt::Display for Curse {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.title())
  }
}

impl FromStr for Curse {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|curse| curse.title() == s)
      .ok_or_else(|| anyhow!("invalid curse `{s}`"))
  }
}
