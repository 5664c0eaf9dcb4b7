use super::*;

/// Interprets raw envelope payloads under one protocol generation.
pub trait FieldParser: Sync {
  fn parse(&self, envelope: RawEnvelope) -> DecodeResult<ParsedEnvelope>;

  fn curse(&self, envelope: &ParsedEnvelope, height: u32, jubilee_height: u32) -> Option<Curse>;
}

/// Inscription protocol generation.
#[derive(
  Copy,
  Clone,
  Debug,
  Default,
  PartialEq,
  Eq,
  ValueEnum,
  Display,
  DeserializeFromStr,
  SerializeDisplay,
)]
pub enum Protocol {
  /// Strict field sequence, duplicate tags rejected.
  #[display("sequential")]
  Sequential,
  /// Tag/value pairs, malformed fields recorded as curses.
  #[default]
  #[display("tagged")]
  Tagged,
}

impl Protocol {
  pub fn field_parser(self) -> &'static dyn FieldParser {
    match self {
      Self::Sequential => &Sequential,
      Self::Tagged => &Tagged,
    }
  }
}

impl FromStr for Protocol {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "sequential" => Ok(Self::Sequential),
      "tagged" => Ok(Self::Tagged),
      _ => bail!("invalid protocol `{s}`"),
    }
  }
}
