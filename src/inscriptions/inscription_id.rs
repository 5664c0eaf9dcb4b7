use super::*;

/// Reference to an inscription, as carried by the parent and delegate fields.
#[derive(
  Debug, PartialEq, Copy, Clone, Hash, Eq, PartialOrd, Ord, DeserializeFromStr, SerializeDisplay,
)]
pub struct InscriptionId {
  pub txid: Txid,
  pub index: u32,
}

impl Default for InscriptionId {
  fn default() -> Self {
    Self {
      txid: Txid::all_zeros(),
      index: 0,
    }
  }
}

impl InscriptionId {
  /// Decodes a field value: a 32-byte txid followed by up to four
  /// little-endian index bytes. Shorter index encodings may not end in zero.
  pub fn from_value(value: &[u8]) -> Option<Self> {
    if value.len() < Txid::LEN || value.len() > Txid::LEN + 4 {
      return None;
    }

    let (txid, index) = value.split_at(Txid::LEN);

    if index.len() != 4 && index.last() == Some(&0) {
      return None;
    }

    let mut bytes = [0; 4];

    for (slot, byte) in bytes.iter_mut().zip(index) {
      *slot = *byte;
    }

    Some(Self {
      txid: Txid::from_slice(txid).ok()?,
      index: u32::from_le_bytes(bytes),
    })
  }

  pub fn value(self) -> Vec<u8> {
    let index = self.index.to_le_bytes();
    let mut index_slice = index.as_slice();

    while let [rest @ .., 0] = index_slice {
      index_slice = rest;
    }

    self
      .txid
      .to_byte_array()
      .iter()
      .chain(index_slice)
      .copied()
      .collect()
  }
}

impl fmt::Display for InscriptionId {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}i{}", self.txid, self.index)
  }
}

#[derive(Debug, Snafu)]
pub enum ParseError {
  #[snafu(display("invalid character: '{character}'"))]
  Character { character: char },
  #[snafu(display("invalid length: {len}"))]
  Length { len: usize },
  #[snafu(display("invalid separator: `{separator}`"))]
  Separator { separator: char },
  #[snafu(display("invalid txid: {source}"))]
  Txid { source: bitcoin::hex::HexToArrayError },
  #[snafu(display("invalid index: {source}"))]
  Index { source: std::num::ParseIntError },
}

impl FromStr for InscriptionId {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if let Some(character) = s.chars().find(|character| !character.is_ascii()) {
      return CharacterSnafu { character }.fail();
    }

    const TXID_LEN: usize = 64;
    const MIN_LEN: usize = TXID_LEN + 2;

    ensure!(s.len() >= MIN_LEN, LengthSnafu { len: s.len() });

    let separator = char::from(s.as_bytes()[TXID_LEN]);

    ensure!(separator == 'i', SeparatorSnafu { separator });

    Ok(Self {
      txid: s[..TXID_LEN]
        .parse()
        .map_err(|source| ParseError::Txid { source })?,
      index: s[TXID_LEN + 1..]
        .parse()
        .map_err(|source| ParseError::Index { source })?,
    })
  }
}
