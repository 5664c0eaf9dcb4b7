use super::*;

#[derive(Serialize, Eq, PartialEq, Deserialize, Debug)]
pub struct RawOutput {
  pub inscriptions: Vec<InscriptionResult>,
}

#[derive(Serialize, Eq, PartialEq, Deserialize, Debug)]
pub struct CompactOutput {
  pub inscriptions: Vec<CompactInscription>,
}

#[derive(Serialize, Eq, PartialEq, Deserialize, Debug)]
pub struct CompactInscription {
  pub input: u32,
  pub offset: u32,
  pub cursed: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub curse: Option<Curse>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub body: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub content_encoding: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub content_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub delegate: Option<InscriptionId>,
  #[serde(default, skip_serializing_if = "std::ops::Not::not")]
  pub duplicate_field: bool,
  #[serde(default, skip_serializing_if = "std::ops::Not::not")]
  pub incomplete_field: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub metadata: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub metaprotocol: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub parent: Option<InscriptionId>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pointer: Option<u64>,
  #[serde(default, skip_serializing_if = "std::ops::Not::not")]
  pub unrecognized_even_field: bool,
}

impl From<InscriptionResult> for CompactInscription {
  fn from(result: InscriptionResult) -> Self {
    let inscription = &result.inscription;

    Self {
      input: result.input,
      offset: result.offset,
      cursed: result.cursed,
      curse: result.curse,
      body: inscription.body.as_ref().map(hex::encode),
      content_encoding: inscription.content_encoding().map(str::to_string),
      content_type: inscription.content_type().map(str::to_string),
      delegate: inscription.delegate(),
      duplicate_field: inscription.duplicate_field,
      incomplete_field: inscription.incomplete_field,
      metadata: inscription.metadata.as_ref().map(hex::encode),
      metaprotocol: inscription.metaprotocol().map(str::to_string),
      parent: inscription.parent(),
      pointer: inscription.pointer(),
      unrecognized_even_field: inscription.unrecognized_even_field,
    }
  }
}

#[derive(Debug, Parser)]
#[command(group(
  ArgGroup::new("source")
    .required(false)
    .args(&["file", "hex"]),
))]
pub(crate) struct Decode {
  #[arg(long, help = "Read consensus-encoded transaction from <FILE>.")]
  file: Option<PathBuf>,
  #[arg(long, help = "Read hex-encoded transaction from <HEX>.")]
  hex: Option<String>,
  #[arg(
    long,
    default_value_t = 0,
    help = "Classify curses as of block <HEIGHT>."
  )]
  height: u32,
  #[arg(long, help = "Print fields as strings, hex and inscription ids.")]
  compact: bool,
}

impl Decode {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let transaction = self.transaction()?;

    log::info!(
      "decoding transaction {} with {} inputs",
      transaction.compute_txid(),
      transaction.input.len()
    );

    let inscriptions = settings
      .inscription_parser()
      .parse_transaction(&transaction, self.height);

    if self.compact {
      Ok(Some(Box::new(CompactOutput {
        inscriptions: inscriptions.into_iter().map(CompactInscription::from).collect(),
      })))
    } else {
      Ok(Some(Box::new(RawOutput { inscriptions })))
    }
  }

  fn transaction(&self) -> Result<Transaction> {
    let bytes = match (&self.file, &self.hex) {
      (Some(path), None) => {
        fs::read(path).with_context(|| format!("failed to read `{}`", path.display()))?
      }
      (None, Some(hex)) => hex::decode(hex.trim()).context("failed to decode transaction hex")?,
      (None, None) => {
        let mut buffer = Vec::new();
        io::stdin()
          .read_to_end(&mut buffer)
          .context("failed to read transaction from stdin")?;
        buffer
      }
      (Some(_), Some(_)) => bail!("`--file` and `--hex` are mutually exclusive"),
    };

    consensus::deserialize(&bytes).context("failed to deserialize transaction")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn source_flags_conflict() {
    assert!(Arguments::try_parse_from(["ord", "decode", "--file", "foo", "--hex", "00"]).is_err());
  }

  #[test]
  fn height_defaults_to_zero() {
    assert_matches!(
      Arguments::try_parse_from(["ord", "decode", "--hex", "00"]).unwrap().subcommand,
      Subcommand::Decode(Decode {
        height: 0,
        compact: false,
        ..
      })
    );
  }

  #[test]
  fn hex_transaction() {
    let transaction = transaction(&[envelope(&[b"ord", &[1], b"text/plain", &[], b"foo"])]);

    let decode = Decode {
      file: None,
      hex: Some(consensus::encode::serialize_hex(&transaction)),
      height: 0,
      compact: false,
    };

    assert_eq!(decode.transaction().unwrap(), transaction);
  }

  #[test]
  fn file_transaction() {
    let transaction = transaction(&[Witness::new()]);
    let tempdir = tempfile::TempDir::new().unwrap();
    let path = tempdir.path().join("transaction");
    fs::write(&path, consensus::serialize(&transaction)).unwrap();

    let decode = Decode {
      file: Some(path),
      hex: None,
      height: 0,
      compact: false,
    };

    assert_eq!(decode.transaction().unwrap(), transaction);
  }

  #[test]
  fn invalid_hex() {
    let decode = Decode {
      file: None,
      hex: Some("xyz".into()),
      height: 0,
      compact: false,
    };

    assert_eq!(
      decode.transaction().unwrap_err().to_string(),
      "failed to decode transaction hex"
    );
  }

  #[test]
  fn trailing_bytes_are_rejected() {
    let mut bytes = consensus::serialize(&transaction(&[Witness::new()]));
    bytes.push(0);

    let decode = Decode {
      file: None,
      hex: Some(hex::encode(bytes)),
      height: 0,
      compact: false,
    };

    assert_eq!(
      decode.transaction().unwrap_err().to_string(),
      "failed to deserialize transaction"
    );
  }

  #[test]
  fn compact_inscription() {
    let result = InscriptionResult {
      inscription: Inscription {
        content_encoding: Some(b"br".to_vec()),
        metadata: Some(vec![0xa0]),
        parent: Some(inscription_id(1).value()),
        pointer: Some(Inscription::pointer_value(2)),
        duplicate_field: true,
        ..inscription("text/plain", "foo")
      },
      input: 1,
      offset: 0,
      cursed: true,
      curse: Some(Curse::DuplicateField),
    };

    pretty_assert_eq!(
      CompactInscription::from(result),
      CompactInscription {
        input: 1,
        offset: 0,
        cursed: true,
        curse: Some(Curse::DuplicateField),
        body: Some("666f6f".into()),
        content_encoding: Some("br".into()),
        content_type: Some("text/plain".into()),
        delegate: None,
        duplicate_field: true,
        incomplete_field: false,
        metadata: Some("a0".into()),
        metaprotocol: None,
        parent: Some(inscription_id(1)),
        pointer: Some(2),
        unrecognized_even_field: false,
      }
    );
  }

  #[test]
  fn compact_output_omits_absent_fields() {
    let compact = CompactInscription::from(InscriptionResult {
      inscription: default(),
      input: 0,
      offset: 0,
      cursed: false,
      curse: None,
    });

    assert_eq!(
      serde_json::to_string(&compact).unwrap(),
      r#"{"input":0,"offset":0,"cursed":false}"#
    );
  }
}
