use super::*;

/// One decoded inscription together with its position and curse.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Eq)]
pub struct InscriptionResult {
  pub inscription: Inscription,
  pub input: u32,
  pub offset: u32,
  pub cursed: bool,
  pub curse: Option<Curse>,
}

/// Runs the full pipeline: tapscript, envelopes, fields, curses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InscriptionParser {
  pub protocol: Protocol,
  pub jubilee_height: u32,
}

impl InscriptionParser {
  pub fn new(chain: Chain, protocol: Protocol) -> Self {
    Self {
      protocol,
      jubilee_height: chain.jubilee_height(),
    }
  }

  /// Inscriptions revealed by a single input, ordered by offset. Envelopes
  /// the field parser rejects are dropped without affecting the others.
  pub fn parse_input(
    &self,
    input: u32,
    witness: &Witness,
    height: u32,
  ) -> DecodeResult<Vec<InscriptionResult>> {
    let field_parser = self.protocol.field_parser();

    Ok(
      RawEnvelope::from_input(input, witness)?
        .into_iter()
        .filter_map(|envelope| {
          let offset = envelope.offset;

          field_parser
            .parse(envelope)
            .map_err(|err| log::debug!("dropping envelope {offset} of input {input}: {err}"))
            .ok()
        })
        .map(|envelope| {
          let curse = field_parser.curse(&envelope, height, self.jubilee_height);

          InscriptionResult {
            inscription: envelope.payload,
            input: envelope.input,
            offset: envelope.offset,
            cursed: curse.is_some(),
            curse,
          }
        })
        .collect(),
    )
  }

  /// Inscriptions from every input, ordered by input and offset. An input
  /// that fails to decode contributes nothing.
  pub fn parse_transaction(
    &self,
    transaction: &Transaction,
    height: u32,
  ) -> Vec<InscriptionResult> {
    (0..)
      .zip(&transaction.input)
      .filter_map(
        |(input, txin)| match self.parse_input(input, &txin.witness, height) {
          Ok(results) => Some(results),
          Err(err) => {
            log::debug!("skipping input {input}: {err}");
            None
          }
        },
      )
      .flatten()
      .collect()
  }
}
