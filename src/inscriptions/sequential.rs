use super::*;

/// Field parser for the original inscription protocol.
///
/// Fields are read as a strict tag/value sequence. The first empty tag starts
/// the body, which runs to the end of the envelope. A repeated tag, a tag
/// without a value, or a small-integer opcode anywhere in the envelope makes
/// the whole envelope invalid. Only the content type and parent fields are
/// recognized.
#[derive(Debug, Clone, Copy)]
pub struct Sequential;

impl FieldParser for Sequential {
  fn parse(&self, envelope: RawEnvelope) -> DecodeResult<ParsedEnvelope> {
    ensure!(!envelope.pushnum, InvalidInscriptionStructure);

    let mut fields: BTreeMap<&[u8], &[u8]> = BTreeMap::new();

    let mut body = None;

    let mut pushes = envelope.payload.iter();

    while let Some(tag) = pushes.next() {
      if tag.is_empty() {
        body = Some(pushes.by_ref().flatten().copied().collect());
        break;
      }

      ensure!(!fields.contains_key(tag.as_slice()), InvalidInscriptionStructure);

      let value = pushes
        .next()
        .ok_or(DecodeError::InvalidInscriptionStructure)?;

      fields.insert(tag, value);
    }

    let content_type = fields.remove(Tag::ContentType.bytes()).map(<[u8]>::to_vec);
    let parent = fields.remove(Tag::Parent.bytes()).map(<[u8]>::to_vec);

    let unrecognized_even_field = fields
      .keys()
      .any(|tag| tag.first().is_some_and(|lsb| lsb % 2 == 0));

    Ok(ParsedEnvelope {
      payload: Inscription {
        body,
        content_type,
        parent,
        unrecognized_even_field,
        ..default()
      },
      input: envelope.input,
      offset: envelope.offset,
      pushnum: envelope.pushnum,
      stutter: envelope.stutter,
    })
  }

  fn curse(&self, envelope: &ParsedEnvelope, _height: u32, _jubilee_height: u32) -> Option<Curse> {
    Curse::sequential(envelope)
  }
}
