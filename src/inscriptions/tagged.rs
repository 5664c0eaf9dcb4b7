use super::*;

/// Tag/value field parser. Never fails: malformed fields are recorded on the
/// inscription and cursed later.
#[derive(Debug, Clone, Copy)]
pub struct Tagged;

impl FieldParser for Tagged {
  fn parse(&self, envelope: RawEnvelope) -> DecodeResult<ParsedEnvelope> {
    let body = envelope
      .payload
      .iter()
      .enumerate()
      .position(|(i, push)| i % 2 == 0 && push.is_empty());

    let mut fields: BTreeMap<&[u8], Vec<&[u8]>> = BTreeMap::new();

    let mut incomplete_field = false;

    for item in envelope.payload[..body.unwrap_or(envelope.payload.len())].chunks(2) {
      match item {
        [key, value] => fields.entry(key).or_default().push(value),
        _ => incomplete_field = true,
      }
    }

    let duplicate_field = fields.iter().any(|(_key, values)| values.len() > 1);

    let content_encoding = Tag::ContentEncoding.take(&mut fields);
    let content_type = Tag::ContentType.take(&mut fields);
    let delegate = Tag::Delegate.take(&mut fields);
    let metadata = Tag::Metadata.take(&mut fields);
    let metaprotocol = Tag::Metaprotocol.take(&mut fields);
    let parent = Tag::Parent.take(&mut fields);
    let pointer = Tag::Pointer.take(&mut fields);

    let unrecognized_even_field = fields
      .keys()
      .any(|tag| tag.first().is_some_and(|lsb| lsb % 2 == 0));

    Ok(ParsedEnvelope {
      payload: Inscription {
        body: body.map(|i| {
          envelope.payload[i + 1..]
            .iter()
            .flatten()
            .copied()
            .collect()
        }),
        content_encoding,
        content_type,
        delegate,
        duplicate_field,
        incomplete_field,
        metadata,
        metaprotocol,
        parent,
        pointer,
        unrecognized_even_field,
      },
      input: envelope.input,
      offset: envelope.offset,
      pushnum: envelope.pushnum,
      stutter: envelope.stutter,
    })
  }

  fn curse(&self, envelope: &ParsedEnvelope, height: u32, jubilee_height: u32) -> Option<Curse> {
    Curse::tagged(envelope, height, jubilee_height)
  }
}
