use {
  super::*,
  bitcoin::script::{Builder, PushBytes, PushBytesError},
};

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Tag {
  ContentType,
  Pointer,
  Parent,
  Metadata,
  Metaprotocol,
  ContentEncoding,
  Delegate,
  #[allow(unused)]
  Nop,
}

impl Tag {
  fn chunked(self) -> bool {
    matches!(self, Self::Metadata)
  }

  pub(crate) fn bytes(self) -> &'static [u8] {
    match self {
      Self::ContentType => &[1],
      Self::Pointer => &[2],
      Self::Parent => &[3],
      Self::Metadata => &[5],
      Self::Metaprotocol => &[7],
      Self::ContentEncoding => &[9],
      Self::Delegate => &[11],
      Self::Nop => &[255],
    }
  }

  pub(crate) fn append(
    self,
    builder: Builder,
    value: Option<&[u8]>,
  ) -> Result<Builder, PushBytesError> {
    let Some(value) = value else {
      return Ok(builder);
    };

    let tag = <&PushBytes>::try_from(self.bytes())?;

    if self.chunked() {
      value
        .chunks(MAX_SCRIPT_ELEMENT_SIZE)
        .try_fold(builder, |builder, chunk| {
          Ok(builder.push_slice(tag).push_slice(<&PushBytes>::try_from(chunk)?))
        })
    } else {
      Ok(builder.push_slice(tag).push_slice(<&PushBytes>::try_from(value)?))
    }
  }

  /// Removes this tag's value from `fields`. Chunked tags consume every
  /// queued value, others only the first.
  pub(crate) fn take(self, fields: &mut BTreeMap<&[u8], Vec<&[u8]>>) -> Option<Vec<u8>> {
    if self.chunked() {
      let values = fields.remove(self.bytes())?;

      if values.is_empty() {
        None
      } else {
        Some(values.into_iter().flatten().copied().collect())
      }
    } else {
      let values = fields.get_mut(self.bytes())?;

      if values.is_empty() {
        None
      } else {
        let value = values.remove(0).to_vec();

        if values.is_empty() {
          fields.remove(self.bytes());
        }

        Some(value)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn take_returns_first_value_and_keeps_duplicates() {
    let mut fields: BTreeMap<&[u8], Vec<&[u8]>> = BTreeMap::new();
    fields.insert(&[1], vec![&b"a"[..], &b"b"[..]]);

    assert_eq!(Tag::ContentType.take(&mut fields), Some(b"a".to_vec()));
    assert_eq!(fields.get(&[1][..]), Some(&vec![&b"b"[..]]));
    assert_eq!(Tag::ContentType.take(&mut fields), Some(b"b".to_vec()));
    assert!(fields.is_empty());
    assert_eq!(Tag::ContentType.take(&mut fields), None);
  }

  #[test]
  fn take_concatenates_chunked_values() {
    let mut fields: BTreeMap<&[u8], Vec<&[u8]>> = BTreeMap::new();
    fields.insert(&[5], vec![&b"foo"[..], &b"bar"[..]]);

    assert_eq!(Tag::Metadata.take(&mut fields), Some(b"foobar".to_vec()));
    assert!(fields.is_empty());
  }

  #[test]
  fn append_absent_value_is_noop() {
    assert_eq!(
      Tag::Pointer
        .append(Builder::new(), None)
        .unwrap()
        .into_bytes(),
      Vec::<u8>::new()
    );
  }

  #[test]
  fn append_chunks_metadata() {
    let value = vec![7; MAX_SCRIPT_ELEMENT_SIZE + 1];

    let script = Tag::Metadata
      .append(Builder::new(), Some(&value))
      .unwrap()
      .into_script();

    let pushes = Instructions::new(script.as_bytes())
      .map(|instruction| instruction.unwrap().push_bytes().unwrap().len())
      .collect::<Vec<usize>>();

    assert_eq!(pushes, [1, MAX_SCRIPT_ELEMENT_SIZE, 1, 1]);
  }

  #[test]
  fn append_does_not_chunk_other_tags() {
    let value = vec![7; MAX_SCRIPT_ELEMENT_SIZE + 1];

    let script = Tag::ContentType
      .append(Builder::new(), Some(&value))
      .unwrap()
      .into_script();

    assert_eq!(Instructions::new(script.as_bytes()).count(), 2);
  }
}
