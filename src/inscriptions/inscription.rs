use {
  super::*,
  bitcoin::{
    opcodes as bitcoin_opcodes,
    script::{Builder, PushBytes, PushBytesError, ScriptBuf},
  },
  ciborium::Value,
};

/// The fields decoded from one envelope.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Eq, Default)]
pub struct Inscription {
  pub body: Option<Vec<u8>>,
  pub content_encoding: Option<Vec<u8>>,
  pub content_type: Option<Vec<u8>>,
  pub delegate: Option<Vec<u8>>,
  pub duplicate_field: bool,
  pub incomplete_field: bool,
  pub metadata: Option<Vec<u8>>,
  pub metaprotocol: Option<Vec<u8>>,
  pub parent: Option<Vec<u8>>,
  pub pointer: Option<Vec<u8>>,
  pub unrecognized_even_field: bool,
}

impl Inscription {
  /// Minimal little-endian encoding of `pointer`, with trailing zero bytes
  /// stripped.
  pub fn pointer_value(pointer: u64) -> Vec<u8> {
    let mut bytes = pointer.to_le_bytes().to_vec();

    while bytes.last().copied() == Some(0) {
      bytes.pop();
    }

    bytes
  }

  pub fn append_reveal_script_to_builder(
    &self,
    mut builder: Builder,
  ) -> Result<Builder, PushBytesError> {
    builder = builder
      .push_opcode(bitcoin_opcodes::OP_FALSE)
      .push_opcode(bitcoin_opcodes::all::OP_IF)
      .push_slice(envelope::PROTOCOL_ID);

    builder = Tag::ContentType.append(builder, self.content_type.as_deref())?;
    builder = Tag::ContentEncoding.append(builder, self.content_encoding.as_deref())?;
    builder = Tag::Metaprotocol.append(builder, self.metaprotocol.as_deref())?;
    builder = Tag::Parent.append(builder, self.parent.as_deref())?;
    builder = Tag::Delegate.append(builder, self.delegate.as_deref())?;
    builder = Tag::Pointer.append(builder, self.pointer.as_deref())?;
    builder = Tag::Metadata.append(builder, self.metadata.as_deref())?;

    if let Some(body) = &self.body {
      builder = builder.push_slice(envelope::BODY_TAG);
      for chunk in body.chunks(MAX_SCRIPT_ELEMENT_SIZE) {
        builder = builder.push_slice(<&PushBytes>::try_from(chunk)?);
      }
    }

    Ok(builder.push_opcode(bitcoin_opcodes::all::OP_ENDIF))
  }

  pub fn append_reveal_script(&self, builder: Builder) -> Result<ScriptBuf, PushBytesError> {
    Ok(self.append_reveal_script_to_builder(builder)?.into_script())
  }

  /// A script-path witness revealing this inscription, with an empty
  /// placeholder control block.
  pub fn to_witness(&self) -> Result<Witness, PushBytesError> {
    let script = self.append_reveal_script(Builder::new())?;

    let mut witness = Witness::new();

    witness.push(script);
    witness.push([]);

    Ok(witness)
  }

  pub fn body(&self) -> Option<&[u8]> {
    self.body.as_deref()
  }

  pub fn into_body(self) -> Option<Vec<u8>> {
    self.body
  }

  pub fn content_length(&self) -> Option<usize> {
    Some(self.body()?.len())
  }

  pub fn content_type(&self) -> Option<&str> {
    str::from_utf8(self.content_type.as_ref()?).ok()
  }

  pub fn content_encoding(&self) -> Option<&str> {
    str::from_utf8(self.content_encoding.as_ref()?).ok()
  }

  pub fn delegate(&self) -> Option<InscriptionId> {
    InscriptionId::from_value(self.delegate.as_deref()?)
  }

  pub fn metadata(&self) -> Option<Value> {
    ciborium::from_reader(Cursor::new(self.metadata.as_ref()?)).ok()
  }

  pub fn metaprotocol(&self) -> Option<&str> {
    str::from_utf8(self.metaprotocol.as_ref()?).ok()
  }

  pub fn parent(&self) -> Option<InscriptionId> {
    InscriptionId::from_value(self.parent.as_deref()?)
  }

  pub fn pointer(&self) -> Option<u64> {
    let value = self.pointer.as_ref()?;

    if value.iter().skip(8).any(|&byte| byte != 0) {
      return None;
    }

    let mut pointer = [0; 8];

    for (slot, byte) in pointer.iter_mut().zip(value) {
      *slot = *byte;
    }

    Some(u64::from_le_bytes(pointer))
  }
}
