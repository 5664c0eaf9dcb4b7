use super::*;

pub use self::{
  curse::Curse,
  envelope::{Envelope, ParsedEnvelope, RawEnvelope},
  field_parser::{FieldParser, Protocol},
  inscription::Inscription,
  inscription_id::InscriptionId,
  inscription_parser::{InscriptionParser, InscriptionResult},
  sequential::Sequential,
  tagged::Tagged,
};

mod curse;
pub mod envelope;
mod field_parser;
mod inscription;
pub mod inscription_id;
mod inscription_parser;
mod sequential;
pub(crate) mod tag;
mod tagged;
