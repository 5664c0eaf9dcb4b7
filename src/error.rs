use super::*;

/// Failures raised while decoding a witness into inscriptions.
///
/// A `DecodeError` only ever aborts the scan of the input it occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum DecodeError {
  #[snafu(display("unexpected end of script"))]
  EarlyEndOfScript,
  #[snafu(display("non-minimal data push"))]
  NonMinimalPush,
  #[snafu(display("numeric value out of range"))]
  NumericOverflow,
  #[snafu(display("witness is not a script-path spend"))]
  NoTapscript,
  #[snafu(display("invalid inscription structure"))]
  InvalidInscriptionStructure,
  #[snafu(display("no inscription found"))]
  NoInscriptionFound,
}

pub(crate) type DecodeResult<T = (), E = DecodeError> = std::result::Result<T, E>;
