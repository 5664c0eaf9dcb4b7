use super::*;

/// Returns the tapscript revealed by a script-path spend.
///
/// Follows BIP341: when the stack has at least two elements and the last
/// starts with the annex prefix, the annex is dropped first. The tapscript
/// is then the second-to-last remaining element.
pub fn tapscript(witness: &Witness) -> DecodeResult<&[u8]> {
  let mut len = witness.len();

  if len >= 2
    && witness
      .last()
      .and_then(|element| element.first())
      .is_some_and(|&byte| byte == TAPROOT_ANNEX_PREFIX)
  {
    len -= 1;
  }

  ensure!(len >= 2, NoTapscript);

  witness.nth(len - 2).ok_or(DecodeError::NoTapscript)
}
