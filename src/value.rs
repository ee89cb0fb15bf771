/// Interprets one SVD numeric literal. Vendor files mix encodings freely:
/// `0x2a`, `#0110`, `42`, and `true`/`false` all appear where the schema
/// says "integer". Absent or unparseable text yields `default` instead of
/// an error.
pub(crate) fn interpret_literal(text: Option<&str>, default: Option<u64>) -> Option<u64> {
  let raw = match text {
    Some(t) => t.trim().to_lowercase(),
    None => return default,
  };

  let parsed = if let Some(digits) = raw.strip_prefix("0x") {
    u64::from_str_radix(digits, 16).ok()
  } else if let Some(bits) = raw.strip_prefix('#') {
    // Freescale-style binary, where `x` marks bits the field treats as
    // don't-care. Those bits are read as zero.
    let zeroed = bits.replace('x', "0");
    if !zeroed.is_empty() && zeroed.bytes().all(|b| b == b'0' || b == b'1') {
      u64::from_str_radix(&zeroed, 2).ok()
    } else {
      zeroed.parse().ok()
    }
  } else if raw.starts_with("true") {
    Some(1)
  } else if raw.starts_with("false") {
    Some(0)
  } else {
    raw.parse().ok()
  };

  parsed.or(default)
}
