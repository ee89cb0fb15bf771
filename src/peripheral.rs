use crate::{document, value};
use std::ops::Range;
use xmltree::Element;

/// Describes a peripheral on a device.
#[derive(Debug, Clone, PartialEq)]
pub struct PeripheralSpec {
  derived_from: Option<String>,

  /// Name of the peripheral. Expected to be unique for the entire device; when a
  /// document declares the same name twice, the later declaration wins any
  /// subsequent `derivedFrom` lookup.
  pub name: String,

  /// Lowest address reserved or used by the peripheral. `None` when the description
  /// omits it or the value is unparseable; registers under such a peripheral have
  /// no computable absolute address.
  pub base_address: Option<u64>,

  /// The peripheral's resolved register list, as a range of indices into the
  /// device's register arena. A derived peripheral holds the same range as its
  /// ancestor, so the underlying definitions are shared rather than copied.
  pub registers: Range<usize>,
}
impl PeripheralSpec {
  pub(crate) fn new(el: &Element, registers: Range<usize>) -> Self {
    Self {
      derived_from: document::attribute(el, "derivedFrom").map(|name| name.to_string()),
      name: document::child_text(el, "name").unwrap_or("UNK").to_string(),
      base_address: value::interpret_literal(document::child_text(el, "baseAddress"), None),
      registers,
    }
  }

  /// The name of the peripheral this peripheral inherits its register layout from
  /// (if any). Since all peripherals are top-level components of the device, this
  /// is just the name of the other peripheral.
  pub fn derived_from(&self) -> Option<&str> {
    self.derived_from.as_deref()
  }
}
