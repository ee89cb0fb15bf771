use crate::{document, value};
use xmltree::Element;

/// Describes a register within a peripheral.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterSpec {
  /// Name that identifies the register. Must be unique within the scope of its parent.
  pub name: String,

  /// Register's starting address relative to its peripheral's base address. `None` when
  /// the description omits it or the value is unparseable; such a register has no
  /// computable absolute address.
  pub address_offset: Option<u64>,

  /// The bit width of the register.
  pub size: Option<u64>,
}
impl RegisterSpec {
  pub(crate) fn new(el: &Element) -> Self {
    Self {
      name: document::child_text(el, "name").unwrap_or("UNK").to_string(),
      address_offset: value::interpret_literal(document::child_text(el, "addressOffset"), None),
      size: value::interpret_literal(document::child_text(el, "size"), None),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::RegisterSpec;
  use xmltree::Element;

  #[test]
  fn can_create_from_xml() {
    let el: Element = Element::parse(
      r##"
      <register>
        <name>STATUS</name>
        <description>Line status</description>
        <addressOffset>0x04</addressOffset>
        <size>8</size>
      </register>
      "##
        .as_bytes(),
    )
    .unwrap();

    let rs = RegisterSpec::new(&el);

    assert_eq!("STATUS", rs.name);
    assert_eq!(Some(4), rs.address_offset);
    assert_eq!(Some(8), rs.size);
  }

  #[test]
  fn missing_fields_fall_back() {
    let el: Element = Element::parse(r##"<register></register>"##.as_bytes()).unwrap();

    let rs = RegisterSpec::new(&el);

    assert_eq!("UNK", rs.name);
    assert_eq!(None, rs.address_offset);
    assert_eq!(None, rs.size);
  }

  #[test]
  fn malformed_offset_is_none_not_zero() {
    let el: Element = Element::parse(
      r##"
      <register>
        <name>CTRL</name>
        <addressOffset>0xnope</addressOffset>
      </register>
      "##
        .as_bytes(),
    )
    .unwrap();

    let rs = RegisterSpec::new(&el);

    assert_eq!(None, rs.address_offset);
  }
}
