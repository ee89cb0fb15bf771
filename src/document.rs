use xmltree::Element;

/// The first direct child named `tag`, if any.
pub(crate) fn child<'a>(el: &'a Element, tag: &str) -> Option<&'a Element> {
  el.get_child(tag)
}

/// Text content of the first direct child named `tag`, if any.
pub(crate) fn child_text<'a>(el: &'a Element, tag: &str) -> Option<&'a str> {
  child(el, tag).and_then(|c| c.text.as_deref())
}

/// Value of the attribute named `name`, if any.
pub(crate) fn attribute<'a>(el: &'a Element, name: &str) -> Option<&'a str> {
  el.attributes.get(name).map(|value| value.as_str())
}

/// Every descendant element named `tag`, in document order.
pub(crate) fn descendants<'a>(el: &'a Element, tag: &str) -> Vec<&'a Element> {
  let mut found = Vec::new();
  collect(el, tag, &mut found);
  found
}

fn collect<'a>(el: &'a Element, tag: &str, found: &mut Vec<&'a Element>) {
  for child in &el.children {
    if child.name == tag {
      found.push(child);
    }
    collect(child, tag, found);
  }
}

#[cfg(test)]
mod tests {
  use super::{attribute, child_text, descendants};
  use xmltree::Element;

  #[test]
  fn lookups_return_none_when_absent() {
    let el: Element = Element::parse(
      r##"
      <peripheral derivedFrom="UART0">
        <name>UART1</name>
      </peripheral>
      "##
        .as_bytes(),
    )
    .unwrap();

    assert_eq!(Some("UART1"), child_text(&el, "name"));
    assert_eq!(None, child_text(&el, "baseAddress"));
    assert_eq!(Some("UART0"), attribute(&el, "derivedFrom"));
    assert_eq!(None, attribute(&el, "headerStructName"));
  }

  #[test]
  fn descendants_are_found_at_any_depth_in_document_order() {
    let el: Element = Element::parse(
      r##"
      <registers>
        <register><name>A</name></register>
        <cluster>
          <register><name>B</name></register>
        </cluster>
        <register><name>C</name></register>
      </registers>
      "##
        .as_bytes(),
    )
    .unwrap();

    let names: Vec<&str> = descendants(&el, "register")
      .iter()
      .map(|r| child_text(r, "name").unwrap())
      .collect();

    assert_eq!(vec!["A", "B", "C"], names);
  }
}
