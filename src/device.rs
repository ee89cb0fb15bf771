use std::{collections::HashMap, fs, ops::Range, path::Path};

use xmltree::Element;

use crate::{
  document,
  error::{SvdAnnotateError, SvdAnnotateResult},
  peripheral::PeripheralSpec,
  register::RegisterSpec,
};

/// The resolved peripheral/register model of one SVD document.
///
/// Register definitions live in a single append-only arena. Each peripheral refers
/// to its resolved register list as a range of arena indices, so a peripheral
/// derived from another aliases the ancestor's definitions instead of copying
/// them. Nothing mutates the arena once the model has been built.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceModel {
  registers: Vec<RegisterSpec>,

  /// Every peripheral declaration in the document, in document order. Duplicate
  /// names are kept; each declaration is annotated on its own.
  pub peripherals: Vec<PeripheralSpec>,
}
impl DeviceModel {
  /// Reads and resolves the SVD document at `path`.
  pub fn from_file<P: AsRef<Path>>(path: P) -> SvdAnnotateResult<Self> {
    Self::from_xml(&fs::read_to_string(path)?)
  }

  /// Resolves an SVD document already held in memory.
  pub fn from_xml(xml: &str) -> SvdAnnotateResult<Self> {
    Self::new(&Element::parse(xml.as_bytes())?)
  }

  pub(crate) fn new(root: &Element) -> SvdAnnotateResult<Self> {
    let mut registers: Vec<RegisterSpec> = Vec::new();
    let mut peripherals: Vec<PeripheralSpec> = Vec::new();

    // Resolved register ranges by peripheral name, for derivedFrom lookups.
    // A later declaration of the same name overwrites the earlier entry.
    let mut resolved: HashMap<String, Range<usize>> = HashMap::new();

    for el in document::descendants(root, "peripheral") {
      let range = match document::attribute(el, "derivedFrom") {
        Some(ancestor) => match resolved.get(ancestor) {
          Some(range) => range.clone(),
          None => {
            return Err(SvdAnnotateError::new(&format!(
              "peripheral '{}' is derived from '{}', which is not declared before it",
              document::child_text(el, "name").unwrap_or("UNK"),
              ancestor
            )))
          }
        },
        None => {
          let start = registers.len();
          if let Some(container) = document::child(el, "registers") {
            for reg in document::descendants(container, "register") {
              registers.push(RegisterSpec::new(reg));
            }
          }
          start..registers.len()
        }
      };

      let peripheral = PeripheralSpec::new(el, range);
      resolved.insert(peripheral.name.clone(), peripheral.registers.clone());
      peripherals.push(peripheral);
    }

    log::debug!(
      "resolved {} peripherals over {} register definitions",
      peripherals.len(),
      registers.len()
    );

    Ok(Self {
      registers,
      peripherals,
    })
  }

  /// The resolved register list of `peripheral`, in document-discovery order.
  pub fn registers_of(&self, peripheral: &PeripheralSpec) -> &[RegisterSpec] {
    &self.registers[peripheral.registers.clone()]
  }
}
