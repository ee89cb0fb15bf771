use std::fmt;

use crate::{
  device::DeviceModel,
  error::{SvdAnnotateError, SvdAnnotateResult},
  peripheral::PeripheralSpec,
  register::RegisterSpec,
};

/// A concrete location in the collaborator's address space. Constructed only by
/// [`AddressSpace::address`], so holding one means the collaborator accepted the
/// value as in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address(pub u64);
impl fmt::Display for Address {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{:#010x}", self.0)
  }
}

/// The width of the storage unit created for a register, derived from its `size`
/// element. Registers of any other width get a label but no typed unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSize {
  Byte,
  Word,
  DWord,
}
impl UnitSize {
  pub fn from_bits(bits: u64) -> Option<UnitSize> {
    match bits {
      8 => Some(UnitSize::Byte),
      16 => Some(UnitSize::Word),
      32 => Some(UnitSize::DWord),
      _ => None,
    }
  }
}

/// The memory/address database being annotated.
///
/// Implemented by the host around whatever program database it maintains. Every
/// operation is fallible; [`annotate`] isolates failures per register, so an
/// implementation may reject freely without aborting the pass.
pub trait AddressSpace {
  /// Makes a concrete address from an absolute value, failing if the value lies
  /// outside the space.
  fn address(&self, value: u64) -> SvdAnnotateResult<Address>;

  /// Creates a label named `name` at `address`.
  fn create_label(&mut self, address: Address, name: &str, primary: bool) -> SvdAnnotateResult<()>;

  /// Creates an 8-bit storage unit at `address`.
  fn create_byte(&mut self, address: Address) -> SvdAnnotateResult<()>;

  /// Creates a 16-bit storage unit at `address`.
  fn create_word(&mut self, address: Address) -> SvdAnnotateResult<()>;

  /// Creates a 32-bit storage unit at `address`.
  fn create_dword(&mut self, address: Address) -> SvdAnnotateResult<()>;
}

/// What happened to one register during an annotation pass.
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
  /// Label (and, for 8/16/32-bit registers, a storage unit) created.
  Applied {
    label: String,
    address: u64,
    unit: Option<UnitSize>,
  },

  /// Nothing was created for this register; the pass moved on.
  Skipped { label: String, reason: String },
}

/// Per-register outcomes of one annotation pass, in processing order.
#[derive(Debug, Default, PartialEq)]
pub struct AnnotationReport {
  pub outcomes: Vec<RegisterOutcome>,
}
impl AnnotationReport {
  /// Number of registers that were labeled.
  pub fn applied(&self) -> usize {
    self
      .outcomes
      .iter()
      .filter(|o| matches!(o, RegisterOutcome::Applied { .. }))
      .count()
  }

  /// Number of registers that were skipped.
  pub fn skipped(&self) -> usize {
    self.outcomes.len() - self.applied()
  }
}

/// Annotates `space` with every resolved register of `model`.
///
/// Registers are processed in document-discovery order, once per derivation path,
/// with no sorting or deduplication. A register the collaborator rejects is
/// logged and recorded as skipped, and the pass continues; labels already created
/// stay in place.
pub fn annotate<S: AddressSpace>(model: &DeviceModel, space: &mut S) -> AnnotationReport {
  let mut report = AnnotationReport::default();

  for peripheral in &model.peripherals {
    for register in model.registers_of(peripheral) {
      let label = format!("{}_{}", peripheral.name, register.name);

      let outcome = match apply_register(space, peripheral, register, &label) {
        Ok((address, unit)) => RegisterOutcome::Applied {
          label,
          address,
          unit,
        },
        Err(err) => {
          log::warn!("skipping {}: {}", label, err);
          RegisterOutcome::Skipped {
            label,
            reason: err.details,
          }
        }
      };

      report.outcomes.push(outcome);
    }
  }

  log::info!(
    "annotated {} registers, skipped {}",
    report.applied(),
    report.skipped()
  );

  report
}

fn apply_register<S: AddressSpace>(
  space: &mut S,
  peripheral: &PeripheralSpec,
  register: &RegisterSpec,
  label: &str,
) -> SvdAnnotateResult<(u64, Option<UnitSize>)> {
  let base = peripheral.base_address.ok_or_else(|| {
    SvdAnnotateError::new(&format!(
      "peripheral '{}' has no usable base address",
      peripheral.name
    ))
  })?;

  let offset = register.address_offset.ok_or_else(|| {
    SvdAnnotateError::new(&format!(
      "register '{}' has no usable address offset",
      register.name
    ))
  })?;

  let value = base.checked_add(offset).ok_or_else(|| {
    SvdAnnotateError::new(&format!(
      "address {:#x} + {:#x} overflows the address width",
      base, offset
    ))
  })?;

  let address = space.address(value).map_err(|err| at_address(value, err))?;

  space
    .create_label(address, label, true)
    .map_err(|err| at_address(value, err))?;

  let unit = register.size.and_then(UnitSize::from_bits);
  match unit {
    Some(UnitSize::Byte) => space.create_byte(address),
    Some(UnitSize::Word) => space.create_word(address),
    Some(UnitSize::DWord) => space.create_dword(address),
    None => Ok(()),
  }
  .map_err(|err| at_address(value, err))?;

  Ok((value, unit))
}

fn at_address(value: u64, err: SvdAnnotateError) -> SvdAnnotateError {
  SvdAnnotateError::new(&format!("address {:#010x}: {}", value, err))
}
