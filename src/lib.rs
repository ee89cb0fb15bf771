use std::path::Path;

mod annotate;
mod device;
mod document;
mod error;
mod peripheral;
mod register;
mod value;

pub use annotate::{
  annotate, Address, AddressSpace, AnnotationReport, RegisterOutcome, UnitSize,
};
pub use device::DeviceModel;
pub use error::{SvdAnnotateError, SvdAnnotateResult};
pub use peripheral::PeripheralSpec;
pub use register::RegisterSpec;

/// Annotates `space` with every register described by the SVD document at `path`.
///
/// The document is fully parsed and resolved before the first label is created, so
/// a bad derivation chain aborts without touching the address space at all. Once
/// annotation has started, registers the collaborator rejects are skipped and
/// reported; labels already created stay in place.
pub fn load<S: AddressSpace, P: AsRef<Path>>(
  space: &mut S,
  path: P,
) -> SvdAnnotateResult<AnnotationReport> {
  let model = DeviceModel::from_file(path)?;
  Ok(annotate(&model, space))
}
