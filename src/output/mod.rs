mod display;
mod snapshot;

pub use display::Display;
pub use snapshot::SnapshotWriter;

#[cfg(test)]
pub use display::PLACEHOLDER_COLOR;
#[cfg(test)]
pub use snapshot::file_name_for;
