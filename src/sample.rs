//! Struct `Sample` represents a table of categorical examples
//! tagged with a binary label.

// Provides the binary label.
pub(crate) mod label;
// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use label::Label;
pub use sample_reader::SampleReader;
pub use sample_struct::Sample;
