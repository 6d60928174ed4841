// Resume generation: assemble extractor output, apply section defaults, and
// expose the result over HTTP. Extraction itself lives in `crate::extraction`.

pub mod assembler;
pub mod defaults;
pub mod generator;
pub mod handlers;
