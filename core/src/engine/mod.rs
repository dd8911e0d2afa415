//! The document-block pipeline: author mapping in, table or text out.

mod block;
mod run;

pub use block::{parse_block, BlockSpec, OutputMode};
pub use run::{run_block, run_command, BlockOutput};
