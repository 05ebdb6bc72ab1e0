//! Lowering: the ordered pipeline of passes that rewrites the IR of one
//! file into the form the code generator accepts. Passes for one file
//! run strictly sequentially; independent files can be lowered by
//! independent pipeline instances.

mod cx;
mod pass;
mod pipeline;
pub mod passes;

pub use cx::{Intrinsics, LowerCx};
pub use pass::{LowerError, LoweringPass, PassResult};
pub use pipeline::lower_file;

use passes::{extern_check::CheckBodies, foreign_code::ForeignCodeCalls};

/// The standard pass order. Order is a contract: `CheckBodies` must run
/// after `ForeignCodeCalls`, because only then is a cleared body
/// legitimately "externally bound" rather than missing.
pub fn default_pipeline() -> Vec<Box<dyn LoweringPass>> {
    vec![Box::new(ForeignCodeCalls), Box::new(CheckBodies)]
}
