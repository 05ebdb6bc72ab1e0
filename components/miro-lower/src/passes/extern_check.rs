//! Validation of body presence, run after the externalizing passes.
//! By the time this runs, a bodiless function is legitimate exactly
//! when something marked it externally bound (an annotation); a
//! bodiless function with no annotation lost its body to a bug.

use miro_ir::decl::{Decl, DeclData};

use crate::{
    cx::LowerCx,
    pass::{LowerError, LoweringPass, PassResult},
};

pub struct CheckBodies;

impl LoweringPass for CheckBodies {
    fn name(&self) -> &'static str {
        "check-bodies"
    }

    fn lower_decl(&mut self, cx: &mut LowerCx<'_>, decl: Decl) -> Result<PassResult, LowerError> {
        if let DeclData::Function(function) = &cx.tables[decl] {
            if function.body.is_none() && function.annotations.is_empty() {
                let span = cx.spans.get(decl);
                let name = function.name.as_str(cx.tables);
                let message = format!("function `{name}` has no body and is not externally bound");
                miro_ir::error!(span, "{message}").emit(cx.diagnostics);
            }
        }
        Ok(PassResult::Unchanged)
    }
}
