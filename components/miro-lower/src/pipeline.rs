use miro_collections::Set;
use miro_ir::{
    decl::{Decl, DeclData},
    diagnostic::Diagnostics,
    file::File,
    tables::Tables,
};

use crate::{
    cx::{Intrinsics, LowerCx},
    pass::{LowerError, LoweringPass, PassResult},
};

/// Applies `passes`, in order, to every top-level declaration of `file`,
/// splicing replacement lists at the original positions. User-facing
/// errors land in `diagnostics`; any `Err` aborts this unit's lowering
/// without touching other units.
#[tracing::instrument(level = "debug", skip_all, fields(file = %file.name))]
pub fn lower_file(
    file: &mut File,
    intrinsics: &Intrinsics,
    passes: &mut [Box<dyn LoweringPass>],
    diagnostics: &mut Diagnostics,
) -> Result<(), LowerError> {
    for pass in passes.iter_mut() {
        apply_pass(file, intrinsics, pass.as_mut(), diagnostics)?;
    }
    Ok(())
}

fn apply_pass(
    file: &mut File,
    intrinsics: &Intrinsics,
    pass: &mut dyn LoweringPass,
    diagnostics: &mut Diagnostics,
) -> Result<(), LowerError> {
    tracing::debug!(pass = pass.name(), decls = file.decls.len(), "apply pass");

    let before = std::mem::take(&mut file.decls);
    let mut lowered = Vec::with_capacity(before.len());
    let mut decls = before.clone().into_iter();
    while let Some(decl) = decls.next() {
        let mut cx = LowerCx {
            tables: &mut file.tables,
            spans: &mut file.spans,
            symbols: &mut file.symbols,
            intrinsics,
            diagnostics: &mut *diagnostics,
        };
        match pass.lower_decl(&mut cx, decl) {
            Ok(PassResult::Unchanged) => lowered.push(decl),
            Ok(PassResult::Replaced(replacements)) => {
                tracing::debug!(
                    pass = pass.name(),
                    ?decl,
                    replaced_by = replacements.len(),
                    "declaration replaced"
                );
                lowered.extend(replacements);
            }
            Err(err) => {
                if let LowerError::NonConstantForeignCode { span } = err {
                    miro_ir::error!(span, "foreign code must be a compile-time string constant")
                        .emit(diagnostics);
                }
                // leave the file in a well-formed (if half-lowered) state
                lowered.push(decl);
                lowered.extend(decls);
                file.decls = lowered;
                return Err(err);
            }
        }
    }
    file.decls = lowered;

    check_dangling(file, &before)
}

/// After a pass, no symbol may still be bound to a declaration the pass
/// removed. "Removed" means: reachable from the old top-level list but
/// not from the new one.
fn check_dangling(file: &File, before: &[Decl]) -> Result<(), LowerError> {
    let mut live = Set::default();
    collect_reachable(&file.tables, &file.decls, &mut live);

    let mut removed = Set::default();
    collect_reachable(&file.tables, before, &mut removed);
    removed.retain(|decl| !live.contains(decl));
    if removed.is_empty() {
        return Ok(());
    }

    for symbol in file.symbols.iter() {
        if let Some(decl) = file.symbols.binding(symbol) {
            if removed.contains(&decl) {
                return Err(LowerError::DanglingSymbol { symbol });
            }
        }
    }
    Ok(())
}

fn collect_reachable(tables: &Tables, roots: &[Decl], out: &mut Set<Decl>) {
    let mut stack: Vec<Decl> = roots.to_vec();
    while let Some(decl) = stack.pop() {
        if !out.insert(decl) {
            continue;
        }
        match &tables[decl] {
            DeclData::Property(property) => stack.extend(property.backing_field),
            DeclData::Class(class) => stack.extend(class.members.iter().copied()),
            DeclData::Function(_) | DeclData::Field(_) | DeclData::Variable(_) => {}
        }
    }
}
