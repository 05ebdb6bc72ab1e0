//! Hoists calls to the foreign-code intrinsic out of ordinary bodies.
//!
//! The code generator cannot compile embedded foreign source text
//! inline; it only understands it at a declaration boundary. So a
//! function whose body is exactly one intrinsic call (returned or in
//! statement position) loses its body and gains a wrapper-text
//! annotation, and a property whose backing field is initialized from
//! the intrinsic is split into the property plus a brand-new
//! externally-bound function.

use miro_ir::{
    builder::ExprFactory,
    decl::{Decl, DeclData, FunctionData},
    expr::{ConstantData, Expr, ExprKind},
    symbol::SymbolKind,
    ty::Ty,
    word::Word,
};

use crate::{
    cx::LowerCx,
    pass::{LowerError, LoweringPass, PassResult},
};

pub struct ForeignCodeCalls;

/// Whether the matched intrinsic call sat in expression position
/// (`return embed(..)`) or statement position (`embed(..);`). The
/// wrapper text differs: an expression-position call becomes a bare
/// arrow body, a statement-position call a braced one.
#[derive(Copy, Clone, Debug)]
enum Position {
    Expression,
    Statement,
}

impl LoweringPass for ForeignCodeCalls {
    fn name(&self) -> &'static str {
        "foreign-code-calls"
    }

    fn lower_decl(&mut self, cx: &mut LowerCx<'_>, decl: Decl) -> Result<PassResult, LowerError> {
        match &cx.tables[decl] {
            DeclData::Function(_) => self.lower_function(cx, decl),
            DeclData::Property(_) => self.lower_property(cx, decl),
            _ => Ok(PassResult::Unchanged),
        }
    }
}

impl ForeignCodeCalls {
    /// A function whose body is exactly one matching statement keeps its
    /// declaration (and symbol) and is mutated in place: annotation
    /// attached, body cleared. Bodiless functions are already lowered
    /// and come back `Unchanged`, which makes the pass idempotent.
    fn lower_function(&self, cx: &mut LowerCx<'_>, decl: Decl) -> Result<PassResult, LowerError> {
        let (stmt, params) = {
            let DeclData::Function(function) = &cx.tables[decl] else {
                return Ok(PassResult::Unchanged);
            };
            let Some(body) = &function.body else {
                return Ok(PassResult::Unchanged);
            };
            let &[stmt] = &body[..] else {
                return Ok(PassResult::Unchanged);
            };
            let params: Vec<Word> = function.parameters.iter().map(|p| p.name).collect();
            (stmt, params)
        };

        let (position, call) = match &cx.tables[stmt].kind {
            ExprKind::Return(value) if is_intrinsic_call(cx, *value) => {
                (Position::Expression, *value)
            }
            ExprKind::Call { callee, .. } if *callee == cx.intrinsics.foreign_code => {
                (Position::Statement, stmt)
            }
            _ => return Ok(PassResult::Unchanged),
        };

        let (code_word, code_ty) = extract_code(cx, call)?;
        let code = code_word.as_str(cx.tables).to_string();
        let params_text = params
            .iter()
            .map(|p| p.as_str(cx.tables))
            .collect::<Vec<_>>()
            .join(", ");
        let wrapper = match position {
            Position::Expression => format!("({params_text}) => {code}"),
            Position::Statement => format!("({params_text}) => {{ {code} }}"),
        };

        let call_span = cx.spans.get(call);
        let annotation = {
            let mut factory = ExprFactory::new(cx.tables, cx.spans, call_span);
            let text = factory.string_constant(wrapper, code_ty);
            factory.annotation(cx.intrinsics.foreign_fun, vec![text])
        };

        let DeclData::Function(function) = &mut cx.tables[decl] else {
            return Ok(PassResult::Unchanged);
        };
        function.annotations.push(annotation);
        function.body = None;
        tracing::debug!(?decl, ?position, "externalized foreign code call");
        Ok(PassResult::Unchanged)
    }

    /// A property initializer cannot itself be marked externally bound;
    /// only a function declaration can. So the initializer's code moves
    /// into a brand-new zero-parameter function and the field is
    /// rewritten to call it. Both declarations are returned, property
    /// first.
    fn lower_property(&self, cx: &mut LowerCx<'_>, decl: Decl) -> Result<PassResult, LowerError> {
        let (field, property_name) = {
            let DeclData::Property(property) = &cx.tables[decl] else {
                return Ok(PassResult::Unchanged);
            };
            let Some(field) = property.backing_field else {
                return Ok(PassResult::Unchanged);
            };
            (field, property.name)
        };
        let (init, field_ty) = {
            let DeclData::Field(field_data) = &cx.tables[field] else {
                return Ok(PassResult::Unchanged);
            };
            let Some(init) = field_data.initializer else {
                return Ok(PassResult::Unchanged);
            };
            (init, field_data.ty)
        };
        if !is_intrinsic_call(cx, init) {
            return Ok(PassResult::Unchanged);
        }

        let (code_word, code_ty) = extract_code(cx, init)?;
        let code = code_word.as_str(cx.tables).to_string();
        let wrapper = format!("() => ({code})");
        let function_name = {
            let text = format!("{}$code", property_name.as_str(cx.tables));
            Word::intern(cx.tables, text)
        };

        let call_span = cx.spans.get(init);
        let function_symbol = cx.symbols.create(SymbolKind::Function);
        let (annotation, init_call) = {
            let mut factory = ExprFactory::new(cx.tables, cx.spans, call_span);
            let text = factory.string_constant(wrapper, code_ty);
            let annotation = factory.annotation(cx.intrinsics.foreign_fun, vec![text]);
            let init_call = factory.call(function_symbol, vec![], field_ty);
            (annotation, init_call)
        };

        let function: DeclData = FunctionData {
            name: function_name,
            symbol: function_symbol,
            parameters: vec![],
            return_ty: field_ty,
            body: None,
            annotations: vec![annotation],
        }
        .into();
        let new_decl = cx.tables.add(function);
        cx.spans.push(new_decl, call_span);
        cx.symbols.bind(function_symbol, new_decl)?;

        let DeclData::Field(field_data) = &mut cx.tables[field] else {
            return Ok(PassResult::Unchanged);
        };
        field_data.initializer = Some(init_call);
        tracing::debug!(?decl, ?new_decl, "outlined foreign code initializer");
        Ok(PassResult::Replaced(vec![decl, new_decl]))
    }
}

fn is_intrinsic_call(cx: &LowerCx<'_>, expr: Expr) -> bool {
    matches!(
        &cx.tables[expr].kind,
        ExprKind::Call { callee, .. } if *callee == cx.intrinsics.foreign_code
    )
}

/// The intrinsic's sole recognized shape is one compile-time string
/// constant. Anything else -- wrong arity, a variable, a computed
/// expression -- is a diagnosed compile error at the offending span,
/// never a crash.
fn extract_code(cx: &LowerCx<'_>, call: Expr) -> Result<(Word, Ty), LowerError> {
    let ExprKind::Call { arguments, .. } = &cx.tables[call].kind else {
        return Err(LowerError::NonConstantForeignCode {
            span: cx.spans.get(call),
        });
    };
    let &[argument] = &arguments[..] else {
        return Err(LowerError::NonConstantForeignCode {
            span: cx.spans.get(call),
        });
    };
    let data = &cx.tables[argument];
    match &data.kind {
        ExprKind::Constant(ConstantData::String(word)) => Ok((*word, data.ty)),
        _ => Err(LowerError::NonConstantForeignCode {
            span: cx.spans.get(argument),
        }),
    }
}
