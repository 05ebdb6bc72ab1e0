//! End-to-end tests for the lowering pipeline: foreign-code extraction,
//! splice order, body validation, and the dangling-symbol check.

use miro_ir::{
    decl::{Annotation, Decl, FieldData, FunctionData, Parameter, PropertyData},
    diagnostic::Diagnostics,
    expr::{ConstantData, Expr, ExprData, ExprKind},
    file::File,
    span::Span,
    symbol::SymbolKind,
    ty::Ty,
    word::Word,
};
use miro_lower::{
    default_pipeline, lower_file, passes::foreign_code::ForeignCodeCalls, Intrinsics, LowerCx,
    LowerError, LoweringPass, PassResult,
};

struct Fixture {
    file: File,
    intrinsics: Intrinsics,
    int_ty: Ty,
    string_ty: Ty,
    unit_ty: Ty,
}

impl Fixture {
    fn new() -> Self {
        let mut file = File::new("fixture.miro");
        let intrinsics = Intrinsics {
            foreign_code: file.symbols.create(SymbolKind::Function),
            foreign_fun: file.symbols.create(SymbolKind::Class),
        };
        let int_ty = Ty::named(&mut file.tables, "Int");
        let string_ty = Ty::named(&mut file.tables, "String");
        let unit_ty = Ty::unit(&mut file.tables);
        Self {
            file,
            intrinsics,
            int_ty,
            string_ty,
            unit_ty,
        }
    }

    fn expr(&mut self, kind: ExprKind, ty: Ty, span: Span) -> Expr {
        self.file.add_expr(ExprData { ty, kind }, span)
    }

    /// `embed("<code>")` -- a call to the foreign-code intrinsic with a
    /// string-constant argument.
    fn embed_call(&mut self, code: &str, ty: Ty) -> Expr {
        let word = Word::intern(&mut self.file.tables, code);
        let string_ty = self.string_ty;
        let argument = self.expr(
            ExprKind::Constant(ConstantData::String(word)),
            string_ty,
            Span::from(10u32, 10 + code.len() as u32),
        );
        self.expr(
            ExprKind::Call {
                callee: self.intrinsics.foreign_code,
                arguments: vec![argument],
            },
            ty,
            Span::from(4u32, 12 + code.len() as u32),
        )
    }

    fn function(
        &mut self,
        name: &str,
        parameters: &[(&str, Ty)],
        return_ty: Ty,
        body: Option<Vec<Expr>>,
    ) -> Decl {
        let name = Word::intern(&mut self.file.tables, name);
        let parameters = parameters
            .iter()
            .map(|&(name, ty)| Parameter {
                name: Word::intern(&mut self.file.tables, name),
                ty,
            })
            .collect();
        let symbol = self.file.symbols.create(SymbolKind::Function);
        self.file
            .declare_bound(
                FunctionData {
                    name,
                    symbol,
                    parameters,
                    return_ty,
                    body,
                    annotations: vec![],
                }
                .into(),
                Span::from(0u32, 40u32),
            )
            .unwrap()
    }

    /// A property with a backing field whose initializer is `init`.
    fn property(&mut self, name: &str, ty: Ty, init: Option<Expr>) -> Decl {
        let field_name = Word::intern(&mut self.file.tables, name);
        let field_symbol = self.file.symbols.create(SymbolKind::Field);
        let field = self
            .file
            .declare_bound(
                FieldData {
                    name: field_name,
                    symbol: field_symbol,
                    ty,
                    initializer: init,
                }
                .into(),
                Span::from(0u32, 30u32),
            )
            .unwrap();
        let symbol = self.file.symbols.create(SymbolKind::Property);
        self.file
            .declare_bound(
                PropertyData {
                    name: field_name,
                    symbol,
                    ty,
                    backing_field: Some(field),
                }
                .into(),
                Span::from(0u32, 30u32),
            )
            .unwrap()
    }

    fn lower(&mut self) -> Result<Diagnostics, LowerError> {
        let mut diagnostics = Diagnostics::default();
        lower_file(
            &mut self.file,
            &self.intrinsics,
            &mut default_pipeline(),
            &mut diagnostics,
        )?;
        Ok(diagnostics)
    }

    fn annotation_text(&self, annotation: &Annotation) -> &str {
        assert_eq!(annotation.ctor, self.intrinsics.foreign_fun);
        let &[argument] = &annotation.arguments[..] else {
            panic!("annotation must have exactly one argument");
        };
        match &self.file.tables[argument].kind {
            ExprKind::Constant(ConstantData::String(word)) => word.as_str(&self.file.tables),
            kind => panic!("annotation argument is not a string constant: {kind:?}"),
        }
    }
}

#[test]
fn return_position_call_is_externalized() {
    // fun f(): Int { return embed("1+1") }
    let mut fx = Fixture::new();
    let call = fx.embed_call("1+1", fx.int_ty);
    let unit_ty = fx.unit_ty;
    let ret = fx.expr(ExprKind::Return(call), unit_ty, Span::from(4u32, 24u32));
    let int_ty = fx.int_ty;
    let f = fx.function("f", &[], int_ty, Some(vec![ret]));
    fx.file.append(f);

    let diagnostics = fx.lower().unwrap();
    assert!(diagnostics.is_empty());
    assert_eq!(fx.file.decls, vec![f]);

    let function = fx.file.tables[f].as_function().unwrap();
    assert!(function.body.is_none());
    assert_eq!(function.annotations.len(), 1);
    assert_eq!(fx.annotation_text(&function.annotations[0]), "() => 1+1");
}

#[test]
fn statement_position_call_gets_braced_wrapper() {
    // fun g(a: Int, b: Int) { embed("a+b") }
    let mut fx = Fixture::new();
    let unit_ty = fx.unit_ty;
    let int_ty = fx.int_ty;
    let call = fx.embed_call("a+b", unit_ty);
    let g = fx.function("g", &[("a", int_ty), ("b", int_ty)], unit_ty, Some(vec![call]));
    fx.file.append(g);

    let diagnostics = fx.lower().unwrap();
    assert!(diagnostics.is_empty());

    let function = fx.file.tables[g].as_function().unwrap();
    assert!(function.body.is_none());
    assert_eq!(
        fx.annotation_text(&function.annotations[0]),
        "(a, b) => { a+b }"
    );
}

#[test]
fn property_initializer_is_outlined_into_new_function() {
    // val p: Int = embed("42")
    let mut fx = Fixture::new();
    let int_ty = fx.int_ty;
    let init = fx.embed_call("42", int_ty);
    let p = fx.property("p", int_ty, Some(init));
    fx.file.append(p);

    let diagnostics = fx.lower().unwrap();
    assert!(diagnostics.is_empty());
    assert_eq!(fx.file.decls.len(), 2);
    assert_eq!(fx.file.decls[0], p);

    let outlined = fx.file.decls[1];
    let function = fx.file.tables[outlined].as_function().unwrap();
    assert!(function.parameters.is_empty());
    assert_eq!(function.return_ty, int_ty);
    assert!(function.body.is_none());
    assert_eq!(fx.annotation_text(&function.annotations[0]), "() => (42)");
    assert_eq!(function.name.as_str(&fx.file.tables), "p$code");

    // new function's symbol resolves to the new declaration
    assert_eq!(fx.file.symbols.dereference(function.symbol), Ok(outlined));

    // the field now calls the new function instead of embedding code
    let property = fx.file.tables[p].as_property().unwrap();
    let field = fx.file.tables[property.backing_field.unwrap()]
        .as_field()
        .unwrap();
    match &fx.file.tables[field.initializer.unwrap()].kind {
        ExprKind::Call { callee, arguments } => {
            assert_eq!(*callee, fx.file.tables[outlined].as_function().unwrap().symbol);
            assert!(arguments.is_empty());
        }
        kind => panic!("field initializer is not a call: {kind:?}"),
    }
}

#[test]
fn non_constant_code_is_a_diagnosed_error() {
    // val q: Int = embed(someVariable)
    let mut fx = Fixture::new();
    let int_ty = fx.int_ty;
    let variable = fx.file.symbols.create(SymbolKind::Variable);
    let argument_span = Span::from(30u32, 42u32);
    let argument = fx.expr(ExprKind::VariableRef(variable), int_ty, argument_span);
    let call = fx.expr(
        ExprKind::Call {
            callee: fx.intrinsics.foreign_code,
            arguments: vec![argument],
        },
        int_ty,
        Span::from(26u32, 43u32),
    );
    let q = fx.property("q", int_ty, Some(call));
    fx.file.append(q);

    let mut diagnostics = Diagnostics::default();
    let result = lower_file(
        &mut fx.file,
        &fx.intrinsics,
        &mut default_pipeline(),
        &mut diagnostics,
    );
    assert_eq!(
        result,
        Err(LowerError::NonConstantForeignCode {
            span: argument_span
        })
    );
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn runner_preserves_declaration_order_across_splices() {
    // five declarations; only the third (a property) is eligible and
    // becomes two, so the result is six with everything else in place
    let mut fx = Fixture::new();
    let int_ty = fx.int_ty;
    let unit_ty = fx.unit_ty;
    let d1 = fx.function("one", &[], unit_ty, Some(vec![]));
    let d2 = fx.function("two", &[], unit_ty, Some(vec![]));
    let init = fx.embed_call("42", int_ty);
    let d3 = fx.property("three", int_ty, Some(init));
    let d4 = fx.function("four", &[], unit_ty, Some(vec![]));
    let d5 = fx.function("five", &[], unit_ty, Some(vec![]));
    for decl in [d1, d2, d3, d4, d5] {
        fx.file.append(decl);
    }

    let mut diagnostics = Diagnostics::default();
    lower_file(
        &mut fx.file,
        &fx.intrinsics,
        &mut [Box::new(ForeignCodeCalls) as Box<dyn LoweringPass>],
        &mut diagnostics,
    )
    .unwrap();

    assert_eq!(fx.file.decls.len(), 6);
    assert_eq!(fx.file.decls[0], d1);
    assert_eq!(fx.file.decls[1], d2);
    assert_eq!(fx.file.decls[2], d3);
    assert_eq!(fx.file.decls[4], d4);
    assert_eq!(fx.file.decls[5], d5);
    // the outlined function sits directly after its property
    assert!(fx.file.tables[fx.file.decls[3]].as_function().is_some());
}

#[test]
fn pass_is_idempotent_on_lowered_declarations() {
    let mut fx = Fixture::new();
    let int_ty = fx.int_ty;
    let unit_ty = fx.unit_ty;
    let call = fx.embed_call("1+1", int_ty);
    let ret = fx.expr(ExprKind::Return(call), unit_ty, Span::from(4u32, 24u32));
    let f = fx.function("f", &[], int_ty, Some(vec![ret]));
    fx.file.append(f);

    fx.lower().unwrap();
    let after_first = fx.file.tables[f].clone();

    // re-running the whole pipeline must change nothing further
    fx.lower().unwrap();
    assert_eq!(fx.file.tables[f], after_first);
    assert_eq!(fx.file.decls, vec![f]);
    assert_eq!(
        fx.file.tables[f].as_function().unwrap().annotations.len(),
        1
    );
}

#[test]
fn check_bodies_rejects_unannotated_bodiless_functions() {
    let mut fx = Fixture::new();
    let unit_ty = fx.unit_ty;
    let f = fx.function("ghost", &[], unit_ty, None);
    fx.file.append(f);

    let diagnostics = fx.lower().unwrap();
    assert_eq!(diagnostics.len(), 1);
    let diagnostic = diagnostics.iter().next().unwrap();
    assert!(diagnostic.message.contains("ghost"));
}

#[test]
fn check_bodies_accepts_externalized_functions() {
    let mut fx = Fixture::new();
    let int_ty = fx.int_ty;
    let unit_ty = fx.unit_ty;
    let call = fx.embed_call("1+1", int_ty);
    let ret = fx.expr(ExprKind::Return(call), unit_ty, Span::from(4u32, 24u32));
    let f = fx.function("f", &[], int_ty, Some(vec![ret]));
    fx.file.append(f);

    // ForeignCodeCalls clears the body; CheckBodies runs after and must
    // treat the annotated result as legitimately externally bound
    let diagnostics = fx.lower().unwrap();
    assert!(diagnostics.is_empty());
}

/// A deliberately buggy pass: deletes every declaration without
/// unbinding the symbols that point at it.
struct DeleteAll;

impl LoweringPass for DeleteAll {
    fn name(&self) -> &'static str {
        "delete-all"
    }

    fn lower_decl(&mut self, _cx: &mut LowerCx<'_>, _decl: Decl) -> Result<PassResult, LowerError> {
        Ok(PassResult::Replaced(vec![]))
    }
}

#[test]
fn runner_catches_dangling_symbols_after_deletion() {
    let mut fx = Fixture::new();
    let unit_ty = fx.unit_ty;
    let f = fx.function("doomed", &[], unit_ty, Some(vec![]));
    fx.file.append(f);
    let symbol = fx.file.tables[f].symbol();

    let mut diagnostics = Diagnostics::default();
    let result = lower_file(
        &mut fx.file,
        &fx.intrinsics,
        &mut [Box::new(DeleteAll) as Box<dyn LoweringPass>],
        &mut diagnostics,
    );
    assert_eq!(result, Err(LowerError::DanglingSymbol { symbol }));
}

#[test]
fn delete_after_unbind_is_clean() {
    let mut fx = Fixture::new();
    let unit_ty = fx.unit_ty;
    let f = fx.function("gone", &[], unit_ty, Some(vec![]));
    fx.file.append(f);

    /// Deletes function declarations properly: unbind first.
    struct DeleteFunctions;

    impl LoweringPass for DeleteFunctions {
        fn name(&self) -> &'static str {
            "delete-functions"
        }

        fn lower_decl(
            &mut self,
            cx: &mut LowerCx<'_>,
            decl: Decl,
        ) -> Result<PassResult, LowerError> {
            let symbol = cx.tables[decl].symbol();
            cx.symbols.unbind(symbol)?;
            Ok(PassResult::Replaced(vec![]))
        }
    }

    let mut diagnostics = Diagnostics::default();
    lower_file(
        &mut fx.file,
        &fx.intrinsics,
        &mut [Box::new(DeleteFunctions) as Box<dyn LoweringPass>],
        &mut diagnostics,
    )
    .unwrap();
    assert!(fx.file.decls.is_empty());
}
