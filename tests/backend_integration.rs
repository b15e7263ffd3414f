//! End-to-end integration tests for the Ivy backend.
//!
//! These tests exercise the public API from module construction through
//! verification and object-file emission.

use inkwell::context::Context;
use ivyc_codegen::{codegen, CodegenContext, ErrorCode, HeapCodegen, Span, Ty};

/// Build a module whose `main` allocates a three-field record and an array.
fn build_demo_module(context: &Context) -> inkwell::module::Module<'_> {
    let module = context.create_module("demo");
    let builder = context.create_builder();
    let gen = CodegenContext::new(context, &module, &builder);

    gen.begin_function("main", context.void_type().fn_type(&[], false));

    let point = Ty::record("Point", vec![Ty::Number, Ty::Number, Ty::Number]);
    gen.build_gc_allocate(&point, Span::dummy())
        .expect("record allocation should succeed");

    let array = gen.build_array_new(Span::dummy()).expect("array constructor");
    let value = context.f64_type().const_float(3.5);
    gen.build_array_push(array, value, Span::dummy())
        .expect("array push");
    gen.build_array_length(array, Span::dummy())
        .expect("array length");

    builder.build_return(None).unwrap();
    module
}

#[test]
fn test_demo_module_verifies_and_prints_ir() {
    let context = Context::create();
    let module = build_demo_module(&context);

    assert!(module.verify().is_ok());

    let ir = module.print_to_string().to_string();
    assert!(ir.contains("gc__allocate(i32 24)"), "IR was: {}", ir);
    assert!(ir.contains("Array__number__constructor"));
    assert!(ir.contains("Array__number__push"));
    assert!(ir.contains("Array__number__length"));
}

#[test]
fn test_value_type_rejection_through_public_api() {
    let context = Context::create();
    let module = context.create_module("reject");
    let builder = context.create_builder();
    let gen = CodegenContext::new(&context, &module, &builder);
    gen.begin_function("main", context.void_type().fn_type(&[], false));

    let errors = gen
        .build_gc_allocate(&Ty::Number, Span::new(10, 16, 2, 3))
        .expect_err("allocating a number must fail");

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].code.as_deref(),
        Some(ErrorCode::InvalidAllocationTarget.as_str().as_str())
    );
    assert_eq!(errors[0].span.start, 10);
}

#[test]
fn test_object_file_emission() {
    let context = Context::create();
    let module = build_demo_module(&context);

    let path = std::env::temp_dir().join("ivyc_backend_integration_test.o");
    codegen::write_object_file(&module, &path).expect("object emission should succeed");

    let metadata = std::fs::metadata(&path).expect("object file should exist");
    assert!(metadata.len() > 0);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_native_target_machine_initializes() {
    assert!(codegen::native_target_machine().is_ok());
}
