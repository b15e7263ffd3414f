//! Type lowering for code generation.
//!
//! Converts source-level types to LLVM types. Numbers are `f64`, booleans
//! `i1`; strings and arrays lower to the runtime's opaque byte pointer, and
//! records lower to a struct of their lowered fields.

use inkwell::context::Context;
use inkwell::types::{BasicType, BasicTypeEnum, PointerType};
use inkwell::AddressSpace;

use crate::ty::Ty;

/// Lower a source type to its LLVM representation.
pub fn lower_type<'ctx>(context: &'ctx Context, ty: &Ty) -> BasicTypeEnum<'ctx> {
    match ty {
        Ty::Number => context.f64_type().into(),
        Ty::Boolean => context.bool_type().into(),
        // Runtime handles are untyped on the LLVM side
        Ty::String | Ty::Array => {
            context.i8_type().ptr_type(AddressSpace::default()).into()
        }
        Ty::Record(record) => {
            let field_types: Vec<BasicTypeEnum> = record
                .fields
                .iter()
                .map(|field| lower_type(context, field))
                .collect();
            context.struct_type(&field_types, false).into()
        }
    }
}

/// The pointer type for a heap reference to `ty`.
pub fn pointer_to<'ctx>(context: &'ctx Context, ty: &Ty) -> PointerType<'ctx> {
    lower_type(context, ty).ptr_type(AddressSpace::default())
}
