//! Heap allocation and array code generation.
//!
//! This module emits the call sites for the GC runtime: typed object
//! allocation and the number-array operations. The runtime hands storage
//! back as untyped byte pointers; the single pointer reinterpretation that
//! restores a typed view lives in [`HeapCodegen::build_gc_allocate`], and
//! no other call site performs one.

use inkwell::values::{FloatValue, PointerValue};

use crate::diagnostics::{Diagnostic, ErrorCode};
use crate::layout;
use crate::span::Span;
use crate::ty::Ty;

use super::builtins::{self, Builtin};
use super::types;
use super::CodegenContext;

/// Extension trait for heap and array operations.
pub trait HeapCodegen<'ctx> {
    /// Allocate GC storage for a value of `ty` and return a typed pointer
    /// to it.
    ///
    /// The storage is raw: no zeroing, no field initialization. The caller
    /// wires the returned pointer into the surrounding expression and is
    /// responsible for initializing every field before first read.
    ///
    /// Fails if `ty` is a value type; value types never have heap identity.
    fn build_gc_allocate(
        &self,
        ty: &Ty,
        span: Span,
    ) -> Result<PointerValue<'ctx>, Vec<Diagnostic>>;

    /// Construct an empty number array, returning its runtime handle.
    fn build_array_new(&self, span: Span) -> Result<PointerValue<'ctx>, Vec<Diagnostic>>;

    /// Append `value` to `array`.
    fn build_array_push(
        &self,
        array: PointerValue<'ctx>,
        value: FloatValue<'ctx>,
        span: Span,
    ) -> Result<(), Vec<Diagnostic>>;

    /// The address of element `index` of `array`, usable for loads and
    /// stores.
    fn build_array_subscript(
        &self,
        array: PointerValue<'ctx>,
        index: FloatValue<'ctx>,
        span: Span,
    ) -> Result<PointerValue<'ctx>, Vec<Diagnostic>>;

    /// The element count of `array`.
    fn build_array_length(
        &self,
        array: PointerValue<'ctx>,
        span: Span,
    ) -> Result<FloatValue<'ctx>, Vec<Diagnostic>>;
}

impl<'ctx, 'a> HeapCodegen<'ctx> for CodegenContext<'ctx, 'a> {
    fn build_gc_allocate(
        &self,
        ty: &Ty,
        span: Span,
    ) -> Result<PointerValue<'ctx>, Vec<Diagnostic>> {
        // Value types live inline; a heap allocation request for one is a
        // defect in the calling phase, surfaced as a compile error.
        if ty.is_value_type() {
            return Err(vec![Diagnostic::error(
                format!("cannot heap-allocate value type `{}`", ty),
                span,
            )
            .with_error_code(ErrorCode::InvalidAllocationTarget)]);
        }

        // The layout service's size is authoritative; the rest of codegen
        // lays fields out against the same computation.
        let size = layout::size_of(ty);

        // The runtime takes the size as u32.
        if size > u32::MAX as u64 {
            return Err(vec![Diagnostic::error(
                format!("type `{}` is too large to allocate ({} bytes)", ty, size),
                span,
            )
            .with_error_code(ErrorCode::AllocationTooLarge)]);
        }

        let allocate = builtins::declare(Builtin::GcAllocate, self.context, self.module);
        let size_value = self.context.i32_type().const_int(size, false);

        let raw = self
            .builder
            .build_call(allocate, &[size_value.into()], "gc_alloc")
            .map_err(|e| vec![Diagnostic::error(format!("LLVM call error: {}", e), span)])?
            .try_as_basic_value()
            .left()
            .ok_or_else(|| {
                vec![Diagnostic::error(
                    "gc__allocate returned void unexpectedly",
                    span,
                )]
            })?
            .into_pointer_value();

        // Reinterpret the untyped allocation as a pointer to `ty`. Valid
        // only because the value-type check passed and the allocation is
        // exactly size_of(ty) bytes.
        let typed = self
            .builder
            .build_pointer_cast(raw, types::pointer_to(self.context, ty), "gc_alloc_typed")
            .map_err(|e| {
                vec![Diagnostic::error(
                    format!("LLVM pointer cast error: {}", e),
                    span,
                )]
            })?;

        tracing::debug!(ty = %ty, size, "emitted GC allocation");

        Ok(typed)
    }

    fn build_array_new(&self, span: Span) -> Result<PointerValue<'ctx>, Vec<Diagnostic>> {
        let constructor =
            builtins::declare(Builtin::ArrayConstructor, self.context, self.module);

        self.builder
            .build_call(constructor, &[], "array_new")
            .map_err(|e| vec![Diagnostic::error(format!("LLVM call error: {}", e), span)])?
            .try_as_basic_value()
            .left()
            .map(|value| value.into_pointer_value())
            .ok_or_else(|| {
                vec![Diagnostic::error(
                    "array constructor returned void unexpectedly",
                    span,
                )]
            })
    }

    fn build_array_push(
        &self,
        array: PointerValue<'ctx>,
        value: FloatValue<'ctx>,
        span: Span,
    ) -> Result<(), Vec<Diagnostic>> {
        let push = builtins::declare(Builtin::ArrayPush, self.context, self.module);

        self.builder
            .build_call(push, &[array.into(), value.into()], "")
            .map_err(|e| vec![Diagnostic::error(format!("LLVM call error: {}", e), span)])?;

        Ok(())
    }

    fn build_array_subscript(
        &self,
        array: PointerValue<'ctx>,
        index: FloatValue<'ctx>,
        span: Span,
    ) -> Result<PointerValue<'ctx>, Vec<Diagnostic>> {
        let subscript = builtins::declare(Builtin::ArraySubscript, self.context, self.module);

        self.builder
            .build_call(subscript, &[array.into(), index.into()], "array_elem")
            .map_err(|e| vec![Diagnostic::error(format!("LLVM call error: {}", e), span)])?
            .try_as_basic_value()
            .left()
            .map(|value| value.into_pointer_value())
            .ok_or_else(|| {
                vec![Diagnostic::error(
                    "array subscript returned void unexpectedly",
                    span,
                )]
            })
    }

    fn build_array_length(
        &self,
        array: PointerValue<'ctx>,
        span: Span,
    ) -> Result<FloatValue<'ctx>, Vec<Diagnostic>> {
        let length = builtins::declare(Builtin::ArrayLength, self.context, self.module);

        self.builder
            .build_call(length, &[array.into()], "array_len")
            .map_err(|e| vec![Diagnostic::error(format!("LLVM call error: {}", e), span)])?
            .try_as_basic_value()
            .left()
            .map(|value| value.into_float_value())
            .ok_or_else(|| {
                vec![Diagnostic::error(
                    "array length returned void unexpectedly",
                    span,
                )]
            })
    }
}
