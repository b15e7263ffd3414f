//! Runtime builtin declarations.
//!
//! Generated programs call into a runtime library for GC allocation and
//! array operations. The runtime is linked at load time; the compiler only
//! declares these functions, it never defines their bodies.
//!
//! Each builtin has exactly one signature, fixed by the runtime ABI. The
//! signatures are described abstractly as [`Signature`] values so they can
//! be checked without an LLVM context, and lowered to LLVM function types
//! on demand.

use inkwell::context::Context;
use inkwell::module::Module;
use inkwell::types::{BasicMetadataTypeEnum, BasicType, BasicTypeEnum, FunctionType};
use inkwell::values::FunctionValue;
use inkwell::AddressSpace;

/// The closed set of runtime entry points a generated program may call.
///
/// Adding a builtin means adding a variant here and extending the matches
/// in [`Builtin::link_name`] and [`Builtin::signature`]; the compiler
/// rejects a partial extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// GC allocation primitive: takes a byte count, returns raw storage.
    GcAllocate,
    /// Construct an empty number array.
    ArrayConstructor,
    /// Append a number to an array.
    ArrayPush,
    /// Address of an element, for reads and writes.
    ArraySubscript,
    /// Number of elements, as a number.
    ArrayLength,
}

impl Builtin {
    /// Every builtin, for exhaustive declaration checks.
    pub const ALL: [Builtin; 5] = [
        Builtin::GcAllocate,
        Builtin::ArrayConstructor,
        Builtin::ArrayPush,
        Builtin::ArraySubscript,
        Builtin::ArrayLength,
    ];

    /// The symbol name the generated program links against.
    pub fn link_name(self) -> &'static str {
        match self {
            Builtin::GcAllocate => "gc__allocate",
            Builtin::ArrayConstructor => "Array__number__constructor",
            Builtin::ArrayPush => "Array__number__push",
            Builtin::ArraySubscript => "Array__number__subscript",
            Builtin::ArrayLength => "Array__number__length",
        }
    }

    /// The builtin's call signature, per the runtime ABI.
    pub fn signature(self) -> Signature {
        match self {
            // gc__allocate(size: i32) -> *i8
            Builtin::GcAllocate => Signature {
                params: &[ValueKind::Int32],
                ret: Some(ValueKind::BytePtr),
            },
            // Array__number__constructor() -> *i8
            Builtin::ArrayConstructor => Signature {
                params: &[],
                ret: Some(ValueKind::BytePtr),
            },
            // Array__number__push(array: *i8, value: f64) -> void
            Builtin::ArrayPush => Signature {
                params: &[ValueKind::BytePtr, ValueKind::Float64],
                ret: None,
            },
            // Array__number__subscript(array: *i8, index: f64) -> *f64
            Builtin::ArraySubscript => Signature {
                params: &[ValueKind::BytePtr, ValueKind::Float64],
                ret: Some(ValueKind::Float64Ptr),
            },
            // Array__number__length(array: *i8) -> f64
            Builtin::ArrayLength => Signature {
                params: &[ValueKind::BytePtr],
                ret: Some(ValueKind::Float64),
            },
        }
    }
}

/// The kinds of values crossing the runtime ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Opaque byte pointer (`*i8`), the runtime's untyped handle currency.
    BytePtr,
    /// 32-bit integer, used for allocation sizes.
    Int32,
    /// 64-bit float, the language's number type.
    Float64,
    /// Pointer to a 64-bit float, for element access.
    Float64Ptr,
}

impl ValueKind {
    /// Lower this kind to the corresponding LLVM type.
    pub fn basic_type(self, context: &Context) -> BasicTypeEnum<'_> {
        match self {
            ValueKind::BytePtr => context.i8_type().ptr_type(AddressSpace::default()).into(),
            ValueKind::Int32 => context.i32_type().into(),
            ValueKind::Float64 => context.f64_type().into(),
            ValueKind::Float64Ptr => context.f64_type().ptr_type(AddressSpace::default()).into(),
        }
    }
}

/// A builtin's call signature: parameter kinds plus return kind.
///
/// A `None` return is void.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub params: &'static [ValueKind],
    pub ret: Option<ValueKind>,
}

/// Lower a builtin's signature to an LLVM function type.
pub fn function_type(builtin: Builtin, context: &Context) -> FunctionType<'_> {
    let signature = builtin.signature();
    let params: Vec<BasicMetadataTypeEnum> = signature
        .params
        .iter()
        .map(|kind| kind.basic_type(context).into())
        .collect();
    match signature.ret {
        Some(kind) => kind.basic_type(context).fn_type(&params, false),
        None => context.void_type().fn_type(&params, false),
    }
}

/// Get the declaration for a builtin in `module`, declaring it on first use.
///
/// At most one declaration per builtin ever exists in a module: repeated
/// calls return the same function value, so call sites emitted from
/// unrelated code paths all link against one symbol.
pub fn declare<'ctx>(
    builtin: Builtin,
    context: &'ctx Context,
    module: &Module<'ctx>,
) -> FunctionValue<'ctx> {
    module.get_function(builtin.link_name()).unwrap_or_else(|| {
        tracing::debug!(builtin = builtin.link_name(), "declaring runtime builtin");
        module.add_function(builtin.link_name(), function_type(builtin, context), None)
    })
}
