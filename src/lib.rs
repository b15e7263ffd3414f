//! # Ivy Compiler Backend
//!
//! LLVM code generation backend for the Ivy programming language.
//!
//! Ivy is a small scripting language with 64-bit float numbers, booleans,
//! strings, number arrays, and garbage-collected records. This crate takes
//! type-checked programs and produces LLVM IR and native object files; the
//! frontend (lexer, parser, type checker) and the GC runtime are separate
//! components.
//!
//! ## Compiler Pipeline
//!
//! ```text
//! Source -> Lexer -> Parser -> Type Check -> [this crate] -> LLVM IR -> Object Code
//! ```
//!
//! ## Quick Start
//!
//! Allocating a GC-managed record and getting back a typed handle:
//!
//! ```rust
//! use inkwell::context::Context;
//! use ivyc_codegen::{CodegenContext, HeapCodegen, Span, Ty};
//!
//! let context = Context::create();
//! let module = context.create_module("example");
//! let builder = context.create_builder();
//! let codegen = CodegenContext::new(&context, &module, &builder);
//!
//! codegen.begin_function("main", context.void_type().fn_type(&[], false));
//!
//! let point = Ty::record("Point", vec![Ty::Number, Ty::Number]);
//! let handle = codegen.build_gc_allocate(&point, Span::dummy()).unwrap();
//! builder.build_return(None).unwrap();
//! # let _ = handle;
//! ```
//!
//! ## Module Overview
//!
//! - [`codegen`] - LLVM code generation (runtime builtins, heap allocation,
//!   object emission)
//! - [`diagnostics`] - Error reporting infrastructure
//! - [`layout`] - Byte-size computation for source types
//! - [`span`] - Source location tracking
//! - [`ty`] - Source-level type model

pub mod codegen;
pub mod diagnostics;
pub mod layout;
pub mod span;
pub mod ty;

// Re-export commonly used types
pub use codegen::builtins::Builtin;
pub use codegen::{BackendError, CodegenContext, HeapCodegen};
pub use diagnostics::{Diagnostic, DiagnosticEmitter, DiagnosticKind, ErrorCode};
pub use span::{Span, Spanned};
pub use ty::Ty;
