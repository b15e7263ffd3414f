//! Code generation for Ivy.
//!
//! This module generates LLVM IR from type-checked programs. The code
//! generator uses inkwell as a safe wrapper around LLVM.
//!
//! # Architecture
//!
//! ```text
//! Typed AST -> CodegenContext -> LLVM IR -> Object Code
//! ```
//!
//! The pieces here:
//! - Runtime builtin declarations (GC allocation, array operations)
//! - Typed heap allocation
//! - Type lowering (source types to LLVM types)
//! - Object file emission

pub mod builtins;
pub mod context;
pub mod memory;
pub mod types;


pub use context::CodegenContext;
pub use memory::HeapCodegen;

use std::path::Path;

use inkwell::module::Module;
use inkwell::targets::{
    CodeModel, FileType, InitializationConfig, RelocMode, Target, TargetMachine,
};
use inkwell::OptimizationLevel;
use thiserror::Error;

/// Errors from the backend's emission machinery.
///
/// These are infrastructure failures, not source diagnostics: nothing the
/// program author wrote causes them.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to initialize native target: {0}")]
    TargetInit(String),

    #[error("failed to resolve target triple: {0}")]
    TargetLookup(String),

    #[error("failed to create target machine")]
    TargetMachine,

    #[error("LLVM verification failed: {0}")]
    Verification(String),

    #[error("failed to write object file: {0}")]
    WriteObject(String),
}

/// Verify a finished module and write it to an object file.
///
/// The generated object must be linked against the Ivy runtime, which
/// provides the builtin symbols declared during codegen.
pub fn write_object_file(module: &Module, output_path: &Path) -> Result<(), BackendError> {
    if let Err(err) = module.verify() {
        return Err(BackendError::Verification(err.to_string()));
    }

    let target_machine = native_target_machine()?;

    target_machine
        .write_to_file(module, FileType::Object, output_path)
        .map_err(|e| BackendError::WriteObject(e.to_string()))
}

/// Get a target machine for the native platform.
pub fn native_target_machine() -> Result<TargetMachine, BackendError> {
    Target::initialize_native(&InitializationConfig::default())
        .map_err(BackendError::TargetInit)?;

    let triple = TargetMachine::get_default_triple();
    let target =
        Target::from_triple(&triple).map_err(|e| BackendError::TargetLookup(e.to_string()))?;

    let cpu = TargetMachine::get_host_cpu_name();
    let features = TargetMachine::get_host_cpu_features();

    target
        .create_target_machine(
            &triple,
            cpu.to_str().unwrap_or("generic"),
            features.to_str().unwrap_or(""),
            OptimizationLevel::Default,
            RelocMode::PIC, // Required for PIE executables
            CodeModel::Default,
        )
        .ok_or(BackendError::TargetMachine)
}
