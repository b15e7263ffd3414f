//! Code generation context.
//!
//! The context bundles the LLVM handles that every emission helper needs:
//! the context, the module being built (one per compilation unit), and the
//! instruction builder positioned where the next instruction goes.

use inkwell::builder::Builder;
use inkwell::context::Context;
use inkwell::module::Module;
use inkwell::types::FunctionType;
use inkwell::values::FunctionValue;

/// The code generation context for one compilation unit.
///
/// Each unit owns its own module and therefore its own builtin
/// declarations; compiling several units concurrently requires one context
/// per unit and no sharing.
pub struct CodegenContext<'ctx, 'a> {
    /// The LLVM context.
    pub context: &'ctx Context,
    /// The LLVM module being built.
    pub module: &'a Module<'ctx>,
    /// The LLVM IR builder.
    pub builder: &'a Builder<'ctx>,
}

impl<'ctx, 'a> CodegenContext<'ctx, 'a> {
    /// Create a new code generation context.
    pub fn new(
        context: &'ctx Context,
        module: &'a Module<'ctx>,
        builder: &'a Builder<'ctx>,
    ) -> Self {
        Self {
            context,
            module,
            builder,
        }
    }

    /// Add a function to the module and position the builder at the start
    /// of its fresh entry block.
    pub fn begin_function(
        &self,
        name: &str,
        fn_type: FunctionType<'ctx>,
    ) -> FunctionValue<'ctx> {
        let function = self.module.add_function(name, fn_type, None);
        let entry = self.context.append_basic_block(function, "entry");
        self.builder.position_at_end(entry);
        function
    }
}
