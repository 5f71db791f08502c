mod convert;
mod driver;
mod error;
mod ir;
mod options;
mod parse;

pub use convert::{
    convert_ambient_decl, convert_interface, convert_maybe_type, convert_module_items,
    convert_type, extract_method, Conversion, ParamShape, CONSTRUCTOR_NAME, TOO_MANY_CONSTRUCTORS,
};
pub use driver::{convert_declarations, convert_declarations_with, Diagnostics, TracingDiagnostics};
pub use error::Error;
pub use ir::{Class, ClassTag, Method, Param, Type};
pub use options::Options;
pub use parse::parse_declarations;

/// The typescript AST consumed by the converters.
pub use swc_ecma_ast as ast;
