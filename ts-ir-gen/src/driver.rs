use crate::convert::{convert_module_items, Conversion};
use crate::error::Error;
use crate::options::Options;
use crate::parse::parse_declarations;
use swc_ecma_ast::Module;
use tracing::{debug, error};

/// Where the driver reports what it observes about the parse.
pub trait Diagnostics {
    /// The source failed to parse; the conversion result will be empty.
    fn parse_failed(&mut self, error: &Error);

    /// Render the parsed tree. Only called when [`Options::renders_tree`].
    fn render_tree(&mut self, module: &Module);
}

/// Sends diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn parse_failed(&mut self, err: &Error) {
        error!("{}", err);
    }

    fn render_tree(&mut self, module: &Module) {
        debug!("parsed declarations:\n{:#?}", module);
    }
}

/// Convert typescript declaration source into IR classes and warnings.
///
/// Never fails: source that doesn't parse is reported to `diagnostics` and
/// converts to an empty [`Conversion`].
pub fn convert_declarations_with<D>(
    options: &Options,
    source: &str,
    diagnostics: &mut D,
) -> Conversion
where
    D: Diagnostics + ?Sized,
{
    let module = match parse_declarations(&options.file_name, source) {
        Ok(module) => module,
        Err(err) => {
            diagnostics.parse_failed(&err);
            return Default::default();
        }
    };

    if options.renders_tree() {
        diagnostics.render_tree(&module);
    }

    let conversion = convert_module_items(&module.body);
    debug!(
        file = %options.file_name,
        classes = conversion.classes.len(),
        warnings = conversion.warnings.len(),
        "converted declarations"
    );
    conversion
}

/// [`convert_declarations_with`], reporting through [`TracingDiagnostics`].
pub fn convert_declarations(options: &Options, source: &str) -> Conversion {
    convert_declarations_with(options, source, &mut TracingDiagnostics)
}
