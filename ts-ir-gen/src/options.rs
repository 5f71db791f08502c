/// Settings for a single conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Diagnostic verbosity. Above [`Options::RENDER_THRESHOLD`], the parsed
    /// syntax tree is rendered through the diagnostics sink.
    pub verbosity: u8,
    /// Label for the source in error messages.
    pub file_name: String,
}

impl Options {
    pub const RENDER_THRESHOLD: u8 = 1;

    pub fn with_verbosity(mut self, verbosity: u8) -> Options {
        self.verbosity = verbosity;
        self
    }

    pub fn with_file_name<S: Into<String>>(mut self, file_name: S) -> Options {
        self.file_name = file_name.into();
        self
    }

    pub fn renders_tree(&self) -> bool {
        self.verbosity > Options::RENDER_THRESHOLD
    }
}

impl Default for Options {
    fn default() -> Options {
        Options {
            verbosity: 0,
            file_name: "input.d.ts".to_string(),
        }
    }
}
