use crate::error::Error;
use swc_common::{sync::Lrc, FileName, SourceMap};
use swc_ecma_ast::{EsVersion, Module};
use swc_ecma_parser::{lexer::Lexer, Parser, StringInput, Syntax, TsSyntax};
use tracing::debug;

/// Parse `source` as a typescript declaration file.
///
/// Any error the parser reports fails the parse, including the ones swc
/// continues past. The first is returned.
pub fn parse_declarations(file_name: &str, source: &str) -> Result<Module, Error> {
    let cm: Lrc<SourceMap> = Default::default();
    let fm = cm.new_source_file(
        FileName::Custom(file_name.to_string()).into(),
        source.to_string(),
    );
    let lexer = Lexer::new(
        Syntax::Typescript(TsSyntax {
            dts: true,
            decorators: true,
            ..Default::default()
        }),
        EsVersion::EsNext,
        StringInput::from(&*fm),
        None,
    );

    let mut parser = Parser::new_from(lexer);
    let module = parser
        .parse_typescript_module()
        .map_err(|error| Error::from_parse_error(&cm, file_name, &error))?;

    let mut errors = parser.take_errors().into_iter();
    if let Some(first) = errors.next() {
        let rest = errors.count();
        if rest > 0 {
            debug!(file = file_name, "{} further parse errors", rest);
        }
        return Err(Error::from_parse_error(&cm, file_name, &first));
    }

    Ok(module)
}
