#![deny(missing_docs)]

//! ts-ir provides a library as an easy entrypoint into converting typescript
//! declaration files into a small intermediate representation of classes,
//! interfaces, method signatures and types, and provides an executable for
//! doing the same via the command line.
//!
//! If you are using the library, we recommend adding `default-features = false`
//! to your Cargo.toml to avoid pulling in the command line dependencies.

pub use ts_ir_gen::{
    convert_declarations, convert_declarations_with, Class, ClassTag, Conversion, Diagnostics,
    Error, Method, Options, Param, TracingDiagnostics, Type,
};

use std::fs::read_to_string;
use std::path::Path;

/// Given typescript declarations as a string, return the classes and
/// interfaces they declare along with any conversion warnings.
///
/// ```rust
/// use ts_ir::convert_typescript_str;
///
/// let ir = convert_typescript_str(
///     r#"
///         export declare class Counter {
///             constructor(start: number);
///             increment(by?: number): number;
///         }
///     "#,
/// );
///
/// assert!(ir.warnings.is_empty());
/// assert_eq!(ir.classes[0].name, "Counter");
/// assert_eq!(
///     ir.classes[0].methods[0].to_string(),
///     "increment(by: number): number"
/// );
/// ```
///
/// Source that fails to parse is logged and yields an empty result.
pub fn convert_typescript_str(ts: &str) -> Conversion {
    convert_declarations(&Options::default(), ts)
}

/// Read the typescript declaration file at `path` and convert it with
/// `options`. The file name in `options` is replaced with `path` so parse
/// errors point at the file.
///
/// ```rust
/// use ts_ir::{convert_typescript_file, Options};
///
/// # fn main() -> Result<(), ts_ir::Error> {
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("shapes.d.ts");
/// std::fs::write(
///     &path,
///     "declare namespace shapes { interface Circle { area(): number; } }",
/// )
/// .unwrap();
///
/// let ir = convert_typescript_file(&path, Options::default())?;
///
/// assert_eq!(ir.classes[0].qualified_name(), "shapes.Circle");
///
/// # Ok(())
/// # }
/// ```
pub fn convert_typescript_file<P: AsRef<Path>>(
    path: P,
    options: Options,
) -> Result<Conversion, Error> {
    let path = path.as_ref();
    let ts = read_to_string(path).map_err(|err| Error::with_path_and_io_error(path, err))?;
    let options = options.with_file_name(path.to_string_lossy());

    Ok(convert_declarations(&options, &ts))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_convert_typescript_str() {
        let ts = r#"
            export interface Abc {
                hello(n: number): string;
                world: string
            }
        "#;

        let ir = convert_typescript_str(ts);

        assert!(ir.warnings.is_empty());
        assert_eq!(ir.classes.len(), 1);
        assert_eq!(
            ir.classes[0].to_string(),
            "export interface Abc {\n    hello(n: number): string;\n}"
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = convert_typescript_file("/definitely/not/here.d.ts", Options::default());

        match result {
            Err(Error::IoError { path, .. }) => {
                assert_eq!(path, Path::new("/definitely/not/here.d.ts"))
            }
            other => panic!("expected an io error, got {:?}", other),
        }
    }
}
