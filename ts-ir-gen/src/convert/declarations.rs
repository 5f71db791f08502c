use super::ambient::convert_ambient_decl;
use super::interface::convert_interface;
use super::Conversion;
use swc_ecma_ast::{Decl, ExportDecl, ModuleDecl, ModuleItem, Stmt};
use tracing::trace;

/// The declarations among `items`, each with whether it carries an `export`
/// modifier. Imports, re-exports, default exports, export assignments and
/// `import x = require(...)` are not declarations and are skipped.
pub(super) fn declaration_elements(
    items: &[ModuleItem],
) -> impl Iterator<Item = (&Decl, bool)> + '_ {
    items.iter().filter_map(|item| match item {
        ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(ExportDecl { decl, .. })) => {
            Some((decl, true))
        }
        ModuleItem::ModuleDecl(_) => {
            trace!("skipping import/export declaration");
            None
        }
        ModuleItem::Stmt(Stmt::Decl(decl)) => Some((decl, false)),
        ModuleItem::Stmt(_) => None,
    })
}

/// Convert the top-level items of a declaration file, keeping interfaces and
/// ambient declarations in source order.
pub fn convert_module_items(items: &[ModuleItem]) -> Conversion {
    declaration_elements(items)
        .filter_map(|(decl, is_exported)| match decl {
            Decl::TsInterface(iface) if !iface.declare => {
                Some(Conversion::from(convert_interface(iface, is_exported)))
            }
            _ => convert_ambient_decl(decl, is_exported),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ir::ClassTag;
    use crate::parse::parse_declarations;

    fn get_conversion_for_code(ts_code: &str) -> Conversion {
        let module = parse_declarations("/test.d.ts", ts_code).expect("failed to parse");
        convert_module_items(&module.body)
    }

    #[test]
    fn test_imports_and_exports_are_discarded() {
        let c = get_conversion_for_code(
            r#"
                import { X } from './x';
                import * as Y from './y';
                import Z = require('./z');
                export { X };
                export * from './w';
                export default X;
            "#,
        );

        assert!(c.is_empty());
    }

    #[test]
    fn test_order_and_export_flags() {
        let c = get_conversion_for_code(
            r#"
                import { Base } from './base';
                interface Local { a(): void; }
                export interface Shared { b(): void; }
                declare class Impl { constructor(); constructor(x: number); }
                export declare function helper(): void;
                declare namespace NS { interface Inner {} }
            "#,
        );

        assert_eq!(c.warnings, vec!["Too many constructors"]);

        let summary: Vec<_> = c
            .classes
            .iter()
            .map(|c| (c.qualified_name(), c.is_exported, c.tag))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Local".to_string(), false, ClassTag::Interface),
                ("Shared".to_string(), true, ClassTag::Interface),
                ("Impl".to_string(), true, ClassTag::Class),
                ("NS.Inner".to_string(), false, ClassTag::Interface),
            ]
        );
    }

    #[test]
    fn test_empty_source() {
        assert!(get_conversion_for_code("").is_empty());
    }
}
