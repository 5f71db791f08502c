use super::signature::SignatureExt;
use crate::ir::{Class, ClassTag};
use swc_ecma_ast::{TsInterfaceDecl, TsTypeElement};
use tracing::trace;

/// Convert an interface declaration into an interface-tagged [`Class`].
///
/// Only method signatures carry over. Type parameters and `extends` clauses
/// are dropped, as are properties, index signatures, and call signatures.
/// The module path is filled in by any enclosing ambient module.
pub fn convert_interface(
    TsInterfaceDecl { id, body, .. }: &TsInterfaceDecl,
    is_exported: bool,
) -> Class {
    let methods = body
        .body
        .iter()
        .filter_map(|el| match el {
            TsTypeElement::TsMethodSignature(method) => method.to_method(),
            _ => {
                trace!(interface = %id.sym, "dropping non-method interface member");
                None
            }
        })
        .collect();

    Class {
        name: id.sym.to_string(),
        module_name: None,
        is_exported,
        methods,
        constructor: None,
        tag: ClassTag::Interface,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ir::{Method, Param, Type};
    use crate::parse::parse_declarations;
    use swc_ecma_ast::{Decl, ModuleDecl, ModuleItem, Stmt};

    fn get_interface_for_code(ts_code: &str) -> Class {
        let module = parse_declarations("/test.d.ts", ts_code).expect("failed to parse");
        match module.body.into_iter().next() {
            Some(ModuleItem::Stmt(Stmt::Decl(Decl::TsInterface(iface)))) => {
                convert_interface(&iface, false)
            }
            Some(ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export))) => match export.decl {
                Decl::TsInterface(iface) => convert_interface(&iface, true),
                other => panic!("expected an interface, got {:?}", other),
            },
            other => panic!("expected an interface, got {:?}", other),
        }
    }

    #[test]
    fn test_single_method_interface() {
        assert_eq!(
            get_interface_for_code("interface Foo { foo(x: number): string; }"),
            Class {
                name: "Foo".to_string(),
                module_name: None,
                is_exported: false,
                methods: vec![Method {
                    name: "foo".to_string(),
                    params: vec![Param::new("x", Type::named("number"))],
                    rest_param: None,
                    return_type: Some(Type::named("string")),
                }],
                constructor: None,
                tag: ClassTag::Interface,
            }
        );
    }

    #[test]
    fn test_only_methods_survive() {
        let iface = get_interface_for_code(
            r#"export interface Foo<T> extends Bar<T>, Baz {
                n: number;
                [key: string]: any;
                (x: number): string;
                new (x: number): Foo<T>;
                lookup(key: string): T;
                store(key: string, value: T): void;
            }"#,
        );

        assert!(iface.is_exported);
        assert_eq!(iface.tag, ClassTag::Interface);
        assert_eq!(iface.constructor, None);
        let names: Vec<_> = iface.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["lookup", "store"]);
        assert_eq!(iface.methods[0].return_type, Some(Type::named("T")));
    }

    #[test]
    fn test_empty_interface() {
        let iface = get_interface_for_code("interface Empty {}");
        assert!(iface.methods.is_empty());
        assert_eq!(iface.module_name, None);
    }
}
