use super::declarations::declaration_elements;
use super::interface::convert_interface;
use super::signature::SignatureExt;
use super::{Conversion, TOO_MANY_CONSTRUCTORS};
use crate::ir::{Class, ClassTag};
use swc_ecma_ast::{
    ClassDecl, ClassMember, Decl, TsModuleBlock, TsModuleDecl, TsModuleName, TsNamespaceBody,
};
use tracing::{debug, warn};

/// Convert an ambient declaration.
///
/// Classes, interfaces and modules are modeled. Every other declaration
/// (variables, functions, enums, type aliases) yields `None` and is skipped
/// without a warning.
pub fn convert_ambient_decl(decl: &Decl, is_exported: bool) -> Option<Conversion> {
    match decl {
        Decl::Class(class) => Some(convert_ambient_class(class)),
        Decl::TsInterface(iface) => Some(convert_interface(iface, is_exported).into()),
        Decl::TsModule(module) => Some(convert_ambient_module(module)),
        _ => {
            debug!("skipping unmodeled ambient declaration");
            None
        }
    }
}

fn convert_ambient_class(ClassDecl { ident, class, .. }: &ClassDecl) -> Conversion {
    let mut ctors = Vec::new();
    let mut methods = Vec::new();
    for member in &class.body {
        match member {
            ClassMember::Constructor(ctor) => ctors.push(ctor),
            ClassMember::Method(method) => methods.push(method),
            _ => {}
        }
    }

    let mut warnings = Vec::new();
    if ctors.len() > 1 {
        warn!(
            class = %ident.sym,
            count = ctors.len(),
            "multiple constructors, keeping the first"
        );
        warnings.push(TOO_MANY_CONSTRUCTORS.to_string());
    }

    // declared classes are always visible to consumers, so they count as exported
    let class = Class {
        name: ident.sym.to_string(),
        module_name: None,
        is_exported: true,
        methods: methods.iter().filter_map(|m| m.to_method()).collect(),
        constructor: ctors.first().and_then(|ctor| ctor.to_method()),
        tag: ClassTag::Class,
    };

    Conversion {
        warnings,
        classes: vec![class],
    }
}

fn convert_ambient_module(module: &TsModuleDecl) -> Conversion {
    let (path, block) = module_path_and_block(module);

    let conversion: Conversion = match block {
        Some(TsModuleBlock { body, .. }) => declaration_elements(body)
            .filter_map(|(decl, is_exported)| convert_ambient_decl(decl, is_exported))
            .collect(),
        None => Default::default(),
    };

    let path = if path.is_empty() {
        None
    } else {
        Some(path.join("."))
    };

    conversion.within_module(path.as_deref())
}

/// Path segments, outermost first, and the block holding the module's
/// declarations. `namespace A.B.C {}` chains namespace declarations for `B`
/// and `C` under `A`.
fn module_path_and_block(module: &TsModuleDecl) -> (Vec<String>, Option<&TsModuleBlock>) {
    let mut path = Vec::new();
    if !module.global {
        path.push(match &module.id {
            TsModuleName::Ident(ident) => ident.sym.to_string(),
            TsModuleName::Str(s) => s.value.to_string(),
        });
    }

    let mut body = module.body.as_ref();
    loop {
        match body {
            Some(TsNamespaceBody::TsNamespaceDecl(ns)) => {
                path.push(ns.id.sym.to_string());
                body = Some(&*ns.body);
            }
            Some(TsNamespaceBody::TsModuleBlock(block)) => return (path, Some(block)),
            None => return (path, None),
        }
    }
}
