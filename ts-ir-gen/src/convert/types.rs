use crate::ir::Type;
use swc_ecma_ast::{
    TsArrayType, TsEntityName, TsKeywordType, TsKeywordTypeKind, TsParenthesizedType, TsType,
    TsTypeRef,
};
use tracing::trace;

/// Convert a typescript type into our IR.
///
/// `None` means there is no representable type: `void`, function and
/// constructor types, and any shape we don't model (unions, tuples,
/// literals, ...). Callers decide what to substitute.
pub fn convert_type(ts_type: &TsType) -> Option<Type> {
    match ts_type {
        TsType::TsKeywordType(keyword) => convert_keyword_type(keyword),
        TsType::TsTypeRef(type_ref) => Some(convert_type_ref(type_ref)),
        TsType::TsArrayType(array) => Some(convert_array_type(array)),
        TsType::TsTypeLit(_) => Some(Type::object()),
        TsType::TsParenthesizedType(TsParenthesizedType { type_ann, .. }) => {
            convert_type(type_ann)
        }
        // we have no way to express functions and constructors
        TsType::TsFnOrConstructorType(_) => None,
        _ => {
            trace!(?ts_type, "no representation for type");
            None
        }
    }
}

pub fn convert_maybe_type(ts_type: Option<&TsType>) -> Option<Type> {
    ts_type.and_then(convert_type)
}

fn convert_keyword_type(TsKeywordType { kind, .. }: &TsKeywordType) -> Option<Type> {
    match kind {
        TsKeywordTypeKind::TsAnyKeyword => Some(Type::named("any")),
        TsKeywordTypeKind::TsNumberKeyword => Some(Type::named("number")),
        TsKeywordTypeKind::TsBooleanKeyword => Some(Type::named("boolean")),
        TsKeywordTypeKind::TsStringKeyword => Some(Type::named("string")),
        TsKeywordTypeKind::TsObjectKeyword => Some(Type::object()),
        TsKeywordTypeKind::TsVoidKeyword => None,
        _ => {
            trace!(?kind, "no representation for keyword type");
            None
        }
    }
}

fn convert_type_ref(
    TsTypeRef {
        type_name,
        type_params,
        ..
    }: &TsTypeRef,
) -> Type {
    // arguments we can't represent are dropped, leaving the rest in order
    let type_args = type_params
        .as_ref()
        .map(|tps| {
            tps.params
                .iter()
                .filter_map(|tp| convert_type(tp))
                .collect()
        })
        .unwrap_or_default();

    Type::generic(entity_name_to_string(type_name), type_args)
}

fn convert_array_type(TsArrayType { elem_type, .. }: &TsArrayType) -> Type {
    match convert_type(elem_type) {
        Some(item_type) => Type::array(item_type),
        None => Type::generic("Array", Default::default()),
    }
}

/// `A.B.C` for qualified names, the bare identifier otherwise.
fn entity_name_to_string(entity_name: &TsEntityName) -> String {
    let mut en = entity_name;
    let mut names = Vec::new();

    loop {
        match en {
            TsEntityName::TsQualifiedName(qn) => {
                names.push(qn.right.sym.to_string());
                en = &qn.left;
            }
            TsEntityName::Ident(ident) => {
                names.push(ident.sym.to_string());
                break;
            }
        }
    }

    names.reverse();
    names.join(".")
}
