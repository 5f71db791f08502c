use super::keyed::KeyedExt;
use super::types::convert_maybe_type;
use crate::ir::{Method, Param as ParamIR, Type};
use swc_ecma_ast::{
    ArrayPat, BindingIdent, ClassMethod, Constructor, MethodKind, ObjectPat,
    Param, ParamOrTsParamProp, Pat, RestPat, TsFnParam, TsMethodSignature, TsParamPropParam,
    TsType,
};
use tracing::debug;

/// Name given to every extracted constructor.
pub const CONSTRUCTOR_NAME: &str = "constructor";

/// A parameter as declared, before its type is converted.
#[derive(Debug, Clone, Copy)]
pub enum ParamShape<'a> {
    Regular {
        name: &'a str,
        type_ann: Option<&'a TsType>,
    },
    Rest {
        name: &'a str,
        type_ann: Option<&'a TsType>,
    },
}

/// Build a method from its parameters and declared return type.
///
/// Parameters without a representable type become [`Type::default_param`].
/// Only the first rest parameter is kept.
pub fn extract_method<'a, S, I>(name: S, params: I, return_type: Option<&TsType>) -> Method
where
    S: Into<String>,
    I: IntoIterator<Item = ParamShape<'a>>,
{
    let name = name.into();
    let mut regular = Vec::new();
    let mut rest: Option<ParamIR> = None;

    for shape in params {
        match shape {
            ParamShape::Regular { name, type_ann } => {
                regular.push(ParamIR::new(name, param_type(type_ann)));
            }
            ParamShape::Rest { name: rest_name, .. } if rest.is_some() => {
                debug!(method = %name, param = rest_name, "ignoring extra rest parameter");
            }
            ParamShape::Rest { name, type_ann } => {
                rest = Some(ParamIR::new(name, param_type(type_ann)));
            }
        }
    }

    Method {
        name,
        params: regular,
        rest_param: rest,
        return_type: convert_maybe_type(return_type),
    }
}

fn param_type(type_ann: Option<&TsType>) -> Type {
    convert_maybe_type(type_ann).unwrap_or_else(Type::default_param)
}

trait FnParamExt {
    /// `fallback_name` names parameters that destructure their argument.
    fn to_param_shape<'a>(&'a self, fallback_name: &'a str) -> ParamShape<'a>;
}

impl FnParamExt for BindingIdent {
    fn to_param_shape<'a>(&'a self, _fallback_name: &'a str) -> ParamShape<'a> {
        ParamShape::Regular {
            name: &*self.id.sym,
            type_ann: self.type_ann.as_ref().map(|t| &*t.type_ann),
        }
    }
}

impl FnParamExt for ObjectPat {
    fn to_param_shape<'a>(&'a self, fallback_name: &'a str) -> ParamShape<'a> {
        ParamShape::Regular {
            name: fallback_name,
            type_ann: self.type_ann.as_ref().map(|t| &*t.type_ann),
        }
    }
}

impl FnParamExt for ArrayPat {
    fn to_param_shape<'a>(&'a self, fallback_name: &'a str) -> ParamShape<'a> {
        ParamShape::Regular {
            name: fallback_name,
            type_ann: self.type_ann.as_ref().map(|t| &*t.type_ann),
        }
    }
}

impl FnParamExt for RestPat {
    fn to_param_shape<'a>(&'a self, _fallback_name: &'a str) -> ParamShape<'a> {
        let name = match &*self.arg {
            Pat::Ident(id_param) => &*id_param.id.sym,
            _ => "rest",
        };

        ParamShape::Rest {
            name,
            type_ann: self.type_ann.as_ref().map(|t| &*t.type_ann),
        }
    }
}

impl FnParamExt for Pat {
    fn to_param_shape<'a>(&'a self, fallback_name: &'a str) -> ParamShape<'a> {
        match self {
            Pat::Ident(ident) => ident.to_param_shape(fallback_name),
            Pat::Object(obj) => obj.to_param_shape(fallback_name),
            Pat::Array(array) => array.to_param_shape(fallback_name),
            Pat::Rest(rest) => rest.to_param_shape(fallback_name),
            // defaults don't appear in declarations but the binding still names the param
            Pat::Assign(assign) => assign.left.to_param_shape(fallback_name),
            _ => ParamShape::Regular {
                name: fallback_name,
                type_ann: None,
            },
        }
    }
}

impl FnParamExt for TsFnParam {
    fn to_param_shape<'a>(&'a self, fallback_name: &'a str) -> ParamShape<'a> {
        match self {
            TsFnParam::Ident(ident) => ident.to_param_shape(fallback_name),
            TsFnParam::Object(obj) => obj.to_param_shape(fallback_name),
            TsFnParam::Array(array) => array.to_param_shape(fallback_name),
            TsFnParam::Rest(rest) => rest.to_param_shape(fallback_name),
        }
    }
}

impl FnParamExt for Param {
    fn to_param_shape<'a>(&'a self, fallback_name: &'a str) -> ParamShape<'a> {
        self.pat.to_param_shape(fallback_name)
    }
}

impl FnParamExt for ParamOrTsParamProp {
    fn to_param_shape<'a>(&'a self, fallback_name: &'a str) -> ParamShape<'a> {
        match self {
            ParamOrTsParamProp::Param(param) => param.to_param_shape(fallback_name),
            ParamOrTsParamProp::TsParamProp(prop) => match &prop.param {
                TsParamPropParam::Ident(ident) => ident.to_param_shape(fallback_name),
                TsParamPropParam::Assign(assign) => assign.left.to_param_shape(fallback_name),
            },
        }
    }
}

/// `arg0`, `arg1`, ... for parameters without a usable name.
fn fallback_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("arg{}", i)).collect()
}

fn extract_from_params<P: FnParamExt>(
    name: String,
    params: &[P],
    return_type: Option<&TsType>,
) -> Method {
    let fallbacks = fallback_names(params.len());
    let shapes = params
        .iter()
        .zip(fallbacks.iter())
        .map(|(p, fallback)| p.to_param_shape(fallback));

    extract_method(name, shapes, return_type)
}

/// Anything with a call signature we can turn into a [`Method`].
pub trait SignatureExt {
    /// `None` when the member has no usable name or shouldn't be exposed.
    fn to_method(&self) -> Option<Method>;
}

impl SignatureExt for TsMethodSignature {
    fn to_method(&self) -> Option<Method> {
        if self.computed {
            debug!("skipping method signature with a computed key");
            return None;
        }

        let name = self.key.key()?;
        Some(extract_from_params(
            name,
            &self.params,
            self.type_ann.as_ref().map(|t| &*t.type_ann),
        ))
    }
}

impl SignatureExt for ClassMethod {
    fn to_method(&self) -> Option<Method> {
        if self.kind != MethodKind::Method {
            return None;
        }

        let name = self.key.key()?;
        Some(extract_from_params(
            name,
            &self.function.params,
            self.function.return_type.as_ref().map(|t| &*t.type_ann),
        ))
    }
}

impl SignatureExt for Constructor {
    fn to_method(&self) -> Option<Method> {
        Some(extract_from_params(
            CONSTRUCTOR_NAME.to_string(),
            &self.params,
            None,
        ))
    }
}
