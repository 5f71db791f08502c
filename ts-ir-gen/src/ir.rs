use serde::Serialize;
use std::fmt;
use strum_macros::Display as StrumDisplay;

/// A named type with (possibly empty) type arguments.
///
/// Primitives (`number`, `string`, `boolean`, `any`, `object`) and references
/// (`Array<T>`, `Map<K, V>`, `Foo`) share this shape. Only names are stored,
/// never resolved definitions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Type {
    pub name: String,
    pub type_args: Vec<Type>,
}

impl Type {
    /// The type substituted for parameters without a usable annotation.
    pub const DEFAULT_PARAM_TYPE: &'static str = "string";

    pub fn named<S: Into<String>>(name: S) -> Type {
        Type {
            name: name.into(),
            type_args: Default::default(),
        }
    }

    pub fn generic<S: Into<String>>(name: S, type_args: Vec<Type>) -> Type {
        Type {
            name: name.into(),
            type_args,
        }
    }

    pub fn array(item_type: Type) -> Type {
        Type::generic("Array", vec![item_type])
    }

    /// Placeholder for object literal types, whose members we don't keep.
    pub fn object() -> Type {
        Type::named("object")
    }

    pub fn default_param() -> Type {
        Type::named(Type::DEFAULT_PARAM_TYPE)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.type_args.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.type_args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    pub type_info: Type,
}

impl Param {
    pub fn new<S: Into<String>>(name: S, type_info: Type) -> Param {
        Param {
            name: name.into(),
            type_info,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.type_info)
    }
}

/// A method or constructor signature.
///
/// The rest parameter is logically the last parameter but is kept apart from
/// `params`. A missing `return_type` means `void` or a type we can't represent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    pub name: String,
    pub params: Vec<Param>,
    pub rest_param: Option<Param>,
    pub return_type: Option<Type>,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        let rest = self.rest_param.iter().map(|p| format!("...{}", p));
        let params = self
            .params
            .iter()
            .map(ToString::to_string)
            .chain(rest)
            .collect::<Vec<_>>();
        write!(f, "{})", params.join(", "))?;
        match &self.return_type {
            Some(return_type) => write!(f, ": {}", return_type),
            None => write!(f, ": void"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassTag {
    #[strum(serialize = "interface")]
    Interface,
    #[strum(serialize = "class")]
    Class,
}

/// A class or interface shape.
///
/// `constructor` is always `None` for interfaces. `module_name` is the dotted
/// path of the enclosing ambient modules, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Class {
    pub name: String,
    pub module_name: Option<String>,
    pub is_exported: bool,
    pub methods: Vec<Method>,
    pub constructor: Option<Method>,
    pub tag: ClassTag,
}

impl Class {
    /// `module_name.name`, or just `name` at the top level.
    pub fn qualified_name(&self) -> String {
        match &self.module_name {
            Some(module_name) => format!("{}.{}", module_name, self.name),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_exported {
            write!(f, "export ")?;
        }
        if self.tag == ClassTag::Class {
            write!(f, "declare ")?;
        }
        writeln!(f, "{} {} {{", self.tag, self.qualified_name())?;
        if let Some(ctor) = &self.constructor {
            writeln!(f, "    {};", ctor)?;
        }
        for method in &self.methods {
            writeln!(f, "    {};", method)?;
        }
        write!(f, "}}")
    }
}
