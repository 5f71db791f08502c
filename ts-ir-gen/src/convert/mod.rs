mod ambient;
mod declarations;
mod interface;
mod keyed;
mod signature;
mod types;

pub use ambient::convert_ambient_decl;
pub use declarations::convert_module_items;
pub use interface::convert_interface;
pub use signature::{extract_method, ParamShape, CONSTRUCTOR_NAME};
pub use types::{convert_maybe_type, convert_type};

use crate::ir::Class;
use serde::Serialize;

/// Warning emitted when an ambient class declares more than one constructor.
pub const TOO_MANY_CONSTRUCTORS: &str = "Too many constructors";

/// Classes produced from some part of a declaration file along with any
/// warnings about constructs we could only convert approximately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub warnings: Vec<String>,
    pub classes: Vec<Class>,
}

impl Conversion {
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty() && self.classes.is_empty()
    }

    pub fn extend(&mut self, other: Conversion) {
        self.warnings.extend(other.warnings);
        self.classes.extend(other.classes);
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Class>) {
        (self.warnings, self.classes)
    }

    /// Places every class under the module at `path`, prefixing any module
    /// path the class already carries from a nested module. For a single
    /// dotted module such as `declare module A.B` this is the same as
    /// overwriting the path.
    pub fn within_module(self, path: Option<&str>) -> Conversion {
        let path = match path {
            Some(path) => path,
            None => return self,
        };

        Conversion {
            warnings: self.warnings,
            classes: self
                .classes
                .into_iter()
                .map(|class| Class {
                    module_name: Some(match class.module_name {
                        Some(inner) => format!("{}.{}", path, inner),
                        None => path.to_string(),
                    }),
                    ..class
                })
                .collect(),
        }
    }
}

impl From<Class> for Conversion {
    fn from(class: Class) -> Conversion {
        Conversion {
            warnings: Default::default(),
            classes: vec![class],
        }
    }
}

impl FromIterator<Conversion> for Conversion {
    fn from_iter<I: IntoIterator<Item = Conversion>>(iter: I) -> Conversion {
        iter.into_iter().fold(Conversion::default(), |mut acc, c| {
            acc.extend(c);
            acc
        })
    }
}
