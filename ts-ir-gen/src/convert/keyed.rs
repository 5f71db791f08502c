use swc_ecma_ast::{Expr, Lit, PropName};
use tracing::debug;

/// Names for members keyed by identifiers or literals. Computed keys have no
/// name we can use.
pub trait KeyedExt {
    fn key(&self) -> Option<String>;
}

impl KeyedExt for Expr {
    fn key(&self) -> Option<String> {
        match self {
            Expr::Ident(ident) => Some(ident.sym.to_string()),
            Expr::Lit(Lit::Str(s)) => Some(s.value.to_string()),
            Expr::Lit(Lit::Num(n)) => Some(n.value.to_string()),
            _ => {
                debug!("skipping member with a computed key");
                None
            }
        }
    }
}

impl KeyedExt for PropName {
    fn key(&self) -> Option<String> {
        match self {
            PropName::Ident(ident) => Some(ident.sym.to_string()),
            PropName::Str(s) => Some(s.value.to_string()),
            PropName::Num(n) => Some(n.value.to_string()),
            _ => {
                debug!("skipping member with a computed key");
                None
            }
        }
    }
}
