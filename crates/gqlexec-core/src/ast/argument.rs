use crate::ast::Value;
use crate::cst;

/// A named argument applied to a field or directive.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}
impl Argument {
    pub(crate) fn from_cst(name: &str, cst_value: &cst::Value) -> Self {
        Self {
            name: name.to_string(),
            value: Value::from_cst(cst_value),
        }
    }
}
