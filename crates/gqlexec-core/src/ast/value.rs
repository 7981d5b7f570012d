use crate::cst;
use indexmap::IndexMap;

/// A literal or variable reference appearing in an argument position.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Variable(String),
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub(crate) fn from_cst(cst_value: &cst::Value) -> Self {
        match cst_value {
            cst::Value::Variable(var_name) =>
                Value::Variable(var_name.clone()),

            cst::Value::Int(number) =>
                Value::Int(match number.as_i64() {
                    Some(int) => int,
                    // The grammar only produces integer literals that fit
                    // i64; reaching this arm means the parser's contract
                    // changed underneath this crate.
                    None => panic!(
                        "unmappable integer literal in concrete syntax tree: \
                        {number:?}",
                    ),
                }),

            cst::Value::Float(value) =>
                Value::Float(*value),

            cst::Value::String(value) =>
                Value::String(value.clone()),

            cst::Value::Boolean(value) =>
                Value::Boolean(*value),

            cst::Value::Null =>
                Value::Null,

            cst::Value::Enum(value) =>
                Value::Enum(value.clone()),

            cst::Value::List(values) =>
                Value::List(values.iter().map(Value::from_cst).collect()),

            cst::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(key, cst_value)|
                    (key.clone(), Value::from_cst(cst_value))
                ).collect()),
        }
    }
}
