use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::cst;
use crate::loc::SourcePosition;

/// A `$name: Type = default` entry in an operation's variable list.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VariableDefinition {
    pub position: SourcePosition,
    pub name: String,
    pub var_type: TypeAnnotation,
    pub default_value: Option<Value>,
}
impl VariableDefinition {
    pub(crate) fn from_cst(cst_var_def: &cst::VariableDefinition) -> Self {
        Self {
            position: SourcePosition::from_pos(cst_var_def.position),
            name: cst_var_def.name.clone(),
            var_type: TypeAnnotation::from_cst(&cst_var_def.var_type),
            default_value:
                cst_var_def.default_value.as_ref()
                    .map(Value::from_cst),
        }
    }
}
