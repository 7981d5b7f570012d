use crate::ast::Directive;
use crate::ast::SelectionSet;
use crate::cst;
use crate::loc::SourcePosition;

/// A named fragment definition.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentDefinition {
    pub position: SourcePosition,
    pub name: String,
    pub type_condition: String,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}
impl FragmentDefinition {
    pub(crate) fn from_cst(cst_frag_def: &cst::FragmentDefinition) -> Self {
        let cst::TypeCondition::On(type_name) = &cst_frag_def.type_condition;
        Self {
            position: SourcePosition::from_pos(cst_frag_def.position),
            name: cst_frag_def.name.clone(),
            type_condition: type_name.clone(),
            directives:
                cst_frag_def.directives.iter()
                    .map(Directive::from_cst)
                    .collect(),
            selection_set: SelectionSet::from_cst(&cst_frag_def.selection_set),
        }
    }
}
