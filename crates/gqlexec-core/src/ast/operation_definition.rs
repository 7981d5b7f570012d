use crate::ast::Directive;
use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::cst;
use crate::loc::SourcePosition;

/// One operation within an executable document.
///
/// The grammar's four operation shapes (bare selection set, `query`,
/// `mutation`, `subscription`) collapse into this single node kind; a bare
/// selection set is an unnamed query.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OperationDefinition {
    pub position: SourcePosition,
    pub kind: OperationKind,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
}
impl OperationDefinition {
    pub(crate) fn from_cst(cst_op_def: &cst::OperationDefinition) -> Self {
        match cst_op_def {
            cst::OperationDefinition::SelectionSet(selection_set) => Self {
                position: SourcePosition::from_pos(selection_set.span.0),
                kind: OperationKind::Query,
                name: None,
                variable_definitions: vec![],
                directives: vec![],
                selection_set: SelectionSet::from_cst(selection_set),
            },

            cst::OperationDefinition::Query(query) => Self::from_cst_op(
                OperationKind::Query,
                query.position,
                &query.name,
                &query.variable_definitions,
                &query.directives,
                &query.selection_set,
            ),

            cst::OperationDefinition::Mutation(mutation) => Self::from_cst_op(
                OperationKind::Mutation,
                mutation.position,
                &mutation.name,
                &mutation.variable_definitions,
                &mutation.directives,
                &mutation.selection_set,
            ),

            cst::OperationDefinition::Subscription(subscription) => Self::from_cst_op(
                OperationKind::Subscription,
                subscription.position,
                &subscription.name,
                &subscription.variable_definitions,
                &subscription.directives,
                &subscription.selection_set,
            ),
        }
    }

    fn from_cst_op(
        kind: OperationKind,
        position: cst::Pos,
        name: &Option<String>,
        variable_definitions: &[cst::VariableDefinition],
        directives: &[cst::Directive],
        selection_set: &cst::SelectionSet,
    ) -> Self {
        Self {
            position: SourcePosition::from_pos(position),
            kind,
            name: name.clone(),
            variable_definitions:
                variable_definitions.iter()
                    .map(VariableDefinition::from_cst)
                    .collect(),
            directives:
                directives.iter()
                    .map(Directive::from_cst)
                    .collect(),
            selection_set: SelectionSet::from_cst(selection_set),
        }
    }
}
