use crate::cst;

/// A type reference as written in a variable definition.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    Named(String),
    List(Box<TypeAnnotation>),
    NonNull(Box<TypeAnnotation>),
}
impl TypeAnnotation {
    pub(crate) fn from_cst(cst_type: &cst::Type) -> Self {
        match cst_type {
            cst::Type::NamedType(name) =>
                TypeAnnotation::Named(name.clone()),

            cst::Type::ListType(inner) =>
                TypeAnnotation::List(Box::new(Self::from_cst(inner))),

            cst::Type::NonNullType(inner) =>
                TypeAnnotation::NonNull(Box::new(Self::from_cst(inner))),
        }
    }

    /// Name of the innermost named type this annotation wraps.
    pub fn inner_name(&self) -> &str {
        match self {
            TypeAnnotation::Named(name) => name,
            TypeAnnotation::List(inner)
                | TypeAnnotation::NonNull(inner) => inner.inner_name(),
        }
    }

    pub fn to_graphql_string(&self) -> String {
        match self {
            TypeAnnotation::Named(name) =>
                name.clone(),
            TypeAnnotation::List(inner) =>
                format!("[{}]", inner.to_graphql_string()),
            TypeAnnotation::NonNull(inner) =>
                format!("{}!", inner.to_graphql_string()),
        }
    }
}
