use crate::ast::TypeAnnotation;

fn nonnull_list_of_nonnull_named(name: &str) -> TypeAnnotation {
    TypeAnnotation::NonNull(Box::new(
        TypeAnnotation::List(Box::new(
            TypeAnnotation::NonNull(Box::new(
                TypeAnnotation::Named(name.to_string()),
            )),
        )),
    ))
}

#[test]
fn inner_name_unwraps_lists_and_nonnulls() {
    let annotation = nonnull_list_of_nonnull_named("Episode");
    assert_eq!(annotation.inner_name(), "Episode");
}

#[test]
fn inner_name_of_bare_named_type() {
    let annotation = TypeAnnotation::Named("ID".to_string());
    assert_eq!(annotation.inner_name(), "ID");
}

#[test]
fn to_graphql_string_round_trips_wrapping_order() {
    let annotation = nonnull_list_of_nonnull_named("Episode");
    assert_eq!(annotation.to_graphql_string(), "[Episode!]!");

    let annotation = TypeAnnotation::List(Box::new(
        TypeAnnotation::Named("Int".to_string()),
    ));
    assert_eq!(annotation.to_graphql_string(), "[Int]");
}
