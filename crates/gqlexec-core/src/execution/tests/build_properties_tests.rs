use crate::DocumentBuilder;
use crate::ast::Definition;
use crate::ast::Selection;
use proptest::prelude::*;

/// Render a flat selection set over the given field names. Names are
/// prefixed so a generated string can never collide with a keyword.
fn render_document(field_names: &[String]) -> String {
    let fields =
        field_names.iter()
            .map(|name| format!("f_{name}"))
            .collect::<Vec<_>>()
            .join(" ");
    format!("{{ {fields} }}")
}

proptest! {
    #[test]
    fn building_generated_documents_is_idempotent(
        field_names in proptest::collection::vec("[a-z][a-z0-9_]{0,8}", 1..6),
    ) {
        let text = render_document(&field_names);
        let builder = DocumentBuilder::new();

        let first = builder.build(&text);
        let second = builder.build(&text);

        prop_assert!(first.is_ok(), "expected `{}` to build", text);
        prop_assert_eq!(first.unwrap(), second.unwrap());
    }

    #[test]
    fn generated_documents_keep_field_count_and_order(
        field_names in proptest::collection::vec("[a-z][a-z0-9_]{0,8}", 1..6),
    ) {
        let text = render_document(&field_names);
        let document = DocumentBuilder::new().build(&text).unwrap();

        prop_assert_eq!(document.definitions.len(), 1);
        let operation = match &document.definitions[0] {
            Definition::Operation(operation) => operation,
            Definition::Fragment(_) => panic!("Expected an operation"),
        };

        let selected_names: Vec<String> =
            operation.selection_set.items.iter()
                .map(|selection| match selection {
                    Selection::Field(field) => field.name.clone(),
                    other => panic!("Expected a field, got {other:?}"),
                })
                .collect();
        let expected_names: Vec<String> =
            field_names.iter()
                .map(|name| format!("f_{name}"))
                .collect();
        prop_assert_eq!(selected_names, expected_names);

        prop_assert_eq!(document.original_text.as_str(), text.as_str());
    }
}
