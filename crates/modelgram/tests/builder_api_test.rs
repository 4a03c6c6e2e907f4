//! Integration tests for the DiagramBuilder API
//!
//! These tests run whole snapshots through parsing and generation and check
//! the resulting PlantUML documents.

use modelgram::{
    DiagramBuilder, ModelgramError,
    config::{AppConfig, RenderConfig},
    share::PLANTUML_ALPHABET,
};

const AUTHOR_BOOK: &str = r#"
[[models]]
label = "library.Author"
fields = [
    { name = "id", type = "AutoField", kind = "auto" },
    { name = "name", type = "CharField" },
]

[[models]]
label = "library.Book"
fields = [
    { name = "id", type = "AutoField", kind = "auto" },
    { name = "author", type = "ForeignKey", kind = "foreign_key", target = "library.Author" },
]
"#;

fn builder_with(render: RenderConfig) -> DiagramBuilder {
    DiagramBuilder::new(AppConfig::default().with_render(render))
}

/// Returns the `class` block of `name`, up to its closing brace.
fn class_block<'a>(document: &'a str, name: &str) -> &'a str {
    let start = document
        .find(&format!("class \"{name} "))
        .unwrap_or_else(|| panic!("no class block for {name}"));
    let end = start + document[start..].find("\n}\n").expect("closing brace");
    &document[start..end]
}

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_author_book_default_document() {
    let builder = DiagramBuilder::default();
    let models = builder.parse(AUTHOR_BOOK).expect("Failed to parse snapshot");
    let document = builder.generate(&models);

    assert!(document.starts_with("@startuml\n"));
    assert!(document.ends_with("@enduml\n"));

    assert_eq!(document.matches("as library.Author ").count(), 1);
    assert_eq!(document.matches("as library.Book ").count(), 1);

    let author = class_block(&document, "library.Author");
    assert!(author.contains("\n    - id (AutoField)\n"));
    assert!(author.contains("\n    + name (CharField)\n"));

    let book = class_block(&document, "library.Book");
    assert!(book.contains("\n    - id (AutoField)\n"));
    assert!(book.contains("\n    ~ author (ForeignKey)\n"));

    assert_eq!(document.matches(" *-- ").count(), 1);
    assert!(document.contains("\nlibrary.Book *-- library.Author\n"));

    assert!(!document.contains("enum "));
    assert!(!document.contains("<choices>"));
}

#[test]
fn test_author_book_headers_only() {
    let builder = builder_with(RenderConfig::default().with_headers_only(true));
    let models = builder.parse(AUTHOR_BOOK).expect("Failed to parse snapshot");
    let document = builder.generate(&models);

    for name in ["library.Author", "library.Book"] {
        let block = class_block(&document, name);
        assert!(!block.contains("(AutoField)"), "{name} lists fields");
        assert!(!block.contains("(CharField)"), "{name} lists fields");
        assert!(!block.contains("(ForeignKey)"), "{name} lists fields");
    }

    assert!(document.contains("\nlibrary.Book *-- library.Author\n"));
}

#[test]
fn test_choice_merge_law() {
    let source = r#"
        [[models]]
        label = "shop.Order"
        fields = [{ name = "status", type = "CharField", choices = [["n", "New"]] }]

        [[models]]
        label = "billing.Invoice"
        fields = [{ name = "status", type = "CharField", choices = [{ value = "p", label = "Paid" }] }]
    "#;

    let merged = DiagramBuilder::default();
    let models = merged.parse(source).expect("Failed to parse snapshot");
    let document = merged.generate(&models);
    assert_eq!(document.matches("enum \"status <choices>\"").count(), 1);
    assert!(document.contains("    + p - Paid\n"));
    assert!(!document.contains("    + n - New\n"));

    let namespaced = builder_with(RenderConfig::default().with_namespace_choices(true));
    let document = namespaced.generate(&models);
    assert_eq!(document.matches(" <choices>\"").count(), 2);
    assert_eq!(document.matches(" .. shop.Order_status\n").count(), 1);
    assert!(document.contains("\nshop.Order .. shop.Order_status\n"));
    assert_eq!(document.matches(" .. billing.Invoice_status\n").count(), 1);
    assert!(document.contains("\nbilling.Invoice .. billing.Invoice_status\n"));
}

#[test]
fn test_three_choice_shapes_render_identically() {
    let source = r#"
        [[models]]
        label = "a.Enumeration"

        [[models.fields]]
        name = "letter"

        [models.fields.choices]
        members = [
            { name = "FIRST", value = "A", label = "alpha" },
            { name = "SECOND", value = "B", label = "beta" },
        ]

        [[models]]
        label = "b.Pairs"

        [[models.fields]]
        name = "letter"
        choices = [["A", "alpha"], ["B", "beta"]]

        [[models]]
        label = "c.Records"

        [[models.fields]]
        name = "letter"
        choices = [
            { value = "A", label = "alpha" },
            { value = "B", label = "beta" },
        ]
    "#;

    let builder = DiagramBuilder::default();
    let models = builder.parse(source).expect("Failed to parse snapshot");
    let choices: Vec<_> = models
        .iter()
        .map(|model| model.fields()[0].choices().expect("choices").clone())
        .collect();
    assert_eq!(choices[0], choices[1]);
    assert_eq!(choices[1], choices[2]);

    let document = builder.generate(&models);
    assert!(document.contains("    + A - alpha\n    + B - beta\n}\n"));
}

#[test]
fn test_share_url() {
    let builder = DiagramBuilder::default();
    let models = builder.parse(AUTHOR_BOOK).expect("Failed to parse snapshot");
    let document = builder.generate(&models);

    let url = builder.share_url(&document).expect("Failed to encode");
    let base = builder.config().share().base_url();
    let token = url.strip_prefix(base).expect("base URL prefix");
    assert!(token.chars().all(|c| PLANTUML_ALPHABET.contains(c)));
}

#[test]
fn test_parse_invalid_snapshot_returns_error() {
    let builder = DiagramBuilder::default();
    let result = builder.parse("[[models]]\nlabel = ");
    assert!(matches!(result, Err(ModelgramError::Registry { .. })));
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();
    let models = builder.parse(AUTHOR_BOOK).expect("Failed to parse snapshot");

    let first = builder.generate(&models);
    let second = builder.generate(&models);
    assert_eq!(first, second);
}
