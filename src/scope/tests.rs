//! Unit tests for the scope table.

use super::{scope::ScopeTable, symbols::Symbol};
use crate::{ast::ast::Item, parse_source};

fn variable(name: &str) -> Symbol {
    Symbol::Variable {
        name: name.to_string(),
        ty: None,
        mutable: false,
    }
}

fn first_item(source: &str) -> Item {
    parse_source(source, "test.lang").unwrap().items.remove(0)
}

#[test]
fn test_define_and_lookup() {
    let mut table = ScopeTable::new();

    assert!(table.define("x", variable("x")));
    assert_eq!(table.lookup("x"), Some(&variable("x")));
    assert_eq!(table.lookup("y"), None);
}

#[test]
fn test_duplicate_in_same_scope_fails() {
    let mut table = ScopeTable::new();

    assert!(table.define("x", variable("x")));
    assert!(!table.define(
        "x",
        Symbol::Variable {
            name: "x".to_string(),
            ty: None,
            mutable: true
        }
    ));
    assert_eq!(table.lookup("x"), Some(&variable("x")));
}

#[test]
fn test_shadowing_across_scopes() {
    let mut table = ScopeTable::new();
    table.define("x", variable("x"));

    table.push_scope();
    let inner = Symbol::Variable {
        name: "x".to_string(),
        ty: None,
        mutable: true,
    };
    assert!(table.define("x", inner.clone()));
    assert_eq!(table.lookup("x"), Some(&inner));

    assert!(table.pop_scope());
    assert_eq!(table.lookup("x"), Some(&variable("x")));
}

#[test]
fn test_lookup_walks_outward() {
    let mut table = ScopeTable::new();
    table.define("outer", variable("outer"));
    table.push_scope();
    table.push_scope();

    assert!(table.lookup("outer").is_some());
    assert!(table.lookup_local("outer").is_none());
}

#[test]
fn test_popped_scope_is_discarded() {
    let mut table = ScopeTable::new();
    table.push_scope();
    table.define("temp", variable("temp"));
    table.pop_scope();

    assert_eq!(table.lookup("temp"), None);
    assert_eq!(table.depth(), 1);
}

#[test]
fn test_root_scope_is_never_popped() {
    let mut table = ScopeTable::new();

    assert!(!table.pop_scope());
    assert_eq!(table.depth(), 1);
}

#[test]
fn test_parent_links() {
    let mut table = ScopeTable::new();
    let root = table.current();
    let child = table.push_scope();

    assert_eq!(table.parent_of(child), Some(root));
    assert_eq!(table.parent_of(root), None);
}

#[test]
fn test_shadow_replaces_in_place() {
    let mut table = ScopeTable::new();
    table.define("x", variable("x"));

    let previous = table.shadow(
        "x",
        Symbol::Variable {
            name: "x".to_string(),
            ty: None,
            mutable: true,
        },
    );

    assert_eq!(previous, Some(variable("x")));
    assert!(matches!(
        table.lookup("x"),
        Some(Symbol::Variable { mutable: true, .. })
    ));
}

#[test]
fn test_symbol_from_function() {
    let symbol = Symbol::from_item(&first_item("fn add(a: i32, b: i32) -> i32 { a + b }"));

    match symbol {
        Symbol::Function {
            name,
            param_types,
            return_type,
        } => {
            assert_eq!(name, "add");
            assert_eq!(param_types.len(), 2);
            assert!(return_type.is_some());
        }
        other => panic!("expected function symbol, got {:?}", other),
    }
}

#[test]
fn test_symbol_keys_for_impls() {
    let inherent = Symbol::from_item(&first_item("impl Point { }"));
    let for_trait = Symbol::from_item(&first_item("impl Shape for Point { }"));

    assert_eq!(inherent.key(), "impl Point");
    assert_eq!(for_trait.key(), "impl Shape for Point");
}

#[test]
fn test_pattern_constants() {
    let unit = Symbol::from_item(&first_item("struct Marker;"));
    let with_fields = Symbol::from_item(&first_item("struct Point { x: i32 }"));
    let constant = Symbol::from_item(&first_item("const MAX: u32 = 10;"));
    let enumeration = Symbol::from_item(&first_item("enum Color { Red, Green }"));

    assert!(unit.is_pattern_constant());
    assert!(!with_fields.is_pattern_constant());
    assert!(constant.is_pattern_constant());
    assert!(!enumeration.is_pattern_constant());
    assert_eq!(
        enumeration,
        Symbol::Enum {
            name: "Color".to_string(),
            variants: vec!["Red".to_string(), "Green".to_string()],
        }
    );
}
