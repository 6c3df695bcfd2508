//! Integration tests for the front end.
//!
//! These tests run whole programs through tokenization and parsing and
//! check the resulting tree, the scope bookkeeping and the reported errors.

use std::rc::Rc;

use subrust::{
    ast::{
        ast::Item,
        expressions::{Expr, ExprWithoutBlock, LiteralValue},
        statements::Stmt,
    },
    errors::errors::ErrorImpl,
    lexer::lexer::tokenize,
    parse_source,
    parser::parser::{parse, parse_with_options, ParseOptions},
};

const SHAPES: &str = r#"
// Shapes and a few things to do with them.
const SCALE: u32 = 0x10;
struct Origin;
struct Point { x: i32, y: i32 }
enum Kind { Square, Circle, }

trait Area {
    const SIDES: u8;
    fn area(&self) -> u32;
}

impl Area for Point {
    const SIDES: u8 = 4;
    fn area(&self) -> u32 {
        (self.x * self.y) as u32 * SCALE
    }
}

impl Point {
    const fn new(x: i32, y: i32) -> Self { Self { x, y } }
    fn shift(&mut self, by: &[i32; 2]) {
        self.x += by[0];
        self.y += by[1];
    }
}

fn classify(p: &Point, kind: Kind) -> &str {
    let mut total = 0;
    while let Some(n) = next(total) && n < 10 {
        total = total + n;
    }
    match kind {
        Kind::Square if p.x == p.y => "square",
        Kind::Square => { "rectangle" }
        Kind::Circle => "circle",
    }
}

fn main() {
    let origin = Origin;
    let p = Point::new(1, 2);
    let q = Point { x: -p.x, ..0 };
}
"#;

#[test]
fn test_parse_full_program_until_error() {
    // `..` in a struct literal is not part of the grammar.
    let error = parse_source(SHAPES, "shapes.lang").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: String::from("an identifier"),
            found: String::from(".."),
        }
    );
}

#[test]
fn test_parse_full_program() {
    let source = SHAPES.replace(", ..0 }", ", y: 0 }");
    let krate = parse_source(&source, "shapes.lang").unwrap();

    assert_eq!(krate.items.len(), 9);
    let names: Vec<String> = krate
        .items
        .iter()
        .filter_map(|item| item.name().map(|name| name.value.clone()))
        .collect();
    assert_eq!(
        names,
        vec!["SCALE", "Origin", "Point", "Kind", "Area", "classify", "main"]
    );

    let Item::Impl(area) = &krate.items[5] else {
        panic!("expected an impl");
    };
    assert_eq!(
        area.items[1].to_string(),
        "(fn area (&self) (-> u32) (block (tail (* (as (paren (* (. self x) (. self y))) u32) SCALE))))"
    );

    let Item::Function(classify) = &krate.items[7] else {
        panic!("expected a function");
    };
    assert_eq!(
        classify.to_string(),
        "(fn classify (p (& Point)) (kind Kind) (-> (& str)) (block \
         (let (bind mut total) 0) \
         (while (let-chain (let (Some n) (call next total)) (< n 10)) (block (; (= total (+ total n))))) \
         (tail (match kind \
         (arm (path Kind::Square) (if (== (. p x) (. p y))) \"square\") \
         (arm (path Kind::Square) (block (tail \"rectangle\"))) \
         (arm (path Kind::Circle) \"circle\")))))"
    );
}

#[test]
fn test_unit_struct_pattern_is_resolved() {
    let source = SHAPES.replace(", ..0 }", ", y: 0 }");
    let krate = parse_source(&source, "shapes.lang").unwrap();

    let Item::Function(main) = &krate.items[8] else {
        panic!("expected a function");
    };
    let body = main.body.as_ref().unwrap();
    assert_eq!(body.statements[0].to_string(), "(let origin Origin)");
    assert_eq!(
        body.statements[2].to_string(),
        "(let q (struct-literal Point (x (- (. p x))) (y 0)))"
    );
    assert!(body.tail.is_none());
}

#[test]
fn test_literal_values_decode() {
    let krate = parse_source(
        "const A: u8 = 0b1010_1010u8; const B: char = '\\x41'; const C: &str = \"a\\tb\"; const D: bool = true;",
        "literals.lang",
    )
    .unwrap();

    let values: Vec<LiteralValue> = krate
        .items
        .iter()
        .map(|item| match item {
            Item::Constant(constant) => match &constant.value {
                Some(Expr::WithoutBlock(ExprWithoutBlock::Literal(literal))) => {
                    literal.decode().unwrap()
                }
                value => panic!("expected a literal, found {:?}", value),
            },
            item => panic!("expected a constant, found {}", item),
        })
        .collect();

    assert_eq!(
        values,
        vec![
            LiteralValue::Integer(170),
            LiteralValue::Char('A'),
            LiteralValue::String(String::from("a\tb")),
            LiteralValue::Bool(true),
        ]
    );
}

#[test]
fn test_items_inside_function_bodies() {
    let krate = parse_source(
        "fn main() { const LIMIT: u8 = 3; struct Empty; match n { LIMIT => 1, Empty => 2, _ => 0 } }",
        "inner.lang",
    )
    .unwrap();

    let Item::Function(main) = &krate.items[0] else {
        panic!("expected a function");
    };
    let body = main.body.as_ref().unwrap();
    assert!(matches!(body.statements[0], Stmt::Item(_)));
    assert_eq!(
        body.tail.as_ref().unwrap().to_string(),
        "(match n (arm (path LIMIT) 1) (arm (path Empty) 2) (arm _ 0))"
    );
}

#[test]
fn test_parser_state_after_parse() {
    let tokens = tokenize(
        String::from("struct Point; impl Point {} impl Point {} fn main() {}"),
        Some(String::from("state.lang")),
    )
    .unwrap();
    let (parser, result) = parse(&tokens, Rc::new(String::from("state.lang")));

    assert!(result.is_ok());
    assert_eq!(parser.scopes().depth(), 1);
    assert!(parser.scopes().lookup("Point").is_some());
    assert!(parser.scopes().lookup("impl Point").is_some());
    assert_eq!(parser.redefinitions().len(), 1);
    assert_eq!(parser.redefinitions()[0].name, "impl Point");
}

#[test]
fn test_deep_nesting_fails_cleanly() {
    let source = format!("fn main() {{ {}x }}", "-".repeat(10_000));
    let error = parse_source(&source, "deep.lang").unwrap_err();
    assert_eq!(error.get_kind(), &ErrorImpl::NestingTooDeep { limit: 256 });
}

#[test]
fn test_custom_options() {
    let tokens = tokenize(
        String::from("const X: i32 = 1; fn main() { match v { X => 1 } }"),
        Some(String::from("options.lang")),
    )
    .unwrap();
    let options = ParseOptions {
        max_depth: 64,
        resolve_patterns: false,
    };
    let (_, result) = parse_with_options(&tokens, Rc::new(String::from("options.lang")), options);

    assert_eq!(
        result.unwrap().items[1].to_string(),
        "(fn main (block (tail (match v (arm X 1)))))"
    );
}

#[test]
fn test_error_reports_position_and_file() {
    let error = parse_source("fn main() {\n    let x = 1\n}", "broken.lang").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 26);
    assert_eq!(error.get_position().1.as_str(), "broken.lang");
    assert!(error.to_string().contains("broken.lang:26"));
}

#[test]
fn test_lexer_error_surfaces_through_parse_source() {
    let error = parse_source("fn main() { let x = 1 # 2; }", "lex.lang").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnrecognisedToken {
            token: String::from("#"),
        }
    );
    assert_eq!(error.get_position().0, 22);
}
