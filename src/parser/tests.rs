//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs including:
//! - Operator precedence and associativity
//! - Blocks, statements and tail values
//! - Control flow, conditions and let-chains
//! - Items, types and patterns
//! - Scope bookkeeping and error cases
//!
//! Tree shapes are checked through the s-expression printer.

use std::rc::Rc;

use super::{
    cursor::TokenCursor,
    parser::{parse, parse_with_options, ParseOptions},
};
use crate::{
    ast::ast::{Crate, Item},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
};

fn parse_str(source: &str) -> Result<Crate, Error> {
    let tokens = tokenize(source.to_string(), Some("test.lang".to_string())).unwrap();
    let (_, result) = parse(&tokens, Rc::new("test.lang".to_string()));
    result
}

fn parse_str_with(source: &str, options: ParseOptions) -> Result<Crate, Error> {
    let tokens = tokenize(source.to_string(), Some("test.lang".to_string())).unwrap();
    let (_, result) = parse_with_options(&tokens, Rc::new("test.lang".to_string()), options);
    result
}

/// The body of `fn main() { source }`, printed.
fn body(source: &str) -> String {
    let krate = parse_str(&format!("fn main() {{ {} }}", source)).unwrap();
    match &krate.items[0] {
        Item::Function(function) => function.body.as_ref().unwrap().to_string(),
        item => panic!("expected a function, found {}", item),
    }
}

/// `source` parsed as the tail value of a block, printed.
fn expr(source: &str) -> String {
    let block = body(source);
    block
        .strip_prefix("(block (tail ")
        .and_then(|rest| rest.strip_suffix("))"))
        .unwrap_or_else(|| panic!("`{}` is not a tail expression: {}", source, block))
        .to_string()
}

fn body_error(source: &str) -> Error {
    parse_str(&format!("fn main() {{ {} }}", source)).unwrap_err()
}

#[test]
fn test_left_associative_tiers() {
    assert_eq!(expr("a + b + c"), "(+ (+ a b) c)");
    assert_eq!(expr("a - b + c"), "(+ (- a b) c)");
    assert_eq!(expr("a * b / c"), "(/ (* a b) c)");
    assert_eq!(expr("a << b << c"), "(<< (<< a b) c)");
    assert_eq!(expr("a & b & c"), "(& (& a b) c)");
    assert_eq!(expr("a | b | c"), "(| (| a b) c)");
    assert_eq!(expr("a ^ b ^ c"), "(^ (^ a b) c)");
    assert_eq!(expr("a && b && c"), "(&& (&& a b) c)");
    assert_eq!(expr("a || b || c"), "(|| (|| a b) c)");
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(expr("a = b = c"), "(= a (= b c))");
    assert_eq!(expr("a += b -= c"), "(+= a (-= b c))");
    assert_eq!(expr("a = b + c * d"), "(= a (+ b (* c d)))");
}

#[test]
fn test_precedence_between_tiers() {
    assert_eq!(expr("a + b * c"), "(+ a (* b c))");
    assert_eq!(expr("a * b + c"), "(+ (* a b) c)");
    assert_eq!(expr("a << b + c"), "(<< a (+ b c))");
    assert_eq!(expr("a | b ^ c & d"), "(| a (^ b (& c d)))");
    assert_eq!(expr("a == b && c != d"), "(&& (== a b) (!= c d))");
    assert_eq!(expr("a || b && c"), "(|| a (&& b c))");
}

#[test]
fn test_comparisons_fold_without_chaining() {
    assert_eq!(expr("a < b < c"), "(< (< a b) c)");
}

#[test]
fn test_cast_takes_a_type() {
    assert_eq!(expr("a < b as T"), "(< a (as b T))");
    assert_eq!(expr("a as u8 as u32"), "(as (as a u8) u32)");
    assert_eq!(expr("-a as i64"), "(as (- a) i64)");
    assert_eq!(expr("x as &mut T"), "(as x (&mut T))");
}

#[test]
fn test_prefix_operators() {
    assert_eq!(expr("-a * b"), "(* (- a) b)");
    assert_eq!(expr("!a.b()"), "(! (method a b))");
    assert_eq!(expr("*p + 1"), "(+ (* p) 1)");
    assert_eq!(expr("&mut x"), "(&mut x)");
    assert_eq!(expr("--x"), "(- (- x))");
}

#[test]
fn test_double_ampersand_borrows_twice() {
    assert_eq!(expr("&&x"), "(& (& x))");
    assert_eq!(expr("&&mut x"), "(& (&mut x))");
    assert_eq!(expr("a & &b"), "(& a (& b))");
}

#[test]
fn test_postfix_chains() {
    assert_eq!(expr("f(1, 2)[0].x"), "(. (index (call f 1 2) 0) x)");
    assert_eq!(expr("v.push(1,)"), "(method v push 1)");
    assert_eq!(expr("t.0"), "(. t 0)");
    assert_eq!(expr("a.b.c()"), "(method (. a b) c)");
    assert_eq!(expr("Shape::new()"), "(call Shape::new)");
}

#[test]
fn test_literals_and_paths() {
    assert_eq!(expr("0xFFu8"), "0xFFu8");
    assert_eq!(expr("'a'"), "'a'");
    assert_eq!(expr("\"hi\\n\""), "\"hi\\n\"");
    assert_eq!(expr("true"), "true");
    assert_eq!(expr("Self::MAX"), "Self::MAX");
    assert_eq!(expr("_"), "_");
}

#[test]
fn test_grouping_and_arrays() {
    assert_eq!(expr("(a + b) * c"), "(* (paren (+ a b)) c)");
    assert_eq!(expr("[1, 2, 3,]"), "(array 1 2 3)");
    assert_eq!(expr("[]"), "(array)");
    assert_eq!(expr("[0; 3]"), "(array-repeat 0 3)");
}

#[test]
fn test_struct_literals() {
    assert_eq!(
        expr("Point { x: 1, y }"),
        "(struct-literal Point (x 1) (y y))"
    );
    assert_eq!(
        expr("shapes::Point { x: a + 1, }"),
        "(struct-literal shapes::Point (x (+ a 1)))"
    );
    assert_eq!(expr("Unit {}"), "(struct-literal Unit)");
}

#[test]
fn test_struct_literal_excluded_from_conditions() {
    assert!(parse_str("fn main() { if Point { x: 1 } {} }").is_err());
    assert_eq!(
        body("if (Point { x: 1 }) == p {}"),
        "(block (tail (if (== (paren (struct-literal Point (x 1))) p) (block))))"
    );
    assert_eq!(
        body("if x == y { 1 } else { 2 }"),
        "(block (tail (if (== x y) (block (tail 1)) (block (tail 2)))))"
    );
}

#[test]
fn test_struct_literal_allowed_inside_brackets_of_a_condition() {
    assert_eq!(
        body("while f(Point { x: 1 }) {}"),
        "(block (tail (while (call f (struct-literal Point (x 1))) (block))))"
    );
}

#[test]
fn test_control_keywords() {
    assert_eq!(body("return;"), "(block (; (return)))");
    assert_eq!(body("return a + 1;"), "(block (; (return (+ a 1))))");
    assert_eq!(
        body("loop { break 1; }"),
        "(block (tail (loop (block (; (break 1))))))"
    );
    assert_eq!(
        body("loop { continue; }"),
        "(block (tail (loop (block (; continue)))))"
    );
}

#[test]
fn test_block_tail_rules() {
    assert_eq!(body("1; 2"), "(block (; 1) (tail 2))");
    assert_eq!(body("1; 2;"), "(block (; 1) (; 2))");
    assert_eq!(body("1; { 2 }"), "(block (; 1) (tail (block (tail 2))))");
    assert_eq!(body(""), "(block)");
    assert_eq!(body(";;"), "(block ; ;)");
    assert_eq!(body("{ 1 }"), "(block (tail (block (tail 1))))");
}

#[test]
fn test_block_like_statement_needs_no_semicolon() {
    assert_eq!(body("if c {} 1"), "(block (if c (block)) (tail 1))");
    assert_eq!(
        body("while c {} loop {}"),
        "(block (while c (block)) (tail (loop (block))))"
    );
    assert_eq!(body("{} {}"), "(block (block) (tail (block)))");
}

#[test]
fn test_block_like_statement_ends_at_brace() {
    assert_eq!(body("if c {} - 1"), "(block (if c (block)) (tail (- 1)))");
    assert_eq!(body("{} *p"), "(block (block) (tail (* p)))");
    assert_eq!(
        body("match x {}.len()"),
        "(block (tail (method (match x) len)))"
    );
}

#[test]
fn test_block_like_expression_continues_inside_expressions() {
    assert_eq!(
        body("let x = if c { 1 } else { 2 } + 3;"),
        "(block (let x (+ (if c (block (tail 1)) (block (tail 2))) 3)))"
    );
}

#[test]
fn test_missing_semicolon_is_an_error() {
    let error = body_error("a b");
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: String::from("`;`"),
            found: String::from("b"),
        }
    );
    assert!(error.get_tip().to_string().contains("semicolon"));
}

#[test]
fn test_reserved_word_is_not_a_binding() {
    let error = body_error("let move = 1;");
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: String::from("a pattern"),
            found: String::from("move"),
        }
    );
}

#[test]
fn test_else_if_chain() {
    assert_eq!(
        expr("if a { 1 } else if b { 2 } else { 3 }"),
        "(if a (block (tail 1)) (if b (block (tail 2)) (block (tail 3))))"
    );
}

#[test]
fn test_if_let_and_let_chains() {
    assert_eq!(
        expr("if let Some(x) = y { 1 }"),
        "(if (let-chain (let (Some x) y)) (block (tail 1)))"
    );
    assert_eq!(
        expr("if let Some(x) = y && x > 0 { x }"),
        "(if (let-chain (let (Some x) y) (> x 0)) (block (tail x)))"
    );
    assert_eq!(
        expr("while let Some(n) = it.next() && let 0 = n {}"),
        "(while (let-chain (let (Some n) (method it next)) (let 0 n)) (block))"
    );
}

#[test]
fn test_let_chain_link_excludes_lazy_or() {
    assert!(parse_str("fn main() { if let x = a || b {} }").is_err());
    assert_eq!(
        expr("if a || b {}"),
        "(if (|| a b) (block))"
    );
}

#[test]
fn test_match_arms() {
    assert_eq!(
        expr("match x { 1 => a, _ => {} 2 => b }"),
        "(match x (arm 1 a) (arm _ (block)) (arm 2 b))"
    );
    assert_eq!(
        expr("match x { n if n > 0 => n, -1 => 0, _ => 1, }"),
        "(match x (arm n (if (> n 0)) n) (arm -1 0) (arm _ 1))"
    );
    assert_eq!(
        expr("match v { 1 => a, 2 => { b } 3 => c }"),
        "(match v (arm 1 a) (arm 2 (block (tail b))) (arm 3 c))"
    );
    assert_eq!(expr("match x {}"), "(match x)");
}

#[test]
fn test_match_arm_needs_comma() {
    let error = body_error("match x { 1 => a 2 => b }");
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: String::from("`,`"),
            found: String::from("2"),
        }
    );
}

#[test]
fn test_let_statements() {
    assert_eq!(body("let x;"), "(block (let x))");
    assert_eq!(
        body("let mut x: i32 = 5;"),
        "(block (let (bind mut x) : i32 5))"
    );
    assert_eq!(body("let &mut y = r;"), "(block (let (&mut y) r))");
    assert_eq!(body("let ref z = r;"), "(block (let (bind ref z) r))");
}

#[test]
fn test_patterns() {
    assert_eq!(
        expr("match v { ref mut x @ 1 => x, _ => 0 }"),
        "(match v (arm (bind ref mut x @ 1) x) (arm _ 0))"
    );
    assert_eq!(
        expr("match v { &&mut x => x }"),
        "(match v (arm (& (&mut x)) x))"
    );
    assert_eq!(
        expr("match c { Color::Red => 1, Shape::Circle(r, _) => r }"),
        "(match c (arm (path Color::Red) 1) (arm (Shape::Circle r _) r))"
    );
    assert_eq!(
        expr("match b { true => 1, 'a' => 2, \"s\" => 3 }"),
        "(match b (arm true 1) (arm 'a' 2) (arm \"s\" 3))"
    );
}

#[test]
fn test_pattern_resolves_known_constant() {
    let krate = parse_str(
        "const MAX: i32 = 10; struct Unit; fn main() { match v { MAX => 1, Unit => 2, x => x } }",
    )
    .unwrap();
    assert_eq!(
        krate.items[2].to_string(),
        "(fn main (block (tail (match v (arm (path MAX) 1) (arm (path Unit) 2) (arm x x)))))"
    );
}

#[test]
fn test_pattern_resolution_can_be_turned_off() {
    let options = ParseOptions {
        resolve_patterns: false,
        ..ParseOptions::default()
    };
    let krate = parse_str_with("const MAX: i32 = 10; fn main() { let MAX = 1; }", options).unwrap();
    assert_eq!(
        krate.items[1].to_string(),
        "(fn main (block (let MAX 1)))"
    );
}

#[test]
fn test_pattern_does_not_see_later_items() {
    let krate = parse_str("fn main() { let MAX = 1; } const MAX: i32 = 10;").unwrap();
    assert_eq!(krate.items[0].to_string(), "(fn main (block (let MAX 1)))");
}

#[test]
fn test_struct_with_fields_is_not_a_pattern_constant() {
    let krate = parse_str("struct Point { x: i32 } fn main() { let Point = p; }").unwrap();
    assert_eq!(krate.items[1].to_string(), "(fn main (block (let Point p)))");
}

#[test]
fn test_types() {
    assert_eq!(
        body("let a: &&mut [i32; 3] = x;"),
        "(block (let a : (& (&mut (array i32 3))) x))"
    );
    assert_eq!(body("let s: &[u8] = x;"), "(block (let s : (& (slice u8)) x))");
    assert_eq!(
        body("let t: (i32, bool,) = x;"),
        "(block (let t : (tuple i32 bool) x))"
    );
    assert_eq!(body("let t: (i32) = x;"), "(block (let t : i32 x))");
    assert_eq!(body("let u: () = x;"), "(block (let u : (tuple) x))");
    assert_eq!(body("let n: ! = x;"), "(block (let n : ! x))");
    assert_eq!(body("let i: _ = x;"), "(block (let i : _ x))");
}

#[test]
fn test_functions() {
    let krate = parse_str("fn add(a: i32, b: i32,) -> i32 { a + b }").unwrap();
    assert_eq!(
        krate.to_string(),
        "(crate (fn add (a i32) (b i32) (-> i32) (block (tail (+ a b)))))"
    );

    let krate = parse_str("const fn zero() -> u8 { 0 }").unwrap();
    assert_eq!(krate.to_string(), "(crate (const-fn zero (-> u8) (block (tail 0))))");
}

#[test]
fn test_self_parameters() {
    let krate = parse_str(
        "impl Point { fn a(self) {} fn b(mut self, x: i32) {} fn c(&self) {} fn d(&mut self) {} fn e(self: Self) {} }",
    )
    .unwrap();
    assert_eq!(
        krate.to_string(),
        "(crate (impl Point (fn a (self) (block)) (fn b (mut self) (x i32) (block)) (fn c (&self) (block)) (fn d (&mut self) (block)) (fn e (self Self) (block))))"
    );
}

#[test]
fn test_structs_and_enums() {
    let krate =
        parse_str("struct Point { x: i32, y: i32, } struct Unit; enum Color { Red, Green, Blue, }")
            .unwrap();
    assert_eq!(
        krate.to_string(),
        "(crate (struct Point (x i32) (y i32)) (struct Unit unit) (enum Color Red Green Blue))"
    );
}

#[test]
fn test_struct_needs_body_or_semicolon() {
    let error = parse_str("struct Point (i32)").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: String::from("`{` or `;`"),
            found: String::from("("),
        }
    );
}

#[test]
fn test_traits_and_impls() {
    let krate = parse_str(
        "trait Shape { const SIDES: u8; fn area(&self) -> i32; }
         impl Shape for Square { const SIDES: u8 = 4; fn area(&self) -> i32 { self.side * self.side } }",
    )
    .unwrap();
    assert_eq!(
        krate.to_string(),
        "(crate (trait Shape (const SIDES u8) (fn area (&self) (-> i32))) \
         (impl Shape for Square (const SIDES u8 4) (fn area (&self) (-> i32) (block (tail (* (. self side) (. self side)))))))"
    );
}

#[test]
fn test_signature_only_function_outside_trait() {
    let error = parse_str("fn area(&self) -> i32;").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: String::from("a function body"),
            found: String::from(";"),
        }
    );

    assert!(parse_str("impl Square { fn area(&self) -> i32; }").is_err());
}

#[test]
fn test_constant_needs_value_outside_trait() {
    assert!(parse_str("const MAX: i32;").is_err());
    assert!(parse_str("const _: i32 = 0;").is_ok());
}

#[test]
fn test_const_block_versus_const_item() {
    assert_eq!(
        body("const { 1 }"),
        "(block (tail (const (block (tail 1)))))"
    );
    assert_eq!(
        body("const N: usize = 3; N"),
        "(block (const N usize 3) (tail N))"
    );
    assert_eq!(
        body("const fn f() {} f()"),
        "(block (const-fn f (block)) (tail (call f)))"
    );
}

#[test]
fn test_items_inside_blocks() {
    assert_eq!(
        body("struct P; enum E { A } P"),
        "(block (struct P unit) (enum E A) (tail P))"
    );
}

#[test]
fn test_redefinitions_are_recorded() {
    let tokens = tokenize(
        "fn a() {} struct a; fn main() { let x = 1; let x = 2; }".to_string(),
        Some("test.lang".to_string()),
    )
    .unwrap();
    let (parser, result) = parse(&tokens, Rc::new("test.lang".to_string()));

    assert!(result.is_ok());
    assert_eq!(parser.redefinitions().len(), 1);
    assert_eq!(parser.redefinitions()[0].name, "a");
    assert_eq!(parser.redefinitions()[0].position.0, 10);
}

#[test]
fn test_duplicate_parameters_are_recorded() {
    let tokens = tokenize(
        "fn f(a: i32, a: i32) {}".to_string(),
        Some("test.lang".to_string()),
    )
    .unwrap();
    let (parser, result) = parse(&tokens, Rc::new("test.lang".to_string()));

    assert!(result.is_ok());
    assert_eq!(parser.redefinitions().len(), 1);
    assert_eq!(parser.redefinitions()[0].name, "a");
}

#[test]
fn test_scopes_are_balanced_after_parse() {
    let tokens = tokenize(
        "fn main() { if let Some(x) = y { { x } } match z { n => n } }".to_string(),
        Some("test.lang".to_string()),
    )
    .unwrap();
    let (parser, result) = parse(&tokens, Rc::new("test.lang".to_string()));

    assert!(result.is_ok());
    assert_eq!(parser.scopes().depth(), 1);
    assert!(parser.scopes().lookup("main").is_some());
    assert!(parser.scopes().lookup("x").is_none());
}

#[test]
fn test_nesting_too_deep() {
    let source = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    let error = body_error(&source);
    assert_eq!(error.get_kind(), &ErrorImpl::NestingTooDeep { limit: 256 });

    let source = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert!(parse_str(&format!("fn main() {{ {} }}", source)).is_ok());
}

#[test]
fn test_nested_match_fails_cleanly() {
    let source = format!("{}x{}", "match x { _ => ".repeat(255), " }".repeat(255));
    let error = body_error(&source);
    assert_eq!(error.get_kind(), &ErrorImpl::NestingTooDeep { limit: 256 });

    let source = format!("{}x{}", "match x { _ => ".repeat(20), " }".repeat(20));
    assert!(parse_str(&format!("fn main() {{ {} }}", source)).is_ok());
}

#[test]
fn test_nested_blocks_fail_cleanly() {
    let source = format!("{}1{}", "{ ".repeat(255), " }".repeat(255));
    let error = body_error(&source);
    assert_eq!(error.get_kind(), &ErrorImpl::NestingTooDeep { limit: 256 });
}

#[test]
fn test_nesting_limit_is_configurable() {
    let options = ParseOptions {
        max_depth: 4,
        ..ParseOptions::default()
    };
    let error = parse_str_with("fn main() { { { { { 1 } } } } }", options).unwrap_err();
    assert_eq!(error.get_kind(), &ErrorImpl::NestingTooDeep { limit: 4 });

    assert!(parse_str_with("fn main() { 1 }", options).is_ok());
}

#[test]
fn test_unexpected_end_of_input() {
    let error = parse_str("fn main() { let x = ").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedEndOfInput {
            expected: String::from("an expression"),
        }
    );
}

#[test]
fn test_unexpected_token_position() {
    let error = parse_str("fn main() { let = 1; }").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 16);
}

#[test]
fn test_top_level_must_be_items() {
    let error = parse_str("let x = 1;").unwrap_err();
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedToken {
            expected: String::from("an item"),
            found: String::from("let"),
        }
    );
}

#[test]
fn test_empty_source() {
    let krate = parse_str("").unwrap();
    assert!(krate.items.is_empty());
    assert_eq!(krate.to_string(), "(crate)");
}

#[test]
fn test_cursor_navigation() {
    let tokens = tokenize("a + 1".to_string(), Some("test.lang".to_string())).unwrap();
    let mut cursor = TokenCursor::new(&tokens, Rc::new("test.lang".to_string()));

    assert_eq!(cursor.kind(), TokenKind::Identifier);
    assert_eq!(cursor.kind_ahead(2), TokenKind::Integer);
    assert!(cursor.previous().is_none());

    assert_eq!(cursor.consume().unwrap().value, "a");
    assert!(!cursor.eat(TokenKind::Dash));
    assert!(cursor.eat(TokenKind::Plus));
    assert!(!cursor.eat_value(TokenKind::Integer, "2"));
    assert!(cursor.eat_value(TokenKind::Integer, "1"));
    assert_eq!(cursor.previous().unwrap().value, "1");

    assert_eq!(cursor.kind(), TokenKind::EOF);
    assert_eq!(cursor.kind_ahead(5), TokenKind::EOF);
    assert_eq!(cursor.position().0, 5);
}

#[test]
fn test_cursor_past_the_end() {
    let tokens: Vec<Token> = vec![];
    let mut cursor = TokenCursor::new(&tokens, Rc::new("test.lang".to_string()));

    assert_eq!(cursor.kind(), TokenKind::EOF);
    assert!(cursor.consume().is_err());
    assert_eq!(cursor.position().0, 0);
}
