/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The crate root, items and paths
/// - expressions: Expression nodes, split into block-like and plain families
/// - statements: Statement nodes
/// - patterns: Pattern nodes
/// - types: Type nodes
/// - printer: S-expression `Display` for every node
pub mod ast;
pub mod expressions;
pub mod patterns;
pub mod printer;
pub mod statements;
pub mod types;
