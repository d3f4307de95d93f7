/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: the expression sum type and its node structs
/// - statements: the statement sum type and the program root
/// - types: the primitive type enumeration and runtime values
pub mod expressions;
pub mod statements;
pub mod types;
