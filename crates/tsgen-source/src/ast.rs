//! Declaration-level syntax tree.
//!
//! Only what the extractor needs is kept: type declarations with their full
//! type structure, and function names.

use crate::error::Position;

/// A parsed Go source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Name from the package clause
    pub package: String,
    /// Top-level type and function declarations in source order
    pub decls: Vec<Decl>,
}

/// Top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    /// `type Name ...`
    Type(TypeSpec),
    /// `func Name(...)` or `func (r T) Name(...)`
    Func(FuncDecl),
}

/// One type specification, possibly from a grouped `type (...)` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    /// Declared name
    pub name: String,
    /// Underlying type
    pub ty: TypeNode,
    /// Position of the name
    pub pos: Position,
}

/// A function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    /// Function name
    pub name: String,
    /// `true` for methods
    pub has_receiver: bool,
    /// Position of the name
    pub pos: Position,
}

/// Syntactic type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    /// `Name`
    Name(String),
    /// `pkg.Name`
    Qualified {
        /// Package selector
        package: String,
        /// Type name
        name: String,
    },
    /// `*T`
    Pointer(Box<TypeNode>),
    /// `[]T`
    Slice(Box<TypeNode>),
    /// `[N]T` or `[...]T`
    Array(Box<TypeNode>),
    /// `map[K]V`
    Map,
    /// `chan T`, `<-chan T`, `chan<- T`
    Chan,
    /// `func(...) ...`
    Func,
    /// `interface { ... }`
    Interface,
    /// `Name[T, U]`
    Generic(Box<TypeNode>),
    /// `struct { ... }`
    Struct(Vec<FieldNode>),
    /// Any other type syntax, by grammar node kind
    Other(String),
}

/// One field line of a struct type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
    /// Declared names, empty for embedded fields
    pub names: Vec<String>,
    /// Field type
    pub ty: TypeNode,
    /// Tag literal as written, quotes included
    pub tag: Option<String>,
    /// Position of the first token
    pub pos: Position,
}

impl FieldNode {
    /// Returns `true` for embedded fields.
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        self.names.is_empty()
    }
}

impl SourceFile {
    /// Iterates over type declarations whose underlying type is a struct.
    pub fn structs(&self) -> impl Iterator<Item = (&TypeSpec, &[FieldNode])> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Type(spec) => match &spec.ty {
                TypeNode::Struct(fields) => Some((spec, fields.as_slice())),
                _ => None,
            },
            Decl::Func(_) => None,
        })
    }

    /// Iterates over top-level functions that are not methods.
    pub fn functions(&self) -> impl Iterator<Item = &FuncDecl> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Func(func) if !func.has_receiver => Some(func),
            _ => None,
        })
    }
}
