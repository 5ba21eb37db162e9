//! Go syntax tree construction.
//!
//! The source is parsed with the tree-sitter Go grammar and the concrete
//! tree is folded into the declaration-level [`ast`](crate::ast): package
//! clause, type declarations with their full type structure, and function
//! names. Imports, constants, variables and function bodies are dropped.

use crate::ast::{Decl, FieldNode, FuncDecl, SourceFile, TypeNode, TypeSpec};
use crate::error::{ParseError, Position};
use tree_sitter::{Node, Parser, Tree};

const BOM: char = '\u{feff}';
const SNIPPET_LEN: usize = 24;

/// Parses a Go source file.
///
/// A leading byte order mark is ignored.
///
/// # Errors
///
/// Returns [`ParseError`] if the source contains a syntax error, does not
/// start with a package clause, or has statements at top level.
///
/// # Examples
///
/// ```
/// use tsgen_source::syntax::parse_file;
///
/// let file = parse_file("package main\n\ntype User struct {\n\tID uint\n}\n").unwrap();
/// assert_eq!(file.package, "main");
/// assert_eq!(file.structs().count(), 1);
/// ```
pub fn parse_file(source: &str) -> Result<SourceFile, ParseError> {
    let source = source.strip_prefix(BOM).unwrap_or(source);
    let tree = parse_tree(source)?;
    let root = tree.root_node();

    if let Some(err) = first_error(root, source) {
        return Err(err);
    }

    Builder { source }.file(root)
}

fn parse_tree(source: &str) -> Result<Tree, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| ParseError::Language {
            message: e.to_string(),
        })?;
    parser.parse(source, None).ok_or(ParseError::Aborted)
}

/// Finds the first error or missing node in document order.
fn first_error(node: Node<'_>, source: &str) -> Option<ParseError> {
    if !node.has_error() {
        return None;
    }
    if node.is_missing() {
        return Some(ParseError::Missing {
            what: node.kind().to_string(),
            pos: position(node),
        });
    }
    if node.is_error() {
        return Some(ParseError::Syntax {
            near: snippet(source.get(node.byte_range()).unwrap_or_default()),
            pos: position(node),
        });
    }
    children(node)
        .into_iter()
        .find_map(|child| first_error(child, source))
}

fn snippet(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default().trim();
    line.chars().take(SNIPPET_LEN).collect()
}

fn position(node: Node<'_>) -> Position {
    let point = node.start_position();
    Position {
        line: point.row + 1,
        column: point.column + 1,
    }
}

fn children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

fn required<'t>(node: Node<'t>, field: &str) -> Result<Node<'t>, ParseError> {
    node.child_by_field_name(field)
        .ok_or_else(|| ParseError::Missing {
            what: field.to_string(),
            pos: position(node),
        })
}

struct Builder<'s> {
    source: &'s str,
}

impl<'s> Builder<'s> {
    fn text(&self, node: Node<'_>) -> &'s str {
        self.source.get(node.byte_range()).unwrap_or_default()
    }

    fn file(&self, root: Node<'_>) -> Result<SourceFile, ParseError> {
        let mut package = None;
        let mut decls = Vec::new();

        for node in named_children(root) {
            if node.kind() == "comment" {
                continue;
            }
            if package.is_none() && node.kind() != "package_clause" {
                return Err(ParseError::MissingPackage {
                    pos: position(node),
                });
            }

            match node.kind() {
                "package_clause" => {
                    let name = named_children(node)
                        .into_iter()
                        .find(|n| n.kind() == "package_identifier")
                        .ok_or_else(|| ParseError::Missing {
                            what: "package name".to_string(),
                            pos: position(node),
                        })?;
                    package = Some(self.text(name).to_string());
                }
                "type_declaration" => {
                    for spec in named_children(node) {
                        if matches!(spec.kind(), "type_spec" | "type_alias") {
                            decls.push(Decl::Type(self.type_spec(spec)?));
                        }
                    }
                }
                "function_declaration" | "method_declaration" => {
                    decls.push(Decl::Func(self.func(node)?));
                }
                "import_declaration" | "const_declaration" | "var_declaration" => {}
                other => {
                    return Err(ParseError::UnexpectedNode {
                        kind: other.replace('_', " "),
                        pos: position(node),
                    });
                }
            }
        }

        let package = package.ok_or(ParseError::MissingPackage {
            pos: Position { line: 1, column: 1 },
        })?;
        Ok(SourceFile { package, decls })
    }

    fn type_spec(&self, node: Node<'_>) -> Result<TypeSpec, ParseError> {
        let name = required(node, "name")?;
        Ok(TypeSpec {
            name: self.text(name).to_string(),
            ty: self.type_node(required(node, "type")?)?,
            pos: position(name),
        })
    }

    fn func(&self, node: Node<'_>) -> Result<FuncDecl, ParseError> {
        let name = required(node, "name")?;
        Ok(FuncDecl {
            name: self.text(name).to_string(),
            has_receiver: node.kind() == "method_declaration",
            pos: position(name),
        })
    }

    fn type_node(&self, node: Node<'_>) -> Result<TypeNode, ParseError> {
        let ty = match node.kind() {
            "type_identifier" => TypeNode::Name(self.text(node).to_string()),
            "qualified_type" => TypeNode::Qualified {
                package: self.text(required(node, "package")?).to_string(),
                name: self.text(required(node, "name")?).to_string(),
            },
            "pointer_type" | "parenthesized_type" => {
                let inner = named_children(node)
                    .into_iter()
                    .find(|n| n.kind() != "comment")
                    .ok_or_else(|| ParseError::Missing {
                        what: "type".to_string(),
                        pos: position(node),
                    })?;
                let inner = self.type_node(inner)?;
                if node.kind() == "pointer_type" {
                    TypeNode::Pointer(Box::new(inner))
                } else {
                    inner
                }
            }
            "slice_type" => TypeNode::Slice(Box::new(self.type_node(required(node, "element")?)?)),
            "array_type" => {
                TypeNode::Array(Box::new(self.type_node(required(node, "element")?)?))
            }
            "map_type" => TypeNode::Map,
            "channel_type" => TypeNode::Chan,
            "function_type" => TypeNode::Func,
            "interface_type" => TypeNode::Interface,
            "generic_type" => TypeNode::Generic(Box::new(self.type_node(required(node, "type")?)?)),
            "struct_type" => TypeNode::Struct(self.struct_fields(node)?),
            other => TypeNode::Other(other.to_string()),
        };
        Ok(ty)
    }

    fn struct_fields(&self, node: Node<'_>) -> Result<Vec<FieldNode>, ParseError> {
        let Some(list) = named_children(node)
            .into_iter()
            .find(|n| n.kind() == "field_declaration_list")
        else {
            return Ok(Vec::new());
        };

        named_children(list)
            .into_iter()
            .filter(|n| n.kind() == "field_declaration")
            .map(|field| self.field(field))
            .collect()
    }

    fn field(&self, node: Node<'_>) -> Result<FieldNode, ParseError> {
        let mut cursor = node.walk();
        let names: Vec<String> = node
            .children_by_field_name("name", &mut cursor)
            .map(|n| self.text(n).to_string())
            .collect();

        let mut ty = self.type_node(required(node, "type")?)?;
        // `*T` embedding keeps the star as an anonymous token beside the type
        if names.is_empty()
            && children(node)
                .iter()
                .any(|c| !c.is_named() && c.kind() == "*")
        {
            ty = TypeNode::Pointer(Box::new(ty));
        }

        Ok(FieldNode {
            names,
            ty,
            tag: node
                .child_by_field_name("tag")
                .map(|tag| self.text(tag).to_string()),
            pos: position(node),
        })
    }
}
