use std::fmt::Display;
use std::rc::Rc;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum NodeKind {
    Program,
    Expressions,
    FunctionCall,
    Binary,
    Quoted,
    Unquote,
    PropertyAccess,
    Parenthesis,
    Identifier,
    Block,
    Integer,
    Float,
    String,
    Operator,
}

impl NodeKind {
    pub fn to_str(&self) -> &'static str {
        use NodeKind::*;
        match self {
            Program => "Program",
            Expressions => "Expressions",
            FunctionCall => "FunctionCall",
            Binary => "Binary",
            Quoted => "Quoted",
            Unquote => "Unquote",
            PropertyAccess => "PropertyAccess",
            Parenthesis => "Parenthesis",
            Identifier => "Identifier",
            Block => "Block",
            Integer => "Integer",
            Float => "Float",
            String => "String",
            Operator => "Operator",
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Scalar carried by a leaf node. Identifier names, operator symbols and
/// string contents are all stored as text.
#[derive(Debug, PartialEq, Clone)]
pub enum Payload {
    Integer(i64),
    Float(f64),
    Text(Rc<str>),
}

impl Display for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Payload::Integer(value) => write!(f, "{}", value),
            Payload::Float(value) => write!(f, "{}", value),
            Payload::Text(value) => f.write_str(value),
        }
    }
}

/// A syntax tree node: either a list node (kind and ordered children) or a
/// leaf node (kind and payload), never both.
#[derive(Debug, PartialEq, Clone)]
pub struct Node {
    kind: NodeKind,
    children: Vec<Node>,
    payload: Option<Payload>,
}

impl Node {
    pub fn list(kind: NodeKind, children: Vec<Node>) -> Self {
        Node {
            kind,
            children,
            payload: None,
        }
    }

    pub fn leaf(kind: NodeKind, payload: Payload) -> Self {
        Node {
            kind,
            children: Vec::new(),
            payload: Some(payload),
        }
    }

    pub fn identifier(name: &str) -> Self {
        Node::leaf(NodeKind::Identifier, Payload::Text(name.into()))
    }

    pub fn operator(symbol: &str) -> Self {
        Node::leaf(NodeKind::Operator, Payload::Text(symbol.into()))
    }

    pub fn integer(value: i64) -> Self {
        Node::leaf(NodeKind::Integer, Payload::Integer(value))
    }

    pub fn float(value: f64) -> Self {
        Node::leaf(NodeKind::Float, Payload::Float(value))
    }

    pub fn string(value: &str) -> Self {
        Node::leaf(NodeKind::String, Payload::Text(value.into()))
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    pub fn is_leaf(&self) -> bool {
        self.payload.is_some()
    }

    /// The text payload of identifier, operator and string leaves.
    pub fn text(&self) -> Option<&Rc<str>> {
        match &self.payload {
            Some(Payload::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Indented tree rendering, one node per line.
    pub fn dump(&self) -> Dump<'_> {
        Dump(self)
    }
}

/// Compact single line form, `{Kind payload}` for leaves and
/// `{Kind [child child]}` for list nodes.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(payload) = &self.payload {
            return write!(f, "{{{} {}}}", self.kind, payload);
        }
        write!(f, "{{{} [", self.kind)?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", child)?;
        }
        write!(f, "]}}")
    }
}

pub struct Dump<'a>(&'a Node);

impl Dump<'_> {
    fn write_node(
        f: &mut std::fmt::Formatter<'_>,
        node: &Node,
        depth: usize,
    ) -> std::fmt::Result {
        write!(f, "{}- {}", "  ".repeat(depth), node.kind)?;
        match &node.payload {
            Some(payload) => writeln!(f, " {{ Value: \"{}\" }}", payload)?,
            None => writeln!(f)?,
        }
        for child in &node.children {
            Self::write_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl Display for Dump<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Self::write_node(f, self.0, 0)
    }
}
