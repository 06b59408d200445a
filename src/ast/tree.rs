//! The parsed JSON tree.
//!
//! Nodes live in a single arena (`Vec<Node>`) and refer to each other by
//! [`NodeId`] index: children point up at their parent, containers point
//! down at their children. The arena keeps ownership flat, so dropping a
//! [`Tree`] never recurses no matter how deeply the input was nested.

/// Index of a node inside a [`Tree`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(pub(crate) usize);

/// One slot in the arena: the value plus a back-reference to the object or
/// array it belongs to (`None` for the root).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) value: Value,
}

/// A JSON value as stored in the tree.
///
/// Integers and floating-point numbers are kept distinct (standard JSON
/// has only "number"). Containers hold [`NodeId`]s rather than owned
/// children; the arena owns every node.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON object with insertion-ordered members
    Object(ObjectBody),

    /// JSON array
    Array(ArrayBody),

    /// UTF-8 string
    String(String),

    /// Integer number (preserved separately from reals)
    Integer(i64),

    /// Floating-point number
    Real(f64),

    /// JSON boolean (true/false)
    Bool(bool),

    /// JSON null
    Null,
}

/// Discriminant of a [`Value`], for callers that only need the type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Object,
    Array,
    String,
    Integer,
    Real,
    Bool,
    Null,
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Object(_) => Kind::Object,
            Value::Array(_) => Kind::Array,
            Value::String(_) => Kind::String,
            Value::Integer(_) => Kind::Integer,
            Value::Real(_) => Kind::Real,
            Value::Bool(_) => Kind::Bool,
            Value::Null => Kind::Null,
        }
    }

    /// Human-readable type name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Object(_) => "object",
            Value::Array(_) => "array",
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Bool(_) => "boolean",
            Value::Null => "null",
        }
    }

    /// True for objects and arrays, the only values that may carry
    /// children or act as a query scope.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }
}

/// Member storage of a JSON object.
///
/// Two parallel vectors: `names[i]` maps to `values[i]`. Insertion order is
/// preserved and significant for iteration. Names are not deduplicated;
/// lookup returns the first match in insertion order, so a duplicate key
/// shadows every later occurrence.
///
/// While the parser is mid-member there is a transient state where a name
/// has been appended but its value has not ("awaiting value"); outside of
/// parsing the two vectors are always the same length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectBody {
    pub(crate) names: Vec<String>,
    pub(crate) values: Vec<NodeId>,
}

impl ObjectBody {
    /// Number of completed name/value pairs.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First-match lookup in insertion order.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.names
            .iter()
            .zip(&self.values)
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, id)| *id)
    }

    pub(crate) fn add_name(&mut self, name: String) {
        self.names.push(name);
    }

    pub(crate) fn set_value(&mut self, id: NodeId) {
        self.values.push(id);
    }
}

/// Element storage of a JSON array. Insertion order is the array order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayBody {
    pub(crate) values: Vec<NodeId>,
}

impl ArrayBody {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.values.get(index).copied()
    }

    pub(crate) fn push(&mut self, id: NodeId) {
        self.values.push(id);
    }
}

/// A parsed JSON document: the node arena, the root node, and the number
/// of containers opened while parsing.
///
/// `depth` counts every `{` and `[` consumed, not the maximum simultaneous
/// nesting: `{"a":{"b":{"c":1}}}` has depth 3, but so does `[[1],[2]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: NodeId,
    pub(crate) depth: u64,
}

impl Tree {
    /// The root value. Always an object or an array.
    pub fn root(&self) -> ValueRef<'_> {
        ValueRef {
            tree: self,
            id: self.root,
        }
    }

    /// Count of containers opened during parsing.
    pub fn depth(&self) -> u64 {
        self.depth
    }

    /// Resolve a [`NodeId`] back into a reference.
    pub fn get(&self, id: NodeId) -> ValueRef<'_> {
        ValueRef { tree: self, id }
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub(crate) fn push(&mut self, parent: Option<NodeId>, value: Value) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { parent, value });
        id
    }
}

/// A borrowed handle to one value inside a [`Tree`].
///
/// This is the unit the query engine returns and the accessor API operates
/// on. Typed getters return `None` when the value is of a different kind.
///
/// # Examples
///
/// ```
/// use jacq::parse_json;
///
/// let tree = parse_json(r#"{"msg": "hi", "n": 3}"#).unwrap();
/// let root = tree.root();
/// assert_eq!(root.get("msg").unwrap().as_str(), Some("hi"));
/// assert_eq!(root.get("n").unwrap().as_int(), Some(3));
/// assert!(root.get("missing").is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ValueRef<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> ValueRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &'a Value {
        &self.tree.node(self.id).value
    }

    pub fn kind(&self) -> Kind {
        self.value().kind()
    }

    /// The object or array this value belongs to, or `None` for the root.
    pub fn parent(&self) -> Option<ValueRef<'a>> {
        self.tree.node(self.id).parent.map(|id| self.tree.get(id))
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self.value() {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self.value() {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as a real number. Integers are promoted.
    pub fn as_real(&self) -> Option<f64> {
        match self.value() {
            Value::Real(n) => Some(*n),
            Value::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.value() {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self.value(), Value::Null)
    }

    /// Object member lookup, first match in insertion order.
    pub fn get(&self, name: &str) -> Option<ValueRef<'a>> {
        match self.value() {
            Value::Object(obj) => obj.find(name).map(|id| self.tree.get(id)),
            _ => None,
        }
    }

    /// Array element lookup, bounds-checked.
    pub fn index(&self, index: usize) -> Option<ValueRef<'a>> {
        match self.value() {
            Value::Array(arr) => arr.get(index).map(|id| self.tree.get(id)),
            _ => None,
        }
    }

    /// Member/element count for containers, `None` for scalars.
    pub fn len(&self) -> Option<usize> {
        match self.value() {
            Value::Object(obj) => Some(obj.len()),
            Value::Array(arr) => Some(arr.len()),
            _ => None,
        }
    }

    /// Iterate object members in insertion order. Empty for non-objects.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, ValueRef<'a>)> + use<'a> {
        let tree = self.tree;
        let (names, values) = match self.value() {
            Value::Object(obj) => (obj.names.as_slice(), obj.values.as_slice()),
            _ => (&[][..], &[][..]),
        };
        names
            .iter()
            .zip(values)
            .map(move |(n, id)| (n.as_str(), tree.get(*id)))
    }

    /// Iterate array elements in order. Empty for non-arrays.
    pub fn elements(&self) -> impl Iterator<Item = ValueRef<'a>> + use<'a> {
        let tree = self.tree;
        let values = match self.value() {
            Value::Array(arr) => arr.values.as_slice(),
            _ => &[][..],
        };
        values.iter().map(move |id| tree.get(*id))
    }
}
