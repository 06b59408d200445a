use crate::ast::{ArrayBody, Kind, NodeId, ObjectBody, Token, TokenList, Tree, Value};
use std::mem;

/// Errors detected while building the tree. Both indicate token streams
/// the validator has no rule for; a validated stream that still trips one
/// of these was structurally wrong in a way only attachment can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A value or member name in a position where the current scope
    /// cannot accept it
    StructuralMismatch,

    /// Token stream ended before the root container was closed
    UnexpectedEnd,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::StructuralMismatch => {
                write!(f, "value or name in a position the enclosing scope cannot accept")
            }
            ParseError::UnexpectedEnd => {
                write!(f, "token stream ended before the root container closed")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse-time state of the current scope. This is bookkeeping for the
/// parser only; the finished tree carries no trace of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeState {
    /// Current scope is an object, ready for a member name or `}`
    AwaitingName,

    /// Current scope is an object, a name has been read and its value
    /// is pending
    AwaitingValue,

    /// Current scope is an array
    InArray,
}

/// Single-pass tree builder over a validated token stream.
///
/// Walks the tokens linearly, keeping only the current scope (the
/// innermost open object or array). The scope chain itself is implicit in
/// the parent references of the nodes already built, so closing a
/// container is just a hop to its parent.
pub struct Parser {
    tokens: TokenList,
    tree: Tree,
    scope: Option<NodeId>,
    state: ScopeState,
}

impl Parser {
    pub fn new(tokens: TokenList) -> Self {
        Parser {
            tokens,
            tree: Tree {
                nodes: Vec::new(),
                root: NodeId(0),
                depth: 0,
            },
            scope: None,
            state: ScopeState::AwaitingName,
        }
    }

    /// Build the tree. Must only be called on a stream that passed
    /// [`validate`](crate::validator::validate).
    ///
    /// Tokens after the close of the root container are ignored; that is
    /// a documented leniency, not an error.
    pub fn parse(mut self) -> Result<Tree, ParseError> {
        let len = self.tokens.len();

        for i in 0..len {
            // One token of lookahead decides whether a string inside an
            // object is a member name or a value.
            let next_is_colon = matches!(self.tokens.get(i + 1), Some(Token::Colon));
            let token = mem::replace(&mut self.tokens[i], Token::Null);

            match token {
                Token::ObjectBegin => {
                    self.open_container(Value::Object(ObjectBody::default()))?;
                    self.state = ScopeState::AwaitingName;
                }

                Token::ArrayBegin => {
                    self.open_container(Value::Array(ArrayBody::default()))?;
                    self.state = ScopeState::InArray;
                }

                Token::ObjectEnd | Token::ArrayEnd => {
                    // A name whose value never arrived, as in `{"a":}`.
                    if self.state == ScopeState::AwaitingValue {
                        return Err(ParseError::StructuralMismatch);
                    }
                    let scope = self.scope.ok_or(ParseError::StructuralMismatch)?;
                    match self.tree.node(scope).parent {
                        None => {
                            // The root just sealed; trailing tokens are
                            // ignored.
                            self.tree.root = scope;
                            return Ok(self.tree);
                        }
                        Some(parent) => {
                            self.scope = Some(parent);
                            self.state = match self.tree.node(parent).value.kind() {
                                Kind::Object => ScopeState::AwaitingName,
                                _ => ScopeState::InArray,
                            };
                        }
                    }
                }

                Token::String(s) => {
                    if self.state == ScopeState::InArray {
                        self.attach(Value::String(s))?;
                    } else if next_is_colon {
                        // Member name. Legal only while the object is not
                        // already waiting on a value.
                        if self.state != ScopeState::AwaitingName {
                            return Err(ParseError::StructuralMismatch);
                        }
                        let scope = self.scope.ok_or(ParseError::StructuralMismatch)?;
                        match &mut self.tree.node_mut(scope).value {
                            Value::Object(obj) => obj.add_name(s),
                            _ => return Err(ParseError::StructuralMismatch),
                        }
                        self.state = ScopeState::AwaitingValue;
                    } else {
                        self.attach(Value::String(s))?;
                    }
                }

                Token::Integer(n) => self.attach(Value::Integer(n)).map(|_| ())?,
                Token::Real(n) => self.attach(Value::Real(n)).map(|_| ())?,
                Token::Bool(b) => self.attach(Value::Bool(b)).map(|_| ())?,
                Token::Null => self.attach(Value::Null).map(|_| ())?,

                Token::Colon | Token::Comma => {}

                // Never stored in a token list.
                Token::Eof => {}
            }
        }

        // The validator balances containers, so running out of tokens with
        // the root still open means the stream was corrupted after
        // validation.
        Err(ParseError::UnexpectedEnd)
    }

    /// Construct a container, attach it to the current scope, and make it
    /// the new scope.
    fn open_container(&mut self, value: Value) -> Result<(), ParseError> {
        let id = match self.scope {
            None => self.tree.push(None, value),
            Some(_) => self.attach(value)?,
        };
        self.scope = Some(id);
        self.tree.depth += 1;
        Ok(())
    }

    /// The attachment rule: bind a freshly built value into the current
    /// scope. For an object the scope must be awaiting a value for its
    /// most recent name; for an array the value is appended.
    fn attach(&mut self, value: Value) -> Result<NodeId, ParseError> {
        let scope = self.scope.ok_or(ParseError::StructuralMismatch)?;

        match self.tree.node(scope).value.kind() {
            Kind::Object => {
                if self.state != ScopeState::AwaitingValue {
                    return Err(ParseError::StructuralMismatch);
                }
                let id = self.tree.push(Some(scope), value);
                match &mut self.tree.node_mut(scope).value {
                    Value::Object(obj) => obj.set_value(id),
                    _ => unreachable!(),
                }
                self.state = ScopeState::AwaitingName;
                Ok(id)
            }
            Kind::Array => {
                let id = self.tree.push(Some(scope), value);
                match &mut self.tree.node_mut(scope).value {
                    Value::Array(arr) => arr.push(id),
                    _ => unreachable!(),
                }
                Ok(id)
            }
            _ => Err(ParseError::StructuralMismatch),
        }
    }
}

/// Parse a validated token stream into a [`Tree`].
pub fn parse(tokens: TokenList) -> Result<Tree, ParseError> {
    Parser::new(tokens).parse()
}
