use std::error::Error;
use std::fmt;

use super::{kind::NodeKind, node::Value, operators::OperatorCategory};

/// A named field of a node, optionally pointing at a single element of a list field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub index: Option<usize>,
}

impl Field {
    pub const fn named(name: &'static str) -> Field {
        Field { name, index: None }
    }

    pub const fn element(name: &'static str, index: usize) -> Field {
        Field { name, index: Some(index) }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.index {
            None => write!(f, "`{}`", self.name),
            Some(index) => write!(f, "`{}[{}]`", self.name, index),
        }
    }
}

/// The set of node kinds a field accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeCategory {
    Expression,
    Statement,
    SourceElement,
    Identifier,
    BlockStatement,
    CatchClause,
    SwitchCase,
    VariableDeclarator,
    /// The left hand side of a for-in statement or the initializer of a for statement.
    ForInitializer,
}

impl NodeCategory {
    pub fn contains(&self, kind: NodeKind) -> bool {
        match self {
            NodeCategory::Expression => kind.is_expression(),
            NodeCategory::Statement => kind.is_statement(),
            NodeCategory::SourceElement => kind.is_source_element(),
            NodeCategory::Identifier => kind == NodeKind::Identifier,
            NodeCategory::BlockStatement => kind == NodeKind::BlockStatement,
            NodeCategory::CatchClause => kind == NodeKind::CatchClause,
            NodeCategory::SwitchCase => kind == NodeKind::SwitchCase,
            NodeCategory::VariableDeclarator => kind == NodeKind::VariableDeclarator,
            NodeCategory::ForInitializer => {
                kind.is_expression() || kind == NodeKind::VariableDeclaration
            }
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NodeCategory::Expression => write!(f, "an expression"),
            NodeCategory::Statement => write!(f, "a statement"),
            NodeCategory::SourceElement => write!(f, "a statement or function declaration"),
            NodeCategory::Identifier => write!(f, "an Identifier"),
            NodeCategory::BlockStatement => write!(f, "a BlockStatement"),
            NodeCategory::CatchClause => write!(f, "a CatchClause"),
            NodeCategory::SwitchCase => write!(f, "a SwitchCase"),
            NodeCategory::VariableDeclarator => write!(f, "a VariableDeclarator"),
            NodeCategory::ForInitializer => write!(f, "an expression or VariableDeclaration"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ValidationErrorKind {
    // Malformed values in node position
    NotANode(String),
    MissingType,
    UnknownNodeType(String),

    // Source locations
    MissingLocPosition(&'static str),
    InvalidLocLine(&'static str),
    InvalidLocColumn(&'static str),

    // Node shape
    MissingField(Field),
    ExpectedArray(Field),
    ExpectedString(Field),
    UnexpectedNode { field: Field, expected: NodeCategory, found: NodeKind },
    InvalidOperator(OperatorCategory, Option<String>),
    InvalidPrefix,

    // Names
    InvalidIdentifierName(String),
    ReservedWord(String),
    InvalidMemberProperty,

    // Literals
    MissingLiteralValue,
    InvalidLiteralValue(String),
    NaNLiteral,
    NegativeNumberLiteral,

    // Object literals
    InvalidProperty(Field),
    InvalidPropertyKind,
    InvalidPropertyKey,
    GetterWrongNumberOfParams,
    SetterWrongNumberOfParams,
    ConflictingProperty(String),

    // Control flow
    BreakOutsideBreakable,
    ContinueOutsideIterable,
    ReturnOutsideFunction,
    LabelNotFound(String),
    DuplicateLabel(String),
    DanglingElse,
    MultipleDefaultCases,
    MissingHandlerOrFinalizer,

    TooFewSequenceExpressions,
    EmptyVariableDeclaration,
    InvalidVariableKind,

    // Strict mode
    WithInStrictMode,
    DeleteIdentifierInStrictMode,
    DuplicateParameter(String),
    EvalOrArgumentsInStrictMode(String),
    DuplicatePropertyInStrictMode(String),
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationErrorKind::NotANode(found) => write!(f, "Expected a node, found {}", found),
            ValidationErrorKind::MissingType => write!(f, "Node must have a string `type`"),
            ValidationErrorKind::UnknownNodeType(type_name) => {
                write!(f, "Unknown node type \"{}\"", type_name)
            }
            ValidationErrorKind::MissingLocPosition(position) => {
                write!(f, "`loc.{}` must be present", position)
            }
            ValidationErrorKind::InvalidLocLine(position) => {
                write!(f, "`loc.{}.line` must be a number no less than 1", position)
            }
            ValidationErrorKind::InvalidLocColumn(position) => {
                write!(f, "`loc.{}.column` must be a non-negative number", position)
            }
            ValidationErrorKind::MissingField(field) => match field.index {
                None => write!(f, "{} is required", field),
                Some(_) => write!(f, "{} must not be null", field),
            },
            ValidationErrorKind::ExpectedArray(field) => write!(f, "{} must be an array", field),
            ValidationErrorKind::ExpectedString(field) => write!(f, "{} must be a string", field),
            ValidationErrorKind::UnexpectedNode { field, expected, found } => {
                write!(f, "{} must be {}, found {}", field, expected, found)
            }
            ValidationErrorKind::InvalidOperator(category, None) => {
                write!(f, "Missing {} operator", category)
            }
            ValidationErrorKind::InvalidOperator(category, Some(operator)) => {
                write!(f, "Invalid {} operator {}", category, operator)
            }
            ValidationErrorKind::InvalidPrefix => write!(f, "`prefix` must be a boolean"),
            ValidationErrorKind::InvalidIdentifierName(name) => {
                write!(f, "\"{}\" is not a valid identifier name", name)
            }
            ValidationErrorKind::ReservedWord(name) => {
                write!(f, "Identifier \"{}\" is a reserved word", name)
            }
            ValidationErrorKind::InvalidMemberProperty => {
                write!(f, "Non-computed `property` must be an Identifier with a valid name")
            }
            ValidationErrorKind::MissingLiteralValue => write!(f, "Literal must have a `value`"),
            ValidationErrorKind::InvalidLiteralValue(found) => {
                write!(f, "Literal value cannot be {}", found)
            }
            ValidationErrorKind::NaNLiteral => write!(f, "Numeric literal cannot be NaN"),
            ValidationErrorKind::NegativeNumberLiteral => {
                write!(f, "Numeric literal cannot be negative")
            }
            ValidationErrorKind::InvalidProperty(field) => {
                write!(f, "{} must be a property", field)
            }
            ValidationErrorKind::InvalidPropertyKind => {
                write!(f, "Property `kind` must be \"init\", \"get\" or \"set\"")
            }
            ValidationErrorKind::InvalidPropertyKey => {
                write!(f, "Property `key` must be an Identifier or a string or numeric Literal")
            }
            ValidationErrorKind::GetterWrongNumberOfParams => {
                write!(f, "Getter must be a function expression with no parameters")
            }
            ValidationErrorKind::SetterWrongNumberOfParams => {
                write!(f, "Setter must be a function expression with exactly one parameter")
            }
            ValidationErrorKind::ConflictingProperty(key) => {
                write!(f, "Property \"{}\" conflicts with an earlier property", key)
            }
            ValidationErrorKind::BreakOutsideBreakable => {
                write!(f, "Break must be inside loop or switch")
            }
            ValidationErrorKind::ContinueOutsideIterable => {
                write!(f, "Continue must be inside loop")
            }
            ValidationErrorKind::ReturnOutsideFunction => {
                write!(f, "Return must be inside function")
            }
            ValidationErrorKind::LabelNotFound(label) => {
                write!(f, "Label \"{}\" not found", label)
            }
            ValidationErrorKind::DuplicateLabel(label) => {
                write!(f, "Duplicate label \"{}\"", label)
            }
            ValidationErrorKind::DanglingElse => {
                write!(f, "`consequent` would capture the `else` of this if statement")
            }
            ValidationErrorKind::MultipleDefaultCases => {
                write!(f, "Switch can only have a single default case")
            }
            ValidationErrorKind::MissingHandlerOrFinalizer => {
                write!(f, "Try statement must have a catch clause or a finalizer")
            }
            ValidationErrorKind::TooFewSequenceExpressions => {
                write!(f, "Sequence expression must have at least two expressions")
            }
            ValidationErrorKind::EmptyVariableDeclaration => {
                write!(f, "Variable declaration must have at least one declarator")
            }
            ValidationErrorKind::InvalidVariableKind => {
                write!(f, "Variable declaration `kind` must be \"var\", \"let\" or \"const\"")
            }
            ValidationErrorKind::WithInStrictMode => {
                write!(f, "Strict mode code may not contain 'with' statements")
            }
            ValidationErrorKind::DeleteIdentifierInStrictMode => {
                write!(f, "Cannot delete variables in strict mode code")
            }
            ValidationErrorKind::DuplicateParameter(name) => {
                write!(f, "Duplicate parameter \"{}\" not allowed in strict mode functions", name)
            }
            ValidationErrorKind::EvalOrArgumentsInStrictMode(name) => {
                write!(f, "Cannot bind or assign to '{}' in strict mode code", name)
            }
            ValidationErrorKind::DuplicatePropertyInStrictMode(key) => {
                write!(f, "Duplicate data property \"{}\" not allowed in strict mode code", key)
            }
        }
    }
}

/// A single violation, tagged with the node that owns the failing field. Malformed values are
/// tagged with themselves.
#[derive(Clone)]
pub struct ValidationError<'a> {
    pub node: &'a Value,
    pub kind: ValidationErrorKind,
}

impl<'a> ValidationError<'a> {
    pub fn new(node: &'a Value, kind: ValidationErrorKind) -> ValidationError<'a> {
        ValidationError { node, kind }
    }

    /// Start line and column of the offending node, if it carries a well-formed location.
    pub fn line_col(&self) -> Option<(usize, usize)> {
        let start = self.node.as_node()?.child("loc")?.as_node()?.child("start")?.as_node()?;
        let line = start.get("line")?.as_f64()?;
        let column = start.get("column")?.as_f64()?;

        if line >= 1.0 && column >= 0.0 {
            Some((line as usize, column as usize))
        } else {
            None
        }
    }
}

impl Error for ValidationError<'_> {}

impl fmt::Display for ValidationError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.node.describe(), self.kind)
    }
}

impl fmt::Debug for ValidationError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        <ValidationError as fmt::Display>::fmt(self, f)
    }
}

/// Maximum number of characters of the offending node to show in a snippet.
const MAX_SNIPPET_LENGTH: usize = 80;

/// A validation error attributed to the file it was found in. Owns everything it displays, so it
/// can outlive the tree it was found in.
pub struct LocalizedValidationError {
    pub file_path: String,
    pub line_col: Option<(usize, usize)>,
    pub message: String,
    /// The offending node as JSON, truncated.
    pub snippet: String,
}

impl LocalizedValidationError {
    pub fn new(file_path: &str, error: &ValidationError) -> LocalizedValidationError {
        LocalizedValidationError {
            file_path: file_path.to_owned(),
            line_col: error.line_col(),
            message: error.to_string(),
            snippet: node_snippet(error.node),
        }
    }
}

fn node_snippet(node: &Value) -> String {
    let json = serde_json::to_string(node).unwrap_or_else(|_| node.describe());
    if json.chars().count() <= MAX_SNIPPET_LENGTH {
        return json;
    }

    let mut snippet: String = json.chars().take(MAX_SNIPPET_LENGTH).collect();
    snippet.push_str("...");
    snippet
}

impl Error for LocalizedValidationError {}

impl fmt::Display for LocalizedValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.line_col {
            None => write!(f, "ValidationError: {} {}", self.file_path, self.message),
            Some((line, col)) => {
                write!(f, "ValidationError: {}:{}:{} {}", self.file_path, line, col, self.message)
            }
        }
    }
}

impl fmt::Debug for LocalizedValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        <LocalizedValidationError as fmt::Display>::fmt(self, f)
    }
}

/// Format errors for display, errors without a location first followed by errors sorted by
/// location. The relative order of errors at the same location is preserved.
pub fn format_localized_validation_errors(errors: &[LocalizedValidationError]) -> String {
    let mut errors_without_loc = vec![];
    let mut errors_with_loc = vec![];
    for error in errors {
        match error.line_col {
            None => errors_without_loc.push(error),
            Some((line, col)) => errors_with_loc.push((error, line, col)),
        }
    }

    errors_with_loc.sort_by(|a, b| {
        a.0.file_path
            .cmp(&b.0.file_path)
            .then_with(|| a.1.cmp(&b.1))
            .then_with(|| a.2.cmp(&b.2))
    });

    let mut error_messages = vec![];
    for error in errors_without_loc {
        error_messages.push(format!("{}", error))
    }

    for (error, _, _) in errors_with_loc {
        error_messages.push(format!("{}", error))
    }

    error_messages.join("\n")
}
