use std::fmt;

/// Every node type in the ES5 ESTree grammar. The grammar is closed: any other `type` string is a
/// validation failure, never a dispatch fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,

    // Expressions
    ArrayExpression,
    AssignmentExpression,
    BinaryExpression,
    CallExpression,
    ConditionalExpression,
    FunctionExpression,
    Identifier,
    Literal,
    LogicalExpression,
    MemberExpression,
    NewExpression,
    ObjectExpression,
    SequenceExpression,
    ThisExpression,
    UnaryExpression,
    UpdateExpression,

    // Statements
    BlockStatement,
    BreakStatement,
    ContinueStatement,
    DebuggerStatement,
    DoWhileStatement,
    EmptyStatement,
    ExpressionStatement,
    ForInStatement,
    ForStatement,
    IfStatement,
    LabeledStatement,
    ReturnStatement,
    SwitchStatement,
    ThrowStatement,
    TryStatement,
    VariableDeclaration,
    WhileStatement,
    WithStatement,

    FunctionDeclaration,
    CatchClause,
    SwitchCase,
    VariableDeclarator,
}

impl NodeKind {
    pub fn from_type_name(type_name: &str) -> Option<NodeKind> {
        let kind = match type_name {
            "Program" => NodeKind::Program,
            "ArrayExpression" => NodeKind::ArrayExpression,
            "AssignmentExpression" => NodeKind::AssignmentExpression,
            "BinaryExpression" => NodeKind::BinaryExpression,
            "CallExpression" => NodeKind::CallExpression,
            "ConditionalExpression" => NodeKind::ConditionalExpression,
            "FunctionExpression" => NodeKind::FunctionExpression,
            "Identifier" => NodeKind::Identifier,
            "Literal" => NodeKind::Literal,
            "LogicalExpression" => NodeKind::LogicalExpression,
            "MemberExpression" => NodeKind::MemberExpression,
            "NewExpression" => NodeKind::NewExpression,
            "ObjectExpression" => NodeKind::ObjectExpression,
            "SequenceExpression" => NodeKind::SequenceExpression,
            "ThisExpression" => NodeKind::ThisExpression,
            "UnaryExpression" => NodeKind::UnaryExpression,
            "UpdateExpression" => NodeKind::UpdateExpression,
            "BlockStatement" => NodeKind::BlockStatement,
            "BreakStatement" => NodeKind::BreakStatement,
            "ContinueStatement" => NodeKind::ContinueStatement,
            "DebuggerStatement" => NodeKind::DebuggerStatement,
            "DoWhileStatement" => NodeKind::DoWhileStatement,
            "EmptyStatement" => NodeKind::EmptyStatement,
            "ExpressionStatement" => NodeKind::ExpressionStatement,
            "ForInStatement" => NodeKind::ForInStatement,
            "ForStatement" => NodeKind::ForStatement,
            "IfStatement" => NodeKind::IfStatement,
            "LabeledStatement" => NodeKind::LabeledStatement,
            "ReturnStatement" => NodeKind::ReturnStatement,
            "SwitchStatement" => NodeKind::SwitchStatement,
            "ThrowStatement" => NodeKind::ThrowStatement,
            "TryStatement" => NodeKind::TryStatement,
            "VariableDeclaration" => NodeKind::VariableDeclaration,
            "WhileStatement" => NodeKind::WhileStatement,
            "WithStatement" => NodeKind::WithStatement,
            "FunctionDeclaration" => NodeKind::FunctionDeclaration,
            "CatchClause" => NodeKind::CatchClause,
            "SwitchCase" => NodeKind::SwitchCase,
            "VariableDeclarator" => NodeKind::VariableDeclarator,
            _ => return None,
        };

        Some(kind)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::ArrayExpression => "ArrayExpression",
            NodeKind::AssignmentExpression => "AssignmentExpression",
            NodeKind::BinaryExpression => "BinaryExpression",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::ConditionalExpression => "ConditionalExpression",
            NodeKind::FunctionExpression => "FunctionExpression",
            NodeKind::Identifier => "Identifier",
            NodeKind::Literal => "Literal",
            NodeKind::LogicalExpression => "LogicalExpression",
            NodeKind::MemberExpression => "MemberExpression",
            NodeKind::NewExpression => "NewExpression",
            NodeKind::ObjectExpression => "ObjectExpression",
            NodeKind::SequenceExpression => "SequenceExpression",
            NodeKind::ThisExpression => "ThisExpression",
            NodeKind::UnaryExpression => "UnaryExpression",
            NodeKind::UpdateExpression => "UpdateExpression",
            NodeKind::BlockStatement => "BlockStatement",
            NodeKind::BreakStatement => "BreakStatement",
            NodeKind::ContinueStatement => "ContinueStatement",
            NodeKind::DebuggerStatement => "DebuggerStatement",
            NodeKind::DoWhileStatement => "DoWhileStatement",
            NodeKind::EmptyStatement => "EmptyStatement",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::ForInStatement => "ForInStatement",
            NodeKind::ForStatement => "ForStatement",
            NodeKind::IfStatement => "IfStatement",
            NodeKind::LabeledStatement => "LabeledStatement",
            NodeKind::ReturnStatement => "ReturnStatement",
            NodeKind::SwitchStatement => "SwitchStatement",
            NodeKind::ThrowStatement => "ThrowStatement",
            NodeKind::TryStatement => "TryStatement",
            NodeKind::VariableDeclaration => "VariableDeclaration",
            NodeKind::WhileStatement => "WhileStatement",
            NodeKind::WithStatement => "WithStatement",
            NodeKind::FunctionDeclaration => "FunctionDeclaration",
            NodeKind::CatchClause => "CatchClause",
            NodeKind::SwitchCase => "SwitchCase",
            NodeKind::VariableDeclarator => "VariableDeclarator",
        }
    }

    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            NodeKind::ArrayExpression
                | NodeKind::AssignmentExpression
                | NodeKind::BinaryExpression
                | NodeKind::CallExpression
                | NodeKind::ConditionalExpression
                | NodeKind::FunctionExpression
                | NodeKind::Identifier
                | NodeKind::Literal
                | NodeKind::LogicalExpression
                | NodeKind::MemberExpression
                | NodeKind::NewExpression
                | NodeKind::ObjectExpression
                | NodeKind::SequenceExpression
                | NodeKind::ThisExpression
                | NodeKind::UnaryExpression
                | NodeKind::UpdateExpression
        )
    }

    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeKind::BlockStatement
                | NodeKind::BreakStatement
                | NodeKind::ContinueStatement
                | NodeKind::DebuggerStatement
                | NodeKind::DoWhileStatement
                | NodeKind::EmptyStatement
                | NodeKind::ExpressionStatement
                | NodeKind::ForInStatement
                | NodeKind::ForStatement
                | NodeKind::IfStatement
                | NodeKind::LabeledStatement
                | NodeKind::ReturnStatement
                | NodeKind::SwitchStatement
                | NodeKind::ThrowStatement
                | NodeKind::TryStatement
                | NodeKind::VariableDeclaration
                | NodeKind::WhileStatement
                | NodeKind::WithStatement
        )
    }

    /// A statement or a function declaration, the only nodes allowed directly in a program or
    /// function body.
    pub fn is_source_element(&self) -> bool {
        self.is_statement() || *self == NodeKind::FunctionDeclaration
    }

    pub fn is_iteration(&self) -> bool {
        matches!(
            self,
            NodeKind::DoWhileStatement
                | NodeKind::ForInStatement
                | NodeKind::ForStatement
                | NodeKind::WhileStatement
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

pub fn is_expression_kind(type_name: &str) -> bool {
    NodeKind::from_type_name(type_name).map_or(false, |kind| kind.is_expression())
}

pub fn is_statement_kind(type_name: &str) -> bool {
    NodeKind::from_type_name(type_name).map_or(false, |kind| kind.is_statement())
}

pub fn is_source_element_kind(type_name: &str) -> bool {
    NodeKind::from_type_name(type_name).map_or(false, |kind| kind.is_source_element())
}

pub fn is_iteration_kind(type_name: &str) -> bool {
    NodeKind::from_type_name(type_name).map_or(false, |kind| kind.is_iteration())
}
