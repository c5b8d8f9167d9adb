use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperatorCategory {
    Assignment,
    Binary,
    Logical,
    Unary,
    Update,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AssignmentOperator {
    Equals,
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    ShiftLeft,
    ShiftRightArithmetic,
    ShiftRightLogical,
    Or,
    Xor,
    And,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BinaryOperator {
    EqEq,
    NotEq,
    EqEqEq,
    NotEqEq,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    ShiftLeft,
    ShiftRightArithmetic,
    ShiftRightLogical,
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Or,
    Xor,
    And,
    In,
    InstanceOf,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LogicalOperator {
    Or,
    And,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UnaryOperator {
    Minus,
    Plus,
    LogicalNot,
    BitwiseNot,
    TypeOf,
    Void,
    Delete,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UpdateOperator {
    Increment,
    Decrement,
}

impl AssignmentOperator {
    pub fn from_token(token: &str) -> Option<AssignmentOperator> {
        let operator = match token {
            "=" => AssignmentOperator::Equals,
            "+=" => AssignmentOperator::Add,
            "-=" => AssignmentOperator::Subtract,
            "*=" => AssignmentOperator::Multiply,
            "/=" => AssignmentOperator::Divide,
            "%=" => AssignmentOperator::Remainder,
            "<<=" => AssignmentOperator::ShiftLeft,
            ">>=" => AssignmentOperator::ShiftRightArithmetic,
            ">>>=" => AssignmentOperator::ShiftRightLogical,
            "|=" => AssignmentOperator::Or,
            "^=" => AssignmentOperator::Xor,
            "&=" => AssignmentOperator::And,
            _ => return None,
        };

        Some(operator)
    }
}

impl BinaryOperator {
    pub fn from_token(token: &str) -> Option<BinaryOperator> {
        let operator = match token {
            "==" => BinaryOperator::EqEq,
            "!=" => BinaryOperator::NotEq,
            "===" => BinaryOperator::EqEqEq,
            "!==" => BinaryOperator::NotEqEq,
            "<" => BinaryOperator::LessThan,
            "<=" => BinaryOperator::LessThanOrEqual,
            ">" => BinaryOperator::GreaterThan,
            ">=" => BinaryOperator::GreaterThanOrEqual,
            "<<" => BinaryOperator::ShiftLeft,
            ">>" => BinaryOperator::ShiftRightArithmetic,
            ">>>" => BinaryOperator::ShiftRightLogical,
            "+" => BinaryOperator::Add,
            "-" => BinaryOperator::Subtract,
            "*" => BinaryOperator::Multiply,
            "/" => BinaryOperator::Divide,
            "%" => BinaryOperator::Remainder,
            "|" => BinaryOperator::Or,
            "^" => BinaryOperator::Xor,
            "&" => BinaryOperator::And,
            "in" => BinaryOperator::In,
            "instanceof" => BinaryOperator::InstanceOf,
            _ => return None,
        };

        Some(operator)
    }
}

impl LogicalOperator {
    pub fn from_token(token: &str) -> Option<LogicalOperator> {
        match token {
            "||" => Some(LogicalOperator::Or),
            "&&" => Some(LogicalOperator::And),
            _ => None,
        }
    }
}

impl UnaryOperator {
    pub fn from_token(token: &str) -> Option<UnaryOperator> {
        let operator = match token {
            "-" => UnaryOperator::Minus,
            "+" => UnaryOperator::Plus,
            "!" => UnaryOperator::LogicalNot,
            "~" => UnaryOperator::BitwiseNot,
            "typeof" => UnaryOperator::TypeOf,
            "void" => UnaryOperator::Void,
            "delete" => UnaryOperator::Delete,
            _ => return None,
        };

        Some(operator)
    }
}

impl UpdateOperator {
    pub fn from_token(token: &str) -> Option<UpdateOperator> {
        match token {
            "++" => Some(UpdateOperator::Increment),
            "--" => Some(UpdateOperator::Decrement),
            _ => None,
        }
    }
}

/// Whether `token` is one of the fixed operator tokens of the given category.
pub fn is_legal_operator(category: OperatorCategory, token: &str) -> bool {
    match category {
        OperatorCategory::Assignment => AssignmentOperator::from_token(token).is_some(),
        OperatorCategory::Binary => BinaryOperator::from_token(token).is_some(),
        OperatorCategory::Logical => LogicalOperator::from_token(token).is_some(),
        OperatorCategory::Unary => UnaryOperator::from_token(token).is_some(),
        OperatorCategory::Update => UpdateOperator::from_token(token).is_some(),
    }
}

impl fmt::Display for OperatorCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OperatorCategory::Assignment => write!(f, "assignment"),
            OperatorCategory::Binary => write!(f, "binary"),
            OperatorCategory::Logical => write!(f, "logical"),
            OperatorCategory::Unary => write!(f, "unary"),
            OperatorCategory::Update => write!(f, "update"),
        }
    }
}
