pub mod context;
pub mod kind;
pub mod lexical;
pub mod node;
pub mod operators;
pub mod validation_error;
pub mod validator;

use tracing::debug;

use crate::common::options::Options;

use self::{
    context::ValidationContext,
    validator::{Collector, FailFast, Validator},
};

pub use self::{
    kind::{
        is_expression_kind, is_iteration_kind, is_source_element_kind, is_statement_kind,
        NodeKind,
    },
    lexical::{is_identifier_name, is_reserved_word},
    node::{Node, RegExpValue, Value},
    operators::{is_legal_operator, OperatorCategory},
    validation_error::{
        format_localized_validation_errors, LocalizedValidationError, ValidationError,
        ValidationErrorKind,
    },
};

/// Whether the value is a valid Program.
pub fn is_valid(node: &Value) -> bool {
    is_valid_with_options(node, &Options::default())
}

pub fn is_valid_with_options(node: &Value, options: &Options) -> bool {
    if node.kind() != Some(NodeKind::Program) {
        debug!(root = %node.describe(), "root is not a Program");
        return false;
    }

    let is_valid = is_valid_from_root(node, options);
    debug!(root = "Program", is_valid, "validated program");

    is_valid
}

/// Whether the value is a valid standalone expression, validated outside of any function, loop,
/// or switch.
pub fn is_valid_expression(node: &Value) -> bool {
    is_valid_expression_with_options(node, &Options::default())
}

pub fn is_valid_expression_with_options(node: &Value, options: &Options) -> bool {
    if !node.kind().map_or(false, |kind| kind.is_expression()) {
        debug!(root = %node.describe(), "root is not an expression");
        return false;
    }

    let is_valid = is_valid_from_root(node, options);
    debug!(root = %node.describe(), is_valid, "validated expression");

    is_valid
}

fn is_valid_from_root(node: &Value, options: &Options) -> bool {
    let mut validator = Validator::new(FailFast::default());
    validator.visit_root(node, ValidationContext::new(options));

    validator.into_reporter().is_valid()
}

/// Every violation in the tree rooted at the value, in traversal order. The root may be any node,
/// it is validated outside of any function, loop, or switch.
pub fn errors(node: &Value) -> Vec<ValidationError<'_>> {
    errors_with_options(node, &Options::default())
}

pub fn errors_with_options<'a>(node: &'a Value, options: &Options) -> Vec<ValidationError<'a>> {
    let mut validator = Validator::new(Collector::default());
    validator.visit_root(node, ValidationContext::new(options));

    let errors = validator.into_reporter().into_errors();
    debug!(root = %node.describe(), num_errors = errors.len(), "collected validation errors");

    errors
}
