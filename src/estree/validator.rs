use std::marker::PhantomData;

use hashbrown::{HashMap, HashSet};
use tracing::trace;

use super::{
    context::ValidationContext,
    kind::NodeKind,
    lexical::{is_identifier_name, is_reserved_word, is_restricted_strict_name},
    node::{Node, Value},
    operators::{is_legal_operator, OperatorCategory, UnaryOperator},
    validation_error::{Field, NodeCategory, ValidationError, ValidationErrorKind},
};

/// Receives every violation found during a traversal. The reporter decides whether traversal
/// continues after a violation.
pub trait Reporter<'a> {
    fn report(&mut self, error: ValidationError<'a>);

    /// Whether the traversal can stop since no further report can change the outcome.
    fn is_done(&self) -> bool;
}

/// Stops at the first violation.
#[derive(Default)]
pub struct FailFast {
    failed: bool,
}

impl FailFast {
    pub fn is_valid(&self) -> bool {
        !self.failed
    }
}

impl<'a> Reporter<'a> for FailFast {
    fn report(&mut self, _: ValidationError<'a>) {
        self.failed = true;
    }

    fn is_done(&self) -> bool {
        self.failed
    }
}

/// Walks the entire tree, collecting every violation in traversal order.
#[derive(Default)]
pub struct Collector<'a> {
    errors: Vec<ValidationError<'a>>,
}

impl<'a> Collector<'a> {
    pub fn into_errors(self) -> Vec<ValidationError<'a>> {
        self.errors
    }
}

impl<'a> Reporter<'a> for Collector<'a> {
    fn report(&mut self, error: ValidationError<'a>) {
        self.errors.push(error);
    }

    fn is_done(&self) -> bool {
        false
    }
}

/// The single rule table for every node kind. Each rule is a sequence of independent checks,
/// every failing check is reported once and children are visited even when their parent already
/// failed a check. The reporter decides whether to continue after the first failure.
pub struct Validator<'a, R: Reporter<'a>> {
    reporter: R,
    phantom_data: PhantomData<&'a Value>,
}

impl<'a, R: Reporter<'a>> Validator<'a, R> {
    pub fn new(reporter: R) -> Self {
        Validator { reporter, phantom_data: PhantomData }
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    fn emit_error(&mut self, node: &'a Value, kind: ValidationErrorKind) {
        trace!(node = %node.describe(), error = %kind, "validation error");
        self.reporter.report(ValidationError::new(node, kind));
    }

    /// Validate an arbitrary value as the root of a tree.
    pub fn visit_root(&mut self, value: &'a Value, ctx: ValidationContext<'_>) {
        if let Some((node, kind)) = self.node_kind(value) {
            self.visit_node(value, node, kind, ctx);
        }
    }

    /// The node and kind of a value in node position. Values that are not objects with a known
    /// `type` are reported against themselves since there is nothing inside them to validate.
    /// Each such value is one record, and the owner is not charged a second one for it.
    fn node_kind(&mut self, value: &'a Value) -> Option<(&'a Node, NodeKind)> {
        let node = match value.as_node() {
            Some(node) => node,
            None => {
                self.emit_error(value, ValidationErrorKind::NotANode(value.describe()));
                return None;
            }
        };

        let type_name = match node.type_name() {
            Some(type_name) => type_name,
            None => {
                self.emit_error(value, ValidationErrorKind::MissingType);
                return None;
            }
        };

        match NodeKind::from_type_name(type_name) {
            Some(kind) => Some((node, kind)),
            None => {
                let type_name = type_name.to_owned();
                self.emit_error(value, ValidationErrorKind::UnknownNodeType(type_name));
                None
            }
        }
    }

    fn visit_node(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        kind: NodeKind,
        ctx: ValidationContext<'_>,
    ) {
        if self.reporter.is_done() {
            return;
        }

        self.check_loc(value, node);

        match kind {
            NodeKind::Program => self.visit_program(value, node, ctx),
            NodeKind::ArrayExpression => self.visit_array_expression(value, node, ctx),
            NodeKind::AssignmentExpression => self.visit_assignment_expression(value, node, ctx),
            NodeKind::BinaryExpression => {
                self.visit_operator_expression(value, node, OperatorCategory::Binary, ctx)
            }
            NodeKind::CallExpression | NodeKind::NewExpression => {
                self.visit_call_expression(value, node, ctx)
            }
            NodeKind::ConditionalExpression => self.visit_conditional_expression(value, node, ctx),
            NodeKind::FunctionExpression => self.visit_function(value, node, false, ctx),
            NodeKind::Identifier => self.visit_identifier(value, node, ctx),
            NodeKind::Literal => self.visit_literal(value, node),
            NodeKind::LogicalExpression => {
                self.visit_operator_expression(value, node, OperatorCategory::Logical, ctx)
            }
            NodeKind::MemberExpression => self.visit_member_expression(value, node, ctx),
            NodeKind::ObjectExpression => self.visit_object_expression(value, node, ctx),
            NodeKind::SequenceExpression => self.visit_sequence_expression(value, node, ctx),
            NodeKind::ThisExpression => {}
            NodeKind::UnaryExpression => self.visit_unary_expression(value, node, ctx),
            NodeKind::UpdateExpression => self.visit_update_expression(value, node, ctx),
            NodeKind::BlockStatement => {
                self.visit_list(value, node, "body", NodeCategory::Statement, ctx);
            }
            NodeKind::BreakStatement => self.visit_break_statement(value, node, ctx),
            NodeKind::ContinueStatement => self.visit_continue_statement(value, node, ctx),
            NodeKind::DebuggerStatement | NodeKind::EmptyStatement => {}
            NodeKind::DoWhileStatement => {
                let body_ctx = ctx.enter_iteration();
                self.visit_required(value, node, "body", NodeCategory::Statement, body_ctx);
                self.visit_required(value, node, "test", NodeCategory::Expression, ctx);
            }
            NodeKind::ExpressionStatement => {
                self.visit_required(value, node, "expression", NodeCategory::Expression, ctx);
            }
            NodeKind::ForInStatement => self.visit_for_in_statement(value, node, ctx),
            NodeKind::ForStatement => self.visit_for_statement(value, node, ctx),
            NodeKind::IfStatement => self.visit_if_statement(value, node, ctx),
            NodeKind::LabeledStatement => self.visit_labeled_statement(value, node, ctx),
            NodeKind::ReturnStatement => self.visit_return_statement(value, node, ctx),
            NodeKind::SwitchStatement => self.visit_switch_statement(value, node, ctx),
            NodeKind::ThrowStatement => {
                self.visit_required(value, node, "argument", NodeCategory::Expression, ctx);
            }
            NodeKind::TryStatement => self.visit_try_statement(value, node, ctx),
            NodeKind::VariableDeclaration => self.visit_variable_declaration(value, node, ctx),
            NodeKind::WhileStatement => {
                let body_ctx = ctx.enter_iteration();
                self.visit_required(value, node, "test", NodeCategory::Expression, ctx);
                self.visit_required(value, node, "body", NodeCategory::Statement, body_ctx);
            }
            NodeKind::WithStatement => self.visit_with_statement(value, node, ctx),
            NodeKind::FunctionDeclaration => self.visit_function(value, node, true, ctx),
            NodeKind::CatchClause => self.visit_catch_clause(value, node, ctx),
            NodeKind::SwitchCase => self.visit_switch_case(value, node, ctx),
            NodeKind::VariableDeclarator => self.visit_variable_declarator(value, node, ctx),
        }
    }

    fn check_loc(&mut self, value: &'a Value, node: &'a Node) {
        let loc = match node.child("loc") {
            Some(loc) => loc.as_node(),
            None => return,
        };

        if let Some(source) = loc.and_then(|loc| loc.child("source")) {
            if source.as_str().is_none() {
                let field = Field::named("loc.source");
                self.emit_error(value, ValidationErrorKind::ExpectedString(field));
            }
        }

        for position_name in ["start", "end"] {
            let position = match loc.and_then(|loc| loc.child(position_name)) {
                Some(position) => position.as_node(),
                None => {
                    self.emit_error(value, ValidationErrorKind::MissingLocPosition(position_name));
                    continue;
                }
            };

            let line = position.and_then(|pos| pos.get("line")).and_then(Value::as_f64);
            if !matches!(line, Some(line) if line >= 1.0) {
                self.emit_error(value, ValidationErrorKind::InvalidLocLine(position_name));
            }

            let column = position.and_then(|pos| pos.get("column")).and_then(Value::as_f64);
            if !matches!(column, Some(column) if column >= 0.0) {
                self.emit_error(value, ValidationErrorKind::InvalidLocColumn(position_name));
            }
        }
    }

    /// Visit a child that is present and not null. A well-formed node of the wrong category is
    /// reported against the owner and is still validated itself.
    fn visit_present(
        &mut self,
        owner: &'a Value,
        field: Field,
        child: &'a Value,
        category: NodeCategory,
        ctx: ValidationContext<'_>,
    ) -> Option<NodeKind> {
        let (node, kind) = self.node_kind(child)?;

        if !category.contains(kind) {
            self.emit_error(
                owner,
                ValidationErrorKind::UnexpectedNode { field, expected: category, found: kind },
            );
        }

        self.visit_node(child, node, kind, ctx);

        Some(kind)
    }

    fn visit_required(
        &mut self,
        owner: &'a Value,
        node: &'a Node,
        name: &'static str,
        category: NodeCategory,
        ctx: ValidationContext<'_>,
    ) -> Option<NodeKind> {
        match node.child(name) {
            Some(child) => self.visit_present(owner, Field::named(name), child, category, ctx),
            None => {
                self.emit_error(owner, ValidationErrorKind::MissingField(Field::named(name)));
                None
            }
        }
    }

    fn visit_optional(
        &mut self,
        owner: &'a Value,
        node: &'a Node,
        name: &'static str,
        category: NodeCategory,
        ctx: ValidationContext<'_>,
    ) -> Option<NodeKind> {
        let child = node.child(name)?;
        self.visit_present(owner, Field::named(name), child, category, ctx)
    }

    /// The elements of a required list field.
    fn expect_list(
        &mut self,
        owner: &'a Value,
        node: &'a Node,
        name: &'static str,
    ) -> Option<&'a [Value]> {
        let list = match node.child(name) {
            Some(list) => list,
            None => {
                self.emit_error(owner, ValidationErrorKind::MissingField(Field::named(name)));
                return None;
            }
        };

        match list.as_array() {
            Some(elements) => Some(elements),
            None => {
                self.emit_error(owner, ValidationErrorKind::ExpectedArray(Field::named(name)));
                None
            }
        }
    }

    /// Visit a required list field whose elements must all be non-null nodes of a category.
    fn visit_list(
        &mut self,
        owner: &'a Value,
        node: &'a Node,
        name: &'static str,
        category: NodeCategory,
        ctx: ValidationContext<'_>,
    ) -> Option<&'a [Value]> {
        let elements = self.expect_list(owner, node, name)?;
        self.visit_elements(owner, name, elements, category, false, ctx);

        Some(elements)
    }

    fn visit_elements(
        &mut self,
        owner: &'a Value,
        name: &'static str,
        elements: &'a [Value],
        category: NodeCategory,
        allow_holes: bool,
        ctx: ValidationContext<'_>,
    ) {
        for (index, element) in elements.iter().enumerate() {
            if self.reporter.is_done() {
                return;
            }

            let field = Field::element(name, index);
            if element.is_null() {
                if !allow_holes {
                    self.emit_error(owner, ValidationErrorKind::MissingField(field));
                }
            } else {
                self.visit_present(owner, field, element, category, ctx);
            }
        }
    }

    fn check_operator(&mut self, value: &'a Value, node: &'a Node, category: OperatorCategory) {
        let operator = match node.child("operator") {
            Some(operator) => operator,
            None => {
                self.emit_error(value, ValidationErrorKind::InvalidOperator(category, None));
                return;
            }
        };

        match operator.as_str() {
            Some(token) if is_legal_operator(category, token) => {}
            Some(token) => {
                let token = format!("\"{}\"", token);
                self.emit_error(value, ValidationErrorKind::InvalidOperator(category, Some(token)))
            }
            None => {
                let found = operator.describe();
                self.emit_error(value, ValidationErrorKind::InvalidOperator(category, Some(found)))
            }
        }
    }

    /// In strict mode code `eval` and `arguments` cannot be bound or assigned.
    fn check_strict_binding(
        &mut self,
        owner: &'a Value,
        target: Option<&'a Value>,
        ctx: ValidationContext<'_>,
    ) {
        if !ctx.is_strict() {
            return;
        }

        if let Some(name) = target.and_then(identifier_name) {
            if is_restricted_strict_name(name) {
                let name = name.to_owned();
                self.emit_error(owner, ValidationErrorKind::EvalOrArgumentsInStrictMode(name));
            }
        }
    }

    fn visit_program(&mut self, value: &'a Value, node: &'a Node, ctx: ValidationContext<'_>) {
        let body = match self.expect_list(value, node, "body") {
            Some(body) => body,
            None => return,
        };

        let ctx = if has_use_strict_directive(body) {
            ctx.enter_strict()
        } else {
            ctx
        };

        self.visit_elements(value, "body", body, NodeCategory::SourceElement, false, ctx);
    }

    fn visit_array_expression(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        if let Some(elements) = self.expect_list(value, node, "elements") {
            self.visit_elements(value, "elements", elements, NodeCategory::Expression, true, ctx);
        }
    }

    fn visit_assignment_expression(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        self.visit_operator_expression(value, node, OperatorCategory::Assignment, ctx);
        self.check_strict_binding(value, node.child("left"), ctx);
    }

    /// Assignment, binary, and logical expressions share the same shape.
    fn visit_operator_expression(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        category: OperatorCategory,
        ctx: ValidationContext<'_>,
    ) {
        self.check_operator(value, node, category);
        self.visit_required(value, node, "left", NodeCategory::Expression, ctx);
        self.visit_required(value, node, "right", NodeCategory::Expression, ctx);
    }

    fn visit_call_expression(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        self.visit_required(value, node, "callee", NodeCategory::Expression, ctx);
        self.visit_list(value, node, "arguments", NodeCategory::Expression, ctx);
    }

    fn visit_conditional_expression(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        self.visit_required(value, node, "test", NodeCategory::Expression, ctx);
        self.visit_required(value, node, "consequent", NodeCategory::Expression, ctx);
        self.visit_required(value, node, "alternate", NodeCategory::Expression, ctx);
    }

    /// Function declarations and expressions. The body is validated like a program body, so it
    /// may contain function declarations. The id and parameters are strict if the function is,
    /// including when only the function's own directive prologue makes it strict.
    fn visit_function(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        is_declaration: bool,
        ctx: ValidationContext<'_>,
    ) {
        let body_statements = node
            .child("body")
            .and_then(Value::as_node)
            .filter(|body| body.kind() == Some(NodeKind::BlockStatement))
            .and_then(|body| body.child("body"))
            .and_then(Value::as_array);

        let is_strict = ctx.is_strict() || body_statements.map_or(false, has_use_strict_directive);
        let function_ctx = if is_strict { ctx.enter_strict() } else { ctx };

        if is_declaration {
            self.visit_required(value, node, "id", NodeCategory::Identifier, function_ctx);
        } else {
            self.visit_optional(value, node, "id", NodeCategory::Identifier, function_ctx);
        }
        self.check_strict_binding(value, node.child("id"), function_ctx);

        let params = self.visit_list(value, node, "params", NodeCategory::Expression, function_ctx);
        if let Some(params) = params {
            for param in params {
                self.check_strict_binding(value, Some(param), function_ctx);
            }

            if is_strict {
                self.check_duplicate_params(value, params);
            }
        }

        let body_ctx = if is_declaration {
            function_ctx.enter_function_declaration_body()
        } else {
            function_ctx.enter_function_expression_body()
        };

        let body = match node.child("body") {
            Some(body) => body,
            None => {
                self.emit_error(value, ValidationErrorKind::MissingField(Field::named("body")));
                return;
            }
        };

        match self.node_kind(body) {
            None => {}
            Some((body_node, NodeKind::BlockStatement)) => {
                self.check_loc(body, body_node);
                self.visit_list(body, body_node, "body", NodeCategory::SourceElement, body_ctx);
            }
            Some((body_node, kind)) => {
                self.emit_error(
                    value,
                    ValidationErrorKind::UnexpectedNode {
                        field: Field::named("body"),
                        expected: NodeCategory::BlockStatement,
                        found: kind,
                    },
                );
                self.visit_node(body, body_node, kind, ctx);
            }
        }
    }

    fn check_duplicate_params(&mut self, value: &'a Value, params: &'a [Value]) {
        let mut names = HashSet::new();
        for param in params {
            if let Some(name) = identifier_name(param) {
                if !names.insert(name) {
                    let name = name.to_owned();
                    self.emit_error(value, ValidationErrorKind::DuplicateParameter(name));
                }
            }
        }
    }

    fn visit_identifier(&mut self, value: &'a Value, node: &'a Node, ctx: ValidationContext<'_>) {
        let name = match node.child("name") {
            Some(name) => name,
            None => {
                self.emit_error(value, ValidationErrorKind::MissingField(Field::named("name")));
                return;
            }
        };

        match name.as_str() {
            None => {
                self.emit_error(value, ValidationErrorKind::ExpectedString(Field::named("name")))
            }
            Some(name) if !is_identifier_name(name) => {
                let name = name.to_owned();
                self.emit_error(value, ValidationErrorKind::InvalidIdentifierName(name))
            }
            Some(name) if is_reserved_word(name, ctx.is_strict()) => {
                self.emit_error(value, ValidationErrorKind::ReservedWord(name.to_owned()))
            }
            Some(_) => {}
        }
    }

    fn visit_literal(&mut self, value: &'a Value, node: &'a Node) {
        match node.get("value") {
            None => self.emit_error(value, ValidationErrorKind::MissingLiteralValue),
            Some(Value::Null | Value::Bool(_) | Value::String(_) | Value::RegExp(_)) => {}
            Some(Value::Number(number)) => {
                if let Some(kind) = numeric_literal_error(*number) {
                    self.emit_error(value, kind);
                }
            }
            Some(other @ (Value::Array(_) | Value::Object(_))) => {
                self.emit_error(value, ValidationErrorKind::InvalidLiteralValue(other.describe()))
            }
        }
    }

    fn visit_member_expression(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        self.visit_required(value, node, "object", NodeCategory::Expression, ctx);

        let is_computed = node.get("computed").and_then(Value::as_bool).unwrap_or(false);
        if is_computed {
            self.visit_required(value, node, "property", NodeCategory::Expression, ctx);
            return;
        }

        // A static property is an IdentifierName, not a reference, so reserved words are allowed
        match node.child("property") {
            None => {
                self.emit_error(value, ValidationErrorKind::MissingField(Field::named("property")))
            }
            Some(property) => {
                if !identifier_name(property).map_or(false, is_identifier_name) {
                    self.emit_error(value, ValidationErrorKind::InvalidMemberProperty);
                }
                if let Some(property_node) = property.as_node() {
                    self.check_loc(property, property_node);
                }
            }
        }
    }

    fn visit_object_expression(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        let properties = match self.expect_list(value, node, "properties") {
            Some(properties) => properties,
            None => return,
        };

        let mut seen_properties = HashMap::new();
        for (index, property) in properties.iter().enumerate() {
            if self.reporter.is_done() {
                return;
            }

            match property.as_node() {
                Some(property_node) => {
                    self.visit_property(property, property_node, &mut seen_properties, ctx)
                }
                None => {
                    let field = Field::element("properties", index);
                    self.emit_error(value, ValidationErrorKind::InvalidProperty(field));
                }
            }
        }
    }

    fn visit_property(
        &mut self,
        property: &'a Value,
        node: &'a Node,
        seen_properties: &mut HashMap<String, SeenProperty>,
        ctx: ValidationContext<'_>,
    ) {
        // Properties are not visited as nodes, so their locations are checked here
        self.check_loc(property, node);

        let kind = node
            .get("kind")
            .and_then(Value::as_str)
            .and_then(PropertyKind::from_kind_name);
        if kind.is_none() {
            self.emit_error(property, ValidationErrorKind::InvalidPropertyKind);
        }

        let key_name = match node.child("key") {
            Some(key) => {
                let key_name = property_key_name(key);
                if key_name.is_none() {
                    self.emit_error(property, ValidationErrorKind::InvalidPropertyKey);
                }
                if let Some(key_node) = key.as_node() {
                    self.check_loc(key, key_node);
                }
                key_name
            }
            None => {
                self.emit_error(property, ValidationErrorKind::MissingField(Field::named("key")));
                None
            }
        };

        let property_value = node.child("value");
        match property_value {
            Some(property_value) => {
                let field = Field::named("value");
                self.visit_present(property, field, property_value, NodeCategory::Expression, ctx);
            }
            None => {
                self.emit_error(property, ValidationErrorKind::MissingField(Field::named("value")))
            }
        }

        // Accessors must be functions that accept exactly the arguments passed on access
        if let (Some(kind @ (PropertyKind::Get | PropertyKind::Set)), Some(property_value)) =
            (kind, property_value)
        {
            let num_params = if kind == PropertyKind::Get { 0 } else { 1 };
            let is_valid_accessor = property_value.kind() == Some(NodeKind::FunctionExpression)
                && property_value
                    .as_node()
                    .and_then(|function| function.get("params"))
                    .and_then(Value::as_array)
                    .map_or(false, |params| params.len() == num_params);

            if !is_valid_accessor {
                let error_kind = if kind == PropertyKind::Get {
                    ValidationErrorKind::GetterWrongNumberOfParams
                } else {
                    ValidationErrorKind::SetterWrongNumberOfParams
                };
                self.emit_error(property, error_kind);
            }
        }

        if let (Some(kind), Some(key_name)) = (kind, key_name) {
            let seen = seen_properties.entry(key_name.clone()).or_default();
            let is_conflict = match kind {
                PropertyKind::Init => seen.get || seen.set,
                PropertyKind::Get => seen.init || seen.get,
                PropertyKind::Set => seen.init || seen.set,
            };
            let is_strict_duplicate = kind == PropertyKind::Init && seen.init && ctx.is_strict();

            match kind {
                PropertyKind::Init => seen.init = true,
                PropertyKind::Get => seen.get = true,
                PropertyKind::Set => seen.set = true,
            }

            if is_conflict {
                self.emit_error(property, ValidationErrorKind::ConflictingProperty(key_name));
            } else if is_strict_duplicate {
                self.emit_error(
                    property,
                    ValidationErrorKind::DuplicatePropertyInStrictMode(key_name),
                );
            }
        }
    }

    fn visit_sequence_expression(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        if let Some(expressions) = self.expect_list(value, node, "expressions") {
            if expressions.len() < 2 {
                self.emit_error(value, ValidationErrorKind::TooFewSequenceExpressions);
            }

            let category = NodeCategory::Expression;
            self.visit_elements(value, "expressions", expressions, category, false, ctx);
        }
    }

    fn visit_unary_expression(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        self.check_operator(value, node, OperatorCategory::Unary);
        let argument_kind =
            self.visit_required(value, node, "argument", NodeCategory::Expression, ctx);

        let operator = node.get("operator").and_then(Value::as_str);
        if ctx.is_strict()
            && operator.and_then(UnaryOperator::from_token) == Some(UnaryOperator::Delete)
            && argument_kind == Some(NodeKind::Identifier)
        {
            self.emit_error(value, ValidationErrorKind::DeleteIdentifierInStrictMode);
        }
    }

    fn visit_update_expression(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        self.check_operator(value, node, OperatorCategory::Update);
        self.visit_required(value, node, "argument", NodeCategory::Expression, ctx);
        self.check_strict_binding(value, node.child("argument"), ctx);

        match node.child("prefix") {
            None | Some(Value::Bool(_)) => {}
            Some(_) => self.emit_error(value, ValidationErrorKind::InvalidPrefix),
        }
    }

    fn visit_break_statement(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        if !ctx.in_iteration() && !ctx.in_switch() {
            self.emit_error(value, ValidationErrorKind::BreakOutsideBreakable);
        }

        self.visit_label_use(value, node, ctx);
    }

    fn visit_continue_statement(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        if !ctx.in_iteration() {
            self.emit_error(value, ValidationErrorKind::ContinueOutsideIterable);
        }

        self.visit_label_use(value, node, ctx);
    }

    fn visit_label_use(&mut self, value: &'a Value, node: &'a Node, ctx: ValidationContext<'_>) {
        self.visit_optional(value, node, "label", NodeCategory::Identifier, ctx);

        if let Some(label) = node.child("label").and_then(identifier_name) {
            if !ctx.has_label(label) {
                self.emit_error(value, ValidationErrorKind::LabelNotFound(label.to_owned()));
            }
        }
    }

    fn visit_labeled_statement(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        self.visit_required(value, node, "label", NodeCategory::Identifier, ctx);

        let label;
        let body_ctx = match node.child("label").and_then(identifier_name) {
            Some(label_name) => {
                if ctx.has_label(label_name) {
                    let label_name = label_name.to_owned();
                    self.emit_error(value, ValidationErrorKind::DuplicateLabel(label_name));
                }

                label = ctx.push_label(label_name);
                ctx.with_label(&label)
            }
            None => ctx,
        };

        self.visit_required(value, node, "body", NodeCategory::Statement, body_ctx);
    }

    fn visit_for_in_statement(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        self.visit_required(value, node, "left", NodeCategory::ForInitializer, ctx);
        self.check_strict_binding(value, node.child("left"), ctx);
        self.visit_required(value, node, "right", NodeCategory::Expression, ctx);
        self.visit_required(value, node, "body", NodeCategory::Statement, ctx.enter_iteration());
    }

    fn visit_for_statement(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        self.visit_optional(value, node, "init", NodeCategory::ForInitializer, ctx);
        self.visit_optional(value, node, "test", NodeCategory::Expression, ctx);
        self.visit_optional(value, node, "update", NodeCategory::Expression, ctx);
        self.visit_required(value, node, "body", NodeCategory::Statement, ctx.enter_iteration());
    }

    fn visit_if_statement(&mut self, value: &'a Value, node: &'a Node, ctx: ValidationContext<'_>) {
        self.visit_required(value, node, "test", NodeCategory::Expression, ctx);
        self.visit_required(value, node, "consequent", NodeCategory::Statement, ctx);
        self.visit_optional(value, node, "alternate", NodeCategory::Statement, ctx);

        if node.child("alternate").is_some()
            && node.child("consequent").map_or(false, is_dangling_if)
        {
            self.emit_error(value, ValidationErrorKind::DanglingElse);
        }
    }

    fn visit_return_statement(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        if !ctx.in_function() {
            self.emit_error(value, ValidationErrorKind::ReturnOutsideFunction);
        }

        self.visit_optional(value, node, "argument", NodeCategory::Expression, ctx);
    }

    fn visit_switch_statement(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        self.visit_required(value, node, "discriminant", NodeCategory::Expression, ctx);

        let cases = match self.visit_list(value, node, "cases", NodeCategory::SwitchCase, ctx) {
            Some(cases) => cases,
            None => return,
        };

        let mut has_default_case = false;
        for case in cases {
            let is_default_case = case
                .as_node()
                .filter(|case| case.kind() == Some(NodeKind::SwitchCase))
                .map_or(false, |case| case.child("test").is_none());

            if is_default_case {
                if has_default_case {
                    self.emit_error(value, ValidationErrorKind::MultipleDefaultCases);
                }

                has_default_case = true;
            }
        }
    }

    fn visit_switch_case(&mut self, value: &'a Value, node: &'a Node, ctx: ValidationContext<'_>) {
        self.visit_optional(value, node, "test", NodeCategory::Expression, ctx);
        self.visit_list(value, node, "consequent", NodeCategory::Statement, ctx.enter_switch());
    }

    fn visit_try_statement(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        self.visit_required(value, node, "block", NodeCategory::BlockStatement, ctx);
        let has_handler = self.visit_catch_handlers(value, node, ctx);
        self.visit_optional(value, node, "finalizer", NodeCategory::BlockStatement, ctx);

        if !has_handler && node.child("finalizer").is_none() {
            self.emit_error(value, ValidationErrorKind::MissingHandlerOrFinalizer);
        }
    }

    /// Catch clauses are either a `handlers` list or a single `handler`. A `handlers` field takes
    /// precedence, even when empty. Returns whether any handler is present.
    fn visit_catch_handlers(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) -> bool {
        match (node.child("handlers"), node.child("handler")) {
            (Some(handlers), _) => match handlers.as_array() {
                Some(handlers) => {
                    let category = NodeCategory::CatchClause;
                    self.visit_elements(value, "handlers", handlers, category, false, ctx);
                    !handlers.is_empty()
                }
                None => {
                    let field = Field::named("handlers");
                    self.emit_error(value, ValidationErrorKind::ExpectedArray(field));
                    true
                }
            },
            (None, Some(handler)) => {
                let field = Field::named("handler");
                self.visit_present(value, field, handler, NodeCategory::CatchClause, ctx);
                true
            }
            (None, None) => false,
        }
    }

    fn visit_catch_clause(&mut self, value: &'a Value, node: &'a Node, ctx: ValidationContext<'_>) {
        self.visit_required(value, node, "param", NodeCategory::Expression, ctx);
        self.check_strict_binding(value, node.child("param"), ctx);
        self.visit_required(value, node, "body", NodeCategory::BlockStatement, ctx);
    }

    fn visit_variable_declaration(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        match node.get("kind").and_then(Value::as_str) {
            Some("var" | "let" | "const") => {}
            _ => self.emit_error(value, ValidationErrorKind::InvalidVariableKind),
        }

        let category = NodeCategory::VariableDeclarator;
        if let Some(declarations) = self.visit_list(value, node, "declarations", category, ctx) {
            if declarations.is_empty() {
                self.emit_error(value, ValidationErrorKind::EmptyVariableDeclaration);
            }
        }
    }

    fn visit_variable_declarator(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        self.visit_required(value, node, "id", NodeCategory::Expression, ctx);
        self.check_strict_binding(value, node.child("id"), ctx);
        self.visit_optional(value, node, "init", NodeCategory::Expression, ctx);
    }

    fn visit_with_statement(
        &mut self,
        value: &'a Value,
        node: &'a Node,
        ctx: ValidationContext<'_>,
    ) {
        if ctx.is_strict() {
            self.emit_error(value, ValidationErrorKind::WithInStrictMode);
        }

        self.visit_required(value, node, "object", NodeCategory::Expression, ctx);
        self.visit_required(value, node, "body", NodeCategory::Statement, ctx);
    }
}

#[derive(Clone, Copy, PartialEq)]
enum PropertyKind {
    Init,
    Get,
    Set,
}

impl PropertyKind {
    fn from_kind_name(kind_name: &str) -> Option<PropertyKind> {
        match kind_name {
            "init" => Some(PropertyKind::Init),
            "get" => Some(PropertyKind::Get),
            "set" => Some(PropertyKind::Set),
            _ => None,
        }
    }
}

/// The kinds of properties already seen for a key of an object expression.
#[derive(Default)]
struct SeenProperty {
    init: bool,
    get: bool,
    set: bool,
}

/// The name of an Identifier node, if the value is an Identifier with a string name.
fn identifier_name(value: &Value) -> Option<&str> {
    let node = value.as_node()?;
    if node.kind() != Some(NodeKind::Identifier) {
        return None;
    }

    node.get("name")?.as_str()
}

/// The property name a key defines, if the key is an Identifier with a valid identifier name or
/// a string or valid numeric Literal. Numeric keys are named by their canonical string form.
fn property_key_name(key: &Value) -> Option<String> {
    let node = key.as_node()?;
    match node.kind()? {
        NodeKind::Identifier => {
            let name = node.get("name")?.as_str()?;
            if is_identifier_name(name) {
                Some(name.to_owned())
            } else {
                None
            }
        }
        NodeKind::Literal => match node.get("value")? {
            Value::String(string) => Some(string.clone()),
            Value::Number(number) if numeric_literal_error(*number).is_none() => {
                Some(ryu_js::Buffer::new().format(*number).to_owned())
            }
            _ => None,
        },
        _ => None,
    }
}

/// Numeric literals must be representable as a source token, so NaN and negative numbers
/// (including negative zero) are not allowed.
fn numeric_literal_error(number: f64) -> Option<ValidationErrorKind> {
    if number.is_nan() {
        Some(ValidationErrorKind::NaNLiteral)
    } else if number.is_sign_negative() {
        Some(ValidationErrorKind::NegativeNumberLiteral)
    } else {
        None
    }
}

/// Whether a directive prologue contains a "use strict" directive. The prologue is the run of
/// string literal expression statements at the start of a body.
fn has_use_strict_directive(body: &[Value]) -> bool {
    for statement in body {
        match directive(statement) {
            Some("use strict") => return true,
            Some(_) => {}
            None => return false,
        }
    }

    false
}

fn directive(statement: &Value) -> Option<&str> {
    let statement = statement.as_node()?;
    if statement.kind() != Some(NodeKind::ExpressionStatement) {
        return None;
    }

    let expression = statement.child("expression")?.as_node()?;
    if expression.kind() != Some(NodeKind::Literal) {
        return None;
    }

    expression.get("value")?.as_str()
}

/// Whether a statement ends in an if statement that would take ownership of a following `else`
/// when printed. Only statements whose body is printed last can end in such an if statement.
fn is_dangling_if(statement: &Value) -> bool {
    let node = match statement.as_node() {
        Some(node) => node,
        None => return false,
    };

    match node.kind() {
        Some(NodeKind::IfStatement) => match node.child("alternate") {
            Some(alternate) => is_dangling_if(alternate),
            None => node.child("consequent").map_or(false, |consequent| {
                consequent.kind() != Some(NodeKind::IfStatement) || is_dangling_if(consequent)
            }),
        },
        Some(
            NodeKind::LabeledStatement
            | NodeKind::WhileStatement
            | NodeKind::WithStatement
            | NodeKind::ForStatement
            | NodeKind::ForInStatement,
        ) => node.child("body").map_or(false, is_dangling_if),
        _ => false,
    }
}
