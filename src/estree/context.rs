use bitflags::bitflags;

use crate::common::options::Options;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ContextFlags: u8 {
        const IN_FUNCTION = 1 << 0;
        const IN_ITERATION = 1 << 1;
        const IN_SWITCH = 1 << 2;
        /// Whether the current position is strict mode code, either from a directive or inherited
        /// from an enclosing strict context.
        const STRICT = 1 << 3;
    }
}

/// A label in scope, linked to the labels of all enclosing labeled statements. Links live on the
/// stack of the visitor that pushed them.
pub struct Label<'a> {
    name: &'a str,
    parent: Option<&'a Label<'a>>,
}

/// The lexically inherited facts needed to validate a node. Contexts are never mutated, every
/// update produces a new context for the child.
#[derive(Clone, Copy)]
pub struct ValidationContext<'a> {
    labels: Option<&'a Label<'a>>,
    flags: ContextFlags,
}

impl ValidationContext<'static> {
    /// The context at the root of a program or standalone expression.
    pub fn new(options: &Options) -> ValidationContext<'static> {
        let mut flags = ContextFlags::empty();
        flags.set(ContextFlags::STRICT, options.strict);

        ValidationContext { labels: None, flags }
    }
}

impl<'a> ValidationContext<'a> {
    /// Create a label linked to the labels of this context. Pass the result to `with_label` to
    /// bring it into scope.
    pub fn push_label<'b>(&self, name: &'b str) -> Label<'b>
    where
        'a: 'b,
    {
        Label { name, parent: self.labels }
    }

    pub fn with_label<'b>(&self, label: &'b Label<'b>) -> ValidationContext<'b>
    where
        'a: 'b,
    {
        ValidationContext { labels: Some(label), flags: self.flags }
    }

    pub fn has_label(&self, name: &str) -> bool {
        let mut current = self.labels;
        while let Some(label) = current {
            if label.name == name {
                return true;
            }

            current = label.parent;
        }

        false
    }

    pub fn enter_iteration(&self) -> ValidationContext<'a> {
        ValidationContext { labels: self.labels, flags: self.flags | ContextFlags::IN_ITERATION }
    }

    pub fn enter_switch(&self) -> ValidationContext<'a> {
        ValidationContext { labels: self.labels, flags: self.flags | ContextFlags::IN_SWITCH }
    }

    /// Function declaration bodies start with no labels and are outside of any loop or switch.
    pub fn enter_function_declaration_body(&self) -> ValidationContext<'static> {
        let flags = (self.flags | ContextFlags::IN_FUNCTION)
            - (ContextFlags::IN_ITERATION | ContextFlags::IN_SWITCH);

        ValidationContext { labels: None, flags }
    }

    /// Function expression bodies start with no labels but inherit loop and switch membership.
    pub fn enter_function_expression_body(&self) -> ValidationContext<'static> {
        ValidationContext { labels: None, flags: self.flags | ContextFlags::IN_FUNCTION }
    }

    pub fn enter_strict(&self) -> ValidationContext<'a> {
        ValidationContext { labels: self.labels, flags: self.flags | ContextFlags::STRICT }
    }

    #[inline]
    pub fn in_function(&self) -> bool {
        self.flags.contains(ContextFlags::IN_FUNCTION)
    }

    #[inline]
    pub fn in_iteration(&self) -> bool {
        self.flags.contains(ContextFlags::IN_ITERATION)
    }

    #[inline]
    pub fn in_switch(&self) -> bool {
        self.flags.contains(ContextFlags::IN_SWITCH)
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.flags.contains(ContextFlags::STRICT)
    }
}
