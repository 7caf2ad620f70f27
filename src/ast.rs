use crate::interpreter::value::core::DynamicValue;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions are built from literal operands combined with unary, binary
/// and conditional operators. There are no variables: every leaf is a
/// constant [`DynamicValue`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (`42`, `"apple"`, `true`, `null`, `undefined`, ...).
    Literal {
        /// The constant value.
        value: DynamicValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation (`!x`, `-x`, `+x`, `typeof x`, `void x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   OperatorTag,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic, comparison or logical).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    OperatorTag,
        /// Right operand. Logical operators may leave it unevaluated.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Conditional expression `condition ? then_branch : else_branch`.
    Conditional {
        /// The condition, interpreted by truthiness.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is truthy.
        then_branch: Box<Self>,
        /// Expression evaluated if the condition is falsy.
        else_branch: Box<Self>,
        /// Line number in the source code.
        line:        usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use loosetype::{ast::Expr, interpreter::value::core::DynamicValue};
    ///
    /// let expr = Expr::Literal { value: DynamicValue::Null,
    ///                            line:  5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Conditional { line, .. } => *line,
        }
    }
}

/// The number of operands an operator takes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    /// Exactly one operand.
    Unary,
    /// Exactly two operands.
    Binary,
}

impl Arity {
    /// Returns the operand count as a number.
    #[must_use]
    pub const fn operand_count(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// Identifies an operator understood by the coercion engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OperatorTag {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Loose equality (`==`)
    Eq,
    /// Strict equality (`===`)
    StrictEq,
    /// Loose inequality (`!=`)
    NotEq,
    /// Strict inequality (`!==`)
    StrictNotEq,
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
    /// Less than or equal (`<=`)
    Lte,
    /// Greater than or equal (`>=`)
    Gte,
    /// Short-circuit logical and (`&&`)
    And,
    /// Short-circuit logical or (`||`)
    Or,
    /// Logical not (`!`)
    Not,
    /// Numeric negation (`-x`)
    Neg,
    /// Numeric conversion (`+x`)
    Plus,
    /// Type name query (`typeof x`)
    TypeOf,
    /// Discard to `undefined` (`void x`)
    Void,
}

impl OperatorTag {
    /// Returns how many operands the operator takes.
    ///
    /// ## Example
    /// ```
    /// use loosetype::ast::{Arity, OperatorTag};
    ///
    /// assert_eq!(OperatorTag::Add.arity(), Arity::Binary);
    /// assert_eq!(OperatorTag::Not.arity(), Arity::Unary);
    /// ```
    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Not | Self::Neg | Self::Plus | Self::TypeOf | Self::Void => Arity::Unary,
            _ => Arity::Binary,
        }
    }
}

impl std::fmt::Display for OperatorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use OperatorTag::{
            Add, And, Div, Eq, Gt, Gte, Lt, Lte, Mod, Mul, Neg, Not, NotEq, Or, Plus, Pow,
            StrictEq, StrictNotEq, Sub, TypeOf, Void,
        };
        let operator = match self {
            Add | Plus => "+",
            Sub | Neg => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "**",
            Eq => "==",
            StrictEq => "===",
            NotEq => "!=",
            StrictNotEq => "!==",
            Lt => "<",
            Gt => ">",
            Lte => "<=",
            Gte => ">=",
            And => "&&",
            Or => "||",
            Not => "!",
            TypeOf => "typeof",
            Void => "void",
        };
        write!(f, "{operator}")
    }
}
