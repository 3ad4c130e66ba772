use std::fmt;

/// A location in the source text.
///
/// Lines and columns are both 1-based; columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line number in the source code.
    pub line:   usize,
    /// Column number in the source code.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The four scalar kinds a variable can be declared with and a value can
/// have at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `int`
    Int,
    /// `double`
    Double,
    /// `string`
    String,
    /// `bool`
    Bool,
}

impl ValueType {
    /// The keyword spelling of the type.
    ///
    /// ```
    /// use pancake::ast::ValueType;
    ///
    /// assert_eq!(ValueType::Double.name(), "double");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Double => "double",
            Self::String => "string",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An expression node.
///
/// Every variant owns its operands, so a tree can be dropped recursively and
/// never contains cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal exactly as written in the source, tagged with its type.
    /// The text is converted to a runtime value when evaluated.
    Literal {
        /// Source text of the literal (string literals without their quotes).
        text: String,
        /// The type the literal was scanned as.
        ty:   ValueType,
        /// Where the literal starts.
        pos:  Position,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Where the name appears.
        pos:  Position,
    },
    /// A prefix operator applied to an operand.
    UnaryOp {
        /// The operator.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Position of the operator.
        pos:  Position,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Position of the operator.
        pos:   Position,
    },
}

impl Expr {
    /// Gets the source position of the node.
    ///
    /// ```
    /// use pancake::ast::{Expr, Position};
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             pos:  Position::new(5, 3), };
    ///
    /// assert_eq!(expr.position(), Position::new(5, 3));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Literal { pos, .. }
            | Self::Variable { pos, .. }
            | Self::UnaryOp { pos, .. }
            | Self::BinaryOp { pos, .. } => *pos,
        }
    }

    /// Returns the type tag when the expression is a bare literal.
    ///
    /// The parser's declaration and assignment checks only look at literals;
    /// every other expression yields `None`.
    #[must_use]
    pub const fn literal_type(&self) -> Option<ValueType> {
        match self {
            Self::Literal { ty, .. } => Some(*ty),
            _ => None,
        }
    }
}

/// One `elif ( condition ) { block }` arm of an `if` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ElifBranch {
    /// Condition tested when every earlier branch was false.
    pub condition: Expr,
    /// Statements run when the condition holds.
    pub block:     Vec<Statement>,
}

/// A statement node. The parser produces an ordered list of these per unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let <type> <name> = <value>;`
    VariableDeclaration {
        /// The declared type.
        ty:    ValueType,
        /// The name of the variable.
        name:  String,
        /// The initializer.
        value: Expr,
        /// Position of the `let` keyword.
        pos:   Position,
    },
    /// `<name> = <value>;`
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Position of the target name.
        pos:   Position,
    },
    /// `out -> a -> b;`
    Out {
        /// Expressions printed in order, without separators.
        outputs: Vec<Expr>,
        /// Position of the `out` keyword.
        pos:     Position,
    },
    /// `in <- name;`
    In {
        /// The variable receiving the input.
        name: String,
        /// Position of the `in` keyword.
        pos:  Position,
    },
    /// `if (..) { .. } elif (..) { .. } else { .. }`
    If {
        /// Condition of the leading `if`.
        condition:     Expr,
        /// Statements run when the condition holds.
        then_block:    Vec<Statement>,
        /// `elif` arms in source order.
        elif_branches: Vec<ElifBranch>,
        /// The `else` block, if one was written.
        else_block:    Option<Vec<Statement>>,
        /// Position of the `if` keyword.
        pos:           Position,
    },
    /// An expression evaluated for its effect only. Reserved for bare
    /// assignment-as-statement; the parser does not produce it today.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Position of the expression.
        pos:  Position,
    },
}

impl Statement {
    /// Gets the source position of the statement.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::VariableDeclaration { pos, .. }
            | Self::Assignment { pos, .. }
            | Self::Out { pos, .. }
            | Self::In { pos, .. }
            | Self::If { pos, .. }
            | Self::Expression { pos, .. } => *pos,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Integer remainder (`mod`)
    Mod,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

impl BinaryOperator {
    /// Binding strength used by the precedence-climbing parser.
    ///
    /// Higher binds tighter. All operators are left-associative.
    ///
    /// | level | operators              |
    /// |-------|------------------------|
    /// | 1     | `or`                   |
    /// | 2     | `and`                  |
    /// | 3     | `==` `!=`              |
    /// | 4     | `<` `<=` `>` `>=`      |
    /// | 5     | `+` `-`                |
    /// | 6     | `*` `/` `mod`          |
    ///
    /// ```
    /// use pancake::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert!(BinaryOperator::And.precedence() > BinaryOperator::Or.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Equal | Self::NotEqual => 3,
            Self::Less | Self::Greater | Self::LessEqual | Self::GreaterEqual => 4,
            Self::Add | Self::Sub => 5,
            Self::Mul | Self::Div | Self::Mod => 6,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "mod",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::And => "and",
            Self::Or => "or",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => f.write_str("-"),
            Self::Not => f.write_str("!"),
        }
    }
}

/// Renders statements as an indented tree, one node per line.
///
/// ```
/// use pancake::ast::{Position, Statement, dump};
///
/// let statement = Statement::In { name: "x".to_string(),
///                                 pos:  Position::new(1, 1), };
///
/// assert_eq!(dump(&[statement]), "In x\n");
/// ```
#[must_use]
pub fn dump(statements: &[Statement]) -> String {
    Tree(statements).to_string()
}

struct Tree<'a>(&'a [Statement]);

impl fmt::Display for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_block(f, self.0, 0)
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, block: &[Statement], depth: usize) -> fmt::Result {
    block.iter()
         .try_for_each(|statement| write_statement(f, statement, depth))
}

fn write_statement(f: &mut fmt::Formatter<'_>,
                   statement: &Statement,
                   depth: usize)
                   -> fmt::Result {
    let indent = "  ".repeat(depth);
    match statement {
        Statement::VariableDeclaration { ty, name, value, .. } => {
            writeln!(f, "{indent}VarDecl {ty} {name}")?;
            write_expr(f, value, depth + 1)
        },
        Statement::Assignment { name, value, .. } => {
            writeln!(f, "{indent}Assign {name}")?;
            write_expr(f, value, depth + 1)
        },
        Statement::Out { outputs, .. } => {
            writeln!(f, "{indent}Out")?;
            outputs.iter()
                   .try_for_each(|expr| write_expr(f, expr, depth + 1))
        },
        Statement::In { name, .. } => writeln!(f, "{indent}In {name}"),
        Statement::If { condition,
                        then_block,
                        elif_branches,
                        else_block,
                        .. } => {
            writeln!(f, "{indent}If")?;
            writeln!(f, "{indent}  Condition:")?;
            write_expr(f, condition, depth + 2)?;
            writeln!(f, "{indent}  Then:")?;
            write_block(f, then_block, depth + 2)?;
            for branch in elif_branches {
                writeln!(f, "{indent}  Elif condition:")?;
                write_expr(f, &branch.condition, depth + 2)?;
                writeln!(f, "{indent}  Elif block:")?;
                write_block(f, &branch.block, depth + 2)?;
            }
            if let Some(block) = else_block {
                writeln!(f, "{indent}  Else:")?;
                write_block(f, block, depth + 2)?;
            }
            Ok(())
        },
        Statement::Expression { expr, .. } => {
            writeln!(f, "{indent}Expression")?;
            write_expr(f, expr, depth + 1)
        },
    }
}

fn write_expr(f: &mut fmt::Formatter<'_>, expr: &Expr, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match expr {
        Expr::Literal { text, ty, .. } => writeln!(f, "{indent}Literal({ty}) {text}"),
        Expr::Variable { name, .. } => writeln!(f, "{indent}Var {name}"),
        Expr::UnaryOp { op, expr, .. } => {
            writeln!(f, "{indent}Unary {op}")?;
            write_expr(f, expr, depth + 1)
        },
        Expr::BinaryOp { left, op, right, .. } => {
            writeln!(f, "{indent}Binary {op}")?;
            write_expr(f, left, depth + 1)?;
            write_expr(f, right, depth + 1)
        },
    }
}
