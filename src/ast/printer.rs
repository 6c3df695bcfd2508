//! S-expression rendering of the syntax tree.
//!
//! Every node implements `Display` as a compact prefix form, e.g. `a = b + c * d`
//! renders as `(= a (+ b (* c d)))`. Tests compare against these strings.

use std::fmt::{Display, Formatter, Result};

use super::{
    ast::{AssociatedItem, ConstantItem, Crate, FunctionItem, Item},
    expressions::{
        BlockExpr, Condition, ElseBranch, Expr, ExprWithBlock, ExprWithoutBlock, IfExpr,
        LetChainLink,
    },
    patterns::Pattern,
    statements::Stmt,
    types::Type,
};

fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> Result {
    for item in items {
        write!(f, " {}", item)?;
    }
    Ok(())
}

fn write_optional<T: Display>(f: &mut Formatter<'_>, item: &Option<T>) -> Result {
    match item {
        Some(item) => write!(f, " {}", item),
        None => Ok(()),
    }
}

fn borrow_marker(mutable: bool) -> &'static str {
    if mutable {
        "&mut"
    } else {
        "&"
    }
}

impl Display for Crate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(crate")?;
        write_list(f, &self.items)?;
        write!(f, ")")
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Item::Function(item) => write!(f, "{}", item),
            Item::Struct(item) => {
                write!(f, "(struct {}", item.name)?;
                match &item.fields {
                    Some(fields) => {
                        for field in fields {
                            write!(f, " ({} {})", field.name, field.ty)?;
                        }
                    }
                    None => write!(f, " unit")?,
                }
                write!(f, ")")
            }
            Item::Enum(item) => {
                write!(f, "(enum {}", item.name)?;
                write_list(f, &item.variants)?;
                write!(f, ")")
            }
            Item::Constant(item) => write!(f, "{}", item),
            Item::Trait(item) => {
                write!(f, "(trait {}", item.name)?;
                write_list(f, &item.items)?;
                write!(f, ")")
            }
            Item::Impl(item) => {
                write!(f, "(impl")?;
                if let Some(trait_name) = &item.trait_name {
                    write!(f, " {} for", trait_name)?;
                }
                write!(f, " {}", item.target)?;
                write_list(f, &item.items)?;
                write!(f, ")")
            }
        }
    }
}

impl Display for FunctionItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({} {}", if self.is_const { "const-fn" } else { "fn" }, self.name)?;
        if let Some(self_param) = &self.self_param {
            let marker = match (self_param.is_ref, self_param.is_mut) {
                (true, true) => "&mut self",
                (true, false) => "&self",
                (false, true) => "mut self",
                (false, false) => "self",
            };
            write!(f, " ({}", marker)?;
            write_optional(f, &self_param.explicit_type)?;
            write!(f, ")")?;
        }
        for param in &self.params {
            write!(f, " ({} {})", param.name, param.ty)?;
        }
        if let Some(return_type) = &self.return_type {
            write!(f, " (-> {})", return_type)?;
        }
        write_optional(f, &self.body)?;
        write!(f, ")")
    }
}

impl Display for ConstantItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(const {} {}", self.name, self.ty)?;
        write_optional(f, &self.value)?;
        write!(f, ")")
    }
}

impl Display for AssociatedItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            AssociatedItem::Constant(item) => write!(f, "{}", item),
            AssociatedItem::Function(item) => write!(f, "{}", item),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Stmt::Empty(_) => write!(f, ";"),
            Stmt::Item(item) => write!(f, "{}", item),
            Stmt::Let(stmt) => {
                write!(f, "(let {}", stmt.pattern)?;
                if let Some(ty) = &stmt.ty {
                    write!(f, " : {}", ty)?;
                }
                write_optional(f, &stmt.value)?;
                write!(f, ")")
            }
            Stmt::Expr(stmt) if stmt.has_semicolon => write!(f, "(; {})", stmt.expr),
            Stmt::Expr(stmt) => write!(f, "{}", stmt.expr),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expr::WithBlock(expr) => write!(f, "{}", expr),
            Expr::WithoutBlock(expr) => write!(f, "{}", expr),
        }
    }
}

impl Display for BlockExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(block")?;
        write_list(f, &self.statements)?;
        if let Some(tail) = &self.tail {
            write!(f, " (tail {})", tail)?;
        }
        write!(f, ")")
    }
}

impl Display for LetChainLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.pattern {
            Some(pattern) => write!(f, "(let {} {})", pattern, self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Condition::Expr(expr) => write!(f, "{}", expr),
            Condition::LetChain(links) => {
                write!(f, "(let-chain")?;
                write_list(f, links)?;
                write!(f, ")")
            }
        }
    }
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(if {} {}", self.condition, self.then_branch)?;
        match &self.else_branch {
            Some(ElseBranch::If(else_if)) => write!(f, " {}", else_if)?,
            Some(ElseBranch::Block(block)) => write!(f, " {}", block)?,
            None => {}
        }
        write!(f, ")")
    }
}

impl Display for ExprWithBlock {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ExprWithBlock::Block(block) => write!(f, "{}", block),
            ExprWithBlock::ConstBlock(expr) => write!(f, "(const {})", expr.block),
            ExprWithBlock::If(expr) => write!(f, "{}", expr),
            ExprWithBlock::Match(expr) => {
                write!(f, "(match {}", expr.scrutinee)?;
                for arm in &expr.arms {
                    write!(f, " (arm {}", arm.pattern)?;
                    if let Some(guard) = &arm.guard {
                        write!(f, " (if {})", guard)?;
                    }
                    write!(f, " {})", arm.body)?;
                }
                write!(f, ")")
            }
            ExprWithBlock::Loop(expr) => write!(f, "(loop {})", expr.body),
            ExprWithBlock::While(expr) => write!(f, "(while {} {})", expr.condition, expr.body),
        }
    }
}

impl Display for ExprWithoutBlock {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ExprWithoutBlock::Literal(expr) => write!(f, "{}", expr.token),
            ExprWithoutBlock::Path(expr) => write!(f, "{}", expr.path),
            ExprWithoutBlock::Unary(expr) => write!(f, "({} {})", expr.operator, expr.operand),
            ExprWithoutBlock::Borrow(expr) => {
                write!(f, "({} {})", borrow_marker(expr.mutable), expr.operand)
            }
            ExprWithoutBlock::Deref(expr) => write!(f, "(* {})", expr.operand),
            ExprWithoutBlock::Binary(expr)
            | ExprWithoutBlock::Comparison(expr)
            | ExprWithoutBlock::LazyBoolean(expr) => {
                write!(f, "({} {} {})", expr.operator, expr.left, expr.right)
            }
            ExprWithoutBlock::Cast(expr) => write!(f, "(as {} {})", expr.operand, expr.target),
            ExprWithoutBlock::Assignment(expr) => {
                write!(f, "(= {} {})", expr.assignee, expr.value)
            }
            ExprWithoutBlock::CompoundAssignment(expr) => {
                write!(f, "({} {} {})", expr.operator, expr.assignee, expr.value)
            }
            ExprWithoutBlock::Grouped(expr) => write!(f, "(paren {})", expr.inner),
            ExprWithoutBlock::Array(expr) => {
                write!(f, "(array")?;
                write_list(f, &expr.elements)?;
                write!(f, ")")
            }
            ExprWithoutBlock::ArrayRepeat(expr) => {
                write!(f, "(array-repeat {} {})", expr.value, expr.length)
            }
            ExprWithoutBlock::Index(expr) => write!(f, "(index {} {})", expr.base, expr.index),
            ExprWithoutBlock::StructLiteral(expr) => {
                write!(f, "(struct-literal {}", expr.path)?;
                for field in &expr.fields {
                    write!(f, " ({} {})", field.name, field.value)?;
                }
                write!(f, ")")
            }
            ExprWithoutBlock::Call(expr) => {
                write!(f, "(call {}", expr.callee)?;
                write_list(f, &expr.arguments)?;
                write!(f, ")")
            }
            ExprWithoutBlock::MethodCall(expr) => {
                write!(f, "(method {} {}", expr.receiver, expr.method)?;
                write_list(f, &expr.arguments)?;
                write!(f, ")")
            }
            ExprWithoutBlock::Field(expr) => write!(f, "(. {} {})", expr.base, expr.field),
            ExprWithoutBlock::Break(expr) => {
                write!(f, "(break")?;
                write_optional(f, &expr.value)?;
                write!(f, ")")
            }
            ExprWithoutBlock::Continue(_) => write!(f, "continue"),
            ExprWithoutBlock::Return(expr) => {
                write!(f, "(return")?;
                write_optional(f, &expr.value)?;
                write!(f, ")")
            }
            ExprWithoutBlock::Underscore(_) => write!(f, "_"),
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Pattern::Literal(pattern) if pattern.negated => {
                write!(f, "-{}", pattern.literal.token)
            }
            Pattern::Literal(pattern) => write!(f, "{}", pattern.literal.token),
            Pattern::Identifier(pattern)
                if !pattern.is_ref && !pattern.is_mut && pattern.subpattern.is_none() =>
            {
                write!(f, "{}", pattern.name)
            }
            Pattern::Identifier(pattern) => {
                write!(f, "(bind")?;
                if pattern.is_ref {
                    write!(f, " ref")?;
                }
                if pattern.is_mut {
                    write!(f, " mut")?;
                }
                write!(f, " {}", pattern.name)?;
                if let Some(subpattern) = &pattern.subpattern {
                    write!(f, " @ {}", subpattern)?;
                }
                write!(f, ")")
            }
            Pattern::Wildcard(_) => write!(f, "_"),
            Pattern::Reference(pattern) => {
                write!(f, "({} {})", borrow_marker(pattern.mutable), pattern.inner)
            }
            Pattern::Path(path) => write!(f, "(path {})", path),
            Pattern::TupleStruct(pattern) => {
                write!(f, "({}", pattern.path)?;
                write_list(f, &pattern.elements)?;
                write!(f, ")")
            }
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Type::Path(ty) => write!(f, "{}", ty.path),
            Type::Reference(ty) => write!(f, "({} {})", borrow_marker(ty.mutable), ty.target),
            Type::Array(ty) => write!(f, "(array {} {})", ty.element, ty.length),
            Type::Slice(ty) => write!(f, "(slice {})", ty.element),
            Type::Tuple(ty) => {
                write!(f, "(tuple")?;
                write_list(f, &ty.elements)?;
                write!(f, ")")
            }
            Type::Never(_) => write!(f, "!"),
            Type::Inferred(_) => write!(f, "_"),
        }
    }
}
