//! Logical expressions over model variables.
//!
//! Mechanisms and negated utility keys are kept as an expression tree and
//! only turned into text when the model is serialized:
//!
//! - `Literal("A1")` renders as `'A1'`
//! - `Not(e)` renders as `Not(<e>)`
//! - `And(a, b)` renders as `And(<a>,<b>)`

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Literal(String),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn literal(name: impl Into<String>) -> Self {
        Self::Literal(name.into())
    }

    pub fn not(inner: Expr) -> Self {
        Self::Not(Box::new(inner))
    }

    pub fn and(lhs: Expr, rhs: Expr) -> Self {
        Self::And(Box::new(lhs), Box::new(rhs))
    }

    /// Build the conjunction of `names`.
    ///
    /// Literals are sorted by their quoted form and folded left, so
    /// `[C, A, B]` becomes `And(And('A','B'),'C')`. Returns `None` for an
    /// empty input. The result does not depend on input order.
    pub fn conjunction<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<Expr> {
        let mut literals: Vec<(String, Expr)> = names
            .into_iter()
            .map(|name| {
                let lit = Expr::literal(name);
                (lit.to_string(), lit)
            })
            .collect();
        literals.sort_by(|a, b| a.0.cmp(&b.0));
        literals.dedup_by(|a, b| a.0 == b.0);

        let mut iter = literals.into_iter().map(|(_, lit)| lit);
        let first = iter.next()?;
        Some(iter.fold(first, Expr::and))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(name) => write!(f, "'{}'", name),
            Self::Not(inner) => write!(f, "Not({})", inner),
            Self::And(lhs, rhs) => write!(f, "And({},{})", lhs, rhs),
        }
    }
}

/// Render an optional expression; an absent expression is the empty string.
pub fn render(expr: Option<&Expr>) -> String {
    expr.map(ToString::to_string).unwrap_or_default()
}

/// Snapshot key of the utility of *not* reaching `consequence`.
pub fn negated_key(consequence: &str) -> String {
    Expr::not(Expr::literal(consequence)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conj(names: &[&str]) -> String {
        render(Expr::conjunction(names.iter().copied()).as_ref())
    }

    #[test]
    fn empty_conjunction_is_empty_string() {
        assert!(Expr::conjunction(std::iter::empty::<&str>()).is_none());
        assert_eq!(conj(&[]), "");
    }

    #[test]
    fn single_variable_is_bare_literal() {
        assert_eq!(conj(&["A"]), "'A'");
    }

    #[test]
    fn two_variables() {
        assert_eq!(conj(&["A", "B"]), "And('A','B')");
        assert_eq!(conj(&["B", "A"]), "And('A','B')");
    }

    #[test]
    fn fold_nests_to_the_left() {
        assert_eq!(conj(&["C", "A", "B"]), "And(And('A','B'),'C')");
        assert_eq!(
            conj(&["D", "B", "C", "A"]),
            "And(And(And('A','B'),'C'),'D')"
        );
    }

    #[test]
    fn sorts_by_quoted_form() {
        // ' ' sorts before '\'' so "'A '" comes before "'A'"
        assert_eq!(conj(&["A", "A "]), "And('A ','A')");
        assert_eq!(conj(&["AB", "A"]), "And('A','AB')");
    }

    #[test]
    fn duplicate_names_collapse() {
        assert_eq!(conj(&["A", "A"]), "'A'");
    }

    #[test]
    fn negation_renders() {
        assert_eq!(negated_key("C1"), "Not('C1')");
        let e = Expr::not(Expr::and(Expr::literal("A"), Expr::literal("B")));
        assert_eq!(e.to_string(), "Not(And('A','B'))");
    }
}
