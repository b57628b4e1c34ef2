//! WHERE-clause fragments with their bound parameters.

use crate::value::Value;

/// A rendered WHERE-clause fragment plus its ordered parameters.
///
/// The text is emitted verbatim after `where `; every `?` in it must have a
/// matching bound value.
///
/// # Example
/// ```
/// use minorm::Predicate;
///
/// let pred = Predicate::new("status = ? and age > ?").bind("active").bind(18);
/// assert_eq!(pred.text(), "status = ? and age > ?");
/// assert_eq!(pred.params().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    text: String,
    params: Vec<Value>,
}

impl Predicate {
    /// Create a predicate from raw clause text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: Vec::new(),
        }
    }

    /// Shorthand for `column = ?` with one bound value.
    pub fn eq(column: &str, value: impl Into<Value>) -> Self {
        Self::new(format!("{column} = ?")).bind(value)
    }

    /// Bind the next `?` in the clause text.
    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }

    /// Combine two predicates with `and`, parenthesizing both sides.
    pub fn and(self, other: Predicate) -> Self {
        self.combine("and", other)
    }

    /// Combine two predicates with `or`, parenthesizing both sides.
    pub fn or(self, other: Predicate) -> Self {
        self.combine("or", other)
    }

    fn combine(mut self, op: &str, other: Predicate) -> Self {
        self.text = format!("({}) {} ({})", self.text, op, other.text);
        self.params.extend(other.params);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_shorthand() {
        let pred = Predicate::eq("id", 7);
        assert_eq!(pred.text(), "id = ?");
        assert_eq!(pred.params(), &[Value::Int(7)]);
    }

    #[test]
    fn and_parenthesizes_and_orders_params() {
        let pred = Predicate::eq("status", "active").and(Predicate::new("age > ?").bind(18));
        assert_eq!(pred.text(), "(status = ?) and (age > ?)");
        assert_eq!(
            pred.params(),
            &[Value::Text("active".to_string()), Value::Int(18)]
        );
    }

    #[test]
    fn or_combines() {
        let pred = Predicate::eq("a", 1).or(Predicate::eq("b", 2));
        assert_eq!(pred.text(), "(a = ?) or (b = ?)");
        assert_eq!(pred.params(), &[Value::Int(1), Value::Int(2)]);
    }
}
