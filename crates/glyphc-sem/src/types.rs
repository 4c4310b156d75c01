//! Checker types and stack kinds.

use glyphc_util::Symbol;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerType {
    Int,
    Float,
    Bool,
    Char,
    String,
    Generic(Symbol),
    Union(Vec<CheckerType>),
    Stack(Box<StackKind>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackKind {
    Exact(Vec<CheckerType>),
    Many(Box<CheckerType>),
    Unknown,
}

impl CheckerType {
    pub fn stack_many(elem: CheckerType) -> Self {
        CheckerType::Stack(Box::new(StackKind::Many(Box::new(elem))))
    }

    pub fn stack_unknown() -> Self {
        CheckerType::Stack(Box::new(StackKind::Unknown))
    }

    pub fn as_generic(&self) -> Option<Symbol> {
        match self {
            CheckerType::Generic(g) => Some(*g),
            _ => None,
        }
    }

    /// Recursively replaces every occurrence of `Generic(tag)` with `repl`,
    /// including inside unions and stack element types.
    pub fn substitute(&mut self, tag: Symbol, repl: &CheckerType) {
        match self {
            CheckerType::Generic(g) if *g == tag => *self = repl.clone(),
            CheckerType::Union(members) => {
                for m in members.iter_mut() {
                    m.substitute(tag, repl);
                }
            }
            CheckerType::Stack(kind) => match kind.as_mut() {
                StackKind::Exact(xs) => {
                    for x in xs.iter_mut() {
                        x.substitute(tag, repl);
                    }
                }
                StackKind::Many(e) => e.substitute(tag, repl),
                StackKind::Unknown => {}
            },
            _ => {}
        }
    }
}

impl std::fmt::Display for CheckerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckerType::Int => write!(f, "int"),
            CheckerType::Float => write!(f, "float"),
            CheckerType::Bool => write!(f, "bool"),
            CheckerType::Char => write!(f, "char"),
            CheckerType::String => write!(f, "string"),
            CheckerType::Generic(g) => write!(f, "#{g}"),
            CheckerType::Union(members) => {
                let text: Vec<String> = members.iter().map(ToString::to_string).collect();
                write!(f, "{}", text.join("|"))
            }
            CheckerType::Stack(kind) => write!(f, "{kind}"),
        }
    }
}

impl std::fmt::Display for StackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StackKind::Exact(xs) => {
                let text: Vec<String> = xs.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", text.join(","))
            }
            StackKind::Many(e) => write!(f, "[...{e}]"),
            StackKind::Unknown => write!(f, "[?]"),
        }
    }
}

/// `is_matching(got, expect)`.
pub fn is_matching(got: &CheckerType, expect: &CheckerType) -> bool {
    if let CheckerType::Union(members) = expect {
        return members.iter().any(|m| is_matching(got, m));
    }
    if matches!(got, CheckerType::Union(_)) {
        return false;
    }
    match (got, expect) {
        (CheckerType::Stack(gk), CheckerType::Stack(ek)) => stack_matching(gk, ek),
        (CheckerType::Stack(_), _) | (_, CheckerType::Stack(_)) => false,
        _ => got == expect,
    }
}

fn stack_matching(got: &StackKind, expect: &StackKind) -> bool {
    if matches!(got, StackKind::Unknown) || matches!(expect, StackKind::Unknown) {
        return true;
    }
    match (got, expect) {
        (StackKind::Many(e1), StackKind::Many(e2)) => is_matching(e1, e2),
        (StackKind::Exact(xs), StackKind::Many(e)) => xs.iter().all(|x| is_matching(x, e)),
        (StackKind::Exact(xs), StackKind::Exact(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| is_matching(x, y))
        }
        (StackKind::Many(e), StackKind::Exact(ys)) => ys.iter().all(|y| is_matching(e, y)),
        (StackKind::Unknown, _) | (_, StackKind::Unknown) => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_concrete_types_match() {
        assert!(is_matching(&CheckerType::Int, &CheckerType::Int));
        assert!(!is_matching(&CheckerType::Int, &CheckerType::Float));
    }

    #[test]
    fn union_on_expect_side_accepts_any_member() {
        let expect = CheckerType::Union(vec![CheckerType::Int, CheckerType::Float]);
        assert!(is_matching(&CheckerType::Float, &expect));
        assert!(!is_matching(&CheckerType::Bool, &expect));
    }

    #[test]
    fn union_on_got_side_is_rejected() {
        let got = CheckerType::Union(vec![CheckerType::Int, CheckerType::Float]);
        assert!(!is_matching(&got, &CheckerType::Int));
    }

    #[test]
    fn unknown_stack_matches_anything() {
        let unknown = CheckerType::stack_unknown();
        let exact = CheckerType::Stack(Box::new(StackKind::Exact(vec![CheckerType::Int])));
        assert!(is_matching(&unknown, &exact));
        assert!(is_matching(&exact, &unknown));
    }

    #[test]
    fn exact_matches_many_pointwise() {
        let got = CheckerType::Stack(Box::new(StackKind::Exact(vec![CheckerType::Int, CheckerType::Int])));
        let expect = CheckerType::stack_many(CheckerType::Int);
        assert!(is_matching(&got, &expect));
    }

    #[test]
    fn substitute_replaces_generic_everywhere() {
        let mut t = CheckerType::Union(vec![CheckerType::Generic(Symbol::intern("a")), CheckerType::Bool]);
        t.substitute(Symbol::intern("a"), &CheckerType::Int);
        assert_eq!(t, CheckerType::Union(vec![CheckerType::Int, CheckerType::Bool]));
    }
}
