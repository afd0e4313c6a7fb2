//! Identifier sanitizing and collision avoidance.

use std::collections::BTreeSet;

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Names that are legal but would shadow the receiver or common builtins.
const SHADOWED_PARAMS: &[&str] = &["self", "type", "id", "list", "set"];

pub fn is_keyword(name: &str) -> bool {
    PYTHON_KEYWORDS.contains(&name)
}

/// `name`, with a `_` appended when it is a Python keyword.
pub fn safe_identifier(name: &str) -> String {
    if is_keyword(name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}

/// Like [`safe_identifier`], also escaping `self` and shadowed builtins.
pub fn safe_param_name(name: &str) -> String {
    if is_keyword(name) || SHADOWED_PARAMS.contains(&name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}

/// Hands out names that are unique within one scope.
#[derive(Clone, Debug, Default)]
pub struct UniqueNames {
    used: BTreeSet<String>,
}

impl UniqueNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `name` as taken without claiming it.
    pub fn reserve(&mut self, name: &str) {
        self.used.insert(name.to_string());
    }

    /// `base` if free, else `base2`, `base3`, ...
    pub fn claim(&mut self, base: &str) -> String {
        if self.used.insert(base.to_string()) {
            return base.to_string();
        }

        let mut counter = 2;
        loop {
            let name = format!("{}{}", base, counter);
            if self.used.insert(name.clone()) {
                return name;
            }
            counter += 1;
        }
    }
}
