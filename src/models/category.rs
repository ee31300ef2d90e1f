#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Income,
    Expenses,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expenses => "Expenses",
        }
    }

    /// Map a single-letter menu code (`I` or `E`, any case) to a category.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "I" => Some(Self::Income),
            "E" => Some(Self::Expenses),
            _ => None,
        }
    }

    /// Parse the literal stored in the ledger file. Exact match only.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Income" => Some(Self::Income),
            "Expenses" => Some(Self::Expenses),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
