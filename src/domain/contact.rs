use serde::{Deserialize, Serialize};

/// A single directory entry. Field order here is the field order on disk.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

impl Contact {
    pub fn new(name: String, phone: String, email: String, address: String) -> Self {
        Contact {
            name,
            phone,
            email,
            address,
        }
    }

    /// Case-insensitive exact comparison against the contact name.
    pub fn name_matches(&self, name: &str) -> bool {
        names_equal_ignore_case(&self.name, name)
    }
}

pub fn names_equal_ignore_case(a: &str, b: &str) -> bool {
    // Quick exit for the common ascii case
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    a.chars()
        .flat_map(fold_char)
        .eq(b.chars().flat_map(fold_char))
}

/// Lowercases `c`, then collapses the lowercase letters that share a fold
/// with another one (final sigma, long s, Greek symbol variants).
fn fold_char(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase().map(|l| match l {
        'ς' => 'σ',
        'ſ' => 's',
        'ϐ' => 'β',
        'ϑ' => 'θ',
        'ϕ' => 'φ',
        'ϖ' => 'π',
        'ϰ' => 'κ',
        'ϱ' => 'ρ',
        'ϵ' => 'ε',
        '\u{1FBE}' => 'ι',
        'ẛ' => 'ṡ',
        _ => l,
    })
}
