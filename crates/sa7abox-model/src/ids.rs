use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

pub const ID_MAX_LEN: usize = 64;

fn parse_id(kind: &str, input: &str) -> Result<String, ValidationError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ValidationError(format!("{kind} id must not be empty")));
    }
    if s.len() > ID_MAX_LEN {
        return Err(ValidationError(format!(
            "{kind} id exceeds max length {ID_MAX_LEN}"
        )));
    }
    if !s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError(format!(
            "{kind} id must match [A-Za-z0-9_-]+"
        )));
    }
    Ok(s.to_string())
}

/// Validates a menu item id as it appears in the catalog and on the wire.
pub fn parse_menu_item_id(input: &str) -> Result<String, ValidationError> {
    parse_id("menu item", input)
}

/// Validates an ingredient id as it appears in the catalog and on the wire.
pub fn parse_ingredient_id(input: &str) -> Result<String, ValidationError> {
    parse_id("ingredient", input)
}

#[cfg(test)]
mod tests {
    use super::{parse_ingredient_id, parse_menu_item_id};

    #[test]
    fn ids_are_trimmed_and_strict() {
        assert_eq!(parse_menu_item_id(" supercut ").expect("id"), "supercut");
        assert_eq!(
            parse_ingredient_id("2-blancs-oeuf").expect("id"),
            "2-blancs-oeuf"
        );
        assert!(parse_menu_item_id("").is_err());
        assert!(parse_ingredient_id("riz blanc").is_err());
        assert!(parse_menu_item_id(&"x".repeat(65)).is_err());
    }
}
