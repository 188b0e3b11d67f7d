//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a shopping cart (one per browsing session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(Uuid);

impl CartId {
    /// Creates a new random CartId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a CartId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CartId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CartId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Stable catalogue key of a product, e.g. `pink-rose-bouquet`.
///
/// Used for routing and as the identity of a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Creates a ProductId, rejecting blank values.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("product_id"));
        }
        Ok(Self(id))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProductId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

/// URL slug of a category, e.g. `romance`.
///
/// Products list the slugs of the categories they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategorySlug(String);

impl CategorySlug {
    /// Creates a slug. Slugs are lowercase ASCII letters, digits and dashes.
    pub fn new(slug: impl Into<String>) -> Result<Self, ValidationError> {
        let slug = slug.into();
        if slug.is_empty() {
            return Err(ValidationError::empty_field("slug"));
        }
        if !slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ValidationError::invalid_format(
                "slug",
                "only lowercase letters, digits and '-' are allowed",
            ));
        }
        Ok(Self(slug))
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategorySlug {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CategorySlug {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategorySlug> for String {
    fn from(slug: CategorySlug) -> Self {
        slug.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_id_generates_unique_values() {
        let id1 = CartId::new();
        let id2 = CartId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn cart_id_parses_from_string() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: CartId = uuid_str.parse().unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn cart_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<CartId>().is_err());
    }

    #[test]
    fn product_id_rejects_blank() {
        assert!(ProductId::new("").is_err());
        assert!(ProductId::new("   ").is_err());
    }

    #[test]
    fn product_id_deserializes_through_validation() {
        let id: ProductId = serde_json::from_str(r#""peony-blush""#).unwrap();
        assert_eq!(id.as_str(), "peony-blush");

        let result: Result<ProductId, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err());
    }

    #[test]
    fn category_slug_accepts_kebab_case() {
        let slug = CategorySlug::new("congratulations").unwrap();
        assert_eq!(slug.as_str(), "congratulations");
        assert!(CategorySlug::new("new-baby").is_ok());
    }

    #[test]
    fn category_slug_rejects_uppercase_and_spaces() {
        assert!(CategorySlug::new("Romance").is_err());
        assert!(CategorySlug::new("get well").is_err());
        assert!(CategorySlug::new("").is_err());
    }

    #[test]
    fn category_slug_serializes_as_plain_string() {
        let slug = CategorySlug::new("wedding").unwrap();
        assert_eq!(serde_json::to_string(&slug).unwrap(), r#""wedding""#);
    }
}
