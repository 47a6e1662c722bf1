//! Item Drafts and Patches
//!
//! Form input is parsed here before any mutation reaches the collection.

use super::category::Category;
use super::entity::ValidationError;
use super::item::Position;

/// A validated new item, without id or position
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub category: Category,
    pub weight: f64,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, category: Category, weight: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name(&name.into())?,
            category,
            weight: validate_weight(weight)?,
        })
    }

    /// Parse the raw strings of the item form
    pub fn parse(name: &str, category: &str, weight: &str) -> Result<Self, ValidationError> {
        let name = validate_name(name)?;
        let category = category.parse::<Category>()?;
        let weight = parse_weight(weight)?;
        Ok(Self { name, category, weight })
    }
}

/// Fields to change on an existing item. `None` leaves the field as is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub weight: Option<f64>,
    pub position: Option<Position>,
}

impl ItemPatch {
    /// Check every present field, trimming the name
    pub fn validated(self) -> Result<Self, ValidationError> {
        let name = self.name.as_deref().map(validate_name).transpose()?;
        let weight = self.weight.map(validate_weight).transpose()?;
        if let Some(position) = self.position {
            if !position.is_finite() {
                return Err(ValidationError::InvalidPosition);
            }
        }
        Ok(Self {
            name,
            weight,
            ..self
        })
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.weight.is_none() && self.position.is_none()
    }
}

impl From<ItemDraft> for ItemPatch {
    /// A full form edit: name, category and weight, keeping the position
    fn from(draft: ItemDraft) -> Self {
        Self {
            name: Some(draft.name),
            category: Some(draft.category),
            weight: Some(draft.weight),
            position: None,
        }
    }
}

fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

fn validate_weight(weight: f64) -> Result<f64, ValidationError> {
    if !weight.is_finite() {
        return Err(ValidationError::InvalidWeight(weight.to_string()));
    }
    if weight < 0.0 {
        return Err(ValidationError::NegativeWeight(weight));
    }
    // Normalize -0.0
    Ok(weight + 0.0)
}

fn parse_weight(raw: &str) -> Result<f64, ValidationError> {
    let weight = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidWeight(raw.to_string()))?;
    validate_weight(weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_form() {
        let draft = ItemDraft::parse("  Tent ", "Equipment", "2.5").unwrap();
        assert_eq!(draft.name, "Tent");
        assert_eq!(draft.category, Category::Equipment);
        assert_eq!(draft.weight, 2.5);
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        assert_eq!(ItemDraft::parse("   ", "Food", "1"), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_parse_rejects_bad_weight() {
        assert_eq!(
            ItemDraft::parse("Stove", "Equipment", "heavy"),
            Err(ValidationError::InvalidWeight("heavy".to_string()))
        );
        assert_eq!(
            ItemDraft::parse("Stove", "Equipment", ""),
            Err(ValidationError::InvalidWeight(String::new()))
        );
        assert!(matches!(
            ItemDraft::parse("Stove", "Equipment", "NaN"),
            Err(ValidationError::InvalidWeight(_))
        ));
        assert!(matches!(
            ItemDraft::parse("Stove", "Equipment", "inf"),
            Err(ValidationError::InvalidWeight(_))
        ));
        assert_eq!(
            ItemDraft::parse("Stove", "Equipment", "-0.5"),
            Err(ValidationError::NegativeWeight(-0.5))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        assert_eq!(
            ItemDraft::parse("Stove", "Kitchen", "0.4"),
            Err(ValidationError::UnknownCategory("Kitchen".to_string()))
        );
    }

    #[test]
    fn test_zero_weight_allowed() {
        let draft = ItemDraft::new("Map", Category::Other, 0.0).unwrap();
        assert_eq!(draft.weight, 0.0);
    }

    #[test]
    fn test_patch_validation() {
        let patch = ItemPatch {
            name: Some(" Bag ".to_string()),
            ..Default::default()
        };
        assert_eq!(patch.validated().unwrap().name.as_deref(), Some("Bag"));

        let bad = ItemPatch {
            position: Some(Position::new(f64::NAN, 0.0)),
            ..Default::default()
        };
        assert_eq!(bad.validated(), Err(ValidationError::InvalidPosition));

        let negative = ItemPatch {
            weight: Some(-1.0),
            ..Default::default()
        };
        assert_eq!(negative.validated(), Err(ValidationError::NegativeWeight(-1.0)));
    }

    #[test]
    fn test_patch_from_draft() {
        let draft = ItemDraft::new("Jacket", Category::Clothing, 0.7).unwrap();
        let patch = ItemPatch::from(draft);
        assert!(!patch.is_empty());
        assert_eq!(patch.position, None);
        assert!(ItemPatch::default().is_empty());
    }
}
