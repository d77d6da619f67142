use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::TrustError;

/// The four value axes a brand is evaluated on.
///
/// Declaration order is significant: it is the tie-break order for driver
/// selection and comparison summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Labor,
    Environment,
    Politics,
    Social,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 4] = [
        Category::Labor,
        Category::Environment,
        Category::Politics,
        Category::Social,
    ];

    /// Lowercase machine name, as used in serialized data.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Labor => "labor",
            Category::Environment => "environment",
            Category::Politics => "politics",
            Category::Social => "social",
        }
    }

    /// Capitalized name for human-facing summaries.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Labor => "Labor",
            Category::Environment => "Environment",
            Category::Politics => "Politics",
            Category::Social => "Social",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = TrustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "labor" | "labour" => Ok(Category::Labor),
            "environment" | "environmental" => Ok(Category::Environment),
            "politics" | "political" => Ok(Category::Politics),
            "social" => Ok(Category::Social),
            _ => Err(TrustError::UnknownCategory {
                name: s.to_string(),
            }),
        }
    }
}

/// A fixed-size map holding one value per [`Category`].
///
/// Serializes as an object with one key per category, always in declaration
/// order, so serialized output is byte-stable for identical inputs.
/// Use [`deserialize_sparse`] for inputs that may omit categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryMap<T> {
    pub labor: T,
    pub environment: T,
    pub politics: T,
    pub social: T,
}

impl<T> CategoryMap<T> {
    /// Build a map by evaluating `f` once per category, in declaration order.
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self {
            labor: f(Category::Labor),
            environment: f(Category::Environment),
            politics: f(Category::Politics),
            social: f(Category::Social),
        }
    }

    pub fn get(&self, category: Category) -> &T {
        match category {
            Category::Labor => &self.labor,
            Category::Environment => &self.environment,
            Category::Politics => &self.politics,
            Category::Social => &self.social,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::Labor => &mut self.labor,
            Category::Environment => &mut self.environment,
            Category::Politics => &mut self.politics,
            Category::Social => &mut self.social,
        }
    }

    /// Iterate `(category, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Transform every value, keeping the category keys.
    pub fn map<U>(&self, mut f: impl FnMut(Category, &T) -> U) -> CategoryMap<U> {
        CategoryMap::from_fn(|c| f(c, self.get(c)))
    }
}

impl<T: Clone> CategoryMap<T> {
    /// A map with the same value in every category.
    pub fn splat(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl CategoryMap<f64> {
    /// True when every entry is exactly zero (or not a number).
    pub fn is_all_zero(&self) -> bool {
        self.iter().all(|(_, v)| *v == 0.0 || !v.is_finite())
    }
}

/// Deserialize a map that may omit categories; missing keys take `T::default()`.
pub fn deserialize_sparse<'de, D, T>(deserializer: D) -> Result<CategoryMap<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let mut sparse: BTreeMap<Category, T> = BTreeMap::deserialize(deserializer)?;
    Ok(CategoryMap::from_fn(|c| sparse.remove(&c).unwrap_or_default()))
}

impl<T> Index<Category> for CategoryMap<T> {
    type Output = T;
    fn index(&self, category: Category) -> &T {
        self.get(category)
    }
}

impl<T> IndexMut<Category> for CategoryMap<T> {
    fn index_mut(&mut self, category: Category) -> &mut T {
        self.get_mut(category)
    }
}
