use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::ShellError;

/// Identifier of a navigable content view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Home,
    Products,
    News,
    Tasks,
}

impl ViewId {
    pub const COUNT: usize = 4;

    /// All views, in the order the panel lists them
    pub const ALL: [ViewId; Self::COUNT] = [ViewId::Home, ViewId::Products, ViewId::News, ViewId::Tasks];

    /// View shown at start and used whenever resolution fails
    pub const DEFAULT: ViewId = ViewId::Home;

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Products => "products",
            ViewId::News => "news",
            ViewId::Tasks => "tasks",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ViewId::Home => "Home",
            ViewId::Products => "Products",
            ViewId::News => "News",
            ViewId::Tasks => "Tasks",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ViewId::Home => "🏠",
            ViewId::Products => "🛒",
            ViewId::News => "📰",
            ViewId::Tasks => "☑️",
        }
    }

    /// Dense slot index in `0..COUNT`
    pub fn index(&self) -> usize {
        match self {
            ViewId::Home => 0,
            ViewId::Products => 1,
            ViewId::News => 2,
            ViewId::Tasks => 3,
        }
    }
}

impl Default for ViewId {
    fn default() -> Self {
        ViewId::DEFAULT
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(ViewId::Home),
            "products" => Ok(ViewId::Products),
            "news" => Ok(ViewId::News),
            "tasks" => Ok(ViewId::Tasks),
            other => Err(ShellError::UnknownView(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_from_str() {
        assert_eq!("home".parse::<ViewId>().unwrap(), ViewId::Home);
        assert_eq!("Products".parse::<ViewId>().unwrap(), ViewId::Products);
        assert_eq!(" NEWS ".parse::<ViewId>().unwrap(), ViewId::News);
        assert_eq!("tasks".parse::<ViewId>().unwrap(), ViewId::Tasks);
        assert!(matches!("cart".parse::<ViewId>(), Err(ShellError::UnknownView(_))));
    }

    #[test]
    fn test_slug_matches_parser() {
        for view in ViewId::ALL {
            assert_eq!(view.as_str().parse::<ViewId>().unwrap(), view);
        }
    }

    #[test]
    fn test_indices_are_dense() {
        let indices: Vec<usize> = ViewId::ALL.iter().map(|v| v.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(ViewId::default(), ViewId::Home);
        assert_eq!(ViewId::Tasks.to_string(), "tasks");
    }
}
