//! Static content payloads rendered by the views. Inert data, no logic
//! beyond formatting helpers.

use chrono::NaiveDate;

/// Feature highlight shown on the home view
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub price: u32,
    pub category: &'static str,
}

impl Product {
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub excerpt: &'static str,
}

impl NewsItem {
    pub fn published(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    /// Human readable date, falling back to the raw value
    pub fn display_date(&self) -> String {
        self.published()
            .map(|date| date.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| self.date.to_string())
    }
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Offline First",
        description: "Works without a connection thanks to Service Workers",
        accent: "blue",
    },
    Feature {
        title: "Fast",
        description: "App shell loaded instantly from the cache",
        accent: "green",
    },
    Feature {
        title: "Installable",
        description: "Install the app on your device",
        accent: "purple",
    },
];

pub const PRODUCTS: &[Product] = &[
    Product { id: 1, name: "Laptop Pro", price: 1299, category: "Electronics" },
    Product { id: 2, name: "Smartphone X", price: 899, category: "Electronics" },
    Product { id: 3, name: "Wireless Headphones", price: 199, category: "Audio" },
    Product { id: 4, name: "Tablet Air", price: 599, category: "Electronics" },
];

pub const NEWS: &[NewsItem] = &[
    NewsItem {
        id: 1,
        title: "New PWA release available",
        date: "2025-09-28",
        excerpt: "Performance improvements and new features...",
    },
    NewsItem {
        id: 2,
        title: "Service Workers: best practices",
        date: "2025-09-25",
        excerpt: "Learn how to tune your application's cache...",
    },
    NewsItem {
        id: 3,
        title: "React 19 is here",
        date: "2025-09-20",
        excerpt: "Discover the framework's new features...",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_dates_parse() {
        for item in NEWS {
            assert!(item.published().is_some(), "bad date for news {}", item.id);
        }
        assert_eq!(NEWS[0].display_date(), "September 28, 2025");
    }

    #[test]
    fn test_invalid_date_falls_back_to_raw() {
        let item = NewsItem { id: 9, title: "", date: "soon", excerpt: "" };
        assert_eq!(item.published(), None);
        assert_eq!(item.display_date(), "soon");
    }

    #[test]
    fn test_product_price() {
        assert_eq!(PRODUCTS[0].display_price(), "$1299");
        assert_eq!(PRODUCTS.len(), 4);
    }
}
