use crate::models::{Gym, Product};

/// Category value that selects every product.
pub const ALL_CATEGORIES: &str = "All";

/// Number of workout sessions shown on the dashboard.
pub const DASHBOARD_WINDOW: usize = 7;

/// Decoded query-string pairs, in the order they appeared.
pub type QueryPairs = [(String, String)];

/// Value of the last occurrence of `key`, so `?k=a&k=b` reads as `b`.
fn last_value(pairs: &QueryPairs, key: &str) -> Option<String> {
    pairs
        .iter()
        .rev()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

#[derive(Debug, Default, Clone)]
pub struct ProductQuery {
    /// Exact category to list (default: "All")
    pub category: Option<String>,
}

impl ProductQuery {
    pub fn from_pairs(pairs: &QueryPairs) -> Self {
        Self {
            category: last_value(pairs, "category"),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct GymQuery {
    /// Case-insensitive text matched against name and location (default: empty)
    pub search: Option<String>,
}

impl GymQuery {
    pub fn from_pairs(pairs: &QueryPairs) -> Self {
        Self {
            search: last_value(pairs, "search"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    All,
    Category(String),
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductFilter::All => true,
            ProductFilter::Category(category) => product.category == *category,
        }
    }
}

impl From<ProductQuery> for ProductFilter {
    fn from(query: ProductQuery) -> Self {
        match query.category {
            Some(category) if category != ALL_CATEGORIES => ProductFilter::Category(category),
            _ => ProductFilter::All,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GymFilter {
    All,
    Search(String),
}

impl GymFilter {
    /// A gym matches when either its name or its location contains the term.
    pub fn matches(&self, gym: &Gym) -> bool {
        match self {
            GymFilter::All => true,
            GymFilter::Search(term) => {
                let needle = term.to_lowercase();
                gym.name.to_lowercase().contains(&needle)
                    || gym.location.to_lowercase().contains(&needle)
            }
        }
    }

    /// `ILIKE` pattern for the search term, with LIKE metacharacters escaped
    /// so the term is matched literally.
    pub fn like_pattern(&self) -> Option<String> {
        match self {
            GymFilter::All => None,
            GymFilter::Search(term) => {
                let mut pattern = String::with_capacity(term.len() + 2);
                pattern.push('%');
                for c in term.chars() {
                    if matches!(c, '%' | '_' | '\\') {
                        pattern.push('\\');
                    }
                    pattern.push(c);
                }
                pattern.push('%');
                Some(pattern)
            }
        }
    }
}

impl From<GymQuery> for GymFilter {
    fn from(query: GymQuery) -> Self {
        match query.search {
            Some(search) if !search.is_empty() => GymFilter::Search(search),
            _ => GymFilter::All,
        }
    }
}

/// Leading slice of the workout log, in store order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardWindow {
    limit: usize,
}

impl DashboardWindow {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for DashboardWindow {
    fn default() -> Self {
        Self::new(DASHBOARD_WINDOW)
    }
}
