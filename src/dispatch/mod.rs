// src/dispatch/mod.rs

//! Rule-based result dispatch.
//!
//! A command is matched against [`RULES`] in priority order. Each rule carries
//! everything the pipeline needs to know about a category: the sites the agent
//! pretends to visit, the phrases logged during interaction and extraction, and
//! the canned result catalog. The phase handlers and the final dispatch read
//! the same rule, so log text and results always agree.

use std::fmt;

use serde::Serialize;

use crate::model::ResultItem;

mod catalog;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Laptops,
    Flights,
    PhonePrices,
    Restaurants,
    Jobs,
    General,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Laptops => "laptops",
            Category::Flights => "flights",
            Category::PhonePrices => "phone prices",
            Category::Restaurants => "restaurants",
            Category::Jobs => "jobs",
            Category::General => "general",
        };
        f.write_str(name)
    }
}

/// A predicate over the lower-cased command plus the payload it selects.
#[derive(Debug)]
pub struct CategoryRule {
    pub category: Category,
    /// Every group must match; a group matches when any of its keywords is a
    /// substring of the command.
    pub all_of: &'static [&'static [&'static str]],
    pub sites: &'static [&'static str],
    pub interaction: &'static str,
    pub extraction: &'static str,
    catalog: fn() -> Vec<ResultItem>,
}

impl CategoryRule {
    pub fn matches(&self, normalized: &str) -> bool {
        self.all_of
            .iter()
            .all(|group| group.iter().any(|keyword| normalized.contains(keyword)))
    }

    pub fn results(&self) -> Vec<ResultItem> {
        (self.catalog)()
    }

    /// First site visited during navigation.
    pub fn primary_site(&self) -> &'static str {
        self.sites.first().copied().unwrap_or("google.com")
    }
}

pub static RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Laptops,
        all_of: &[&["laptop"], &["1000"]],
        sites: &["amazon.com", "bestbuy.com", "newegg.com"],
        interaction: "Filling search filters: price <$1000, sorting by rating",
        extraction: "Extracting laptop specs, prices, and reviews",
        catalog: catalog::laptops,
    },
    CategoryRule {
        category: Category::Flights,
        all_of: &[&["flight"], &["nyc", "new york"], &["la", "los angeles"]],
        sites: &["expedia.com", "kayak.com", "google.com/flights"],
        interaction: "Entering dates: NYC to LA, selecting departure times",
        extraction: "Collecting flight times, prices, and airline ratings",
        catalog: catalog::flights,
    },
    CategoryRule {
        category: Category::PhonePrices,
        all_of: &[&["iphone"], &["price"]],
        sites: &["apple.com", "amazon.com", "bestbuy.com"],
        interaction: "Comparing iPhone 15 Pro prices across retailers",
        extraction: "Scraping iPhone prices from multiple retailers",
        catalog: catalog::iphone_prices,
    },
    CategoryRule {
        category: Category::Restaurants,
        all_of: &[&["italian"], &["restaurant"], &["table"]],
        sites: &["opentable.com", "resy.com", "yelp.com"],
        interaction: "Setting location, cuisine type, and availability",
        extraction: "Gathering restaurant details, ratings, and availability",
        catalog: catalog::restaurants,
    },
    CategoryRule {
        category: Category::Jobs,
        all_of: &[&["python"], &["developer"], &["san francisco"]],
        sites: &["linkedin.com", "indeed.com", "glassdoor.com"],
        interaction: "Applying job filters: Python, San Francisco, salary range",
        extraction: "Extracting job details, salaries, and company info",
        catalog: catalog::python_jobs,
    },
];

pub static FALLBACK: CategoryRule = CategoryRule {
    category: Category::General,
    all_of: &[],
    sites: &["google.com"],
    interaction: "Filling search forms with specified criteria",
    extraction: "Scraping and parsing relevant data",
    catalog: catalog::generic,
};

/// Selects the first matching rule, or [`FALLBACK`] when nothing matches.
pub fn classify(command: &str) -> &'static CategoryRule {
    let normalized = command.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .unwrap_or(&FALLBACK)
}

/// Maps a command to its ordered result set. Never fails and never returns an
/// empty set.
pub fn dispatch(command: &str) -> Vec<ResultItem> {
    classify(command).results()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laptop_budget_command_selects_laptops() {
        let rule = classify("Search for laptops under $1000 and list top 5");
        assert_eq!(rule.category, Category::Laptops);

        let results = dispatch("Search for laptops under $1000 and list top 5");
        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|r| r.price.is_some()));
        assert_eq!(results[0].price.as_deref(), Some("$899"));
    }

    #[test]
    fn laptop_without_budget_falls_through() {
        assert_eq!(classify("show me a laptop").category, Category::General);
    }

    #[test]
    fn flights_accept_either_city_spelling() {
        for command in [
            "Find flight tickets from NYC to LA next week",
            "cheap flight new york to los angeles",
        ] {
            assert_eq!(classify(command).category, Category::Flights, "{command}");
        }
        assert_eq!(dispatch("Find flight tickets from NYC to LA").len(), 5);
    }

    #[test]
    fn flight_without_destination_falls_through() {
        assert_eq!(classify("flight from nyc to boston").category, Category::General);
    }

    #[test]
    fn iphone_price_and_jobs_and_restaurants() {
        assert_eq!(classify("iphone price").category, Category::PhonePrices);
        assert_eq!(
            classify("Book an Italian restaurant table for two").category,
            Category::Restaurants
        );
        assert_eq!(
            classify("Python developer jobs in San Francisco").category,
            Category::Jobs
        );
    }

    #[test]
    fn restaurant_without_italian_falls_through() {
        assert_eq!(classify("restaurant table").category, Category::General);
    }

    #[test]
    fn earlier_rules_win() {
        // Both the laptop and the phone rule match; laptops come first.
        let rule = classify("laptop or iphone price under 1000");
        assert_eq!(rule.category, Category::Laptops);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify("IPHONE PRICE").category, Category::PhonePrices);
    }

    #[test]
    fn fallback_has_two_items() {
        for command in ["", "what is the weather", "order pizza"] {
            let results = dispatch(command);
            assert_eq!(results.len(), 2);
            assert_eq!(results[0].title, "Sample Result 1");
            assert_eq!(results[1].title, "Sample Result 2");
        }
    }

    #[test]
    fn dispatch_is_deterministic() {
        let command = "Find flight tickets from NYC to LA next week";
        assert_eq!(dispatch(command), dispatch(command));
    }

    #[test]
    fn every_catalog_is_well_formed() {
        for rule in RULES.iter().chain(std::iter::once(&FALLBACK)) {
            let results = rule.results();
            assert!(!results.is_empty(), "{}", rule.category);
            assert!(!rule.sites.is_empty());
            for (rank, item) in results.iter().enumerate() {
                assert_eq!(item.id, (rank + 1).to_string());
                assert!(item.url.starts_with("https://"));
                if let Some(rating) = item.rating {
                    assert!((0.0..=5.0).contains(&rating));
                }
            }
        }
    }

    #[test]
    fn primary_site_is_first_listed() {
        assert_eq!(classify("iphone price").primary_site(), "apple.com");
        assert_eq!(FALLBACK.primary_site(), "google.com");
    }
}
