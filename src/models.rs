use std::fmt;

/// A single API route in the catalog
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub path: String,
    pub method: String,
}

impl Endpoint {
    pub fn new(method: &str, path: &str) -> Self {
        Endpoint {
            path: path.to_string(),
            method: method.to_string(),
        }
    }

    /// Case-insensitive substring match against path or method.
    ///
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.path.to_lowercase().contains(&query) || self.method.to_lowercase().contains(&query)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.method, self.path)
    }
}

/// The compiled-in endpoint catalog, in display order
pub fn default_catalog() -> Vec<Endpoint> {
    vec![
        Endpoint::new("GET", "/"),
        Endpoint::new("POST", "/"),
        Endpoint::new("POST", "/login"),
        Endpoint::new("GET", "/users"),
        Endpoint::new("POST", "/users"),
    ]
}
