/// Cities starred during this session. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteCities {
    cities: Vec<String>,
}

impl FavoriteCities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `city` unless it is empty or already present. Returns whether it was added.
    pub fn add(&mut self, city: &str) -> bool {
        if city.is_empty() || self.contains(city) {
            return false;
        }
        self.cities.push(city.to_string());
        true
    }

    pub fn contains(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.cities.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
