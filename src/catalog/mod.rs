//! Static point-of-interest catalog around the property
//!
//! Places are authored configuration: the catalog never adds or removes
//! entries at runtime, and every query preserves insertion order.

use geo::Coord;

use crate::domain::{Category, Place};

/// Name of the property every distance is measured from
pub const PROPERTY_NAME: &str = "Yume at Riverparks";

/// Marker position of the property (lon, lat)
pub const PROPERTY_COORDINATES: Coord<f64> = Coord { x: 120.876, y: 14.370 };

/// Places in one category, in catalog order
pub type CategoryGroup<'a> = (Category, Vec<&'a Place>);

#[derive(Debug, Clone, Default)]
pub struct PlaceCatalog {
    places: Vec<Place>,
}

impl PlaceCatalog {
    pub fn new(places: Vec<Place>) -> Self {
        Self { places }
    }

    /// The sixteen nearby places from the property's surveyed map
    #[rustfmt::skip]
    pub fn builtin() -> Self {
        use Category::*;

        Self::new(vec![
            Place::new("Vista Mall General Trias", Mall, "5.8 km", "3.1 km", (120.9124179, 14.3225442)),
            Place::new("Imart Shopping Center", Mall, "2.8 km", "1.5 km", (120.8986942, 14.3858642)),
            Place::new("The District Imus", Mall, "6.5 km", "3.5 km", (120.9394139, 14.3706188)),
            Place::new("SM Center Imus", Mall, "7.2 km", "3.9 km", (120.9246296, 14.4088854)),
            Place::new("South Imus Specialist Hospital", Hospital, "6.4 km", "3.4 km", (120.9347566, 14.3765538)),
            Place::new("Ospital ng Imus", Hospital, "5.2 km", "2.8 km", (120.9199721, 14.3936854)),
            Place::new("Emilio Aguinaldo College Medical Center - Cavite", Hospital, "7.1 km", "3.8 km", (120.9397649, 14.3486372)),
            Place::new("De la Salle University Medical Center", Hospital, "7.9 km", "4.2 km", (120.9434238, 14.3271716)),
            Place::new("San Francisco De Malabon Parish", Church, "1.9 km", "1.0 km", (120.8800058, 14.3855046)),
            Place::new("Immaculate Conception Parish Church", Church, "6.8 km", "3.6 km", (120.9358534, 14.3269432)),
            Place::new("The Annunciation of the Lord Parish", Church, "2.8 km", "1.5 km", (120.8955918, 14.3624276)),
            Place::new("The Church of Jesus Christ of Latter-day Saints", Church, "1.9 km", "1.0 km", (120.8819163, 14.3813168)),
            Place::new("Samuel Christian College of General Trias, Inc.", School, "2.0 km", "1.1 km", (120.8888265, 14.3800883)),
            Place::new("Cavite State University - General Trias Campus", School, "1.8 km", "1.0 km", (120.88049, 14.3850025)),
            Place::new("The Palmridge School - General Trias", School, "3.7 km", "2.0 km", (120.9069569, 14.3428749)),
            Place::new("Gen. Trias Memorial Elementary School", School, "1.7 km", "0.9 km", (120.8772768, 14.3825654)),
        ])
    }

    /// All places when `category` is `None`, otherwise only that category
    pub fn filter_by_category(&self, category: Option<Category>) -> Vec<&Place> {
        filter_by_category(&self.places, category)
    }

    /// Exact name lookup
    pub fn get(&self, name: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Place> {
        self.places.iter()
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

pub fn filter_by_category(places: &[Place], category: Option<Category>) -> Vec<&Place> {
    match category {
        None => places.iter().collect(),
        Some(c) => places.iter().filter(|p| p.category == c).collect(),
    }
}

/// Partition places by category
///
/// Groups appear in order of each category's first occurrence. A category
/// with no places has no group at all.
pub fn group_by_category<'a, I>(places: I) -> Vec<CategoryGroup<'a>>
where
    I: IntoIterator<Item = &'a Place>,
{
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();

    for place in places {
        match groups.iter_mut().find(|(c, _)| *c == place.category) {
            Some((_, members)) => members.push(place),
            None => groups.push((place.category, vec![place])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Place> {
        vec![
            Place::new("A", Category::School, "1 km", "0.5 km", (0.0, 0.0)),
            Place::new("B", Category::Mall, "2 km", "1 km", (1.0, 1.0)),
            Place::new("C", Category::School, "3 km", "1.5 km", (2.0, 2.0)),
            Place::new("D", Category::Church, "4 km", "2 km", (3.0, 3.0)),
        ]
    }

    fn names(places: &[&Place]) -> Vec<String> {
        places.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_filter_none_is_identity() {
        let places = sample();
        let all = filter_by_category(&places, None);
        assert_eq!(names(&all), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_filter_keeps_order() {
        let places = sample();
        let schools = filter_by_category(&places, Some(Category::School));
        assert_eq!(names(&schools), vec!["A", "C"]);
        assert!(schools.iter().all(|p| p.category == Category::School));
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let places = sample();
        assert!(filter_by_category(&places, Some(Category::Hospital)).is_empty());
        assert_eq!(places.len(), 4);
    }

    #[test]
    fn test_group_first_appearance_order() {
        let places = sample();
        let groups = group_by_category(&places);

        let keys: Vec<Category> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(keys, vec![Category::School, Category::Mall, Category::Church]);
        assert_eq!(names(&groups[0].1), vec!["A", "C"]);
    }

    #[test]
    fn test_group_omits_empty_categories() {
        let places = sample();
        let groups = group_by_category(&places);

        assert!(groups.iter().all(|(c, _)| *c != Category::Hospital));
        assert!(groups.iter().all(|(_, members)| !members.is_empty()));
    }

    #[test]
    fn test_group_of_filtered_has_single_key() {
        let catalog = PlaceCatalog::builtin();
        let groups = group_by_category(catalog.filter_by_category(Some(Category::Church)));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, Category::Church);
        assert_eq!(groups[0].1.len(), 4);
    }

    #[test]
    fn test_group_flatten_equals_input() {
        let catalog = PlaceCatalog::builtin();
        let filtered = catalog.filter_by_category(None);
        let flattened: Vec<&Place> = group_by_category(filtered.iter().copied())
            .into_iter()
            .flat_map(|(_, members)| members)
            .collect();

        // Builtin catalog is authored contiguously by category
        assert_eq!(names(&flattened), names(&filtered));
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = PlaceCatalog::builtin();
        assert_eq!(catalog.len(), 16);
        for category in Category::ALL {
            assert_eq!(catalog.filter_by_category(Some(category)).len(), 4);
        }

        let groups = group_by_category(catalog.iter());
        let keys: Vec<Category> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            keys,
            vec![Category::Mall, Category::Hospital, Category::Church, Category::School]
        );
    }

    #[test]
    fn test_get_by_name() {
        let catalog = PlaceCatalog::builtin();
        let place = catalog.get("Ospital ng Imus").unwrap();
        assert_eq!(place.category, Category::Hospital);
        assert_eq!(place.car_distance, "2.8 km");
        assert!(catalog.get("ospital ng imus").is_none());
    }
}
