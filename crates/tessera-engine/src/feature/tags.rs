/// Tag categories understood by the classifier and its predicates.
///
/// `Highway` through `Others` select a classification rule. `Place`,
/// `AdminLevel` and `Name` only feed the border / populated-place predicates
/// and labels. Everything else is `Unrecognized` and never matches a rule.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TagKey {
    Highway,
    Water,
    Railway,
    Natural,
    Boundary,
    LandType,
    Building,
    Amenity,
    Others,
    Place,
    AdminLevel,
    Name,
    Unrecognized,
}

impl TagKey {
    /// Maps an OpenStreetMap tag key to its category.
    pub fn from_osm_key(key: &str) -> Self {
        match key {
            "highway" => TagKey::Highway,
            "water" | "waterway" => TagKey::Water,
            "railway" => TagKey::Railway,
            "natural" => TagKey::Natural,
            "boundary" => TagKey::Boundary,
            "landuse" => TagKey::LandType,
            "building" => TagKey::Building,
            "amenity" => TagKey::Amenity,
            "leisure" => TagKey::Others,
            "place" => TagKey::Place,
            "admin_level" => TagKey::AdminLevel,
            "name" => TagKey::Name,
            _ => TagKey::Unrecognized,
        }
    }
}

/// Ordered tag list.
///
/// Backed by a `Vec` so iteration order is insertion order. Duplicate keys are
/// allowed and kept in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tags(Vec<(TagKey, String)>);

impl Tags {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, key: TagKey, value: impl Into<String>) {
        self.0.push((key, value.into()));
    }

    /// Tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (TagKey, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Value of the first tag with `key`.
    pub fn first(&self, key: TagKey) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// True if any tag with `key` has a value satisfying `pred`.
    pub fn any(&self, key: TagKey, pred: impl Fn(&str) -> bool) -> bool {
        self.iter().any(|(k, v)| k == key && pred(v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(TagKey, S)> for Tags {
    fn from_iter<I: IntoIterator<Item = (TagKey, S)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
