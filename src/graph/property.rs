//! Key/value properties shared by vertices and edges

use std::collections::HashMap;

/// Property map type. Keys are unique; inserting an existing key overwrites it.
pub type PropertyMap = HashMap<String, String>;

/// Something that holds string properties.
///
/// Implemented by [`Vertex`](super::Vertex) and [`Edge`](super::Edge). Keys and
/// values are not validated: any string, including the empty string, is
/// accepted.
pub trait PropertyContainer {
    /// Full property mapping
    fn properties(&self) -> &PropertyMap;

    /// Mutable access to the property mapping
    fn properties_mut(&mut self) -> &mut PropertyMap;

    /// Insert or overwrite a property, returning the previous value
    fn add_property(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String>
    where
        Self: Sized,
    {
        self.properties_mut().insert(key.into(), value.into())
    }

    /// Replace the whole mapping
    fn set_properties(&mut self, properties: PropertyMap) {
        *self.properties_mut() = properties;
    }

    fn property(&self, key: &str) -> Option<&str> {
        self.properties().get(key).map(String::as_str)
    }

    fn has_property(&self, key: &str) -> bool {
        self.properties().contains_key(key)
    }

    fn property_count(&self) -> usize {
        self.properties().len()
    }
}
