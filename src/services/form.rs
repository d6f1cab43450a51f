use tracing::debug;

use crate::models::common::Coordinate;
use crate::models::item::CollectibleItem;
use crate::models::point::{ContactDetails, ContactField, NewPointRecord};

// Sentinel the backend expects for an unselected state or city
const UNSELECTED: &str = "0";

/// Pending city lookup, keyed by the selection that requested it. The
/// generation lets a late response for a superseded selection be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityFetch {
    pub uf: String,
    pub generation: u64,
}

/// All state owned by the registration form. Every transition is synchronous
/// and runs to completion; the session loop is the only caller.
#[derive(Debug, Default)]
pub struct PointForm {
    contact: ContactDetails,
    selected_uf: Option<String>,
    selected_city: Option<String>,
    position: Coordinate,
    selected_items: Vec<i32>,
    states: Vec<String>,
    cities: Vec<String>,
    items: Vec<CollectibleItem>,
    city_generation: u64,
}

impl PointForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    pub fn selected_uf(&self) -> Option<&str> {
        self.selected_uf.as_deref()
    }

    pub fn selected_city(&self) -> Option<&str> {
        self.selected_city.as_deref()
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn selected_items(&self) -> &[i32] {
        &self.selected_items
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn items(&self) -> &[CollectibleItem] {
        &self.items
    }

    /// Overwrite exactly the named contact field; the others are untouched
    pub fn set_contact_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.contact.name = value,
            ContactField::Email => self.contact.email = value,
            ContactField::Whatsapp => self.contact.whatsapp = value,
        }
    }

    /// Change the selected state. Returns the city lookup to schedule, or
    /// `None` when the selection went back to "unselected", in which case no
    /// lookup is issued and the existing city list stays as it was.
    ///
    /// A previously selected city is deliberately left in place; the browser
    /// form behaves the same way.
    pub fn select_uf(&mut self, uf: Option<String>) -> Option<CityFetch> {
        self.selected_uf = uf;
        let uf = self.selected_uf.clone()?;

        self.city_generation += 1;
        debug!(
            "State changed to {}, scheduling city lookup #{}",
            uf, self.city_generation
        );

        Some(CityFetch {
            uf,
            generation: self.city_generation,
        })
    }

    /// Install a city lookup result, replacing the whole list. A response for
    /// a superseded selection is discarded. Returns whether the list changed.
    pub fn apply_cities(&mut self, generation: u64, names: Vec<String>) -> bool {
        if generation != self.city_generation {
            debug!(
                "Discarding stale city response #{} (current is #{})",
                generation, self.city_generation
            );
            return false;
        }

        self.cities = names;
        true
    }

    pub fn select_city(&mut self, city: Option<String>) {
        self.selected_city = city;
    }

    /// Most recent write wins, whether it came from the device position or a
    /// map click
    pub fn set_position(&mut self, position: Coordinate) {
        self.position = position;
    }

    /// Toggle membership of an item id: add if absent, remove if present
    pub fn toggle_item(&mut self, id: i32) {
        if let Some(index) = self.selected_items.iter().position(|selected| *selected == id) {
            self.selected_items.remove(index);
        } else {
            self.selected_items.push(id);
        }
    }

    pub fn apply_states(&mut self, states: Vec<String>) {
        self.states = states;
    }

    pub fn apply_items(&mut self, items: Vec<CollectibleItem>) {
        self.items = items;
    }

    /// Compose the submission snapshot from the current form state. No
    /// validation: unselected fields go out with the backend's "0" sentinel,
    /// exactly as the browser form sends them.
    pub fn record(&self) -> NewPointRecord {
        NewPointRecord {
            name: self.contact.name.clone(),
            email: self.contact.email.clone(),
            whatsapp: self.contact.whatsapp.clone(),
            uf: self
                .selected_uf
                .clone()
                .unwrap_or_else(|| UNSELECTED.to_string()),
            city: self
                .selected_city
                .clone()
                .unwrap_or_else(|| UNSELECTED.to_string()),
            latitude: self.position.latitude,
            longitude: self.position.longitude,
            items: self.selected_items.clone(),
        }
    }
}
