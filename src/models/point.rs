use serde::{Deserialize, Serialize};

// Free-text contact data, mutated field-by-field as the user types
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

// Names the contact fields so an input event can address exactly one of them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Whatsapp,
}

/// Submission snapshot sent to `POST /points`. Composed once per submit and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPointRecord {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub items: Vec<i32>,
}
