use crate::client::MockCollectApi;
use crate::geography::MockGeographyApi;
use crate::geolocation::MockLocationSource;
use crate::models::common::Coordinate;
use crate::models::item::CollectibleItem;

// Sample catalog matching the backend's seed data
pub fn sample_items() -> Vec<CollectibleItem> {
    vec![
        CollectibleItem {
            id: 1,
            name: "Lâmpadas".to_string(),
            image_url: "http://localhost:3333/uploads/lampadas.svg".to_string(),
        },
        CollectibleItem {
            id: 2,
            name: "Pilhas e Baterias".to_string(),
            image_url: "http://localhost:3333/uploads/baterias.svg".to_string(),
        },
        CollectibleItem {
            id: 3,
            name: "Papéis e Papelão".to_string(),
            image_url: "http://localhost:3333/uploads/papeis-papelao.svg".to_string(),
        },
    ]
}

pub fn sample_states() -> Vec<String> {
    vec!["SP".to_string(), "RJ".to_string(), "MG".to_string()]
}

pub fn cities_for(uf: &str) -> Vec<String> {
    let names: &[&str] = match uf {
        "SP" => &["São Paulo", "Campinas", "Santos"],
        "RJ" => &["Rio de Janeiro", "Niterói"],
        _ => &[],
    };

    names.iter().map(|name| name.to_string()).collect()
}

pub fn sample_position() -> Coordinate {
    Coordinate::new(-23.55, -46.63)
}

// Mock trio behaving like the live services: a fixed catalog and state list,
// a canned city list per state, a resolved device position and successful
// submissions
pub fn setup_mock_services() -> (MockCollectApi, MockGeographyApi, MockLocationSource) {
    let mut api = MockCollectApi::new();
    api.expect_fetch_items().returning(|| Ok(sample_items()));
    api.expect_create_point().returning(|_| Ok(()));

    let mut geography = MockGeographyApi::new();
    geography
        .expect_list_states()
        .returning(|| Ok(sample_states()));
    geography
        .expect_list_cities()
        .returning(|uf| Ok(cities_for(uf)));

    let mut location = MockLocationSource::new();
    location
        .expect_current_position()
        .returning(|| Some(sample_position()));

    (api, geography, location)
}
