#[cfg(test)]
mod client_tests {
    use mockall::predicate::eq;
    use std::env;

    use crate::client::{CollectApi, EcoletaClient, MockCollectApi};
    use crate::client_mock::{cities_for, setup_mock_services};
    use crate::geography::{GeographyApi, IbgeClient};
    use crate::geolocation::{EnvLocationSource, LocationSource};
    use crate::models::point::NewPointRecord;

    #[tokio::test]
    async fn test_fetch_items() {
        let (api, _, _) = setup_mock_services();

        let result = api.fetch_items().await;

        assert!(result.is_ok());
        let items = result.unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].name, "Lâmpadas");
        assert!(items[0].image_url.ends_with("lampadas.svg"));
    }

    #[tokio::test]
    async fn test_create_point() {
        let record = NewPointRecord {
            name: "ONG A".to_string(),
            email: "a@a.com".to_string(),
            whatsapp: "11999999999".to_string(),
            uf: "SP".to_string(),
            city: "São Paulo".to_string(),
            latitude: -23.5,
            longitude: -46.6,
            items: vec![1, 3],
        };

        let mut api = MockCollectApi::new();
        api.expect_create_point()
            .with(eq(record.clone()))
            .times(1)
            .returning(|_| Ok(()));

        let result = api.create_point(record).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_list_states_and_cities() {
        let (_, geography, _) = setup_mock_services();

        let states = geography.list_states().await.unwrap();
        assert_eq!(states, vec!["SP", "RJ", "MG"]);

        let cities = geography.list_cities("SP").await.unwrap();
        assert_eq!(cities, cities_for("SP"));
        assert_eq!(cities[0], "São Paulo");

        // Unknown states come back empty rather than failing
        let cities = geography.list_cities("XX").await.unwrap();
        assert!(cities.is_empty());
    }

    #[test]
    fn test_endpoint_configuration() {
        let client = EcoletaClient::with_endpoint("http://backend.test");
        assert_eq!(client.endpoint(), "http://backend.test");

        let geography = IbgeClient::with_endpoint("http://ibge.test/localidades");
        assert_eq!(geography.endpoint(), "http://ibge.test/localidades");
    }

    #[test]
    fn test_record_serialization() {
        let record = NewPointRecord {
            name: "ONG A".to_string(),
            email: "a@a.com".to_string(),
            whatsapp: "11999999999".to_string(),
            uf: "SP".to_string(),
            city: "São Paulo".to_string(),
            latitude: -23.5,
            longitude: -46.6,
            items: vec![1, 3],
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "ONG A",
                "email": "a@a.com",
                "whatsapp": "11999999999",
                "uf": "SP",
                "city": "São Paulo",
                "latitude": -23.5,
                "longitude": -46.6,
                "items": [1, 3],
            })
        );
    }

    // Single test for the env-backed position source so the two lookups do
    // not race each other over the same variables
    #[tokio::test]
    async fn test_env_location_source() {
        env::remove_var("ECOLETA_DEVICE_LAT");
        env::remove_var("ECOLETA_DEVICE_LNG");

        let source = EnvLocationSource;
        assert_eq!(source.current_position().await, None);

        env::set_var("ECOLETA_DEVICE_LAT", "-23.55");
        env::set_var("ECOLETA_DEVICE_LNG", "-46.63");

        let position = source.current_position().await;
        assert!(position.is_some());
        let position = position.unwrap();
        assert_eq!(position.latitude, -23.55);
        assert_eq!(position.longitude, -46.63);

        // Unparsable values fail silently too
        env::set_var("ECOLETA_DEVICE_LAT", "not-a-number");
        assert_eq!(source.current_position().await, None);

        env::remove_var("ECOLETA_DEVICE_LAT");
        env::remove_var("ECOLETA_DEVICE_LNG");
    }
}
