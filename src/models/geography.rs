use serde::Deserialize;

// IBGE localities response shapes. The Portuguese field names are the wire
// contract of the public API.
#[derive(Debug, Deserialize)]
pub struct UfResponse {
    pub sigla: String,
}

#[derive(Debug, Deserialize)]
pub struct CityResponse {
    pub nome: String,
}
