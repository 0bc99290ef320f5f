//! `GET /` — self-description of the API.

use axum::Json;
use serde::Serialize;

/// Version advertised by the description document.
pub const API_VERSION: &str = "1.0.0";

/// One entry of the endpoint listing.
#[derive(Debug, Serialize)]
pub struct EndpointDescription {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct ApiDescription {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: &'static [EndpointDescription],
}

const ENDPOINTS: &[EndpointDescription] = &[
    EndpointDescription {
        method: "GET",
        path: "/sensors",
        description: "Liste tous les capteurs",
    },
    EndpointDescription {
        method: "GET",
        path: "/sensors/:id",
        description: "Détails d'un capteur spécifique",
    },
    EndpointDescription {
        method: "POST",
        path: "/sensors/:id/data",
        description: "Envoie des données pour un capteur",
    },
    EndpointDescription {
        method: "GET",
        path: "/health",
        description: "Vérifie l'état de l'API",
    },
];

const DESCRIPTION: ApiDescription = ApiDescription {
    message: "API de supervision de capteurs environnementaux",
    version: API_VERSION,
    endpoints: ENDPOINTS,
};

pub async fn describe() -> Json<ApiDescription> {
    Json(DESCRIPTION)
}
