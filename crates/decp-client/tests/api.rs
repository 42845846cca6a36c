//! Wire-level tests: the client must send the exact parameter set the
//! API's query models expect, and read back its JSON shapes.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use decp_client::{ApiClient, ApiSettings, ParamsStructuresAgg, Settings};
use decp_model::IdentifiantStructure;
use decp_table::{SortOrder, TableQuery};

fn settings_for(server: &MockServer) -> Settings {
    Settings {
        api: ApiSettings { base: server.uri() },
        date_min: None,
        opsn: String::new(),
        region: String::new(),
        departements: vec![],
    }
}

fn structure_json() -> serde_json::Value {
    json!({
        "uid": 8,
        "identifiant": "77856789000011",
        "type_identifiant": "SIRET",
        "nom": "EIFFAGE ROUTE",
        "vendeur": true,
        "acheteur": false
    })
}

#[tokio::test]
async fn acheteurs_request_carries_ticket_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/structure/acheteur"))
        .and(query_param("champs_ordre", "nom"))
        .and(query_param("ordre", "1"))
        .and(query_param("filtre", "besan"))
        .and(query_param("offset", "20"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 241,
            "items": [
                {"structure": structure_json(), "montant": "98000.50", "nb_contrats": 12}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut query = TableQuery::new("montant");
    query.on_sort("nom", SortOrder::Asc);
    query.on_page_change(2);
    query.set_search("besan");
    let ticket = query.begin_fetch();

    let client = ApiClient::new(&settings_for(&server)).unwrap();
    let page = client
        .liste_acheteurs(&ParamsStructuresAgg::from_ticket(&ticket))
        .await
        .unwrap();

    assert!(query.complete_fetch(&ticket, page.total));
    assert_eq!(query.total_records(), 241);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].montant, 98_000.50);
}

#[tokio::test]
async fn marches_listing_deserializes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/marche/"))
        .and(query_param("objet", "voirie"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "uid": 12,
            "id": "20231234500",
            "acheteur": {
                "uid": 3,
                "identifiant": "21250056800011",
                "type_identifiant": "SIRET",
                "nom": "COMMUNE DE BESANCON",
                "vendeur": false,
                "acheteur": true
            },
            "objet": "Réfection de la voirie communale",
            "cpv": {"code": "45233141", "libelle": "Travaux d'entretien routier"},
            "categorie": "Travaux",
            "sous_traitance_declaree": false,
            "date_notification": "2023-04-17",
            "duree_mois": 18,
            "montant": "125000.00",
            "titulaires": [structure_json()],
            "considerations_sociales": [],
            "considerations_environnementales": ["Clause environnementale"]
        }])))
        .mount(&server)
        .await;

    let mut query = TableQuery::new("date_notification")
        .with_quiet_period(std::time::Duration::ZERO);
    query.set_search("voirie");
    // Quiet period elapsed: consume the pending search before fetching.
    assert!(query.take_due_search());
    let ticket = query.begin_fetch();

    let client = ApiClient::new(&settings_for(&server)).unwrap();
    let marches = client
        .liste_marches(&decp_client::FiltresMarches::from_ticket(&ticket))
        .await
        .unwrap();

    assert_eq!(marches.len(), 1);
    assert_eq!(marches[0].montant, 125_000.0);
    assert_eq!(marches[0].titulaires[0].nom.as_deref(), Some("EIFFAGE ROUTE"));
}

#[tokio::test]
async fn unknown_identifier_resolves_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/structure/SIRET/00000000000000"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ApiClient::new(&settings_for(&server)).unwrap();
    let found = client
        .structure_par_identifiant(IdentifiantStructure::Siret, "00000000000000")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn acheteur_uid_prefers_known_uid() {
    // No mock mounted: a request would fail, proving none is made.
    let server = MockServer::start().await;
    let client = ApiClient::new(&settings_for(&server)).unwrap();
    let uid = client
        .acheteur_uid(Some(42), Some("21250056800011"))
        .await
        .unwrap();
    assert_eq!(uid, Some(42));
}

#[tokio::test]
async fn acheteur_uid_falls_back_to_siret_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/structure/SIRET/21250056800011"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uid": 3,
            "identifiant": "21250056800011",
            "type_identifiant": "SIRET",
            "nom": "COMMUNE DE BESANCON",
            "vendeur": false,
            "acheteur": true
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(&settings_for(&server)).unwrap();
    let uid = client
        .acheteur_uid(None, Some("21250056800011"))
        .await
        .unwrap();
    assert_eq!(uid, Some(3));
}
