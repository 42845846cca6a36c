//! Wire query parameters of the listing endpoints.
//!
//! Field names match the API's query model exactly; `None`s are skipped
//! so the requests stay as short as the dashboard's.

use chrono::NaiveDate;
use serde::Serialize;

use decp_model::CategorieMarche;
use decp_table::{FetchTicket, SortOrder};

/// Filters of `GET /marche/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FiltresMarches {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_debut: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_fin: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acheteur_uid: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendeur_uid: Option<i64>,
    /// Substring match on the contract object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objet: Option<String>,
    /// CPV code prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorie: Option<CategorieMarche>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub montant_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub montant_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duree_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duree_max: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl FiltresMarches {
    /// Pagination and search parameters from a table-state ticket; the
    /// search text filters on the contract object.
    pub fn from_ticket(ticket: &FetchTicket) -> Self {
        Self {
            objet: (!ticket.search.is_empty()).then(|| ticket.search.clone()),
            offset: Some(ticket.offset),
            limit: Some(ticket.limit),
            ..Self::default()
        }
    }
}

/// Sortable fields of the aggregated structure listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ChampsOrdre {
    #[default]
    #[serde(rename = "montant")]
    Montant,
    #[serde(rename = "nb_contrats")]
    NbContrats,
    #[serde(rename = "nom")]
    Nom,
}

impl ChampsOrdre {
    /// Map a table-state sort field to the wire name, when it is one of
    /// the sortable aggregate fields.
    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "montant" => Some(Self::Montant),
            "nb_contrats" | "contrats" => Some(Self::NbContrats),
            "nom" => Some(Self::Nom),
            _ => None,
        }
    }
}

/// Parameters of `GET /structure/acheteur` and `GET /structure/vendeur`.
#[derive(Debug, Clone, Serialize)]
pub struct ParamsStructuresAgg {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_debut: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_fin: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categorie: Option<CategorieMarche>,
    pub champs_ordre: ChampsOrdre,
    /// `1` ascending, `-1` descending.
    pub ordre: i8,
    /// Substring match on name or identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtre: Option<String>,
    /// Restrict buyers to those a given supplier worked for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendeur_uid: Option<i64>,
    /// Restrict suppliers to those awarded by a given buyer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acheteur_uid: Option<i64>,
    pub offset: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl Default for ParamsStructuresAgg {
    fn default() -> Self {
        Self {
            date_debut: None,
            date_fin: None,
            categorie: None,
            champs_ordre: ChampsOrdre::default(),
            ordre: SortOrder::Desc.as_i8(),
            filtre: None,
            vendeur_uid: None,
            acheteur_uid: None,
            offset: 0,
            limit: None,
        }
    }
}

impl ParamsStructuresAgg {
    /// The exact parameter set a table-state ticket stands for. Sort
    /// fields the aggregation cannot order by fall back to the default
    /// (montant).
    pub fn from_ticket(ticket: &FetchTicket) -> Self {
        Self {
            champs_ordre: ChampsOrdre::from_field(&ticket.sort_field)
                .unwrap_or_default(),
            ordre: ticket.sort_order.as_i8(),
            filtre: (!ticket.search.is_empty()).then(|| ticket.search.clone()),
            offset: ticket.offset,
            limit: Some(ticket.limit),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decp_table::TableQuery;

    #[test]
    fn ticket_maps_to_aggregate_params() {
        let mut query = TableQuery::new("nom");
        query.on_sort("nom", SortOrder::Asc);
        query.on_page_change(2);
        query.set_search("besan");
        let ticket = query.begin_fetch();

        let params = ParamsStructuresAgg::from_ticket(&ticket);
        assert_eq!(params.champs_ordre, ChampsOrdre::Nom);
        assert_eq!(params.ordre, 1);
        assert_eq!(params.filtre.as_deref(), Some("besan"));
        assert_eq!(params.offset, 2 * query.rows());
        assert_eq!(params.limit, Some(query.rows()));
    }

    #[test]
    fn unknown_sort_field_falls_back_to_montant() {
        let mut query = TableQuery::new("siret");
        let ticket = query.begin_fetch();
        let params = ParamsStructuresAgg::from_ticket(&ticket);
        assert_eq!(params.champs_ordre, ChampsOrdre::Montant);
    }

    #[test]
    fn empty_search_serializes_no_filtre() {
        let params = ParamsStructuresAgg::default();
        let encoded = serde_json::to_value(&params).unwrap();
        assert!(encoded.get("filtre").is_none());
        assert_eq!(encoded["champs_ordre"], "montant");
        assert_eq!(encoded["ordre"], -1);
    }
}
