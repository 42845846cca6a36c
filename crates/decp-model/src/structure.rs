//! Buyer and supplier entities ("structures").

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::montant;

/// Sentinel name used by publishers for undisclosed counterparties.
pub const NOM_NON_DIFFUSIBLE: &str = "[ND]";

/// A public-sector buyer or a supplier, as referenced from contracts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub uid: i64,
    pub identifiant: String,
    pub type_identifiant: String,
    pub nom: Option<String>,
    #[serde(default)]
    pub vendeur: bool,
    #[serde(default)]
    pub acheteur: bool,
}

/// A structure enriched with registry data (SIRENE and friends).
///
/// Every extended field is optional: the registry lookup is best-effort
/// and older records carry nothing beyond the base identification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureEtendue {
    #[serde(flatten)]
    pub base: Structure,
    #[serde(default)]
    pub denomination: Option<String>,
    #[serde(default)]
    pub sigle: Option<String>,
    #[serde(default)]
    pub adresse: Option<String>,
    #[serde(default)]
    pub cat_juridique: Option<String>,
    #[serde(default)]
    pub naf: Option<String>,
    #[serde(default)]
    pub effectifs: Option<String>,
    #[serde(default)]
    pub date_effectifs: Option<i32>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub date_creation: Option<NaiveDate>,
}

/// One structure with its contract totals, as returned by the
/// `/structure/acheteur` and `/structure/vendeur` aggregations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureAggMarches {
    pub structure: Structure,
    #[serde(deserialize_with = "montant::de_f64")]
    pub montant: f64,
    pub nb_contrats: u64,
}

/// Pagination envelope of the aggregated structure listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub total: u64,
    pub items: Vec<T>,
}
