//! Concession contract records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::montant;
use crate::structure::Structure;

/// A concession contract as returned by `/contrat-concession/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContratConcession {
    pub uid: i64,
    pub id: i64,
    pub autorite_concedante: Structure,
    pub objet: String,
    pub concessionnaires: Vec<Structure>,
    pub date_signature: NaiveDate,
    pub date_debut_execution: NaiveDate,
    #[serde(deserialize_with = "montant::de_f64")]
    pub valeur_globale: f64,
}
