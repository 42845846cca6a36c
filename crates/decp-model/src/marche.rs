//! Contract award records ("marchés").

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{
    CategorieMarche, ConsiderationEnvironnementale, ConsiderationSociale,
};
use crate::montant;
use crate::structure::Structure;

/// A CPV classification entry (European procurement nomenclature).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cpv {
    pub code: String,
    pub libelle: String,
}

impl Cpv {
    /// Contract category implied by the CPV division (first two digits):
    /// division 45 is works, 50 and above are services, the rest are
    /// supplies. `None` when the code does not start with two digits.
    pub fn categorie(&self) -> Option<CategorieMarche> {
        let division: u32 = self.code.get(0..2)?.parse().ok()?;
        Some(match division {
            45 => CategorieMarche::Travaux,
            50.. => CategorieMarche::Services,
            _ => CategorieMarche::Fournitures,
        })
    }
}

/// The lightweight contract record used by listings and exports.
///
/// The full `MarcheDto` of the API carries procedure, pricing and
/// subcontracting details that no listing surface consumes; this shape
/// is what `/marche/` actually returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarcheAllege {
    pub uid: i64,
    pub id: String,
    pub acheteur: Structure,
    pub objet: String,
    pub cpv: Cpv,
    pub categorie: CategorieMarche,
    pub sous_traitance_declaree: bool,
    pub date_notification: NaiveDate,
    #[serde(default)]
    pub duree_mois: Option<u32>,
    #[serde(deserialize_with = "montant::de_f64")]
    pub montant: f64,
    pub titulaires: Vec<Structure>,
    #[serde(default)]
    pub considerations_sociales: Vec<ConsiderationSociale>,
    #[serde(default)]
    pub considerations_environnementales: Vec<ConsiderationEnvironnementale>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpv_division_categorisation() {
        let works = Cpv {
            code: "45112500".to_string(),
            libelle: "Travaux de terrassement".to_string(),
        };
        assert_eq!(works.categorie(), Some(CategorieMarche::Travaux));

        let services = Cpv {
            code: "72000000".to_string(),
            libelle: "Services informatiques".to_string(),
        };
        assert_eq!(services.categorie(), Some(CategorieMarche::Services));

        let supplies = Cpv {
            code: "30213100".to_string(),
            libelle: "Ordinateurs portables".to_string(),
        };
        assert_eq!(supplies.categorie(), Some(CategorieMarche::Fournitures));

        let broken = Cpv {
            code: "xx".to_string(),
            libelle: String::new(),
        };
        assert_eq!(broken.categorie(), None);
    }
}
