//! Domain enumerations for French public-procurement records.
//!
//! The remote API serializes every enum as its French display label
//! (e.g. `"Critère social"`), so the serde representations here are the
//! labels themselves, not identifier-style tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DecpError;

/// Major category of a contract, derived from its CPV code.
///
/// Works contracts start with CPV division 45, divisions 50 and above are
/// services, everything else is supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategorieMarche {
    #[serde(rename = "Travaux")]
    Travaux,
    #[serde(rename = "Fournitures")]
    Fournitures,
    #[serde(rename = "Services")]
    Services,
}

impl CategorieMarche {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Travaux => "Travaux",
            Self::Fournitures => "Fournitures",
            Self::Services => "Services",
        }
    }
}

impl fmt::Display for CategorieMarche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategorieMarche {
    type Err = DecpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Travaux" => Ok(Self::Travaux),
            "Fournitures" => Ok(Self::Fournitures),
            "Services" => Ok(Self::Services),
            other => Err(DecpError::UnknownLabel {
                kind: "categorie",
                value: other.to_string(),
            }),
        }
    }
}

/// Nature of a contract award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NatureMarche {
    #[serde(rename = "Marché")]
    Marche,
    #[serde(rename = "Marché de partenariat")]
    Partenariat,
    #[serde(rename = "Marché de défense ou de sécurité")]
    DefenseSecurite,
}

impl NatureMarche {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Marche => "Marché",
            Self::Partenariat => "Marché de partenariat",
            Self::DefenseSecurite => "Marché de défense ou de sécurité",
        }
    }
}

impl fmt::Display for NatureMarche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Award procedure of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcedureMarche {
    #[serde(rename = "Procédure adaptée")]
    Adaptee,
    #[serde(rename = "Appel d'offres ouvert")]
    AppelOffresOuvert,
    #[serde(rename = "Appel d'offres restreint")]
    AppelOffresRestreint,
    #[serde(rename = "Marché passé sans publicité ni mise en concurrence préalable")]
    SansPublicite,
    #[serde(rename = "Dialogue compétitif")]
    DialogueCompetitif,
    #[serde(rename = "Procédure avec négociation")]
    AvecNegociation,
}

impl ProcedureMarche {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adaptee => "Procédure adaptée",
            Self::AppelOffresOuvert => "Appel d'offres ouvert",
            Self::AppelOffresRestreint => "Appel d'offres restreint",
            Self::SansPublicite => {
                "Marché passé sans publicité ni mise en concurrence préalable"
            }
            Self::DialogueCompetitif => "Dialogue compétitif",
            Self::AvecNegociation => "Procédure avec négociation",
        }
    }
}

impl fmt::Display for ProcedureMarche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cahier des clauses administratives générales de référence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ccag {
    #[serde(rename = "Travaux")]
    Travaux,
    #[serde(rename = "Maitrise d'œuvre")]
    MaitriseOeuvre,
    #[serde(rename = "Fournitures courantes et services")]
    Fournitures,
    #[serde(rename = "Marchés industriels")]
    Industriels,
    #[serde(rename = "Prestations intellectuelles")]
    PrestationsIntellectuelles,
    #[serde(rename = "Techniques de l'information et de la communication")]
    Tic,
    #[serde(rename = "Pas de CCAG")]
    Aucun,
}

impl Ccag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Travaux => "Travaux",
            Self::MaitriseOeuvre => "Maitrise d'œuvre",
            Self::Fournitures => "Fournitures courantes et services",
            Self::Industriels => "Marchés industriels",
            Self::PrestationsIntellectuelles => "Prestations intellectuelles",
            Self::Tic => "Techniques de l'information et de la communication",
            Self::Aucun => "Pas de CCAG",
        }
    }
}

impl fmt::Display for Ccag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Social consideration attached to a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsiderationSociale {
    #[serde(rename = "Critère social")]
    Critere,
    #[serde(rename = "Clause sociale")]
    Clause,
    #[serde(rename = "Marché réservé")]
    MarcheReserve,
    #[serde(rename = "Concession réservé")]
    ConcessionReservee,
    #[serde(rename = "Pas de considération sociale")]
    Aucune,
}

impl ConsiderationSociale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critere => "Critère social",
            Self::Clause => "Clause sociale",
            Self::MarcheReserve => "Marché réservé",
            Self::ConcessionReservee => "Concession réservé",
            Self::Aucune => "Pas de considération sociale",
        }
    }
}

impl fmt::Display for ConsiderationSociale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Environmental consideration attached to a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsiderationEnvironnementale {
    #[serde(rename = "Critère environnemental")]
    Critere,
    #[serde(rename = "Clause environnementale")]
    Clause,
    #[serde(rename = "Pas de considération environnementale")]
    Aucune,
}

impl ConsiderationEnvironnementale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critere => "Critère environnemental",
            Self::Clause => "Clause environnementale",
            Self::Aucune => "Pas de considération environnementale",
        }
    }
}

impl fmt::Display for ConsiderationEnvironnementale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Purchasing technique used for a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechniqueAchat {
    #[serde(rename = "Accord-cadre")]
    AccordCadre,
    #[serde(rename = "Concours")]
    Concours,
    #[serde(rename = "Système de qualification")]
    SystemeQualification,
    #[serde(rename = "Système d'acquisition dynamique")]
    AcquisitionDynamique,
    #[serde(rename = "Catalogue électronique")]
    CatalogueElectronique,
    #[serde(rename = "Enchère électronique")]
    EnchereElectronique,
    #[serde(rename = "Sans objet")]
    SansObjet,
}

impl TechniqueAchat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccordCadre => "Accord-cadre",
            Self::Concours => "Concours",
            Self::SystemeQualification => "Système de qualification",
            Self::AcquisitionDynamique => "Système d'acquisition dynamique",
            Self::CatalogueElectronique => "Catalogue électronique",
            Self::EnchereElectronique => "Enchère électronique",
            Self::SansObjet => "Sans objet",
        }
    }
}

impl fmt::Display for TechniqueAchat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier scheme of a structure. SIRET for mainland establishments,
/// the rest cover overseas registries and foreign operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifiantStructure {
    #[serde(rename = "SIRET")]
    Siret,
    #[serde(rename = "TVA")]
    Tva,
    #[serde(rename = "TAHITI")]
    Tahiti,
    #[serde(rename = "RIDET")]
    Ridet,
    #[serde(rename = "FRWF")]
    Frwf,
    #[serde(rename = "IREP")]
    Irep,
    #[serde(rename = "UE")]
    Ue,
    #[serde(rename = "HORS-UE")]
    HorsUe,
}

impl IdentifiantStructure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Siret => "SIRET",
            Self::Tva => "TVA",
            Self::Tahiti => "TAHITI",
            Self::Ridet => "RIDET",
            Self::Frwf => "FRWF",
            Self::Irep => "IREP",
            Self::Ue => "UE",
            Self::HorsUe => "HORS-UE",
        }
    }
}

impl fmt::Display for IdentifiantStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifiantStructure {
    type Err = DecpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SIRET" => Ok(Self::Siret),
            "TVA" => Ok(Self::Tva),
            "TAHITI" => Ok(Self::Tahiti),
            "RIDET" => Ok(Self::Ridet),
            "FRWF" => Ok(Self::Frwf),
            "IREP" => Ok(Self::Irep),
            "UE" => Ok(Self::Ue),
            "HORS-UE" => Ok(Self::HorsUe),
            other => Err(DecpError::UnknownLabel {
                kind: "type d'identifiant",
                value: other.to_string(),
            }),
        }
    }
}
