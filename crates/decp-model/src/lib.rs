//! Data model for DECP (données essentielles de la commande publique)
//! records: contract awards, concession contracts, and the buyer/supplier
//! structures they reference.
//!
//! The shapes mirror the JSON emitted by the listing API; see the
//! individual modules for the endpoint each type belongs to.

pub mod concession;
pub mod enums;
pub mod error;
pub mod marche;
mod montant;
pub mod structure;

pub use concession::ContratConcession;
pub use enums::{
    CategorieMarche, Ccag, ConsiderationEnvironnementale, ConsiderationSociale,
    IdentifiantStructure, NatureMarche, ProcedureMarche, TechniqueAchat,
};
pub use error::{DecpError, Result};
pub use marche::{Cpv, MarcheAllege};
pub use structure::{
    NOM_NON_DIFFUSIBLE, Paginated, Structure, StructureAggMarches, StructureEtendue,
};
