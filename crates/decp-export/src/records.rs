//! Row formatting: one [`TableRecord`] implementation per exportable
//! record kind, each aligned to its fixed column set.

use decp_format::{format_boolean, format_date, structure_name};
use decp_model::{ContratConcession, MarcheAllege, Structure, StructureAggMarches};

use crate::table::{Cell, Column, LINE_SEPARATOR, TableRecord};

const MARCHE_COLUMNS: [Column; 11] = [
    Column { label: "ID", width_mm: Some(25.0) },
    Column { label: "CPV", width_mm: Some(20.0) },
    Column { label: "Objet", width_mm: Some(70.0) },
    Column { label: "Acheteur", width_mm: Some(30.0) },
    Column { label: "Fournisseur", width_mm: Some(30.0) },
    Column { label: "Sous\n-trait", width_mm: Some(13.0) },
    Column { label: "Cons \nEnv", width_mm: Some(13.0) },
    Column { label: "Cons \nSoc", width_mm: Some(13.0) },
    Column { label: "Date", width_mm: Some(22.0) },
    Column { label: "Durée \n(mois)", width_mm: Some(15.0) },
    Column { label: "Montant", width_mm: Some(25.0) },
];

const CONCESSION_COLUMNS: [Column; 6] = [
    Column { label: "ID", width_mm: None },
    Column { label: "Objet", width_mm: None },
    Column { label: "Concessionnaires", width_mm: None },
    Column { label: "Date \nsignature", width_mm: None },
    Column { label: "Date \nexec", width_mm: None },
    Column { label: "Valeur \nglobale", width_mm: None },
];

const STRUCTURE_COLUMNS: [Column; 3] = [
    Column { label: "Nom", width_mm: None },
    Column { label: "Montant", width_mm: None },
    Column { label: "Contrats", width_mm: None },
];

fn joined_names(structures: &[Structure]) -> String {
    structures
        .iter()
        .map(|s| structure_name(Some(s)))
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR)
}

impl TableRecord for MarcheAllege {
    fn columns() -> &'static [Column] {
        &MARCHE_COLUMNS
    }

    fn to_row(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.id.clone()),
            Cell::Text(format!(
                "{}{LINE_SEPARATOR}{}",
                self.cpv.code, self.cpv.libelle
            )),
            Cell::Text(self.objet.clone()),
            Cell::Text(structure_name(Some(&self.acheteur))),
            Cell::Text(joined_names(&self.titulaires)),
            Cell::Text(format_boolean(self.sous_traitance_declaree).to_string()),
            Cell::Text(
                format_boolean(!self.considerations_environnementales.is_empty())
                    .to_string(),
            ),
            Cell::Text(
                format_boolean(!self.considerations_sociales.is_empty()).to_string(),
            ),
            Cell::Text(format_date(self.date_notification)),
            self.duree_mois
                .map_or(Cell::Empty, |months| Cell::Int(i64::from(months))),
            Cell::Number(self.montant),
        ]
    }
}

impl TableRecord for ContratConcession {
    fn columns() -> &'static [Column] {
        &CONCESSION_COLUMNS
    }

    fn to_row(&self) -> Vec<Cell> {
        vec![
            Cell::Int(self.id),
            Cell::Text(self.objet.clone()),
            Cell::Text(joined_names(&self.concessionnaires)),
            Cell::Text(format_date(self.date_signature)),
            Cell::Text(format_date(self.date_debut_execution)),
            Cell::Number(self.valeur_globale),
        ]
    }
}

impl TableRecord for StructureAggMarches {
    fn columns() -> &'static [Column] {
        &STRUCTURE_COLUMNS
    }

    fn to_row(&self) -> Vec<Cell> {
        vec![
            Cell::Text(structure_name(Some(&self.structure))),
            Cell::Number(self.montant),
            Cell::Int(self.nb_contrats as i64),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titulaire(nom: &str) -> Structure {
        Structure {
            nom: Some(nom.to_string()),
            ..Structure::default()
        }
    }

    #[test]
    fn rows_align_with_columns() {
        let agg = StructureAggMarches {
            structure: titulaire("EIFFAGE ROUTE"),
            montant: 98_000.5,
            nb_contrats: 12,
        };
        assert_eq!(agg.to_row().len(), StructureAggMarches::columns().len());
        assert_eq!(
            agg.to_row(),
            vec![
                Cell::Text("EIFFAGE ROUTE".to_string()),
                Cell::Number(98_000.5),
                Cell::Int(12),
            ]
        );
    }

    #[test]
    fn titulaires_join_with_line_separator() {
        assert_eq!(
            joined_names(&[titulaire("A"), titulaire("B")]),
            "A \nB"
        );
    }
}
