//! CLI argument definitions for the decp explorer.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use decp_model::{CategorieMarche, IdentifiantStructure};

#[derive(Parser)]
#[command(
    name = "decp",
    version,
    about = "Browse and export French public-procurement data",
    long_about = "Browse marchés publics, concession contracts and buyer/supplier\n\
                  aggregates from a DECP listing API, and export any page as\n\
                  CSV, PDF or XLSX."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Deployment settings file (JSON).
    #[arg(long = "settings", value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,

    /// API base URL (overrides the settings file).
    #[arg(long = "api-base", value_name = "URL", global = true)]
    pub api_base: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List or export contract awards.
    Marches(MarchesArgs),

    /// List or export concession contracts.
    Concessions(ConcessionsArgs),

    /// List or export aggregated buyers.
    Acheteurs(StructuresArgs),

    /// List or export aggregated suppliers.
    Vendeurs(StructuresArgs),

    /// Look up a single structure by identifier.
    Structure(StructureArgs),
}

#[derive(Args)]
pub struct PageArgs {
    /// Page index, 0-based.
    #[arg(long = "page", default_value_t = 0)]
    pub page: usize,

    /// Rows per page (10, 25 or 50).
    #[arg(long = "page-size", default_value_t = 10)]
    pub page_size: usize,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Export the page instead of printing it.
    #[arg(long = "export", value_enum)]
    pub export: Option<ExportFormatArg>,

    /// Directory the export is written to.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// File name without extension (default: the listing name).
    #[arg(long = "file-name", value_name = "NAME")]
    pub file_name: Option<String>,

    /// Document title (PDF export only).
    #[arg(long = "title", value_name = "TITLE")]
    pub title: Option<String>,
}

#[derive(Args)]
pub struct MarchesArgs {
    #[command(flatten)]
    pub page: PageArgs,

    #[command(flatten)]
    pub export: ExportArgs,

    /// Substring search on the contract object.
    #[arg(long = "objet")]
    pub objet: Option<String>,

    /// CPV code prefix.
    #[arg(long = "cpv")]
    pub cpv: Option<String>,

    /// Contract category (Travaux, Fournitures, Services).
    #[arg(long = "categorie")]
    pub categorie: Option<CategorieMarche>,

    /// Earliest notification date (YYYY-MM-DD).
    #[arg(long = "date-debut")]
    pub date_debut: Option<NaiveDate>,

    /// Latest notification date (YYYY-MM-DD).
    #[arg(long = "date-fin")]
    pub date_fin: Option<NaiveDate>,

    /// Restrict to one buyer.
    #[arg(long = "acheteur-uid")]
    pub acheteur_uid: Option<i64>,

    /// Restrict to one supplier.
    #[arg(long = "vendeur-uid")]
    pub vendeur_uid: Option<i64>,
}

#[derive(Args)]
pub struct ConcessionsArgs {
    #[command(flatten)]
    pub page: PageArgs,

    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(Args)]
pub struct StructuresArgs {
    #[command(flatten)]
    pub page: PageArgs,

    #[command(flatten)]
    pub export: ExportArgs,

    /// Sort field.
    #[arg(long = "sort", value_enum, default_value = "montant")]
    pub sort: SortFieldArg,

    /// Sort direction.
    #[arg(long = "ordre", value_enum, default_value = "desc")]
    pub ordre: OrdreArg,

    /// Substring search on name or identifier.
    #[arg(long = "filtre")]
    pub filtre: Option<String>,

    /// Contract category filter (Travaux, Fournitures, Services).
    #[arg(long = "categorie")]
    pub categorie: Option<CategorieMarche>,

    /// Earliest notification date (YYYY-MM-DD).
    #[arg(long = "date-debut")]
    pub date_debut: Option<NaiveDate>,

    /// Latest notification date (YYYY-MM-DD).
    #[arg(long = "date-fin")]
    pub date_fin: Option<NaiveDate>,

    /// For acheteurs: keep buyers a given supplier worked for.
    #[arg(long = "vendeur-uid")]
    pub vendeur_uid: Option<i64>,

    /// For vendeurs: keep suppliers awarded by a given buyer.
    #[arg(long = "acheteur-uid")]
    pub acheteur_uid: Option<i64>,
}

#[derive(Args)]
pub struct StructureArgs {
    /// The identifier to look up, e.g. a 14-digit SIRET.
    #[arg(value_name = "IDENTIFIANT")]
    pub identifiant: String,

    /// Identifier scheme.
    #[arg(long = "type-id", default_value = "SIRET")]
    pub type_id: IdentifiantStructure,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortFieldArg {
    Montant,
    Contrats,
    Nom,
}

impl SortFieldArg {
    /// The table-state sort field this argument stands for.
    pub fn as_field(self) -> &'static str {
        match self {
            Self::Montant => "montant",
            Self::Contrats => "nb_contrats",
            Self::Nom => "nom",
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrdreArg {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Pdf,
    Xlsx,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sort_fields_map_to_wire_names() {
        assert_eq!(SortFieldArg::Montant.as_field(), "montant");
        assert_eq!(SortFieldArg::Contrats.as_field(), "nb_contrats");
        assert_eq!(SortFieldArg::Nom.as_field(), "nom");
    }
}
