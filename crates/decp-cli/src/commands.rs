//! Command implementations: fetch one page through the table-state
//! controller, then print or export it.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing::info;

use decp_client::{ApiClient, FiltresMarches, ParamsStructuresAgg, Settings};
use decp_export::{ExportFormat, export_to_file};
use decp_format::{format_currency, structure_name};
use decp_table::{ROWS_PER_PAGE_OPTIONS, SortOrder, TableQuery};

use crate::cli::{
    ConcessionsArgs, ExportArgs, ExportFormatArg, MarchesArgs, OrdreArg, StructureArgs,
    StructuresArgs,
};
use crate::preview;

/// Build the query state a one-shot invocation stands for, replaying
/// the dashboard's event order: sort, then search, then page click.
/// The quiet period is zero so the search is consumable immediately.
fn prepared_query(
    sort_field: &str,
    sort_order: SortOrder,
    page: usize,
    page_size: usize,
    search: Option<&str>,
) -> Result<TableQuery> {
    let mut query = TableQuery::new(sort_field).with_quiet_period(Duration::ZERO);
    if !query.set_rows(page_size) {
        bail!("page size must be one of {ROWS_PER_PAGE_OPTIONS:?}");
    }
    query.on_sort(sort_field, sort_order);
    if let Some(text) = search {
        query.set_search(text);
        query.take_due_search();
    }
    query.on_page_change(page);
    Ok(query)
}

fn export_format(args: &ExportArgs) -> Option<ExportFormat> {
    args.export.map(|format| match format {
        ExportFormatArg::Csv => ExportFormat::Csv,
        ExportFormatArg::Pdf => ExportFormat::Pdf,
        ExportFormatArg::Xlsx => ExportFormat::Xlsx,
    })
}

fn default_title(label: &str, settings: &Settings) -> String {
    let deployment = settings.opsn_region();
    if deployment.is_empty() {
        label.to_string()
    } else {
        format!("{label} — {deployment}")
    }
}

pub async fn run_marches(settings: &Settings, args: &MarchesArgs) -> Result<()> {
    let client = ApiClient::new(settings)?;
    let mut query = prepared_query(
        "date_notification",
        SortOrder::Asc,
        args.page.page,
        args.page.page_size,
        args.objet.as_deref(),
    )?;
    let ticket = query.begin_fetch();

    let filtres = FiltresMarches {
        date_debut: args.date_debut.or(settings.date_min),
        date_fin: args.date_fin,
        acheteur_uid: args.acheteur_uid,
        vendeur_uid: args.vendeur_uid,
        cpv: args.cpv.clone(),
        categorie: args.categorie,
        ..FiltresMarches::from_ticket(&ticket)
    };
    let marches = match client.liste_marches(&filtres).await {
        Ok(marches) => marches,
        Err(error) => {
            query.fail_fetch(&ticket);
            return Err(error).context("fetch marchés");
        }
    };
    query.complete_fetch(&ticket, marches.len() as u64);
    info!(rows = marches.len(), offset = ticket.offset, "marchés fetched");

    if let Some(format) = export_format(&args.export) {
        let file_name = args.export.file_name.as_deref().unwrap_or("marches");
        let title = args
            .export
            .title
            .clone()
            .unwrap_or_else(|| default_title("Marchés publics", settings));
        let path =
            export_to_file(&marches, format, &title, &args.export.output_dir, file_name)?;
        println!("{}", path.display());
    } else {
        preview::print_page(&marches);
        let total: f64 = marches.iter().map(|marche| marche.montant).sum();
        println!(
            "{} marchés affichés — montant total: {}",
            marches.len(),
            format_currency(total)
        );
    }
    Ok(())
}

pub async fn run_concessions(settings: &Settings, args: &ConcessionsArgs) -> Result<()> {
    let client = ApiClient::new(settings)?;
    let mut query = prepared_query(
        "date_signature",
        SortOrder::Asc,
        args.page.page,
        args.page.page_size,
        None,
    )?;
    let ticket = query.begin_fetch();

    let concessions = match client.liste_concessions(ticket.limit, ticket.offset).await {
        Ok(concessions) => concessions,
        Err(error) => {
            query.fail_fetch(&ticket);
            return Err(error).context("fetch concessions");
        }
    };
    query.complete_fetch(&ticket, concessions.len() as u64);
    info!(rows = concessions.len(), offset = ticket.offset, "concessions fetched");

    if let Some(format) = export_format(&args.export) {
        let file_name = args.export.file_name.as_deref().unwrap_or("concessions");
        let title = args
            .export
            .title
            .clone()
            .unwrap_or_else(|| default_title("Contrats de concession", settings));
        let path = export_to_file(
            &concessions,
            format,
            &title,
            &args.export.output_dir,
            file_name,
        )?;
        println!("{}", path.display());
    } else {
        preview::print_page(&concessions);
    }
    Ok(())
}

pub async fn run_structures(
    settings: &Settings,
    args: &StructuresArgs,
    acheteurs: bool,
) -> Result<()> {
    let client = ApiClient::new(settings)?;
    let order = match args.ordre {
        OrdreArg::Asc => SortOrder::Asc,
        OrdreArg::Desc => SortOrder::Desc,
    };
    let mut query = prepared_query(
        args.sort.as_field(),
        order,
        args.page.page,
        args.page.page_size,
        args.filtre.as_deref(),
    )?;
    let ticket = query.begin_fetch();

    let params = ParamsStructuresAgg {
        date_debut: args.date_debut.or(settings.date_min),
        date_fin: args.date_fin,
        categorie: args.categorie,
        vendeur_uid: args.vendeur_uid,
        acheteur_uid: args.acheteur_uid,
        ..ParamsStructuresAgg::from_ticket(&ticket)
    };
    let label = if acheteurs { "acheteurs" } else { "vendeurs" };
    let page = if acheteurs {
        client.liste_acheteurs(&params).await
    } else {
        client.liste_vendeurs(&params).await
    };
    let page = match page {
        Ok(page) => page,
        Err(error) => {
            query.fail_fetch(&ticket);
            return Err(error).with_context(|| format!("fetch {label}"));
        }
    };
    query.complete_fetch(&ticket, page.total);
    info!(rows = page.items.len(), total = page.total, "{label} fetched");

    if let Some(format) = export_format(&args.export) {
        let file_name = args.export.file_name.as_deref().unwrap_or(label);
        let title = args.export.title.clone().unwrap_or_else(|| {
            default_title(
                if acheteurs { "Acheteurs" } else { "Vendeurs" },
                settings,
            )
        });
        let path = export_to_file(
            &page.items,
            format,
            &title,
            &args.export.output_dir,
            file_name,
        )?;
        println!("{}", path.display());
    } else {
        preview::print_page(&page.items);
        let montant: f64 = page.items.iter().map(|item| item.montant).sum();
        println!(
            "{} {label} affichés sur {} — montant de la page: {}",
            page.items.len(),
            query.total_records(),
            format_currency(montant)
        );
    }
    Ok(())
}

pub async fn run_structure(settings: &Settings, args: &StructureArgs) -> Result<()> {
    let client = ApiClient::new(settings)?;
    let found = client
        .structure_par_identifiant(args.type_id, &args.identifiant)
        .await
        .context("lookup structure")?;

    let Some(structure) = found else {
        println!("Aucune structure pour {}:{}", args.type_id, args.identifiant);
        return Ok(());
    };

    println!("{}", structure_name(Some(&structure.base)));
    println!("uid: {}", structure.base.uid);
    println!(
        "identifiant: {}:{}",
        structure.base.type_identifiant, structure.base.identifiant
    );
    if let Some(denomination) = &structure.denomination {
        println!("dénomination: {denomination}");
    }
    if let Some(sigle) = &structure.sigle {
        println!("sigle: {sigle}");
    }
    if let Some(adresse) = &structure.adresse {
        println!("adresse: {adresse}");
    }
    if let Some(naf) = &structure.naf {
        println!("naf: {naf}");
    }
    if let Some(date_creation) = structure.date_creation {
        println!("créée le: {}", decp_format::format_date(date_creation));
    }
    let roles = match (structure.base.acheteur, structure.base.vendeur) {
        (true, true) => "acheteur, vendeur",
        (true, false) => "acheteur",
        (false, true) => "vendeur",
        (false, false) => "aucun rôle connu",
    };
    println!("rôles: {roles}");
    Ok(())
}
