//! HTTP client for the listing and lookup endpoints.

use reqwest::StatusCode;
use url::Url;

use decp_model::{
    ContratConcession, IdentifiantStructure, MarcheAllege, Paginated,
    StructureAggMarches, StructureEtendue,
};

use crate::error::Result;
use crate::params::{FiltresMarches, ParamsStructuresAgg};
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Build a client against the API base of `settings`.
    pub fn new(settings: &Settings) -> Result<Self> {
        // A trailing slash keeps Url::join from eating the last path
        // segment of the base.
        let mut base = settings.api.base.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base: Url::parse(&base)?,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    /// One page of contract awards, `GET /marche/`.
    pub async fn liste_marches(
        &self,
        filtres: &FiltresMarches,
    ) -> Result<Vec<MarcheAllege>> {
        let url = self.endpoint("marche/")?;
        tracing::debug!(%url, "fetching marchés");
        let response = self
            .http
            .get(url)
            .query(filtres)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// One page of concession contracts, `GET /contrat-concession/`.
    pub async fn liste_concessions(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ContratConcession>> {
        let url = self.endpoint("contrat-concession/")?;
        tracing::debug!(%url, limit, offset, "fetching concessions");
        let response = self
            .http
            .get(url)
            .query(&[("limit", limit), ("offset", offset)])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Aggregated buyers page, `GET /structure/acheteur`.
    pub async fn liste_acheteurs(
        &self,
        params: &ParamsStructuresAgg,
    ) -> Result<Paginated<StructureAggMarches>> {
        self.liste_structures_agg("structure/acheteur", params).await
    }

    /// Aggregated suppliers page, `GET /structure/vendeur`.
    pub async fn liste_vendeurs(
        &self,
        params: &ParamsStructuresAgg,
    ) -> Result<Paginated<StructureAggMarches>> {
        self.liste_structures_agg("structure/vendeur", params).await
    }

    async fn liste_structures_agg(
        &self,
        path: &str,
        params: &ParamsStructuresAgg,
    ) -> Result<Paginated<StructureAggMarches>> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, offset = params.offset, "fetching structure aggregates");
        let response = self
            .http
            .get(url)
            .query(params)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// A single structure by uid, `GET /structure/{uid}`.
    pub async fn structure(&self, uid: i64) -> Result<StructureEtendue> {
        let url = self.endpoint(&format!("structure/{uid}"))?;
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// A single structure by identifier, `GET /structure/{type_id}/{id}`.
    /// Unknown identifiers come back as `None`, not as an error.
    pub async fn structure_par_identifiant(
        &self,
        type_id: IdentifiantStructure,
        identifiant: &str,
    ) -> Result<Option<StructureEtendue>> {
        let url = self.endpoint(&format!("structure/{type_id}/{identifiant}"))?;
        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(%identifiant, "structure not found");
            return Ok(None);
        }
        Ok(Some(response.error_for_status()?.json().await?))
    }

    /// Resolve a buyer uid: an already-known non-negative uid wins,
    /// otherwise the SIRET is looked up. `None` means the buyer record
    /// is still being imported and the caller should retry later.
    pub async fn acheteur_uid(
        &self,
        uid: Option<i64>,
        siret: Option<&str>,
    ) -> Result<Option<i64>> {
        if let Some(uid) = uid
            && uid >= 0
        {
            return Ok(Some(uid));
        }
        if let Some(siret) = siret
            && let Some(structure) = self
                .structure_par_identifiant(IdentifiantStructure::Siret, siret)
                .await?
        {
            return Ok(Some(structure.base.uid));
        }
        Ok(None)
    }
}
