use crate::error::ClientError;
use crate::types::*;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

pub struct WaniKaniClient {
    client: Client,
    config: ClientConfig,
}

impl WaniKaniClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ClientError> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path
        ))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.config.api_token))
            .header("Wanikani-Revision", &self.config.revision)
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let resp = self.authorized(builder).send().await?;
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok());
            return Err(ClientError::RateLimited { retry_after });
        }

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api { status: status.as_u16(), message });
        }

        resp.json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Follow `pages.next_url` from `first` and concatenate every page.
    async fn collect_pages<T: DeserializeOwned>(
        &self,
        first: Url,
    ) -> Result<Vec<Resource<T>>, ClientError> {
        let mut items = Vec::new();
        let mut next = Some(first);

        while let Some(url) = next.take() {
            tracing::debug!(url = %url, "Fetching collection page");
            let page: Collection<T> = self.send(self.client.get(url.clone())).await?;
            items.extend(page.data);

            if let Some(raw) = page.pages.next_url {
                let parsed = Url::parse(&raw)?;
                if parsed == url {
                    return Err(ClientError::InvalidResponse(format!(
                        "pagination loop at {raw}"
                    )));
                }
                next = Some(parsed);
            }
        }

        Ok(items)
    }

    pub async fn user(&self) -> Result<User, ClientError> {
        let url = self.endpoint("user", &[])?;
        let resource: Resource<User> = self.send(self.client.get(url)).await?;
        Ok(resource.data)
    }

    pub async fn subjects(
        &self,
        types: &[&str],
        levels: &[u32],
    ) -> Result<Vec<Resource<Subject>>, ClientError> {
        let url = self.endpoint("subjects", &filter_query("types", types, levels))?;
        self.collect_pages(url).await
    }

    /// Assignments of unlocked subjects only.
    pub async fn assignments(
        &self,
        subject_types: &[&str],
        levels: &[u32],
    ) -> Result<Vec<Resource<Assignment>>, ClientError> {
        let mut query = filter_query("subject_types", subject_types, levels);
        query.push(("unlocked", "true".to_string()));
        let url = self.endpoint("assignments", &query)?;
        self.collect_pages(url).await
    }

    pub async fn study_materials(&self) -> Result<Vec<Resource<StudyMaterial>>, ClientError> {
        let url = self.endpoint("study_materials", &[])?;
        self.collect_pages(url).await
    }

    pub async fn create_study_material(
        &self,
        study_material: StudyMaterialCreate,
    ) -> Result<Resource<StudyMaterial>, ClientError> {
        let url = self.endpoint("study_materials", &[])?;
        let body = StudyMaterialBody { study_material };
        self.send(self.client.post(url).json(&body)).await
    }

    /// Replace the synonym list of study material `id`.
    pub async fn update_study_material(
        &self,
        id: u64,
        meaning_synonyms: Vec<String>,
    ) -> Result<Resource<StudyMaterial>, ClientError> {
        let url = self.endpoint(&format!("study_materials/{id}"), &[])?;
        let body = StudyMaterialBody { study_material: StudyMaterialUpdate { meaning_synonyms } };
        self.send(self.client.put(url).json(&body)).await
    }
}

fn filter_query(type_key: &'static str, types: &[&str], levels: &[u32]) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if !types.is_empty() {
        query.push((type_key, types.join(",")));
    }
    if !levels.is_empty() {
        let levels: Vec<String> = levels.iter().map(u32::to_string).collect();
        query.push(("levels", levels.join(",")));
    }
    query
}
