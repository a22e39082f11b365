use reqwest::Response;
use tracing::debug;

use crate::{resource::ResourceRequest, CheckError, Config};

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Config,
}

impl Client {
    pub fn new(config: Config) -> Result<Self, CheckError> {
        let http = reqwest::Client::builder()
            .default_headers(config.auth().header_map()?)
            .build()?;

        Ok(Client { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn root(&self) -> Result<Response, CheckError> {
        let url = self.config.base_url();
        debug!(%url, "GET");

        Ok(self.http.get(url).send().await?)
    }

    pub async fn create(&self, req: &ResourceRequest) -> Result<Response, CheckError> {
        let url = self.config.resources_url();
        debug!(%url, ?req, "POST");

        Ok(self.http.post(url).json(req).send().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Response, CheckError> {
        let url = self.config.resource_url(id);
        debug!(%url, "GET");

        Ok(self.http.get(url).send().await?)
    }

    pub async fn delete(&self, id: &str) -> Result<Response, CheckError> {
        let url = self.config.resource_url(id);
        debug!(%url, "DELETE");

        Ok(self.http.delete(url).send().await?)
    }
}
