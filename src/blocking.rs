use reqwest::blocking::Response;
use tracing::debug;

use crate::{resource::ResourceRequest, CheckError, Config};

// Must not be created or dropped inside an async runtime.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::blocking::Client,
    config: Config,
}

impl Client {
    pub fn new(config: Config) -> Result<Self, CheckError> {
        let http = reqwest::blocking::Client::builder()
            .default_headers(config.auth().header_map()?)
            .build()?;

        Ok(Client { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn root(&self) -> Result<Response, CheckError> {
        let url = self.config.base_url();
        debug!(%url, "GET");

        Ok(self.http.get(url).send()?)
    }

    pub fn create(&self, req: &ResourceRequest) -> Result<Response, CheckError> {
        let url = self.config.resources_url();
        debug!(%url, ?req, "POST");

        Ok(self.http.post(url).json(req).send()?)
    }

    pub fn get(&self, id: &str) -> Result<Response, CheckError> {
        let url = self.config.resource_url(id);
        debug!(%url, "GET");

        Ok(self.http.get(url).send()?)
    }

    pub fn delete(&self, id: &str) -> Result<Response, CheckError> {
        let url = self.config.resource_url(id);
        debug!(%url, "DELETE");

        Ok(self.http.delete(url).send()?)
    }
}
