//! Desktop transport: multipart POST through reqwest.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::path::PathBuf;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::ENDPOINT;
use crate::data::client::{AnalysisClient, decode_response};
use crate::data::upload::CsvUpload;
use crate::engine::UploadError;
use crate::models::AnalysisResult;

#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: reqwest::Client,
    url: String,
}

impl HttpAnalysisClient {
    pub fn new(server: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: ENDPOINT.analyze_url(server),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn post_csv(&self, upload: CsvUpload) -> Result<AnalysisResult, UploadError> {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_requests {
            log::info!(
                "📤 POST {} ({}, {} bytes)",
                self.url,
                upload.file_name,
                upload.bytes.len()
            );
        }

        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(ENDPOINT.csv_mime)
            .map_err(|e| UploadError::Network(e.to_string()))?;
        let form = Form::new().part(ENDPOINT.file_field, part);

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        decode_response(status, &body)
    }
}

#[async_trait(?Send)]
impl AnalysisClient for HttpAnalysisClient {
    type Upload = PathBuf;

    async fn analyze(&self, path: PathBuf) -> Result<AnalysisResult, UploadError> {
        let upload = CsvUpload::read(&path).await?;
        self.post_csv(upload).await
    }
}
