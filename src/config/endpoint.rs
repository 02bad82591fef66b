//! Analysis service endpoint configuration

/// Where the desktop build sends uploads unless `--server` says otherwise.
/// The browser build always posts to the page's own origin.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

pub struct EndpointConfig {
    /// Path of the analysis route, relative to the server root
    pub analyze_path: &'static str,
    /// Multipart field the backend reads the CSV from
    pub file_field: &'static str,
    /// Content type attached to the uploaded part
    pub csv_mime: &'static str,
    /// Name used for the part when the upload has no file name of its own
    pub fallback_file_name: &'static str,
}

pub const ENDPOINT: EndpointConfig = EndpointConfig {
    analyze_path: "/analyze",
    file_field: "file",
    csv_mime: "text/csv",
    fallback_file_name: "upload.csv",
};

impl EndpointConfig {
    /// Joins a server root and the analysis path, tolerating a trailing slash.
    pub fn analyze_url(&self, server: &str) -> String {
        format!("{}{}", server.trim_end_matches('/'), self.analyze_path)
    }
}
