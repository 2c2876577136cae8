use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::endpoints::{create_url, list_url};
use crate::{ApiConfig, ApiError, DataEntry, NewEntry, ReqwestTransport, Transport};

/// Typed access to the data service's list and create operations.
#[derive(Debug, Clone)]
pub struct DataClient<T = ReqwestTransport> {
    config: ApiConfig,
    transport: T,
}

impl DataClient<ReqwestTransport> {
    /// Client configured from `OPENATLAS_API_URL` over `reqwest`.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env(), ReqwestTransport::default())
    }
}

impl<T: Transport> DataClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch every entry. Only a `200` is success; the body may be a bare
    /// array or an object wrapping the array in `data`.
    pub async fn list_entries(&self) -> Result<Vec<DataEntry>, ApiError> {
        let base = self.config.base_url().ok_or(ApiError::MissingBaseUrl)?;
        let url = list_url(base);
        debug!(%url, "fetching data entries");

        let response = self.transport.get(&url).await.inspect_err(|err| {
            warn!(%url, error = %err, "data entry fetch failed");
        })?;

        if response.status != 200 {
            warn!(%url, status = response.status, "data entry fetch rejected");
            return Err(ApiError::Status {
                status: response.status,
            });
        }

        let entries = decode_entry_list(&response.body)?;
        debug!(count = entries.len(), "data entries received");
        Ok(entries)
    }

    /// Create an entry. Returns the service's JSON body on success.
    ///
    /// A body that is not JSON is read as `{}`. A non-empty string `message`
    /// in the body marks the request as failed whatever the status.
    pub async fn create_entry(&self, entry: &NewEntry) -> Result<Value, ApiError> {
        let base = self.config.base_url().ok_or(ApiError::MissingBaseUrl)?;
        let url = create_url(base);
        debug!(%url, title = %entry.title, tags = entry.tags.len(), "submitting data entry");

        let response = self.transport.post_json(&url, entry).await.inspect_err(|err| {
            warn!(%url, error = %err, "data entry submission failed");
        })?;

        let body: Value = serde_json::from_str(&response.body)
            .unwrap_or_else(|_| Value::Object(Map::new()));

        if let Some(message) = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
        {
            warn!(status = response.status, %message, "data service rejected submission");
            return Err(ApiError::Service {
                status: response.status,
                message: message.to_string(),
            });
        }

        if !response.is_success() {
            warn!(status = response.status, "data service rejected submission");
            return Err(ApiError::Status {
                status: response.status,
            });
        }

        Ok(body)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EntryListBody {
    Wrapped { data: Vec<DataEntry> },
    Bare(Vec<DataEntry>),
}

fn decode_entry_list(body: &str) -> Result<Vec<DataEntry>, ApiError> {
    match serde_json::from_str::<EntryListBody>(body) {
        Ok(EntryListBody::Wrapped { data }) => Ok(data),
        Ok(EntryListBody::Bare(entries)) => Ok(entries),
        Err(err) => Err(ApiError::Decode(err.to_string())),
    }
}
