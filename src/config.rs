use serde::{Deserialize, Serialize};

/// Location of a remote service, as found in a service's `Clients` configuration section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClientInfo {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_protocol")]
    pub protocol: String,
}

fn default_protocol() -> String {
    "http".to_string()
}

impl ClientInfo {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            protocol: default_protocol(),
        }
    }

    /// Base URL of the service, e.g. `http://localhost:59881`
    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_info_url_defaults_to_http() {
        let info: ClientInfo =
            serde_json::from_str(r#"{"Host": "edgex-core-metadata", "Port": 59881}"#).unwrap();
        assert_eq!(info.url(), "http://edgex-core-metadata:59881");
    }

    #[test]
    fn test_client_info_url_with_protocol() {
        let mut info = ClientInfo::new("localhost", 59880);
        info.protocol = "https".to_string();
        assert_eq!(info.url(), "https://localhost:59880");
    }
}
