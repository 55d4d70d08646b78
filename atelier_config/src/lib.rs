use std::{net::IpAddr, path::Path};

use anyhow::Context;
use atelier_models::email_address::Mailbox;
use config::{File, FileFormat};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    pub submission: SubmissionConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: String,
    pub from: Mailbox,
}

/// Where accepted inquiries go. Without a recipient the endpoint only logs
/// inquiries and acknowledges them.
#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub recipient: Option<Mailbox>,
}

/// Client-side settings: the endpoint the submission client posts to.
#[derive(Debug, Deserialize)]
pub struct SubmissionConfig {
    pub endpoint: Url,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let config = load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        assert!(config.contact.recipient.is_none());
    }

    #[test]
    fn overrides_apply_in_order() {
        let base = Path::new(DEFAULT_CONFIG_PATH);
        let dir = std::env::temp_dir().join("atelier-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let overlay = dir.join("overlay.toml");
        std::fs::write(
            &overlay,
            "[contact]\nrecipient = \"Studio Inbox <hello@atelier.studio>\"\n",
        )
        .unwrap();

        let config = load(&[base, overlay.as_path()]).unwrap();
        let recipient = config.contact.recipient.unwrap();
        assert_eq!(recipient.0.name.as_deref(), Some("Studio Inbox"));
        assert_eq!(recipient.0.email.to_string(), "hello@atelier.studio");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load(&[Path::new("/nonexistent/atelier.toml")]).is_err());
    }
}
