use super::{Payload, Requester};
use crate::error::Error;
use crate::marketdata::Asset;

use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Reads a price source response saved on disk, same shape as the remote one.
pub struct FileRequester {
    path: PathBuf,
}

impl FileRequester {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl Requester for FileRequester {
    fn request(&self, _assets: &[Asset]) -> Result<Payload, Error> {
        debug!("request prices from file {}", self.path.display());
        let file = File::open(&self.path).map_err(|error| {
            Error::new_feed(format!(
                "unable to open price file {} : {error}",
                self.path.display()
            ))
        })?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::marketdata::ASSETS;
    use std::io::Write;

    #[test]
    fn read_file() {
        let path = temp_path_("prices");
        let mut file = File::create(&path).unwrap();
        file.write_all(br#"{"bitcoin":{"usd":100,"usd_24h_change":1.5}}"#)
            .unwrap();

        let payload = FileRequester::new(&path).request(&ASSETS).unwrap();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload["bitcoin"].usd, Some(100.0));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file() {
        let result = FileRequester::new("/nonexistent/prices.json").request(&ASSETS);
        assert_eq!(result.unwrap_err().kind, ErrorKind::Feed);
    }

    #[test]
    fn invalid_json() {
        let path = temp_path_("invalid");
        std::fs::write(&path, "not json").unwrap();
        let result = FileRequester::new(&path).request(&ASSETS);
        assert_eq!(result.unwrap_err().kind, ErrorKind::Feed);
        std::fs::remove_file(&path).unwrap();
    }

    fn temp_path_(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("converter-rs-{}-{}.json", name, std::process::id()))
    }
}
