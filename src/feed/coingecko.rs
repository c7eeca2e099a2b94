use super::{Payload, Requester};
use crate::error::Error;
use crate::marketdata::Asset;

use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};

pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

pub struct CoingeckoRequester {
    reqwest_client: Client,
    base_url: String,
}

impl CoingeckoRequester {
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(COINGECKO_BASE_URL)
    }

    pub fn with_base_url<S: Into<String>>(base_url: S) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert(
            "User-Agent",
            HeaderValue::from_static(concat!("converter-rs/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|error| Error::new_feed(format!("failed to init reqwest : {error}")))?;

        Ok(Self {
            reqwest_client: client,
            base_url: base_url.into(),
        })
    }

    fn build_url(&self, assets: &[Asset]) -> String {
        let ids = assets
            .iter()
            .map(|asset| asset.id)
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "{}/simple/price?ids={}&vs_currencies=usd&include_24hr_change=true",
            self.base_url.trim_end_matches('/'),
            ids
        )
    }
}

impl Requester for CoingeckoRequester {
    fn request(&self, assets: &[Asset]) -> Result<Payload, Error> {
        let url = self.build_url(assets);
        debug!("request prices from url {}", url);
        let output = self
            .reqwest_client
            .get(&url)
            .send()
            .map_err(|error| Error::new_feed(format!("failed to request prices error:{error}")))?
            .error_for_status()
            .map_err(|error| Error::new_feed(format!("price source refused request error:{error}")))?
            .text()
            .map_err(|error| {
                Error::new_feed(format!("failed to read body from price request error:{error}"))
            })?;
        debug!("request result: {}", output);
        let payload: Payload = serde_json::from_str(&output)?;
        info!("request prices done, {} quotes received", payload.len());
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::feed::RawQuote;
    use crate::marketdata::ASSETS;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    /// Serves a single canned HTTP response, the handle yields the request line.
    fn serve_once_(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/api/v3", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut lines = BufReader::new(&mut stream).lines();
            let request_line = lines.next().unwrap().unwrap();
            for line in lines {
                if line.unwrap().is_empty() {
                    break;
                }
            }
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request_line
        });
        (base_url, handle)
    }

    #[test]
    fn url() {
        let requester = CoingeckoRequester::new().unwrap();
        assert_eq!(
            requester.build_url(&ASSETS),
            "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin,ethereum,tether,binancecoin,ripple,solana,usd,eur,gbp&vs_currencies=usd&include_24hr_change=true"
        );

        let requester = CoingeckoRequester::with_base_url("http://localhost:8080/api/").unwrap();
        assert_eq!(
            requester.build_url(&ASSETS[..2]),
            "http://localhost:8080/api/simple/price?ids=bitcoin,ethereum&vs_currencies=usd&include_24hr_change=true"
        );
    }

    #[test]
    fn unreachable_source() {
        let requester = CoingeckoRequester::with_base_url("http://127.0.0.1:1").unwrap();
        let result = requester.request(&ASSETS);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind, ErrorKind::Feed);
    }

    #[test]
    fn prices_from_server() {
        let (base_url, handle) = serve_once_(
            "200 OK",
            r#"{"bitcoin":{"usd":60000.5,"usd_24h_change":-1.5},"ethereum":{"usd":3000}}"#,
        );
        let requester = CoingeckoRequester::with_base_url(base_url).unwrap();
        let payload = requester.request(&ASSETS[..2]).unwrap();

        assert_eq!(payload.len(), 2);
        assert_eq!(payload["bitcoin"], RawQuote::new(60000.5, -1.5));
        assert_eq!(payload["ethereum"].usd, Some(3000.0));
        assert_eq!(payload["ethereum"].usd_24h_change, None);
        assert_eq!(
            handle.join().unwrap(),
            "GET /api/v3/simple/price?ids=bitcoin,ethereum&vs_currencies=usd&include_24hr_change=true HTTP/1.1"
        );
    }

    #[test]
    fn server_error_status() {
        let (base_url, handle) = serve_once_("500 Internal Server Error", r#"{"error":"boom"}"#);
        let requester = CoingeckoRequester::with_base_url(base_url).unwrap();
        let error = requester.request(&ASSETS).unwrap_err();
        assert_eq!(error.kind, ErrorKind::Feed);
        assert!(error.message.starts_with("price source refused request"));
        handle.join().unwrap();
    }

    #[test]
    fn body_not_json() {
        let (base_url, handle) = serve_once_("200 OK", "<html>rate limited</html>");
        let requester = CoingeckoRequester::with_base_url(base_url).unwrap();
        let error = requester.request(&ASSETS).unwrap_err();
        assert_eq!(error.kind, ErrorKind::Feed);
        assert!(error.message.starts_with("not json format"));
        handle.join().unwrap();
    }
}
