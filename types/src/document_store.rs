//! Resolves content hashes to downloadable locations.

use crate::score_report::ContentHash;

/// Anything that can turn a content hash into a URL.
pub trait DocumentStore {
    fn resolve(&self, hash: &ContentHash) -> String;
}

/// Resolves hashes through a public IPFS HTTP gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpfsGateway {
    base: String,
}

impl IpfsGateway {
    pub const DEFAULT_BASE: &'static str = "https://ipfs.io/ipfs/";

    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl Default for IpfsGateway {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE)
    }
}

impl DocumentStore for IpfsGateway {
    fn resolve(&self, hash: &ContentHash) -> String {
        format!(
            "{}/{}",
            self.base.trim_end_matches('/'),
            hash.as_str().trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gateway_resolves_cid() {
        let url = IpfsGateway::default().resolve(&ContentHash::new("QmAbc"));
        assert_eq!(url, "https://ipfs.io/ipfs/QmAbc");
    }

    #[test]
    fn slashes_are_not_doubled() {
        let hash = ContentHash::new("QmAbc");
        assert_eq!(
            IpfsGateway::new("https://gw.example/ipfs").resolve(&hash),
            "https://gw.example/ipfs/QmAbc"
        );
        assert_eq!(
            IpfsGateway::new("https://gw.example/ipfs//").resolve(&hash),
            "https://gw.example/ipfs/QmAbc"
        );
    }
}
