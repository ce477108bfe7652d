#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorApiConfig {
    pub detector_api_base_url: String,
    // e.g.: socks5://192.168.1.1:9000
    pub detector_api_proxy: Option<String>,
}
