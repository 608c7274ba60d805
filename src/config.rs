use crate::error::ConfigError;
use crate::filters::FilterSpec;
use std::path::PathBuf;

/// Demo configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON store snapshot; `None` runs against the seeded in-memory store.
    pub data_path: Option<PathBuf>,
    /// User whose conversations are shown.
    pub user_id: String,
    /// Directory holding key-value files such as favorites.
    pub kv_dir: PathBuf,
    pub filter: FilterSpec,
    /// Message to send on startup, as `(property_id, content)`.
    pub outgoing: Option<(String, String)>,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var            | Default           |
    /// |--------------------|-------------------|
    /// | `MARKET_DATA_PATH` | unset (in memory) |
    /// | `MARKET_USER_ID`   | `buyer-1`         |
    /// | `MARKET_KV_DIR`    | `market_kv`       |
    /// | `MARKET_SEARCH`    | empty             |
    /// | `MARKET_MAX_PRICE` | unbounded         |
    /// | `MARKET_BEDROOMS`  | `0` (any)         |
    /// | `MARKET_SEND_TO`   | unset             |
    /// | `MARKET_SEND_TEXT` | empty             |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_path = lookup("MARKET_DATA_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let user_id = lookup("MARKET_USER_ID").unwrap_or_else(|| "buyer-1".into());
        let kv_dir = lookup("MARKET_KV_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("market_kv"));

        let mut filter = FilterSpec {
            search: lookup("MARKET_SEARCH").unwrap_or_default(),
            ..FilterSpec::default()
        };
        if let Some(max_price) = parse(&lookup, "MARKET_MAX_PRICE")? {
            filter.max_price = max_price;
        }
        if let Some(bedrooms) = parse(&lookup, "MARKET_BEDROOMS")? {
            filter.bedrooms = bedrooms;
        }

        let outgoing = lookup("MARKET_SEND_TO")
            .map(|property_id| (property_id, lookup("MARKET_SEND_TEXT").unwrap_or_default()));

        Ok(Self {
            data_path,
            user_id,
            kv_dir,
            filter,
            outgoing,
        })
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(None),
    }
}
