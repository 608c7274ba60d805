/// Why an outgoing message was not drafted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectionReason {
    #[error("Message content is empty")]
    EmptyContent,

    #[error("Property not found: {0}")]
    UnknownProperty(String),

    #[error("No receiver can be resolved for property {property_id}")]
    UnresolvableReceiver { property_id: String },
}

/// Coarse classification the UI uses to pick feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    Validation,
    UnresolvableReceiver,
}

impl RejectionReason {
    pub fn kind(&self) -> RejectionKind {
        match self {
            RejectionReason::EmptyContent | RejectionReason::UnknownProperty(_) => {
                RejectionKind::Validation
            }
            RejectionReason::UnresolvableReceiver { .. } => RejectionKind::UnresolvableReceiver,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Property not found: {0}")]
    UnknownProperty(String),
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FavoriteError {
    #[error("Only buyers can save favorites (user {0})")]
    SellerCannotFavorite(String),
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListingError {
    #[error("Only sellers can add properties (user {0})")]
    NotASeller(String),

    #[error("Listing is owned by {owner}, not {user}")]
    WrongSeller { owner: String, user: String },

    #[error("Please fill in all required fields: {0}")]
    MissingField(&'static str),
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}
