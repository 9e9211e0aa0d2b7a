pub mod aggregate;
pub mod client;
pub mod error;
pub mod normalize;
pub mod rate_limit;
pub mod search;
pub mod types;

pub use aggregate::{
    aggregate, AggregateConfig, AggregateOutcome, LeadSet, QueryFailure, DEFAULT_TARGET_LEADS,
};
pub use client::PlacesClient;
pub use error::PlacesError;
pub use normalize::normalize_place;
pub use rate_limit::{FixedDelay, Pacer};
pub use search::SearchClient;
pub use types::RawPlace;
