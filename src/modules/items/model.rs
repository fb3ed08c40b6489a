use serde::Serialize;
use utoipa::{IntoParams, ToSchema};

use bastion_auth::Claims;

#[derive(Debug, Default, PartialEq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemQuery {
    /// Free-form text echoed back as `query`
    pub q: Option<String>,
}

impl ItemQuery {
    /// Builds the query from raw `key=value` pairs. A repeated `q` keeps its
    /// last value and unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let q = pairs
            .into_iter()
            .filter(|(key, _)| key == "q")
            .map(|(_, value)| value)
            .last();

        Self { q }
    }
}

/// An item has no backing store; the lookup echoes its inputs.
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse {
    pub item_id: i64,
    pub query: Option<String>,
    /// Claims of the verified bearer token, exactly as signed
    #[schema(value_type = Object)]
    pub user: Claims,
}
