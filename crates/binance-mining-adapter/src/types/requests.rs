/*
[INPUT]:  Caller-provided query parameters
[OUTPUT]: Ordered, form-encoded query strings
[POS]:    Data layer - request parameters before signing
[UPDATE]: When endpoints accept new parameters
*/

use url::form_urlencoded::byte_serialize;

/// Ordered `key=value` query parameters.
///
/// Insertion order is kept on the wire; the signature covers the exact
/// serialized string, so nothing may reorder it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Append a parameter only when a value is present
    pub fn push_opt<V: ToString>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize as `k1=v1&k2=v2` with form-urlencoded keys and values
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    byte_serialize(key.as_bytes()).collect::<String>(),
                    byte_serialize(value.as_bytes()).collect::<String>()
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.push(key, value);
        }
        params
    }
}

/// Filter for the mining worker and payment list endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiningQuery {
    pub algo: String,
    pub user_name: String,
    pub page_index: Option<u32>,
    pub page_size: Option<u32>,
}

impl MiningQuery {
    pub fn new(algo: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            algo: algo.into(),
            user_name: user_name.into(),
            page_index: None,
            page_size: None,
        }
    }

    /// Query for the `ethash` algorithm
    pub fn ethash(user_name: impl Into<String>) -> Self {
        Self::new("ethash", user_name)
    }

    pub fn with_page(mut self, page_index: u32, page_size: u32) -> Self {
        self.page_index = Some(page_index);
        self.page_size = Some(page_size);
        self
    }

    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push("algo", &self.algo)
            .push("userName", &self.user_name)
            .push_opt("pageIndex", self.page_index)
            .push_opt("pageSize", self.page_size);
        params
    }
}
