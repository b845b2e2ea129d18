use std::str::FromStr;

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(AppError::BadRequest("Invalid sort parameter".to_string())),
        }
    }
}

/// The sort token is kept raw so that an unknown value maps to our own 400 body.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListItemsQuery {
    /// `asc` (default) or `desc`, ordering by price.
    pub sort: Option<String>,
}

impl ListItemsQuery {
    pub fn sort_order(&self) -> Result<SortOrder, AppError> {
        match self.sort.as_deref() {
            None => Ok(SortOrder::default()),
            Some(token) => token.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_defaults_to_ascending() {
        let query = ListItemsQuery::default();
        assert_eq!(query.sort_order().unwrap(), SortOrder::Asc);
    }

    #[test]
    fn sort_tokens_are_case_sensitive() {
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("DESC".parse::<SortOrder>().is_err());
        assert!("price".parse::<SortOrder>().is_err());
    }
}
