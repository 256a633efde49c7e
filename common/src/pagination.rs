//! Cursor pagination variables for storefront connections.

use serde::{Deserialize, Serialize};

use crate::query_params::QueryParams;
use crate::storefront_const::{CURSOR_KEY, DIRECTION_KEY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaginationVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Next,
    Previous,
}

impl PageDirection {
    pub fn as_param(&self) -> &'static str {
        match self {
            PageDirection::Next => "next",
            PageDirection::Previous => "previous",
        }
    }
}

impl PaginationVariables {
    /// Reads `cursor` and `direction`. `direction=previous` pages backwards
    /// from the cursor, anything else pages forwards.
    pub fn from_query_params(params: &QueryParams, page_by: u32) -> Self {
        let cursor = params.get(CURSOR_KEY).filter(|c| !c.is_empty()).map(str::to_string);
        let direction = match params.get(DIRECTION_KEY) {
            Some("previous") => PageDirection::Previous,
            _ => PageDirection::Next,
        };
        match direction {
            PageDirection::Previous => Self {
                last: Some(page_by),
                start_cursor: cursor,
                ..Default::default()
            },
            PageDirection::Next => Self {
                first: Some(page_by),
                end_cursor: cursor,
                ..Default::default()
            },
        }
    }
}

/// Query string for the neighbouring page, keeping every other parameter.
pub fn page_link_params(params: &QueryParams, cursor: &str, direction: PageDirection) -> QueryParams {
    params
        .with_set(CURSOR_KEY, cursor)
        .with_set(DIRECTION_KEY, direction.as_param())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_no_cursor() {
        let vars = PaginationVariables::from_query_params(&QueryParams::parse("sort=newest"), 24);
        assert_eq!(vars, PaginationVariables { first: Some(24), ..Default::default() });
        assert_eq!(serde_json::to_value(&vars).unwrap(), serde_json::json!({"first": 24}));
    }

    #[test]
    fn previous_direction_pages_backwards() {
        let params = QueryParams::parse("cursor=abc&direction=previous");
        let vars = PaginationVariables::from_query_params(&params, 24);
        assert_eq!(vars.last, Some(24));
        assert_eq!(vars.start_cursor.as_deref(), Some("abc"));
        assert_eq!(vars.first, None);
        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            serde_json::json!({"last": 24, "startCursor": "abc"})
        );
    }

    #[test]
    fn unknown_direction_pages_forwards() {
        let params = QueryParams::parse("cursor=abc&direction=sideways");
        let vars = PaginationVariables::from_query_params(&params, 10);
        assert_eq!(vars.first, Some(10));
        assert_eq!(vars.end_cursor.as_deref(), Some("abc"));
    }

    #[test]
    fn page_link_keeps_filters() {
        let params = QueryParams::parse("available=true&cursor=old&direction=previous");
        let next = page_link_params(&params, "new", PageDirection::Next);
        assert_eq!(next.to_string(), "available=true&cursor=new&direction=next");
    }
}
