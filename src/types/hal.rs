//! HAL (`application/hal+json`) representations.
//!
//! An entity renders its own fields flattened next to `_links`; a collection
//! renders its items under `_embedded.<kind>List`, omitting `_embedded` when
//! there are no items.

use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

use crate::error::PayrollError;

pub const HAL_JSON: &str = "application/hal+json";
pub const SELF_REL: &str = "self";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// Link relations in insertion order, `self` first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    entries: Vec<(&'static str, Link)>,
}

impl Links {
    pub fn with_self(link: Link) -> Self {
        Self {
            entries: vec![(SELF_REL, link)],
        }
    }

    pub fn and(mut self, rel: &'static str, link: Link) -> Self {
        self.entries.push((rel, link));
        self
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.entries.iter().find(|(r, _)| *r == rel).map(|(_, l)| l)
    }

    pub fn self_link(&self) -> Option<&Link> {
        self.get(SELF_REL)
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (rel, link) in &self.entries {
            map.serialize_entry(rel, link)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct EntityModel<T> {
    #[serde(flatten)]
    pub content: T,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> EntityModel<T> {
    pub fn new(content: T, links: Links) -> Self {
        Self { content, links }
    }

    pub fn self_href(&self) -> Option<&str> {
        self.links.self_link().map(|l| l.href.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct CollectionModel<T> {
    pub rel: String,
    pub items: Vec<EntityModel<T>>,
    pub links: Links,
}

impl<T: Serialize> Serialize for CollectionModel<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.items.is_empty() { 1 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        if !self.items.is_empty() {
            let embedded: BTreeMap<&str, &[EntityModel<T>]> =
                BTreeMap::from([(self.rel.as_str(), self.items.as_slice())]);
            map.serialize_entry("_embedded", &embedded)?;
        }
        map.serialize_entry("_links", &self.links)?;
        map.end()
    }
}

/// Response body serialized as JSON with a `application/hal+json` content type.
#[derive(Debug, Clone)]
pub struct Hal<T>(pub T);

impl<T: Serialize> IntoResponse for Hal<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(body) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static(HAL_JSON))],
                body,
            )
                .into_response(),
            Err(e) => PayrollError::Json(e).into_response(),
        }
    }
}
