use crate::db::Record;
use crate::types::hal::{CollectionModel, EntityModel, Link, Links};
use std::sync::Arc;
use url::Url;

/// Wraps records into HAL representations with absolute links under a fixed base URL.
#[derive(Debug, Clone)]
pub struct ResourceMapper {
    base: Arc<str>,
}

impl ResourceMapper {
    pub fn new(public_url: &Url) -> Self {
        Self {
            base: public_url.as_str().trim_end_matches('/').into(),
        }
    }

    pub fn collection_href<R: Record>(&self) -> String {
        format!("{}/{}", self.base, R::COLLECTION)
    }

    pub fn item_href<R: Record>(&self, id: i64) -> String {
        format!("{}/{}/{}", self.base, R::COLLECTION, id)
    }

    pub fn to_model<R: Record>(&self, record: R) -> EntityModel<R> {
        let links = Links::with_self(Link::new(self.item_href::<R>(record.id())))
            .and(R::COLLECTION, Link::new(self.collection_href::<R>()));
        EntityModel::new(record, links)
    }

    pub fn to_collection<R: Record>(&self, records: Vec<R>) -> CollectionModel<R> {
        CollectionModel {
            rel: R::embedded_rel(),
            items: records.into_iter().map(|r| self.to_model(r)).collect(),
            links: Links::with_self(Link::new(self.collection_href::<R>())),
        }
    }
}
