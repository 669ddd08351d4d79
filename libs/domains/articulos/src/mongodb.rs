//! MongoDB implementation of ArticuloRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use database::mongodb::SharedMongoClient;
use mongodb::{
    Collection, IndexModel,
    bson::{self, Document, doc, oid::ObjectId},
    options::ReturnDocument,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use validator::Validate;

use crate::error::{ArticuloError, ArticuloResult};
use crate::models::{Articulo, ArticuloFilter, CreateArticulo, UpdateArticulo};
use crate::repository::ArticuloRepository;

/// Default collection name
pub const COLLECTION_NAME: &str = "articulos";

/// Stored shape of an articulo
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticuloDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub nombre: String,
    pub marca: String,
    pub fecha_modificacion: bson::DateTime,
    pub estado_activacion: bool,
}

impl From<ArticuloDocument> for Articulo {
    fn from(doc: ArticuloDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            nombre: doc.nombre,
            marca: doc.marca,
            fecha_modificacion: DateTime::<Utc>::from_timestamp_millis(
                doc.fecha_modificacion.timestamp_millis(),
            )
            .unwrap_or_default(),
            estado_activacion: doc.estado_activacion,
        }
    }
}

/// MongoDB implementation of the ArticuloRepository
///
/// Holds the process-wide shared client, so the connection is opened by the
/// first operation that needs it.
pub struct MongoArticuloRepository {
    client: SharedMongoClient,
    collection_name: String,
}

impl MongoArticuloRepository {
    /// Create a new MongoArticuloRepository on the `articulos` collection
    ///
    /// # Example
    /// ```ignore
    /// let client = SharedMongoClient::new(MongoConfig::from_env()?);
    /// let repo = MongoArticuloRepository::new(client);
    /// ```
    pub fn new(client: SharedMongoClient) -> Self {
        Self::with_collection(client, COLLECTION_NAME)
    }

    /// Create a new MongoArticuloRepository with a custom collection name
    pub fn with_collection(client: SharedMongoClient, collection_name: &str) -> Self {
        Self {
            client,
            collection_name: collection_name.to_string(),
        }
    }

    async fn collection(&self) -> ArticuloResult<Collection<ArticuloDocument>> {
        let db = self.client.database().await?;
        Ok(db.collection::<ArticuloDocument>(&self.collection_name))
    }

    /// Create the indexes used by name and activation filtering and by the
    /// default sort. Idempotent.
    pub async fn init_indexes(&self) -> ArticuloResult<()> {
        let indexes = vec![
            IndexModel::builder().keys(doc! { "nombre": 1 }).build(),
            IndexModel::builder()
                .keys(doc! { "estadoActivacion": 1 })
                .build(),
            IndexModel::builder()
                .keys(doc! { "fechaModificacion": -1 })
                .build(),
        ];

        self.collection().await?.create_indexes(indexes).await?;
        tracing::info!(collection = %self.collection_name, "Articulo indexes ensured");
        Ok(())
    }

    /// Build a MongoDB filter document from ArticuloFilter
    fn build_filter(filter: &ArticuloFilter) -> Document {
        let mut doc = doc! {};

        if let Some(ref nombre) = filter.nombre {
            // Literal, case-insensitive substring match
            doc.insert(
                "nombre",
                doc! { "$regex": regex::escape(nombre), "$options": "i" },
            );
        }

        if let Some(estado) = filter.estado_activacion {
            doc.insert("estadoActivacion", estado);
        }

        doc
    }

    /// Build the update document from an already trimmed DTO. `$max` keeps
    /// `fechaModificacion` from moving backwards.
    fn build_update(input: &UpdateArticulo, now: bson::DateTime) -> Document {
        let mut set = doc! {};

        if let Some(ref nombre) = input.nombre {
            set.insert("nombre", nombre.as_str());
        }
        if let Some(ref marca) = input.marca {
            set.insert("marca", marca.as_str());
        }
        if let Some(estado) = input.estado_activacion {
            set.insert("estadoActivacion", estado);
        }

        let mut update = doc! { "$max": { "fechaModificacion": now } };
        if !set.is_empty() {
            update.insert("$set", set);
        }
        update
    }
}

#[async_trait]
impl ArticuloRepository for MongoArticuloRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ObjectId) -> ArticuloResult<Option<Articulo>> {
        let articulo = self
            .collection()
            .await?
            .find_one(doc! { "_id": id })
            .await?;
        Ok(articulo.map(Articulo::from))
    }

    #[instrument(skip(self))]
    async fn find(&self, filter: ArticuloFilter) -> ArticuloResult<Vec<Articulo>> {
        use futures_util::TryStreamExt;

        let cursor = self
            .collection()
            .await?
            .find(Self::build_filter(&filter))
            .sort(doc! { "fechaModificacion": -1 })
            .await?;
        let documents: Vec<ArticuloDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(Articulo::from).collect())
    }

    #[instrument(skip(self, input), fields(nombre = %input.nombre))]
    async fn insert(&self, input: CreateArticulo) -> ArticuloResult<Articulo> {
        let stored = input.trimmed();
        stored.validate()?;

        let document = ArticuloDocument {
            id: ObjectId::new(),
            nombre: stored.nombre,
            marca: stored.marca,
            fecha_modificacion: bson::DateTime::now(),
            estado_activacion: true,
        };

        self.collection().await?.insert_one(&document).await?;

        tracing::info!(articulo_id = %document.id, "Articulo created successfully");
        Ok(document.into())
    }

    #[instrument(skip(self, input))]
    async fn update_by_id(&self, id: ObjectId, input: UpdateArticulo) -> ArticuloResult<Articulo> {
        let stored = input.trimmed();
        stored.validate()?;

        let update = Self::build_update(&stored, bson::DateTime::now());
        let updated = self
            .collection()
            .await?
            .find_one_and_update(doc! { "_id": id }, update)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| ArticuloError::NotFound(id.to_hex()))?;

        tracing::info!(articulo_id = %id, "Articulo updated successfully");
        Ok(updated.into())
    }
}
