//! Repository tests against a live MongoDB
//!
//! Run with `MONGODB_URL` pointing at a disposable server and `--ignored`.
//! Each test works in its own collection.

use database::mongodb::{MongoConfig, SharedMongoClient};
use domain_articulos::{
    ArticuloError, ArticuloFilter, ArticuloRepository, CreateArticulo, MongoArticuloRepository,
    UpdateArticulo,
};
use mongodb::bson::oid::ObjectId;

fn repository(test_name: &str) -> MongoArticuloRepository {
    let url =
        std::env::var("MONGODB_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let client = SharedMongoClient::new(MongoConfig::with_database(url, "articulos_test"));
    let collection = format!("articulos_{}_{}", test_name, ObjectId::new().to_hex());
    MongoArticuloRepository::with_collection(client, &collection)
}

fn create(nombre: &str, marca: &str) -> CreateArticulo {
    CreateArticulo {
        nombre: nombre.to_string(),
        marca: marca.to_string(),
    }
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn test_insert_find_update_deactivate() {
    let repo = repository("lifecycle");
    repo.init_indexes().await.unwrap();

    let created = repo.insert(create("Celular", "Apple")).await.unwrap();
    assert!(created.estado_activacion);

    let id = ObjectId::parse_str(&created.id).unwrap();
    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found, created);

    let updated = repo
        .update_by_id(
            id,
            UpdateArticulo {
                marca: Some("Samsung".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.nombre, "Celular");
    assert_eq!(updated.marca, "Samsung");
    assert!(updated.fecha_modificacion >= created.fecha_modificacion);

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let touched = repo
        .update_by_id(
            id,
            UpdateArticulo {
                nombre: Some("Celular".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(touched.fecha_modificacion > updated.fecha_modificacion);

    let first = repo.deactivate_by_id(id).await.unwrap();
    let second = repo.deactivate_by_id(id).await.unwrap();
    assert!(!first.estado_activacion);
    assert!(!second.estado_activacion);
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn test_find_filters_and_sort() {
    let repo = repository("filters");

    repo.insert(create("Celular", "Apple")).await.unwrap();
    repo.insert(create("Tablet", "Lenovo")).await.unwrap();
    let premium = repo.insert(create("Celular Premium", "Samsung")).await.unwrap();
    repo.deactivate_by_id(ObjectId::parse_str(&premium.id).unwrap())
        .await
        .unwrap();

    let all = repo.find(ArticuloFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(
        all.windows(2)
            .all(|w| w[0].fecha_modificacion >= w[1].fecha_modificacion)
    );

    let cel = repo
        .find(ArticuloFilter {
            nombre: Some("cel".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(cel.len(), 2);

    let active_cel = repo
        .find(ArticuloFilter {
            nombre: Some("CEL".to_string()),
            estado_activacion: Some(true),
        })
        .await
        .unwrap();
    assert_eq!(active_cel.len(), 1);
    assert_eq!(active_cel[0].nombre, "Celular");

    // Metacharacters match literally
    let none = repo
        .find(ArticuloFilter {
            nombre: Some(".*".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
#[ignore] // Requires actual MongoDB
async fn test_update_missing_is_not_found() {
    let repo = repository("missing");
    let result = repo
        .update_by_id(ObjectId::new(), UpdateArticulo::deactivate())
        .await;
    assert!(matches!(result, Err(ArticuloError::NotFound(_))));
    assert!(repo.find_by_id(ObjectId::new()).await.unwrap().is_none());
}
