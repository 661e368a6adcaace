//! Integration Tests for the HTTP client
//!
//! Runs the real router on an ephemeral port and drives it through
//! `HttpCatalogClient`, `ProductService` and the views.

use std::sync::Arc;
use std::time::Duration;

use product_catalog::api::create_router;
use product_catalog::client::{
    CatalogApi, ClientError, DetailView, HttpCatalogClient, ListView, ProductService,
    DEFAULT_CACHE_TTL,
};
use product_catalog::models::NewProduct;
use product_catalog::{AppState, ClientConfig};

// == Helper Functions ==

async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(AppState::default());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn new_product(name: &str, description: &str) -> NewProduct {
    NewProduct {
        name: Some(name.to_string()),
        description: Some(description.to_string()),
        price: Some(4.5),
        categories: Some(vec!["misc".to_string()]),
        stock: Some(2),
    }
}

async fn seeded_client() -> (String, HttpCatalogClient) {
    let base = spawn_server().await;
    let client = HttpCatalogClient::new(&base).unwrap();
    for (name, description) in [
        ("Desk Lamp", "warm light"),
        ("Chair", "wooden"),
        ("Lamp Post", "street lamp"),
    ] {
        client
            .create_product(&new_product(name, description))
            .await
            .unwrap();
    }
    (base, client)
}

// == Client Tests ==

#[tokio::test]
async fn test_create_and_fetch_through_client() {
    let base = spawn_server().await;
    let client = HttpCatalogClient::new(&base).unwrap();

    let created = client
        .create_product(&NewProduct {
            name: Some("Widget".into()),
            price: Some(9.99),
            stock: Some(5),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(!created.id.is_empty());

    let fetched = client.get_product(&created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_client_error_taxonomy() {
    let base = spawn_server().await;
    let client = HttpCatalogClient::new(&base).unwrap();

    let missing = client.get_product("ffffffffffffffffffffffff").await;
    assert!(matches!(missing, Err(ClientError::NotFound(_))));

    let invalid = client
        .create_product(&NewProduct {
            name: Some("No price".into()),
            stock: Some(1),
            ..Default::default()
        })
        .await;
    assert!(matches!(invalid, Err(ClientError::Validation(msg)) if msg.contains("price")));
}

#[tokio::test]
async fn test_transport_failure() {
    // Nothing listens on port 9 on the loopback interface
    let client = HttpCatalogClient::new("http://127.0.0.1:9").unwrap();
    let result = client.list(1, 10).await;
    assert!(matches!(result, Err(ClientError::Transport(_))));
}

#[tokio::test]
async fn test_search_and_list_through_client() {
    let (_, client) = seeded_client().await;

    let listed = client.list(1, 2).await.unwrap();
    assert_eq!(listed.total_count, 3);
    assert_eq!(listed.products.len(), 2);

    let searched = client.search("lamp", 1, 10).await.unwrap();
    assert_eq!(searched.total_count, 2);

    let none = client.search("zzz-no-match", 1, 10).await.unwrap();
    assert!(none.products.is_empty());
    assert_eq!(none.total_count, 0);
}

#[tokio::test]
async fn test_service_caches_single_reads() {
    let (_, client) = seeded_client().await;
    let id = client.list(1, 1).await.unwrap().products[0].id.clone();

    let mut service = ProductService::new(client, DEFAULT_CACHE_TTL);
    let first = service.get_product(&id).await.unwrap();
    let second = service.get_product(&id).await.unwrap();

    assert_eq!(first, second);
    let stats = service.cache_stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
}

#[tokio::test]
async fn test_detail_view_not_found_message() {
    let base = spawn_server().await;
    let mut service = ProductService::new(HttpCatalogClient::new(&base).unwrap(), DEFAULT_CACHE_TTL);
    let mut view = DetailView::new();

    view.load(&mut service, "ffffffffffffffffffffffff").await;
    assert!(view.product.is_none());
    assert_eq!(
        view.error_message,
        "Product with ID ffffffffffffffffffffffff not found."
    );
}

#[tokio::test]
async fn test_list_view_against_server() {
    let (base, _) = seeded_client().await;
    let api = Arc::new(HttpCatalogClient::new(&base).unwrap());
    let config = ClientConfig {
        api_url: base,
        debounce: Duration::from_millis(50),
        items_per_page: 2,
        ..ClientConfig::default()
    };
    let view = ListView::spawn(api, &config);
    let mut updates = view.subscribe();

    updates.changed().await.unwrap();
    let state = view.state();
    assert_eq!(state.total_items, 3);
    assert_eq!(state.total_pages, 2);
    assert_eq!(state.products.len(), 2);

    view.input("lamp");
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            updates.changed().await.unwrap();
            if updates.borrow().search_term == "lamp" {
                break;
            }
        }
    })
    .await
    .unwrap();

    let state = view.state();
    assert_eq!(state.total_items, 2);
    assert_eq!(state.current_page, 1);
}
