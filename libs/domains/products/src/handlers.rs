//! HTTP handlers for Products API

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{OperationError, ProductError, ProductOperation};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::responses::{
    CreateFailure, MessageBody, OperationFailure, ProductCreated, ProductFound, ProductList,
    ProductUpdated, RetrievalFailure, ValidationFailure,
};
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        patch_product,
        delete_product,
    ),
    components(schemas(
        Product,
        CreateProduct,
        UpdateProduct,
        ProductCreated,
        ProductList,
        ProductFound,
        ProductUpdated,
        MessageBody,
        ValidationFailure,
        CreateFailure,
        OperationFailure,
        RetrievalFailure,
    )),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

type SharedService<R> = State<Arc<ProductService<R>>>;

/// Create the products router. Nest it under the products prefix.
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{item_id}",
            get(get_product)
                .put(update_product)
                .patch(patch_product)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// Body rejections (malformed JSON, missing fields, wrong content type) are validation failures.
fn payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    operation: ProductOperation,
) -> Result<T, OperationError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ProductError::Validation(rejection.body_text()).during(operation))
}

/// Create a product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created", body = ProductCreated),
        (status = 400, description = "Invalid payload", body = ValidationFailure),
        (status = 500, description = "Storage failure", body = CreateFailure)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): SharedService<R>,
    input: Result<Json<CreateProduct>, JsonRejection>,
) -> Result<Json<ProductCreated>, OperationError> {
    let op = ProductOperation::Create;
    let input = payload(input, op)?;

    let product = service.create_product(input).await.map_err(|e| e.during(op))?;
    Ok(Json(ProductCreated {
        message: "Product data inserted".to_string(),
        data: product,
    }))
}

/// List enabled products, oldest first
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "Enabled products", body = ProductList),
        (status = 404, description = "No enabled products", body = MessageBody),
        (status = 500, description = "Storage failure", body = OperationFailure)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): SharedService<R>,
) -> Result<Json<ProductList>, OperationError> {
    let products = service
        .list_products()
        .await
        .map_err(|e| e.during(ProductOperation::List))?;

    Ok(Json(ProductList {
        message: "success".to_string(),
        product: products,
    }))
}

/// Get a product by item id, disabled products included
#[utoipa::path(
    get,
    path = "/{item_id}",
    tag = "Products",
    params(
        ("item_id" = String, Path, description = "Product item id", example = "ITM-01")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductFound),
        (status = 404, description = "Unknown item id", body = MessageBody),
        (status = 500, description = "Storage failure", body = RetrievalFailure)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): SharedService<R>,
    Path(item_id): Path<String>,
) -> Result<Json<ProductFound>, OperationError> {
    let product = service
        .get_product(&item_id)
        .await
        .map_err(|e| e.during(ProductOperation::Get))?;

    Ok(Json(ProductFound { product }))
}

/// Update a product (partial fields)
#[utoipa::path(
    put,
    path = "/{item_id}",
    tag = "Products",
    params(
        ("item_id" = String, Path, description = "Product item id", example = "ITM-01")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = ProductUpdated),
        (status = 400, description = "Invalid payload", body = ValidationFailure),
        (status = 404, description = "Unknown item id", body = MessageBody),
        (status = 500, description = "Storage failure", body = OperationFailure)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): SharedService<R>,
    Path(item_id): Path<String>,
    input: Result<Json<UpdateProduct>, JsonRejection>,
) -> Result<Json<ProductUpdated>, OperationError> {
    let op = ProductOperation::Update;
    let input = payload(input, op)?;

    let product = service
        .update_product(&item_id, input)
        .await
        .map_err(|e| e.during(op))?;

    Ok(Json(ProductUpdated {
        message: "Product updated successfully".to_string(),
        product,
    }))
}

/// Update a product (partial fields); same as PUT
#[utoipa::path(
    patch,
    path = "/{item_id}",
    tag = "Products",
    params(
        ("item_id" = String, Path, description = "Product item id", example = "ITM-01")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = ProductUpdated),
        (status = 400, description = "Invalid payload", body = ValidationFailure),
        (status = 404, description = "Unknown item id", body = MessageBody),
        (status = 500, description = "Storage failure", body = OperationFailure)
    )
)]
async fn patch_product<R: ProductRepository>(
    service: SharedService<R>,
    item_id: Path<String>,
    input: Result<Json<UpdateProduct>, JsonRejection>,
) -> Result<Json<ProductUpdated>, OperationError> {
    update_product(service, item_id, input).await
}

/// Soft-delete a product
#[utoipa::path(
    delete,
    path = "/{item_id}",
    tag = "Products",
    params(
        ("item_id" = String, Path, description = "Product item id", example = "ITM-01")
    ),
    responses(
        (status = 200, description = "Product disabled", body = MessageBody),
        (status = 404, description = "Unknown item id", body = MessageBody),
        (status = 500, description = "Storage failure", body = OperationFailure)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): SharedService<R>,
    Path(item_id): Path<String>,
) -> Result<Json<MessageBody>, OperationError> {
    service
        .delete_product(&item_id)
        .await
        .map_err(|e| e.during(ProductOperation::Delete))?;

    Ok(Json(MessageBody {
        message: "Product deleted successfully".to_string(),
    }))
}
