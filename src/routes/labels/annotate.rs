use crate::access;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::labels;
use crate::models;
use crate::routes::require_user;
use crate::views;
use actix_web::{post, web, Responder, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use serde_valid::Validate;
use std::sync::Arc;

/// Runs the whole CSV-to-labels batch on an uploaded document. Everything is
/// validated before the transform starts; a parse failure anywhere aborts
/// with no partial result. Parsing runs inline on the handler, label files
/// of a small shop are a few dozen pages.
#[tracing::instrument(name = "Annotate shipping labels.", skip(user, form))]
#[post("/annotate")]
pub async fn annotate_handler(
    user: Option<web::ReqData<Arc<models::AuthUser>>>,
    form: web::Json<forms::labels::AnnotateRequest>,
) -> Result<impl Responder> {
    let user = require_user(user)?;
    let now = Utc::now();

    let requirement = access::Feature::LabelSku.requirement();
    if !access::feature_access(&user.entitlement, requirement, now) {
        return Err(JsonResponse::<views::labels::Annotated>::build().forbidden("access denied"));
    }

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::labels::Annotated>::build().form_error(errors.to_string()));
    }

    let pdf_bytes = STANDARD.decode(form.pdf.as_bytes()).map_err(|err| {
        tracing::error!("invalid base64 document: {:?}", err);
        JsonResponse::<views::labels::Annotated>::build().bad_request("the document is not valid base64")
    })?;

    let table = labels::CsvTable::parse(&form.csv).map_err(|err| {
        JsonResponse::<views::labels::Annotated>::build().bad_request(&err.to_string())
    })?;

    let roles = labels::ColumnRoles::resolve(
        &table.headers,
        form.sku_column,
        form.order_column,
        form.quantity_column,
    )
    .map_err(|err| {
        JsonResponse::<views::labels::Annotated>::build().bad_request(&err.to_string())
    })?;

    let outcome = labels::annotate_labels(&pdf_bytes, &table, &roles, &form.placement())
        .map_err(|err| {
            tracing::error!("label batch failed: {:?}", err);
            JsonResponse::<views::labels::Annotated>::build().bad_request(&err.to_string())
        })?;

    Ok(JsonResponse::build()
        .set_item(views::labels::Annotated::from(outcome))
        .ok("OK"))
}
