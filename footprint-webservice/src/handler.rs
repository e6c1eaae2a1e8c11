use axum::Json;
use validator::Validate;

use footprint_core::{calculate_carbon_footprint, CarbonFootprintInput};

use crate::{
    error::AppError,
    model::{CalculateRequest, CalculateResponse, ErrorResponse as ModelErrorResponse},
};

#[utoipa::path(
    post,
    path = "/calculate",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Footprint calculated.", body = CalculateResponse),
        (status = 400, description = "Invalid request payload.", body = ModelErrorResponse),
        (status = 500, description = "Internal server error.", body = ModelErrorResponse)
    ),
    tag = "Footprint Webservice"
)]
pub async fn calculate_handler(
    Json(payload): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, AppError> {
    tracing::debug!(target: "footprint_webservice::handler", "Received footprint calculation request");

    // Reject negative quantities before the engine runs; the engine
    // itself only sees validated numeric-or-absent fields.
    payload.validate()?;

    let input: CarbonFootprintInput = payload.into();
    let output = calculate_carbon_footprint(&input);

    tracing::info!(
        target: "footprint_webservice::handler",
        "Footprint calculated: scope1={} scope2={} scope3={} total={} kg CO2e",
        output.scope1_total,
        output.scope2_total,
        output.scope3_total,
        output.total_footprint
    );

    Ok(Json(output.into()))
}
