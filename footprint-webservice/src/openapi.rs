use crate::{handler, model};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::health_check,
        handler::calculate_handler,
    ),
    components(
        schemas(
            model::CalculateRequest,
            model::Scope1Request,
            model::EnergyCarriersRequest,
            model::FleetRequest,
            model::RefrigerantsRequest,
            model::Scope2Request,
            model::Scope3Request,
            model::TravelItemRequest,
            model::CalculateResponse,
            model::Scope1BreakdownResponse,
            model::Scope2BreakdownResponse,
            model::Scope3BreakdownResponse,
            model::ErrorResponse
        )
    ),
    tags(
        (name = "Footprint Webservice", description = "Endpoints for organizational GHG footprint calculations")
    ),
    info(
        title = "Footprint Webservice API",
        version = "0.1.0",
        description = "An API for computing organizational greenhouse-gas footprints (kg CO2e, GHG Protocol scopes 1/2/3).",
        license(
            name = "MIT/Apache-2.0",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
