//! AWS Lambda HTTP endpoint
//!
//! POST a `ScenarioParams` JSON body (empty body uses defaults) and select
//! the report with `?report=<kind>`. Responds with the report as JSON.

use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, RequestPayloadExt, Response};
use log::{error, info};
use serde_json::json;

use strategy_projection::{build_report, ReportKind, ScenarioParams, StrategyProfile};

fn json_response(status: u16, body: String) -> Result<Response<Body>, Error> {
    let resp = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?;
    Ok(resp)
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let kind = match event.query_string_parameters_ref().and_then(|q| q.first("report")) {
        Some(raw) => match raw.parse::<ReportKind>() {
            Ok(kind) => kind,
            Err(e) => return json_response(400, json!({ "error": e.to_string() }).to_string()),
        },
        None => ReportKind::Projection,
    };

    let params = match event.payload::<ScenarioParams>() {
        Ok(params) => params.unwrap_or_default(),
        Err(e) => return json_response(400, json!({ "error": e.to_string() }).to_string()),
    };

    info!("Scenario {}: building {} report", params.scenario_id, kind);
    match build_report(kind, &params.to_assumptions(), &StrategyProfile::default()) {
        Ok(report) => json_response(200, serde_json::to_string(&report)?),
        Err(e) => {
            error!("Report {} failed: {}", kind, e);
            json_response(422, json!({ "error": e.to_string() }).to_string())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
