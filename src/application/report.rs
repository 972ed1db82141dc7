use actix_web::web::Data;
use actix_web::HttpResponse;
use chrono::{DateTime, Local};
use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::ScienceServerError;
use crate::science::{science_report, ScienceSettings};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SampleResponse {
    pub science_report: String,
    pub time_stamp: DateTime<Local>,
}

pub async fn sample(settings: Data<ScienceSettings>) -> Result<HttpResponse, ScienceServerError> {
    let science_yield = settings.science_yield()?;
    info!("Reporting science yield {science_yield}");

    Ok(HttpResponse::Ok().json(SampleResponse {
        science_report: science_report(science_yield),
        time_stamp: Local::now(),
    }))
}
