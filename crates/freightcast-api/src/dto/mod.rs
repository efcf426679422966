mod request;
mod response;

pub use request::{AddRecordRequest, PredictRequest, PriceInput, UpdateRecordRequest};
pub use response::{
    CitiesResponse, CityInfo, DeletedResponse, HealthResponse, RecordResponse, TodayResponse,
};
