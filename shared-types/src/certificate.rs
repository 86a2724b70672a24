use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct Certificate {
    pub id: i64,
    pub image_url: String,
    pub course_name: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateCertificateRequest {
    pub image_url: String,
    pub course_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CertificatesResponse {
    pub certificates: Vec<Certificate>,
}
