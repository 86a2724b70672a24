use actix_web::HttpRequest;

use crate::handlers::error::ApiError;

pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Password prompt in front of destructive endpoints. This keeps a stray
/// click from wiping data; it is not authentication.
#[derive(Debug, Clone, Default)]
pub struct AdminGate {
    password: Option<String>,
}

impl AdminGate {
    pub fn new(password: Option<String>) -> Self {
        Self {
            password: password.filter(|p| !p.is_empty()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.password.is_some()
    }

    pub fn check(&self, req: &HttpRequest) -> Result<(), ApiError> {
        let Some(expected) = &self.password else {
            return Ok(());
        };

        let supplied = req
            .headers()
            .get(ADMIN_PASSWORD_HEADER)
            .and_then(|value| value.to_str().ok());

        match supplied {
            Some(supplied) if supplied == expected => Ok(()),
            _ => Err(ApiError::Unauthorized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_open_when_no_password() {
        let gate = AdminGate::new(None);
        let req = TestRequest::default().to_http_request();

        assert!(!gate.is_enabled());
        assert!(gate.check(&req).is_ok());
    }

    #[test]
    fn test_empty_password_disables_gate() {
        assert!(!AdminGate::new(Some(String::new())).is_enabled());
    }

    #[test]
    fn test_requires_matching_header() {
        let gate = AdminGate::new(Some("12345".to_string()));

        let missing = TestRequest::default().to_http_request();
        assert!(matches!(gate.check(&missing), Err(ApiError::Unauthorized)));

        let wrong = TestRequest::default()
            .insert_header((ADMIN_PASSWORD_HEADER, "54321"))
            .to_http_request();
        assert!(matches!(gate.check(&wrong), Err(ApiError::Unauthorized)));

        let right = TestRequest::default()
            .insert_header((ADMIN_PASSWORD_HEADER, "12345"))
            .to_http_request();
        assert!(gate.check(&right).is_ok());
    }
}
