use serde::Serialize;

/// JSON envelope returned by every `/api` endpoint except the kiosk scan.
///
/// ```json
/// { "success": true, "data": { "status": "present" }, "message": "Checked in successfully" }
/// ```
///
/// Errors carry `T::default()` as `data`.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}
