use crate::error::ClientError;
use serde::Deserialize;

/// The envelope the server wraps around every payload.
///
/// Success and failure share one shape on the wire: `data` is present when
/// `success` is true, `message` when it is false.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub count: Option<usize>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn into_result(self, status: u16) -> Result<T, ClientError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(ClientError::Deserialization(
                "successful response carried no data".to_string(),
            )),
            (false, _) => Err(ClientError::Api {
                status,
                message: self.message.unwrap_or_else(|| "unknown error".to_string()),
            }),
        }
    }
}

/// `GET /api/health` answers without the envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_yields_data() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success": true, "data": [1, 2], "count": 2}"#).unwrap();
        assert_eq!(envelope.count, Some(2));
        assert_eq!(envelope.into_result(200).unwrap(), vec![1, 2]);
    }

    #[test]
    fn failure_carries_status_and_message() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success": false, "message": "Index not found: X"}"#).unwrap();
        match envelope.into_result(404) {
            Err(ClientError::Api { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Index not found: X");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Detail {
        rank: usize,
    }

    #[test]
    fn payload_types_need_no_default() {
        let ok: Envelope<Detail> =
            serde_json::from_str(r#"{"success": true, "data": {"rank": 1}}"#).unwrap();
        assert_eq!(ok.into_result(200).unwrap(), Detail { rank: 1 });

        let failed: Envelope<Detail> =
            serde_json::from_str(r#"{"success": false, "message": "nope"}"#).unwrap();
        assert!(failed.data.is_none());
        assert!(failed.count.is_none());
    }

    #[test]
    fn success_without_data_is_a_decoding_error() {
        let envelope: Envelope<u32> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(
            envelope.into_result(200),
            Err(ClientError::Deserialization(_))
        ));
    }
}
