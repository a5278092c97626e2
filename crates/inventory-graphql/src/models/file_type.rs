use serde::{Deserialize, Serialize};

/// File category tag, mirroring the API's closed `FileType` enum.
///
/// The set is closed: decoding an unrecognized token is an error. Input
/// records store and serialize the tag but never inspect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileType {
    File,
    Image,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_tokens() {
        assert_eq!(serde_json::to_value(FileType::File).unwrap(), json!("FILE"));
        assert_eq!(
            serde_json::to_value(FileType::Image).unwrap(),
            json!("IMAGE")
        );

        let decoded: FileType = serde_json::from_value(json!("IMAGE")).unwrap();
        assert_eq!(decoded, FileType::Image);
    }

    #[test]
    fn test_rejects_unknown_token() {
        let result: Result<FileType, _> = serde_json::from_value(json!("VIDEO"));
        assert!(result.is_err());
    }
}
