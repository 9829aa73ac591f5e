use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Reference to a file hosted on the remote media store.
/// Only the public URL and the identifier needed to delete it are kept.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Hash, Clone)]
pub struct Media {
    url: String,
    remote_id: String,
}

impl Media {
    pub fn new(url: String, remote_id: String) -> Self {
        Self { url, remote_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_media() {
        let media = Media::new(
            "https://media.host/ngo/news/1.png".to_owned(),
            "ngo/news/1".to_owned(),
        );

        let json = serde_json::to_string(&media).unwrap();
        assert_eq!(
            r#"{"url":"https://media.host/ngo/news/1.png","remote_id":"ngo/news/1"}"#,
            json
        );
    }
}
