pub mod api_response;
pub mod rejection;
pub mod validated_json;
pub mod validated_path;
pub mod validated_query;

pub use api_response::ApiResponse;
pub use rejection::SchemaRejection;
pub use validated_json::ValidatedJson;
pub use validated_path::ValidatedPath;
pub use validated_query::ValidatedQuery;
