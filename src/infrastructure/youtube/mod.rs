mod metadata_client;
mod transcript_client;

pub use metadata_client::YouTubeMetadataClient;
pub use transcript_client::TimedTextClient;
