mod language;
mod transcript;
mod user;
mod user_video;
mod video;

pub use language::LanguageCode;
pub use transcript::{RawTranscriptEntry, TranscriptSegment};
pub use user::{UserAccount, UserId};
pub use user_video::{UserVideo, UserVideoId};
pub use video::{Video, VideoId};
